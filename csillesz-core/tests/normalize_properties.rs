use csillesz_core::angle::{normalize_symmetric_180, normalize_symmetric_90, normalize_zero_bounded};
use csillesz_core::test_helpers::assert_close_cyclic;
use proptest::prelude::*;

proptest! {
    #[test]
    fn zero_bounded_360_stays_in_range(x in -1.0e6f64..1.0e6) {
        let r = normalize_zero_bounded(x, 360.0);
        prop_assert!((0.0..360.0).contains(&r), "{} -> {}", x, r);
    }

    #[test]
    fn zero_bounded_24_stays_in_range(x in -1.0e5f64..1.0e5) {
        let r = normalize_zero_bounded(x, 24.0);
        prop_assert!((0.0..24.0).contains(&r), "{} -> {}", x, r);
    }

    #[test]
    fn zero_bounded_stays_in_range_for_any_finite(
        x in any::<f64>().prop_filter("finite", |v| v.is_finite())
    ) {
        let deg = normalize_zero_bounded(x, 360.0);
        let hrs = normalize_zero_bounded(x, 24.0);
        prop_assert!((0.0..360.0).contains(&deg), "{} -> {}", x, deg);
        prop_assert!((0.0..24.0).contains(&hrs), "{} -> {}", x, hrs);
    }

    #[test]
    fn symmetric_stays_in_range_for_any_finite(
        x in any::<f64>().prop_filter("finite", |v| v.is_finite())
    ) {
        let r90 = normalize_symmetric_90(x);
        let r180 = normalize_symmetric_180(x);
        prop_assert!((-90.0..=90.0).contains(&r90), "{} -> {}", x, r90);
        prop_assert!((-180.0..180.0).contains(&r180), "{} -> {}", x, r180);
    }

    #[test]
    fn zero_bounded_is_periodic_on_quarter_degrees(q in -400_000i64..400_000) {
        // Quarter-degree steps are exact in binary, so the equality is exact.
        let x = q as f64 * 0.25;
        prop_assert_eq!(
            normalize_zero_bounded(x + 360.0, 360.0),
            normalize_zero_bounded(x, 360.0)
        );
    }

    #[test]
    fn zero_bounded_is_periodic_within_tolerance(x in -1.0e4f64..1.0e4) {
        let a = normalize_zero_bounded(x + 360.0, 360.0);
        let b = normalize_zero_bounded(x, 360.0);
        assert_close_cyclic(a, b, 360.0, 1e-9, "periodicity");
    }

    #[test]
    fn symmetric_90_stays_in_range(x in -1.0e6f64..1.0e6) {
        let r = normalize_symmetric_90(x);
        prop_assert!((-90.0..=90.0).contains(&r), "{} -> {}", x, r);
    }

    #[test]
    fn symmetric_180_stays_in_range(x in -1.0e6f64..1.0e6) {
        let r = normalize_symmetric_180(x);
        prop_assert!((-180.0..180.0).contains(&r), "{} -> {}", x, r);
    }

    #[test]
    fn symmetric_90_is_identity_inside_range(x in -90.0f64..=90.0) {
        prop_assert_eq!(normalize_symmetric_90(x), x);
    }

    #[test]
    fn symmetric_90_preserves_sine(x in -359.0f64..359.0) {
        // Reflection across the pole keeps sin(x); shifting by a turn too.
        let r = normalize_symmetric_90(x);
        prop_assert!((r.to_radians().sin() - x.to_radians().sin()).abs() < 1e-12);
    }
}
