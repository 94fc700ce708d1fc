//! Greenwich Mean Sidereal Time from a linear-plus-quadratic polynomial in days since J2000.0.
//!
//! ```text
//! D = 367·Y − ⌊7·(Y + ⌊(M+9)/12⌋)/4⌋ + ⌊275·M/9⌋ + Day − 730531.5
//! T = D / 36525
//! GMST(°) = 280.46061837 + 360.98564736629·D + 0.000388·T²
//! ```
//!
//! The day count is valid for March 1900 through February 2100; outside
//! that span it drifts by a day per skipped Gregorian leap year.

use csillesz_core::angle::normalize_zero_bounded;
use csillesz_core::constants::{
    DAYS_PER_JULIAN_CENTURY, DEGREES_PER_HOUR, DEGREES_PER_TURN, GMST_DEG_AT_J2000,
    GMST_DEG_PER_CENTURY_SQUARED, GMST_DEG_PER_DAY, J2000_DAY_OFFSET,
};

use crate::calendar::CivilDate;

/// Days from J2000.0 (2000-01-01 12:00 UT) to 0h UT on `date`.
///
/// ```
/// use csillesz_time::calendar::CivilDate;
/// use csillesz_time::sidereal::days_since_j2000;
///
/// let d = days_since_j2000(&CivilDate::new(2000, 1, 1).unwrap());
/// assert_eq!(d, -0.5);
/// ```
pub fn days_since_j2000(date: &CivilDate) -> f64 {
    let y = i64::from(date.year());
    let m = i64::from(date.month());
    let day = i64::from(date.day());

    let whole = 367 * y - (7 * (y + (m + 9) / 12)).div_euclid(4) + (275 * m) / 9 + day;
    whole as f64 - J2000_DAY_OFFSET
}

/// GMST in hours, `[0, 24)`, for a day count from J2000.0.
///
/// ```
/// use csillesz_time::sidereal::gmst_hours_at;
///
/// // At the epoch itself the polynomial reduces to its constant term.
/// assert!((gmst_hours_at(0.0) - 280.46061837 / 15.0).abs() < 1e-12);
/// ```
pub fn gmst_hours_at(days_since_j2000: f64) -> f64 {
    let t = days_since_j2000 / DAYS_PER_JULIAN_CENTURY;
    let degrees = GMST_DEG_AT_J2000
        + GMST_DEG_PER_DAY * days_since_j2000
        + GMST_DEG_PER_CENTURY_SQUARED * t * t;

    normalize_zero_bounded(degrees, DEGREES_PER_TURN) / DEGREES_PER_HOUR
}

/// GMST in hours at 0h UT on `date`.
pub fn gmst_at_midnight(date: &CivilDate) -> f64 {
    gmst_hours_at(days_since_j2000(date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use csillesz_core::test_helpers::assert_close;
    use csillesz_core::HmsBreakdown;

    fn date(y: i32, m: u8, d: u8) -> CivilDate {
        CivilDate::new(y, m, d).unwrap()
    }

    #[test]
    fn epoch_fixture() {
        let gmst = gmst_hours_at(0.0);
        assert_close(gmst, 18.697_374_558, 1e-9, "GMST at J2000.0");
        assert_eq!(HmsBreakdown::from_hours(gmst).hm(), (18, 41));
    }

    #[test]
    fn midnight_2000_01_01() {
        let gmst = gmst_at_midnight(&date(2000, 1, 1));
        assert_close(gmst, 6.664_519_645_8, 1e-9, "GMST 2000-01-01 0h");
    }

    #[test]
    fn day_count_steps_by_one() {
        let a = days_since_j2000(&date(2024, 2, 28));
        let b = days_since_j2000(&date(2024, 2, 29));
        let c = days_since_j2000(&date(2024, 3, 1));
        assert_eq!(b - a, 1.0);
        assert_eq!(c - b, 1.0);
        assert_eq!(days_since_j2000(&date(2000, 1, 2)), 0.5);
        assert_eq!(days_since_j2000(&date(1999, 12, 31)), -1.5);
    }

    #[test]
    fn gmst_advances_about_four_minutes_per_day() {
        let a = gmst_at_midnight(&date(2023, 6, 10));
        let b = gmst_at_midnight(&date(2023, 6, 11));
        let step = (b - a).rem_euclid(24.0);
        assert_close(step, 0.065_709_824_4, 1e-8, "daily GMST step");
    }

    #[test]
    fn output_range() {
        for d in [-40_000.0, -1.0, 0.3, 12_345.6, 90_000.0] {
            let g = gmst_hours_at(d);
            assert!((0.0..24.0).contains(&g), "{} -> {}", d, g);
        }
    }
}
