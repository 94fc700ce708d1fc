/// Asserts `|a - b| <= tol`.
#[track_caller]
pub fn assert_close(a: f64, b: f64, tol: f64, ctx: &str) {
    assert!(
        a.is_finite() && b.is_finite(),
        "non-finite value in {}: {} vs {}",
        ctx,
        a,
        b
    );
    assert!(
        (a - b).abs() <= tol,
        "{}: {} vs {} differ by {:e} (tolerance {:e})",
        ctx,
        a,
        b,
        (a - b).abs(),
        tol
    );
}

/// Asserts two values on a circle of circumference `period` are within `tol`,
/// treating `0` and `period` as the same point.
#[track_caller]
pub fn assert_close_cyclic(a: f64, b: f64, period: f64, tol: f64, ctx: &str) {
    let d = (a - b).rem_euclid(period);
    let d = d.min(period - d);
    assert!(
        d <= tol,
        "{}: {} vs {} differ by {:e} on a {} cycle (tolerance {:e})",
        ctx,
        a,
        b,
        d,
        period,
        tol
    );
}
