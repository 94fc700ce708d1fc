#[inline]
pub fn trunc(x: f64) -> f64 {
    libm::trunc(x)
}

/// Remainder of `x / y` with the sign of `x`, exact for all finite inputs.
#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

/// Central angle between two points on a sphere, via the haversine formula.
///
/// All arguments are radians. Returns radians in `[0, π]`.
///
/// ```text
/// a = sin²(Δφ/2) + cos φ1 · cos φ2 · sin²(Δλ/2)
/// c = 2 · atan2(√a, √(1 − a))
/// ```
#[inline]
pub fn haversine_central_angle(lat1: f64, lat2: f64, delta_lon: f64) -> f64 {
    let half_dlat = libm::sin((lat2 - lat1) / 2.0);
    let half_dlon = libm::sin(delta_lon / 2.0);
    let a = half_dlat * half_dlat + libm::cos(lat1) * libm::cos(lat2) * half_dlon * half_dlon;
    // Rounding can push `a` a hair past 1 for antipodal points.
    let a = a.clamp(0.0, 1.0);

    2.0 * libm::atan2(libm::sqrt(a), libm::sqrt(1.0 - a))
}
