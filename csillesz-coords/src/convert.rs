//! The six conversions between horizontal, equatorial I and equatorial II coordinates.
//!
//! Each conversion normalizes its inputs (latitude into `[-180, 180)`, altitude
//! and declination into `[-90, 90]`, azimuth into `[0, 360)`, hours into
//! `[0, 24)`), applies the spherical-triangle identities and normalizes the
//! outputs the same way.
//!
//! The sine identities
//!
//! ```text
//! sin δ = sin m sin φ + cos m cos φ cos A        sin H = -sin A cos m / cos δ
//! sin m = sin δ sin φ + cos δ cos φ cos H        sin A = -sin H cos δ / cos m
//! ```
//!
//! leave `H` and `A` ambiguous between two quadrants, so each angle is taken
//! with `atan2` from its sine together with the matching cosine identity:
//!
//! ```text
//! cos δ cos H = cos φ sin m - sin φ cos m cos A
//! cos m cos A = cos φ sin δ - sin φ cos δ cos H
//! ```
//!
//! A conversion that would divide by `cos δ` or `cos m` at a pole fails with a
//! [`MathErrorKind::DivisionByZero`] domain error.

use csillesz_core::angle::{normalize_symmetric_180, normalize_symmetric_90, normalize_zero_bounded};
use csillesz_core::constants::{DEGREES_PER_HOUR, DEGREES_PER_TURN, HOURS_PER_DAY, TRIG_EPSILON};
use csillesz_core::errors::ensure_finite;
use csillesz_core::{AstroError, AstroResult, MathErrorKind};

use crate::systems::{
    HorizontalCoord, HorizontalToEquatorialI, HorizontalToEquatorialII,
    HourAngleAndRightAscension, MeridianInput,
};

fn hours(x: f64) -> f64 {
    normalize_zero_bounded(x, HOURS_PER_DAY)
}

fn nonzero_cosine(operation: &str, quantity: &str, cosine: f64) -> AstroResult<f64> {
    if cosine.abs() < TRIG_EPSILON {
        return Err(AstroError::domain(
            operation,
            MathErrorKind::DivisionByZero,
            &format!("cos({}) is zero", quantity),
        ));
    }
    Ok(cosine)
}

fn ensure_finite_opt(operation: &str, name: &str, value: Option<f64>) -> AstroResult<Option<f64>> {
    value.map(|v| ensure_finite(operation, name, v)).transpose()
}

fn ensure_finite_meridian(operation: &str, meridian: MeridianInput) -> AstroResult<()> {
    let name = match meridian {
        MeridianInput::RightAscension(_) => "right ascension",
        MeridianInput::HourAngle(_) => "hour angle",
    };
    ensure_finite(operation, name, meridian.value()).map(|_| ())
}

/// Horizontal to equatorial I: declination and local hour angle.
///
/// When `local_sidereal_time` is given the right ascension `α = S - H` is
/// reported as well.
///
/// ```
/// use csillesz_coords::convert::horizontal_to_equatorial_i;
///
/// // On the equator, a star setting due west has hour angle 6h.
/// let eq = horizontal_to_equatorial_i(0.0, 0.0, 270.0, Some(8.0)).unwrap();
/// assert!(eq.declination.abs() < 1e-9);
/// assert!((eq.hour_angle - 6.0).abs() < 1e-9);
/// assert!((eq.right_ascension.unwrap() - 2.0).abs() < 1e-9);
/// ```
pub fn horizontal_to_equatorial_i(
    latitude: f64,
    altitude: f64,
    azimuth: f64,
    local_sidereal_time: Option<f64>,
) -> AstroResult<HorizontalToEquatorialI> {
    const OP: &str = "horizontal_to_equatorial_i";
    ensure_finite(OP, "latitude", latitude)?;
    ensure_finite(OP, "altitude", altitude)?;
    ensure_finite(OP, "azimuth", azimuth)?;
    let local_sidereal_time = ensure_finite_opt(OP, "local sidereal time", local_sidereal_time)?;

    let (sin_lat, cos_lat) = normalize_symmetric_180(latitude).to_radians().sin_cos();
    let (sin_alt, cos_alt) = normalize_symmetric_90(altitude).to_radians().sin_cos();
    let (sin_az, cos_az) = normalize_zero_bounded(azimuth, DEGREES_PER_TURN)
        .to_radians()
        .sin_cos();

    let sin_dec = sin_alt * sin_lat + cos_alt * cos_lat * cos_az;
    // cos δ · sin H and cos δ · cos H
    let y = -sin_az * cos_alt;
    let x = cos_lat * sin_alt - sin_lat * cos_alt * cos_az;
    let cos_dec = nonzero_cosine(OP, "declination", x.hypot(y))?;

    let declination = normalize_symmetric_90(sin_dec.atan2(cos_dec).to_degrees());
    let hour_angle = hours(y.atan2(x).to_degrees() / DEGREES_PER_HOUR);
    let right_ascension = local_sidereal_time.map(|lst| hours(hours(lst) - hour_angle));

    Ok(HorizontalToEquatorialI {
        declination,
        hour_angle,
        right_ascension,
    })
}

/// Horizontal to equatorial II: declination and the local sidereal time `S = H + α`.
///
/// Runs [`horizontal_to_equatorial_i`] with the given sidereal time and adds
/// the resulting hour angle and right ascension back together.
pub fn horizontal_to_equatorial_ii(
    latitude: f64,
    altitude: f64,
    azimuth: f64,
    local_sidereal_time: f64,
) -> AstroResult<HorizontalToEquatorialII> {
    let eq = horizontal_to_equatorial_i(latitude, altitude, azimuth, Some(local_sidereal_time))?;
    let right_ascension = eq
        .right_ascension
        .unwrap_or_else(|| hours(local_sidereal_time - eq.hour_angle));

    Ok(HorizontalToEquatorialII {
        declination: eq.declination,
        local_sidereal_time: hours(eq.hour_angle + right_ascension),
    })
}

/// Equatorial I to horizontal, with the hour angle or right ascension given as options.
///
/// Exactly one of `right_ascension` and `hour_angle` must be `Some`. With a
/// right ascension the hour angle is `H = S - α`.
pub fn equatorial_i_to_horizontal(
    latitude: f64,
    right_ascension: Option<f64>,
    declination: f64,
    local_sidereal_time: f64,
    hour_angle: Option<f64>,
) -> AstroResult<HorizontalCoord> {
    let meridian = MeridianInput::from_options(right_ascension, hour_angle)?;
    equatorial_to_horizontal(latitude, declination, meridian, local_sidereal_time)
}

/// Equatorial to horizontal for an already-resolved [`MeridianInput`].
///
/// `local_sidereal_time` is only consulted for [`MeridianInput::RightAscension`].
pub fn equatorial_to_horizontal(
    latitude: f64,
    declination: f64,
    meridian: MeridianInput,
    local_sidereal_time: f64,
) -> AstroResult<HorizontalCoord> {
    const OP: &str = "equatorial_i_to_horizontal";
    ensure_finite(OP, "latitude", latitude)?;
    ensure_finite(OP, "declination", declination)?;
    ensure_finite(OP, "local sidereal time", local_sidereal_time)?;
    ensure_finite_meridian(OP, meridian)?;

    let hour_angle = meridian.resolve(local_sidereal_time).hour_angle;

    let (sin_lat, cos_lat) = normalize_symmetric_180(latitude).to_radians().sin_cos();
    let (sin_dec, cos_dec) = normalize_symmetric_90(declination).to_radians().sin_cos();
    let (sin_ha, cos_ha) = (hour_angle * DEGREES_PER_HOUR).to_radians().sin_cos();

    let sin_alt = sin_dec * sin_lat + cos_dec * cos_lat * cos_ha;
    // cos m · sin A and cos m · cos A
    let y = -sin_ha * cos_dec;
    let x = cos_lat * sin_dec - sin_lat * cos_dec * cos_ha;
    let cos_alt = nonzero_cosine(OP, "altitude", x.hypot(y))?;

    Ok(HorizontalCoord {
        altitude: normalize_symmetric_90(sin_alt.atan2(cos_alt).to_degrees()),
        azimuth: normalize_zero_bounded(y.atan2(x).to_degrees(), DEGREES_PER_TURN),
    })
}

/// Equatorial I to equatorial II: the local sidereal time `S = H + α`, in `[0, 24)`.
pub fn equatorial_i_to_equatorial_ii(right_ascension: f64, hour_angle: f64) -> AstroResult<f64> {
    const OP: &str = "equatorial_i_to_equatorial_ii";
    ensure_finite(OP, "right ascension", right_ascension)?;
    ensure_finite(OP, "hour angle", hour_angle)?;

    Ok(hours(hours(hour_angle) + hours(right_ascension)))
}

/// Equatorial II to equatorial I: completes the hour angle / right ascension pair.
///
/// Exactly one of `right_ascension` and `hour_angle` must be `Some`; supplying
/// both or neither is an [`AstroError::InvalidArgumentCombination`].
///
/// ```
/// use csillesz_coords::convert::equatorial_ii_to_equatorial_i;
///
/// let pair = equatorial_ii_to_equatorial_i(1.0, Some(22.0), None).unwrap();
/// assert_eq!(pair.hour_angle, 3.0);
/// assert!(equatorial_ii_to_equatorial_i(1.0, Some(22.0), Some(3.0)).is_err());
/// ```
pub fn equatorial_ii_to_equatorial_i(
    local_sidereal_time: f64,
    right_ascension: Option<f64>,
    hour_angle: Option<f64>,
) -> AstroResult<HourAngleAndRightAscension> {
    let meridian = MeridianInput::from_options(right_ascension, hour_angle)?;
    resolve_meridian(local_sidereal_time, meridian)
}

/// [`equatorial_ii_to_equatorial_i`] for an already-resolved [`MeridianInput`].
pub fn resolve_meridian(
    local_sidereal_time: f64,
    meridian: MeridianInput,
) -> AstroResult<HourAngleAndRightAscension> {
    const OP: &str = "equatorial_ii_to_equatorial_i";
    ensure_finite(OP, "local sidereal time", local_sidereal_time)?;
    ensure_finite_meridian(OP, meridian)?;

    Ok(meridian.resolve(local_sidereal_time))
}

/// Equatorial II to horizontal.
///
/// The missing member of the hour angle / right ascension pair is derived as
/// in [`equatorial_ii_to_equatorial_i`], then the hour angle goes through
/// [`equatorial_to_horizontal`].
pub fn equatorial_ii_to_horizontal(
    latitude: f64,
    local_sidereal_time: f64,
    hour_angle: Option<f64>,
    right_ascension: Option<f64>,
    declination: f64,
) -> AstroResult<HorizontalCoord> {
    let pair = equatorial_ii_to_equatorial_i(local_sidereal_time, right_ascension, hour_angle)?;
    equatorial_to_horizontal(
        latitude,
        declination,
        MeridianInput::HourAngle(pair.hour_angle),
        local_sidereal_time,
    )
}
