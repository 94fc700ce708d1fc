/// Earth radius used by the haversine distance, in meters.
///
/// Equatorial value rounded to the kilometre; distances are a spherical
/// approximation, not an ellipsoidal geodesic.
pub const EARTH_RADIUS_M: f64 = 6_378_000.0;

/// Sidereal time gained per unit of solar (universal) time.
#[allow(clippy::excessive_precision)]
pub const SIDEREAL_PER_SOLAR: f64 = 1.002737909350795;

/// Offset from the day count of the civil-date formula to days since J2000.0.
pub const J2000_DAY_OFFSET: f64 = 730_531.5;

pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

/// GMST polynomial coefficients in degrees: `c0 + c1·D + c2·T²`.
pub const GMST_DEG_AT_J2000: f64 = 280.460_618_37;
#[allow(clippy::excessive_precision)]
pub const GMST_DEG_PER_DAY: f64 = 360.985_647_366_29;
pub const GMST_DEG_PER_CENTURY_SQUARED: f64 = 0.000_388;

pub const DEGREES_PER_HOUR: f64 = 15.0;

pub const HOURS_PER_DAY: f64 = 24.0;

pub const DEGREES_PER_TURN: f64 = 360.0;

pub const MINUTES_PER_HOUR: f64 = 60.0;

/// Magnitude below which a cosine divisor is treated as zero.
///
/// `cos(90°)` evaluates to about 6e-17, so an exact comparison never fires.
pub const TRIG_EPSILON: f64 = 1e-12;
