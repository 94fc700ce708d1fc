//! Range reduction for angles and hour quantities.
//!
//! Each quantity in the calculator has a documented range, and every value is
//! reduced into it before it enters a formula and again before it is returned:
//!
//! | Quantity | Range | Function |
//! |----------|-------|----------|
//! | Azimuth, longitude | [0, 360) | [`normalize_zero_bounded`] with 360 |
//! | Hour angle, right ascension, sidereal time | [0, 24) | [`normalize_zero_bounded`] with 24 |
//! | Declination, altitude | [-90, +90] | [`normalize_symmetric_90`] |
//! | Observer latitude | [-180, +180) | [`normalize_symmetric_180`] |
//!
//! # Not a plain modulo
//!
//! The two symmetric reducers *reflect* rather than wrap. Walking north past
//! the pole puts you on the far meridian heading south, so 100° of declination
//! becomes 80°, not -260°. The branch boundaries (which side of 90, 180, 270
//! and 360 is inclusive) decide what happens at exact multiples and are part
//! of the contract.
//!
//! # Truncating division
//!
//! [`normalize_zero_bounded`] takes the remainder of division truncated toward
//! zero (`fmod`), not floor. For non-negative input this is the usual
//! remainder. For negative input it lies in `(-bound, 0]` and is shifted up by
//! one bound, except an exact multiple, which maps to 0. `fmod` is exact, so
//! this holds for every finite input, however large.

use crate::constants::DEGREES_PER_TURN;
use crate::math::fmod;

/// Reduces `x` into `[0, bound)` using truncating division.
///
/// `bound` must be positive and finite.
///
/// # Examples
///
/// ```
/// use csillesz_core::angle::normalize_zero_bounded;
///
/// assert_eq!(normalize_zero_bounded(725.0, 360.0), 5.0);
/// assert_eq!(normalize_zero_bounded(-10.0, 360.0), 350.0);
/// assert_eq!(normalize_zero_bounded(-720.0, 360.0), 0.0);
/// assert_eq!(normalize_zero_bounded(25.5, 24.0), 1.5);
/// ```
#[inline]
pub fn normalize_zero_bounded(x: f64, bound: f64) -> f64 {
    let mut r = fmod(x, bound);
    if r == 0.0 {
        return 0.0;
    }
    if r < 0.0 {
        r += bound;
    }
    // A tiny negative remainder plus bound rounds to bound.
    if r >= bound {
        return 0.0;
    }
    r
}

/// Reflects an angle in degrees into `[-90, +90]`.
///
/// Values outside `(-360, 360)` are first reduced into `[0, 360)`. Then:
///
/// - `(90, 270]` reflects across the pole: `x -> 180 - x`
/// - `(270, 360]` shifts down a turn: `x -> x - 360`
/// - `[-270, -90)` reflects across the pole: `x -> -(x + 180)`
/// - `[-360, -270)` shifts up a turn: `x -> x + 360`
///
/// # Examples
///
/// ```
/// use csillesz_core::angle::normalize_symmetric_90;
///
/// assert_eq!(normalize_symmetric_90(45.0), 45.0);
/// assert_eq!(normalize_symmetric_90(120.0), 60.0);
/// assert_eq!(normalize_symmetric_90(300.0), -60.0);
/// assert_eq!(normalize_symmetric_90(-100.0), -80.0);
/// assert_eq!(normalize_symmetric_90(-300.0), 60.0);
/// ```
#[inline]
pub fn normalize_symmetric_90(x: f64) -> f64 {
    let x = if x <= -DEGREES_PER_TURN || x >= DEGREES_PER_TURN {
        normalize_zero_bounded(x, DEGREES_PER_TURN)
    } else {
        x
    };

    if x < 0.0 {
        if (-270.0..-90.0).contains(&x) {
            -(x + 180.0)
        } else if x < -270.0 {
            x + DEGREES_PER_TURN
        } else {
            x
        }
    } else if x > 90.0 && x <= 270.0 {
        -(x - 180.0)
    } else if x > 270.0 {
        x - DEGREES_PER_TURN
    } else {
        x
    }
}

/// Reflects an angle in degrees into `[-180, +180)`.
///
/// Values outside `(-360, 360)` are first reduced into `[0, 360)`. Values at
/// or above 180 reflect as `180 - x`; values below -180 reflect as `-180 - x`.
///
/// # Examples
///
/// ```
/// use csillesz_core::angle::normalize_symmetric_180;
///
/// assert_eq!(normalize_symmetric_180(47.5), 47.5);
/// assert_eq!(normalize_symmetric_180(200.0), -20.0);
/// assert_eq!(normalize_symmetric_180(-200.0), 20.0);
/// assert_eq!(normalize_symmetric_180(-180.0), -180.0);
/// ```
#[inline]
pub fn normalize_symmetric_180(x: f64) -> f64 {
    let x = if x <= -DEGREES_PER_TURN || x >= DEGREES_PER_TURN {
        normalize_zero_bounded(x, DEGREES_PER_TURN)
    } else {
        x
    };

    if x >= 180.0 {
        180.0 - x
    } else if x < -180.0 {
        -180.0 - x
    } else {
        x
    }
}
