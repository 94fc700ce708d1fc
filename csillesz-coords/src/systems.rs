//! Value types for the three coordinate systems and conversion results.

use core::fmt;

use csillesz_core::angle::normalize_zero_bounded;
use csillesz_core::constants::HOURS_PER_DAY;
use csillesz_core::{AstroError, AstroResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Altitude and azimuth in degrees, azimuth measured from north through east.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HorizontalCoord {
    pub altitude: f64,
    pub azimuth: f64,
}

/// Declination in degrees and local hour angle in hours.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EquatorialI {
    pub declination: f64,
    pub hour_angle: f64,
}

/// Declination in degrees and right ascension in hours.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EquatorialII {
    pub declination: f64,
    pub right_ascension: f64,
}

/// Result of [`horizontal_to_equatorial_i`](crate::convert::horizontal_to_equatorial_i).
///
/// `right_ascension` is present only when a local sidereal time was supplied.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HorizontalToEquatorialI {
    pub declination: f64,
    pub hour_angle: f64,
    pub right_ascension: Option<f64>,
}

impl HorizontalToEquatorialI {
    pub fn equatorial_i(&self) -> EquatorialI {
        EquatorialI {
            declination: self.declination,
            hour_angle: self.hour_angle,
        }
    }

    pub fn equatorial_ii(&self) -> Option<EquatorialII> {
        self.right_ascension.map(|right_ascension| EquatorialII {
            declination: self.declination,
            right_ascension,
        })
    }
}

/// Result of [`horizontal_to_equatorial_ii`](crate::convert::horizontal_to_equatorial_ii).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HorizontalToEquatorialII {
    pub declination: f64,
    pub local_sidereal_time: f64,
}

/// Both members of the hour angle / right ascension pair, in hours.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HourAngleAndRightAscension {
    pub hour_angle: f64,
    pub right_ascension: f64,
}

/// The one member of the hour angle / right ascension pair a caller supplies.
///
/// The other is derived from the local sidereal time `S` as `H = S - α` or
/// `α = S - H`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MeridianInput {
    RightAscension(f64),
    HourAngle(f64),
}

impl MeridianInput {
    /// Builds the input from two optional values, exactly one of which must be set.
    ///
    /// ```
    /// use csillesz_coords::MeridianInput;
    ///
    /// assert_eq!(
    ///     MeridianInput::from_options(Some(5.5), None).unwrap(),
    ///     MeridianInput::RightAscension(5.5)
    /// );
    /// assert!(MeridianInput::from_options(Some(5.5), Some(1.0)).is_err());
    /// assert!(MeridianInput::from_options(None, None).is_err());
    /// ```
    pub fn from_options(
        right_ascension: Option<f64>,
        hour_angle: Option<f64>,
    ) -> AstroResult<Self> {
        match (right_ascension, hour_angle) {
            (Some(ra), None) => Ok(Self::RightAscension(ra)),
            (None, Some(ha)) => Ok(Self::HourAngle(ha)),
            (Some(_), Some(_)) => Err(AstroError::invalid_combination(
                "meridian_input",
                "both right ascension and hour angle were given; supply exactly one",
            )),
            (None, None) => Err(AstroError::invalid_combination(
                "meridian_input",
                "neither right ascension nor hour angle was given; supply exactly one",
            )),
        }
    }

    pub fn value(self) -> f64 {
        match self {
            Self::RightAscension(v) | Self::HourAngle(v) => v,
        }
    }

    /// Completes the pair using the local sidereal time. Both results lie in `[0, 24)`.
    pub fn resolve(self, local_sidereal_time: f64) -> HourAngleAndRightAscension {
        let lst = normalize_zero_bounded(local_sidereal_time, HOURS_PER_DAY);
        match self {
            Self::RightAscension(ra) => {
                let ra = normalize_zero_bounded(ra, HOURS_PER_DAY);
                HourAngleAndRightAscension {
                    hour_angle: normalize_zero_bounded(lst - ra, HOURS_PER_DAY),
                    right_ascension: ra,
                }
            }
            Self::HourAngle(ha) => {
                let ha = normalize_zero_bounded(ha, HOURS_PER_DAY);
                HourAngleAndRightAscension {
                    hour_angle: ha,
                    right_ascension: normalize_zero_bounded(lst - ha, HOURS_PER_DAY),
                }
            }
        }
    }
}

impl fmt::Display for MeridianInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RightAscension(v) => write!(f, "RA {}h", v),
            Self::HourAngle(v) => write!(f, "HA {}h", v),
        }
    }
}
