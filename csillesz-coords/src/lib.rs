//! Coordinate conversions and geographic distances.
//!
//! Three sky coordinate systems are supported, all in degrees and decimal hours:
//!
//! | System | Components | Depends on |
//! |--------|------------|------------|
//! | Horizontal | altitude (°), azimuth (°, from north through east) | observer latitude |
//! | Equatorial I | declination (°), local hour angle (h) | observer latitude |
//! | Equatorial II | declination (°), right ascension (h) | nothing |
//!
//! Hour angle and right ascension are tied together by the local sidereal time,
//! `S = H + α`, so wherever both could be supplied exactly one must be. That
//! choice is the [`MeridianInput`] enum.
//!
//! ```
//! use csillesz_coords::convert::equatorial_i_to_equatorial_ii;
//!
//! // Hour angle 3h, right ascension 22h: sidereal time wraps to 1h.
//! let lst = equatorial_i_to_equatorial_ii(22.0, 3.0).unwrap();
//! assert_eq!(lst, 1.0);
//! ```
//!
//! [`distance`] holds the haversine distance and [`GeoDistance`], which also
//! resolves city names through an injected [`CityTable`].

pub mod cities;
pub mod convert;
pub mod distance;
pub mod systems;

pub use cities::CityTable;
pub use distance::{distance, CityDistance, GeoDistance};
pub use systems::{
    EquatorialI, EquatorialII, HorizontalCoord, HorizontalToEquatorialI, HorizontalToEquatorialII,
    HourAngleAndRightAscension, MeridianInput,
};

pub use csillesz_core::{AstroError, AstroResult, GeoPoint};
