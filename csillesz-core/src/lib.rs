//! Shared building blocks for the csillesz positional-astronomy calculator.
//!
//! `csillesz-core` holds the pieces every other crate leans on: range reduction
//! for angles and hours, the error type, physical constants and the observer
//! location value. Everything here is a pure function over `f64` scalars.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | Range reduction ([`angle::normalize`]) and h/m/s breakdowns ([`angle::format`]) |
//! | [`constants`] | Earth radius, sidereal day ratio, unit conversions |
//! | [`errors`] | [`AstroError`] and [`AstroResult`] |
//! | [`location`] | [`GeoPoint`], a latitude/longitude pair in degrees |
//! | [`math`] | Thin wrappers over `libm` and the haversine kernel |
//!
//! # Units
//!
//! Unlike most astronomy libraries, the public API works in **degrees** for
//! angles and **decimal hours** for hour angle, right ascension and sidereal
//! time. Conversion to radians happens only at the trigonometric call sites.
//!
//! ```
//! use csillesz_core::angle::{normalize_zero_bounded, normalize_symmetric_90};
//!
//! assert_eq!(normalize_zero_bounded(370.0, 360.0), 10.0);
//! assert_eq!(normalize_symmetric_90(100.0), 80.0);
//! ```

pub mod angle;
pub mod constants;
pub mod errors;
pub mod location;
pub mod math;

pub use angle::HmsBreakdown;
pub use errors::{AstroError, AstroResult, MathErrorKind};
pub use location::GeoPoint;

pub mod test_helpers;
