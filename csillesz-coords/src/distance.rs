//! Great-circle distances on a spherical Earth.
//!
//! The haversine formula on a sphere of radius [`EARTH_RADIUS_M`] is a
//! spherical approximation: expect errors of a few tenths of a percent
//! against an ellipsoidal geodesic.

use csillesz_core::angle::{normalize_symmetric_90, normalize_zero_bounded};
use csillesz_core::constants::{DEGREES_PER_TURN, EARTH_RADIUS_M};
use csillesz_core::errors::ensure_finite;
use csillesz_core::math::haversine_central_angle;
use csillesz_core::{AstroError, AstroResult, GeoPoint, MathErrorKind};

use crate::cities::CityTable;

fn central_angle(lat1: f64, lat2: f64, lon1: f64, lon2: f64) -> AstroResult<f64> {
    const OP: &str = "distance";
    ensure_finite(OP, "lat1", lat1)?;
    ensure_finite(OP, "lat2", lat2)?;
    ensure_finite(OP, "lon1", lon1)?;
    ensure_finite(OP, "lon2", lon2)?;

    let lat1 = normalize_symmetric_90(lat1).to_radians();
    let lat2 = normalize_symmetric_90(lat2).to_radians();
    let lon1 = normalize_zero_bounded(lon1, DEGREES_PER_TURN);
    let lon2 = normalize_zero_bounded(lon2, DEGREES_PER_TURN);

    Ok(haversine_central_angle(lat1, lat2, (lon2 - lon1).to_radians()))
}

/// Haversine distance in meters between two latitude/longitude pairs in degrees.
///
/// Latitudes are normalized into `[-90, 90]`, longitudes into `[0, 360)`.
///
/// ```
/// use csillesz_coords::distance;
///
/// let d = distance(47.4979, 40.7128, 19.0402, -74.0060).unwrap();
/// assert!((d / 1000.0 - 7000.0).abs() < 50.0);
/// assert_eq!(distance(10.0, 10.0, 20.0, 20.0).unwrap(), 0.0);
/// ```
pub fn distance(lat1: f64, lat2: f64, lon1: f64, lon2: f64) -> AstroResult<f64> {
    Ok(EARTH_RADIUS_M * central_angle(lat1, lat2, lon1, lon2)?)
}

/// Distance between two named cities, with the resolved coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CityDistance {
    pub from: GeoPoint,
    pub to: GeoPoint,
    pub meters: f64,
}

impl CityDistance {
    pub fn kilometers(&self) -> f64 {
        self.meters / 1000.0
    }
}

/// Distance calculator holding its city table and sphere radius.
#[derive(Debug, Clone)]
pub struct GeoDistance {
    cities: CityTable,
    earth_radius_m: f64,
}

impl Default for GeoDistance {
    fn default() -> Self {
        Self::new(CityTable::builtin())
    }
}

impl GeoDistance {
    pub fn new(cities: CityTable) -> Self {
        Self {
            cities,
            earth_radius_m: EARTH_RADIUS_M,
        }
    }

    /// Replaces the sphere radius. It must be finite and positive.
    pub fn with_earth_radius(mut self, earth_radius_m: f64) -> AstroResult<Self> {
        ensure_finite("with_earth_radius", "earth_radius_m", earth_radius_m)?;
        if earth_radius_m <= 0.0 {
            return Err(AstroError::domain(
                "with_earth_radius",
                MathErrorKind::OutOfRange,
                &format!("earth_radius_m must be positive, got {}", earth_radius_m),
            ));
        }
        self.earth_radius_m = earth_radius_m;
        Ok(self)
    }

    pub fn cities(&self) -> &CityTable {
        &self.cities
    }

    pub fn earth_radius_m(&self) -> f64 {
        self.earth_radius_m
    }

    /// Distance in meters between two points.
    pub fn between(&self, a: GeoPoint, b: GeoPoint) -> AstroResult<f64> {
        let c = central_angle(a.latitude, b.latitude, a.longitude, b.longitude)?;
        Ok(self.earth_radius_m * c)
    }

    /// Resolves both names through the city table, then measures the distance.
    ///
    /// Fails with [`AstroError::UnknownLocation`](csillesz_core::AstroError::UnknownLocation)
    /// naming the first city that is missing.
    pub fn distance_by_city(&self, city1: &str, city2: &str) -> AstroResult<CityDistance> {
        let from = self.cities.lookup(city1)?;
        let to = self.cities.lookup(city2)?;
        tracing::debug!(%city1, %from, %city2, %to, "resolved cities");

        Ok(CityDistance {
            from,
            to,
            meters: self.between(from, to)?,
        })
    }
}
