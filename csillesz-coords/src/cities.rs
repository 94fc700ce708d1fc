//! Read-only table of named observer locations.

use std::collections::BTreeMap;

use csillesz_core::{AstroError, AstroResult, GeoPoint};

const BUILTIN_CITIES: &[(&str, f64, f64)] = &[
    ("Beijing", 39.9042, 116.4074),
    ("Budapest", 47.4979, 19.0402),
    ("Budakeszi", 47.5136, 18.9278),
    ("Budaors", 47.4621, 18.9530),
    ("Brussels", 50.8503, 4.3517),
    ("Debrecen", 47.5316, 21.6273),
    ("Gyor", 47.6875, 17.6504),
    ("Jerusalem", 31.7683, 35.2137),
    ("Kecskemet", 46.8964, 19.6897),
    ("Mako", 46.2219, 20.4809),
    ("Miskolc", 48.1035, 20.7784),
    ("Nagykanizsa", 46.4590, 16.9897),
    ("NewYork", 40.7128, -74.0060),
    ("Pecs", 46.0727, 18.2323),
    ("Rio", -22.9068, -43.1729),
    ("Szeged", 46.2530, 20.1414),
    ("Szeghalom", 47.0239, 21.1667),
    ("Szekesfehervar", 47.1860, 18.4221),
    ("Tokyo", 35.6895, 139.6917),
    ("Washington", 47.7511, -120.7401),
    ("Zalaegerszeg", 46.8417, 16.8416),
];

/// Immutable mapping from city name to latitude/longitude in degrees.
///
/// Built once at startup and handed to whatever needs it; nothing mutates a
/// table after construction; [`merged_with`](Self::merged_with) returns a
/// new one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CityTable {
    entries: BTreeMap<String, GeoPoint>,
}

impl CityTable {
    /// The 21 reference cities shipped with the calculator.
    pub fn builtin() -> Self {
        Self::from_entries(
            BUILTIN_CITIES
                .iter()
                .map(|&(name, lat, lon)| (name.to_string(), GeoPoint::new(lat, lon))),
        )
    }

    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, GeoPoint)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Returns a table with `other`'s entries layered over this one.
    pub fn merged_with(&self, other: &CityTable) -> Self {
        let mut entries = self.entries.clone();
        entries.extend(other.entries.iter().map(|(k, v)| (k.clone(), *v)));
        Self { entries }
    }

    /// Looks a city up by exact name, falling back to an ASCII case-insensitive match.
    ///
    /// ```
    /// use csillesz_coords::CityTable;
    ///
    /// let cities = CityTable::builtin();
    /// assert_eq!(cities.lookup("Tokyo").unwrap().longitude, 139.6917);
    /// assert_eq!(cities.lookup("newyork").unwrap().latitude, 40.7128);
    /// assert!(cities.lookup("Atlantis").is_err());
    /// ```
    pub fn lookup(&self, name: &str) -> AstroResult<GeoPoint> {
        self.find(name).ok_or_else(|| {
            tracing::warn!(city = name.trim(), "city not in reference table");
            AstroError::unknown_location(name.trim())
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    // Exact match first, then ASCII case-insensitive.
    fn find(&self, name: &str) -> Option<GeoPoint> {
        let name = name.trim();
        if let Some(point) = self.entries.get(name) {
            return Some(*point);
        }
        self.entries
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, point)| *point)
    }

    /// City names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, GeoPoint)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
