//! TOML configuration for the shell and user city files.
//!
//! `csillesz.toml`:
//!
//! ```toml
//! cities_file = "cities.toml"     # merged over the built-in table
//! daylight_saving = "european"    # or "none"
//! earth_radius_m = 6378000.0
//! ```
//!
//! City files list one table per city:
//!
//! ```toml
//! [cities.Sopron]
//! latitude = 47.6817
//! longitude = 16.5845
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use csillesz_coords::CityTable;
use csillesz_core::constants::EARTH_RADIUS_M;
use csillesz_core::GeoPoint;
use csillesz_time::DaylightSavingRule;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const CONFIG_FILE_NAME: &str = "csillesz.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Extra cities merged over the built-in table.
    #[serde(default)]
    pub cities_file: Option<PathBuf>,
    #[serde(default)]
    pub daylight_saving: DaylightSavingRule,
    #[serde(default = "default_earth_radius_m")]
    pub earth_radius_m: f64,
}

fn default_earth_radius_m() -> f64 {
    EARTH_RADIUS_M
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            cities_file: None,
            daylight_saving: DaylightSavingRule::default(),
            earth_radius_m: EARTH_RADIUS_M,
        }
    }
}

impl SolverConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SolverConfig = toml::from_str(content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a config file. A relative `cities_file` is resolved against the
    /// directory holding the config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        let mut config = Self::from_toml_str(&content)?;

        if let (Some(cities), Some(dir)) = (&config.cities_file, path.parent()) {
            if cities.is_relative() {
                config.cities_file = Some(dir.join(cities));
            }
        }
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Looks for `csillesz.toml` in the working directory, then in the user
    /// config directory (`~/.config/csillesz/` on Linux).
    pub fn discover() -> Result<Option<Self>> {
        let mut candidates = vec![PathBuf::from(CONFIG_FILE_NAME)];
        if let Some(dir) = dirs::config_dir() {
            candidates.push(dir.join("csillesz").join(CONFIG_FILE_NAME));
        }

        for path in candidates {
            if path.is_file() {
                return Self::from_file(&path).map(Some);
            }
        }
        Ok(None)
    }

    /// The built-in cities, overlaid with `cities_file` when one is set.
    pub fn city_table(&self) -> Result<CityTable> {
        let builtin = CityTable::builtin();
        match &self.cities_file {
            Some(path) => Ok(builtin.merged_with(&load_cities(path)?)),
            None => Ok(builtin),
        }
    }

    fn validate(&self) -> Result<()> {
        if !self.earth_radius_m.is_finite() || self.earth_radius_m <= 0.0 {
            return Err(Error::Config(format!(
                "earth_radius_m must be positive, got {}",
                self.earth_radius_m
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct CitiesFile {
    #[serde(default)]
    cities: BTreeMap<String, GeoPoint>,
}

/// Parses a city file into a table.
pub fn parse_cities(content: &str) -> Result<CityTable> {
    let file: CitiesFile = toml::from_str(content)
        .map_err(|e| Error::Config(format!("failed to parse city file: {}", e)))?;

    for (name, point) in &file.cities {
        if !point.is_finite() || point.latitude.abs() > 90.0 {
            return Err(Error::Config(format!(
                "city {} has invalid coordinates ({})",
                name, point
            )));
        }
    }
    Ok(CityTable::from_entries(file.cities))
}

pub fn load_cities<P: AsRef<Path>>(path: P) -> Result<CityTable> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        Error::Config(format!("failed to read city file {}: {}", path.display(), e))
    })?;
    let table = parse_cities(&content)?;
    tracing::debug!(path = %path.display(), count = table.len(), "loaded cities");
    Ok(table)
}
