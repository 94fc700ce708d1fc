use csillesz_coords::{CityTable, GeoDistance};
use csillesz_time::calendar::MonthLengths;
use csillesz_time::{DaylightSavingRule, SiderealTimeCalculator};

use crate::config::SolverConfig;
use crate::error::Result;

/// Calculators configured for one shell run.
#[derive(Debug, Clone)]
pub struct Session {
    pub geo: GeoDistance,
    pub sidereal: SiderealTimeCalculator,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(CityTable::builtin(), DaylightSavingRule::default())
    }
}

impl Session {
    pub fn new(cities: CityTable, daylight_saving: DaylightSavingRule) -> Self {
        Self {
            geo: GeoDistance::new(cities),
            sidereal: SiderealTimeCalculator::new(MonthLengths::STANDARD, daylight_saving),
        }
    }

    pub fn from_config(config: &SolverConfig) -> Result<Self> {
        let cities = config.city_table()?;
        let mut session = Self::new(cities, config.daylight_saving);
        session.geo = session.geo.with_earth_radius(config.earth_radius_m)?;
        tracing::debug!(
            cities = session.cities().len(),
            dst = %config.daylight_saving,
            earth_radius_m = config.earth_radius_m,
            "session ready"
        );
        Ok(session)
    }

    pub fn cities(&self) -> &CityTable {
        self.geo.cities()
    }

    pub fn set_daylight_saving(&mut self, rule: DaylightSavingRule) {
        self.sidereal = self.sidereal.with_daylight_saving(rule);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use csillesz_core::AstroError;
    use std::path::PathBuf;

    #[test]
    fn default_uses_builtin_cities() {
        let session = Session::default();
        assert_eq!(session.cities().len(), 21);
        assert_eq!(
            session.sidereal.daylight_saving(),
            DaylightSavingRule::FixedEuropeanWindow
        );
    }

    #[test]
    fn from_config_applies_rule_and_radius() {
        let config = SolverConfig {
            daylight_saving: DaylightSavingRule::None,
            earth_radius_m: 1000.0,
            ..SolverConfig::default()
        };
        let session = Session::from_config(&config).unwrap();
        assert_eq!(session.sidereal.daylight_saving(), DaylightSavingRule::None);
        assert_eq!(session.geo.earth_radius_m(), 1000.0);
    }

    #[test]
    fn from_config_rejects_unvalidated_radius() {
        let config = SolverConfig {
            earth_radius_m: -1.0,
            ..SolverConfig::default()
        };
        let err = Session::from_config(&config).unwrap_err();
        assert!(matches!(err, crate::Error::Astro(AstroError::Domain { .. })), "{}", err);
    }

    #[test]
    fn from_config_missing_city_file_fails() {
        let config = SolverConfig {
            cities_file: Some(PathBuf::from("/nonexistent/csillesz-cities.toml")),
            ..SolverConfig::default()
        };
        assert!(Session::from_config(&config).is_err());
    }

    #[test]
    fn daylight_saving_can_be_switched() {
        let mut session = Session::default();
        session.set_daylight_saving(DaylightSavingRule::None);
        assert_eq!(session.sidereal.daylight_saving(), DaylightSavingRule::None);
    }
}
