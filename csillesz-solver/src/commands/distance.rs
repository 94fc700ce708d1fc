use csillesz_core::GeoPoint;

use super::{labelled, Command, CommandOutput};
use crate::error::{Error, Result};
use crate::parser::parse_numbers;
use crate::session::Session;

fn kilometers(meters: f64) -> String {
    format!("{:.3} km", meters / 1000.0)
}

pub struct Dist;

impl Command for Dist {
    fn name(&self) -> &str {
        "DIST"
    }
    fn description(&self) -> &str {
        "Great-circle distance between two coordinates"
    }

    fn execute(&self, session: &mut Session, args: &[&str]) -> Result<CommandOutput> {
        let [lat1, lon1, lat2, lon2] = parse_numbers(
            ["lat1", "lon1", "lat2", "lon2"],
            args,
            "DIST <lat1> <lon1> <lat2> <lon2>",
        )?;
        let meters = session
            .geo
            .between(GeoPoint::new(lat1, lon1), GeoPoint::new(lat2, lon2))?;
        Ok(CommandOutput::Text(labelled(&[("Distance", kilometers(meters))])))
    }
}

pub struct CityDist;

impl Command for CityDist {
    fn name(&self) -> &str {
        "CITYDIST"
    }
    fn description(&self) -> &str {
        "Great-circle distance between two named cities"
    }

    fn execute(&self, session: &mut Session, args: &[&str]) -> Result<CommandOutput> {
        let [city1, city2] = args else {
            return Err(Error::Parse("usage: CITYDIST <city1> <city2>".to_string()));
        };
        let d = session.geo.distance_by_city(city1, city2)?;
        Ok(CommandOutput::Text(labelled(&[
            (*city1, d.from.to_string()),
            (*city2, d.to.to_string()),
            ("Distance", kilometers(d.meters)),
        ])))
    }
}
