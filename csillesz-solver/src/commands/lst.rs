use csillesz_core::GeoPoint;
use csillesz_time::SiderealTime;

use super::{hours, labelled, Command, CommandOutput};
use crate::error::{Error, Result};
use crate::parser::{parse_datetime, parse_number};
use crate::session::Session;

fn sidereal_text(st: &SiderealTime) -> CommandOutput {
    CommandOutput::Text(labelled(&[
        ("Universal time", st.universal_time.to_string()),
        ("Zone offset", format!("{:+}h", st.zone_offset_hours)),
        ("GMST at 0h UT", hours(st.gmst)),
        ("Local sidereal time", hours(st.local_sidereal_time)),
    ]))
}

pub struct Lst;

impl Command for Lst {
    fn name(&self) -> &str {
        "LST"
    }
    fn description(&self) -> &str {
        "Local sidereal time at a latitude/longitude"
    }

    fn execute(&self, session: &mut Session, args: &[&str]) -> Result<CommandOutput> {
        let [lat, lon, date, time] = args else {
            return Err(Error::Parse(
                "usage: LST <lat> <lon> <YYYY-MM-DD> <HH:MM>".to_string(),
            ));
        };
        let observer = GeoPoint::new(
            parse_number("latitude", lat)?,
            parse_number("longitude", lon)?,
        );
        let at = parse_datetime(date, time)?;
        let st = session.sidereal.local_sidereal_time(observer, &at)?;
        Ok(sidereal_text(&st))
    }
}

pub struct CityLst;

impl Command for CityLst {
    fn name(&self) -> &str {
        "CITYLST"
    }
    fn description(&self) -> &str {
        "Local sidereal time in a named city"
    }

    fn execute(&self, session: &mut Session, args: &[&str]) -> Result<CommandOutput> {
        let [city, date, time] = args else {
            return Err(Error::Parse(
                "usage: CITYLST <city> <YYYY-MM-DD> <HH:MM>".to_string(),
            ));
        };
        let location = session.cities().lookup(city)?;
        let at = parse_datetime(date, time)?;
        let st = session
            .sidereal
            .local_sidereal_time_at_longitude(location.longitude, &at)?;
        Ok(sidereal_text(&st))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use csillesz_core::AstroError;

    fn text(output: CommandOutput) -> String {
        match output {
            CommandOutput::Text(s) => s,
            other => panic!("expected Text output, got {:?}", other),
        }
    }

    #[test]
    fn lst_rolls_back_across_midnight() {
        let mut session = Session::default();
        let out = text(
            Lst.execute(&mut session, &["47.4979", "19.0402", "2024-07-01", "00:30"])
                .unwrap(),
        );
        assert!(out.contains("Universal time:       2024-06-30 22:30 UT"), "{}", out);
        assert!(out.contains("Zone offset:          +2h"), "{}", out);
    }

    #[test]
    fn lst_at_greenwich_reports_gmst() {
        let mut session = Session::default();
        session.set_daylight_saving(csillesz_time::DaylightSavingRule::None);
        let out = text(Lst.execute(&mut session, &["51.48", "0", "2000-01-01", "00:00"]).unwrap());
        assert!(out.contains("GMST at 0h UT:        6.6645h (6h 39m 52s)"), "{}", out);
        assert!(out.contains("Local sidereal time:  6.6645h (6h 39m 52s)"), "{}", out);
    }

    #[test]
    fn citylst_matches_lst() {
        let mut session = Session::default();
        let by_city = CityLst
            .execute(&mut session, &["Tokyo", "2023-12-31", "23:59"])
            .unwrap();
        let by_coords = Lst
            .execute(&mut session, &["35.6895", "139.6917", "2023-12-31", "23:59"])
            .unwrap();
        assert_eq!(by_city, by_coords);
    }

    #[test]
    fn citylst_unknown_city() {
        let mut session = Session::default();
        let err = CityLst
            .execute(&mut session, &["Atlantis", "2023-12-31", "23:59"])
            .unwrap_err();
        assert!(matches!(err, Error::Astro(AstroError::UnknownLocation { .. })));
        assert!(err.is_recoverable());
    }

    #[test]
    fn lst_rejects_invalid_date() {
        let mut session = Session::default();
        let err = Lst
            .execute(&mut session, &["47.5", "19", "2000-02-29", "12:00"])
            .unwrap_err();
        assert!(matches!(err, Error::Astro(AstroError::InvalidDate { .. })));
    }
}
