use csillesz_coords::convert::{
    equatorial_i_to_equatorial_ii, equatorial_ii_to_horizontal, equatorial_to_horizontal,
    horizontal_to_equatorial_i, horizontal_to_equatorial_ii, resolve_meridian,
};
use csillesz_coords::{HorizontalCoord, HourAngleAndRightAscension, MeridianInput};

use super::{degrees, hours, labelled, Command, CommandOutput};
use crate::error::{Error, Result};
use crate::parser::{parse_number, parse_numbers, split_meridian};
use crate::session::Session;

fn horizontal_text(hor: HorizontalCoord) -> CommandOutput {
    CommandOutput::Text(labelled(&[
        ("Altitude", degrees(hor.altitude)),
        ("Azimuth", degrees(hor.azimuth)),
    ]))
}

fn pair_text(pair: HourAngleAndRightAscension) -> CommandOutput {
    CommandOutput::Text(labelled(&[
        ("Hour angle", hours(pair.hour_angle)),
        ("Right ascension", hours(pair.right_ascension)),
    ]))
}

fn parse_positional<const N: usize>(
    names: [&str; N],
    args: &[&str],
    usage: &str,
) -> Result<([f64; N], MeridianInput)> {
    let (rest, meridian) = split_meridian(args)?;
    Ok((parse_numbers(names, &rest, usage)?, meridian))
}

pub struct Hor2Eq1;

impl Command for Hor2Eq1 {
    fn name(&self) -> &str {
        "HOR2EQ1"
    }
    fn description(&self) -> &str {
        "Horizontal to equatorial I (declination, hour angle)"
    }

    fn execute(&self, _session: &mut Session, args: &[&str]) -> Result<CommandOutput> {
        const USAGE: &str = "HOR2EQ1 <lat> <alt> <az> [lst]";
        let (lat, alt, az, lst) = match args {
            [lat, alt, az] => (lat, alt, az, None),
            [lat, alt, az, lst] => (lat, alt, az, Some(parse_number("lst", lst)?)),
            _ => return Err(Error::Parse(format!("usage: {}", USAGE))),
        };
        let eq = horizontal_to_equatorial_i(
            parse_number("latitude", lat)?,
            parse_number("altitude", alt)?,
            parse_number("azimuth", az)?,
            lst,
        )?;

        let mut lines = vec![
            ("Declination", degrees(eq.declination)),
            ("Hour angle", hours(eq.hour_angle)),
        ];
        if let Some(ra) = eq.right_ascension {
            lines.push(("Right ascension", hours(ra)));
        }
        Ok(CommandOutput::Text(labelled(&lines)))
    }
}

pub struct Hor2Eq2;

impl Command for Hor2Eq2 {
    fn name(&self) -> &str {
        "HOR2EQ2"
    }
    fn description(&self) -> &str {
        "Horizontal to equatorial II (declination, sidereal time)"
    }

    fn execute(&self, _session: &mut Session, args: &[&str]) -> Result<CommandOutput> {
        let [lat, alt, az, lst] = parse_numbers(
            ["latitude", "altitude", "azimuth", "lst"],
            args,
            "HOR2EQ2 <lat> <alt> <az> <lst>",
        )?;
        let eq = horizontal_to_equatorial_ii(lat, alt, az, lst)?;
        Ok(CommandOutput::Text(labelled(&[
            ("Declination", degrees(eq.declination)),
            ("Local sidereal time", hours(eq.local_sidereal_time)),
        ])))
    }
}

pub struct Eq12Hor;

impl Command for Eq12Hor {
    fn name(&self) -> &str {
        "EQ12HOR"
    }
    fn description(&self) -> &str {
        "Equatorial I to horizontal"
    }

    fn execute(&self, _session: &mut Session, args: &[&str]) -> Result<CommandOutput> {
        let ([lat, dec, lst], meridian) = parse_positional(
            ["latitude", "declination", "lst"],
            args,
            "EQ12HOR <lat> <dec> <lst> (RA <ra> | HA <ha>)",
        )?;
        Ok(horizontal_text(equatorial_to_horizontal(lat, dec, meridian, lst)?))
    }
}

pub struct Eq12Eq2;

impl Command for Eq12Eq2 {
    fn name(&self) -> &str {
        "EQ12EQ2"
    }
    fn description(&self) -> &str {
        "Equatorial I to equatorial II (sidereal time)"
    }

    fn execute(&self, _session: &mut Session, args: &[&str]) -> Result<CommandOutput> {
        let [ra, ha] = parse_numbers(["right ascension", "hour angle"], args, "EQ12EQ2 <ra> <ha>")?;
        let lst = equatorial_i_to_equatorial_ii(ra, ha)?;
        Ok(CommandOutput::Text(labelled(&[("Local sidereal time", hours(lst))])))
    }
}

pub struct Eq22Eq1;

impl Command for Eq22Eq1 {
    fn name(&self) -> &str {
        "EQ22EQ1"
    }
    fn description(&self) -> &str {
        "Equatorial II to equatorial I (hour angle and right ascension)"
    }

    fn execute(&self, _session: &mut Session, args: &[&str]) -> Result<CommandOutput> {
        let ([lst], meridian) =
            parse_positional(["lst"], args, "EQ22EQ1 <lst> (RA <ra> | HA <ha>)")?;
        Ok(pair_text(resolve_meridian(lst, meridian)?))
    }
}

pub struct Eq22Hor;

impl Command for Eq22Hor {
    fn name(&self) -> &str {
        "EQ22HOR"
    }
    fn description(&self) -> &str {
        "Equatorial II to horizontal"
    }

    fn execute(&self, _session: &mut Session, args: &[&str]) -> Result<CommandOutput> {
        let ([lat, lst, dec], meridian) = parse_positional(
            ["latitude", "lst", "declination"],
            args,
            "EQ22HOR <lat> <lst> <dec> (RA <ra> | HA <ha>)",
        )?;
        let (hour_angle, right_ascension) = match meridian {
            MeridianInput::HourAngle(ha) => (Some(ha), None),
            MeridianInput::RightAscension(ra) => (None, Some(ra)),
        };
        let hor = equatorial_ii_to_horizontal(lat, lst, hour_angle, right_ascension, dec)?;
        Ok(horizontal_text(hor))
    }
}
