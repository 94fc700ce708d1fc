use super::{Command, CommandOutput};
use crate::error::Result;
use crate::session::Session;

pub struct Help;

impl Command for Help {
    fn name(&self) -> &str {
        "HELP"
    }
    fn description(&self) -> &str {
        "Show available commands"
    }

    fn execute(&self, _session: &mut Session, args: &[&str]) -> Result<CommandOutput> {
        if let Some(cmd) = args.first() {
            Ok(CommandOutput::Text(command_help(cmd)))
        } else {
            Ok(CommandOutput::Text(general_help()))
        }
    }
}

pub fn command_help(cmd: &str) -> String {
    match cmd.to_uppercase().as_str() {
        "HOR2EQ1" => "HOR2EQ1 <lat> <alt> <az> [lst]\n  Horizontal to equatorial I\n  Prints declination and hour angle; right ascension too when LST is given\n  Azimuth is measured from north through east".into(),
        "HOR2EQ2" => "HOR2EQ2 <lat> <alt> <az> <lst>\n  Horizontal to equatorial II\n  Prints declination and local sidereal time".into(),
        "EQ12HOR" => "EQ12HOR <lat> <dec> <lst> (RA <ra> | HA <ha>)\n  Equatorial I to horizontal\n  Give exactly one of right ascension or hour angle".into(),
        "EQ12EQ2" => "EQ12EQ2 <ra> <ha>\n  Local sidereal time from right ascension and hour angle".into(),
        "EQ22EQ1" => "EQ22EQ1 <lst> (RA <ra> | HA <ha>)\n  Completes the hour angle / right ascension pair".into(),
        "EQ22HOR" => "EQ22HOR <lat> <lst> <dec> (RA <ra> | HA <ha>)\n  Equatorial II to horizontal".into(),
        "DIST" => "DIST <lat1> <lon1> <lat2> <lon2>\n  Great-circle distance between two points, in km".into(),
        "CITYDIST" => "CITYDIST <city1> <city2>\n  Great-circle distance between two cities (see CITIES)".into(),
        "LST" => "LST <lat> <lon> <YYYY-MM-DD> <HH:MM>\n  Local sidereal time for a local civil date and time\n  Prefix the year with - for dates BC; there is no year 0".into(),
        "CITYLST" => "CITYLST <city> <YYYY-MM-DD> <HH:MM>\n  Local sidereal time in a named city".into(),
        "CITIES" => "CITIES\n  List known cities and their coordinates".into(),
        "DST" => "DST [european|none]\n  Show or set the daylight-saving rule used by LST".into(),
        "HELP" => "HELP [command]\n  Show help for a command".into(),
        "QUIT" => "QUIT\n  Exit the program".into(),
        _ => format!("Unknown command: {}", cmd),
    }
}

fn general_help() -> String {
    "\
Commands:
  HOR2EQ1 <lat> <alt> <az> [lst]     Horizontal to equatorial I
  HOR2EQ2 <lat> <alt> <az> <lst>     Horizontal to equatorial II
  EQ12HOR <lat> <dec> <lst> RA|HA    Equatorial I to horizontal
  EQ12EQ2 <ra> <ha>                  Equatorial I to equatorial II
  EQ22EQ1 <lst> RA|HA                Equatorial II to equatorial I
  EQ22HOR <lat> <lst> <dec> RA|HA    Equatorial II to horizontal

  DIST <lat1> <lon1> <lat2> <lon2>   Distance between coordinates
  CITYDIST <city1> <city2>           Distance between cities

  LST <lat> <lon> <date> <time>      Local sidereal time
  CITYLST <city> <date> <time>       Local sidereal time in a city
  DST [european|none]                Daylight-saving rule

  CITIES                             List known cities
  HELP [cmd]                         Show help
  QUIT                               Exit

Angles are decimal or d:m:s degrees, times decimal or h:m:s hours.
Type HELP <command> for details."
        .to_string()
}
