use csillesz_time::DaylightSavingRule;

use super::{labelled, Command, CommandOutput};
use crate::error::{Error, Result};
use crate::session::Session;

/// Shows or switches the daylight-saving rule used by LST and CITYLST.
pub struct Dst;

impl Command for Dst {
    fn name(&self) -> &str {
        "DST"
    }
    fn description(&self) -> &str {
        "Show or set the daylight-saving rule (european|none)"
    }

    fn execute(&self, session: &mut Session, args: &[&str]) -> Result<CommandOutput> {
        match args {
            [] => {}
            [rule] => {
                let rule: DaylightSavingRule =
                    rule.parse().map_err(|e| Error::Parse(format!("{}", e)))?;
                session.set_daylight_saving(rule);
                tracing::info!(%rule, "daylight-saving rule changed");
            }
            _ => return Err(Error::Parse("usage: DST [european|none]".to_string())),
        }
        Ok(CommandOutput::Text(labelled(&[(
            "Daylight saving",
            session.sidereal.daylight_saving().to_string(),
        )])))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_current_rule() {
        let mut session = Session::default();
        assert_eq!(
            Dst.execute(&mut session, &[]).unwrap(),
            CommandOutput::Text("Daylight saving:  european".to_string())
        );
    }

    #[test]
    fn switches_rule() {
        let mut session = Session::default();
        Dst.execute(&mut session, &["NONE"]).unwrap();
        assert_eq!(session.sidereal.daylight_saving(), DaylightSavingRule::None);
        Dst.execute(&mut session, &["eu"]).unwrap();
        assert_eq!(
            session.sidereal.daylight_saving(),
            DaylightSavingRule::FixedEuropeanWindow
        );
    }

    #[test]
    fn unknown_rule_keeps_session() {
        let mut session = Session::default();
        let err = Dst.execute(&mut session, &["summer"]).unwrap_err();
        assert!(matches!(err, Error::Parse(ref msg) if msg.contains("summer")));
        assert_eq!(
            session.sidereal.daylight_saving(),
            DaylightSavingRule::FixedEuropeanWindow
        );
    }
}
