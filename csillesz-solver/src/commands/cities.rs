use super::{Command, CommandOutput};
use crate::error::{Error, Result};
use crate::session::Session;

/// Lists the city table, built-in entries plus any loaded from a city file.
pub struct Cities;

impl Command for Cities {
    fn name(&self) -> &str {
        "CITIES"
    }
    fn description(&self) -> &str {
        "List the known cities"
    }

    fn execute(&self, session: &mut Session, args: &[&str]) -> Result<CommandOutput> {
        if !args.is_empty() {
            return Err(Error::Parse("usage: CITIES".to_string()));
        }
        let rows = session
            .cities()
            .iter()
            .map(|(name, point)| {
                vec![
                    name.to_string(),
                    format!("{:.4}", point.latitude),
                    format!("{:.4}", point.longitude),
                ]
            })
            .collect();
        Ok(CommandOutput::Table {
            headers: vec!["City".into(), "Latitude".into(), "Longitude".into()],
            rows,
        })
    }
}
