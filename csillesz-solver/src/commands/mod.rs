pub mod cities;
pub mod convert;
pub mod distance;
pub mod dst;
pub mod help;
pub mod lst;

use csillesz_core::HmsBreakdown;

use crate::error::{Error, Result};
use crate::session::Session;

/// Every command name the shell understands, in help order.
pub const COMMAND_NAMES: &[&str] = &[
    "HOR2EQ1", "HOR2EQ2", "EQ12HOR", "EQ12EQ2", "EQ22EQ1", "EQ22HOR", "DIST", "CITYDIST", "LST",
    "CITYLST", "CITIES", "DST", "HELP", "QUIT",
];

#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    Text(String),
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    None,
}

pub trait Command {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn execute(&self, session: &mut Session, args: &[&str]) -> Result<CommandOutput>;
}

pub fn dispatch(session: &mut Session, input: &str) -> Result<CommandOutput> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    if parts.is_empty() {
        return Ok(CommandOutput::None);
    }
    let cmd_name = parts[0].to_uppercase();
    let args = &parts[1..];
    tracing::debug!(command = %cmd_name, ?args, "dispatch");

    match cmd_name.as_str() {
        "HOR2EQ1" => convert::Hor2Eq1.execute(session, args),
        "HOR2EQ2" => convert::Hor2Eq2.execute(session, args),
        "EQ12HOR" => convert::Eq12Hor.execute(session, args),
        "EQ12EQ2" => convert::Eq12Eq2.execute(session, args),
        "EQ22EQ1" => convert::Eq22Eq1.execute(session, args),
        "EQ22HOR" => convert::Eq22Hor.execute(session, args),
        "DIST" => distance::Dist.execute(session, args),
        "CITYDIST" => distance::CityDist.execute(session, args),
        "LST" => lst::Lst.execute(session, args),
        "CITYLST" => lst::CityLst.execute(session, args),
        "CITIES" => cities::Cities.execute(session, args),
        "DST" => dst::Dst.execute(session, args),
        "HELP" => help::Help.execute(session, args),
        "QUIT" => Ok(CommandOutput::Text("Use Ctrl-D to exit".to_string())),
        _ => Err(Error::Parse(format!("unknown command: {}", parts[0]))),
    }
}

pub(crate) fn degrees(value: f64) -> String {
    format!("{:.4}°", value)
}

pub(crate) fn hours(value: f64) -> String {
    format!("{:.4}h ({})", value, HmsBreakdown::from_hours(value))
}

/// Two-column text block with the labels padded to a common width.
pub(crate) fn labelled(lines: &[(&str, String)]) -> String {
    let width = lines.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    lines
        .iter()
        .map(|(label, value)| format!("{:<width$}  {}", format!("{}:", label), value, width = width + 1))
        .collect::<Vec<_>>()
        .join("\n")
}
