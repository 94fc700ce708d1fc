//! Command-line arguments for the csillesz shell.

use std::path::PathBuf;

use clap::Parser;
use csillesz_time::DaylightSavingRule;

#[derive(Parser, Debug)]
#[command(name = "csillesz")]
#[command(about = "Coordinate conversion, great-circle distance and sidereal time shell")]
#[command(version)]
pub struct Cli {
    /// Config file; defaults to ./csillesz.toml, then the user config directory
    #[arg(long, env = "CSILLESZ_CONFIG")]
    pub config: Option<PathBuf>,

    /// City file merged over the built-in table
    #[arg(long, env = "CSILLESZ_CITIES")]
    pub cities: Option<PathBuf>,

    /// Daylight-saving rule ("european" or "none")
    #[arg(long, env = "CSILLESZ_DST")]
    pub dst: Option<DaylightSavingRule>,

    /// Shell history file
    #[arg(long, env = "CSILLESZ_HISTORY")]
    pub history: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Run a single command and exit, e.g. `csillesz CITYDIST Budapest Tokyo`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}
