//! csillesz: interactive shell for coordinate conversion, great-circle
//! distances and local sidereal time.
//!
//! Configuration comes from `csillesz.toml` (see `csillesz_solver::config`),
//! overridden by command-line flags or their `CSILLESZ_*` environment
//! variables. `RUST_LOG` takes `tracing` filter directives such as
//! `csillesz_time=debug` (default: warn).

mod cli;
mod helper;

use std::env;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use csillesz_solver::commands::{self, CommandOutput};
use csillesz_solver::config::SolverConfig;
use csillesz_solver::session::Session;
use rustyline::error::ReadlineError;
use rustyline::Editor;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::Cli;
use helper::ShellHelper;

fn default_history_path() -> PathBuf {
    dirs::home_dir().unwrap_or_default().join(".csillesz_history")
}

fn log_filter(verbose: bool, directives: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn init_logging(verbose: bool) {
    let directives = env::var(EnvFilter::DEFAULT_ENV).ok();
    FmtSubscriber::builder()
        .with_env_filter(log_filter(verbose, directives.as_deref()))
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> anyhow::Result<SolverConfig> {
    let mut config = match &cli.config {
        Some(path) => SolverConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => SolverConfig::discover()?.unwrap_or_default(),
    };
    if let Some(cities) = &cli.cities {
        config.cities_file = Some(cities.clone());
    }
    if let Some(rule) = cli.dst {
        config.daylight_saving = rule;
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli)?;
    let mut session = Session::from_config(&config).context("building session")?;

    if !cli.command.is_empty() {
        let line = cli.command.join(" ");
        let output = commands::dispatch(&mut session, &line)?;
        print_output(output);
        return Ok(());
    }

    run_shell(&mut session, cli.history.unwrap_or_else(default_history_path))
}

fn run_shell(session: &mut Session, history: PathBuf) -> anyhow::Result<()> {
    println!("csillesz v{}", env!("CARGO_PKG_VERSION"));
    println!("Type HELP for commands, Ctrl-D to exit\n");

    let mut rl = Editor::with_config(rustyline::Config::builder().auto_add_history(true).build())
        .context("failed to initialize editor")?;
    rl.set_helper(Some(ShellHelper::new(session.cities().names())));

    if let Err(e) = rl.load_history(&history) {
        tracing::debug!(path = %history.display(), error = %e, "no history loaded");
    }

    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line.eq_ignore_ascii_case("QUIT") {
                    println!("Bye!");
                    break;
                }
                match commands::dispatch(session, line) {
                    Ok(output) => print_output(output),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        if e.is_recoverable() {
                            let cmd = line.split_whitespace().next().unwrap_or_default();
                            eprintln!("Type HELP {} for usage", cmd.to_uppercase());
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("Bye!");
                break;
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                break;
            }
        }
    }

    if let Err(e) = rl.save_history(&history) {
        tracing::warn!(path = %history.display(), error = %e, "failed to save history");
    }
    Ok(())
}

fn print_output(output: CommandOutput) {
    match output {
        CommandOutput::Text(s) => println!("{}", s),
        CommandOutput::Table { headers, rows } => print_table(&headers, &rows),
        CommandOutput::None => {}
    }
}

fn print_table(headers: &[String], rows: &[Vec<String>]) {
    let widths: Vec<usize> = (0..headers.len())
        .map(|i| {
            let rw = rows
                .iter()
                .map(|r| r.get(i).map_or(0, |s| s.chars().count()))
                .max()
                .unwrap_or(0);
            headers[i].len().max(rw)
        })
        .collect();

    for (i, h) in headers.iter().enumerate() {
        print!("{:>width$}  ", h, width = widths[i]);
    }
    println!();

    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            print!("{:>width$}  ", cell, width = widths[i]);
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn log_filter_accepts_per_crate_directives() {
        let filter = log_filter(false, Some("csillesz_coords=debug"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
        assert!(filter.to_string().contains("csillesz_coords=debug"));
    }

    #[test]
    fn log_filter_defaults_to_warn() {
        assert_eq!(log_filter(false, None).max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(
            log_filter(false, Some("csillesz_coords=loud")).max_level_hint(),
            Some(LevelFilter::WARN)
        );
    }

    #[test]
    fn verbose_overrides_environment() {
        let filter = log_filter(true, Some("error"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }
}
