//! # holdem CLI
//!
//! Command-line interface for the hold'em table engine: an interactive
//! session against bot opponents, a face-up deal command for inspecting
//! the evaluator, and a config dump.
//!
//! The primary entry point is [`run`], which parses arguments and
//! dispatches to the subcommand handlers with injected streams so tests
//! can drive the whole CLI in memory.

use clap::Parser;
use std::io::Write;

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod ui;
pub mod validation;

use cli::{Commands, HoldemCli};
pub use error::CliError;

/// Parse arguments and run the selected subcommand.
///
/// Returns the process exit code: [`exit_code::SUCCESS`] on success,
/// [`exit_code::ERROR`] on any failure. Help and version requests print
/// to `out` and exit 0.
///
/// ```
/// use std::io;
/// let args = vec!["holdem", "deal", "--seed", "42", "--seats", "3"];
/// let code = holdem_cli::run(args, &mut io::sink(), &mut io::sink());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = match HoldemCli::try_parse_from(&argv) {
        Err(e) => {
            use clap::error::ErrorKind;
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        exit_code::ERROR
                    } else {
                        exit_code::SUCCESS
                    }
                }
                _ => {
                    let _ = writeln!(err, "{}", e);
                    exit_code::ERROR
                }
            };
        }
        Ok(cli) => cli,
    };

    let result = match parsed.cmd {
        Commands::Play {
            bots,
            chips,
            blind,
            seed,
            pace_ms,
            hands,
            log,
        } => match (config::load(), holdem_ai::create_source("baseline")) {
            (Err(e), _) => Err(CliError::Config(e.to_string())),
            (_, Err(e)) => Err(CliError::Engine(e.to_string())),
            (Ok(cfg), Ok(mut source)) => {
                let stdin = std::io::stdin();
                let mut stdin_lock = stdin.lock();
                commands::handle_play_command(
                    bots.unwrap_or(cfg.bots),
                    chips.unwrap_or(cfg.starting_stack),
                    blind.unwrap_or(cfg.blind),
                    seed.or(cfg.seed),
                    pace_ms.unwrap_or(cfg.pace_ms),
                    hands,
                    log.as_deref(),
                    source.as_mut(),
                    out,
                    err,
                    &mut stdin_lock,
                )
            }
        },
        Commands::Deal { seats, seed } => commands::handle_deal_command(seats, seed, out),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources().map_err(|e| CliError::Config(e.to_string()))?;
    let cfg = &resolved.config;
    writeln!(out, "starting_stack = {}", cfg.starting_stack)?;
    writeln!(out, "bots = {}", cfg.bots)?;
    writeln!(out, "blind = {}", cfg.blind)?;
    match cfg.seed {
        Some(s) => writeln!(out, "seed = {}", s)?,
        None => writeln!(out, "seed = (random)")?,
    }
    writeln!(out, "pace_ms = {}", cfg.pace_ms)?;
    for (name, source) in &resolved.sources {
        writeln!(out, "# {} from {:?}", name, source)?;
    }
    Ok(())
}
