//! # Parlor CLI Library
//!
//! Command-line front end for the parlor card and dice engine: five-card
//! poker rounds dealt from one deck, and Yahtzee games played by a reroll
//! strategy.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["parlor", "poker", "--seed", "42"];
//! let code = parlor_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `poker`: Deal rounds until the deck runs out and tally the winners
//! - `yahtzee`: Play a full Yahtzee game with a reroll strategy
//! - `deal`: Deal and classify a single poker round
//! - `deck`: Narrate a deck through the transform pipeline
//! - `rng`: Inspect seeded random output
//! - `cfg`: Display the resolved configuration and its sources

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
mod logging;
#[macro_use]
mod macros;
pub mod ui;

use cli::{Commands, ParlorCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_deck_command, handle_poker_command,
    handle_rng_command, handle_yahtzee_command,
};
use config::Overrides;

pub use error::CliError;
pub use logging::init_logging;

const COMMANDS: &[&str] = &["poker", "yahtzee", "deal", "deck", "rng", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["parlor", "deck", "--seed", "42"];
/// let mut out = Vec::new();
/// let code = parlor_cli::run(args, &mut out, &mut io::stderr());
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("Drew As"));
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match ParlorCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Parlor card and dice CLI");
                    write_or_exit!(err, "Usage: parlor <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: parlor --help");
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Poker {
            seed,
            players,
            output,
        } => {
            let overrides = Overrides {
                seed,
                players,
                ..Overrides::default()
            };
            handle_poker_command(&overrides, output.as_deref(), out, err)
        }
        Commands::Yahtzee {
            seed,
            players,
            rounds,
            strategy,
            output,
        } => {
            let overrides = Overrides {
                seed,
                players,
                rounds: rounds.map(|r| r as usize),
                strategy,
            };
            handle_yahtzee_command(&overrides, output.as_deref(), out, err)
        }
        Commands::Deal { seed, players } => {
            let overrides = Overrides {
                seed,
                players,
                ..Overrides::default()
            };
            handle_deal_command(&overrides, out, err)
        }
        Commands::Deck { seed } => handle_deck_command(seed, out),
        Commands::Rng { seed } => handle_rng_command(seed, out),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn run_args(args: &[&str]) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(args.iter().copied(), &mut out, &mut err);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn help_goes_to_stdout() {
        let (code, out, err) = run_args(&["parlor", "--help"]);
        assert_eq!(code, exit_code::SUCCESS);
        assert!(out.contains("poker"));
        assert!(err.is_empty());
    }

    #[test]
    fn unknown_command_lists_the_real_ones() {
        let (code, out, err) = run_args(&["parlor", "blackjack"]);
        assert_eq!(code, exit_code::ERROR);
        assert!(out.is_empty());
        for c in COMMANDS {
            assert!(err.contains(c), "missing {}", c);
        }
    }

    #[test]
    fn test_rng_command_dispatch_with_seed() {
        let (code, out, _) = run_args(&["parlor", "rng", "--seed", "42"]);
        assert_eq!(code, exit_code::SUCCESS);
        assert!(out.contains("RNG sample"));
    }

    #[test]
    #[serial]
    fn test_deal_command_dispatch_with_seed() {
        let (code, out, _) = run_args(&["parlor", "deal", "--seed", "42", "--players", "Ann,Ben"]);
        assert_eq!(code, exit_code::SUCCESS);
        assert!(out.contains("Ann: "));
    }

    #[test]
    #[serial]
    fn handler_errors_reach_stderr() {
        let (code, _, err) = run_args(&["parlor", "poker", "--players", "Ann,Ann"]);
        assert_eq!(code, exit_code::ERROR);
        assert_eq!(err.matches("duplicate player name Ann").count(), 2);
        assert!(err.lines().last().unwrap().starts_with("Error: Configuration error"));
    }
}
