//! Command handler modules for the parlor CLI.
//!
//! Each command lives in its own module with the same shape:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed in, never taken from the process
//! - Errors propagated via [`CliError`]

use std::io::Write;

use crate::config::{self, Config, Overrides};
use crate::error::CliError;
use crate::ui;

pub mod cfg;
pub mod deal;
pub mod deck;
pub mod poker;
pub mod rng;
pub mod yahtzee;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use deck::handle_deck_command;
pub use poker::handle_poker_command;
pub use rng::handle_rng_command;
pub use yahtzee::handle_yahtzee_command;

/// Resolves the layered configuration, reporting failures on `err`.
pub(crate) fn load_config(overrides: &Overrides, err: &mut dyn Write) -> Result<Config, CliError> {
    match config::load(overrides) {
        Ok(cfg) => Ok(cfg),
        Err(e) => {
            ui::write_error(err, &e.to_string())?;
            Err(e.into())
        }
    }
}

/// The configured seed, or a fresh one when none was given.
pub(crate) fn seed_or_random(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(rand::random)
}
