//! Deal command: one poker round from a freshly shuffled deck.

use std::io::Write;

use parlor_engine::cards::full_deck;
use parlor_engine::entropy::SeededEntropy;
use parlor_engine::poker::{self, play_round};

use super::{load_config, seed_or_random};
use crate::config::Overrides;
use crate::error::CliError;
use crate::formatters::format_cards;

/// Deals five cards to every player and shows the classified hands.
///
/// # Examples
///
/// ```ignore
/// // Internal command handler - not part of public API
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// handle_deal_command(&Overrides { seed: Some(42), ..Default::default() }, &mut out, &mut err)?;
/// ```
pub fn handle_deal_command(
    overrides: &Overrides,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let config = load_config(overrides, err)?;
    let seed = seed_or_random(config.seed);
    let deck = full_deck().shuffle(&mut SeededEntropy::new_with_seed(seed));
    let players = poker::seat(config.players.clone());
    let (rest, outcome) = play_round(&deck, &players, 1)?;

    writeln!(out, "Seed: {}", seed)?;
    for entry in &outcome.showdown {
        writeln!(
            out,
            "{}: {} {}",
            entry.player,
            format_cards(&entry.rank.cards),
            entry.rank.category
        )?;
    }
    writeln!(out, "Winner(s): {}", outcome.winners.join(", "))?;
    writeln!(out, "Cards remaining: {}", rest.len())?;
    Ok(())
}
