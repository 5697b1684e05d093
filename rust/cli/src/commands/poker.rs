//! Poker simulation command.
//!
//! Shuffles one deck, deals five-card rounds to every player until fewer
//! than `players × 5` cards remain, and prints the win tally.

use std::io::Write;

use parlor_engine::cards::full_deck;
use parlor_engine::entropy::SeededEntropy;
use parlor_engine::hand::HAND_SIZE;
use parlor_engine::logger::RoundRecord;
use parlor_engine::poker::{self, run_rounds};

use super::{load_config, seed_or_random};
use crate::config::Overrides;
use crate::error::CliError;
use crate::formatters::format_cards;
use crate::io_utils::open_round_log;
use crate::ui;

/// Largest table one 52-card deck can serve.
pub const MAX_POKER_PLAYERS: usize = 52 / HAND_SIZE;

pub fn handle_poker_command(
    overrides: &Overrides,
    output: Option<&str>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let config = load_config(overrides, err)?;
    if config.players.len() > MAX_POKER_PLAYERS {
        let msg = format!(
            "{} players need {} cards; a deck seats at most {}",
            config.players.len(),
            config.players.len() * HAND_SIZE,
            MAX_POKER_PLAYERS
        );
        ui::write_error(err, &msg)?;
        return Err(CliError::InvalidInput(msg));
    }

    let seed = seed_or_random(config.seed);
    let deck = full_deck().shuffle(&mut SeededEntropy::new_with_seed(seed));
    let players = poker::seat(config.players.clone());
    let summary = run_rounds(&deck, &players)?;
    let mut log = open_round_log(output)?;

    writeln!(out, "Seed: {}", seed)?;
    for round in &summary.rounds {
        writeln!(out, "Round {}", round.round)?;
        for entry in &round.showdown {
            writeln!(
                out,
                "  {}: {} {}",
                entry.player,
                format_cards(&entry.rank.cards),
                entry.rank.category
            )?;
        }
        writeln!(out, "  Winner(s): {}", round.winners.join(", "))?;
        if let Some(log) = log.as_mut() {
            let record = RoundRecord::from_poker(log.next_id(), Some(seed), round);
            log.write(&record)?;
        }
    }
    writeln!(out, "Cards remaining: {}", summary.remaining)?;

    ui::write_banner(out, "FINAL SCORE")?;
    let mut standings: Vec<(&str, u32)> = config
        .players
        .iter()
        .map(|name| (name.as_str(), summary.tally.wins(name)))
        .collect();
    standings.sort_by(|a, b| b.1.cmp(&a.1));
    for (name, wins) in &standings {
        writeln!(out, "{}: {}", name, wins)?;
    }
    match summary.tally.leaders() {
        Some((max, names)) if names.len() == 1 => {
            writeln!(out, "Overall Winner: {} with {} wins!", names[0], max)?
        }
        Some((max, names)) => writeln!(
            out,
            "Overall Tie between: {} with {} wins!",
            names.join(", "),
            max
        )?,
        None => writeln!(out, "No rounds were played.")?,
    }

    tracing::info!(seed, rounds = summary.rounds.len(), "poker simulation finished");
    Ok(())
}
