//! Yahtzee game command.

use std::io::Write;

use parlor_ai::create_strategy;
use parlor_engine::entropy::SeededEntropy;
use parlor_engine::logger::RoundRecord;
use parlor_engine::yahtzee::{self, GAME_ROUNDS, run_game};

use super::{load_config, seed_or_random};
use crate::config::Overrides;
use crate::error::CliError;
use crate::formatters::{format_dice, format_fill, format_scorecard};
use crate::io_utils::open_round_log;
use crate::ui;

/// Plays a full game and prints every turn, then the final cards.
///
/// Rounds past the thirteenth still roll, but every box is already filled,
/// so those turns score nothing.
pub fn handle_yahtzee_command(
    overrides: &Overrides,
    output: Option<&str>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let config = load_config(overrides, err)?;
    let strategy = create_strategy(&config.strategy)?;
    if config.rounds > GAME_ROUNDS {
        ui::display_warning(
            err,
            &format!(
                "{} rounds requested; a score card fills after {}",
                config.rounds, GAME_ROUNDS
            ),
        )?;
    }

    let seed = seed_or_random(config.seed);
    let mut entropy = SeededEntropy::new_with_seed(seed);
    let players = yahtzee::seat(config.players.clone());
    let summary = run_game(&players, config.rounds, strategy.as_ref(), &mut entropy)?;
    let mut log = open_round_log(output)?;

    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "Strategy: {}", strategy.name())?;
    for round in &summary.rounds {
        writeln!(out, "Round {}", round.round)?;
        for turn in &round.turns {
            writeln!(
                out,
                "  {}: {} {} (total {})",
                turn.player,
                format_dice(turn.dice.as_slice()),
                format_fill(turn.fill.as_ref()),
                turn.total
            )?;
        }
        writeln!(out, "  Leader(s): {}", round.leaders.join(", "))?;
        if let Some(log) = log.as_mut() {
            let record = RoundRecord::from_yahtzee(log.next_id(), Some(seed), round);
            log.write(&record)?;
        }
    }

    ui::write_banner(out, "FINAL SCORE")?;
    for p in &summary.players {
        writeln!(out, "{}: {}", p.name(), format_scorecard(p.score()))?;
    }
    let winners = summary.winners();
    let best = summary
        .players
        .iter()
        .map(|p| p.score().total())
        .max()
        .unwrap_or(0);
    if winners.len() == 1 {
        writeln!(out, "Overall Winner: {} with {} points!", winners[0], best)?;
    } else {
        writeln!(
            out,
            "Overall Tie between: {} with {} points!",
            winners.join(", "),
            best
        )?;
    }

    tracing::info!(
        seed,
        rounds = summary.rounds.len(),
        strategy = strategy.name(),
        "yahtzee game finished"
    );
    Ok(())
}
