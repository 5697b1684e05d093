//! Yahtzee turns and games.
//!
//! A turn rolls a fresh cup and then runs up to [`MAX_REROLLS`] keep-and-reroll
//! passes driven by a [`RerollStrategy`]. The finished roll goes onto the
//! player's card via [`ScoreCard::apply_best`].

use serde::{Deserialize, Serialize};

use crate::combination::Category;
use crate::deck::Deck;
use crate::dice::{roll_cup, Die, CUP_SIZE};
use crate::entropy::Entropy;
use crate::errors::GameError;
use crate::player::Player;
use crate::scorecard::{Fill, ScoreCard};

/// Keep-and-reroll passes after the opening roll.
pub const MAX_REROLLS: usize = 3;

/// Rounds in a full game: one per scoring box.
pub const GAME_ROUNDS: usize = Category::ALL.len();

pub type DicePlayer = Player<Deck<Die>, ScoreCard>;

/// Decides which dice survive a reroll pass.
///
/// Implementations must return a sub-collection of `cup`. Returning all five
/// dice ends the turn early.
pub trait RerollStrategy {
    fn keep(&self, cup: &Deck<Die>, entropy: &mut dyn Entropy) -> Deck<Die>;

    fn name(&self) -> &str;
}

/// Tops `kept` back up to a full cup with fresh dice.
pub fn reroll(kept: &Deck<Die>, entropy: &mut dyn Entropy) -> Deck<Die> {
    let missing = CUP_SIZE.saturating_sub(kept.len());
    kept.add_deck(&roll_cup(missing, entropy))
}

/// Plays one turn and returns the final cup.
pub fn play_turn(strategy: &dyn RerollStrategy, entropy: &mut dyn Entropy) -> Deck<Die> {
    let mut cup = roll_cup(CUP_SIZE, entropy);
    for pass in 1..=MAX_REROLLS {
        let kept = strategy.keep(&cup, entropy);
        if kept.len() >= CUP_SIZE {
            tracing::trace!(pass, %cup, "all dice kept");
            break;
        }
        cup = reroll(&kept, entropy);
        tracing::trace!(pass, kept = kept.len(), %cup, "rerolled");
    }
    cup
}

/// Seats players with empty cups and blank cards.
pub fn seat<I, S>(names: I) -> Vec<DicePlayer>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(Player::named).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    pub player: String,
    pub dice: Deck<Die>,
    /// `None` once the player's card is complete
    pub fill: Option<Fill>,
    /// Card total after this turn
    pub total: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YahtzeeRound {
    /// 1-based round number
    pub round: usize,
    pub turns: Vec<TurnOutcome>,
    /// Players holding the highest running total after the round.
    pub leaders: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YahtzeeSummary {
    pub rounds: Vec<YahtzeeRound>,
    pub players: Vec<DicePlayer>,
}

impl YahtzeeSummary {
    /// Players with the highest final total.
    pub fn winners(&self) -> Vec<String> {
        leaders(&self.players)
    }
}

fn leaders(players: &[DicePlayer]) -> Vec<String> {
    let Some(max) = players.iter().map(|p| p.score().total()).max() else {
        return Vec::new();
    };
    players
        .iter()
        .filter(|p| p.score().total() == max)
        .map(|p| p.name().to_string())
        .collect()
}

/// One player's turn: roll, keep and reroll, then score the best open box.
pub fn take_turn(
    player: &DicePlayer,
    strategy: &dyn RerollStrategy,
    entropy: &mut dyn Entropy,
) -> (DicePlayer, TurnOutcome) {
    let dice = play_turn(strategy, entropy);
    let (card, fill) = player.score().apply_best(dice.as_slice());
    let total = card.total();
    let outcome = TurnOutcome {
        player: player.name().to_string(),
        dice: dice.clone(),
        fill,
        total,
    };
    let next = player.clone().with_hand(dice).with_score(card);
    (next, outcome)
}

/// Plays `rounds` rounds; every player takes one turn per round in seat order.
pub fn run_game(
    players: &[DicePlayer],
    rounds: usize,
    strategy: &dyn RerollStrategy,
    entropy: &mut dyn Entropy,
) -> Result<YahtzeeSummary, GameError> {
    if players.is_empty() {
        return Err(GameError::NoPlayers);
    }
    let mut table = players.to_vec();
    let mut history = Vec::with_capacity(rounds);

    for round in 1..=rounds {
        let mut turns = Vec::with_capacity(table.len());
        let mut next = Vec::with_capacity(table.len());
        for p in &table {
            let (after, turn) = take_turn(p, strategy, entropy);
            tracing::trace!(
                round,
                player = %turn.player,
                dice = %turn.dice,
                total = turn.total,
                "turn scored"
            );
            turns.push(turn);
            next.push(after);
        }
        table = next;
        let leaders = leaders(&table);
        tracing::debug!(round, ?leaders, strategy = strategy.name(), "yahtzee round settled");
        history.push(YahtzeeRound {
            round,
            turns,
            leaders,
        });
    }

    Ok(YahtzeeSummary {
        rounds: history,
        players: table,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::cup_of;
    use crate::entropy::{ScriptedEntropy, SeededEntropy};

    struct KeepAll;

    impl RerollStrategy for KeepAll {
        fn keep(&self, cup: &Deck<Die>, _entropy: &mut dyn Entropy) -> Deck<Die> {
            cup.clone()
        }

        fn name(&self) -> &str {
            "keep-all"
        }
    }

    struct KeepNone;

    impl RerollStrategy for KeepNone {
        fn keep(&self, _cup: &Deck<Die>, _entropy: &mut dyn Entropy) -> Deck<Die> {
            Deck::new()
        }

        fn name(&self) -> &str {
            "keep-none"
        }
    }

    #[test]
    fn reroll_refills_to_a_full_cup() {
        let kept = cup_of(&[6, 6]);
        let mut e = ScriptedEntropy::new([0, 1, 2]);
        assert_eq!(reroll(&kept, &mut e), cup_of(&[6, 6, 1, 2, 3]));
        assert_eq!(e.remaining(), 0);
    }

    #[test]
    fn keeping_everything_stops_after_the_opening_roll() {
        let mut e = ScriptedEntropy::new([5, 5, 5, 5, 5, 0, 0]);
        let cup = play_turn(&KeepAll, &mut e);
        assert_eq!(cup, cup_of(&[6, 6, 6, 6, 6]));
        assert_eq!(e.remaining(), 2);
    }

    #[test]
    fn rerolls_are_capped() {
        // Opening roll plus three full rerolls consumes exactly 20 values.
        let mut e = ScriptedEntropy::new(0..25);
        play_turn(&KeepNone, &mut e);
        assert_eq!(e.remaining(), 5);
    }

    #[test]
    fn full_game_fills_every_box() {
        let players = seat(["Alice", "Bob"]);
        let mut e = SeededEntropy::new_with_seed(3);
        let summary = run_game(&players, GAME_ROUNDS, &KeepNone, &mut e).unwrap();
        assert_eq!(summary.rounds.len(), GAME_ROUNDS);
        for p in &summary.players {
            assert!(p.score().is_complete());
        }
        assert!(!summary.winners().is_empty());
    }

    #[test]
    fn empty_table_is_rejected() {
        let mut e = SeededEntropy::new_with_seed(3);
        assert_eq!(
            run_game(&[], 1, &KeepAll, &mut e).unwrap_err(),
            GameError::NoPlayers
        );
    }
}
