//! Five-card poker rounds: deal, show down, tally.
//!
//! A round deals five cards from the top of the deck to each player in seat
//! order, classifies every hand, and awards the round to every player whose
//! hand ties the best one. Rounds repeat until the deck can no longer cover a
//! full deal.
//!
//! ```
//! use parlor_engine::cards::full_deck;
//! use parlor_engine::entropy::SeededEntropy;
//! use parlor_engine::poker::{run_rounds, seat};
//!
//! let deck = full_deck().shuffle(&mut SeededEntropy::new_with_seed(7));
//! let summary = run_rounds(&deck, &seat(["Alice", "Bob", "Diana"])).expect("players seated");
//! // 52 cards cover three full deals of 15.
//! assert_eq!(summary.rounds.len(), 3);
//! assert_eq!(summary.remaining, 7);
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{classify, compare_hands, PokerRank, HAND_SIZE};
use crate::player::Player;
use crate::scorecard::WinTally;

pub type PokerPlayer = Player<Deck<Card>>;

/// Seats players with empty hands.
pub fn seat<I, S>(names: I) -> Vec<PokerPlayer>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(Player::named).collect()
}

/// One player's classified hand at showdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowdownEntry {
    pub player: String,
    pub rank: PokerRank,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// 1-based round number
    pub round: usize,
    pub showdown: Vec<ShowdownEntry>,
    /// Everyone whose hand tied the best; never empty for a dealt round.
    pub winners: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokerSummary {
    pub rounds: Vec<RoundOutcome>,
    pub tally: WinTally,
    /// Cards left undealt when the simulation stopped
    pub remaining: usize,
}

/// Deals five cards off the top to each player in turn.
pub fn deal_round(
    deck: &Deck<Card>,
    players: &[PokerPlayer],
) -> Result<(Deck<Card>, Vec<PokerPlayer>), GameError> {
    if players.is_empty() {
        return Err(GameError::NoPlayers);
    }
    let needed = players.len() * HAND_SIZE;
    if deck.len() < needed {
        return Err(GameError::InsufficientCards {
            requested: needed,
            available: deck.len(),
        });
    }
    let mut rest = deck.clone();
    let mut dealt = Vec::with_capacity(players.len());
    for p in players {
        let (next, hand) = rest.draw_n(HAND_SIZE)?;
        dealt.push(p.clone().with_hand(hand));
        rest = next;
    }
    Ok((rest, dealt))
}

/// Names of every player whose hand compares equal to the best hand.
pub fn round_winners(players: &[PokerPlayer]) -> Vec<String> {
    winners_of(&showdown(players))
}

fn showdown(players: &[PokerPlayer]) -> Vec<ShowdownEntry> {
    players
        .iter()
        .map(|p| ShowdownEntry {
            player: p.name().to_string(),
            rank: classify(p.hand().as_slice()),
        })
        .collect()
}

fn winners_of(entries: &[ShowdownEntry]) -> Vec<String> {
    let Some(best) = entries
        .iter()
        .map(|e| &e.rank)
        .max_by(|a, b| compare_hands(a, b))
    else {
        return Vec::new();
    };
    entries
        .iter()
        .filter(|e| compare_hands(&e.rank, best).is_eq())
        .map(|e| e.player.clone())
        .collect()
}

/// Deals, classifies and settles a single round.
pub fn play_round(
    deck: &Deck<Card>,
    players: &[PokerPlayer],
    round: usize,
) -> Result<(Deck<Card>, RoundOutcome), GameError> {
    let (rest, dealt) = deal_round(deck, players)?;
    let showdown = showdown(&dealt);
    let winners = winners_of(&showdown);
    tracing::debug!(round, ?winners, remaining = rest.len(), "poker round settled");
    Ok((
        rest,
        RoundOutcome {
            round,
            showdown,
            winners,
        },
    ))
}

/// Plays rounds until fewer than `players × 5` cards remain.
pub fn run_rounds(deck: &Deck<Card>, players: &[PokerPlayer]) -> Result<PokerSummary, GameError> {
    if players.is_empty() {
        return Err(GameError::NoPlayers);
    }
    let needed = players.len() * HAND_SIZE;
    let mut deck = deck.clone();
    let mut tally = WinTally::new();
    let mut rounds = Vec::new();

    while deck.len() >= needed {
        let (rest, outcome) = play_round(&deck, players, rounds.len() + 1)?;
        tally = tally.add_wins(outcome.winners.iter().map(String::as_str));
        rounds.push(outcome);
        deck = rest;
    }

    Ok(PokerSummary {
        rounds,
        tally,
        remaining: deck.len(),
    })
}
