use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::combination::{self, Category, YAHTZEE_SCORE};
use crate::dice::{pip_sum, Die};

/// Upper-section sum that unlocks [`UPPER_BONUS`].
pub const UPPER_BONUS_THRESHOLD: u32 = 63;
pub const UPPER_BONUS: u32 = 35;
/// Awarded for every extra Yahtzee once the Yahtzee box holds a full 50.
pub const YAHTZEE_BONUS: u32 = 100;

/// A Yahtzee score card: each box is filled at most once.
///
/// Filling returns a new card; a box that already has a score keeps it.
///
/// # Examples
///
/// ```
/// use parlor_engine::combination::Category;
/// use parlor_engine::scorecard::ScoreCard;
///
/// let card = ScoreCard::new().fill(Category::Sixes, 18);
/// assert_eq!(card.fill(Category::Sixes, 12), card);
/// assert_eq!(card.total(), 18);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCard {
    /// Filled boxes in the order they were filled.
    boxes: Vec<(Category, u32)>,
    yahtzee_bonus: u32,
}

/// What a single turn wrote onto the card.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fill {
    pub category: Category,
    pub score: u32,
    /// Yahtzee bonus earned by this roll (0 or [`YAHTZEE_BONUS`]).
    pub bonus: u32,
}

impl ScoreCard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_available(&self, category: Category) -> bool {
        category != Category::NoCombination && self.get(category).is_none()
    }

    pub fn get(&self, category: Category) -> Option<u32> {
        self.boxes
            .iter()
            .find(|(c, _)| *c == category)
            .map(|&(_, s)| s)
    }

    /// Records `score` in an open box. Filled boxes and the sentinel are left as they are.
    pub fn fill(&self, category: Category, score: u32) -> ScoreCard {
        if !self.is_available(category) {
            return self.clone();
        }
        let mut next = self.clone();
        next.boxes.push((category, score));
        next
    }

    pub fn with_yahtzee_bonus(&self) -> ScoreCard {
        ScoreCard {
            yahtzee_bonus: self.yahtzee_bonus + YAHTZEE_BONUS,
            ..self.clone()
        }
    }

    pub fn filled(&self) -> &[(Category, u32)] {
        &self.boxes
    }

    pub fn is_complete(&self) -> bool {
        Category::ALL.iter().all(|&c| !self.is_available(c))
    }

    pub fn upper_total(&self) -> u32 {
        self.boxes
            .iter()
            .filter(|(c, _)| c.is_upper())
            .map(|&(_, s)| s)
            .sum()
    }

    pub fn upper_bonus(&self) -> u32 {
        if self.upper_total() >= UPPER_BONUS_THRESHOLD {
            UPPER_BONUS
        } else {
            0
        }
    }

    pub fn yahtzee_bonus(&self) -> u32 {
        self.yahtzee_bonus
    }

    pub fn total(&self) -> u32 {
        self.boxes.iter().map(|&(_, s)| s).sum::<u32>() + self.upper_bonus() + self.yahtzee_bonus
    }

    /// Scores a finished roll using the turn selection policy.
    ///
    /// Picks the highest-scoring open box the roll qualifies for. When every
    /// qualifying box is taken, the first open box in card order is scratched
    /// with 0 (Chance would still take the roll's sum). A roll that is a
    /// Yahtzee while the Yahtzee box already holds 50 also earns the bonus.
    /// A complete card is returned unchanged with no fill.
    pub fn apply_best(&self, dice: &[Die]) -> (ScoreCard, Option<Fill>) {
        let bonus = if combination::qualifies(Category::Yahtzee, dice)
            && self.get(Category::Yahtzee) == Some(YAHTZEE_SCORE)
        {
            YAHTZEE_BONUS
        } else {
            0
        };

        let chosen = combination::classify(dice)
            .into_iter()
            .find(|s| self.is_available(s.category))
            .map(|s| (s.category, s.score))
            .or_else(|| {
                Category::ALL
                    .into_iter()
                    .find(|&c| self.is_available(c))
                    .map(|c| {
                        let score = if c == Category::Chance { pip_sum(dice) } else { 0 };
                        (c, score)
                    })
            });

        let Some((category, score)) = chosen else {
            return (self.clone(), None);
        };

        let mut card = self.fill(category, score);
        if bonus > 0 {
            card = card.with_yahtzee_bonus();
        }
        (
            card,
            Some(Fill {
                category,
                score,
                bonus,
            }),
        )
    }
}

/// Round wins per player for the poker simulation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinTally {
    wins: BTreeMap<String, u32>,
}

impl WinTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_win(&self, name: &str) -> WinTally {
        let mut wins = self.wins.clone();
        *wins.entry(name.to_string()).or_insert(0) += 1;
        WinTally { wins }
    }

    pub fn add_wins<'a, I>(&self, names: I) -> WinTally
    where
        I: IntoIterator<Item = &'a str>,
    {
        names
            .into_iter()
            .fold(self.clone(), |tally, name| tally.add_win(name))
    }

    pub fn wins(&self, name: &str) -> u32 {
        self.wins.get(name).copied().unwrap_or(0)
    }

    /// Every `(name, wins)` pair, most wins first (ties by name).
    pub fn standings(&self) -> Vec<(String, u32)> {
        let mut rows: Vec<(String, u32)> = self.wins.iter().map(|(n, w)| (n.clone(), *w)).collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        rows
    }

    /// The highest win count and everyone who reached it.
    pub fn leaders(&self) -> Option<(u32, Vec<String>)> {
        let max = self.wins.values().copied().max()?;
        let names = self
            .wins
            .iter()
            .filter(|(_, w)| **w == max)
            .map(|(n, _)| n.clone())
            .collect();
        Some((max, names))
    }
}
