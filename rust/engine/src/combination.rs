//! Yahtzee combinations: every scoring box a roll qualifies for.
//!
//! Unlike poker hands, dice categories are not exclusive. A single roll of
//! five sixes is at once a Yahtzee, Four and Three of a Kind, Sixes and
//! Chance, so [`classify`] returns all of them, best score first.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dice::{pip_counts, pip_sum, Die, Pip, CUP_SIZE};
use crate::errors::GameError;

pub const FULL_HOUSE_SCORE: u32 = 25;
pub const SMALL_STRAIGHT_SCORE: u32 = 30;
pub const LARGE_STRAIGHT_SCORE: u32 = 40;
pub const YAHTZEE_SCORE: u32 = 50;

const SMALL_RUNS: [[u8; 4]; 3] = [[1, 2, 3, 4], [2, 3, 4, 5], [3, 4, 5, 6]];
const LARGE_RUNS: [[u8; 5]; 2] = [[1, 2, 3, 4, 5], [2, 3, 4, 5, 6]];

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    Ones,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    ThreeOfAKind,
    FourOfAKind,
    FullHouse,
    SmallStraight,
    LargeStraight,
    Yahtzee,
    Chance,
    /// Sentinel for cups that are not exactly five dice.
    NoCombination,
}

impl Category {
    /// The thirteen scoring boxes, in score card order.
    pub const ALL: [Category; 13] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
        Category::ThreeOfAKind,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::SmallStraight,
        Category::LargeStraight,
        Category::Yahtzee,
        Category::Chance,
    ];

    pub const UPPER: [Category; 6] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
    ];

    /// Precedence among equal scores; higher wins.
    pub fn strength(self) -> u8 {
        match self {
            Category::Yahtzee => 13,
            Category::LargeStraight => 12,
            Category::SmallStraight => 11,
            Category::FullHouse => 10,
            Category::FourOfAKind => 9,
            Category::ThreeOfAKind => 8,
            Category::Sixes => 7,
            Category::Fives => 6,
            Category::Fours => 5,
            Category::Threes => 4,
            Category::Twos => 3,
            Category::Ones => 2,
            Category::Chance => 1,
            Category::NoCombination => 0,
        }
    }

    /// The pip an upper-section box counts, if this is one.
    pub fn upper_pip(self) -> Option<Pip> {
        match self {
            Category::Ones => Some(Pip::One),
            Category::Twos => Some(Pip::Two),
            Category::Threes => Some(Pip::Three),
            Category::Fours => Some(Pip::Four),
            Category::Fives => Some(Pip::Five),
            Category::Sixes => Some(Pip::Six),
            _ => None,
        }
    }

    pub fn is_upper(self) -> bool {
        self.upper_pip().is_some()
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Ones => "Ones",
            Category::Twos => "Twos",
            Category::Threes => "Threes",
            Category::Fours => "Fours",
            Category::Fives => "Fives",
            Category::Sixes => "Sixes",
            Category::ThreeOfAKind => "ThreeOfAKind",
            Category::FourOfAKind => "FourOfAKind",
            Category::FullHouse => "FullHouse",
            Category::SmallStraight => "SmallStraight",
            Category::LargeStraight => "LargeStraight",
            Category::Yahtzee => "Yahtzee",
            Category::Chance => "Chance",
            Category::NoCombination => "NoCombination",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .chain(std::iter::once(Category::NoCombination))
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| GameError::UnknownCategory(s.to_string()))
    }
}

/// A qualifying category and what it would score for the roll.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Scored {
    pub category: Category,
    pub score: u32,
}

/// Whether the roll satisfies the category's predicate.
pub fn qualifies(category: Category, dice: &[Die]) -> bool {
    if dice.len() != CUP_SIZE {
        return false;
    }
    let counts = pip_counts(dice);
    let has_group = |n: u8| counts.iter().any(|&c| c >= n);
    let present = |pip: u8| counts[pip as usize] > 0;
    match category {
        Category::Yahtzee => has_group(5),
        Category::FourOfAKind => has_group(4),
        Category::ThreeOfAKind => has_group(3),
        Category::FullHouse => counts.contains(&3) && counts.contains(&2),
        Category::LargeStraight => LARGE_RUNS.iter().any(|run| run.iter().all(|&p| present(p))),
        Category::SmallStraight => SMALL_RUNS.iter().any(|run| run.iter().all(|&p| present(p))),
        Category::Chance => true,
        Category::NoCombination => false,
        upper => upper
            .upper_pip()
            .is_some_and(|pip| present(pip as u8)),
    }
}

/// Points the roll earns in `category`; zero when it does not qualify.
pub fn score(category: Category, dice: &[Die]) -> u32 {
    if !qualifies(category, dice) {
        return 0;
    }
    match category {
        Category::ThreeOfAKind | Category::FourOfAKind | Category::Chance => pip_sum(dice),
        Category::FullHouse => FULL_HOUSE_SCORE,
        Category::SmallStraight => SMALL_STRAIGHT_SCORE,
        Category::LargeStraight => LARGE_STRAIGHT_SCORE,
        Category::Yahtzee => YAHTZEE_SCORE,
        Category::NoCombination => 0,
        upper => match upper.upper_pip() {
            Some(pip) => dice
                .iter()
                .filter(|d| d.pip == pip)
                .map(|d| d.pip.value())
                .sum(),
            None => 0,
        },
    }
}

/// All categories the roll satisfies, ordered by score then strength (both descending).
///
/// A cup that is not exactly five dice yields the single sentinel entry.
///
/// # Examples
///
/// ```
/// use parlor_engine::combination::{classify, Category};
/// use parlor_engine::dice::cup_of;
///
/// let roll = cup_of(&[3, 3, 3, 5, 5]);
/// let found = classify(roll.as_slice());
/// assert_eq!(found[0].category, Category::FullHouse);
/// assert!(found.iter().any(|s| s.category == Category::ThreeOfAKind && s.score == 19));
/// ```
pub fn classify(dice: &[Die]) -> Vec<Scored> {
    if dice.len() != CUP_SIZE {
        return vec![Scored {
            category: Category::NoCombination,
            score: 0,
        }];
    }
    let mut found: Vec<Scored> = Category::ALL
        .into_iter()
        .filter(|&c| qualifies(c, dice))
        .map(|category| Scored {
            category,
            score: score(category, dice),
        })
        .collect();
    found.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then(b.category.strength().cmp(&a.category.strength()))
    });
    found
}

/// The top entry of [`classify`].
pub fn best(dice: &[Die]) -> Scored {
    classify(dice)
        .into_iter()
        .next()
        .unwrap_or(Scored {
            category: Category::NoCombination,
            score: 0,
        })
}
