use std::fmt;

use serde::{Deserialize, Serialize};

use crate::deck::Deck;
use crate::entropy::Entropy;

/// Number of dice in a Yahtzee cup.
pub const CUP_SIZE: usize = 5;

/// Face value of a six-sided die.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Pip {
    One = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
}

impl Pip {
    pub const ALL: [Pip; 6] = [Pip::One, Pip::Two, Pip::Three, Pip::Four, Pip::Five, Pip::Six];

    pub fn from_u8(v: u8) -> Option<Pip> {
        match v {
            1 => Some(Pip::One),
            2 => Some(Pip::Two),
            3 => Some(Pip::Three),
            4 => Some(Pip::Four),
            5 => Some(Pip::Five),
            6 => Some(Pip::Six),
            _ => None,
        }
    }

    pub fn value(self) -> u32 {
        self as u32
    }
}

/// A single die showing one pip value.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Die {
    pub pip: Pip,
}

impl Die {
    pub const fn new(pip: Pip) -> Self {
        Self { pip }
    }

    pub fn roll(entropy: &mut dyn Entropy) -> Self {
        let idx = entropy.next_int(0, Pip::ALL.len()) % Pip::ALL.len();
        Self::new(Pip::ALL[idx])
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pip.value())
    }
}

/// Builds a cup from raw pip values, skipping anything outside 1..=6.
pub fn cup_of(values: &[u8]) -> Deck<Die> {
    values
        .iter()
        .filter_map(|&v| Pip::from_u8(v))
        .map(Die::new)
        .collect()
}

/// Rolls `n` fresh dice.
pub fn roll_cup(n: usize, entropy: &mut dyn Entropy) -> Deck<Die> {
    (0..n).map(|_| Die::roll(entropy)).collect()
}

/// Sum of every die in the slice.
pub fn pip_sum(dice: &[Die]) -> u32 {
    dice.iter().map(|d| d.pip.value()).sum()
}

/// Per-pip counts, indexed by `pip as usize` (index 0 unused).
pub(crate) fn pip_counts(dice: &[Die]) -> [u8; 7] {
    let mut counts = [0u8; 7];
    for d in dice {
        counts[d.pip as usize] += 1;
    }
    counts
}
