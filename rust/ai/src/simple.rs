//! Single-rule strategies, mostly useful as opponents for the baseline.

use parlor_engine::deck::Deck;
use parlor_engine::dice::{Die, CUP_SIZE};
use parlor_engine::entropy::Entropy;
use parlor_engine::yahtzee::RerollStrategy;

/// Keeps every die at or above `threshold`.
#[derive(Debug, Clone)]
pub struct HighDiceStrategy {
    threshold: u32,
}

impl HighDiceStrategy {
    pub fn new(threshold: u32) -> Self {
        Self { threshold }
    }
}

impl Default for HighDiceStrategy {
    fn default() -> Self {
        Self::new(4)
    }
}

impl RerollStrategy for HighDiceStrategy {
    fn keep(&self, cup: &Deck<Die>, _entropy: &mut dyn Entropy) -> Deck<Die> {
        cup.keep(|d| d.pip.value() >= self.threshold)
    }

    fn name(&self) -> &str {
        "high"
    }
}

/// Keeps a random count of dice (0 to 5) from the top of the cup.
#[derive(Debug, Clone, Default)]
pub struct RandomKeepStrategy;

impl RerollStrategy for RandomKeepStrategy {
    fn keep(&self, cup: &Deck<Die>, entropy: &mut dyn Entropy) -> Deck<Die> {
        let count = entropy.next_int(0, CUP_SIZE + 1);
        cup.slice(cup.len().saturating_sub(count)..cup.len())
    }

    fn name(&self) -> &str {
        "random"
    }
}
