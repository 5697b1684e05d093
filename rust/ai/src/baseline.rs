//! Baseline reroll strategy.
//!
//! Looks at the combinations the cup already satisfies and keeps the dice
//! that form the best of them. When nothing beyond the upper boxes and
//! Chance shows, it keeps the most frequent pip.

use parlor_engine::combination::{self, Category};
use parlor_engine::deck::Deck;
use parlor_engine::dice::{Die, Pip};
use parlor_engine::entropy::Entropy;
use parlor_engine::yahtzee::RerollStrategy;

/// Small-straight runs, highest first.
const RUNS: [[Pip; 4]; 3] = [
    [Pip::Three, Pip::Four, Pip::Five, Pip::Six],
    [Pip::Two, Pip::Three, Pip::Four, Pip::Five],
    [Pip::One, Pip::Two, Pip::Three, Pip::Four],
];

/// Combinations that use all five dice, so the cup is kept whole.
const MADE_HANDS: [Category; 3] = [
    Category::Yahtzee,
    Category::LargeStraight,
    Category::FullHouse,
];

/// Deterministic strategy that never consumes entropy.
///
/// # Strategy
///
/// - Yahtzee, Large Straight, Full House: keep all five (ends the turn)
/// - Small Straight: keep one die per pip of the highest run
/// - Three/Four of a Kind: keep the grouped dice
/// - otherwise: keep the most frequent pip, ties going to the higher pip
///
/// # Example
///
/// ```rust
/// use parlor_ai::baseline::BaselineStrategy;
/// use parlor_ai::RerollStrategy;
/// use parlor_engine::dice::cup_of;
/// use parlor_engine::entropy::ScriptedEntropy;
///
/// let kept = BaselineStrategy::new().keep(&cup_of(&[2, 5, 5, 1, 2]), &mut ScriptedEntropy::default());
/// assert_eq!(kept, cup_of(&[5, 5]));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BaselineStrategy;

impl BaselineStrategy {
    pub fn new() -> Self {
        Self
    }

    /// The lower-section combination worth chasing, if the cup shows one.
    ///
    /// Made hands win over the score order, so a high full house is not
    /// broken up for the three of a kind it also contains.
    fn target(cup: &Deck<Die>) -> Option<Category> {
        if let Some(made) = MADE_HANDS
            .into_iter()
            .find(|&c| combination::qualifies(c, cup.as_slice()))
        {
            return Some(made);
        }
        combination::classify(cup.as_slice())
            .into_iter()
            .map(|s| s.category)
            .find(|c| {
                !c.is_upper() && !matches!(c, Category::Chance | Category::NoCombination)
            })
    }

    fn most_frequent_pip(cup: &Deck<Die>) -> Option<Pip> {
        Pip::ALL
            .into_iter()
            .map(|p| (cup.iter().filter(|d| d.pip == p).count(), p))
            .filter(|&(n, _)| n > 0)
            .max()
            .map(|(_, p)| p)
    }

    fn keep_run(cup: &Deck<Die>) -> Deck<Die> {
        let present = |p: &Pip| cup.iter().any(|d| d.pip == *p);
        match RUNS.iter().find(|run| run.iter().all(|p| present(p))) {
            Some(run) => cup.keep(|d| run.contains(&d.pip)).remove_duplicates(),
            None => Deck::new(),
        }
    }

    fn keep_pip(cup: &Deck<Die>) -> Deck<Die> {
        match Self::most_frequent_pip(cup) {
            Some(pip) => cup.keep(|d| d.pip == pip),
            None => Deck::new(),
        }
    }
}

impl RerollStrategy for BaselineStrategy {
    fn keep(&self, cup: &Deck<Die>, _entropy: &mut dyn Entropy) -> Deck<Die> {
        let target = Self::target(cup);
        let kept = match target {
            Some(Category::Yahtzee | Category::LargeStraight | Category::FullHouse) => cup.clone(),
            Some(Category::SmallStraight) => Self::keep_run(cup),
            _ => Self::keep_pip(cup),
        };
        tracing::trace!(?target, %cup, %kept, "baseline keep");
        kept
    }

    fn name(&self) -> &str {
        "baseline"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parlor_engine::dice::cup_of;
    use parlor_engine::entropy::ScriptedEntropy;

    fn keep(values: &[u8]) -> Deck<Die> {
        BaselineStrategy::new().keep(&cup_of(values), &mut ScriptedEntropy::default())
    }

    #[test]
    fn made_hands_keep_everything() {
        assert_eq!(keep(&[4, 4, 4, 4, 4]).len(), 5);
        assert_eq!(keep(&[2, 6, 4, 3, 5]).len(), 5);
        assert_eq!(keep(&[2, 2, 3, 3, 3]).len(), 5);
    }

    #[test]
    fn high_full_house_is_not_broken_up() {
        // sum 28 puts Three of a Kind ahead of Full House in score order
        assert_eq!(keep(&[6, 6, 6, 5, 5]), cup_of(&[6, 6, 6, 5, 5]));
        assert_eq!(keep(&[5, 6, 5, 6, 6]).len(), 5);
    }

    #[test]
    fn small_straight_keeps_one_die_per_pip() {
        assert_eq!(keep(&[1, 2, 3, 4, 4]), cup_of(&[1, 2, 3, 4]));
        assert_eq!(keep(&[6, 3, 4, 5, 3]), cup_of(&[6, 3, 4, 5]));
    }

    #[test]
    fn groups_keep_the_grouped_pip() {
        assert_eq!(keep(&[5, 1, 5, 5, 5]), cup_of(&[5, 5, 5, 5]));
        assert_eq!(keep(&[2, 6, 2, 1, 2]), cup_of(&[2, 2, 2]));
    }

    #[test]
    fn frequency_ties_go_to_the_higher_pip() {
        assert_eq!(keep(&[3, 3, 6, 6, 1]), cup_of(&[6, 6]));
        assert_eq!(keep(&[1, 2, 4, 5, 6]), cup_of(&[6]));
    }

    #[test]
    fn never_touches_entropy() {
        let mut e = ScriptedEntropy::new([1, 2, 3]);
        BaselineStrategy::new().keep(&cup_of(&[1, 1, 2, 3, 5]), &mut e);
        assert_eq!(e.remaining(), 3);
    }
}
