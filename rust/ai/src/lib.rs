//! # parlor-ai: reroll strategies for the Yahtzee simulation
//!
//! Every strategy implements [`RerollStrategy`] from the engine, so the
//! simulation can swap heuristics without knowing which one it runs.
//!
//! ## Quick Start
//!
//! ```rust
//! use parlor_ai::create_strategy;
//! use parlor_engine::entropy::SeededEntropy;
//! use parlor_engine::yahtzee::{play_turn, RerollStrategy};
//!
//! let strategy = create_strategy("baseline").expect("known strategy");
//! let cup = play_turn(strategy.as_ref(), &mut SeededEntropy::new_with_seed(42));
//! assert_eq!(cup.len(), 5);
//! assert_eq!(strategy.name(), "baseline");
//! ```
//!
//! ## Strategies
//!
//! - `"baseline"` - chase the best combination already showing
//! - `"high"` - keep every die showing four or more
//! - `"random"` - keep an entropy-chosen number of dice

use thiserror::Error;

pub use parlor_engine::yahtzee::RerollStrategy;

pub mod baseline;
pub mod simple;

/// Names accepted by [`create_strategy`].
pub const STRATEGY_NAMES: [&str; 3] = ["baseline", "high", "random"];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AiError {
    #[error("Unknown strategy: {0} (expected one of: baseline, high, random)")]
    UnknownStrategy(String),
}

/// Factory for reroll strategies by name (case-insensitive).
///
/// # Example
///
/// ```rust
/// use parlor_ai::{create_strategy, AiError};
///
/// assert_eq!(create_strategy("HIGH").unwrap().name(), "high");
/// assert!(matches!(create_strategy("greedy"), Err(AiError::UnknownStrategy(_))));
/// ```
pub fn create_strategy(name: &str) -> Result<Box<dyn RerollStrategy>, AiError> {
    match name.trim().to_ascii_lowercase().as_str() {
        "baseline" => Ok(Box::new(baseline::BaselineStrategy::new())),
        "high" => Ok(Box::new(simple::HighDiceStrategy::default())),
        "random" => Ok(Box::new(simple::RandomKeepStrategy)),
        _ => Err(AiError::UnknownStrategy(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_name_builds() {
        for name in STRATEGY_NAMES {
            assert_eq!(create_strategy(name).unwrap().name(), name);
        }
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = create_strategy("greedy").err().unwrap();
        assert_eq!(err, AiError::UnknownStrategy("greedy".to_string()));
        assert!(err.to_string().contains("greedy"));
    }
}
