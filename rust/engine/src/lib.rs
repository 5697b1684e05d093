//! # parlor-engine: card and dice classification core
//!
//! Immutable decks with pipeline combinators, a five-card poker classifier
//! with a deterministic tie-break comparator, a non-exclusive Yahtzee
//! classifier, and score accumulation. Randomness is always injected, so a
//! seed reproduces every shuffle and roll.
//!
//! ## Core Modules
//!
//! - [`cards`] - Suit, Rank, Card and the 52-card build order
//! - [`dice`] - Pip, Die and cup helpers
//! - [`deck`] - Immutable ordered collection with transform operations
//! - [`pipeline`] - `map` / `tap` / `fork` combinators
//! - [`hand`] - Poker classification and comparison
//! - [`combination`] - Yahtzee categories and scoring
//! - [`scorecard`] - Score cards and win tallies
//! - [`player`] - Named hand + score holder
//! - [`poker`] / [`yahtzee`] - Round simulations
//! - [`entropy`] - Seeded and scripted randomness providers
//! - [`logger`] - JSONL round records
//! - [`errors`] - Error types
//!
//! ## Quick Start
//!
//! ```rust
//! use parlor_engine::cards::{Card, Rank, Suit};
//! use parlor_engine::hand::{classify, Category};
//!
//! let hand = [
//!     Card::new(Suit::Hearts, Rank::Ace),
//!     Card::new(Suit::Hearts, Rank::King),
//!     Card::new(Suit::Hearts, Rank::Queen),
//!     Card::new(Suit::Hearts, Rank::Jack),
//!     Card::new(Suit::Hearts, Rank::Ten),
//! ];
//! assert_eq!(classify(&hand).category, Category::RoyalFlush);
//! ```
//!
//! ## Scoring Dice
//!
//! ```rust
//! use parlor_engine::combination::{classify, Category};
//! use parlor_engine::dice::cup_of;
//! use parlor_engine::scorecard::ScoreCard;
//!
//! let roll = cup_of(&[6, 6, 6, 6, 6]);
//! assert_eq!(classify(roll.as_slice())[0].category, Category::Yahtzee);
//!
//! let (card, _) = ScoreCard::new().apply_best(roll.as_slice());
//! assert_eq!(card.total(), 50);
//! ```

pub mod cards;
pub mod combination;
pub mod deck;
pub mod dice;
pub mod entropy;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod pipeline;
pub mod player;
pub mod poker;
pub mod scorecard;
pub mod yahtzee;
