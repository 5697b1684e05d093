use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Cannot draw from an empty collection")]
    EmptyCollection,
    #[error("Not enough symbols to draw {requested} (only {available} left)")]
    InsufficientCards { requested: usize, available: usize },
    #[error("Invalid hand size: {actual}, expected {expected}")]
    InvalidHandSize { expected: usize, actual: usize },
    #[error("At least one player is required")]
    NoPlayers,
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}
