//! Card, dice and score formatters for terminal display.
//!
//! Pure functions; nothing here writes to a stream. Suits render as Unicode
//! symbols with an ASCII letter fallback for terminals that lack them.
//!
//! ## Example
//!
//! ```rust
//! use parlor_engine::cards::{Card, Rank, Suit};
//! use parlor_cli::formatters::{format_card, format_cards};
//!
//! let ace_spades = Card::new(Suit::Spades, Rank::Ace);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! assert!(format_cards(&[ace_spades]).starts_with("[A"));
//! ```

use parlor_engine::cards::{Card, Rank, Suit};
use parlor_engine::dice::Die;
use parlor_engine::scorecard::{Fill, ScoreCard};

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

/// Format a Rank as a string (2-9, T, J, Q, K, A).
pub fn format_rank(rank: &Rank) -> String {
    rank.symbol().to_string()
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// Format a hand or deck in bracket notation, bottom card first.
///
/// # Example
///
/// ```rust
/// use parlor_engine::cards::{Card, Rank, Suit};
/// # use parlor_cli::formatters::format_cards;
///
/// let hand = vec![
///     Card::new(Suit::Spades, Rank::Ace),
///     Card::new(Suit::Hearts, Rank::King),
/// ];
/// let formatted = format_cards(&hand);
/// assert!(formatted.starts_with("[A"));
/// assert!(formatted.ends_with("]"));
/// assert_eq!(format_cards(&[]), "[]");
/// ```
pub fn format_cards(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

pub fn format_dice(dice: &[Die]) -> String {
    let formatted: Vec<String> = dice.iter().map(ToString::to_string).collect();
    format!("[{}]", formatted.join(" "))
}

/// What a turn wrote, e.g. `Sixes 18` or `Chance 23 +100 bonus`.
pub fn format_fill(fill: Option<&Fill>) -> String {
    match fill {
        None => "card full".to_string(),
        Some(f) if f.bonus > 0 => format!("{} {} +{} bonus", f.category, f.score, f.bonus),
        Some(f) => format!("{} {}", f.category, f.score),
    }
}

/// One-line score card summary.
pub fn format_scorecard(card: &ScoreCard) -> String {
    format!(
        "upper {} (+{}), yahtzee bonus {}, total {}",
        card.upper_total(),
        card.upper_bonus(),
        card.yahtzee_bonus(),
        card.total()
    )
}
