use std::fmt;

use serde::{Deserialize, Serialize};

use crate::deck::Deck;

/// Represents one of the four suits in a standard 52-card deck.
/// Declaration order is the deck build order (suit-major).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit (♣)
    Clubs,
    /// Diamonds suit (♦)
    Diamonds,
    /// Hearts suit (♥)
    Hearts,
    /// Spades suit (♠)
    Spades,
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// Ace is always high; the wheel straight is special-cased in [`crate::hand`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14)
    Ace,
}

impl Rank {
    pub fn from_u8(v: u8) -> Option<Rank> {
        match v {
            2 => Some(Rank::Two),
            3 => Some(Rank::Three),
            4 => Some(Rank::Four),
            5 => Some(Rank::Five),
            6 => Some(Rank::Six),
            7 => Some(Rank::Seven),
            8 => Some(Rank::Eight),
            9 => Some(Rank::Nine),
            10 => Some(Rank::Ten),
            11 => Some(Rank::Jack),
            12 => Some(Rank::Queen),
            13 => Some(Rank::King),
            14 => Some(Rank::Ace),
            _ => None,
        }
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    /// Single-character label: `2`..`9`, `T`, `J`, `Q`, `K`, `A`.
    pub fn symbol(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "T",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

/// Represents a single playing card with a suit and rank.
/// Field order makes the derived ordering suit-major, matching the deck build order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card (Clubs, Diamonds, Hearts, or Spades)
    pub suit: Suit,
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self.suit {
            Suit::Clubs => "c",
            Suit::Diamonds => "d",
            Suit::Hearts => "h",
            Suit::Spades => "s",
        };
        write!(f, "{}{}", self.rank.symbol(), suit)
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

/// Builds the 52-card deck in its invariant order: suit-major, rank-minor.
pub fn full_deck() -> Deck<Card> {
    all_suits()
        .into_iter()
        .flat_map(|s| all_ranks().into_iter().map(move |r| Card::new(s, r)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_deck_follows_build_order() {
        let deck = full_deck();
        assert_eq!(deck.len(), 52);
        assert_eq!(deck.as_slice()[0], Card::new(Suit::Clubs, Rank::Two));
        assert_eq!(deck.as_slice()[12], Card::new(Suit::Clubs, Rank::Ace));
        assert_eq!(deck.as_slice()[13], Card::new(Suit::Diamonds, Rank::Two));
        assert_eq!(deck.top(), Some(&Card::new(Suit::Spades, Rank::Ace)));
        assert_eq!(deck.sorted(), deck);
    }

    #[test]
    fn rank_round_trips_through_u8() {
        for r in all_ranks() {
            assert_eq!(Rank::from_u8(r.value()), Some(r));
        }
        assert_eq!(Rank::from_u8(1), None);
        assert_eq!(Rank::from_u8(15), None);
    }

    #[test]
    fn card_display_is_compact() {
        assert_eq!(Card::new(Suit::Spades, Rank::Ace).to_string(), "As");
        assert_eq!(Card::new(Suit::Hearts, Rank::Ten).to_string(), "Th");
        assert_eq!(Card::new(Suit::Clubs, Rank::Two).to_string(), "2c");
    }
}
