use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::errors::GameError;

/// Number of cards in a classifiable poker hand.
pub const HAND_SIZE: usize = 5;

/// Poker hand categories, weakest first. The discriminant is the strength.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    /// Sentinel for hands that are not exactly five cards.
    NoRank = 0,
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl Category {
    pub fn strength(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::NoRank => "No Rank",
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified hand: the category tag, its tie-break sequence, and the cards.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PokerRank {
    pub category: Category,
    /// Compared element by element after the category; see [`compare_hands`].
    pub tie_breakers: Vec<Rank>,
    pub cards: Vec<Card>,
}

/// Classifies a hand into exactly one category.
///
/// Anything other than five cards yields [`Category::NoRank`] so partially
/// assembled hands can be probed freely.
///
/// # Examples
///
/// ```
/// use parlor_engine::cards::{Card, Rank, Suit};
/// use parlor_engine::hand::{classify, Category};
///
/// let wheel = [
///     Card::new(Suit::Clubs, Rank::Ace),
///     Card::new(Suit::Hearts, Rank::Two),
///     Card::new(Suit::Spades, Rank::Three),
///     Card::new(Suit::Clubs, Rank::Four),
///     Card::new(Suit::Diamonds, Rank::Five),
/// ];
/// let ranked = classify(&wheel);
/// assert_eq!(ranked.category, Category::Straight);
/// assert_eq!(ranked.tie_breakers, vec![Rank::Five]);
/// ```
pub fn classify(cards: &[Card]) -> PokerRank {
    let category = if cards.len() == HAND_SIZE {
        categorize(cards)
    } else {
        Category::NoRank
    };
    PokerRank {
        category,
        tie_breakers: tie_breakers(category, cards),
        cards: cards.to_vec(),
    }
}

/// Like [`classify`] but rejects hands of the wrong size.
pub fn classify_strict(cards: &[Card]) -> Result<PokerRank, GameError> {
    if cards.len() != HAND_SIZE {
        return Err(GameError::InvalidHandSize {
            expected: HAND_SIZE,
            actual: cards.len(),
        });
    }
    Ok(classify(cards))
}

/// Total order over classified hands: strength, then tie-breakers in sequence.
pub fn compare_hands(a: &PokerRank, b: &PokerRank) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a
            .tie_breakers
            .iter()
            .zip(b.tie_breakers.iter())
            .map(|(x, y)| x.cmp(y))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal),
        ord => ord,
    }
}

fn categorize(cards: &[Card]) -> Category {
    let groups = rank_groups(cards);
    let flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight_high = straight_high_card(cards);

    let has_count = |n: usize| groups.iter().any(|&(_, c)| c == n);
    let pairs = groups.iter().filter(|&&(_, c)| c == 2).count();

    match straight_high {
        Some(Rank::Ace) if flush => return Category::RoyalFlush,
        Some(_) if flush => return Category::StraightFlush,
        _ => {}
    }
    if has_count(4) {
        Category::FourOfAKind
    } else if has_count(3) && has_count(2) {
        Category::FullHouse
    } else if flush {
        Category::Flush
    } else if straight_high.is_some() {
        Category::Straight
    } else if has_count(3) {
        Category::ThreeOfAKind
    } else if pairs == 2 {
        Category::TwoPair
    } else if pairs == 1 {
        Category::OnePair
    } else {
        Category::HighCard
    }
}

fn tie_breakers(category: Category, cards: &[Card]) -> Vec<Rank> {
    match category {
        Category::HighCard | Category::Flush => {
            let mut ranks: Vec<Rank> = cards.iter().map(|c| c.rank).collect();
            ranks.sort_unstable_by(|a, b| b.cmp(a));
            ranks
        }
        Category::OnePair
        | Category::TwoPair
        | Category::ThreeOfAKind
        | Category::FourOfAKind => rank_groups(cards)
            .into_iter()
            .flat_map(|(rank, count)| std::iter::repeat_n(rank, count))
            .collect(),
        Category::FullHouse => rank_groups(cards).into_iter().map(|(r, _)| r).collect(),
        Category::Straight | Category::StraightFlush => {
            straight_high_card(cards).into_iter().collect()
        }
        Category::RoyalFlush | Category::NoRank => Vec::new(),
    }
}

/// Rank groups ordered by size descending, then rank descending.
fn rank_groups(cards: &[Card]) -> Vec<(Rank, usize)> {
    let mut counts = [0usize; 15];
    for c in cards {
        counts[c.rank.value() as usize] += 1;
    }
    let mut groups: Vec<(Rank, usize)> = (2..=14u8)
        .rev()
        .filter(|&r| counts[r as usize] > 0)
        .filter_map(|r| Rank::from_u8(r).map(|rank| (rank, counts[r as usize])))
        .collect();
    groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
    groups
}

/// High card of a five-card run, if the hand is one.
///
/// The wheel (A-2-3-4-5) counts as Five-high; Ace is otherwise never low.
pub fn straight_high_card(cards: &[Card]) -> Option<Rank> {
    if cards.len() != HAND_SIZE {
        return None;
    }
    let mut vals: Vec<u8> = cards.iter().map(|c| c.rank.value()).collect();
    vals.sort_unstable();
    if vals == [2, 3, 4, 5, 14] {
        return Some(Rank::Five);
    }
    let sequential = vals.windows(2).all(|w| w[1] == w[0] + 1);
    if sequential {
        Rank::from_u8(vals[HAND_SIZE - 1])
    } else {
        None
    }
}
