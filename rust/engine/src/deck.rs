use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::entropy::Entropy;
use crate::errors::GameError;

/// Ordered, immutable collection of symbols (cards or dice).
///
/// Index 0 is the bottom of the deck and the last element is the top. Every
/// operation borrows `self` and returns a new `Deck`; the receiver is never
/// modified.
///
/// # Examples
///
/// ```
/// use parlor_engine::cards::{full_deck, Rank};
/// use parlor_engine::entropy::SeededEntropy;
///
/// let deck = full_deck();
/// let small = deck
///     .shuffle(&mut SeededEntropy::new_with_seed(42))
///     .sorted()
///     .keep(|c| matches!(c.rank, Rank::Two | Rank::Three | Rank::Five | Rank::Seven));
/// assert_eq!(small.len(), 16);
/// assert_eq!(deck.len(), 52);
///
/// let (rest, drawn) = small.draw().expect("deck has cards");
/// assert_eq!(rest.len(), 15);
/// assert_eq!(Some(&drawn), small.top());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck<T> {
    items: Vec<T>,
}

impl<T> Default for Deck<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Deck<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// The element a [`Deck::draw`] would return.
    pub fn top(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn bottom(&self) -> Option<&T> {
        self.items.first()
    }
}

impl<T: Clone> Deck<T> {
    /// Uniform permutation (Fisher–Yates) using only the supplied entropy.
    pub fn shuffle(&self, entropy: &mut dyn Entropy) -> Self {
        let mut items = self.items.clone();
        for i in (1..items.len()).rev() {
            let j = entropy.next_int(0, i + 1) % (i + 1);
            items.swap(i, j);
        }
        Self { items }
    }

    /// Stable sort by a caller-supplied ordering.
    pub fn sort_by<F>(&self, compare: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut items = self.items.clone();
        items.sort_by(compare);
        Self { items }
    }

    pub fn keep<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().filter(|x| predicate(x)).cloned().collect()
    }

    pub fn remove<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.keep(|x| !predicate(x))
    }

    pub fn add_to_top(&self, item: T) -> Self {
        let mut items = self.items.clone();
        items.push(item);
        Self { items }
    }

    pub fn add_to_bottom(&self, item: T) -> Self {
        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.push(item);
        items.extend(self.items.iter().cloned());
        Self { items }
    }

    /// Concatenates `self` then `other`; `other` ends up on top.
    pub fn add_deck(&self, other: &Deck<T>) -> Self {
        self.items.iter().chain(other.items.iter()).cloned().collect()
    }

    /// Sub-collection for `range`, clamped to the deck bounds.
    pub fn slice(&self, range: Range<usize>) -> Self {
        let end = range.end.min(self.items.len());
        let start = range.start.min(end);
        Self {
            items: self.items[start..end].to_vec(),
        }
    }

    pub fn map<U, F>(&self, f: F) -> Deck<U>
    where
        F: FnMut(&T) -> U,
    {
        self.items.iter().map(f).collect()
    }

    /// Removes the top element, returning the remaining deck and the drawn symbol.
    pub fn draw(&self) -> Result<(Self, T), GameError> {
        let mut items = self.items.clone();
        let drawn = items.pop().ok_or(GameError::EmptyCollection)?;
        Ok((Self { items }, drawn))
    }

    /// Removes the top `n` elements as one block, keeping their relative order.
    pub fn draw_n(&self, n: usize) -> Result<(Self, Deck<T>), GameError> {
        let available = self.items.len();
        if n > available {
            return Err(GameError::InsufficientCards {
                requested: n,
                available,
            });
        }
        let split = available - n;
        Ok((self.slice(0..split), self.slice(split..available)))
    }
}

impl<T: Clone + Ord> Deck<T> {
    pub fn sorted(&self) -> Self {
        self.sort_by(Ord::cmp)
    }
}

impl<T: Clone + Eq + Hash> Deck<T> {
    /// De-duplicates by structural equality; the first occurrence (closest to the bottom) wins.
    pub fn remove_duplicates(&self) -> Self {
        let mut seen = HashSet::with_capacity(self.items.len());
        self.keep(|x| seen.insert(x.clone()))
    }
}

impl<T> From<Vec<T>> for Deck<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for Deck<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Deck<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for Deck<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<T: fmt::Display> fmt::Display for Deck<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::ScriptedEntropy;

    fn numbers(n: u32) -> Deck<u32> {
        (1..=n).collect()
    }

    #[test]
    fn draw_takes_top_and_leaves_source_intact() {
        let deck = numbers(3);
        let (rest, drawn) = deck.draw().unwrap();
        assert_eq!(drawn, 3);
        assert_eq!(rest, Deck::from(vec![1, 2]));
        assert_eq!(deck, numbers(3));
    }

    struct Overshoot;

    impl Entropy for Overshoot {
        fn next_int(&mut self, _low: usize, high: usize) -> usize {
            high
        }
    }

    #[test]
    fn shuffle_survives_out_of_range_entropy() {
        let shuffled = numbers(6).shuffle(&mut Overshoot);
        assert_eq!(shuffled.len(), 6);
        assert_eq!(shuffled.sorted(), numbers(6));
    }

    #[test]
    fn draw_on_empty_is_an_error() {
        let deck: Deck<u32> = Deck::new();
        assert_eq!(deck.draw().unwrap_err(), GameError::EmptyCollection);
    }

    #[test]
    fn draw_n_keeps_block_order() {
        let (rest, hand) = numbers(7).draw_n(5).unwrap();
        assert_eq!(rest, Deck::from(vec![1, 2]));
        assert_eq!(hand, Deck::from(vec![3, 4, 5, 6, 7]));
        assert_eq!(
            numbers(2).draw_n(5).unwrap_err(),
            GameError::InsufficientCards {
                requested: 5,
                available: 2
            }
        );
    }

    #[test]
    fn keep_and_remove_are_complements() {
        let deck = numbers(10);
        let evens = deck.keep(|x| x % 2 == 0);
        let odds = deck.remove(|x| x % 2 == 0);
        assert_eq!(evens, Deck::from(vec![2, 4, 6, 8, 10]));
        assert_eq!(odds, Deck::from(vec![1, 3, 5, 7, 9]));
        assert_eq!(evens.len() + odds.len(), deck.len());
    }

    #[test]
    fn add_operations_respect_ends() {
        let deck = numbers(2);
        assert_eq!(deck.add_to_top(9), Deck::from(vec![1, 2, 9]));
        assert_eq!(deck.add_to_bottom(9), Deck::from(vec![9, 1, 2]));
        assert_eq!(
            deck.add_deck(&Deck::from(vec![7, 8])),
            Deck::from(vec![1, 2, 7, 8])
        );
    }

    #[test]
    fn remove_duplicates_keeps_first_occurrence() {
        let deck = Deck::from(vec![3, 1, 3, 2, 1]);
        assert_eq!(deck.remove_duplicates(), Deck::from(vec![3, 1, 2]));
    }

    #[test]
    fn sort_by_is_stable() {
        let deck = Deck::from(vec![(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')]);
        let sorted = deck.sort_by(|a, b| a.0.cmp(&b.0));
        assert_eq!(
            sorted,
            Deck::from(vec![(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c')])
        );
    }

    #[test]
    fn shuffle_consumes_only_supplied_entropy() {
        // Fisher–Yates from the top: i=3 swaps with 0, i=2 with 2, i=1 with 1.
        let mut e = ScriptedEntropy::new([0, 2, 1]);
        let shuffled = numbers(4).shuffle(&mut e);
        assert_eq!(shuffled, Deck::from(vec![4, 2, 3, 1]));
        assert_eq!(e.remaining(), 0);
    }

    #[test]
    fn slice_clamps_bounds() {
        let deck = numbers(5);
        assert_eq!(deck.slice(1..3), Deck::from(vec![2, 3]));
        assert_eq!(deck.slice(3..99), Deck::from(vec![4, 5]));
        assert!(deck.slice(9..12).is_empty());
    }

    #[test]
    fn display_lists_bottom_to_top() {
        assert_eq!(numbers(3).to_string(), "[1 2 3]");
    }
}
