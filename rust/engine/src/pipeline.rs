//! Value-level combinators for building declarative transform chains.
//!
//! [`Deck`](crate::deck::Deck) already returns fresh values from every
//! operation; these helpers glue whole-value steps (observers, forks,
//! arbitrary projections) into the same chain.
//!
//! ```
//! use parlor_engine::cards::{full_deck, Card, Rank, Suit};
//! use parlor_engine::pipeline::Pipe;
//!
//! let mut seen = Vec::new();
//! let merged = full_deck()
//!     .keep(|c| c.rank == Rank::Two)
//!     .tap(|d| seen.push(d.len()))
//!     .fork(
//!         |d| d.add_to_top(Card::new(Suit::Spades, Rank::Ace)),
//!         |d| d.add_to_bottom(Card::new(Suit::Diamonds, Rank::King)),
//!         |top, bottom| bottom.add_deck(&top).remove_duplicates(),
//!     );
//! assert_eq!(seen, vec![4]);
//! assert_eq!(merged.len(), 6);
//! ```

/// Applies `f` to the whole value.
pub fn map<T, U, F>(value: T, f: F) -> U
where
    F: FnOnce(T) -> U,
{
    f(value)
}

/// Shows `value` to `observer` and hands it back untouched.
///
/// The observer only gets a shared borrow, so it cannot alter what flows on.
pub fn tap<T, F>(value: T, observer: F) -> T
where
    F: FnOnce(&T),
{
    observer(&value);
    value
}

/// Runs two independent transforms on the same snapshot and joins the results.
///
/// `combine` receives `(first(value), second(value))` in that order.
pub fn fork<T, A, B, R, F, G, C>(value: &T, first: F, second: G, combine: C) -> R
where
    F: FnOnce(&T) -> A,
    G: FnOnce(&T) -> B,
    C: FnOnce(A, B) -> R,
{
    let a = first(value);
    let b = second(value);
    combine(a, b)
}

/// Method-call form of the combinators, available on every sized value.
pub trait Pipe: Sized {
    fn pipe<U, F>(self, f: F) -> U
    where
        F: FnOnce(Self) -> U,
    {
        map(self, f)
    }

    fn tap<F>(self, observer: F) -> Self
    where
        F: FnOnce(&Self),
    {
        tap(self, observer)
    }

    fn fork<A, B, R, F, G, C>(self, first: F, second: G, combine: C) -> R
    where
        F: FnOnce(&Self) -> A,
        G: FnOnce(&Self) -> B,
        C: FnOnce(A, B) -> R,
    {
        fork(&self, first, second, combine)
    }
}

impl<T> Pipe for T {}
