//! Deck command: walks a deck through the transform pipeline and narrates
//! every step.
//!
//! ## Example Output
//!
//! ```text
//! Seed: 42
//! Created: 52 cards
//! Shuffled: top is 9d
//! Sorted: top is As
//! Kept 2, 3, 5, 7: 16 cards
//! Removed hearts: 12 cards
//! Forked: 14 cards, bottom Kd, top As
//! Drew As, 13 cards remain
//! ```

use std::io::Write;

use parlor_engine::cards::{Card, Rank, Suit, full_deck};
use parlor_engine::deck::Deck;
use parlor_engine::entropy::SeededEntropy;
use parlor_engine::pipeline::Pipe;

use crate::error::CliError;
use crate::formatters::format_cards;

const KEPT_RANKS: [Rank; 4] = [Rank::Two, Rank::Three, Rank::Five, Rank::Seven];

fn describe_top(deck: &Deck<Card>) -> String {
    deck.top().map_or_else(|| "-".to_string(), ToString::to_string)
}

pub fn handle_deck_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut entropy = SeededEntropy::new_with_seed(seed);
    let mut steps: Vec<String> = Vec::new();

    let deck = full_deck()
        .tap(|d| steps.push(format!("Created: {} cards", d.len())))
        .shuffle(&mut entropy)
        .tap(|d| steps.push(format!("Shuffled: top is {}", describe_top(d))))
        .sorted()
        .tap(|d| steps.push(format!("Sorted: top is {}", describe_top(d))))
        .keep(|c| KEPT_RANKS.contains(&c.rank))
        .tap(|d| steps.push(format!("Kept 2, 3, 5, 7: {} cards", d.len())))
        .remove(|c| c.suit == Suit::Hearts)
        .tap(|d| steps.push(format!("Removed hearts: {} cards", d.len())))
        .fork(
            |d| d.add_to_top(Card::new(Suit::Spades, Rank::Ace)),
            |d| d.add_to_bottom(Card::new(Suit::Diamonds, Rank::King)),
            |top, bottom| bottom.add_deck(&top).remove_duplicates(),
        )
        .tap(|d| {
            let bottom = d.bottom().map_or_else(|| "-".to_string(), ToString::to_string);
            steps.push(format!(
                "Forked: {} cards, bottom {}, top {}",
                d.len(),
                bottom,
                describe_top(d)
            ))
        });
    let (rest, drawn) = deck.draw()?;

    writeln!(out, "Seed: {}", seed)?;
    for step in &steps {
        writeln!(out, "{}", step)?;
    }
    writeln!(out, "Drew {}, {} cards remain", drawn, rest.len())?;
    writeln!(out, "Remaining: {}", format_cards(rest.as_slice()))?;
    Ok(())
}
