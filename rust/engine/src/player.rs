use serde::{Deserialize, Serialize};

/// A named participant holding a hand `H` and a score card `S`.
///
/// The hand is swapped out every round with [`Player::with_hand`]; the score
/// card only ever grows through [`Player::with_score`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player<H, S = ()> {
    /// Display name, also the key for win tallies
    name: String,
    /// Cards or dice currently held
    hand: H,
    /// Accumulated score state
    score: S,
}

impl<H, S> Player<H, S> {
    pub fn new(name: impl Into<String>, hand: H, score: S) -> Self {
        Self {
            name: name.into(),
            hand,
            score,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &H {
        &self.hand
    }

    pub fn score(&self) -> &S {
        &self.score
    }

    pub fn with_hand(self, hand: H) -> Self {
        Self { hand, ..self }
    }

    pub fn with_score(self, score: S) -> Self {
        Self { score, ..self }
    }
}

impl<H: Default, S: Default> Player<H, S> {
    /// A player with an empty hand and a fresh score card.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, H::default(), S::default())
    }
}
