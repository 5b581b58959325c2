//! Two-faced cards.

use serde::{Deserialize, Serialize};

/// Lowest face value in the standard deck.
pub const MIN_FACE: u8 = 1;
/// Highest face value in the standard deck.
pub const MAX_FACE: u8 = 10;

/// A card with two faces.
///
/// The card is stored in the orientation it is held: `top` is the active
/// face that counts for shows, `bottom` is the face turned away. Flipping a
/// hand or a scouted card swaps the two; the card itself never changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub top: u8,
    pub bottom: u8,
}

impl Card {
    #[must_use]
    pub const fn new(top: u8, bottom: u8) -> Self {
        Self { top, bottom }
    }

    /// The active face value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.top
    }

    /// The same card turned over.
    #[must_use]
    pub const fn flipped(self) -> Self {
        Self {
            top: self.bottom,
            bottom: self.top,
        }
    }

    /// Orientation-independent identity: `(low face, high face)`.
    #[must_use]
    pub fn canonical(self) -> (u8, u8) {
        (self.top.min(self.bottom), self.top.max(self.bottom))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.top, self.bottom)
    }
}

impl From<(u8, u8)> for Card {
    fn from((top, bottom): (u8, u8)) -> Self {
        Self::new(top, bottom)
    }
}
