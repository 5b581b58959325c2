//! Card model: two-faced cards, hands, the table show, and the deck.

pub mod card;
pub mod hand;
pub mod deck;

pub use card::{Card, MAX_FACE, MIN_FACE};
pub use hand::{Hand, Table};
pub use deck::{deal, deck_for, full_deck, hand_size};
