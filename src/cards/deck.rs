//! The standard deck and dealing.
//!
//! The full deck has one card for every pair of distinct faces 1-10 (45
//! cards). Smaller tables strip cards so the deck divides evenly:
//!
//! | players | removed | per hand |
//! |---|---|---|
//! | 3 | every card with a 10 | 12 |
//! | 4 | the 9/10 | 11 |
//! | 5 | none | 9 |

use super::card::{Card, MAX_FACE, MIN_FACE};
use super::hand::Hand;
use crate::core::{ConfigError, GameRng, PlayerMap, MAX_PLAYERS, MIN_PLAYERS};

/// Every card of the full deck, low face on top, in canonical order.
#[must_use]
pub fn full_deck() -> Vec<Card> {
    (MIN_FACE..=MAX_FACE)
        .flat_map(|low| (low + 1..=MAX_FACE).map(move |high| Card::new(low, high)))
        .collect()
}

/// The deck used at a table of `num_players`.
pub fn deck_for(num_players: usize) -> Result<Vec<Card>, ConfigError> {
    let deck = full_deck();
    let deck = match num_players {
        3 => deck.into_iter().filter(|c| c.canonical().1 != MAX_FACE).collect(),
        4 => deck
            .into_iter()
            .filter(|c| c.canonical() != (MAX_FACE - 1, MAX_FACE))
            .collect(),
        5 => deck,
        n => return Err(ConfigError::PlayerCount(n)),
    };
    Ok(deck)
}

/// Cards dealt to each player at a table of `num_players`.
pub fn hand_size(num_players: usize) -> Result<usize, ConfigError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
        return Err(ConfigError::PlayerCount(num_players));
    }
    Ok(deck_for(num_players)?.len() / num_players)
}

/// Shuffle the table's deck, turn each card a random way up, and deal
/// equal hands.
pub fn deal(num_players: usize, rng: &mut GameRng) -> Result<PlayerMap<Hand>, ConfigError> {
    let mut deck = deck_for(num_players)?;
    rng.shuffle(&mut deck);
    for card in deck.iter_mut() {
        if rng.gen_bool(0.5) {
            *card = card.flipped();
        }
    }

    let per_hand = deck.len() / num_players;
    Ok(PlayerMap::new(num_players, |p| {
        let start = p.index() * per_hand;
        Hand::new(deck[start..start + per_hand].iter().copied())
    }))
}
