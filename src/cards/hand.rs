//! Ordered card sequences: a player's hand and the table show.
//!
//! Both wrap `im::Vector` so a state clone (for a strategy's lookahead or a
//! snapshot) shares structure instead of copying cards. All operations that
//! a move might need are available in a non-mutating form, which lets the
//! rules evaluate a move on scratch copies before anything is committed.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::core::PlayerId;

/// A player's ordered hand. Hand order is fixed except for the initial flip
/// and the insertion point chosen when scouting.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand {
    cards: Vector<Card>,
}

impl Hand {
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Build from `(top, bottom)` pairs.
    #[must_use]
    pub fn from_pairs(pairs: &[(u8, u8)]) -> Self {
        Self::new(pairs.iter().copied().map(Card::from))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn get(&self, pos: usize) -> Option<Card> {
        self.cards.get(pos).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<Card> {
        self.cards.iter().copied().collect()
    }

    /// Active face values in hand order.
    #[must_use]
    pub fn values(&self) -> Vec<u8> {
        self.cards.iter().map(|c| c.value()).collect()
    }

    /// Sum of active face values.
    #[must_use]
    pub fn face_total(&self) -> i32 {
        self.cards.iter().map(|c| i32::from(c.value())).sum()
    }

    /// The whole hand turned over: order reversed and every card flipped.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self {
            cards: self.cards.iter().rev().map(|c| c.flipped()).collect(),
        }
    }

    /// Cards `start..start + len`. The caller checks bounds.
    pub fn run(&self, start: usize, len: usize) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter().skip(start).take(len)
    }

    /// This hand with `card` inserted at `pos` (`pos <= len`).
    #[must_use]
    pub(crate) fn with_inserted(&self, pos: usize, card: Card) -> Self {
        let mut cards = self.cards.clone();
        cards.insert(pos, card);
        Self { cards }
    }

    /// Split out `start..start + len`, returning the rest of the hand and
    /// the removed cards. The caller checks bounds.
    #[must_use]
    pub(crate) fn without_run(&self, start: usize, len: usize) -> (Self, Vector<Card>) {
        let mut rest = self.cards.clone();
        let played = rest.slice(start..start + len);
        (Self { cards: rest }, played)
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self::new(cards)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let faces: Vec<String> = self.cards.iter().map(ToString::to_string).collect();
        write!(f, "[{}]", faces.join(" "))
    }
}

/// The show currently on the table and the player credited for it.
///
/// `owner` is the scout benefactor: `None` exactly when the table is empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Table {
    cards: Vector<Card>,
    owner: Option<PlayerId>,
    /// Some card has been scouted from the current show.
    scouted: bool,
}

impl Table {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A freshly placed show. An empty run yields an empty table.
    #[must_use]
    pub fn shown(cards: impl IntoIterator<Item = Card>, owner: PlayerId) -> Self {
        let cards: Vector<Card> = cards.into_iter().collect();
        let owner = if cards.is_empty() { None } else { Some(owner) };
        Self {
            cards,
            owner,
            scouted: false,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<Card> {
        self.cards.iter().copied().collect()
    }

    /// The scout benefactor.
    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    #[must_use]
    pub fn was_scouted(&self) -> bool {
        self.scouted
    }

    /// The card at the chosen end.
    #[must_use]
    pub fn end(&self, first: bool) -> Option<Card> {
        if first {
            self.cards.front().copied()
        } else {
            self.cards.back().copied()
        }
    }

    /// This table with the chosen end card removed, and that card.
    #[must_use]
    pub(crate) fn without_end(&self, first: bool) -> Option<(Self, Card)> {
        let mut cards = self.cards.clone();
        let card = if first { cards.pop_front() } else { cards.pop_back() }?;
        let owner = if cards.is_empty() { None } else { self.owner };
        let scouted = owner.is_some();
        Some((
            Self {
                cards,
                owner,
                scouted,
            },
            card,
        ))
    }
}
