//! Moves: the three things a player can do on their turn.
//!
//! Moves only carry positions (which table end, where in the hand), never
//! card contents, so they can be shown to any seat without leaking a hidden
//! hand. Equality is structural, and the derived ordering is exactly the
//! order in which the legal-move generator emits candidates:
//! every `Show` before every `Scout` before every `ScoutAndShow`, each
//! ordered by its fields.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Take one card from an end of the table show into the hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ScoutMove {
    /// `true` takes the first (left) card, `false` the last.
    pub first: bool,
    /// Turn the card over before inserting it.
    pub flip: bool,
    /// Hand position the card is inserted at (`0..=hand.len()`).
    pub insert_pos: usize,
}

impl ScoutMove {
    #[must_use]
    pub const fn new(first: bool, flip: bool, insert_pos: usize) -> Self {
        Self {
            first,
            flip,
            insert_pos,
        }
    }
}

/// Play a contiguous part of the hand onto the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShowMove {
    pub start_pos: usize,
    pub length: usize,
}

impl ShowMove {
    #[must_use]
    pub const fn new(start_pos: usize, length: usize) -> Self {
        Self { start_pos, length }
    }

    /// One past the last hand position played, saturating at `usize::MAX`.
    #[must_use]
    pub const fn end_pos(&self) -> usize {
        self.start_pos.saturating_add(self.length)
    }
}

/// A turn's move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Move {
    Show(ShowMove),
    Scout(ScoutMove),
    /// Scout, then show against the resulting hand and table. Once per round.
    ScoutAndShow { scout: ScoutMove, show: ShowMove },
}

impl Move {
    #[must_use]
    pub const fn show(start_pos: usize, length: usize) -> Self {
        Move::Show(ShowMove::new(start_pos, length))
    }

    #[must_use]
    pub const fn scout(first: bool, flip: bool, insert_pos: usize) -> Self {
        Move::Scout(ScoutMove::new(first, flip, insert_pos))
    }

    #[must_use]
    pub const fn scout_and_show(scout: ScoutMove, show: ShowMove) -> Self {
        Move::ScoutAndShow { scout, show }
    }

    #[must_use]
    pub fn is_show(&self) -> bool {
        matches!(self, Move::Show(_))
    }

    #[must_use]
    pub fn is_scout(&self) -> bool {
        matches!(self, Move::Scout(_))
    }

    #[must_use]
    pub fn is_scout_and_show(&self) -> bool {
        matches!(self, Move::ScoutAndShow { .. })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn end(first: bool) -> &'static str {
            if first {
                "first"
            } else {
                "last"
            }
        }
        match self {
            Move::Show(s) => write!(f, "show {}..{}", s.start_pos, s.end_pos()),
            Move::Scout(s) => write!(
                f,
                "scout {}{} -> {}",
                end(s.first),
                if s.flip { " flipped" } else { "" },
                s.insert_pos
            ),
            Move::ScoutAndShow { scout, show } => write!(
                f,
                "{} then {}",
                Move::Scout(*scout),
                Move::Show(*show)
            ),
        }
    }
}

/// An applied move, kept in the round history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub player: PlayerId,
    pub mv: Move,
    /// 0-based index of the move within its round.
    pub turn: u32,
}

impl MoveRecord {
    #[must_use]
    pub fn new(player: PlayerId, mv: Move, turn: u32) -> Self {
        Self { player, mv, turn }
    }
}
