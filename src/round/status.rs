//! Round lifecycle.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Whether, and why, a round has finished.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundStatus {
    #[default]
    InProgress,
    /// The player played their last card.
    HandEmptied(PlayerId),
    /// Play came back round to the owner of the table show.
    ShowUnbeaten(PlayerId),
    /// The next player has no legal move.
    DeckExhausted,
}

impl RoundStatus {
    #[must_use]
    pub fn is_finished(self) -> bool {
        self != RoundStatus::InProgress
    }

    /// The player whose play ended the round, if any.
    #[must_use]
    pub fn ender(self) -> Option<PlayerId> {
        match self {
            RoundStatus::HandEmptied(p) | RoundStatus::ShowUnbeaten(p) => Some(p),
            RoundStatus::InProgress | RoundStatus::DeckExhausted => None,
        }
    }
}

/// State machine position: `AwaitingFlip -> InProgress -> Finished`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    AwaitingFlip,
    InProgress,
    Finished(RoundStatus),
}

impl RoundPhase {
    #[must_use]
    pub fn of(initial_flip_executed: bool, status: RoundStatus) -> Self {
        match (initial_flip_executed, status) {
            (false, _) => RoundPhase::AwaitingFlip,
            (true, RoundStatus::InProgress) => RoundPhase::InProgress,
            (true, finished) => RoundPhase::Finished(finished),
        }
    }
}
