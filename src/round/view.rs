//! Player-restricted view of a round.
//!
//! An `InfoState` is a projection built fresh from a [`GameState`] for one
//! viewer: it carries the viewer's own hand and only the sizes of the other
//! hands. It is a detached value and never writes back to the state it was
//! built from. Moves it produces refer to hand positions only.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::state::GameState;
use super::status::RoundStatus;
use crate::cards::{Hand, Table};
use crate::core::{IllegalMoveReason, Move, MoveRecord, PlayerId, PlayerMap, ShowRanking};
use crate::rules::legal::{self, TurnView};

/// What one seat may know about the round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoState {
    pub viewer: PlayerId,
    pub num_players: usize,
    pub current_player: PlayerId,
    pub dealer: PlayerId,
    /// The viewer's own hand.
    pub hand: Hand,
    pub hand_sizes: PlayerMap<usize>,
    pub table: Table,
    pub scores: PlayerMap<i32>,
    pub can_scout_and_show: PlayerMap<bool>,
    pub initial_flip_executed: bool,
    pub finished: RoundStatus,
    pub history: Vector<MoveRecord>,
    pub show_ranking: ShowRanking,
}

impl InfoState {
    pub(crate) fn project(state: &GameState, viewer: PlayerId) -> Self {
        Self {
            viewer,
            num_players: state.num_players(),
            current_player: state.current_player(),
            dealer: state.dealer(),
            hand: state.hand(viewer).clone(),
            hand_sizes: state.hands().map(|_, h| h.len()),
            table: state.table().clone(),
            scores: state.scores().clone(),
            can_scout_and_show: state.can_scout_and_show().clone(),
            initial_flip_executed: state.initial_flip_executed(),
            finished: state.finished(),
            history: state.history().clone(),
            show_ranking: state.config().show_ranking,
        }
    }

    #[must_use]
    pub fn scout_benefactor(&self) -> Option<PlayerId> {
        self.table.owner()
    }

    /// The viewer is the player to act in a running round.
    #[must_use]
    pub fn is_my_turn(&self) -> bool {
        self.initial_flip_executed
            && !self.finished.is_finished()
            && self.viewer == self.current_player
    }

    fn turn_view(&self) -> TurnView<'_> {
        TurnView {
            player: self.viewer,
            hand: &self.hand,
            table: &self.table,
            can_scout_and_show: self.can_scout_and_show[self.viewer],
            ranking: self.show_ranking,
        }
    }

    /// The viewer's legal moves: the same ordered set the full state
    /// generates, or empty when it is not the viewer's turn.
    #[must_use]
    pub fn possible_moves(&self) -> Vec<Move> {
        if !self.is_my_turn() {
            return Vec::new();
        }
        legal::legal_moves(&self.turn_view())
    }

    /// Check a move the viewer is considering.
    pub fn check_move(&self, mv: &Move) -> Result<(), IllegalMoveReason> {
        legal::check_move(&self.turn_view(), mv)
    }
}
