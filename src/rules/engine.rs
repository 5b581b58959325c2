//! The engine surface a transport layer or driver talks to.
//!
//! Both the single-round [`GameState`](crate::round::GameState) and the
//! [`MultiRoundGameState`](crate::game::MultiRoundGameState) implement
//! [`RulesEngine`], so anything that drives play (the strategy driver, a
//! server handler) maps its requests onto these operations only.

use crate::cards::Hand;
use crate::core::{EngineError, Move, PlayerId};
use crate::round::InfoState;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single highest score.
    Winner(PlayerId),
    /// Several players tied for the highest score.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Build from final scores: every player sharing the top score wins.
    #[must_use]
    pub fn from_scores(scores: &[i32]) -> Option<Self> {
        let best = *scores.iter().max()?;
        let mut top: Vec<PlayerId> = scores
            .iter()
            .enumerate()
            .filter(|(_, &s)| s == best)
            .map(|(i, _)| PlayerId::new(i as u8))
            .collect();
        Some(if top.len() == 1 {
            GameResult::Winner(top.remove(0))
        } else {
            GameResult::Winners(top)
        })
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
        }
    }
}

/// Operations exposed upward.
///
/// ## Implementation Notes
///
/// - `legal_moves`: empty before the flip and after the end
/// - `apply_move`: validate-then-commit; an error leaves state unchanged
/// - `maybe_flip_hand`: exactly once per round
pub trait RulesEngine {
    /// Seat count.
    fn num_players(&self) -> usize;

    /// Seat to act.
    fn current_player(&self) -> PlayerId;

    /// Current hand of a seat (full information).
    fn hand(&self, player: PlayerId) -> &Hand;

    /// Has the initial flip been applied for the active round?
    fn flip_pending(&self) -> bool;

    /// Apply one flip decision per seat.
    fn maybe_flip_hand(&mut self, decisions: &[bool]) -> Result<(), EngineError>;

    /// Ordered legal moves for the seat to act.
    fn legal_moves(&self) -> Vec<Move>;

    /// Hand-redacted view for `viewer`. Fails with `UnknownSeat` if
    /// `viewer` is not at the table.
    fn view(&self, viewer: PlayerId) -> Result<InfoState, EngineError>;

    /// Apply a move for the seat to act, returning the seat to act next.
    fn apply_move(&mut self, mv: &Move) -> Result<PlayerId, EngineError>;

    /// No further moves can be applied.
    fn is_finished(&self) -> bool;
}
