//! The transition function: applying a move to a round.
//!
//! `apply_move` resolves the move against the current hand and table with
//! the pure resolver in `rules::legal`. Only a successful resolution is
//! committed, so a rejected move leaves the state exactly as it was.

use log::{debug, info};

use super::state::GameState;
use super::status::RoundStatus;
use crate::core::{EngineError, Move, MoveRecord, PlayerId, ScoutReward};
use crate::rules::legal::{self, Resolution};

impl GameState {
    /// Apply `mv` for the player to act.
    ///
    /// Returns the player to act next (unchanged if the move ended the
    /// round).
    ///
    /// ## Errors
    ///
    /// - `PrematureTransition` before the flip or after the round finished
    /// - `IllegalMove` if `mv` is not in the legal set
    pub fn apply_move(&mut self, mv: &Move) -> Result<PlayerId, EngineError> {
        self.ensure_in_progress()?;
        let player = self.current_player;

        let resolution = legal::resolve(&self.turn_view(player), mv).map_err(|reason| {
            debug!("{} rejected `{}`: {}", player, mv, reason);
            EngineError::IllegalMove {
                player,
                mv: *mv,
                reason,
            }
        })?;

        self.commit(player, *mv, resolution);
        Ok(self.current_player)
    }

    fn commit(&mut self, player: PlayerId, mv: Move, resolution: Resolution) {
        let Resolution {
            hand,
            table,
            captured,
            scouted_from,
            uses_combo,
        } = resolution;

        if let Some(source) = scouted_from {
            let credited = match self.config.scout_reward {
                ScoutReward::PerScout => true,
                ScoutReward::PerShow => source.first_from_show,
            };
            if credited {
                self.scores[source.owner] += 1;
            }
        }

        self.scores[player] += captured.len() as i32;
        self.collected[player].append(captured);
        self.hands[player] = hand;
        self.table = table;
        if uses_combo {
            self.can_scout_and_show[player] = false;
        }

        let turn = self.history.len() as u32;
        self.history.push_back(MoveRecord::new(player, mv, turn));
        debug!(
            "{} played `{}` (hand {}, table {})",
            player,
            mv,
            self.hands[player].len(),
            self.table.len()
        );

        self.finished = self.round_end_after(player);
        if self.finished.is_finished() {
            info!("round finished: {:?}, scores {:?}", self.finished, self.scores.to_vec());
        } else {
            self.current_player = player.next(self.num_players());
        }
    }

    /// Round-end check after `player` moved.
    fn round_end_after(&self, player: PlayerId) -> RoundStatus {
        if self.hands[player].is_empty() {
            return RoundStatus::HandEmptied(player);
        }
        let next = player.next(self.num_players());
        if self.config.end_on_unbeaten_show && self.table.owner() == Some(next) {
            return RoundStatus::ShowUnbeaten(next);
        }
        if !legal::has_legal_move(&self.turn_view(next)) {
            return RoundStatus::DeckExhausted;
        }
        RoundStatus::InProgress
    }
}
