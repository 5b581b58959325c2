//! Multi-round game orchestration.
//!
//! ## MultiRoundGameState
//!
//! Owns a whole session: the configuration and scoring rule, the session
//! RNG, cumulative scores, the rotating dealer, and the active round.
//! Moves and flips are delegated to the active [`GameState`]; when a round
//! finishes it is settled on the spot:
//!
//! 1. Round deltas (points earned plus the scoring rule's adjustment) are
//!    added to the cumulative scores and recorded as a [`RoundSummary`]
//! 2. The dealer moves one seat on
//! 3. Unless the stop condition holds, the next round is dealt from a fork
//!    of the session RNG
//!
//! The finished round stays readable through [`MultiRoundGameState::round`]
//! after the last settle.

use im::Vector;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::cards::Hand;
use crate::core::{
    snapshot, EngineError, GameRng, Move, PhaseError, PlayerId, PlayerMap, ScoutConfig,
    SnapshotError, StopCondition,
};
use crate::round::{GameState, InfoState, RoundStatus};
use crate::rules::{GameResult, RulesEngine, ScoringRule, StandardScoring};

/// How one round of the session went.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// Zero-based round number.
    pub round: usize,
    pub dealer: PlayerId,
    pub status: RoundStatus,
    /// Points earned during play.
    pub earned: PlayerMap<i32>,
    /// What the round added to the cumulative scores.
    pub deltas: PlayerMap<i32>,
}

/// A session of consecutive rounds with cumulative scoring.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MultiRoundGameState<S = StandardScoring> {
    config: ScoutConfig,
    scoring: S,
    rng: GameRng,
    cum_scores: PlayerMap<i32>,
    dealer: PlayerId,
    rounds_finished: usize,
    round: GameState,
    summaries: Vector<RoundSummary>,
    finished: bool,
}

impl MultiRoundGameState<StandardScoring> {
    /// Session with the default leftover-card scoring.
    pub fn with_standard_scoring(config: ScoutConfig, seed: u64) -> Result<Self, EngineError> {
        Self::new(config, seed, StandardScoring::default())
    }
}

impl<S: ScoringRule> MultiRoundGameState<S> {
    /// Start a session and deal its first round.
    ///
    /// `config.dealer` deals first. At least one round is always played.
    pub fn new(config: ScoutConfig, seed: u64, scoring: S) -> Result<Self, EngineError> {
        config.validate()?;
        let mut rng = GameRng::new(seed);
        let dealer = config.dealer;
        let round = GameState::new(&config, &mut rng.fork())?;

        Ok(Self {
            cum_scores: PlayerMap::with_value(config.num_players, 0),
            dealer,
            rounds_finished: 0,
            round,
            summaries: Vector::new(),
            finished: false,
            config,
            scoring,
            rng,
        })
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &ScoutConfig {
        &self.config
    }

    #[must_use]
    pub fn scoring(&self) -> &S {
        &self.scoring
    }

    /// The active round, or the last one once the session is over.
    #[must_use]
    pub fn round(&self) -> &GameState {
        &self.round
    }

    #[must_use]
    pub fn cum_scores(&self) -> &PlayerMap<i32> {
        &self.cum_scores
    }

    /// Dealer of the active round.
    #[must_use]
    pub fn dealer(&self) -> PlayerId {
        self.dealer
    }

    #[must_use]
    pub fn rounds_finished(&self) -> usize {
        self.rounds_finished
    }

    #[must_use]
    pub fn summaries(&self) -> &Vector<RoundSummary> {
        &self.summaries
    }

    #[must_use]
    pub fn finished(&self) -> bool {
        self.finished
    }

    /// Players sharing the highest cumulative score, once the session is
    /// over.
    #[must_use]
    pub fn winners(&self) -> Option<GameResult> {
        if !self.finished {
            return None;
        }
        GameResult::from_scores(&self.cum_scores.to_vec())
    }

    fn ensure_running(&self) -> Result<(), PhaseError> {
        if self.finished {
            Err(PhaseError::GameFinished)
        } else {
            Ok(())
        }
    }

    // === Transitions ===

    /// Initial flip for the active round.
    pub fn maybe_flip_hand(&mut self, decisions: &[bool]) -> Result<(), EngineError> {
        self.ensure_running()?;
        self.round.maybe_flip_hand(decisions)
    }

    /// Apply a move to the active round, settling it if it finished.
    ///
    /// Returns the seat to act next: in the new round if one was dealt,
    /// otherwise the seat that made the final move.
    pub fn apply_move(&mut self, mv: &Move) -> Result<PlayerId, EngineError> {
        self.ensure_running()?;
        let next = self.round.apply_move(mv)?;
        if !self.round.is_finished() {
            return Ok(next);
        }
        self.settle_round()?;
        Ok(self.round.current_player())
    }

    fn settle_round(&mut self) -> Result<(), EngineError> {
        let deltas = self.round.round_deltas(&self.scoring)?;
        let cum_scores = self.cum_scores.map(|p, total| total + deltas[p]);
        let summary = RoundSummary {
            round: self.rounds_finished,
            dealer: self.dealer,
            status: self.round.finished(),
            earned: self.round.scores().clone(),
            deltas,
        };
        let rounds_finished = self.rounds_finished + 1;
        debug!(
            "round {} settled: {:?}, deltas {:?}",
            summary.round,
            summary.status,
            summary.deltas.to_vec()
        );

        let finished = self.stop_reached(rounds_finished, &cum_scores);
        let dealer = self.dealer.next(self.config.num_players);
        if !finished {
            let config = self.config.with_dealer(dealer);
            self.round = GameState::new(&config, &mut self.rng.fork())?;
        }

        self.cum_scores = cum_scores;
        self.rounds_finished = rounds_finished;
        self.dealer = dealer;
        self.summaries.push_back(summary);
        self.finished = finished;
        if finished {
            info!(
                "game finished after {} rounds: scores {:?}",
                rounds_finished,
                self.cum_scores.to_vec()
            );
        }
        Ok(())
    }

    // === Snapshots ===

    /// Restore a session from [`snapshot::encode`] bytes, rejecting states
    /// that fail [`MultiRoundGameState::validate`].
    pub fn restore(bytes: &[u8]) -> Result<Self, EngineError>
    where
        S: serde::de::DeserializeOwned,
    {
        let game: Self = snapshot::decode(bytes)?;
        game.validate()?;
        Ok(game)
    }

    /// Check the session tables and the active round against the configured
    /// table size.
    pub fn validate(&self) -> Result<(), EngineError> {
        self.config.validate()?;
        self.round.validate()?;
        let n = self.config.num_players;
        let inconsistent = |what: String| EngineError::Snapshot(SnapshotError::Inconsistent(what));

        if self.round.num_players() != n {
            return Err(inconsistent(format!(
                "round has {} seats, session has {n}",
                self.round.num_players()
            )));
        }
        if self.cum_scores.player_count() != n {
            return Err(inconsistent(format!(
                "cum_scores has {} seats, expected {n}",
                self.cum_scores.player_count()
            )));
        }
        if self.dealer.index() >= n {
            return Err(inconsistent(format!("dealer {} is not a seat", self.dealer)));
        }
        if self.summaries.len() != self.rounds_finished {
            return Err(inconsistent(format!(
                "{} summaries for {} finished rounds",
                self.summaries.len(),
                self.rounds_finished
            )));
        }
        Ok(())
    }

    fn stop_reached(&self, rounds_finished: usize, cum_scores: &PlayerMap<i32>) -> bool {
        match self.config.stop_condition {
            StopCondition::EveryoneDealt => rounds_finished >= self.config.num_players,
            StopCondition::Rounds(n) => rounds_finished >= n,
            StopCondition::ScoreThreshold(t) => cum_scores.values().any(|&s| s >= t),
        }
    }
}

impl<S: ScoringRule> RulesEngine for MultiRoundGameState<S> {
    fn num_players(&self) -> usize {
        self.config.num_players
    }

    fn current_player(&self) -> PlayerId {
        self.round.current_player()
    }

    fn hand(&self, player: PlayerId) -> &Hand {
        self.round.hand(player)
    }

    fn flip_pending(&self) -> bool {
        !self.finished && !self.round.initial_flip_executed()
    }

    fn maybe_flip_hand(&mut self, decisions: &[bool]) -> Result<(), EngineError> {
        MultiRoundGameState::maybe_flip_hand(self, decisions)
    }

    fn legal_moves(&self) -> Vec<Move> {
        if self.finished {
            return Vec::new();
        }
        self.round.legal_moves()
    }

    fn view(&self, viewer: PlayerId) -> Result<InfoState, EngineError> {
        self.round.view(viewer)
    }

    fn apply_move(&mut self, mv: &Move) -> Result<PlayerId, EngineError> {
        MultiRoundGameState::apply_move(self, mv)
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::RoundPhase;
    use crate::rules::RoundOutcome;

    fn play_first_legal<S: ScoringRule>(game: &mut MultiRoundGameState<S>) {
        let n = game.config().num_players;
        for _ in 0..100_000 {
            if game.finished() {
                return;
            }
            if game.round().phase() == RoundPhase::AwaitingFlip {
                game.maybe_flip_hand(&vec![false; n]).unwrap();
            }
            let mv = game.round().legal_moves()[0];
            game.apply_move(&mv).unwrap();
        }
        panic!("session did not finish");
    }

    #[test]
    fn test_everyone_deals_once() {
        let config = ScoutConfig::new(3).dealer(1);
        let mut game = MultiRoundGameState::with_standard_scoring(config, 5).unwrap();
        assert_eq!(game.round().current_player(), PlayerId::new(1));

        play_first_legal(&mut game);

        assert_eq!(game.rounds_finished(), 3);
        let dealers: Vec<_> = game.summaries().iter().map(|s| s.dealer).collect();
        assert_eq!(dealers, vec![PlayerId::new(1), PlayerId::new(2), PlayerId::new(0)]);
        assert!(game.winners().is_some());
    }

    #[test]
    fn test_cumulative_scores_sum_round_deltas() {
        let mut game = MultiRoundGameState::with_standard_scoring(
            ScoutConfig::new(4).stop_condition(StopCondition::Rounds(2)),
            11,
        )
        .unwrap();
        play_first_legal(&mut game);

        let mut expected = vec![0; 4];
        for summary in game.summaries().iter() {
            for (total, delta) in expected.iter_mut().zip(summary.deltas.to_vec()) {
                *total += delta;
            }
        }
        assert_eq!(game.cum_scores().to_vec(), expected);
        assert_eq!(game.summaries().len(), 2);
    }

    #[test]
    fn test_custom_scoring_closure() {
        let nothing = |o: &RoundOutcome| o.hands.map(|_, _| 0);
        let mut game = MultiRoundGameState::new(
            ScoutConfig::new(3).stop_condition(StopCondition::Rounds(1)),
            2,
            nothing,
        )
        .unwrap();
        play_first_legal(&mut game);

        let summary = &game.summaries()[0];
        assert_eq!(summary.deltas, summary.earned);
    }

    #[test]
    fn test_calls_after_finish_are_rejected() {
        let mut game = MultiRoundGameState::with_standard_scoring(
            ScoutConfig::new(3).stop_condition(StopCondition::Rounds(1)),
            3,
        )
        .unwrap();
        play_first_legal(&mut game);

        assert!(RulesEngine::legal_moves(&game).is_empty());
        assert!(!RulesEngine::flip_pending(&game));
        assert_eq!(
            game.apply_move(&Move::show(0, 1)),
            Err(EngineError::PrematureTransition(PhaseError::GameFinished))
        );
        assert_eq!(
            game.maybe_flip_hand(&[false; 3]),
            Err(EngineError::PrematureTransition(PhaseError::GameFinished))
        );
    }

    #[test]
    fn test_view_rejects_unknown_seat() {
        let game = MultiRoundGameState::with_standard_scoring(ScoutConfig::new(4), 9).unwrap();
        assert!(RulesEngine::view(&game, PlayerId::new(3)).is_ok());
        assert_eq!(
            RulesEngine::view(&game, PlayerId::new(4)),
            Err(EngineError::UnknownSeat {
                player: PlayerId::new(4),
                num_players: 4,
            })
        );
    }

    #[test]
    fn test_restore_validates_session() {
        let game = MultiRoundGameState::with_standard_scoring(ScoutConfig::new(3), 4).unwrap();
        let bytes = snapshot::encode(&game).unwrap();
        assert_eq!(MultiRoundGameState::<StandardScoring>::restore(&bytes), Ok(game.clone()));

        let mut bad = game.clone();
        bad.dealer = PlayerId::new(5);
        let bytes = snapshot::encode(&bad).unwrap();
        assert!(matches!(
            MultiRoundGameState::<StandardScoring>::restore(&bytes),
            Err(EngineError::Snapshot(SnapshotError::Inconsistent(_)))
        ));

        let mut bad = game;
        bad.cum_scores = PlayerMap::with_value(4, 0);
        assert!(matches!(
            bad.validate(),
            Err(EngineError::Snapshot(SnapshotError::Inconsistent(_)))
        ));
    }

    #[test]
    fn test_score_threshold_stops_early() {
        let mut game = MultiRoundGameState::with_standard_scoring(
            ScoutConfig::new(3).stop_condition(StopCondition::ScoreThreshold(i32::MIN)),
            8,
        )
        .unwrap();
        play_first_legal(&mut game);
        assert_eq!(game.rounds_finished(), 1);
    }
}
