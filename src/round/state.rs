//! Single-round game state.
//!
//! ## GameState
//!
//! The authoritative state of one deal:
//! - Hands, table show and scout benefactor
//! - Points earned during play and the piles of displaced cards
//! - Turn order, the one-shot scout-and-show flags, the flip phase
//! - Move history
//!
//! State only changes through [`GameState::maybe_flip_hand`] and
//! [`GameState::apply_move`] (see `transition`). Every field is a plain
//! value (hands and piles are `im` vectors), so the whole state can be
//! cloned, compared, serialized, and restored.

use im::Vector;
use log::debug;
use serde::{Deserialize, Serialize};

use super::status::{RoundPhase, RoundStatus};
use super::view::InfoState;
use crate::cards::{deal, Card, Hand, Table};
use crate::core::{
    snapshot, ConfigError, EngineError, GameRng, Move, MoveRecord, PhaseError, PlayerId, PlayerMap,
    ScoutConfig, SnapshotError,
};
use crate::rules::legal::{self, TurnView};
use crate::rules::{RoundOutcome, RulesEngine, ScoringRule};

/// Full state of one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) config: ScoutConfig,

    pub(crate) current_player: PlayerId,

    pub(crate) hands: PlayerMap<Hand>,

    /// Current show; its owner is the scout benefactor.
    pub(crate) table: Table,

    /// Points earned during play (displaced cards + scouts suffered).
    pub(crate) scores: PlayerMap<i32>,

    /// Table cards each player displaced with a show.
    pub(crate) collected: PlayerMap<Vector<Card>>,

    /// One-shot permission; only ever goes from true to false.
    pub(crate) can_scout_and_show: PlayerMap<bool>,

    pub(crate) initial_flip_executed: bool,

    pub(crate) finished: RoundStatus,

    pub(crate) history: Vector<MoveRecord>,
}

impl GameState {
    /// Deal a fresh round.
    ///
    /// The dealer (from `config`) acts first.
    pub fn new(config: &ScoutConfig, rng: &mut GameRng) -> Result<Self, EngineError> {
        config.validate()?;
        let hands = deal(config.num_players, rng)?;
        Ok(Self::with_hands(config.clone(), hands))
    }

    /// Deal a fresh round from a seed.
    pub fn with_seed(config: &ScoutConfig, seed: u64) -> Result<Self, EngineError> {
        Self::new(config, &mut GameRng::new(seed))
    }

    /// Start a round from explicit hands, one per seat in seat order.
    pub fn from_hands(config: &ScoutConfig, hands: Vec<Hand>) -> Result<Self, EngineError> {
        config.validate()?;
        if hands.len() != config.num_players {
            return Err(ConfigError::HandCount {
                expected: config.num_players,
                got: hands.len(),
            }
            .into());
        }
        Ok(Self::with_hands(config.clone(), PlayerMap::from_vec(hands)))
    }

    fn with_hands(config: ScoutConfig, hands: PlayerMap<Hand>) -> Self {
        let n = config.num_players;
        Self {
            current_player: config.dealer,
            hands,
            table: Table::empty(),
            scores: PlayerMap::with_value(n, 0),
            collected: PlayerMap::with_value(n, Vector::new()),
            can_scout_and_show: PlayerMap::with_value(n, true),
            initial_flip_executed: false,
            finished: RoundStatus::InProgress,
            history: Vector::new(),
            config,
        }
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &ScoutConfig {
        &self.config
    }

    #[must_use]
    pub fn num_players(&self) -> usize {
        self.config.num_players
    }

    #[must_use]
    pub fn dealer(&self) -> PlayerId {
        self.config.dealer
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    #[must_use]
    pub fn hands(&self) -> &PlayerMap<Hand> {
        &self.hands
    }

    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &Hand {
        &self.hands[player]
    }

    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Player credited when someone scouts from the table. `None` iff the
    /// table is empty.
    #[must_use]
    pub fn scout_benefactor(&self) -> Option<PlayerId> {
        self.table.owner()
    }

    /// Points earned so far this round.
    #[must_use]
    pub fn scores(&self) -> &PlayerMap<i32> {
        &self.scores
    }

    #[must_use]
    pub fn collected(&self, player: PlayerId) -> &Vector<Card> {
        &self.collected[player]
    }

    #[must_use]
    pub fn can_scout_and_show(&self) -> &PlayerMap<bool> {
        &self.can_scout_and_show
    }

    #[must_use]
    pub fn initial_flip_executed(&self) -> bool {
        self.initial_flip_executed
    }

    #[must_use]
    pub fn finished(&self) -> RoundStatus {
        self.finished
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished.is_finished()
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        RoundPhase::of(self.initial_flip_executed, self.finished)
    }

    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Every card of the deal (hands, table, displaced piles) in canonical
    /// form, sorted. Constant for the whole round.
    #[must_use]
    pub fn canonical_cards(&self) -> Vec<(u8, u8)> {
        let mut cards: Vec<(u8, u8)> = self
            .hands
            .values()
            .flat_map(|h| h.iter())
            .chain(self.table.iter())
            .chain(self.collected.values().flat_map(|c| c.iter()))
            .map(|c| c.canonical())
            .collect();
        cards.sort_unstable();
        cards
    }

    pub(crate) fn turn_view(&self, player: PlayerId) -> TurnView<'_> {
        TurnView {
            player,
            hand: &self.hands[player],
            table: &self.table,
            can_scout_and_show: self.can_scout_and_show[player],
            ranking: self.config.show_ranking,
        }
    }

    pub(crate) fn ensure_in_progress(&self) -> Result<(), PhaseError> {
        if !self.initial_flip_executed {
            return Err(PhaseError::FlipPending);
        }
        if self.is_finished() {
            return Err(PhaseError::RoundFinished);
        }
        Ok(())
    }

    // === Moves ===

    /// Ordered legal moves for the player to act. Empty before the flip and
    /// once the round is finished.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.ensure_in_progress().is_err() {
            return Vec::new();
        }
        legal::legal_moves(&self.turn_view(self.current_player))
    }

    /// Is `mv` in the legal set right now?
    #[must_use]
    pub fn is_legal(&self, mv: &Move) -> bool {
        self.ensure_in_progress().is_ok()
            && legal::check_move(&self.turn_view(self.current_player), mv).is_ok()
    }

    /// Hand-redacted view for the player to act.
    #[must_use]
    pub fn info_state(&self) -> InfoState {
        InfoState::project(self, self.current_player)
    }

    /// Hand-redacted view for `viewer`.
    pub fn view(&self, viewer: PlayerId) -> Result<InfoState, EngineError> {
        self.ensure_seat(viewer)?;
        Ok(InfoState::project(self, viewer))
    }

    pub(crate) fn ensure_seat(&self, player: PlayerId) -> Result<(), EngineError> {
        if player.index() >= self.num_players() {
            return Err(EngineError::UnknownSeat {
                player,
                num_players: self.num_players(),
            });
        }
        Ok(())
    }

    // === Flip phase ===

    /// Apply the initial flip: seat `i`'s hand is turned over iff
    /// `decisions[i]`. Allowed once per round, before any move.
    pub fn maybe_flip_hand(&mut self, decisions: &[bool]) -> Result<(), EngineError> {
        if self.initial_flip_executed {
            return Err(PhaseError::FlipAlreadyExecuted.into());
        }
        if decisions.len() != self.num_players() {
            return Err(ConfigError::FlipDecisionCount {
                expected: self.num_players(),
                got: decisions.len(),
            }
            .into());
        }

        for (player, &flip) in PlayerId::all(self.num_players()).zip(decisions) {
            if flip {
                self.hands[player] = self.hands[player].flipped();
            }
        }
        self.initial_flip_executed = true;
        debug!("round flip applied: {:?}", decisions);
        Ok(())
    }

    // === Scoring ===

    /// The finished round as handed to a scoring rule.
    pub fn outcome(&self) -> Result<RoundOutcome, EngineError> {
        if !self.is_finished() {
            return Err(PhaseError::RoundInProgress.into());
        }
        Ok(RoundOutcome {
            hands: self.hands.clone(),
            table: self.table.clone(),
            status: self.finished,
            scores: self.scores.clone(),
        })
    }

    /// Each seat's round total: points earned during play plus the scoring
    /// rule's adjustment.
    pub fn round_deltas(&self, scoring: &impl ScoringRule) -> Result<PlayerMap<i32>, EngineError> {
        let outcome = self.outcome()?;
        let adjustments = scoring.adjustments(&outcome);
        Ok(self.scores.map(|p, earned| earned + adjustments[p]))
    }

    // === Snapshots ===

    /// Restore a round from [`snapshot::encode`] bytes, rejecting states
    /// that fail [`GameState::validate`].
    pub fn restore(bytes: &[u8]) -> Result<Self, EngineError> {
        let state: Self = snapshot::decode(bytes)?;
        state.validate()?;
        Ok(state)
    }

    /// Check that every per-seat table and seat reference fits the
    /// configured table size.
    pub fn validate(&self) -> Result<(), EngineError> {
        self.config.validate()?;
        let n = self.num_players();
        let inconsistent = |what: String| EngineError::Snapshot(SnapshotError::Inconsistent(what));

        let counts = [
            ("hands", self.hands.player_count()),
            ("scores", self.scores.player_count()),
            ("collected", self.collected.player_count()),
            ("can_scout_and_show", self.can_scout_and_show.player_count()),
        ];
        for (name, count) in counts {
            if count != n {
                return Err(inconsistent(format!("{name} has {count} seats, expected {n}")));
            }
        }

        let seats = [Some(self.current_player), self.table.owner(), self.finished.ender()];
        if let Some(player) = seats.into_iter().flatten().find(|p| p.index() >= n) {
            return Err(inconsistent(format!("{player} is not a seat at a {n}-player table")));
        }
        if let Some(record) = self.history.iter().find(|r| r.player.index() >= n) {
            return Err(inconsistent(format!("history names {}", record.player)));
        }
        Ok(())
    }
}

impl RulesEngine for GameState {
    fn num_players(&self) -> usize {
        self.config.num_players
    }

    fn current_player(&self) -> PlayerId {
        self.current_player
    }

    fn hand(&self, player: PlayerId) -> &Hand {
        &self.hands[player]
    }

    fn flip_pending(&self) -> bool {
        !self.initial_flip_executed
    }

    fn maybe_flip_hand(&mut self, decisions: &[bool]) -> Result<(), EngineError> {
        GameState::maybe_flip_hand(self, decisions)
    }

    fn legal_moves(&self) -> Vec<Move> {
        GameState::legal_moves(self)
    }

    fn view(&self, viewer: PlayerId) -> Result<InfoState, EngineError> {
        GameState::view(self, viewer)
    }

    fn apply_move(&mut self, mv: &Move) -> Result<PlayerId, EngineError> {
        GameState::apply_move(self, mv)
    }

    fn is_finished(&self) -> bool {
        self.finished.is_finished()
    }
}
