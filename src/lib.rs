//! # scout-engine
//!
//! A rules engine for the card game Scout, for 3 to 5 players.
//!
//! ## Design Principles
//!
//! 1. **Authoritative state**: the engine owns the game state and is the
//!    only thing that changes it. Callers submit moves and read views.
//!
//! 2. **Validate then commit**: every move is resolved against a scratch
//!    copy of the hand and table. A rejected move leaves the state exactly
//!    as it was.
//!
//! 3. **Positional moves**: moves name hand positions, never card
//!    identities, so a seat's view (own hand, opponents' hand sizes) is
//!    enough to choose one.
//!
//! ## Architecture
//!
//! - **Persistent data structures**: hands, the table, and history are
//!   `im` vectors, so states clone in O(1) for snapshots and search.
//!
//! - **Deterministic**: dealing and the built-in random strategy draw from
//!   a seeded ChaCha8 `GameRng` whose position is part of the snapshot.
//!
//! ## Modules
//!
//! - `core`: seats, RNG, configuration, moves, errors, snapshots
//! - `cards`: two-faced cards, hands, the table, the deck
//! - `rules`: run shapes, legal moves, scoring, the `RulesEngine` trait
//! - `round`: the single-round state machine and player views
//! - `game`: the multi-round session and the strategy driver
//! - `players`: strategies for automated seats
//!
//! ```
//! use scout_engine::{GameState, Move, ScoutConfig};
//!
//! let mut round = GameState::with_seed(&ScoutConfig::new(3), 7).unwrap();
//! round.maybe_flip_hand(&[false, false, false]).unwrap();
//!
//! // The dealer opens with any single card.
//! assert!(round.legal_moves().contains(&Move::show(0, 1)));
//! round.apply_move(&Move::show(0, 1)).unwrap();
//! assert_eq!(round.table().len(), 1);
//! ```

pub mod core;
pub mod cards;
pub mod rules;
pub mod round;
pub mod game;
pub mod players;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap,
    GameRng, GameRngState,
    ScoutConfig, ShowRanking, ScoutReward, StopCondition,
    Move, MoveRecord, ScoutMove, ShowMove,
    EngineError, ConfigError, PhaseError, IllegalMoveReason, SnapshotError,
};

pub use crate::cards::{Card, Hand, Table};

pub use crate::rules::{
    GameResult, RulesEngine, ScoringRule, StandardScoring, Penalty, RoundOutcome,
};

pub use crate::round::{GameState, InfoState, RoundPhase, RoundStatus};

pub use crate::game::{MultiRoundGameState, RoundSummary, play_game, play_round};

pub use crate::players::{FirstLegalStrategy, RandomStrategy, Strategy};
