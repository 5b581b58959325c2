//! Core engine types: seats, RNG, configuration, moves, errors, snapshots.
//!
//! These are the leaf building blocks shared by the card model, the rules,
//! the round state machine, and the multi-round orchestrator.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;
pub mod snapshot;

pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use config::{ScoutConfig, ScoutReward, ShowRanking, StopCondition, MAX_PLAYERS, MIN_PLAYERS};
pub use action::{Move, MoveRecord, ScoutMove, ShowMove};
pub use error::{ConfigError, EngineError, IllegalMoveReason, PhaseError, SnapshotError};
