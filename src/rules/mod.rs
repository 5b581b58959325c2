//! Game rules: run shapes, legal moves, scoring, and the engine trait.
//!
//! - `run`: set / ascending classification and the beats rule
//! - `legal`: the pure validator/resolver and the ordered move generator
//! - `scoring`: the pluggable end-of-round adjustment
//! - `engine`: the `RulesEngine` surface shared by round and game state

pub mod run;
pub mod legal;
pub mod scoring;
pub mod engine;

pub use run::{Run, RunKind};
pub use legal::{
    check_move, has_legal_move, legal_moves, legal_scouts, legal_shows, resolve, Resolution,
    ScoutSource, TurnView,
};
pub use scoring::{Penalty, RoundOutcome, ScoringRule, StandardScoring};
pub use engine::{GameResult, RulesEngine};
