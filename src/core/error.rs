//! Engine error types.
//!
//! Every public operation returns `Result<_, EngineError>`. A call that
//! returns an error has not modified any state.

use thiserror::Error;

use super::action::Move;
use super::player::PlayerId;

/// Top-level engine error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Bad table size, dealer seat, or dealt hands. Fatal to the construction
    /// attempt only.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    /// The call is not allowed in the current phase.
    #[error("premature transition: {0}")]
    PrematureTransition(#[from] PhaseError),

    /// The move is not in the legal set for the player to act.
    #[error("illegal move `{mv}` by {player}: {reason}")]
    IllegalMove {
        player: PlayerId,
        mv: Move,
        reason: IllegalMoveReason,
    },

    /// A strategy returned a move outside the legal set it was shown.
    #[error("strategy for {player} returned `{mv}`, which is not a legal move")]
    StrategyContractViolation { player: PlayerId, mv: Move },

    /// The seat does not exist at this table.
    #[error("{player} is not a seat at a {num_players}-player table")]
    UnknownSeat { player: PlayerId, num_players: usize },

    /// The driver gave up after this many moves without the round ending.
    #[error("round did not finish within {0} moves")]
    TurnLimit(usize),

    #[error("snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),
}

/// Why a configuration was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("num_players must be between 3 and 5, got {0}")]
    PlayerCount(usize),

    #[error("dealer {dealer} is not a seat at a {num_players}-player table")]
    Dealer { dealer: PlayerId, num_players: usize },

    #[error("expected {expected} hands, got {got}")]
    HandCount { expected: usize, got: usize },

    #[error("expected {expected} flip decisions, got {got}")]
    FlipDecisionCount { expected: usize, got: usize },

    #[error("strategy count {got} does not match {expected} seats")]
    StrategyCount { expected: usize, got: usize },
}

/// Which ordering rule a call broke.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseError {
    #[error("hands must be flipped (or kept) before any move")]
    FlipPending,

    #[error("the initial hand flip was already executed this round")]
    FlipAlreadyExecuted,

    #[error("the round is finished")]
    RoundFinished,

    #[error("the round is still in progress")]
    RoundInProgress,

    #[error("the game is finished")]
    GameFinished,
}

/// Which constraint a rejected move violated.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    #[error("show must contain at least one card")]
    EmptyShow,

    #[error("show {start_pos}..{end_pos} exceeds hand of {hand_len} cards")]
    ShowOutOfRange {
        start_pos: usize,
        end_pos: usize,
        hand_len: usize,
    },

    #[error("cards are neither a set nor an ascending run")]
    MalformedRun,

    #[error("show of {length} (max {max}) does not beat table of {table_len} (max {table_max})")]
    DoesNotBeatTable {
        length: usize,
        max: u8,
        table_len: usize,
        table_max: u8,
    },

    #[error("there is nothing on the table to scout")]
    EmptyTable,

    #[error("insert position {insert_pos} is outside 0..={hand_len}")]
    InsertOutOfRange { insert_pos: usize, hand_len: usize },

    #[error("scout-and-show was already used this round")]
    ComboSpent,
}

/// Snapshot encoding or decoding failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("encode failed: {0}")]
    Encode(String),

    #[error("decode failed: {0}")]
    Decode(String),

    /// The bytes decoded but describe a state no sequence of moves reaches.
    #[error("inconsistent state: {0}")]
    Inconsistent(String),
}

impl From<bincode::Error> for SnapshotError {
    fn from(e: bincode::Error) -> Self {
        SnapshotError::Decode(e.to_string())
    }
}
