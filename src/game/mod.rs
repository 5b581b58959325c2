//! Whole-game play: the multi-round session and the strategy driver.

pub mod multi_round;
pub mod driver;

pub use multi_round::{MultiRoundGameState, RoundSummary};
pub use driver::{drive, play_game, play_round, DEFAULT_TURN_LIMIT};
