//! Single-round engine.
//!
//! - `state`: the round `GameState`, construction, queries, flip phase
//! - `transition`: `apply_move` and round-end detection
//! - `view`: the hand-redacted `InfoState` projection
//! - `status`: `RoundStatus` / `RoundPhase`

pub mod status;
pub mod state;
pub mod transition;
pub mod view;

pub use status::{RoundPhase, RoundStatus};
pub use state::GameState;
pub use view::InfoState;
