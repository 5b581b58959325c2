//! Game configuration.
//!
//! `ScoutConfig` fixes the table size, the first dealer, and the rule
//! variants the engine supports. Build one with the chained setters and
//! call [`ScoutConfig::validate`] (done by every constructor that accepts
//! a config).
//!
//! ```
//! use scout_engine::core::{ScoutConfig, ShowRanking, StopCondition};
//!
//! let config = ScoutConfig::new(4)
//!     .dealer(2)
//!     .show_ranking(ShowRanking::SetsOverRuns)
//!     .stop_condition(StopCondition::Rounds(2));
//! assert!(config.validate().is_ok());
//! assert!(ScoutConfig::new(6).validate().is_err());
//! ```

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::player::PlayerId;

/// Smallest supported table.
pub const MIN_PLAYERS: usize = 3;
/// Largest supported table.
pub const MAX_PLAYERS: usize = 5;

/// How a candidate show is compared with the show on the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShowRanking {
    /// Longer wins; equal length compares the highest active face.
    #[default]
    LengthThenMax,
    /// Longer wins; at equal length a set beats an ascending run,
    /// then the highest active face decides.
    SetsOverRuns,
}

/// When the owner of the table show is credited for a scout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoutReward {
    /// One point for every card scouted from the show.
    #[default]
    PerScout,
    /// One point for the first card scouted from each show.
    PerShow,
}

/// When a multi-round game stops dealing new rounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StopCondition {
    /// Every seat has dealt once (`rounds_finished == num_players`).
    #[default]
    EveryoneDealt,
    /// A fixed number of rounds.
    Rounds(usize),
    /// Some cumulative score reaches the threshold.
    ScoreThreshold(i32),
}

/// Configuration for a game session.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoutConfig {
    pub num_players: usize,

    /// Dealer of the first round. The dealer also acts first.
    pub dealer: PlayerId,

    pub show_ranking: ShowRanking,

    pub scout_reward: ScoutReward,

    /// End the round when the turn would pass back to the owner of the
    /// table show.
    pub end_on_unbeaten_show: bool,

    pub stop_condition: StopCondition,
}

impl ScoutConfig {
    /// Configuration with default rules and seat 0 dealing.
    #[must_use]
    pub fn new(num_players: usize) -> Self {
        Self {
            num_players,
            dealer: PlayerId::new(0),
            show_ranking: ShowRanking::default(),
            scout_reward: ScoutReward::default(),
            end_on_unbeaten_show: true,
            stop_condition: StopCondition::default(),
        }
    }

    #[must_use]
    pub fn dealer(mut self, dealer: u8) -> Self {
        self.dealer = PlayerId::new(dealer);
        self
    }

    #[must_use]
    pub fn show_ranking(mut self, ranking: ShowRanking) -> Self {
        self.show_ranking = ranking;
        self
    }

    #[must_use]
    pub fn scout_reward(mut self, reward: ScoutReward) -> Self {
        self.scout_reward = reward;
        self
    }

    #[must_use]
    pub fn end_on_unbeaten_show(mut self, enabled: bool) -> Self {
        self.end_on_unbeaten_show = enabled;
        self
    }

    #[must_use]
    pub fn stop_condition(mut self, condition: StopCondition) -> Self {
        self.stop_condition = condition;
        self
    }

    /// Check the table size and dealer seat.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.num_players) {
            return Err(ConfigError::PlayerCount(self.num_players));
        }
        if self.dealer.index() >= self.num_players {
            return Err(ConfigError::Dealer {
                dealer: self.dealer,
                num_players: self.num_players,
            });
        }
        Ok(())
    }

    /// Same rules, different dealer.
    #[must_use]
    pub(crate) fn with_dealer(&self, dealer: PlayerId) -> Self {
        Self {
            dealer,
            ..self.clone()
        }
    }
}
