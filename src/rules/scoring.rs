//! End-of-round scoring adjustments.
//!
//! During a round players earn one point per displaced table card and one
//! per scout taken from their show (see [`ScoutReward`](crate::core::ScoutReward)).
//! When the round ends a [`ScoringRule`] turns the final hands into
//! per-player adjustments. The engine only fixes the shape of that hook; the
//! arithmetic belongs to the rule.

use serde::{Deserialize, Serialize};

use crate::cards::{Hand, Table};
use crate::core::PlayerMap;
use crate::round::RoundStatus;

/// The finished round as seen by a scoring rule.
///
/// Hands and table are `im`-backed, so building one shares structure with
/// the round state instead of copying cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundOutcome {
    pub hands: PlayerMap<Hand>,
    pub table: Table,
    pub status: RoundStatus,
    /// Points earned during play.
    pub scores: PlayerMap<i32>,
}

/// Pluggable end-of-round adjustment.
///
/// Any `Fn(&RoundOutcome) -> PlayerMap<i32>` is a rule:
///
/// ```
/// use scout_engine::core::PlayerMap;
/// use scout_engine::rules::{RoundOutcome, ScoringRule};
///
/// let double_penalty = |o: &RoundOutcome| o.hands.map(|_, h| -2 * h.len() as i32);
/// fn takes_rule(_: &impl ScoringRule) {}
/// takes_rule(&double_penalty);
/// ```
pub trait ScoringRule {
    /// One delta per seat, added to the points earned during play.
    fn adjustments(&self, outcome: &RoundOutcome) -> PlayerMap<i32>;
}

impl<F> ScoringRule for F
where
    F: Fn(&RoundOutcome) -> PlayerMap<i32>,
{
    fn adjustments(&self, outcome: &RoundOutcome) -> PlayerMap<i32> {
        self(outcome)
    }
}

/// What a leftover card costs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Penalty {
    /// Each card costs `per_card`.
    #[default]
    CardCount,
    /// Each card costs `per_card` times its active face.
    FaceValueSum,
}

/// Leftover-card penalty with an optional exemption and bonus for the
/// player who ended the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StandardScoring {
    pub penalty: Penalty,
    pub per_card: i32,
    /// The round ender keeps their leftover cards for free.
    pub exempt_round_ender: bool,
    pub ender_bonus: i32,
}

impl Default for StandardScoring {
    fn default() -> Self {
        Self {
            penalty: Penalty::CardCount,
            per_card: 1,
            exempt_round_ender: true,
            ender_bonus: 0,
        }
    }
}

impl StandardScoring {
    fn hand_penalty(&self, hand: &Hand) -> i32 {
        let base = match self.penalty {
            Penalty::CardCount => hand.len() as i32,
            Penalty::FaceValueSum => hand.face_total(),
        };
        base * self.per_card
    }
}

impl ScoringRule for StandardScoring {
    fn adjustments(&self, outcome: &RoundOutcome) -> PlayerMap<i32> {
        let ender = outcome.status.ender();
        outcome.hands.map(|player, hand| {
            if ender == Some(player) {
                let penalty = if self.exempt_round_ender { 0 } else { self.hand_penalty(hand) };
                self.ender_bonus - penalty
            } else {
                -self.hand_penalty(hand)
            }
        })
    }
}
