//! Uniform random play.

use super::strategy::Strategy;
use crate::cards::Hand;
use crate::core::{GameRng, Move};
use crate::round::InfoState;

/// Picks uniformly among legal moves and flips with a fixed probability.
///
/// Carries its own [`GameRng`], so a seeded strategy replays the same
/// choices against the same states.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    rng: GameRng,
    flip_probability: f64,
}

impl RandomStrategy {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
            flip_probability: 0.5,
        }
    }

    /// Probability of flipping the dealt hand, clamped to `0.0..=1.0`.
    /// NaN falls back to an even chance.
    #[must_use]
    pub fn with_flip_probability(mut self, probability: f64) -> Self {
        self.flip_probability = if probability.is_nan() {
            0.5
        } else {
            probability.clamp(0.0, 1.0)
        };
        self
    }
}

impl Strategy for RandomStrategy {
    fn flip_hand(&mut self, _hand: &Hand) -> bool {
        self.rng.gen_bool(self.flip_probability)
    }

    fn select_move(&mut self, view: &InfoState) -> Move {
        let moves = view.possible_moves();
        match self.rng.choose(&moves) {
            Some(mv) => *mv,
            None => Move::show(0, 1),
        }
    }
}
