//! The strategy trait and the simplest strategy.

use crate::cards::Hand;
use crate::core::Move;
use crate::round::InfoState;

/// Decision-making for one seat.
///
/// ## Contract
///
/// - `flip_hand` is asked once per round, before the first move, with the
///   seat's freshly dealt hand
/// - `select_move` is asked only on the seat's own turn and must return a
///   member of `view.possible_moves()`; anything else is a contract
///   violation reported by the driver
pub trait Strategy {
    /// Turn the whole hand over?
    fn flip_hand(&mut self, hand: &Hand) -> bool;

    /// Pick a move for the seat to act.
    fn select_move(&mut self, view: &InfoState) -> Move;
}

/// Always plays the first legal move and never flips.
///
/// Since moves are enumerated shows first, this plays the leftmost single
/// card (or shortest leftmost run) that beats the table whenever it can.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstLegalStrategy;

impl Strategy for FirstLegalStrategy {
    fn flip_hand(&mut self, _hand: &Hand) -> bool {
        false
    }

    fn select_move(&mut self, view: &InfoState) -> Move {
        match view.possible_moves().first() {
            Some(mv) => *mv,
            // Off-turn; the driver rejects it.
            None => Move::show(0, 1),
        }
    }
}

impl<T: Strategy + ?Sized> Strategy for Box<T> {
    fn flip_hand(&mut self, hand: &Hand) -> bool {
        (**self).flip_hand(hand)
    }

    fn select_move(&mut self, view: &InfoState) -> Move {
        (**self).select_move(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PlayerId, ScoutConfig};
    use crate::round::GameState;

    #[test]
    fn test_first_legal_picks_head_of_move_list() {
        let mut state = GameState::with_seed(&ScoutConfig::new(3), 9).unwrap();
        state.maybe_flip_hand(&[false; 3]).unwrap();

        let mut strategy = FirstLegalStrategy;
        assert!(!strategy.flip_hand(state.hand(PlayerId::new(0))));
        assert_eq!(strategy.select_move(&state.info_state()), Move::show(0, 1));
    }
}
