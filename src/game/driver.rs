//! Strategy-driven play.
//!
//! Runs any [`RulesEngine`] to completion with one [`Strategy`] per seat.
//! Each pending flip is collected from every seat's strategy; each move is
//! taken from the acting seat's strategy and checked against the legal set
//! before it is applied.

use log::debug;

use super::multi_round::MultiRoundGameState;
use crate::core::{ConfigError, EngineError, PhaseError, PlayerId};
use crate::round::{GameState, RoundStatus};
use crate::rules::{GameResult, RulesEngine, ScoringRule};
use crate::players::Strategy;

/// Move cap used when callers have no better bound.
pub const DEFAULT_TURN_LIMIT: usize = 10_000;

/// Drive `engine` until it is finished, returning the number of moves
/// applied.
///
/// ## Errors
///
/// - `InvalidConfiguration` if there is not one strategy per seat
/// - `StrategyContractViolation` if a strategy returns a move outside the
///   legal set
/// - `TurnLimit` if `max_moves` moves were applied without finishing
pub fn drive<E, P>(
    engine: &mut E,
    strategies: &mut [P],
    max_moves: usize,
) -> Result<usize, EngineError>
where
    E: RulesEngine,
    P: Strategy,
{
    let n = engine.num_players();
    if strategies.len() != n {
        return Err(ConfigError::StrategyCount {
            expected: n,
            got: strategies.len(),
        }
        .into());
    }

    let mut moves = 0;
    while !engine.is_finished() {
        if engine.flip_pending() {
            let decisions: Vec<bool> = PlayerId::all(n)
                .zip(strategies.iter_mut())
                .map(|(player, strategy)| strategy.flip_hand(engine.hand(player)))
                .collect();
            engine.maybe_flip_hand(&decisions)?;
            continue;
        }

        if moves >= max_moves {
            return Err(EngineError::TurnLimit(max_moves));
        }
        let player = engine.current_player();
        let mv = strategies[player.index()].select_move(&engine.view(player)?);
        if !engine.legal_moves().contains(&mv) {
            return Err(EngineError::StrategyContractViolation { player, mv });
        }
        engine.apply_move(&mv)?;
        moves += 1;
    }

    debug!("drive finished after {} moves", moves);
    Ok(moves)
}

/// Play one round to its end.
pub fn play_round<P: Strategy>(
    state: &mut GameState,
    strategies: &mut [P],
    max_moves: usize,
) -> Result<RoundStatus, EngineError> {
    drive(state, strategies, max_moves)?;
    Ok(state.finished())
}

/// Play a whole session, returning its winners.
pub fn play_game<S: ScoringRule, P: Strategy>(
    game: &mut MultiRoundGameState<S>,
    strategies: &mut [P],
    max_moves: usize,
) -> Result<GameResult, EngineError> {
    drive(game, strategies, max_moves)?;
    game.winners().ok_or(PhaseError::RoundInProgress.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Move, ScoutConfig, StopCondition};
    use crate::players::{FirstLegalStrategy, RandomStrategy};
    use crate::cards::Hand;
    use crate::round::InfoState;

    /// Scouts even when the table is empty.
    struct AlwaysScouts;

    impl Strategy for AlwaysScouts {
        fn flip_hand(&mut self, _hand: &Hand) -> bool {
            false
        }

        fn select_move(&mut self, _view: &InfoState) -> Move {
            Move::scout(true, false, 0)
        }
    }

    #[test]
    fn test_play_round_with_random_seats() {
        let mut state = GameState::with_seed(&ScoutConfig::new(4), 33).unwrap();
        let mut seats: Vec<RandomStrategy> = (0..4).map(RandomStrategy::new).collect();

        let status = play_round(&mut state, &mut seats, DEFAULT_TURN_LIMIT).unwrap();
        assert!(status.is_finished());
        assert_eq!(status, state.finished());
    }

    #[test]
    fn test_strategy_count_must_match() {
        let mut state = GameState::with_seed(&ScoutConfig::new(3), 1).unwrap();
        let mut seats = vec![FirstLegalStrategy; 2];
        assert_eq!(
            drive(&mut state, &mut seats, 10),
            Err(EngineError::InvalidConfiguration(ConfigError::StrategyCount {
                expected: 3,
                got: 2
            }))
        );
    }

    #[test]
    fn test_off_list_move_is_contract_violation() {
        let mut state = GameState::with_seed(&ScoutConfig::new(3), 1).unwrap();
        let mut seats: Vec<Box<dyn Strategy>> = vec![
            Box::new(AlwaysScouts),
            Box::new(FirstLegalStrategy),
            Box::new(FirstLegalStrategy),
        ];

        let err = drive(&mut state, &mut seats, 10).unwrap_err();
        assert!(matches!(
            err,
            EngineError::StrategyContractViolation { player, .. } if player == PlayerId::new(0)
        ));
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_turn_limit() {
        let mut state = GameState::with_seed(&ScoutConfig::new(3), 1).unwrap();
        let mut seats = vec![FirstLegalStrategy; 3];
        assert_eq!(drive(&mut state, &mut seats, 2), Err(EngineError::TurnLimit(2)));
        assert_eq!(state.history().len(), 2);
    }

    #[test]
    fn test_play_game_runs_every_round() {
        let config = ScoutConfig::new(3).stop_condition(StopCondition::Rounds(2));
        let mut game = MultiRoundGameState::with_standard_scoring(config, 77).unwrap();
        let mut seats: Vec<RandomStrategy> = (10..13).map(RandomStrategy::new).collect();

        let result = play_game(&mut game, &mut seats, DEFAULT_TURN_LIMIT).unwrap();
        assert_eq!(game.rounds_finished(), 2);
        assert_eq!(game.winners(), Some(result));
    }
}
