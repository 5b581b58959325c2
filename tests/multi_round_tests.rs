//! Multi-round sessions and strategy-driven play.

use scout_engine::core::{snapshot, EngineError, PhaseError, PlayerId, ScoutConfig, StopCondition};
use scout_engine::game::{play_game, play_round, MultiRoundGameState, DEFAULT_TURN_LIMIT};
use scout_engine::players::{FirstLegalStrategy, RandomStrategy, Strategy};
use scout_engine::round::{GameState, RoundStatus};
use scout_engine::rules::{Penalty, RulesEngine, StandardScoring};

fn random_seats(num_players: usize, seed: u64) -> Vec<RandomStrategy> {
    (0..num_players as u64).map(|i| RandomStrategy::new(seed + i)).collect()
}

/// Everyone deals once, dealers rotate, and cumulative scores add up.
#[test]
fn test_session_rotates_dealer_and_accumulates() {
    for num_players in 3..=5 {
        let config = ScoutConfig::new(num_players).dealer(1);
        let mut game = MultiRoundGameState::with_standard_scoring(config, 2024).unwrap();
        let mut seats = random_seats(num_players, 40);

        let result = play_game(&mut game, &mut seats, DEFAULT_TURN_LIMIT).unwrap();

        assert!(game.finished());
        assert_eq!(game.rounds_finished(), num_players);
        let dealers: Vec<usize> = game.summaries().iter().map(|s| s.dealer.index()).collect();
        let expected: Vec<usize> = (0..num_players).map(|i| (i + 1) % num_players).collect();
        assert_eq!(dealers, expected);

        let mut totals = vec![0; num_players];
        for summary in game.summaries().iter() {
            assert!(summary.status.is_finished());
            for (total, delta) in totals.iter_mut().zip(summary.deltas.to_vec()) {
                *total += delta;
            }
        }
        assert_eq!(game.cum_scores().to_vec(), totals);

        let best = totals.iter().copied().max().unwrap();
        for player in PlayerId::all(num_players) {
            assert_eq!(result.is_winner(player), totals[player.index()] == best);
        }
    }
}

/// Each new round opens with the new dealer to act, awaiting its flip.
#[test]
fn test_new_round_dealt_after_settle() {
    let mut game = MultiRoundGameState::with_standard_scoring(ScoutConfig::new(3), 6).unwrap();
    let mut seats = vec![FirstLegalStrategy; 3];

    let mut round = GameState::clone(game.round());
    play_round(&mut round, &mut seats, DEFAULT_TURN_LIMIT).unwrap();
    let script: Vec<_> = round.history().iter().map(|r| r.mv).collect();

    game.maybe_flip_hand(&[false; 3]).unwrap();
    for mv in &script {
        game.apply_move(mv).unwrap();
    }

    assert_eq!(game.rounds_finished(), 1);
    assert_eq!(game.dealer(), PlayerId::new(1));
    assert!(game.flip_pending());
    assert_eq!(game.round().current_player(), PlayerId::new(1));
    assert!(game.round().history().is_empty());
    assert_eq!(game.summaries()[0].status, round.finished());
}

/// A session in progress restores from a snapshot and plays on identically.
#[test]
fn test_session_snapshot_resumes() {
    let config = ScoutConfig::new(4).stop_condition(StopCondition::Rounds(2));
    let mut game = MultiRoundGameState::with_standard_scoring(config, 31).unwrap();
    game.maybe_flip_hand(&[true, false, true, false]).unwrap();
    let opening = game.round().legal_moves()[0];
    game.apply_move(&opening).unwrap();

    let bytes = snapshot::encode(&game).unwrap();
    let mut restored: MultiRoundGameState = snapshot::decode(&bytes).unwrap();
    assert_eq!(restored, game);

    let mut seats_a = random_seats(4, 5);
    let mut seats_b = random_seats(4, 5);
    let a = play_game(&mut game, &mut seats_a, DEFAULT_TURN_LIMIT).unwrap();
    let b = play_game(&mut restored, &mut seats_b, DEFAULT_TURN_LIMIT).unwrap();
    assert_eq!(a, b);
    assert_eq!(game, restored);

    let json = serde_json::to_string(&game).unwrap();
    let from_json: MultiRoundGameState = serde_json::from_str(&json).unwrap();
    assert_eq!(from_json, game);
}

/// Face-value penalties show up in the round deltas.
#[test]
fn test_face_value_scoring() {
    let scoring = StandardScoring {
        penalty: Penalty::FaceValueSum,
        per_card: 1,
        exempt_round_ender: false,
        ender_bonus: 3,
    };
    let config = ScoutConfig::new(3).stop_condition(StopCondition::Rounds(1));
    let mut game = MultiRoundGameState::new(config, 12, scoring).unwrap();
    let mut seats = random_seats(3, 70);
    play_game(&mut game, &mut seats, DEFAULT_TURN_LIMIT).unwrap();

    let summary = &game.summaries()[0];
    let hands = game.round().hands();
    let ender = summary.status.ender();
    for player in PlayerId::all(3) {
        let bonus = if ender == Some(player) { 3 } else { 0 };
        let expected = summary.earned[player] + bonus - hands[player].face_total();
        assert_eq!(summary.deltas[player], expected);
    }
}

/// Finished sessions reject further transitions.
#[test]
fn test_finished_session_rejects_calls() {
    let config = ScoutConfig::new(5).stop_condition(StopCondition::Rounds(1));
    let mut game = MultiRoundGameState::with_standard_scoring(config, 1).unwrap();
    let mut seats = vec![FirstLegalStrategy; 5];
    play_game(&mut game, &mut seats, DEFAULT_TURN_LIMIT).unwrap();

    assert!(RulesEngine::is_finished(&game));
    assert!(RulesEngine::legal_moves(&game).is_empty());
    assert_eq!(
        game.maybe_flip_hand(&[false; 5]),
        Err(EngineError::PrematureTransition(PhaseError::GameFinished))
    );
}

/// Boxed strategies of different kinds can share a table.
#[test]
fn test_mixed_strategies_finish_round() {
    let mut round = GameState::with_seed(&ScoutConfig::new(3).dealer(2), 55).unwrap();
    let mut seats: Vec<Box<dyn Strategy>> = vec![
        Box::new(FirstLegalStrategy),
        Box::new(RandomStrategy::new(1)),
        Box::new(RandomStrategy::new(2).with_flip_probability(1.0)),
    ];

    let status = play_round(&mut round, &mut seats, DEFAULT_TURN_LIMIT).unwrap();
    assert_ne!(status, RoundStatus::InProgress);
    assert_eq!(round.history()[0].player, PlayerId::new(2));
}

/// Invalid tables are refused at construction.
#[test]
fn test_invalid_configuration() {
    assert!(matches!(
        MultiRoundGameState::with_standard_scoring(ScoutConfig::new(2), 0),
        Err(EngineError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        GameState::with_seed(&ScoutConfig::new(4).dealer(4), 0),
        Err(EngineError::InvalidConfiguration(_))
    ));
}
