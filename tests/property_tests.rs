//! Property tests over random legal play.
//!
//! Each case deals a seeded round, applies random flip decisions, then
//! walks a path of legal moves chosen by index. Invariants are checked
//! after every step.

use proptest::prelude::*;

use scout_engine::core::{
    EngineError, Move, PlayerId, ScoutConfig, ScoutMove, ScoutReward, ShowMove, ShowRanking,
};
use scout_engine::round::GameState;

fn config_for(num_players: usize, sets_over_runs: bool, per_show: bool) -> ScoutConfig {
    let mut config = ScoutConfig::new(num_players);
    if sets_over_runs {
        config = config.show_ranking(ShowRanking::SetsOverRuns);
    }
    if per_show {
        config = config.scout_reward(ScoutReward::PerShow);
    }
    config
}

fn start(num_players: usize, seed: u64, flips: &[bool], config: &ScoutConfig) -> GameState {
    let mut state = GameState::with_seed(config, seed).unwrap();
    let decisions: Vec<bool> = (0..num_players).map(|i| flips[i % flips.len()]).collect();
    state.maybe_flip_hand(&decisions).unwrap();
    state
}

/// Moves that are structurally plausible for any hand but mostly illegal:
/// shows, scouts and combos around the hand bounds plus positions that
/// overflow when added.
fn candidate_moves(hand_len: usize) -> Vec<Move> {
    let positions: Vec<usize> = (0..=hand_len + 2).chain([usize::MAX - 1, usize::MAX]).collect();
    let flags = [(true, false), (false, true), (false, false), (true, true)];

    let mut candidates = Vec::new();
    for &start in &positions {
        for &length in &positions {
            candidates.push(Move::show(start, length));
        }
    }
    for &insert in &positions {
        for (first, flip) in flags {
            candidates.push(Move::scout(first, flip, insert));
        }
    }

    // The scout grows the hand by one, so combo shows straddle hand_len + 1.
    let edges = [0, 1, hand_len / 2, hand_len, hand_len + 1, hand_len + 2, usize::MAX];
    for &insert in &edges {
        for (first, flip) in flags {
            let scout = ScoutMove::new(first, flip, insert);
            for &start in &edges {
                for &length in &edges {
                    candidates.push(Move::scout_and_show(scout, ShowMove::new(start, length)));
                }
            }
        }
    }
    candidates
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Hands, table and displaced piles always hold exactly the deal.
    #[test]
    fn prop_cards_conserved(
        num_players in 3usize..=5,
        seed in any::<u64>(),
        flips in prop::collection::vec(any::<bool>(), 1..6),
        path in prop::collection::vec(any::<usize>(), 0..80),
    ) {
        let config = ScoutConfig::new(num_players);
        let mut state = start(num_players, seed, &flips, &config);
        let dealt = state.canonical_cards();

        for pick in path {
            let moves = state.legal_moves();
            if moves.is_empty() {
                break;
            }
            state.apply_move(&moves[pick % moves.len()]).unwrap();
            prop_assert_eq!(state.canonical_cards(), dealt.clone());
        }
    }

    /// Generated moves all apply; candidate moves outside the set are
    /// rejected without touching the state.
    #[test]
    fn prop_generator_sound_and_complete(
        num_players in 3usize..=5,
        seed in any::<u64>(),
        sets_over_runs in any::<bool>(),
        flips in prop::collection::vec(any::<bool>(), 1..6),
        path in prop::collection::vec(any::<usize>(), 0..30),
    ) {
        let config = config_for(num_players, sets_over_runs, false);
        let mut state = start(num_players, seed, &flips, &config);

        for pick in path {
            let moves = state.legal_moves();
            if moves.is_empty() {
                break;
            }
            for mv in &moves {
                let mut branch = state.clone();
                prop_assert!(branch.apply_move(mv).is_ok(), "generated {} failed", mv);
            }

            let hand_len = state.hand(state.current_player()).len();
            for candidate in candidate_moves(hand_len) {
                prop_assert_eq!(state.is_legal(&candidate), moves.contains(&candidate));
                if moves.contains(&candidate) {
                    continue;
                }
                let mut branch = state.clone();
                let rejected = matches!(
                    branch.apply_move(&candidate),
                    Err(EngineError::IllegalMove { .. })
                );
                prop_assert!(rejected, "{} applied outside the legal set", candidate);
                prop_assert_eq!(&branch, &state);
            }

            state.apply_move(&moves[pick % moves.len()]).unwrap();
        }
    }

    /// Generation is a pure function of the state and its order is the
    /// move ordering.
    #[test]
    fn prop_generation_deterministic_and_ordered(
        num_players in 3usize..=5,
        seed in any::<u64>(),
        flips in prop::collection::vec(any::<bool>(), 1..6),
        path in prop::collection::vec(any::<usize>(), 0..40),
    ) {
        let config = ScoutConfig::new(num_players);
        let mut state = start(num_players, seed, &flips, &config);

        for pick in path {
            let before = state.clone();
            let moves = state.legal_moves();
            prop_assert_eq!(&state, &before);
            prop_assert_eq!(&moves, &state.legal_moves());
            prop_assert!(moves.windows(2).all(|w| w[0] < w[1]));
            if moves.is_empty() {
                break;
            }
            state.apply_move(&moves[pick % moves.len()]).unwrap();
        }
    }

    /// The same seed, flips and path replay to the same state.
    #[test]
    fn prop_replay_is_deterministic(
        num_players in 3usize..=5,
        seed in any::<u64>(),
        per_show in any::<bool>(),
        flips in prop::collection::vec(any::<bool>(), 1..6),
        path in prop::collection::vec(any::<usize>(), 0..60),
    ) {
        let config = config_for(num_players, false, per_show);
        let play = || {
            let mut state = start(num_players, seed, &flips, &config);
            for &pick in &path {
                let moves = state.legal_moves();
                if moves.is_empty() {
                    break;
                }
                state.apply_move(&moves[pick % moves.len()]).unwrap();
            }
            state
        };
        prop_assert_eq!(play(), play());
    }

    /// Non-terminal moves pass the turn to the next seat; terminal moves
    /// keep it.
    #[test]
    fn prop_turn_passes_to_next_seat(
        num_players in 3usize..=5,
        seed in any::<u64>(),
        flips in prop::collection::vec(any::<bool>(), 1..6),
        path in prop::collection::vec(any::<usize>(), 0..80),
    ) {
        let config = ScoutConfig::new(num_players);
        let mut state = start(num_players, seed, &flips, &config);

        for pick in path {
            let moves = state.legal_moves();
            if moves.is_empty() {
                break;
            }
            let mover = state.current_player();
            let next = state.apply_move(&moves[pick % moves.len()]).unwrap();
            if state.is_finished() {
                prop_assert_eq!(next, mover);
            } else {
                prop_assert_eq!(next, PlayerId::new(((mover.index() + 1) % num_players) as u8));
            }
            prop_assert_eq!(next, state.current_player());
        }
    }

    /// Combo flags only go from true to false, once, through a combo.
    #[test]
    fn prop_combo_flag_one_shot(
        num_players in 3usize..=5,
        seed in any::<u64>(),
        flips in prop::collection::vec(any::<bool>(), 1..6),
        path in prop::collection::vec(any::<usize>(), 0..80),
    ) {
        let config = ScoutConfig::new(num_players);
        let mut state = start(num_players, seed, &flips, &config);

        for pick in path {
            let moves = state.legal_moves();
            if moves.is_empty() {
                break;
            }
            let before = state.can_scout_and_show().clone();
            let mover = state.current_player();
            let mv = moves[pick % moves.len()];
            state.apply_move(&mv).unwrap();
            let after = state.can_scout_and_show();

            for player in PlayerId::all(num_players) {
                let spent_now = before[player] && !after[player];
                prop_assert!(before[player] || !after[player], "flag came back for {}", player);
                prop_assert_eq!(spent_now, player == mover && mv.is_scout_and_show());
            }
        }
    }
}
