//! Property-based tests over random games.
//!
//! These tests play seeded random games to the end and check the state
//! after every move.
//! Run with: cargo test --release prop_game

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use wonders_duel::{Bot, GameState, Move, RandomBot, Seat, CONFLICT_TRACK_END};

/// No game lasts longer: 8 picks, 60 cards and their follow-up decisions.
const MAX_MOVES: usize = 200;

/// Every card dealt so far is in exactly one place.
fn cards_dealt(state: &GameState) -> usize {
    let in_structure = state.structure().map_or(0, |structure| structure.len());
    let in_cities: usize = Seat::BOTH
        .into_iter()
        .map(|seat| {
            let player = state.player(seat);
            let under = player.wonders.iter().filter(|slot| slot.is_built()).count();
            player.buildings.len() + under
        })
        .sum();
    in_structure + in_cities + state.discarded().len()
}

fn play_checked(game_seed: u64, bot_seed: u64) -> Result<GameState, TestCaseError> {
    let mut state = GameState::new(game_seed);
    let mut bot = RandomBot::new(bot_seed);

    for played in 0..MAX_MOVES {
        if state.is_over() {
            return Ok(state);
        }

        let moves = state.legal_moves();
        prop_assert!(!moves.is_empty(), "no legal move at move {}", played);

        if state.pending_actions().is_empty() {
            prop_assert!(
                moves.iter().all(|mv| mv.is_primary()),
                "decision offered with nothing pending"
            );
        } else {
            prop_assert!(
                !moves
                    .iter()
                    .any(|mv| matches!(mv, Move::Discard(_) | Move::ConstructWonder { .. } | Move::TakeWonder(_))),
                "primary move offered while a decision is pending"
            );
        }

        let mv = bot.choose_move(&state).unwrap();
        state = state.play(mv).unwrap();

        prop_assert!(state.conflict_position().abs() <= CONFLICT_TRACK_END);
        prop_assert!(state.wonders_available().len() <= 4);
        prop_assert!(state.total_built_wonders() <= 7);
        prop_assert_eq!(state.history().len(), played + 1);
        if let Some(age) = state.age() {
            prop_assert_eq!(cards_dealt(&state), 20 * usize::from(age));
        }
    }

    prop_assert!(state.is_over(), "game still running after {} moves", MAX_MOVES);
    Ok(state)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Random games keep every card accounted for and always end.
    #[test]
    fn prop_random_games_stay_consistent(game_seed in any::<u64>(), bot_seed in any::<u64>()) {
        let end = play_checked(game_seed, bot_seed)?;
        prop_assert!(end.result().is_some());
        prop_assert!(end.legal_moves().is_empty());
    }

    /// Replaying the recorded history reproduces the final state.
    #[test]
    fn prop_history_replays(game_seed in any::<u64>(), bot_seed in any::<u64>()) {
        let end = play_checked(game_seed, bot_seed)?;

        let mut replay = GameState::new(game_seed);
        for record in end.history() {
            prop_assert_eq!(replay.current_player(), Ok(record.seat));
            replay = replay.play(record.mv).unwrap();
        }
        prop_assert_eq!(replay, end);
    }

    /// Failed moves never change the state they were tried on.
    #[test]
    fn prop_illegal_moves_are_rejected(game_seed in any::<u64>(), steps in 0usize..60) {
        let mut state = GameState::new(game_seed);
        let mut bot = RandomBot::new(game_seed);
        for _ in 0..steps {
            match bot.choose_move(&state) {
                Some(mv) => state = state.play(mv).unwrap(),
                None => break,
            }
        }

        let legal = state.legal_moves();
        let before = state.clone();
        for wonder in wonders_duel::Wonder::ALL {
            let mv = Move::TakeWonder(wonder);
            if !legal.contains(&mv) {
                prop_assert!(state.play(mv).is_err());
            }
        }
        prop_assert_eq!(state, before);
    }
}
