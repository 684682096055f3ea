//! Automated players.
//!
//! A bot is just another caller: it picks one of `GameState::legal_moves`
//! and plays it through the same transitions as any other caller. Move
//! selection heuristics are out of scope; `RandomBot` picks uniformly and
//! serves for playouts, benchmarks and property tests.

use crate::core::{GameRng, GameState, Move, RulesResult};

/// Chooses moves.
pub trait Bot {
    /// Pick a move for the current player, or `None` if there is none.
    fn choose_move(&mut self, state: &GameState) -> Option<Move>;
}

/// Uniformly random legal moves.
#[derive(Clone, Debug)]
pub struct RandomBot {
    rng: GameRng,
}

impl RandomBot {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl Bot for RandomBot {
    fn choose_move(&mut self, state: &GameState) -> Option<Move> {
        let moves = state.legal_moves();
        self.rng.choose(&moves).copied()
    }
}

/// Let `bot` play both seats until the game ends or no move is left.
pub fn play_out(state: &GameState, bot: &mut impl Bot) -> RulesResult<GameState> {
    let mut state = state.clone();
    while !state.is_over() {
        let Some(mv) = bot.choose_move(&state) else {
            break;
        };
        state = state.play(mv)?;
    }
    Ok(state)
}
