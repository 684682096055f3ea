//! Core engine types: seats, players, state, moves, RNG, configuration, errors.
//!
//! Everything a transition reads or produces lives here. The transitions
//! themselves are in `crate::rules`.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod seat;
pub mod state;

pub use action::{Move, MoveRecord};
pub use config::GameConfig;
pub use error::{ErrorKind, RulesError, RulesResult};
pub use player::{Player, PlayerWonder};
pub use rng::{GameRng, GameRngState};
pub use seat::{CurrentPlayer, Seat, Seats};
pub use state::{GameState, GameStateBuilder, CONFLICT_TRACK_END};
