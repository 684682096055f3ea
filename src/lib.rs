//! # wonders-duel
//!
//! A rules engine for a two-player card-drafting duel: wonders are drafted,
//! then three ages of buildings are taken from face-up and face-down
//! pyramids, until one player wins by military, by science, or on points.
//!
//! ## Design Principles
//!
//! 1. **States are values**: every transition takes `&GameState` and returns
//!    a new `GameState` or a `RulesError`. Snapshots are never mutated.
//!
//! 2. **Static material**: buildings, wonders and progress tokens are `Copy`
//!    identifiers with `&'static` printed data. State stores identifiers
//!    only.
//!
//! 3. **Closed effect set**: effects and pending actions are enums, matched
//!    exhaustively by the resolver, pricing and scoring.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) cloning via `im` so history and
//!   undo keep every snapshot.
//!
//! - **Deterministic RNG**: the ChaCha8 stream is part of the state, seeded
//!   explicitly and serializable.
//!
//! ## Modules
//!
//! - `core`: seats, players, state, moves, RNG, configuration, errors
//! - `cards`: buildings, wonders, progress tokens, resources
//! - `structure`: the age pyramid
//! - `effects`: effects, pending actions and their resolution
//! - `rules`: transitions, turn advance, pricing, scoring, legal moves
//! - `events`: event inference for renderers
//! - `bot`: random playouts
//!
//! ## Example
//!
//! ```
//! use wonders_duel::{play_out, GameState, RandomBot};
//!
//! let state = GameState::new(42);
//! let end = play_out(&state, &mut RandomBot::new(7)).unwrap();
//! assert!(end.is_over());
//! ```

pub mod bot;
pub mod cards;
pub mod core;
pub mod effects;
pub mod events;
pub mod rules;
pub mod structure;

// Re-export commonly used types
pub use crate::core::{
    CurrentPlayer, ErrorKind, GameConfig, GameRng, GameRngState, GameState, GameStateBuilder, Move,
    MoveRecord, Player, PlayerWonder, RulesError, RulesResult, Seat, Seats, CONFLICT_TRACK_END,
};

pub use crate::cards::{
    Building, BuildingType, Construction, Cost, ProgressToken, Resource, ResourceCategory,
    ScientificSymbol, Wonder,
};

pub use crate::structure::{BuildingCard, Structure};

pub use crate::effects::{Effect, PendingAction};

pub use crate::rules::{GameResult, Price, VictoryKind, LAST_AGE};

pub use crate::events::{infer_events, GameEvent};

pub use crate::bot::{play_out, Bot, RandomBot};
