//! The rules of the duel, as operations on `GameState`.
//!
//! - `transitions`: the moves (draft, construct, discard, resolve pending)
//! - `continuation`: turn advance and age changes after a move
//! - `military`: the conflict track and its loot tokens
//! - `trading`: construction prices
//! - `scoring`: victory conditions and final scores
//! - `engine`: legal move enumeration and history
//!
//! Everything is implemented as inherent methods on `GameState`, so callers
//! only need the state value.

mod continuation;
mod engine;
mod military;
mod scoring;
mod trading;
mod transitions;

pub use continuation::LAST_AGE;
pub use scoring::{GameResult, VictoryKind};
pub use trading::Price;
