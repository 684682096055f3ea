//! Moves: the decisions a caller submits to the engine.
//!
//! A `Move` names one transition and its arguments. Legal moves are
//! enumerated by `GameState::legal_moves`, and `Move::apply_to` dispatches to
//! the matching transition, so bots and renderers can treat moves as plain
//! values.

use serde::{Deserialize, Serialize};

use crate::cards::{Building, ProgressToken, Wonder};

use super::error::RulesResult;
use super::seat::Seat;
use super::state::GameState;

/// A complete player decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Move {
    /// Draft a wonder from the available pool.
    TakeWonder(Wonder),
    /// Construct a building from the structure (or from the discard pile when
    /// the Mausoleum's pick is pending).
    ConstructBuilding(Building),
    /// Construct a wonder, sacrificing an accessible building.
    ConstructWonder { wonder: Wonder, building: Building },
    /// Discard an accessible building for coins.
    Discard(Building),
    ChooseProgressToken(ProgressToken),
    /// Destroy an opponent building.
    DestroyBuilding(Building),
    ChoosePlayerForNextAge(Seat),
}

impl Move {
    /// Apply this move to `state`, returning the next state.
    pub fn apply_to(self, state: &GameState) -> RulesResult<GameState> {
        match self {
            Move::TakeWonder(wonder) => state.take_wonder(wonder),
            Move::ConstructBuilding(building) => state.construct_building(building),
            Move::ConstructWonder { wonder, building } => state.construct_wonder(wonder, building),
            Move::Discard(building) => state.discard(building),
            Move::ChooseProgressToken(token) => state.choose_progress_token(token),
            Move::DestroyBuilding(building) => state.destroy_building(building),
            Move::ChoosePlayerForNextAge(seat) => state.choose_player_for_next_age(seat),
        }
    }

    /// Moves that take a card from the draft pool or the structure.
    #[must_use]
    pub fn is_primary(self) -> bool {
        matches!(
            self,
            Move::TakeWonder(_)
                | Move::ConstructBuilding(_)
                | Move::ConstructWonder { .. }
                | Move::Discard(_)
        )
    }
}

/// A move as recorded in the game history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The seat that played the move.
    pub seat: Seat,

    pub mv: Move,

    /// Age of the structure when the move was played; 0 during the draft.
    pub age: u8,

    /// Position of the move in the game, starting at 0.
    pub sequence: u32,
}

impl MoveRecord {
    #[must_use]
    pub fn new(seat: Seat, mv: Move, age: u8, sequence: u32) -> Self {
        Self {
            seat,
            mv,
            age,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_moves() {
        assert!(Move::TakeWonder(Wonder::ThePyramids).is_primary());
        assert!(Move::Discard(Building::Tavern).is_primary());
        assert!(Move::ConstructWonder {
            wonder: Wonder::TheSphinx,
            building: Building::Altar,
        }
        .is_primary());
        assert!(!Move::ChooseProgressToken(ProgressToken::Law).is_primary());
        assert!(!Move::ChoosePlayerForNextAge(Seat::First).is_primary());
    }

    #[test]
    fn test_move_record() {
        let record = MoveRecord::new(Seat::Second, Move::Discard(Building::Tavern), 1, 12);
        assert_eq!(record.seat, Seat::Second);
        assert_eq!(record.mv, Move::Discard(Building::Tavern));
        assert_eq!(record.age, 1);
        assert_eq!(record.sequence, 12);
    }

    #[test]
    fn test_move_serialization() {
        let mv = Move::ConstructWonder {
            wonder: Wonder::TheColossus,
            building: Building::Baths,
        };
        let json = serde_json::to_string(&mv).unwrap();
        let deserialized: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(mv, deserialized);
    }
}
