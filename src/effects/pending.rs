//! Pending actions: decisions the current player owes before a new move.
//!
//! The queue lives in `GameState::pending_actions` and is resolved head
//! first. While it is non-empty no primary move (taking a wonder,
//! constructing, discarding) is accepted, with one exception: a
//! `TakeDiscardedBuilding` head turns `construct_building` into a free pick
//! from the discard pile.

use im::OrdSet;
use serde::{Deserialize, Serialize};

use crate::cards::{Building, BuildingType, ProgressToken};

/// A decision waiting in the pending queue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PendingAction {
    /// Choose one of the candidate progress tokens.
    ChooseProgressToken(OrdSet<ProgressToken>),

    /// Destroy one opponent building of the given type.
    DestroyOpponentBuilding(BuildingType),

    /// Pick the seat that starts the next age.
    ChoosePlayerForNextAge,

    /// The same player plays again.
    ReplayTurn,

    /// Construct a building from the discard pile for free.
    TakeDiscardedBuilding,
}

impl PendingAction {
    /// Can `building` be destroyed to resolve this action?
    #[must_use]
    pub fn can_destroy(&self, building: Building) -> bool {
        match self {
            PendingAction::DestroyOpponentBuilding(kind) => building.kind() == *kind,
            _ => false,
        }
    }

    /// Is `token` one of the offered candidates?
    #[must_use]
    pub fn offers(&self, token: ProgressToken) -> bool {
        match self {
            PendingAction::ChooseProgressToken(candidates) => candidates.contains(&token),
            _ => false,
        }
    }
}
