//! Rule violations.
//!
//! Every transition validates its preconditions before touching anything and
//! returns a `RulesError` on failure; the state it was called on stays valid.

use thiserror::Error;

use crate::cards::{Building, ProgressToken, Wonder};

use super::seat::Seat;

/// Broad classification of a `RulesError`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller issued an illegal move.
    PreconditionViolation,
    /// The caller queried something that does not exist in this state.
    InvalidState,
}

/// Why a move or query was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("the game is over")]
    GameOver,

    #[error("{0} is not available in the draft")]
    WonderNotAvailable(Wonder),

    #[error("the wonder draft is still in progress")]
    DraftInProgress,

    #[error("the wonder draft is over")]
    DraftOver,

    #[error("a pending action must be resolved before a new move")]
    PendingActionFirst,

    #[error("no pending action of this kind is waiting")]
    NoMatchingPendingAction,

    #[error("{0} is not accessible in the structure")]
    BuildingNotAccessible(Building),

    #[error("{0} is not in the discard pile")]
    BuildingNotDiscarded(Building),

    #[error("{0} cannot be destroyed")]
    IneligibleDestroyTarget(Building),

    #[error("{0} is not offered")]
    ProgressTokenNotOffered(ProgressToken),

    #[error("{0} is not an unbuilt wonder of the current player")]
    WonderNotOwned(Wonder),

    #[error("no more wonders can be built")]
    WonderLimitReached,

    #[error("{seat} needs {needed} coins but has {available}")]
    NotEnoughCoins { seat: Seat, needed: u32, available: u32 },

    #[error("there is no age {0}")]
    NoSuchAge(u8),

    #[error("the age {age} structure holds {expected} cards, got {found}")]
    StructureSize { age: u8, expected: usize, found: usize },
}

impl RulesError {
    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            RulesError::GameOver | RulesError::NoSuchAge(_) | RulesError::StructureSize { .. } => {
                ErrorKind::InvalidState
            }
            _ => ErrorKind::PreconditionViolation,
        }
    }
}

/// Result type for rule transitions and queries.
pub type RulesResult<T> = Result<T, RulesError>;
