//! Seat identification and per-seat data storage.
//!
//! ## Seat
//!
//! The game is strictly two-player: `Seat::First` drafts first and the
//! conflict pawn moving toward positive positions favours it.
//!
//! ## Seats
//!
//! A pair of per-seat values, indexable by `Seat`.
//!
//! ## CurrentPlayer
//!
//! Whose turn it is, or `Ended` once the game is over. Game over is a state
//! of this enum rather than an absent value, so callers must match on it.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    /// Both seats, in turn order.
    pub const BOTH: [Seat; 2] = [Seat::First, Seat::Second];

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// +1 for the first seat, -1 for the second: the direction in which this
    /// seat pushes the conflict pawn.
    #[must_use]
    pub const fn direction(self) -> i8 {
        match self {
            Seat::First => 1,
            Seat::Second => -1,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::First => f.write_str("Seat 1"),
            Seat::Second => f.write_str("Seat 2"),
        }
    }
}

/// Whose turn it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurrentPlayer {
    Playing(Seat),
    Ended,
}

impl CurrentPlayer {
    /// The seat to play, if the game is still running.
    #[must_use]
    pub const fn seat(self) -> Option<Seat> {
        match self {
            CurrentPlayer::Playing(seat) => Some(seat),
            CurrentPlayer::Ended => None,
        }
    }

    #[must_use]
    pub const fn is_ended(self) -> bool {
        matches!(self, CurrentPlayer::Ended)
    }
}

impl From<Seat> for CurrentPlayer {
    fn from(seat: Seat) -> Self {
        CurrentPlayer::Playing(seat)
    }
}

/// Per-seat data storage.
///
/// ## Example
///
/// ```
/// use wonders_duel::core::{Seat, Seats};
///
/// let mut coins = Seats::new(7, 7);
/// coins[Seat::Second] += 3;
/// assert_eq!(coins[Seat::First], 7);
/// assert_eq!(coins[Seat::Second], 10);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seats<T> {
    pub first: T,
    pub second: T,
}

impl<T> Seats<T> {
    /// Create from the first and second seat values.
    pub const fn new(first: T, second: T) -> Self {
        Self { first, second }
    }

    /// Create with values from a factory function.
    pub fn from_fn(factory: impl Fn(Seat) -> T) -> Self {
        Self {
            first: factory(Seat::First),
            second: factory(Seat::Second),
        }
    }

    /// Iterate over (Seat, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        [(Seat::First, &self.first), (Seat::Second, &self.second)].into_iter()
    }

    /// Apply a function to both values.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> Seats<U> {
        Seats {
            first: f(&self.first),
            second: f(&self.second),
        }
    }
}

impl<T> Index<Seat> for Seats<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        match seat {
            Seat::First => &self.first,
            Seat::Second => &self.second,
        }
    }
}

impl<T> IndexMut<Seat> for Seats<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        match seat {
            Seat::First => &mut self.first,
            Seat::Second => &mut self.second,
        }
    }
}
