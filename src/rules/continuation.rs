//! Turn advance after a move.
//!
//! Runs at the end of every transition that takes a card or resolves a
//! pending action:
//!
//! 1. If the game is over, mark it ended.
//! 2. If a pending action is queued: a replay at the head is consumed and the
//!    same player goes again; anything else waits for its resolution.
//! 3. If the age structure is empty, deal the next age and let the trailing
//!    player choose who starts it.
//! 4. Otherwise the other player plays.
//!
//! Newly uncovered cards are revealed only in steps 2 (replay) and 4, so a
//! queued decision keeps the next layer hidden until it is resolved.

use std::cmp::Ordering;

use im::vector;

use crate::core::{CurrentPlayer, GameState, RulesResult, Seat};
use crate::effects::PendingAction;
use crate::structure::Structure;

/// Age whose exhaustion ends the game.
pub const LAST_AGE: u8 = 3;

impl GameState {
    /// Does any end condition hold?
    #[must_use]
    pub fn is_end_condition_met(&self) -> bool {
        self.military_supremacy().is_some()
            || Seat::BOTH.into_iter().any(|seat| self.has_scientific_supremacy(seat))
            || self
                .structure
                .as_ref()
                .is_some_and(|structure| structure.age() == LAST_AGE && structure.is_empty())
    }

    pub(crate) fn continue_game(mut self) -> RulesResult<GameState> {
        if self.is_end_condition_met() {
            self.current_player = CurrentPlayer::Ended;
            return Ok(self);
        }

        if let Some(head) = self.pending_actions.front() {
            if *head == PendingAction::ReplayTurn {
                self.pending_actions.pop_front();
                // A replay earned on the last card of an age is lost.
                if self.age_is_over() {
                    return self.prepare_next_age();
                }
                self.reveal_structure();
            }
            return Ok(self);
        }

        if self.age_is_over() {
            return self.prepare_next_age();
        }

        if let CurrentPlayer::Playing(seat) = self.current_player {
            self.current_player = CurrentPlayer::Playing(seat.opponent());
        }
        self.reveal_structure();
        Ok(self)
    }

    fn age_is_over(&self) -> bool {
        self.structure.as_ref().is_some_and(Structure::is_empty)
    }

    fn reveal_structure(&mut self) {
        self.structure = self.structure.as_ref().map(Structure::reveal_accessible);
    }

    /// Deal the next age. The player the conflict pawn is pushed toward
    /// chooses who starts; on a level track the player who just moved does.
    fn prepare_next_age(mut self) -> RulesResult<GameState> {
        let age = self.age().map_or(1, |age| age + 1);
        let chooser = match self.conflict_position.cmp(&0) {
            Ordering::Less => Seat::First,
            Ordering::Greater => Seat::Second,
            Ordering::Equal => self.current_player.seat().unwrap_or(Seat::First),
        };

        self.structure = Some(Structure::new(age, &mut self.rng)?);
        self.current_player = CurrentPlayer::Playing(chooser);
        self.pending_actions = vector![PendingAction::ChoosePlayerForNextAge];
        Ok(self)
    }
}
