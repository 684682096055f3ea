//! The conflict track.
//!
//! The pawn starts at 0. Shields of `Seat::First` push it toward +9, shields
//! of `Seat::Second` toward -9. Reaching either end wins the game on the
//! spot. On the way, each side of the track holds two loot tokens: the
//! first is taken when the pawn enters 3..=5 on that side, the second when
//! it enters 6..=8. Taking a token costs the player on that side coins.

use crate::core::{CurrentPlayer, GameState, RulesResult, Seat, CONFLICT_TRACK_END};

/// Distance from the centre and coins lost, per loot tier.
const LOOT_TIERS: [(u8, u32); 2] = [(3, 2), (6, 5)];

impl GameState {
    /// Move the pawn `shields` steps in the current player's direction.
    pub fn move_conflict_pawn(&self, shields: u8) -> RulesResult<GameState> {
        let seat = self.current_player()?;
        let mut next = self.clone();
        next.push_conflict_pawn(seat, shields);
        Ok(next)
    }

    /// Credit coins to the current player.
    pub fn take_coins(&self, coins: u32) -> RulesResult<GameState> {
        let seat = self.current_player()?;
        let mut next = self.clone();
        next.players[seat].gain_coins(coins);
        Ok(next)
    }

    pub(crate) fn push_conflict_pawn(&mut self, seat: Seat, shields: u8) {
        let end = i16::from(CONFLICT_TRACK_END);
        let moved = i16::from(self.conflict_position) + i16::from(shields) * i16::from(seat.direction());
        // Clamped to the track, so the narrowing cannot truncate.
        self.conflict_position = moved.clamp(-end, end) as i8;

        if self.conflict_position.abs() >= CONFLICT_TRACK_END {
            self.current_player = CurrentPlayer::Ended;
        } else {
            self.loot_military_tokens();
        }
    }

    fn loot_military_tokens(&mut self) {
        let looted = match self.conflict_position.signum() {
            1 => Seat::Second,
            -1 => Seat::First,
            _ => return,
        };
        let distance = self.conflict_position.unsigned_abs();
        let player = &mut self.players[looted];

        for (tier, (threshold, coins)) in (1u8..).zip(LOOT_TIERS) {
            if distance >= threshold && player.military_tokens_looted < tier {
                player.lose_coins(coins);
                player.military_tokens_looted = tier;
            }
        }
    }

    /// Victory points from the pawn position, for the seat it favours.
    #[must_use]
    pub fn military_points(&self, seat: Seat) -> u32 {
        let relative = self.conflict_position * seat.direction();
        match relative {
            1..=2 => 2,
            3..=5 => 5,
            6..=8 => 10,
            _ => 0,
        }
    }

    /// The seat that pushed the pawn to the end of the track, if any.
    #[must_use]
    pub fn military_supremacy(&self) -> Option<Seat> {
        if self.conflict_position >= CONFLICT_TRACK_END {
            Some(Seat::First)
        } else if self.conflict_position <= -CONFLICT_TRACK_END {
            Some(Seat::Second)
        } else {
            None
        }
    }
}
