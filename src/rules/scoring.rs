//! End of game: victory conditions and scores.
//!
//! There are three ways to win:
//!
//! - **Military**: the conflict pawn reaches the end of the track.
//! - **Scientific**: a player owns six distinct scientific symbols.
//! - **Civilian**: at the end of age III, the highest score wins. A tie goes
//!   to the player with more civilian building points; a tie on that too is
//!   a draw.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, Seat};
use crate::effects::{GuildCriterion, VictoryPoints};

/// How a game was won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VictoryKind {
    Military,
    Scientific,
    Civilian,
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Seat, VictoryKind),
    /// Draw (no winner).
    Draw,
}

impl GameResult {
    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(&self, seat: Seat) -> bool {
        matches!(self, GameResult::Winner(winner, _) if *winner == seat)
    }
}

impl GameState {
    #[must_use]
    pub fn has_scientific_supremacy(&self, seat: Seat) -> bool {
        self.players[seat].distinct_symbols() >= self.config.supremacy_symbols
    }

    /// Total score: military points, victory point effects, and one point
    /// per 3 coins.
    #[must_use]
    pub fn victory_points(&self, seat: Seat) -> u32 {
        let player = &self.players[seat];
        let effects: u32 = player
            .victory_point_effects()
            .map(|points| self.count_victory_points(seat, points))
            .sum();
        self.military_points(seat) + effects + player.coins / 3
    }

    /// Printed points of civilian buildings, the first tie-break.
    #[must_use]
    pub fn civilian_points(&self, seat: Seat) -> u32 {
        self.players[seat].civilian_points()
    }

    fn count_victory_points(&self, seat: Seat, points: VictoryPoints) -> u32 {
        match points {
            VictoryPoints::Fixed(points) => u32::from(points),
            VictoryPoints::PerProgressToken(points) => {
                self.players[seat].progress_tokens.len() as u32 * u32::from(points)
            }
            VictoryPoints::Guild(criterion @ GuildCriterion::Wonders) => 2 * self.guild_count(criterion),
            VictoryPoints::Guild(criterion) => self.guild_count(criterion),
        }
    }

    /// The winner as the state stands, with how they won.
    ///
    /// Meaningful once `is_over()`; earlier it reports who would win if the
    /// game were scored now.
    #[must_use]
    pub fn winner_by(&self) -> Option<(Seat, VictoryKind)> {
        if let Some(seat) = self.military_supremacy() {
            return Some((seat, VictoryKind::Military));
        }
        if let Some(seat) = Seat::BOTH.into_iter().find(|seat| self.has_scientific_supremacy(*seat)) {
            return Some((seat, VictoryKind::Scientific));
        }
        self.highest(|state, seat| state.victory_points(seat))
            .or_else(|| self.highest(|state, seat| state.civilian_points(seat)))
            .map(|seat| (seat, VictoryKind::Civilian))
    }

    #[must_use]
    pub fn winner(&self) -> Option<Seat> {
        self.winner_by().map(|(seat, _)| seat)
    }

    /// The result, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.is_over() {
            return None;
        }
        Some(match self.winner_by() {
            Some((seat, kind)) => GameResult::Winner(seat, kind),
            None => GameResult::Draw,
        })
    }

    fn highest(&self, score: impl Fn(&GameState, Seat) -> u32) -> Option<Seat> {
        let first = score(self, Seat::First);
        let second = score(self, Seat::Second);
        match first.cmp(&second) {
            std::cmp::Ordering::Greater => Some(Seat::First),
            std::cmp::Ordering::Less => Some(Seat::Second),
            std::cmp::Ordering::Equal => None,
        }
    }
}
