//! Legal move enumeration and move application with history.
//!
//! Callers (a UI bridge, a bot) pick a move from `legal_moves` and feed it to
//! `play`. The transitions still validate every move, so a caller that
//! builds moves by other means gets a `RulesError` rather than a corrupt
//! state.

use crate::cards::Construction;
use crate::core::{GameState, Move, MoveRecord, RulesResult, Seat};
use crate::effects::PendingAction;

impl GameState {
    /// Every move the current player may make.
    ///
    /// Empty once the game is over.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        let Ok(seat) = self.current_player() else {
            return Vec::new();
        };

        match self.pending_action() {
            Some(PendingAction::ChooseProgressToken(candidates)) => candidates
                .iter()
                .filter(|token| !Seat::BOTH.iter().any(|s| self.players[*s].progress_tokens.contains(token)))
                .map(|token| Move::ChooseProgressToken(*token))
                .collect(),

            Some(action @ PendingAction::DestroyOpponentBuilding(_)) => self.players[seat.opponent()]
                .buildings
                .iter()
                .filter(|building| action.can_destroy(**building))
                .map(|building| Move::DestroyBuilding(*building))
                .collect(),

            Some(PendingAction::ChoosePlayerForNextAge) => {
                Seat::BOTH.into_iter().map(Move::ChoosePlayerForNextAge).collect()
            }

            Some(PendingAction::TakeDiscardedBuilding) => {
                self.discarded.iter().map(|building| Move::ConstructBuilding(*building)).collect()
            }

            // Consumed by the turn advance; a state holding it at the head
            // accepts no move.
            Some(PendingAction::ReplayTurn) => Vec::new(),

            None => self.primary_moves(seat),
        }
    }

    fn primary_moves(&self, seat: Seat) -> Vec<Move> {
        let Some(structure) = &self.structure else {
            return self.wonders_available.iter().map(|wonder| Move::TakeWonder(*wonder)).collect();
        };

        let player = &self.players[seat];
        let coins = player.coins;
        let affordable = |construction: Construction| self.price(seat, construction).total() <= coins;
        let wonders_open = self.total_built_wonders() < self.config.max_built_wonders;

        let mut moves = Vec::new();
        for building in structure.accessible_buildings() {
            if affordable(building.into()) {
                moves.push(Move::ConstructBuilding(building));
            }
            moves.push(Move::Discard(building));
            if wonders_open {
                for slot in player.wonders.iter().filter(|slot| !slot.is_built()) {
                    if affordable(slot.wonder.into()) {
                        moves.push(Move::ConstructWonder {
                            wonder: slot.wonder,
                            building,
                        });
                    }
                }
            }
        }
        moves
    }

    /// Apply `mv` and record it in the history.
    pub fn play(&self, mv: Move) -> RulesResult<GameState> {
        let seat = self.current_player()?;
        let age = self.age().unwrap_or(0);
        let mut next = mv.apply_to(self)?;
        let sequence = self.history.len() as u32;
        next.history.push_back(MoveRecord::new(seat, mv, age, sequence));
        Ok(next)
    }
}
