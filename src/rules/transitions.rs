//! State transitions.
//!
//! Each transition checks its preconditions against `&self`, then clones the
//! state, applies the move to the clone and returns it. A failed transition
//! returns a `RulesError` and leaves nothing changed.

use crate::cards::{Building, BuildingType, Construction, ProgressToken, Wonder};
use crate::core::{GameState, PlayerWonder, RulesError, RulesResult, Seat};
use crate::effects::PendingAction;
use crate::structure::Structure;

impl GameState {
    // === Draft ===

    /// Draft `wonder` from the pool.
    ///
    /// Turn order in a round of four is A, B, B, A. When the pool runs out a
    /// second round is drawn from the undrafted wonders; when both players
    /// hold their wonders, age I is dealt.
    pub fn take_wonder(&self, wonder: Wonder) -> RulesResult<GameState> {
        let seat = self.current_player()?;
        if self.structure.is_some() {
            return Err(RulesError::DraftOver);
        }
        if !self.wonders_available.contains(&wonder) {
            return Err(RulesError::WonderNotAvailable(wonder));
        }

        let mut next = self.clone();
        next.wonders_available.remove(&wonder);
        next.players[seat].wonders.push_back(PlayerWonder::new(wonder));

        if next.wonders_available.len() != 2 {
            next.current_player = seat.opponent().into();
        }

        let per_player = next.config.wonders_per_player;
        if Seat::BOTH.into_iter().all(|s| next.players[s].wonders.len() >= per_player) {
            next.structure = Some(Structure::new(1, &mut next.rng)?);
        } else if next.wonders_available.is_empty() {
            let undrafted = next.undrafted_wonders();
            let pool_size = next.config.draft_pool_size;
            next.wonders_available = next.rng.draw(undrafted, pool_size).into_iter().collect();
        }
        Ok(next)
    }

    // === Primary moves ===

    /// Construct a building.
    ///
    /// Normally the building comes from the structure and is paid for, unless
    /// the player owns its chain link. When the head pending action is
    /// `TakeDiscardedBuilding`, it comes from the discard pile for free.
    pub fn construct_building(&self, building: Building) -> RulesResult<GameState> {
        let seat = self.current_player()?;
        if self.pending_action() == Some(&PendingAction::TakeDiscardedBuilding) {
            return self.construct_discarded(seat, building);
        }

        let structure = self.take_from_structure(building)?;
        let free_link = self.players[seat].has_free_link_to(building);
        let price = self.price(seat, building.into());
        self.ensure_affordable(seat, price)?;

        let mut next = self.clone();
        next.structure = Some(structure);
        next.pay(seat, price);
        next.players[seat].buildings.insert(building);
        next.resolve_construction(seat, building.into(), free_link);
        next.continue_game()
    }

    fn construct_discarded(&self, seat: Seat, building: Building) -> RulesResult<GameState> {
        let index = self
            .discarded
            .index_of(&building)
            .ok_or(RulesError::BuildingNotDiscarded(building))?;

        let mut next = self.clone();
        next.discarded.remove(index);
        next.pending_actions.pop_front();
        next.players[seat].buildings.insert(building);
        next.resolve_construction(seat, building.into(), false);
        next.continue_game()
    }

    /// Construct one of the current player's wonders, placing `building`
    /// under it.
    pub fn construct_wonder(&self, wonder: Wonder, building: Building) -> RulesResult<GameState> {
        let seat = self.current_player()?;
        let structure = self.take_from_structure(building)?;
        if self.total_built_wonders() >= self.config.max_built_wonders {
            return Err(RulesError::WonderLimitReached);
        }
        let slot = self.players[seat]
            .unbuilt_wonder_slot(wonder)
            .ok_or(RulesError::WonderNotOwned(wonder))?;
        let price = self.price(seat, wonder.into());
        self.ensure_affordable(seat, price)?;

        let mut next = self.clone();
        next.structure = Some(structure);
        next.pay(seat, price);
        if let Some(built) = next.players[seat].wonders.get_mut(slot) {
            built.building_under = Some(building);
        }
        next.resolve_construction(seat, Construction::Wonder(wonder), false);

        if next.total_built_wonders() >= next.config.max_built_wonders {
            for s in Seat::BOTH {
                next.players[s].discard_unbuilt_wonders();
            }
        }
        next.continue_game()
    }

    /// Discard an accessible building for 2 coins plus 1 per commercial
    /// building owned.
    pub fn discard(&self, building: Building) -> RulesResult<GameState> {
        let seat = self.current_player()?;
        let structure = self.take_from_structure(building)?;

        let mut next = self.clone();
        next.structure = Some(structure);
        let coins = next.discard_value(seat);
        next.players[seat].gain_coins(coins);
        next.discarded.push_back(building);
        next.continue_game()
    }

    // === Pending action resolution ===

    pub fn choose_progress_token(&self, token: ProgressToken) -> RulesResult<GameState> {
        let seat = self.current_player()?;
        let head = self.pending_action().ok_or(RulesError::NoMatchingPendingAction)?;
        if !matches!(head, PendingAction::ChooseProgressToken(_)) {
            return Err(RulesError::NoMatchingPendingAction);
        }
        if !head.offers(token) || self.is_progress_token_owned(token) {
            return Err(RulesError::ProgressTokenNotOffered(token));
        }

        let mut next = self.clone();
        next.pending_actions.pop_front();
        next.progress_tokens_available.remove(&token);
        next.players[seat].progress_tokens.insert(token);
        next.resolve_effects(seat, token.effects().iter().copied());
        next.continue_game()
    }

    /// Destroy an opponent building, moving it to the discard pile.
    pub fn destroy_building(&self, building: Building) -> RulesResult<GameState> {
        let seat = self.current_player()?;
        let head = self.pending_action().ok_or(RulesError::NoMatchingPendingAction)?;
        if !matches!(head, PendingAction::DestroyOpponentBuilding(_)) {
            return Err(RulesError::NoMatchingPendingAction);
        }
        let opponent = seat.opponent();
        if !head.can_destroy(building) || !self.players[opponent].has_building(building) {
            return Err(RulesError::IneligibleDestroyTarget(building));
        }

        let mut next = self.clone();
        next.pending_actions.pop_front();
        next.players[opponent].buildings.remove(&building);
        next.discarded.push_back(building);
        next.continue_game()
    }

    /// Set the seat that starts the new age.
    pub fn choose_player_for_next_age(&self, seat: Seat) -> RulesResult<GameState> {
        self.current_player()?;
        if self.pending_action() != Some(&PendingAction::ChoosePlayerForNextAge) {
            return Err(RulesError::NoMatchingPendingAction);
        }

        let mut next = self.clone();
        next.pending_actions.pop_front();
        next.current_player = seat.into();
        Ok(next)
    }

    // === Helpers ===

    /// Coins gained by discarding.
    #[must_use]
    pub fn discard_value(&self, seat: Seat) -> u32 {
        2 + self.players[seat].count_buildings(BuildingType::Commercial)
    }

    #[must_use]
    pub fn total_built_wonders(&self) -> u32 {
        Seat::BOTH.into_iter().map(|seat| self.players[seat].built_wonders()).sum()
    }

    fn is_progress_token_owned(&self, token: ProgressToken) -> bool {
        Seat::BOTH
            .into_iter()
            .any(|seat| self.players[seat].progress_tokens.contains(&token))
    }

    /// The structure without `building`, after checking that a primary move
    /// is allowed.
    fn take_from_structure(&self, building: Building) -> RulesResult<Structure> {
        if !self.pending_actions.is_empty() {
            return Err(RulesError::PendingActionFirst);
        }
        let structure = self.structure.as_ref().ok_or(RulesError::DraftInProgress)?;
        structure.take(building)
    }
}
