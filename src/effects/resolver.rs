//! Effect resolution: executing effects on an owned copy of the state.
//!
//! Transitions clone the state they were called on and hand the clone to
//! the resolver, which works through a queue of effects front to back.
//! Each effect sees the state left by the previous one. Resolution stops as
//! soon as the game ends (the conflict pawn reached the end of the track).

use std::collections::VecDeque;

use crate::cards::{BuildingType, Construction};
use crate::core::{GameState, Player, Seat};

use super::{CoinRate, ConstructionTrigger, Deferred, Effect, GuildCriterion, PendingAction};

impl GameState {
    /// Resolve the effects of a construction for `seat`: the construction's
    /// own effects, then every owned trigger that matches it.
    ///
    /// `free_link` is set when a building was constructed through its chain
    /// link.
    pub(crate) fn resolve_construction(&mut self, seat: Seat, construction: Construction, free_link: bool) {
        let triggered: Vec<Effect> = self.players[seat]
            .effects()
            .filter_map(|effect| match effect {
                Effect::ConstructionTriggered { on, then } if triggers(*on, construction, free_link) => {
                    Some(**then)
                }
                _ => None,
            })
            .collect();

        let effects = construction.effects().iter().copied().chain(triggered);
        self.resolve_effects(seat, effects);
    }

    /// Apply effects in order for `seat`.
    pub(crate) fn resolve_effects(&mut self, seat: Seat, effects: impl IntoIterator<Item = Effect>) {
        let mut work: VecDeque<Effect> = effects.into_iter().collect();

        while let Some(effect) = work.pop_front() {
            if self.is_over() {
                break;
            }

            match effect {
                Effect::Coins(coins) => self.players[seat].gain_coins(u32::from(coins)),

                Effect::CoinsFor(rate) => {
                    let coins = self.coins_for(seat, rate);
                    self.players[seat].gain_coins(coins);
                }

                Effect::OpponentLosesCoins(coins) => {
                    self.players[seat.opponent()].lose_coins(u32::from(coins));
                }

                Effect::Shields(shields) => self.push_conflict_pawn(seat, shields),

                Effect::Science(symbol) => {
                    if self.players[seat].count_symbol(symbol) == 2
                        && !self.progress_tokens_available.is_empty()
                    {
                        let candidates = self.progress_tokens_available.clone();
                        self.queue_pending(PendingAction::ChooseProgressToken(candidates));
                    }
                }

                Effect::Deferred(deferred) => self.queue_deferred(seat, deferred),

                Effect::Production(..)
                | Effect::ProductionChoice(_)
                | Effect::FixedTradingCost(_)
                | Effect::GainTradingCost
                | Effect::ResourceDiscount(..)
                | Effect::ConstructionTriggered { .. }
                | Effect::VictoryPoints(_) => {}
            }
        }
    }

    /// Queue the pending action for a deferred effect, if it can be resolved.
    fn queue_deferred(&mut self, seat: Seat, deferred: Deferred) {
        match deferred {
            Deferred::PlayAgain => self.queue_pending(PendingAction::ReplayTurn),

            Deferred::DestroyOpponentBuilding(kind) => {
                if self.players[seat.opponent()].count_buildings(kind) > 0 {
                    self.queue_pending(PendingAction::DestroyOpponentBuilding(kind));
                }
            }

            Deferred::ChooseBoxedProgressToken => {
                let boxed = self.boxed_progress_tokens();
                if !boxed.is_empty() {
                    let count = self.config.great_library_draw;
                    let candidates = self.rng.draw(boxed, count).into_iter().collect();
                    self.queue_pending(PendingAction::ChooseProgressToken(candidates));
                }
            }

            Deferred::TakeDiscardedBuilding => {
                if !self.discarded.is_empty() {
                    self.queue_pending(PendingAction::TakeDiscardedBuilding);
                }
            }
        }
    }

    /// Coins granted by a rate at this point of the game.
    pub(crate) fn coins_for(&self, seat: Seat, rate: CoinRate) -> u32 {
        match rate {
            CoinRate::PerBuilding(kind, coins) => {
                self.players[seat].count_buildings(kind) * u32::from(coins)
            }
            CoinRate::PerWonderBuilt(coins) => self.players[seat].built_wonders() * u32::from(coins),
            CoinRate::Guild(criterion) => self.guild_count(criterion),
        }
    }

    /// What a guild counts, in the city that has the most of it.
    pub(crate) fn guild_count(&self, criterion: GuildCriterion) -> u32 {
        Seat::BOTH
            .iter()
            .map(|seat| {
                let player = &self.players[*seat];
                match criterion {
                    GuildCriterion::Buildings(kinds) => count_kinds(player, kinds),
                    GuildCriterion::Wonders => player.built_wonders(),
                    GuildCriterion::Coins => player.coins / 3,
                }
            })
            .max()
            .unwrap_or(0)
    }
}

fn count_kinds(player: &Player, kinds: &[BuildingType]) -> u32 {
    kinds.iter().map(|kind| player.count_buildings(*kind)).sum()
}

fn triggers(on: ConstructionTrigger, construction: Construction, free_link: bool) -> bool {
    match (on, construction) {
        (ConstructionTrigger::Building(kind), Construction::Building(building)) => building.kind() == kind,
        (ConstructionTrigger::Wonder, Construction::Wonder(_)) => true,
        (ConstructionTrigger::FreeLink, Construction::Building(_)) => free_link,
        _ => false,
    }
}
