//! Per-seat city state.
//!
//! A `Player` owns coins, up to four wonders, constructed buildings, progress
//! tokens and the count of military tokens looted from it. Its effect set is
//! never stored: `effects()` derives it from what the player owns, so it can
//! never drift out of sync with the cards.
//!
//! Collections are `im` persistent structures, so cloning a player (and the
//! whole `GameState`) is O(1).

use im::{OrdSet, Vector};
use serde::{Deserialize, Serialize};

use crate::cards::{Building, BuildingType, ProgressToken, Resource, ScientificSymbol, Wonder};
use crate::effects::{Effect, VictoryPoints};

use super::config::GameConfig;

/// A wonder owned by a player, with the card used to build it (if built).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerWonder {
    pub wonder: Wonder,
    pub building_under: Option<Building>,
}

impl PlayerWonder {
    /// An unbuilt wonder slot.
    #[must_use]
    pub const fn new(wonder: Wonder) -> Self {
        Self {
            wonder,
            building_under: None,
        }
    }

    #[must_use]
    pub const fn is_built(&self) -> bool {
        self.building_under.is_some()
    }
}

/// A player's city.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub coins: u32,
    pub wonders: Vector<PlayerWonder>,
    pub buildings: OrdSet<Building>,
    /// Loot tokens taken from this player: 0, 1 or 2.
    pub military_tokens_looted: u8,
    pub progress_tokens: OrdSet<ProgressToken>,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(GameConfig::default().starting_coins)
    }
}

impl Player {
    /// A player with no material and the given coins.
    #[must_use]
    pub fn new(coins: u32) -> Self {
        Self {
            coins,
            wonders: Vector::new(),
            buildings: OrdSet::new(),
            military_tokens_looted: 0,
            progress_tokens: OrdSet::new(),
        }
    }

    // === Builders ===

    #[must_use]
    pub fn with_buildings(mut self, buildings: impl IntoIterator<Item = Building>) -> Self {
        self.buildings.extend(buildings);
        self
    }

    #[must_use]
    pub fn with_wonders(mut self, wonders: impl IntoIterator<Item = PlayerWonder>) -> Self {
        self.wonders.extend(wonders);
        self
    }

    #[must_use]
    pub fn with_progress_tokens(mut self, tokens: impl IntoIterator<Item = ProgressToken>) -> Self {
        self.progress_tokens.extend(tokens);
        self
    }

    // === Derived effects ===

    /// Every effect the player owns: buildings, progress tokens, then built
    /// wonders.
    pub fn effects(&self) -> impl Iterator<Item = &'static Effect> + '_ {
        let buildings = self.buildings.iter().flat_map(|b| b.effects().iter());
        let tokens = self.progress_tokens.iter().flat_map(|t| t.effects().iter());
        let wonders = self
            .wonders
            .iter()
            .filter(|w| w.is_built())
            .flat_map(|w| w.wonder.effects().iter());
        buildings.chain(tokens).chain(wonders)
    }

    /// Units of a resource produced for free each turn (choices excluded).
    #[must_use]
    pub fn production_of(&self, resource: Resource) -> u8 {
        self.effects()
            .map(|effect| match effect {
                Effect::Production(r, n) if *r == resource => *n,
                _ => 0,
            })
            .sum()
    }

    /// Does trading for `resource` cost a fixed single coin?
    #[must_use]
    pub fn has_fixed_trading_cost(&self, resource: Resource) -> bool {
        self.effects()
            .any(|effect| *effect == Effect::FixedTradingCost(resource))
    }

    /// Is the opponent's trading spend credited to this player?
    #[must_use]
    pub fn gains_trading_cost(&self) -> bool {
        self.effects().any(|effect| *effect == Effect::GainTradingCost)
    }

    // === Counts ===

    #[must_use]
    pub fn has_building(&self, building: Building) -> bool {
        self.buildings.contains(&building)
    }

    /// Number of buildings of the given type.
    #[must_use]
    pub fn count_buildings(&self, kind: BuildingType) -> u32 {
        self.buildings.iter().filter(|b| b.kind() == kind).count() as u32
    }

    #[must_use]
    pub fn built_wonders(&self) -> u32 {
        self.wonders.iter().filter(|w| w.is_built()).count() as u32
    }

    /// Owns a building that makes `building` free.
    #[must_use]
    pub fn has_free_link_to(&self, building: Building) -> bool {
        building.free_link().is_some_and(|link| self.has_building(link))
    }

    /// Scientific symbols owned, with repetition.
    pub fn scientific_symbols(&self) -> impl Iterator<Item = ScientificSymbol> + '_ {
        self.effects().filter_map(|effect| match effect {
            Effect::Science(symbol) => Some(*symbol),
            _ => None,
        })
    }

    #[must_use]
    pub fn count_symbol(&self, symbol: ScientificSymbol) -> usize {
        self.scientific_symbols().filter(|s| *s == symbol).count()
    }

    #[must_use]
    pub fn distinct_symbols(&self) -> usize {
        self.scientific_symbols().collect::<OrdSet<ScientificSymbol>>().len()
    }

    /// Printed victory points of civilian (blue) buildings, used to break ties.
    #[must_use]
    pub fn civilian_points(&self) -> u32 {
        self.buildings
            .iter()
            .filter(|b| b.kind() == BuildingType::Civilian)
            .map(|b| b.printed_victory_points())
            .sum()
    }

    /// Victory point effects owned.
    pub fn victory_point_effects(&self) -> impl Iterator<Item = VictoryPoints> + '_ {
        self.effects().filter_map(|effect| match effect {
            Effect::VictoryPoints(points) => Some(*points),
            _ => None,
        })
    }

    // === Mutation (on an owned copy) ===

    pub fn gain_coins(&mut self, coins: u32) {
        self.coins += coins;
    }

    /// Lose coins, never going below zero.
    pub fn lose_coins(&mut self, coins: u32) {
        self.coins = self.coins.saturating_sub(coins);
    }

    /// Index of an unbuilt slot for `wonder`.
    #[must_use]
    pub fn unbuilt_wonder_slot(&self, wonder: Wonder) -> Option<usize> {
        self.wonders
            .iter()
            .position(|w| w.wonder == wonder && !w.is_built())
    }

    #[must_use]
    pub fn owns_wonder(&self, wonder: Wonder) -> bool {
        self.wonders.iter().any(|w| w.wonder == wonder)
    }

    /// Drop every wonder slot that has not been built.
    pub fn discard_unbuilt_wonders(&mut self) {
        self.wonders.retain(|w| w.is_built());
    }
}
