//! Game material: buildings, wonders, progress tokens and resources.
//!
//! All material is static. Identifiers are small `Copy` enums and their
//! printed data (costs, chain links, effects) comes from `definition()`
//! lookups, so game state only ever stores identifiers.

mod building;
mod progress;
mod resource;
mod wonder;

pub use building::{Building, BuildingDefinition, BuildingType};
pub use progress::{ProgressToken, ScientificSymbol};
pub use resource::{Cost, Resource, ResourceCategory, ResourceCounts};
pub use wonder::{Wonder, WonderDefinition};

/// Something a player can construct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Construction {
    Building(Building),
    Wonder(Wonder),
}

impl Construction {
    #[must_use]
    pub fn cost(self) -> Cost {
        match self {
            Construction::Building(building) => building.cost(),
            Construction::Wonder(wonder) => wonder.cost(),
        }
    }

    #[must_use]
    pub fn effects(self) -> &'static [crate::effects::Effect] {
        match self {
            Construction::Building(building) => building.effects(),
            Construction::Wonder(wonder) => wonder.effects(),
        }
    }
}

impl From<Building> for Construction {
    fn from(building: Building) -> Self {
        Construction::Building(building)
    }
}

impl From<Wonder> for Construction {
    fn from(wonder: Wonder) -> Self {
        Construction::Wonder(wonder)
    }
}
