//! Resources and resource costs.

use serde::{Deserialize, Serialize};

/// A resource produced by buildings and consumed by construction costs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Resource {
    Wood,
    Clay,
    Stone,
    Glass,
    Papyrus,
}

impl Resource {
    /// All resources, in a fixed order.
    pub const ALL: [Resource; 5] = [
        Resource::Wood,
        Resource::Clay,
        Resource::Stone,
        Resource::Glass,
        Resource::Papyrus,
    ];

    /// Index into a `ResourceCounts` array.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The category this resource belongs to.
    #[must_use]
    pub const fn category(self) -> ResourceCategory {
        match self {
            Resource::Wood | Resource::Clay | Resource::Stone => ResourceCategory::RawGoods,
            Resource::Glass | Resource::Papyrus => ResourceCategory::ManufacturedGoods,
        }
    }
}

/// Raw goods come from brown cards, manufactured goods from grey ones.
///
/// Production choices (Forum, Caravansery, Piraeus, Great Lighthouse) produce
/// one resource of a category per construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceCategory {
    RawGoods,
    ManufacturedGoods,
}

/// Per-resource quantities, indexed by `Resource::index`.
pub type ResourceCounts = [u8; 5];

/// Cost printed on a building or a wonder.
///
/// `resources` lists one entry per unit, so `[Clay, Clay, Stone]` means two
/// clay and one stone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cost {
    pub coins: u8,
    pub resources: &'static [Resource],
}

impl Cost {
    /// Quantities per resource.
    #[must_use]
    pub fn counts(&self) -> ResourceCounts {
        let mut counts = [0; 5];
        for resource in self.resources {
            counts[resource.index()] += 1;
        }
        counts
    }
}
