//! Wonders.

use serde::{Deserialize, Serialize};

use super::resource::{Cost, Resource, ResourceCategory};
use super::BuildingType;
use crate::effects::{Deferred, Effect, VictoryPoints};

/// Printed data of a wonder. Wonders never cost coins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WonderDefinition {
    pub name: &'static str,
    pub cost: Cost,
    pub effects: &'static [Effect],
}

macro_rules! wonder {
    ($name:literal, [$($res:ident),*], [$($effect:expr),* $(,)?]) => {
        &WonderDefinition {
            name: $name,
            cost: Cost {
                coins: 0,
                resources: &[$(Resource::$res),*],
            },
            effects: &[$($effect),*],
        }
    };
}

/// The twelve wonders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Wonder {
    TheAppianWay,
    CircusMaximus,
    TheColossus,
    TheGreatLibrary,
    TheGreatLighthouse,
    TheHangingGardens,
    TheMausoleum,
    Piraeus,
    ThePyramids,
    TheSphinx,
    TheStatueOfZeus,
    TheTempleOfArtemis,
}

impl Wonder {
    pub const ALL: [Wonder; 12] = [
        Wonder::TheAppianWay,
        Wonder::CircusMaximus,
        Wonder::TheColossus,
        Wonder::TheGreatLibrary,
        Wonder::TheGreatLighthouse,
        Wonder::TheHangingGardens,
        Wonder::TheMausoleum,
        Wonder::Piraeus,
        Wonder::ThePyramids,
        Wonder::TheSphinx,
        Wonder::TheStatueOfZeus,
        Wonder::TheTempleOfArtemis,
    ];

    /// Printed data.
    #[must_use]
    pub fn definition(self) -> &'static WonderDefinition {
        use Effect::{Coins, OpponentLosesCoins, ProductionChoice, Shields};

        match self {
            Wonder::TheAppianWay => wonder!("The Appian Way", [Papyrus, Clay, Clay, Stone, Stone], [
                Coins(3),
                OpponentLosesCoins(3),
                Effect::Deferred(Deferred::PlayAgain),
                Effect::VictoryPoints(VictoryPoints::Fixed(3)),
            ]),
            Wonder::CircusMaximus => wonder!("Circus Maximus", [Glass, Wood, Stone, Stone], [
                Effect::Deferred(Deferred::DestroyOpponentBuilding(BuildingType::ManufacturedGood)),
                Shields(1),
                Effect::VictoryPoints(VictoryPoints::Fixed(3)),
            ]),
            Wonder::TheColossus => wonder!("The Colossus", [Glass, Clay, Clay, Clay], [
                Shields(2),
                Effect::VictoryPoints(VictoryPoints::Fixed(3)),
            ]),
            Wonder::TheGreatLibrary => wonder!("The Great Library", [Papyrus, Glass, Wood, Wood, Wood], [
                Effect::Deferred(Deferred::ChooseBoxedProgressToken),
                Effect::VictoryPoints(VictoryPoints::Fixed(4)),
            ]),
            Wonder::TheGreatLighthouse => wonder!("The Great Lighthouse", [Papyrus, Papyrus, Stone, Wood], [
                ProductionChoice(ResourceCategory::RawGoods),
                Effect::VictoryPoints(VictoryPoints::Fixed(4)),
            ]),
            Wonder::TheHangingGardens => wonder!("The Hanging Gardens", [Papyrus, Glass, Wood, Wood], [
                Coins(6),
                Effect::Deferred(Deferred::PlayAgain),
                Effect::VictoryPoints(VictoryPoints::Fixed(3)),
            ]),
            Wonder::TheMausoleum => wonder!("The Mausoleum", [Papyrus, Glass, Glass, Clay, Clay], [
                Effect::Deferred(Deferred::TakeDiscardedBuilding),
                Effect::VictoryPoints(VictoryPoints::Fixed(2)),
            ]),
            Wonder::Piraeus => wonder!("Piraeus", [Clay, Stone, Wood, Wood], [
                ProductionChoice(ResourceCategory::ManufacturedGoods),
                Effect::Deferred(Deferred::PlayAgain),
                Effect::VictoryPoints(VictoryPoints::Fixed(2)),
            ]),
            Wonder::ThePyramids => wonder!("The Pyramids", [Papyrus, Stone, Stone, Stone], [
                Effect::VictoryPoints(VictoryPoints::Fixed(9)),
            ]),
            Wonder::TheSphinx => wonder!("The Sphinx", [Glass, Glass, Clay, Stone], [
                Effect::Deferred(Deferred::PlayAgain),
                Effect::VictoryPoints(VictoryPoints::Fixed(6)),
            ]),
            Wonder::TheStatueOfZeus => wonder!("The Statue of Zeus", [Papyrus, Papyrus, Clay, Wood, Stone], [
                Effect::Deferred(Deferred::DestroyOpponentBuilding(BuildingType::RawMaterial)),
                Shields(1),
                Effect::VictoryPoints(VictoryPoints::Fixed(3)),
            ]),
            Wonder::TheTempleOfArtemis => wonder!("The Temple of Artemis", [Papyrus, Glass, Stone, Wood], [
                Coins(12),
                Effect::Deferred(Deferred::PlayAgain),
            ]),
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        self.definition().name
    }

    #[must_use]
    pub fn cost(self) -> Cost {
        self.definition().cost
    }

    #[must_use]
    pub fn effects(self) -> &'static [Effect] {
        self.definition().effects
    }
}

impl std::fmt::Display for Wonder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
