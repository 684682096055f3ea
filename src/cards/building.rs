//! Building cards.
//!
//! Buildings are static game material: a `Building` is a plain identifier and
//! `Building::definition` returns its printed data. Each building exists once
//! in the game, so the identifier doubles as the card instance.

use serde::{Deserialize, Serialize};

use super::resource::{Cost, Resource, ResourceCategory};
use super::ScientificSymbol;
use crate::effects::{CoinRate, Effect, GuildCriterion, VictoryPoints};

/// Building colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BuildingType {
    /// Brown cards.
    RawMaterial,
    /// Grey cards.
    ManufacturedGood,
    /// Blue cards.
    Civilian,
    /// Green cards.
    Scientific,
    /// Yellow cards.
    Commercial,
    /// Red cards.
    Military,
    /// Purple cards, shuffled into age III only.
    Guild,
}

/// Printed data of a building.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuildingDefinition {
    pub name: &'static str,
    pub kind: BuildingType,
    pub age: u8,
    pub cost: Cost,
    /// Owning this building makes the construction free.
    pub free_link: Option<Building>,
    pub effects: &'static [Effect],
}

macro_rules! building {
    ($name:literal, $kind:ident, age $age:literal, $coins:literal, [$($res:ident),*], $link:expr, [$($effect:expr),* $(,)?]) => {
        &BuildingDefinition {
            name: $name,
            kind: BuildingType::$kind,
            age: $age,
            cost: Cost {
                coins: $coins,
                resources: &[$(Resource::$res),*],
            },
            free_link: $link,
            effects: &[$($effect),*],
        }
    };
}

macro_rules! vp {
    ($points:literal) => {
        Effect::VictoryPoints(VictoryPoints::Fixed($points))
    };
}

/// Every building of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Building {
    // Age I
    LumberYard,
    LoggingCamp,
    ClayPool,
    ClayPit,
    Quarry,
    StonePit,
    Glassworks,
    Press,
    GuardTower,
    Stable,
    Garrison,
    Palisade,
    Workshop,
    Apothecary,
    Scriptorium,
    Pharmacist,
    Theater,
    Altar,
    Baths,
    StoneReserve,
    ClayReserve,
    WoodReserve,
    Tavern,
    // Age II
    Sawmill,
    Brickyard,
    ShelfQuarry,
    Glassblower,
    DryingRoom,
    Walls,
    HorseBreeders,
    Barracks,
    ArcheryRange,
    ParadeGround,
    Library,
    Dispensary,
    School,
    Laboratory,
    Courthouse,
    Statue,
    Temple,
    Aqueduct,
    Rostrum,
    Forum,
    Caravansery,
    CustomsHouse,
    Brewery,
    // Age III
    Arsenal,
    Praetorium,
    Fortifications,
    SiegeWorkshop,
    Circus,
    Academy,
    Study,
    University,
    Observatory,
    Palace,
    TownHall,
    Obelisk,
    Gardens,
    Pantheon,
    Senate,
    ChamberOfCommerce,
    Port,
    Armory,
    Lighthouse,
    Arena,
    // Guilds
    MerchantsGuild,
    ShipownersGuild,
    BuildersGuild,
    MagistratesGuild,
    ScientistsGuild,
    MoneylendersGuild,
    TacticiansGuild,
}

use Building::*;

impl Building {
    pub const AGE_I: [Building; 23] = [
        LumberYard, LoggingCamp, ClayPool, ClayPit, Quarry, StonePit, Glassworks, Press,
        GuardTower, Stable, Garrison, Palisade, Workshop, Apothecary, Scriptorium, Pharmacist,
        Theater, Altar, Baths, StoneReserve, ClayReserve, WoodReserve, Tavern,
    ];

    pub const AGE_II: [Building; 23] = [
        Sawmill, Brickyard, ShelfQuarry, Glassblower, DryingRoom, Walls, HorseBreeders,
        Barracks, ArcheryRange, ParadeGround, Library, Dispensary, School, Laboratory, Courthouse,
        Statue, Temple, Aqueduct, Rostrum, Forum, Caravansery, CustomsHouse, Brewery,
    ];

    pub const AGE_III: [Building; 20] = [
        Arsenal, Praetorium, Fortifications, SiegeWorkshop, Circus, Academy, Study, University,
        Observatory, Palace, TownHall, Obelisk, Gardens, Pantheon, Senate, ChamberOfCommerce,
        Port, Armory, Lighthouse, Arena,
    ];

    pub const GUILDS: [Building; 7] = [
        MerchantsGuild, ShipownersGuild, BuildersGuild, MagistratesGuild, ScientistsGuild,
        MoneylendersGuild, TacticiansGuild,
    ];

    /// Printed data.
    #[must_use]
    pub fn definition(self) -> &'static BuildingDefinition {
        use crate::cards::BuildingType as T;
        use Effect::{Coins, CoinsFor, FixedTradingCost, Production, ProductionChoice, Science, Shields};
        use ScientificSymbol as S;

        match self {
            LumberYard => building!("Lumber Yard", RawMaterial, age 1, 0, [], None, [Production(Resource::Wood, 1)]),
            LoggingCamp => building!("Logging Camp", RawMaterial, age 1, 1, [], None, [Production(Resource::Wood, 1)]),
            ClayPool => building!("Clay Pool", RawMaterial, age 1, 0, [], None, [Production(Resource::Clay, 1)]),
            ClayPit => building!("Clay Pit", RawMaterial, age 1, 1, [], None, [Production(Resource::Clay, 1)]),
            Quarry => building!("Quarry", RawMaterial, age 1, 0, [], None, [Production(Resource::Stone, 1)]),
            StonePit => building!("Stone Pit", RawMaterial, age 1, 1, [], None, [Production(Resource::Stone, 1)]),
            Glassworks => building!("Glassworks", ManufacturedGood, age 1, 1, [], None, [Production(Resource::Glass, 1)]),
            Press => building!("Press", ManufacturedGood, age 1, 1, [], None, [Production(Resource::Papyrus, 1)]),
            GuardTower => building!("Guard Tower", Military, age 1, 0, [], None, [Shields(1)]),
            Stable => building!("Stable", Military, age 1, 0, [Wood], None, [Shields(1)]),
            Garrison => building!("Garrison", Military, age 1, 0, [Clay], None, [Shields(1)]),
            Palisade => building!("Palisade", Military, age 1, 2, [], None, [Shields(1)]),
            Workshop => building!("Workshop", Scientific, age 1, 0, [Papyrus], None, [Science(S::Plumb), vp!(1)]),
            Apothecary => building!("Apothecary", Scientific, age 1, 0, [Glass], None, [Science(S::Wheel), vp!(1)]),
            Scriptorium => building!("Scriptorium", Scientific, age 1, 2, [], None, [Science(S::Quill)]),
            Pharmacist => building!("Pharmacist", Scientific, age 1, 2, [], None, [Science(S::Mortar)]),
            Theater => building!("Theater", Civilian, age 1, 0, [], None, [vp!(3)]),
            Altar => building!("Altar", Civilian, age 1, 0, [], None, [vp!(3)]),
            Baths => building!("Baths", Civilian, age 1, 0, [Stone], None, [vp!(3)]),
            StoneReserve => building!("Stone Reserve", Commercial, age 1, 3, [], None, [FixedTradingCost(Resource::Stone)]),
            ClayReserve => building!("Clay Reserve", Commercial, age 1, 3, [], None, [FixedTradingCost(Resource::Clay)]),
            WoodReserve => building!("Wood Reserve", Commercial, age 1, 3, [], None, [FixedTradingCost(Resource::Wood)]),
            Tavern => building!("Tavern", Commercial, age 1, 0, [], None, [Coins(4)]),

            Sawmill => building!("Sawmill", RawMaterial, age 2, 2, [], None, [Production(Resource::Wood, 2)]),
            Brickyard => building!("Brickyard", RawMaterial, age 2, 2, [], None, [Production(Resource::Clay, 2)]),
            ShelfQuarry => building!("Shelf Quarry", RawMaterial, age 2, 2, [], None, [Production(Resource::Stone, 2)]),
            Glassblower => building!("Glassblower", ManufacturedGood, age 2, 0, [], None, [Production(Resource::Glass, 1)]),
            DryingRoom => building!("Drying Room", ManufacturedGood, age 2, 0, [], None, [Production(Resource::Papyrus, 1)]),
            Walls => building!("Walls", Military, age 2, 0, [Stone, Stone], None, [Shields(2)]),
            HorseBreeders => building!("Horse Breeders", Military, age 2, 0, [Clay, Wood], Some(Stable), [Shields(1)]),
            Barracks => building!("Barracks", Military, age 2, 3, [], Some(Garrison), [Shields(1)]),
            ArcheryRange => building!("Archery Range", Military, age 2, 0, [Stone, Wood, Papyrus], None, [Shields(2)]),
            ParadeGround => building!("Parade Ground", Military, age 2, 0, [Clay, Clay, Glass], None, [Shields(2)]),
            Library => building!("Library", Scientific, age 2, 0, [Stone, Wood, Glass], Some(Scriptorium), [Science(S::Quill), vp!(2)]),
            Dispensary => building!("Dispensary", Scientific, age 2, 0, [Clay, Clay, Stone], Some(Pharmacist), [Science(S::Mortar), vp!(2)]),
            School => building!("School", Scientific, age 2, 0, [Wood, Papyrus, Papyrus], None, [Science(S::Wheel), vp!(1)]),
            Laboratory => building!("Laboratory", Scientific, age 2, 0, [Wood, Glass, Glass], None, [Science(S::Plumb), vp!(1)]),
            Courthouse => building!("Courthouse", Civilian, age 2, 0, [Wood, Wood, Glass], None, [vp!(5)]),
            Statue => building!("Statue", Civilian, age 2, 0, [Clay, Clay], Some(Theater), [vp!(4)]),
            Temple => building!("Temple", Civilian, age 2, 0, [Wood, Papyrus], Some(Altar), [vp!(4)]),
            Aqueduct => building!("Aqueduct", Civilian, age 2, 0, [Stone, Stone, Stone], Some(Baths), [vp!(5)]),
            Rostrum => building!("Rostrum", Civilian, age 2, 0, [Stone, Wood], None, [vp!(4)]),
            Forum => building!("Forum", Commercial, age 2, 3, [Clay], None, [ProductionChoice(ResourceCategory::ManufacturedGoods)]),
            Caravansery => building!("Caravansery", Commercial, age 2, 2, [Glass, Papyrus], None, [ProductionChoice(ResourceCategory::RawGoods)]),
            CustomsHouse => building!("Customs House", Commercial, age 2, 4, [], None, [FixedTradingCost(Resource::Papyrus), FixedTradingCost(Resource::Glass)]),
            Brewery => building!("Brewery", Commercial, age 2, 0, [], None, [Coins(6)]),

            Arsenal => building!("Arsenal", Military, age 3, 0, [Clay, Clay, Clay, Wood, Wood], None, [Shields(3)]),
            Praetorium => building!("Praetorium", Military, age 3, 8, [], None, [Shields(3)]),
            Fortifications => building!("Fortifications", Military, age 3, 0, [Stone, Stone, Clay, Papyrus], Some(Palisade), [Shields(2)]),
            SiegeWorkshop => building!("Siege Workshop", Military, age 3, 0, [Wood, Wood, Wood, Glass], Some(ArcheryRange), [Shields(2)]),
            Circus => building!("Circus", Military, age 3, 0, [Clay, Clay, Stone, Stone], Some(ParadeGround), [Shields(2)]),
            Academy => building!("Academy", Scientific, age 3, 0, [Stone, Wood, Glass, Glass], None, [Science(S::Sundial), vp!(3)]),
            Study => building!("Study", Scientific, age 3, 0, [Wood, Wood, Glass, Papyrus], None, [Science(S::Sundial), vp!(3)]),
            University => building!("University", Scientific, age 3, 0, [Clay, Glass, Papyrus], Some(School), [Science(S::Globe), vp!(2)]),
            Observatory => building!("Observatory", Scientific, age 3, 0, [Stone, Papyrus, Papyrus], Some(Laboratory), [Science(S::Globe), vp!(2)]),
            Palace => building!("Palace", Civilian, age 3, 0, [Clay, Stone, Wood, Glass, Glass], None, [vp!(7)]),
            TownHall => building!("Town Hall", Civilian, age 3, 0, [Stone, Stone, Stone, Wood, Wood], None, [vp!(7)]),
            Obelisk => building!("Obelisk", Civilian, age 3, 0, [Stone, Stone, Glass], None, [vp!(5)]),
            Gardens => building!("Gardens", Civilian, age 3, 0, [Clay, Clay, Wood, Wood], Some(Statue), [vp!(6)]),
            Pantheon => building!("Pantheon", Civilian, age 3, 0, [Clay, Wood, Papyrus, Papyrus], Some(Temple), [vp!(6)]),
            Senate => building!("Senate", Civilian, age 3, 0, [Clay, Clay, Stone, Papyrus], Some(Rostrum), [vp!(5)]),
            ChamberOfCommerce => building!("Chamber of Commerce", Commercial, age 3, 0, [Papyrus, Papyrus], None,
                [CoinsFor(CoinRate::PerBuilding(T::ManufacturedGood, 3)), vp!(3)]),
            Port => building!("Port", Commercial, age 3, 0, [Wood, Glass, Papyrus], None,
                [CoinsFor(CoinRate::PerBuilding(T::RawMaterial, 2)), vp!(3)]),
            Armory => building!("Armory", Commercial, age 3, 0, [Stone, Stone, Glass], None,
                [CoinsFor(CoinRate::PerBuilding(T::Military, 1)), vp!(3)]),
            Lighthouse => building!("Lighthouse", Commercial, age 3, 0, [Clay, Clay, Glass], Some(Tavern),
                [CoinsFor(CoinRate::PerBuilding(T::Commercial, 1)), vp!(3)]),
            Arena => building!("Arena", Commercial, age 3, 0, [Clay, Stone, Wood], Some(Brewery),
                [CoinsFor(CoinRate::PerWonderBuilt(2)), vp!(3)]),

            MerchantsGuild => building!("Merchants Guild", Guild, age 3, 0, [Clay, Wood, Glass, Papyrus], None, [
                CoinsFor(CoinRate::Guild(GuildCriterion::Buildings(&[T::Commercial]))),
                Effect::VictoryPoints(VictoryPoints::Guild(GuildCriterion::Buildings(&[T::Commercial]))),
            ]),
            ShipownersGuild => building!("Shipowners Guild", Guild, age 3, 0, [Clay, Stone, Glass, Papyrus], None, [
                CoinsFor(CoinRate::Guild(GuildCriterion::Buildings(&[T::RawMaterial, T::ManufacturedGood]))),
                Effect::VictoryPoints(VictoryPoints::Guild(GuildCriterion::Buildings(&[T::RawMaterial, T::ManufacturedGood]))),
            ]),
            BuildersGuild => building!("Builders Guild", Guild, age 3, 0, [Stone, Stone, Clay, Wood, Glass], None, [
                Effect::VictoryPoints(VictoryPoints::Guild(GuildCriterion::Wonders)),
            ]),
            MagistratesGuild => building!("Magistrates Guild", Guild, age 3, 0, [Wood, Wood, Clay, Papyrus], None, [
                CoinsFor(CoinRate::Guild(GuildCriterion::Buildings(&[T::Civilian]))),
                Effect::VictoryPoints(VictoryPoints::Guild(GuildCriterion::Buildings(&[T::Civilian]))),
            ]),
            ScientistsGuild => building!("Scientists Guild", Guild, age 3, 0, [Clay, Clay, Wood, Wood], None, [
                CoinsFor(CoinRate::Guild(GuildCriterion::Buildings(&[T::Scientific]))),
                Effect::VictoryPoints(VictoryPoints::Guild(GuildCriterion::Buildings(&[T::Scientific]))),
            ]),
            MoneylendersGuild => building!("Moneylenders Guild", Guild, age 3, 0, [Stone, Stone, Wood, Wood], None, [
                Effect::VictoryPoints(VictoryPoints::Guild(GuildCriterion::Coins)),
            ]),
            TacticiansGuild => building!("Tacticians Guild", Guild, age 3, 0, [Stone, Stone, Clay, Papyrus], None, [
                CoinsFor(CoinRate::Guild(GuildCriterion::Buildings(&[T::Military]))),
                Effect::VictoryPoints(VictoryPoints::Guild(GuildCriterion::Buildings(&[T::Military]))),
            ]),
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        self.definition().name
    }

    #[must_use]
    pub fn kind(self) -> BuildingType {
        self.definition().kind
    }

    #[must_use]
    pub fn age(self) -> u8 {
        self.definition().age
    }

    #[must_use]
    pub fn cost(self) -> Cost {
        self.definition().cost
    }

    #[must_use]
    pub fn free_link(self) -> Option<Building> {
        self.definition().free_link
    }

    #[must_use]
    pub fn effects(self) -> &'static [Effect] {
        self.definition().effects
    }

    /// Fixed victory points printed on the card (civilian tie-break).
    #[must_use]
    pub fn printed_victory_points(self) -> u32 {
        self.effects()
            .iter()
            .map(|effect| match effect {
                Effect::VictoryPoints(VictoryPoints::Fixed(points)) => u32::from(*points),
                _ => 0,
            })
            .sum()
    }
}

impl std::fmt::Display for Building {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decks_have_expected_ages() {
        assert!(Building::AGE_I.iter().all(|b| b.age() == 1 && b.kind() != BuildingType::Guild));
        assert!(Building::AGE_II.iter().all(|b| b.age() == 2));
        assert!(Building::AGE_III.iter().all(|b| b.age() == 3 && b.kind() != BuildingType::Guild));
        assert!(Building::GUILDS.iter().all(|b| b.kind() == BuildingType::Guild));
    }

    #[test]
    fn test_free_links_point_to_earlier_ages() {
        let all = Building::AGE_I
            .iter()
            .chain(Building::AGE_II.iter())
            .chain(Building::AGE_III.iter());
        for building in all {
            if let Some(link) = building.free_link() {
                assert!(link.age() < building.age(), "{building} links to {link}");
            }
        }
    }

    #[test]
    fn test_definitions() {
        assert_eq!(Dispensary.free_link(), Some(Pharmacist));
        assert_eq!(Dispensary.cost().counts()[Resource::Clay.index()], 2);
        assert_eq!(Praetorium.cost().coins, 8);
        assert_eq!(Palace.printed_victory_points(), 7);
        assert_eq!(Tavern.printed_victory_points(), 0);
        assert_eq!(Building::LumberYard.to_string(), "Lumber Yard");
    }

    #[test]
    fn test_courthouse_and_praetorium() {
        assert_eq!(Courthouse.age(), 2);
        assert_eq!(Courthouse.kind(), BuildingType::Civilian);
        assert_eq!(Courthouse.printed_victory_points(), 5);
        assert_eq!(Praetorium.age(), 3);
        assert_eq!(Praetorium.kind(), BuildingType::Military);
        assert!(Building::AGE_II.contains(&Courthouse));
        assert!(Building::AGE_III.contains(&Praetorium));
    }
}
