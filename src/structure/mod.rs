//! The age structure: a pyramid of building cards laid out on the table.
//!
//! ## Layout
//!
//! Rows are indexed from the back of the layout (row 0) to the front (the
//! last row). Each slot sits at a column offset; slots in adjacent rows are
//! offset by one column, so slot `(row, c)` is covered by the slots at
//! `(row + 1, c - 1)` and `(row + 1, c + 1)` when those are still present.
//!
//! ```text
//! Age I            Age II             Age III
//!      ..            ......               ..
//!     ...             .....              ...
//!    ....              ....             ....
//!   .....               ...             .  .
//!  ......                ..             ....
//!                                        ...
//!                                         ..
//! ```
//!
//! A card can be taken once nothing covers it. Even rows are dealt face up,
//! odd rows face down; a face-down card is flipped by `reveal_accessible`
//! once it is no longer covered.

use im::{OrdMap, Vector};
use serde::{Deserialize, Serialize};

use crate::cards::Building;
use crate::core::{GameRng, RulesError, RulesResult};

/// Cards dealt into every age structure.
pub const CARDS_PER_AGE: usize = 20;

/// Guilds shuffled into the age III deck.
pub const GUILDS_PER_GAME: usize = 3;

const AGE_I_LAYOUT: [&[i8]; 5] = [
    &[-1, 1],
    &[-2, 0, 2],
    &[-3, -1, 1, 3],
    &[-4, -2, 0, 2, 4],
    &[-5, -3, -1, 1, 3, 5],
];

const AGE_II_LAYOUT: [&[i8]; 5] = [
    &[-5, -3, -1, 1, 3, 5],
    &[-4, -2, 0, 2, 4],
    &[-3, -1, 1, 3],
    &[-2, 0, 2],
    &[-1, 1],
];

const AGE_III_LAYOUT: [&[i8]; 7] = [
    &[-1, 1],
    &[-2, 0, 2],
    &[-3, -1, 1, 3],
    &[-2, 2],
    &[-3, -1, 1, 3],
    &[-2, 0, 2],
    &[-1, 1],
];

fn layout(age: u8) -> RulesResult<&'static [&'static [i8]]> {
    match age {
        1 => Ok(&AGE_I_LAYOUT),
        2 => Ok(&AGE_II_LAYOUT),
        3 => Ok(&AGE_III_LAYOUT),
        _ => Err(RulesError::NoSuchAge(age)),
    }
}

/// A card in the structure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BuildingCard {
    pub building: Building,
    pub face_up: bool,
}

/// A slot address: row index and column offset.
pub type SlotPosition = (usize, i8);

/// The pyramid of cards for one age.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Structure {
    age: u8,
    rows: Vector<OrdMap<i8, BuildingCard>>,
}

impl Structure {
    /// Deal a shuffled structure for `age`.
    ///
    /// Ages I and II use 20 of their 23 buildings. Age III uses 17 of its 20
    /// buildings plus 3 of the 7 guilds.
    pub fn new(age: u8, rng: &mut GameRng) -> RulesResult<Self> {
        let mut deck = match age {
            1 => rng.draw(Building::AGE_I, CARDS_PER_AGE),
            2 => rng.draw(Building::AGE_II, CARDS_PER_AGE),
            3 => {
                let mut deck = rng.draw(Building::AGE_III, CARDS_PER_AGE - GUILDS_PER_GAME);
                deck.extend(rng.draw(Building::GUILDS, GUILDS_PER_GAME));
                deck
            }
            _ => return Err(RulesError::NoSuchAge(age)),
        };
        rng.shuffle(&mut deck);
        Self::with_buildings(age, deck)
    }

    /// Lay out `buildings` in order: row 0 first, left to right.
    ///
    /// Fails unless the number of buildings fills the layout exactly.
    pub fn with_buildings(
        age: u8,
        buildings: impl IntoIterator<Item = Building>,
    ) -> RulesResult<Self> {
        let buildings: Vec<Building> = buildings.into_iter().collect();
        let layout = layout(age)?;
        let slots: usize = layout.iter().map(|row| row.len()).sum();
        if buildings.len() != slots {
            return Err(RulesError::StructureSize {
                age,
                expected: slots,
                found: buildings.len(),
            });
        }

        let mut cards = buildings.into_iter();
        let rows = layout
            .iter()
            .enumerate()
            .map(|(row_index, offsets)| {
                offsets
                    .iter()
                    .zip(cards.by_ref())
                    .map(|(&offset, building)| {
                        let card = BuildingCard {
                            building,
                            face_up: row_index % 2 == 0,
                        };
                        (offset, card)
                    })
                    .collect::<OrdMap<i8, BuildingCard>>()
            })
            .collect();

        Ok(Self { age, rows })
    }

    #[must_use]
    pub fn age(&self) -> u8 {
        self.age
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The card at a slot, if it has not been taken.
    #[must_use]
    pub fn get(&self, row: usize, offset: i8) -> Option<&BuildingCard> {
        self.rows.get(row).and_then(|cards| cards.get(&offset))
    }

    /// All remaining cards with their positions, back row first.
    pub fn slots(&self) -> impl Iterator<Item = (SlotPosition, &BuildingCard)> {
        self.rows.iter().enumerate().flat_map(|(row, cards)| {
            cards.iter().map(move |(offset, card)| ((row, *offset), card))
        })
    }

    /// All remaining buildings.
    pub fn buildings(&self) -> impl Iterator<Item = Building> + '_ {
        self.slots().map(|(_, card)| card.building)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.iter().map(OrdMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(OrdMap::is_empty)
    }

    #[must_use]
    pub fn position_of(&self, building: Building) -> Option<SlotPosition> {
        self.slots()
            .find(|(_, card)| card.building == building)
            .map(|(position, _)| position)
    }

    #[must_use]
    pub fn contains(&self, building: Building) -> bool {
        self.position_of(building).is_some()
    }

    /// No remaining card covers this slot.
    #[must_use]
    pub fn is_accessible(&self, row: usize, offset: i8) -> bool {
        match self.rows.get(row + 1) {
            Some(below) => !below.contains_key(&(offset - 1)) && !below.contains_key(&(offset + 1)),
            None => true,
        }
    }

    /// Buildings that can be taken right now.
    #[must_use]
    pub fn accessible_buildings(&self) -> Vec<Building> {
        self.slots()
            .filter(|((row, offset), _)| self.is_accessible(*row, *offset))
            .map(|(_, card)| card.building)
            .collect()
    }

    /// Remove an accessible building.
    pub fn take(&self, building: Building) -> RulesResult<Structure> {
        let (row, offset) = self
            .position_of(building)
            .filter(|(row, offset)| self.is_accessible(*row, *offset))
            .ok_or(RulesError::BuildingNotAccessible(building))?;

        let mut next = self.clone();
        if let Some(cards) = next.rows.get_mut(row) {
            cards.remove(&offset);
        }
        Ok(next)
    }

    /// Flip face up every face-down card that is no longer covered.
    #[must_use]
    pub fn reveal_accessible(&self) -> Structure {
        let hidden: Vec<SlotPosition> = self
            .slots()
            .filter(|((row, offset), card)| !card.face_up && self.is_accessible(*row, *offset))
            .map(|(position, _)| position)
            .collect();

        let mut next = self.clone();
        for (row, offset) in hidden {
            if let Some(card) = next.rows.get_mut(row).and_then(|cards| cards.get_mut(&offset)) {
                card.face_up = true;
            }
        }
        next
    }
}
