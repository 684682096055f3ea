//! Event inference for renderers.
//!
//! A renderer animates a transition from three values: the state before,
//! the move, and the state after. `infer_events` turns them into an ordered
//! list of `GameEvent`s so the renderer never diffs states itself. The list
//! is a plain value and can be replayed any number of times.
//!
//! Event order follows the rules' order of resolution: the move itself,
//! coins, the conflict pawn and its loot, discarded wonders, queued
//! decisions, then table changes (new draft pool, new age, uncovered
//! cards), then the turn change or the end of the game.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{Building, ProgressToken, Wonder};
use crate::core::{GameState, Move, Seat};
use crate::effects::PendingAction;
use crate::rules::GameResult;
use crate::structure::SlotPosition;

/// A discrete change between two states.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    // === The move ===
    WonderDrafted { seat: Seat, wonder: Wonder },
    BuildingConstructed { seat: Seat, building: Building },
    WonderConstructed { seat: Seat, wonder: Wonder, building: Building },
    BuildingDiscarded { seat: Seat, building: Building },
    ProgressTokenChosen { seat: Seat, token: ProgressToken },
    /// `owner` lost the building.
    BuildingDestroyed { owner: Seat, building: Building },
    StartingPlayerChosen(Seat),

    // === Consequences ===
    CoinsChanged { seat: Seat, from: u32, to: u32 },
    ConflictPawnMoved { from: i8, to: i8 },
    /// `seat` lost loot token `tier` (1 or 2).
    MilitaryTokenLooted { seat: Seat, tier: u8 },
    UnbuiltWondersDiscarded { seat: Seat, wonders: Vec<Wonder> },
    PendingActionQueued(PendingAction),

    // === Table ===
    /// A new draft pool was laid out.
    WondersRevealed(Vec<Wonder>),
    /// A new age structure was dealt.
    StructurePrepared { age: u8 },
    /// Nothing covers this card any more.
    BuildingMadeAccessible { building: Building, position: SlotPosition },
    /// This card was turned face up.
    BuildingRevealed { building: Building, position: SlotPosition },

    // === Turn ===
    TurnPassed(Seat),
    GameEnded(GameResult),
}

/// Events leading from `previous` to `next` through `mv`.
///
/// Returns no events when `previous` had already ended.
#[must_use]
pub fn infer_events(previous: &GameState, mv: Move, next: &GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let Some(seat) = previous.turn().seat() else {
        return events;
    };

    events.push(move_event(seat, mv));

    for s in Seat::BOTH {
        let (from, to) = (previous.player(s).coins, next.player(s).coins);
        if from != to {
            events.push(GameEvent::CoinsChanged { seat: s, from, to });
        }
    }

    let (from, to) = (previous.conflict_position(), next.conflict_position());
    if from != to {
        events.push(GameEvent::ConflictPawnMoved { from, to });
    }

    for s in Seat::BOTH {
        let looted = previous.player(s).military_tokens_looted + 1..=next.player(s).military_tokens_looted;
        events.extend(looted.map(|tier| GameEvent::MilitaryTokenLooted { seat: s, tier }));
    }

    for s in Seat::BOTH {
        let lost: Vec<Wonder> = previous
            .player(s)
            .wonders
            .iter()
            .filter(|slot| !slot.is_built() && !next.player(s).owns_wonder(slot.wonder))
            .map(|slot| slot.wonder)
            .collect();
        if !lost.is_empty() {
            events.push(GameEvent::UnbuiltWondersDiscarded { seat: s, wonders: lost });
        }
    }

    events.extend(queued_actions(previous, next).map(GameEvent::PendingActionQueued));

    let revealed: Vec<Wonder> = next
        .wonders_available()
        .iter()
        .filter(|wonder| !previous.wonders_available().contains(wonder))
        .copied()
        .collect();
    if !revealed.is_empty() {
        events.push(GameEvent::WondersRevealed(revealed));
    }

    structure_events(previous, next, &mut events);

    match (next.turn().seat(), next.result()) {
        (Some(to), _) if to != seat => events.push(GameEvent::TurnPassed(to)),
        (None, Some(result)) => events.push(GameEvent::GameEnded(result)),
        _ => {}
    }

    events
}

fn move_event(seat: Seat, mv: Move) -> GameEvent {
    match mv {
        Move::TakeWonder(wonder) => GameEvent::WonderDrafted { seat, wonder },
        Move::ConstructBuilding(building) => GameEvent::BuildingConstructed { seat, building },
        Move::ConstructWonder { wonder, building } => GameEvent::WonderConstructed {
            seat,
            wonder,
            building,
        },
        Move::Discard(building) => GameEvent::BuildingDiscarded { seat, building },
        Move::ChooseProgressToken(token) => GameEvent::ProgressTokenChosen { seat, token },
        Move::DestroyBuilding(building) => GameEvent::BuildingDestroyed {
            owner: seat.opponent(),
            building,
        },
        Move::ChoosePlayerForNextAge(chosen) => GameEvent::StartingPlayerChosen(chosen),
    }
}

/// Pending actions in `next` that were not already waiting in `previous`.
fn queued_actions(previous: &GameState, next: &GameState) -> impl Iterator<Item = PendingAction> {
    let mut waiting: Vec<PendingAction> = previous.pending_actions().iter().cloned().collect();
    let mut queued = Vec::new();
    for action in next.pending_actions() {
        match waiting.iter().position(|w| w == action) {
            Some(index) => {
                waiting.remove(index);
            }
            None => queued.push(action.clone()),
        }
    }
    queued.into_iter()
}

fn structure_events(previous: &GameState, next: &GameState, events: &mut Vec<GameEvent>) {
    let Some(structure) = next.structure() else {
        return;
    };

    let same_age = previous.structure().filter(|before| before.age() == structure.age());
    let Some(before) = same_age else {
        events.push(GameEvent::StructurePrepared { age: structure.age() });
        return;
    };

    // (accessible, face up) of every card still in the previous structure.
    let mut seen: FxHashMap<Building, (bool, bool)> = FxHashMap::default();
    for ((row, offset), card) in before.slots() {
        seen.insert(card.building, (before.is_accessible(row, offset), card.face_up));
    }

    for (position, card) in structure.slots() {
        let (row, offset) = position;
        let (was_accessible, was_face_up) = seen.get(&card.building).copied().unwrap_or((false, false));
        if structure.is_accessible(row, offset) && !was_accessible {
            events.push(GameEvent::BuildingMadeAccessible {
                building: card.building,
                position,
            });
        }
        if card.face_up && !was_face_up {
            events.push(GameEvent::BuildingRevealed {
                building: card.building,
                position,
            });
        }
    }
}
