//! Event inference integration tests.
//!
//! These tests verify the events a renderer receives for each kind of move,
//! and their order.

use wonders_duel::{
    infer_events, Building, GameEvent, GameResult, GameState, Move, PendingAction, Seat, Structure,
    VictoryKind,
};

use Building::*;

fn age_one_with_front(front: [Building; 6]) -> Structure {
    let back = Building::AGE_I.into_iter().filter(|building| !front.contains(building)).take(14);
    Structure::with_buildings(1, back.chain(front)).unwrap()
}

const FRONT: [Building; 6] = [Scriptorium, Pharmacist, Theater, Altar, Baths, GuardTower];

fn play(state: &GameState, mv: Move) -> (GameState, Vec<GameEvent>) {
    let next = state.play(mv).unwrap();
    let events = infer_events(state, mv, &next);
    (next, events)
}

/// Test the events of a discard that uncovers nothing.
#[test]
fn test_discard_events() {
    let state = GameState::builder().structure(age_one_with_front(FRONT)).build();
    let (_, events) = play(&state, Move::Discard(Theater));

    assert_eq!(
        events,
        vec![
            GameEvent::BuildingDiscarded {
                seat: Seat::First,
                building: Theater,
            },
            GameEvent::CoinsChanged {
                seat: Seat::First,
                from: 7,
                to: 9,
            },
            GameEvent::TurnPassed(Seat::Second),
        ]
    );
}

/// Test that an uncovered face-down card is made accessible, then revealed.
#[test]
fn test_uncovered_card_events() {
    let state = GameState::builder().structure(age_one_with_front(FRONT)).build();
    let (state, _) = play(&state, Move::Discard(Theater));
    let hidden = state.structure().unwrap().get(3, 0).unwrap();
    assert!(!hidden.face_up);
    let hidden = hidden.building;

    let (state, events) = play(&state, Move::Discard(Altar));
    assert_eq!(
        &events[2..],
        &[
            GameEvent::BuildingMadeAccessible {
                building: hidden,
                position: (3, 0),
            },
            GameEvent::BuildingRevealed {
                building: hidden,
                position: (3, 0),
            },
            GameEvent::TurnPassed(Seat::First),
        ]
    );
    assert!(state.structure().unwrap().get(3, 0).unwrap().face_up);
}

/// Test the events of a military loot.
#[test]
fn test_loot_events() {
    let state = GameState::builder()
        .structure(age_one_with_front(FRONT))
        .conflict_position(2)
        .build();
    let (_, events) = play(&state, Move::ConstructBuilding(GuardTower));

    assert_eq!(
        events,
        vec![
            GameEvent::BuildingConstructed {
                seat: Seat::First,
                building: GuardTower,
            },
            GameEvent::CoinsChanged {
                seat: Seat::Second,
                from: 7,
                to: 5,
            },
            GameEvent::ConflictPawnMoved { from: 2, to: 3 },
            GameEvent::MilitaryTokenLooted {
                seat: Seat::Second,
                tier: 1,
            },
            GameEvent::TurnPassed(Seat::Second),
        ]
    );
}

/// Test that the end of an age announces the new structure and the choice.
#[test]
fn test_new_age_events() {
    let last = Theater;
    let rest = Building::AGE_I.into_iter().filter(|building| *building != last).take(19);
    let mut structure = Structure::with_buildings(1, std::iter::once(last).chain(rest)).unwrap();
    while structure.len() > 1 {
        let next = structure
            .accessible_buildings()
            .into_iter()
            .find(|building| *building != last)
            .unwrap();
        structure = structure.take(next).unwrap();
    }

    let state = GameState::builder()
        .structure(structure)
        .conflict_position(-1)
        .current_player(Seat::Second)
        .build();
    let (_, events) = play(&state, Move::Discard(last));

    assert_eq!(
        events,
        vec![
            GameEvent::BuildingDiscarded {
                seat: Seat::Second,
                building: last,
            },
            GameEvent::CoinsChanged {
                seat: Seat::Second,
                from: 7,
                to: 9,
            },
            GameEvent::PendingActionQueued(PendingAction::ChoosePlayerForNextAge),
            GameEvent::StructurePrepared { age: 2 },
            GameEvent::TurnPassed(Seat::First),
        ]
    );
}

/// Test that a winning move ends with the result.
#[test]
fn test_game_ended_event() {
    let state = GameState::builder()
        .structure(age_one_with_front(FRONT))
        .conflict_position(-8)
        .current_player(Seat::Second)
        .build();
    let (_, events) = play(&state, Move::ConstructBuilding(GuardTower));

    assert_eq!(
        events,
        vec![
            GameEvent::BuildingConstructed {
                seat: Seat::Second,
                building: GuardTower,
            },
            GameEvent::ConflictPawnMoved { from: -8, to: -9 },
            GameEvent::GameEnded(GameResult::Winner(Seat::Second, VictoryKind::Military)),
        ]
    );
}

/// Test that emptying the draft pool reveals the next four wonders.
#[test]
fn test_second_draft_round_events() {
    let mut state = GameState::new(6);
    for _ in 0..3 {
        let pick = state.legal_moves()[0];
        state = state.play(pick).unwrap();
    }
    assert_eq!(state.current_player(), Ok(Seat::First));

    let mv = state.legal_moves()[0];
    let (next, events) = play(&state, mv);
    let Move::TakeWonder(wonder) = mv else {
        panic!("expected a draft pick");
    };

    assert_eq!(
        events,
        vec![
            GameEvent::WonderDrafted {
                seat: Seat::First,
                wonder,
            },
            GameEvent::WondersRevealed(next.wonders_available().iter().copied().collect()),
            GameEvent::TurnPassed(Seat::Second),
        ]
    );
    assert_eq!(next.wonders_available().len(), 4);
}

/// Test that events can be stored and replayed as plain data.
#[test]
fn test_events_serialize() {
    let state = GameState::builder().structure(age_one_with_front(FRONT)).build();
    let (_, events) = play(&state, Move::Discard(Theater));

    let json = serde_json::to_string(&events).unwrap();
    let restored: Vec<GameEvent> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, events);
}
