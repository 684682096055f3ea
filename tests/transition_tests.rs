//! Move transition integration tests.
//!
//! These tests drive the public transitions through whole turns: paying,
//! resolving effects, queueing decisions and advancing ages.

use wonders_duel::{
    Building, BuildingType, ErrorKind, GameResult, GameState, Move, PendingAction, Player, PlayerWonder,
    ProgressToken, RulesError, Seat, Structure, VictoryKind, Wonder,
};

use Building::*;

/// An age I structure whose front row is `front`, left to right.
fn age_one_with_front(front: [Building; 6]) -> Structure {
    let back = Building::AGE_I.into_iter().filter(|building| !front.contains(building)).take(14);
    Structure::with_buildings(1, back.chain(front)).unwrap()
}

fn default_front() -> [Building; 6] {
    [Scriptorium, Pharmacist, Theater, Altar, Baths, Tavern]
}

/// An age I structure reduced to `last`, dealt at the back.
fn with_last_card(last: Building) -> Structure {
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
    structure
}

fn built(wonder: Wonder, under: Building) -> PlayerWonder {
    PlayerWonder {
        wonder,
        building_under: Some(under),
    }
}

// =============================================================================
// Draft Tests
// =============================================================================

/// Test that the draft hands four wonders to each player and deals age I.
#[test]
fn test_full_draft() {
    let mut state = GameState::new(99);
    for _ in 0..8 {
        let pick = state.legal_moves()[0];
        state = state.play(pick).unwrap();
    }

    assert_eq!(state.age(), Some(1));
    assert_eq!(state.player(Seat::First).wonders.len(), 4);
    assert_eq!(state.player(Seat::Second).wonders.len(), 4);
    assert_eq!(state.current_player(), Ok(Seat::First));
    assert_eq!(state.undrafted_wonders().len(), 4);
    assert_eq!(state.history().len(), 8);
}

/// Test that a wonder cannot be drafted once the draft is over.
#[test]
fn test_draft_over() {
    let state = GameState::builder().structure(age_one_with_front(default_front())).build();
    assert_eq!(state.take_wonder(Wonder::TheSphinx), Err(RulesError::DraftOver));
}

// =============================================================================
// Construction Tests
// =============================================================================

/// Test that a construction the player cannot afford is rejected untouched.
#[test]
fn test_not_enough_coins() {
    let state = GameState::builder()
        .structure(age_one_with_front(default_front()))
        .player(Seat::First, Player::new(1))
        .build();

    let err = state.construct_building(Scriptorium).unwrap_err();
    assert_eq!(
        err,
        RulesError::NotEnoughCoins {
            seat: Seat::First,
            needed: 2,
            available: 1,
        }
    );
    assert_eq!(err.kind(), ErrorKind::PreconditionViolation);
    assert_eq!(state.structure().map(Structure::len), Some(20));
}

/// Test that a chain link makes the building free.
#[test]
fn test_free_link_construction() {
    let mut front = default_front();
    front[5] = Statue;
    let state = GameState::builder()
        .structure(age_one_with_front(front))
        .player(Seat::First, Player::new(0).with_buildings([Theater]))
        .build();

    let state = state.construct_building(Statue).unwrap();
    assert!(state.player(Seat::First).has_building(Statue));
    assert_eq!(state.player(Seat::First).coins, 0);
}

/// Test that the opponent collects trading costs with Economy.
#[test]
fn test_economy_collects_trading() {
    let state = GameState::builder()
        .structure(age_one_with_front(default_front()))
        .player(
            Seat::Second,
            Player::new(0).with_progress_tokens([ProgressToken::Economy]),
        )
        .build();

    let state = state.construct_building(Baths).unwrap();
    assert_eq!(state.player(Seat::First).coins, 5);
    assert_eq!(state.player(Seat::Second).coins, 2);
}

/// Test that discarding pays 2 coins plus 1 per commercial building.
#[test]
fn test_discard_pays_coins() {
    let state = GameState::builder()
        .structure(age_one_with_front(default_front()))
        .player(Seat::First, Player::new(0).with_buildings([Tavern, StoneReserve]))
        .build();

    let state = state.discard(Theater).unwrap();
    assert_eq!(state.player(Seat::First).coins, 4);
    assert_eq!(state.discarded().back(), Some(&Theater));
    assert_eq!(state.current_player(), Ok(Seat::Second));
}

/// Test that a primary move waits for the pending decision.
#[test]
fn test_pending_action_blocks_primary_moves() {
    let state = GameState::builder()
        .structure(age_one_with_front(default_front()))
        .discarded([Walls])
        .pending_action(PendingAction::TakeDiscardedBuilding)
        .build();

    assert_eq!(state.discard(Theater), Err(RulesError::PendingActionFirst));
    assert_eq!(
        state.construct_building(Theater),
        Err(RulesError::BuildingNotDiscarded(Theater))
    );
    assert_eq!(state.legal_moves(), vec![Move::ConstructBuilding(Walls)]);
}

// =============================================================================
// Wonder Tests
// =============================================================================

/// Test that Theology grants a replay after a wonder.
#[test]
fn test_theology_replays_after_wonder() {
    let state = GameState::builder()
        .structure(age_one_with_front(default_front()))
        .player(
            Seat::First,
            Player::new(10)
                .with_wonders([PlayerWonder::new(Wonder::ThePyramids)])
                .with_progress_tokens([ProgressToken::Theology]),
        )
        .build();

    let state = state.construct_wonder(Wonder::ThePyramids, Theater).unwrap();
    assert_eq!(state.current_player(), Ok(Seat::First));
    assert_eq!(state.player(Seat::First).coins, 2);
    assert!(state.player(Seat::First).wonders[0].is_built());
}

/// Test that the seventh wonder discards every unbuilt wonder.
#[test]
fn test_seventh_wonder_closes_the_others() {
    let first = Player::new(100).with_wonders([
        built(Wonder::TheColossus, LumberYard),
        built(Wonder::TheAppianWay, ClayPool),
        built(Wonder::TheSphinx, Quarry),
        PlayerWonder::new(Wonder::ThePyramids),
    ]);
    let second = Player::new(100).with_wonders([
        built(Wonder::Piraeus, LoggingCamp),
        built(Wonder::TheMausoleum, ClayPit),
        built(Wonder::TheGreatLighthouse, StonePit),
        PlayerWonder::new(Wonder::TheStatueOfZeus),
    ]);
    let state = GameState::builder()
        .structure(age_one_with_front(default_front()))
        .player(Seat::First, first)
        .player(Seat::Second, second)
        .build();

    let state = state.construct_wonder(Wonder::ThePyramids, Altar).unwrap();
    assert_eq!(state.total_built_wonders(), 7);
    assert_eq!(state.player(Seat::Second).wonders.len(), 3);
    assert!(!state
        .legal_moves()
        .iter()
        .any(|mv| matches!(mv, Move::ConstructWonder { .. })));
}

/// Test that a wonder cannot be built beyond the limit.
#[test]
fn test_wonder_limit() {
    let first = Player::new(100).with_wonders([
        built(Wonder::TheColossus, LumberYard),
        built(Wonder::TheAppianWay, ClayPool),
        built(Wonder::TheSphinx, Quarry),
        built(Wonder::ThePyramids, Glassworks),
    ]);
    let second = Player::new(100).with_wonders([
        built(Wonder::Piraeus, LoggingCamp),
        built(Wonder::TheMausoleum, ClayPit),
        built(Wonder::TheGreatLighthouse, StonePit),
        PlayerWonder::new(Wonder::TheStatueOfZeus),
    ]);
    let state = GameState::builder()
        .structure(age_one_with_front(default_front()))
        .player(Seat::First, first)
        .player(Seat::Second, second)
        .current_player(Seat::Second)
        .build();

    assert_eq!(
        state.construct_wonder(Wonder::TheStatueOfZeus, Altar),
        Err(RulesError::WonderLimitReached)
    );
}

/// Test that the Great Library offers tokens from the box only.
#[test]
fn test_great_library_offers_boxed_tokens() {
    let board = [
        ProgressToken::Agriculture,
        ProgressToken::Architecture,
        ProgressToken::Economy,
        ProgressToken::Law,
        ProgressToken::Masonry,
    ];
    let state = GameState::builder()
        .structure(age_one_with_front(default_front()))
        .progress_tokens(board)
        .player(
            Seat::First,
            Player::new(10).with_wonders([PlayerWonder::new(Wonder::TheGreatLibrary)]),
        )
        .build();

    let state = state.construct_wonder(Wonder::TheGreatLibrary, Theater).unwrap();
    let Some(PendingAction::ChooseProgressToken(offered)) = state.pending_action() else {
        panic!("expected a progress token choice");
    };
    assert_eq!(offered.len(), 3);
    assert!(offered.iter().all(|token| !board.contains(token)));

    let token = *offered.iter().next().unwrap();
    assert_eq!(
        state.choose_progress_token(ProgressToken::Law),
        Err(RulesError::ProgressTokenNotOffered(ProgressToken::Law))
    );
    let state = state.choose_progress_token(token).unwrap();
    assert!(state.player(Seat::First).progress_tokens.contains(&token));
    assert_eq!(state.progress_tokens_available().len(), 5);
    assert_eq!(state.current_player(), Ok(Seat::Second));
}

/// Test that only buildings of the listed kind can be destroyed.
#[test]
fn test_destroy_requires_matching_kind() {
    let state = GameState::builder()
        .structure(age_one_with_front(default_front()))
        .player(Seat::Second, Player::default().with_buildings([Sawmill, Tavern]))
        .pending_action(PendingAction::DestroyOpponentBuilding(BuildingType::RawMaterial))
        .build();

    assert_eq!(
        state.destroy_building(Tavern),
        Err(RulesError::IneligibleDestroyTarget(Tavern))
    );
    assert_eq!(state.legal_moves(), vec![Move::DestroyBuilding(Sawmill)]);
}

/// Test that a destroy effect is skipped when there is nothing to destroy.
#[test]
fn test_destroy_skipped_without_target() {
    let state = GameState::builder()
        .structure(age_one_with_front(default_front()))
        .player(
            Seat::First,
            Player::new(20).with_wonders([PlayerWonder::new(Wonder::CircusMaximus)]),
        )
        .build();

    let state = state.construct_wonder(Wonder::CircusMaximus, Theater).unwrap();
    assert!(state.pending_actions().is_empty());
    assert_eq!(state.current_player(), Ok(Seat::Second));
    assert_eq!(state.conflict_position(), 1);
}

// =============================================================================
// Age and End Tests
// =============================================================================

/// Test that the trailing player chooses who starts the next age.
#[test]
fn test_next_age_chooser() {
    let state = GameState::builder()
        .structure(with_last_card(Theater))
        .conflict_position(-1)
        .current_player(Seat::Second)
        .build();

    let state = state.discard(Theater).unwrap();
    assert_eq!(state.age(), Some(2));
    assert_eq!(state.current_player(), Ok(Seat::First));
    assert_eq!(
        state.legal_moves(),
        vec![
            Move::ChoosePlayerForNextAge(Seat::First),
            Move::ChoosePlayerForNextAge(Seat::Second)
        ]
    );

    let state = state.choose_player_for_next_age(Seat::Second).unwrap();
    assert_eq!(state.current_player(), Ok(Seat::Second));
    assert!(state.pending_actions().is_empty());
    assert_eq!(state.structure().map(Structure::len), Some(20));
}

/// Test that a replay earned on the last card of an age is lost.
#[test]
fn test_replay_lost_at_end_of_age() {
    let state = GameState::builder()
        .structure(with_last_card(Theater))
        .player(
            Seat::First,
            Player::new(20).with_wonders([PlayerWonder::new(Wonder::TheSphinx)]),
        )
        .build();

    let state = state.construct_wonder(Wonder::TheSphinx, Theater).unwrap();
    assert_eq!(state.age(), Some(2));
    assert_eq!(
        state.pending_actions().iter().cloned().collect::<Vec<_>>(),
        vec![PendingAction::ChoosePlayerForNextAge]
    );
    assert_eq!(state.current_player(), Ok(Seat::First));
}

/// Test that six distinct symbols win the game at once.
#[test]
fn test_scientific_supremacy() {
    let scientist = Player::new(10)
        .with_buildings([Workshop, Apothecary, Pharmacist, Academy])
        .with_progress_tokens([ProgressToken::Law]);
    let state = GameState::builder()
        .structure(age_one_with_front(default_front()))
        .player(Seat::First, scientist)
        .build();

    let state = state.construct_building(Scriptorium).unwrap();
    assert!(state.is_over());
    assert_eq!(
        state.result(),
        Some(GameResult::Winner(Seat::First, VictoryKind::Scientific))
    );
    assert_eq!(state.current_player(), Err(RulesError::GameOver));
    assert_eq!(RulesError::GameOver.kind(), ErrorKind::InvalidState);
}

/// Test that the pawn reaching the end of the track wins the game at once.
#[test]
fn test_military_supremacy() {
    let mut front = default_front();
    front[5] = GuardTower;
    let state = GameState::builder()
        .structure(age_one_with_front(front))
        .conflict_position(-8)
        .current_player(Seat::Second)
        .build();

    let state = state.construct_building(GuardTower).unwrap();
    assert_eq!(state.conflict_position(), -9);
    assert_eq!(
        state.result(),
        Some(GameResult::Winner(Seat::Second, VictoryKind::Military))
    );
    assert!(state.legal_moves().is_empty());
}
