//! Game state: the aggregate root of a duel.
//!
//! ## GameState
//!
//! Complete game state:
//! - Both players' cities
//! - Conflict pawn position
//! - Progress tokens on the board
//! - Wonder draft pool
//! - Current age structure and discard pile
//! - Pending action queue
//! - Move history, RNG and configuration
//!
//! A `GameState` is a value. Every transition (see `crate::rules`) clones the
//! receiver, changes the clone and returns it; collections are `im`
//! persistent structures so the clone is O(1) and earlier snapshots stay
//! valid for history, undo and event inference.
//!
//! ## GameStateBuilder
//!
//! Builds arbitrary positions: custom cities, a given structure, a discard
//! pile or a queued pending action. Anything left unset gets its setup value.

use im::{OrdSet, Vector};
use serde::{Deserialize, Serialize};

use crate::cards::{Building, ProgressToken, Wonder};
use crate::effects::PendingAction;
use crate::structure::Structure;

use super::action::MoveRecord;
use super::config::GameConfig;
use super::error::{RulesError, RulesResult};
use super::player::Player;
use super::rng::GameRng;
use super::seat::{CurrentPlayer, Seat, Seats};

/// Conflict pawn position at which the game ends.
pub const CONFLICT_TRACK_END: i8 = 9;

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) players: Seats<Player>,

    /// Positive values favour `Seat::First`.
    pub(crate) conflict_position: i8,

    pub(crate) progress_tokens_available: OrdSet<ProgressToken>,

    pub(crate) current_player: CurrentPlayer,

    pub(crate) wonders_available: OrdSet<Wonder>,

    /// `None` during the wonder draft.
    pub(crate) structure: Option<Structure>,

    pub(crate) discarded: Vector<Building>,

    pub(crate) pending_actions: Vector<PendingAction>,

    pub(crate) history: Vector<MoveRecord>,

    pub(crate) rng: GameRng,

    pub(crate) config: GameConfig,
}

impl GameState {
    /// A fresh game: board tokens and the first wonder pool are drawn from
    /// `seed`, and `Seat::First` drafts first.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        GameStateBuilder::new().seed(seed).build()
    }

    #[must_use]
    pub fn builder() -> GameStateBuilder {
        GameStateBuilder::new()
    }

    // === Queries ===

    #[must_use]
    pub fn players(&self) -> &Seats<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat]
    }

    #[must_use]
    pub fn conflict_position(&self) -> i8 {
        self.conflict_position
    }

    #[must_use]
    pub fn progress_tokens_available(&self) -> &OrdSet<ProgressToken> {
        &self.progress_tokens_available
    }

    /// The seat to play.
    ///
    /// Fails with `GameOver` once the game has ended.
    pub fn current_player(&self) -> RulesResult<Seat> {
        self.current_player.seat().ok_or(RulesError::GameOver)
    }

    /// Whose turn it is, including the ended state.
    #[must_use]
    pub fn turn(&self) -> CurrentPlayer {
        self.current_player
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.current_player.is_ended()
    }

    #[must_use]
    pub fn wonders_available(&self) -> &OrdSet<Wonder> {
        &self.wonders_available
    }

    #[must_use]
    pub fn structure(&self) -> Option<&Structure> {
        self.structure.as_ref()
    }

    /// Current age, or `None` during the draft.
    #[must_use]
    pub fn age(&self) -> Option<u8> {
        self.structure.as_ref().map(Structure::age)
    }

    #[must_use]
    pub fn discarded(&self) -> &Vector<Building> {
        &self.discarded
    }

    #[must_use]
    pub fn pending_actions(&self) -> &Vector<PendingAction> {
        &self.pending_actions
    }

    /// The pending action to resolve next.
    #[must_use]
    pub fn pending_action(&self) -> Option<&PendingAction> {
        self.pending_actions.front()
    }

    /// Moves played through `GameState::play`, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Wonders neither in the pool nor owned by a player.
    #[must_use]
    pub fn undrafted_wonders(&self) -> Vec<Wonder> {
        Wonder::ALL
            .into_iter()
            .filter(|wonder| {
                !self.wonders_available.contains(wonder)
                    && !Seat::BOTH.iter().any(|seat| self.players[*seat].owns_wonder(*wonder))
            })
            .collect()
    }

    /// Progress tokens neither on the board nor owned by a player.
    #[must_use]
    pub fn boxed_progress_tokens(&self) -> Vec<ProgressToken> {
        ProgressToken::ALL
            .into_iter()
            .filter(|token| {
                !self.progress_tokens_available.contains(token)
                    && !Seat::BOTH
                        .iter()
                        .any(|seat| self.players[*seat].progress_tokens.contains(token))
            })
            .collect()
    }

    // === Internal helpers for transitions ===

    /// Queue a pending action. A replay always stays last in the queue and is
    /// never queued twice.
    pub(crate) fn queue_pending(&mut self, action: PendingAction) {
        let replay_at = self
            .pending_actions
            .iter()
            .position(|pending| *pending == PendingAction::ReplayTurn);
        match (action, replay_at) {
            (PendingAction::ReplayTurn, Some(_)) => {}
            (action, Some(index)) => {
                self.pending_actions.insert(index, action);
            }
            (action, _) => self.pending_actions.push_back(action),
        }
    }
}

/// Builder for `GameState`.
///
/// ## Example
///
/// ```
/// use wonders_duel::core::{GameState, Player, Seat};
///
/// let state = GameState::builder()
///     .seed(3)
///     .player(Seat::Second, Player::new(12))
///     .build();
/// assert_eq!(state.player(Seat::Second).coins, 12);
/// assert_eq!(state.player(Seat::First).coins, 7);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameStateBuilder {
    seed: u64,
    config: GameConfig,
    players: Option<Seats<Player>>,
    conflict_position: i8,
    progress_tokens: Option<OrdSet<ProgressToken>>,
    current_player: Option<Seat>,
    wonders: Option<OrdSet<Wonder>>,
    structure: Option<Structure>,
    discarded: Vector<Building>,
    pending_actions: Vector<PendingAction>,
}

impl GameStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Set one seat's city. The other seat keeps its setup value.
    #[must_use]
    pub fn player(mut self, seat: Seat, player: Player) -> Self {
        let starting_coins = self.config.starting_coins;
        let players = self
            .players
            .get_or_insert_with(|| Seats::from_fn(|_| Player::new(starting_coins)));
        players[seat] = player;
        self
    }

    #[must_use]
    pub fn conflict_position(mut self, position: i8) -> Self {
        self.conflict_position = position.clamp(-CONFLICT_TRACK_END, CONFLICT_TRACK_END);
        self
    }

    #[must_use]
    pub fn progress_tokens(mut self, tokens: impl IntoIterator<Item = ProgressToken>) -> Self {
        self.progress_tokens = Some(tokens.into_iter().collect());
        self
    }

    #[must_use]
    pub fn current_player(mut self, seat: Seat) -> Self {
        self.current_player = Some(seat);
        self
    }

    #[must_use]
    pub fn wonders_available(mut self, wonders: impl IntoIterator<Item = Wonder>) -> Self {
        self.wonders = Some(wonders.into_iter().collect());
        self
    }

    /// Start from the given structure. The draft pool then defaults to empty.
    #[must_use]
    pub fn structure(mut self, structure: Structure) -> Self {
        self.structure = Some(structure);
        self
    }

    #[must_use]
    pub fn discarded(mut self, buildings: impl IntoIterator<Item = Building>) -> Self {
        self.discarded = buildings.into_iter().collect();
        self
    }

    #[must_use]
    pub fn pending_action(mut self, action: PendingAction) -> Self {
        self.pending_actions.push_back(action);
        self
    }

    #[must_use]
    pub fn build(self) -> GameState {
        let config = self.config;
        let mut state = GameState {
            players: self
                .players
                .unwrap_or_else(|| Seats::from_fn(|_| Player::new(config.starting_coins))),
            conflict_position: self.conflict_position,
            progress_tokens_available: OrdSet::new(),
            current_player: CurrentPlayer::Playing(self.current_player.unwrap_or(Seat::First)),
            wonders_available: OrdSet::new(),
            structure: self.structure,
            discarded: self.discarded,
            pending_actions: self.pending_actions,
            history: Vector::new(),
            rng: GameRng::new(self.seed),
            config,
        };

        state.progress_tokens_available = match self.progress_tokens {
            Some(tokens) => tokens,
            None => {
                let boxed = state.boxed_progress_tokens();
                state.rng.draw(boxed, config.board_progress_tokens).into_iter().collect()
            }
        };

        state.wonders_available = match (self.wonders, &state.structure) {
            (Some(wonders), _) => wonders,
            (None, Some(_)) => OrdSet::new(),
            (None, None) => {
                let undrafted = state.undrafted_wonders();
                state.rng.draw(undrafted, config.draft_pool_size).into_iter().collect()
            }
        };

        state
    }
}
