//! Game configuration.
//!
//! The defaults are the published rules. Tests and variants override single
//! fields through `GameStateBuilder::config`.

use serde::{Deserialize, Serialize};

/// Rule constants consulted by the transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Coins each player starts with.
    pub starting_coins: u32,

    /// Progress tokens placed face up on the board at setup.
    pub board_progress_tokens: usize,

    /// Wonders revealed per draft round.
    pub draft_pool_size: usize,

    /// Wonders each player drafts.
    pub wonders_per_player: usize,

    /// Once this many wonders are built, unbuilt ones are discarded.
    pub max_built_wonders: u32,

    /// Distinct scientific symbols needed for scientific supremacy.
    pub supremacy_symbols: usize,

    /// Progress tokens offered by the Great Library.
    pub great_library_draw: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_coins: 7,
            board_progress_tokens: 5,
            draft_pool_size: 4,
            wonders_per_player: 4,
            max_built_wonders: 7,
            supremacy_symbols: 6,
            great_library_draw: 3,
        }
    }
}
