//! Game configuration constants and tunable parameters.

use serde::{Deserialize, Serialize};

/// Tunable rules of a guessing session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Hints the player may spend per session.
    pub hint_budget: u8,
    /// Upper bound (inclusive) for random target ids drawn from the
    /// external database.
    pub max_creature_id: u32,
    /// Maximum autocomplete suggestions surfaced for a guess draft.
    pub suggestion_limit: usize,
}

impl GameConfig {
    pub const DEFAULT_HINT_BUDGET: u8 = 3;
    pub const DEFAULT_MAX_CREATURE_ID: u32 = 1010;
    pub const DEFAULT_SUGGESTION_LIMIT: usize = 8;

    pub fn new() -> Self {
        Self {
            hint_budget: Self::DEFAULT_HINT_BUDGET,
            max_creature_id: Self::DEFAULT_MAX_CREATURE_ID,
            suggestion_limit: Self::DEFAULT_SUGGESTION_LIMIT,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
