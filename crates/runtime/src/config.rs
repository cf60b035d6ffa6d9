//! Runtime configuration structures and loaders.

use std::env;

use game_core::GameConfig;

/// Configuration shared by the worker and its channels.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    pub game: GameConfig,
    pub command_buffer: usize,
    pub event_buffer: usize,
    /// Fixed seed for the session RNG. Unset means seed from entropy;
    /// setting it makes target draws and hint selection reproducible.
    pub rng_seed: Option<u64>,
    /// Override for the creature database endpoint.
    pub api_base_url: Option<String>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            command_buffer: 32,
            event_buffer: 100,
            rng_seed: None,
            api_base_url: None,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `GAME_HINT_BUDGET` - Hints per session (default: 3)
    /// - `GAME_MAX_CREATURE_ID` - Upper bound for target draws (default: 1010)
    /// - `GAME_SUGGESTION_LIMIT` - Autocomplete suggestions (default: 8)
    /// - `GAME_RNG_SEED` - Fixed session RNG seed (default: entropy)
    /// - `SESSION_COMMAND_BUFFER` - Command queue size (default: 32)
    /// - `SESSION_EVENT_BUFFER` - Event channel capacity (default: 100)
    /// - `POKEAPI_BASE_URL` - Creature database endpoint override
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(budget) = read_env::<u8>("GAME_HINT_BUDGET") {
            config.game.hint_budget = budget;
        }
        if let Some(max_id) = read_env::<u32>("GAME_MAX_CREATURE_ID") {
            config.game.max_creature_id = max_id.max(1);
        }
        if let Some(limit) = read_env::<usize>("GAME_SUGGESTION_LIMIT") {
            config.game.suggestion_limit = limit;
        }
        config.rng_seed = read_env::<u64>("GAME_RNG_SEED");

        if let Some(capacity) = read_env::<usize>("SESSION_COMMAND_BUFFER") {
            config.command_buffer = capacity.max(1);
        }
        if let Some(capacity) = read_env::<usize>("SESSION_EVENT_BUFFER") {
            config.event_buffer = capacity.max(1);
        }

        config.api_base_url = env::var("POKEAPI_BASE_URL").ok();

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
