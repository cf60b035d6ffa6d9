//! Data provider adapter over the public PokéAPI.
//!
//! The adapter turns the remote database's two linked resources into
//! canonical [`game_core::CreatureRecord`]s, hides partial upstream data
//! behind sentinels, and fronts everything with an explicitly-owned
//! multi-key cache. Consumers see a deliberately small surface:
//! [`Pokedex::resolve`], [`Pokedex::resolve_random`], and
//! [`Pokedex::all_names`].

pub mod api;
pub mod client;
pub mod dex;
pub mod mock;
pub mod normalize;
pub mod source;

pub use client::PokeApiClient;
pub use dex::Pokedex;
pub use mock::MockCreatureSource;
pub use source::{CreatureSource, PokeApiSource, SourceError};
