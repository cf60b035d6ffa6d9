//! The async seam between the cache layer and the actual database.
//!
//! [`CreatureSource`] is what [`crate::Pokedex`] is generic over: the real
//! [`PokeApiSource`] composes two HTTP lookups, while tests swap in
//! [`crate::MockCreatureSource`].

use async_trait::async_trait;

use game_core::CreatureRecord;

use crate::client::PokeApiClient;
use crate::normalize;

/// Failures a source can produce. `NotFound` is an answer, not an error
/// condition — callers on the gameplay path fold it into "invalid
/// identifier". The other two are logged and treated the same way there.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("no creature matches the requested identifier")]
    NotFound,

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("malformed upstream payload: {0}")]
    Malformed(String),
}

/// Asynchronous lookup of fully-assembled canonical records.
#[async_trait]
pub trait CreatureSource: Send + Sync {
    /// Loads the record identified by a lowercase id-string or name.
    async fn load(&self, key: &str) -> Result<CreatureRecord, SourceError>;

    /// Full name index, used only for autocomplete.
    async fn list_names(&self) -> Result<Vec<String>, SourceError>;
}

/// Production source backed by the public PokéAPI.
pub struct PokeApiSource {
    client: PokeApiClient,
    name_limit: u32,
}

impl PokeApiSource {
    pub fn new(client: PokeApiClient, name_limit: u32) -> Self {
        Self { client, name_limit }
    }
}

#[async_trait]
impl CreatureSource for PokeApiSource {
    async fn load(&self, key: &str) -> Result<CreatureRecord, SourceError> {
        let pokemon = self.client.get_pokemon(key).await?;
        let species = self.client.get_species(&pokemon.species.url).await?;
        normalize::canonicalize(pokemon, species)
    }

    async fn list_names(&self) -> Result<Vec<String>, SourceError> {
        self.client.list_names(self.name_limit).await
    }
}
