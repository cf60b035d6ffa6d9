//! The cache-fronted resolver the game actually talks to.

use std::collections::HashMap;
use std::sync::Arc;

use rand::Rng;
use tokio::sync::RwLock;

use game_core::CreatureRecord;

use crate::source::{CreatureSource, SourceError};

/// Cache-fronted creature resolver.
///
/// The cache is an owned field rather than process-wide state, so every
/// `Pokedex` (and every test) gets its own. Resolved records are stored
/// under **every** key they could legitimately be requested by again —
/// the id-string and the name — so a guess by name hits the entry a random
/// id-draw created. Overwrites are idempotent last-write-wins; re-caching
/// identical data is harmless.
pub struct Pokedex<S> {
    source: S,
    cache: RwLock<HashMap<String, Arc<CreatureRecord>>>,
    names: RwLock<Option<Arc<Vec<String>>>>,
}

impl<S: CreatureSource> Pokedex<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: RwLock::new(HashMap::new()),
            names: RwLock::new(None),
        }
    }

    /// Resolves a creature by id-string or case-insensitive name.
    ///
    /// Returns `None` for anything that does not end in a usable record:
    /// unknown identifiers, transport failures, malformed payloads. The
    /// distinction only matters to the log; to the caller they are all
    /// "no such creature".
    pub async fn resolve(&self, query: &str) -> Option<Arc<CreatureRecord>> {
        let key = query.trim().to_lowercase();
        if key.is_empty() {
            return None;
        }

        if let Some(record) = self.cache.read().await.get(&key) {
            tracing::trace!(%key, "creature cache hit");
            return Some(Arc::clone(record));
        }

        match self.source.load(&key).await {
            Ok(record) => {
                let record = Arc::new(record);
                let mut cache = self.cache.write().await;
                cache.insert(record.id.to_string(), Arc::clone(&record));
                cache.insert(record.name.clone(), Arc::clone(&record));
                Some(record)
            }
            Err(SourceError::NotFound) => {
                tracing::debug!(%key, "creature not found upstream");
                None
            }
            Err(error) => {
                tracing::warn!(%key, %error, "creature lookup failed");
                None
            }
        }
    }

    /// Draws one uniform id in `[1, max_id]` and resolves it. A `None`
    /// result means the draw landed on an unusable id; callers retry with
    /// a fresh draw.
    pub async fn resolve_random<R: Rng + ?Sized>(
        &self,
        max_id: u32,
        rng: &mut R,
    ) -> Option<Arc<CreatureRecord>> {
        let id = rng.gen_range(1..=max_id.max(1));
        self.resolve(&id.to_string()).await
    }

    /// The full name index for autocomplete. Fetched once and cached on
    /// success; on failure an empty list comes back and the next call
    /// retries, since suggestions are cosmetic rather than load-bearing.
    pub async fn all_names(&self) -> Arc<Vec<String>> {
        if let Some(names) = self.names.read().await.as_ref() {
            return Arc::clone(names);
        }

        match self.source.list_names().await {
            Ok(names) => {
                let names = Arc::new(names);
                *self.names.write().await = Some(Arc::clone(&names));
                names
            }
            Err(error) => {
                tracing::warn!(%error, "name index fetch failed, autocomplete disabled");
                Arc::new(Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockCreatureSource;
    use game_core::CreatureId;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pikachu() -> CreatureRecord {
        CreatureRecord {
            id: CreatureId(25),
            name: "pikachu".into(),
            image_url: None,
            generation: "i".into(),
            primary_type: "electric".into(),
            secondary_type: None,
            color: "yellow".into(),
            habitat: Some("forest".into()),
        }
    }

    #[tokio::test]
    async fn caches_under_both_id_and_name() {
        let source = MockCreatureSource::new();
        source.insert(pikachu());
        let dex = Pokedex::new(source.clone());

        let by_id = dex.resolve("25").await.expect("known id resolves");
        assert_eq!(by_id.name, "pikachu");
        assert_eq!(source.load_calls(), 1);

        // Both key forms now hit the cache without another upstream call.
        let by_name = dex.resolve("pikachu").await.expect("cached by name");
        let by_id_again = dex.resolve("25").await.expect("cached by id");
        assert_eq!(source.load_calls(), 1);
        assert_eq!(by_name.id, by_id_again.id);
    }

    #[tokio::test]
    async fn normalizes_lookup_keys() {
        let source = MockCreatureSource::new();
        source.insert(pikachu());
        let dex = Pokedex::new(source.clone());

        assert!(dex.resolve("  PiKaChu  ").await.is_some());
        assert!(dex.resolve("PIKACHU").await.is_some());
        assert_eq!(source.load_calls(), 1);
    }

    #[tokio::test]
    async fn unknown_and_empty_queries_resolve_to_none() {
        let source = MockCreatureSource::new();
        let dex = Pokedex::new(source);

        assert!(dex.resolve("missingno").await.is_none());
        assert!(dex.resolve("   ").await.is_none());
        assert!(dex.resolve("").await.is_none());
    }

    #[tokio::test]
    async fn failures_are_not_cached() {
        let source = MockCreatureSource::new();
        let dex = Pokedex::new(source.clone());

        assert!(dex.resolve("pikachu").await.is_none());

        // The record appearing upstream later must become resolvable —
        // a cached failure would shadow it.
        source.insert(pikachu());
        assert!(dex.resolve("pikachu").await.is_some());
    }

    #[tokio::test]
    async fn random_resolution_draws_within_bounds() {
        let source = MockCreatureSource::new();
        source.insert(pikachu());
        // Sole valid id is 25; keep drawing until the RNG lands on it.
        let dex = Pokedex::new(source);
        let mut rng = StdRng::seed_from_u64(1);

        let mut resolved = None;
        for _ in 0..1000 {
            if let Some(record) = dex.resolve_random(25, &mut rng).await {
                resolved = Some(record);
                break;
            }
        }
        assert_eq!(resolved.expect("eventually draws id 25").id, CreatureId(25));
    }

    #[tokio::test]
    async fn name_index_is_cached_after_first_success() {
        let source = MockCreatureSource::new();
        source.insert(pikachu());
        let dex = Pokedex::new(source.clone());

        let first = dex.all_names().await;
        assert_eq!(first.as_slice(), ["pikachu"]);
        let _second = dex.all_names().await;
        assert_eq!(source.list_calls(), 1);
    }
}
