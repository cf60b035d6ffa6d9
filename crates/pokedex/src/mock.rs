//! In-memory creature source for testing without network.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use game_core::CreatureRecord;

use crate::source::{CreatureSource, SourceError};

/// Mock source holding records in memory, indexed under id and name.
///
/// `latency` delays every `load`, which is how the concurrency tests hold a
/// lookup open long enough to race a second one against it. Call counters
/// let cache tests assert how often the "network" was actually hit.
#[derive(Clone, Default)]
pub struct MockCreatureSource {
    records: Arc<Mutex<HashMap<String, CreatureRecord>>>,
    latency: Option<Duration>,
    load_calls: Arc<AtomicU64>,
    list_calls: Arc<AtomicU64>,
}

impl MockCreatureSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delays every `load` by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Registers a record under both of its lookup keys.
    pub fn insert(&self, record: CreatureRecord) {
        let mut records = self.records.lock().expect("mock record store poisoned");
        records.insert(record.id.to_string(), record.clone());
        records.insert(record.name.clone(), record);
    }

    /// Number of `load` calls served so far.
    pub fn load_calls(&self) -> u64 {
        self.load_calls.load(Ordering::SeqCst)
    }

    /// Number of `list_names` calls served so far.
    pub fn list_calls(&self) -> u64 {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CreatureSource for MockCreatureSource {
    async fn load(&self, key: &str) -> Result<CreatureRecord, SourceError> {
        self.load_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        self.records
            .lock()
            .expect("mock record store poisoned")
            .get(key)
            .cloned()
            .ok_or(SourceError::NotFound)
    }

    async fn list_names(&self) -> Result<Vec<String>, SourceError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);

        let records = self.records.lock().expect("mock record store poisoned");
        let mut names: Vec<String> = records.values().map(|r| r.name.clone()).collect();
        names.sort();
        names.dedup();
        Ok(names)
    }
}
