//! High-level runtime orchestrator.
//!
//! The runtime spawns the session worker, wires up the command and event
//! channels, and exposes a builder-based API for clients to drive a game.

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use pokedex::{CreatureSource, PokeApiClient, PokeApiSource, Pokedex};

use crate::config::RuntimeConfig;
use crate::error::{Result, RuntimeError};
use crate::event::SessionEvent;
use crate::handle::SessionHandle;
use crate::worker::{Command, SessionWorker};

/// Owns the session worker and hands out [`SessionHandle`]s.
pub struct Runtime {
    handle: SessionHandle,
    worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder.
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime.
    ///
    /// The handle can be shared across presentation tasks; all clones share
    /// the same in-flight guard.
    pub fn handle(&self) -> SessionHandle {
        self.handle.clone()
    }

    /// Subscribe to session events.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.handle.subscribe()
    }

    /// Shutdown the runtime gracefully.
    ///
    /// Drops this runtime's handle and waits for the worker to drain. The
    /// worker only exits once every cloned handle is gone too.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);
        self.worker_handle.await.map_err(RuntimeError::WorkerJoin)
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
        }
    }

    /// Override runtime configuration.
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Build against the public creature database.
    pub fn build(self) -> Runtime {
        let client = match self.config.api_base_url.as_deref() {
            Some(base_url) => PokeApiClient::with_base_url(base_url),
            None => PokeApiClient::new(),
        };
        let name_limit = self.config.game.max_creature_id;
        self.build_with_source(PokeApiSource::new(client, name_limit))
    }

    /// Build against any [`CreatureSource`] — tests inject the mock here.
    pub fn build_with_source<S>(self, source: S) -> Runtime
    where
        S: CreatureSource + 'static,
    {
        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer);
        let (event_tx, _event_rx) = broadcast::channel::<SessionEvent>(self.config.event_buffer);

        let handle = SessionHandle::new(command_tx, event_tx.clone());

        let worker = SessionWorker::new(Pokedex::new(source), self.config, command_rx, event_tx);
        let worker_handle = tokio::spawn(worker.run());

        Runtime {
            handle,
            worker_handle,
        }
    }
}

impl Default for RuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
