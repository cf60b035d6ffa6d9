//! Cloneable façade for issuing commands to the session worker.
//!
//! [`SessionHandle`] hides the channel plumbing and carries the in-flight
//! guard: while one guess lookup is suspended on the data provider, further
//! submissions and draft edits are rejected outright rather than queued.
//! Clones share the guard, so the guarantee holds across every handle to
//! the same session.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, oneshot};

use game_core::Hint;

use crate::error::{Result, RuntimeError};
use crate::event::SessionEvent;
use crate::snapshot::SessionSnapshot;
use crate::worker::Command;

pub use crate::worker::GuessReport;

/// Client-facing handle to interact with the session.
#[derive(Clone)]
pub struct SessionHandle {
    command_tx: mpsc::Sender<Command>,
    event_tx: broadcast::Sender<SessionEvent>,
    guess_gate: Arc<AtomicBool>,
}

impl SessionHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<Command>,
        event_tx: broadcast::Sender<SessionEvent>,
    ) -> Self {
        Self {
            command_tx,
            event_tx,
            guess_gate: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Subscribe to session events.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.event_tx.subscribe()
    }

    /// Submits a guess and waits for the verdict.
    ///
    /// At most one submission is in flight at a time: a call arriving while
    /// another is pending fails immediately with
    /// [`RuntimeError::GuessInFlight`] and has no effect on the session.
    pub async fn submit_guess(&self, text: impl Into<String>) -> Result<GuessReport> {
        if self
            .guess_gate
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(RuntimeError::GuessInFlight);
        }

        let result = self.submit_guess_locked(text.into()).await;
        self.guess_gate.store(false, Ordering::Release);
        result
    }

    async fn submit_guess_locked(&self, text: String) -> Result<GuessReport> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.command_tx
            .send(Command::SubmitGuess {
                text,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;
        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }

    /// Requests a hint; `Ok` carries the disclosed hint.
    pub async fn request_hint(&self) -> Result<Hint> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.command_tx
            .send(Command::RequestHint { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;
        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }

    /// Concedes the current session.
    pub async fn give_up(&self) -> Result<()> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.command_tx
            .send(Command::GiveUp { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;
        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }

    /// Replaces the session with a fresh one (new target, restored budget).
    pub async fn reset(&self) -> Result<()> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.command_tx
            .send(Command::Reset { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;
        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }

    /// Updates the guess draft feeding the autocomplete filter. Rejected
    /// while a guess is in flight so a stale edit cannot race the pending
    /// lookup.
    pub async fn update_draft(&self, text: impl Into<String>) -> Result<()> {
        if self.guess_gate.load(Ordering::Acquire) {
            return Err(RuntimeError::GuessInFlight);
        }
        self.command_tx
            .send(Command::UpdateDraft { text: text.into() })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)
    }

    /// Adopts an autocomplete suggestion as the draft. Same in-flight
    /// rejection as [`Self::update_draft`].
    pub async fn select_suggestion(&self, name: impl Into<String>) -> Result<()> {
        if self.guess_gate.load(Ordering::Acquire) {
            return Err(RuntimeError::GuessInFlight);
        }
        self.command_tx
            .send(Command::SelectSuggestion { name: name.into() })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)
    }

    /// Queries a read-only snapshot of the session.
    pub async fn snapshot(&self) -> Result<SessionSnapshot> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.command_tx
            .send(Command::Snapshot { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;
        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }
}
