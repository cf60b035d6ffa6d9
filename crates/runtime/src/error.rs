//! Unified error types surfaced by the runtime API.
//!
//! Everything except the channel failures is a recoverable, player-visible
//! rejection: the session keeps playing and the previous state stands.

use thiserror::Error;
use tokio::sync::oneshot;

use game_core::SessionError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// A guess lookup is already suspended on the data provider; the new
    /// intent is rejected, not queued.
    #[error("another guess is already in flight")]
    GuessInFlight,

    #[error("\"{query}\" does not name any known creature")]
    InvalidIdentifier { query: String },

    #[error("guess text is empty")]
    EmptyGuess,

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("no playable target could be resolved after {attempts} attempts")]
    TargetUnavailable { attempts: u32 },

    #[error("session worker command channel closed")]
    CommandChannelClosed,

    #[error("session worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("session worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),
}
