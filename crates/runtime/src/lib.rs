//! Async shell around the pure session rules.
//!
//! The runtime owns a background worker task holding the authoritative
//! [`game_core::SessionState`], wires up the command and event channels,
//! and exposes a cloneable [`SessionHandle`] for presentation layers to
//! drive the game. The worker processes commands strictly one at a time,
//! and the handle's in-flight guard rejects guess submissions (and draft
//! edits) that would race a pending lookup.

pub mod config;
pub mod error;
pub mod event;
pub mod handle;
pub mod runtime;
pub mod snapshot;
pub mod worker;

pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use event::SessionEvent;
pub use handle::{GuessReport, SessionHandle};
pub use runtime::{Runtime, RuntimeBuilder};
pub use snapshot::SessionSnapshot;
