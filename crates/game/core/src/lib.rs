//! Deterministic game rules shared across clients.
//!
//! `game-core` defines the canonical creature record, the attribute
//! comparator, the hint generator, and the session state with its pure
//! transitions. All state mutation flows through [`SessionState`]'s
//! transition methods; the async runtime layer clones and replaces
//! snapshots but never patches them in place.
pub mod compare;
pub mod config;
pub mod creature;
pub mod hint;
pub mod session;

pub use compare::{compare, Comparison};
pub use config::GameConfig;
pub use creature::{Attribute, CreatureId, CreatureRecord};
pub use hint::{eligible_attributes, next_hint, Hint};
pub use session::{GuessEntry, Outcome, SessionError, SessionState};
