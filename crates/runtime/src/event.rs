//! Events broadcast to presentation subscribers.

use game_core::{CreatureRecord, GuessEntry, Hint, Outcome};

/// Everything a presentation layer can react to without polling.
///
/// Events are best-effort: a lagging subscriber misses old ones, and the
/// authoritative state is always available through
/// [`crate::SessionHandle::snapshot`].
#[derive(Clone, Debug)]
pub enum SessionEvent {
    /// Target resolution started (initial start or reset).
    TargetLoading,
    /// A target is resolved and the session is playable.
    TargetReady,
    /// A guess lookup left for the data provider.
    GuessStarted { query: String },
    /// A guess was resolved, compared, and recorded.
    GuessAccepted { entry: GuessEntry, outcome: Outcome },
    /// A guess was rejected; the state did not change.
    GuessRejected { query: String, error: String },
    /// A hint was disclosed and the budget decremented.
    HintRevealed { hint: Hint, remaining: u8 },
    /// No eligible attribute remains; the budget did not change.
    HintsExhausted,
    /// The player conceded; the target is now revealable.
    GaveUp { target: CreatureRecord },
    /// The hidden creature was identified.
    Won {
        target: CreatureRecord,
        guess_count: usize,
    },
    /// The session was replaced wholesale by a reset.
    SessionReset,
}
