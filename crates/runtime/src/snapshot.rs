//! Read-only projection of the session for presentation layers.

use serde::Serialize;

use game_core::{CreatureRecord, GuessEntry, Hint, Outcome};

/// Everything a UI needs to render one frame, with the rules already
/// applied: per-guess verdicts live inside the entries, suggestions are
/// pre-filtered, and the target appears only once the outcome is terminal.
/// While the player is still guessing, the snapshot simply does not carry
/// the answer.
#[derive(Clone, Debug, Serialize)]
pub struct SessionSnapshot {
    pub guesses: Vec<GuessEntry>,
    pub hints: Vec<Hint>,
    pub hint_budget: u8,
    pub outcome: Outcome,
    pub guess_in_flight: bool,
    pub loading_target: bool,
    /// Current guess draft text, exactly as typed.
    pub draft: String,
    /// Autocomplete suggestions for the draft, already limited.
    pub suggestions: Vec<String>,
    /// The hidden creature, revealed only after a win or give-up.
    pub revealed_target: Option<CreatureRecord>,
}

impl SessionSnapshot {
    pub fn guess_count(&self) -> usize {
        self.guesses.len()
    }

    /// True while the session accepts new guesses.
    pub fn is_playing(&self) -> bool {
        self.outcome == Outcome::Playing && !self.loading_target
    }
}
