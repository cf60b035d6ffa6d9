//! Authoritative session state and its pure transitions.
//!
//! The runtime layer owns exactly one [`SessionState`] at a time and
//! replaces it wholesale through the transition methods below. Every
//! transition either returns a fully-applied successor state or an error
//! with the original state untouched — there is no partial mutation to
//! observe, which is what lets the async shell stay a thin sequencer.

use std::collections::HashSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::compare::{compare, Comparison};
use crate::creature::{Attribute, CreatureRecord};
use crate::hint::{next_hint, Hint};

/// Where the session currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Playing,
    Won,
    GivenUp,
}

impl Outcome {
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Won | Self::GivenUp)
    }
}

/// One accepted guess, in submission order.
///
/// The comparison is computed once at acceptance so presentation layers
/// render verdicts without re-deriving the rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessEntry {
    pub record: CreatureRecord,
    pub comparison: Comparison,
    pub order: u32,
}

/// Rejections a session transition can produce. All of them are recoverable:
/// the session stays playable and the previous state remains authoritative.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("\"{name}\" was already guessed this session")]
    DuplicateGuess { name: String },

    #[error("the session is not accepting guesses")]
    NotPlaying,

    #[error("no target has been resolved yet")]
    NoTarget,

    #[error("the hint budget is spent")]
    HintBudgetSpent,

    #[error("no more hints are available for this creature")]
    HintsExhausted,
}

/// Complete state of one guessing session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// The hidden creature. Resolved once per session and never reassigned
    /// until the whole state is replaced on reset.
    pub target: Option<CreatureRecord>,
    /// Accepted guesses, append-only, oldest first.
    pub guesses: Vec<GuessEntry>,
    /// Disclosed hints, append-only; no attribute appears twice.
    pub hints: Vec<Hint>,
    /// Hints the player may still spend.
    pub hint_budget: u8,
    pub outcome: Outcome,
    /// A guess lookup is currently suspended on the data provider.
    pub guess_in_flight: bool,
    /// Target resolution is currently in progress.
    pub loading_target: bool,
}

impl SessionState {
    /// Fresh state while the target is being resolved.
    pub fn loading(hint_budget: u8) -> Self {
        Self {
            target: None,
            guesses: Vec::new(),
            hints: Vec::new(),
            hint_budget,
            outcome: Outcome::Playing,
            guess_in_flight: false,
            loading_target: true,
        }
    }

    /// Playable state once the target has been resolved.
    pub fn with_target(target: CreatureRecord, hint_budget: u8) -> Self {
        Self {
            target: Some(target),
            guesses: Vec::new(),
            hints: Vec::new(),
            hint_budget,
            outcome: Outcome::Playing,
            guess_in_flight: false,
            loading_target: false,
        }
    }

    /// True when `name` was already guessed, case-insensitively.
    pub fn is_duplicate(&self, name: &str) -> bool {
        self.guesses
            .iter()
            .any(|entry| entry.record.name.eq_ignore_ascii_case(name))
    }

    /// Attributes already disclosed as hints.
    pub fn revealed_attributes(&self) -> HashSet<Attribute> {
        self.hints.iter().map(|hint| hint.attribute).collect()
    }

    /// Accepts a resolved guess: rejects duplicates, compares against the
    /// target, appends the entry, and transitions to [`Outcome::Won`] on an
    /// exact match.
    pub fn accept_guess(&self, record: CreatureRecord) -> Result<Self, SessionError> {
        if self.outcome != Outcome::Playing {
            return Err(SessionError::NotPlaying);
        }
        let target = self.target.as_ref().ok_or(SessionError::NoTarget)?;
        if self.is_duplicate(&record.name) {
            return Err(SessionError::DuplicateGuess { name: record.name });
        }

        let comparison = compare(&record, target);
        let mut next = self.clone();
        next.guesses.push(GuessEntry {
            record,
            comparison,
            order: self.guesses.len() as u32,
        });
        if comparison.is_exact_match() {
            next.outcome = Outcome::Won;
        }
        Ok(next)
    }

    /// Draws a hint from the eligible pool. The budget is decremented only
    /// when a hint is actually produced; an exhausted pool reports
    /// [`SessionError::HintsExhausted`] and leaves the budget alone.
    /// Exhaustion takes precedence over a spent budget so the player learns
    /// that nothing further could be disclosed anyway.
    pub fn reveal_hint<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<(Self, Hint), SessionError> {
        let target = self.target.as_ref().ok_or(SessionError::NoTarget)?;

        let hint = next_hint(target, &self.revealed_attributes(), rng)
            .ok_or(SessionError::HintsExhausted)?;
        if self.hint_budget == 0 {
            return Err(SessionError::HintBudgetSpent);
        }

        let mut next = self.clone();
        next.hints.push(hint.clone());
        next.hint_budget -= 1;
        Ok((next, hint))
    }

    /// Concedes the session. Valid only while playing; afterwards the target
    /// becomes revealable and no further guess mutates the history.
    pub fn give_up(&self) -> Result<Self, SessionError> {
        if self.outcome != Outcome::Playing {
            return Err(SessionError::NotPlaying);
        }
        if self.target.is_none() {
            return Err(SessionError::NoTarget);
        }

        let mut next = self.clone();
        next.outcome = Outcome::GivenUp;
        Ok(next)
    }

    /// Marks a guess lookup as started or finished. Pure flag flip; the
    /// enforcement of "at most one in flight" lives with the caller.
    pub fn with_guess_in_flight(&self, in_flight: bool) -> Self {
        let mut next = self.clone();
        next.guess_in_flight = in_flight;
        next
    }
}
