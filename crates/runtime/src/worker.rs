//! Session worker that owns the authoritative [`SessionState`].
//!
//! Receives commands from [`crate::SessionHandle`], performs the
//! asynchronous lookups through the [`Pokedex`], applies the pure
//! transitions from `game-core`, and publishes [`SessionEvent`]s. Running
//! as a single task makes every mutating operation atomic with respect to
//! the others: a command either completes or leaves the previous state
//! authoritative, and nothing observes a half-applied transition.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc, oneshot};
use tracing::{debug, warn};

use game_core::{GuessEntry, Hint, Outcome, SessionError, SessionState};
use pokedex::{CreatureSource, Pokedex};

use crate::config::RuntimeConfig;
use crate::error::{Result, RuntimeError};
use crate::event::SessionEvent;
use crate::snapshot::SessionSnapshot;

/// Draws attempted before target resolution reports failure. Each failed
/// draw is retried transparently with a fresh random id; the bound only
/// exists so a dead upstream cannot spin forever.
const MAX_TARGET_ATTEMPTS: u32 = 32;

/// Reply payload of an accepted guess.
#[derive(Clone, Debug)]
pub struct GuessReport {
    pub entry: GuessEntry,
    pub outcome: Outcome,
}

/// Commands the worker processes, strictly one at a time.
pub enum Command {
    SubmitGuess {
        text: String,
        reply: oneshot::Sender<Result<GuessReport>>,
    },
    RequestHint {
        reply: oneshot::Sender<Result<Hint>>,
    },
    GiveUp {
        reply: oneshot::Sender<Result<()>>,
    },
    Reset {
        reply: oneshot::Sender<Result<()>>,
    },
    UpdateDraft {
        text: String,
    },
    SelectSuggestion {
        name: String,
    },
    Snapshot {
        reply: oneshot::Sender<SessionSnapshot>,
    },
}

/// Background task owning session state, the data provider, and the RNG.
pub struct SessionWorker<S> {
    state: SessionState,
    dex: Pokedex<S>,
    config: RuntimeConfig,
    command_rx: mpsc::Receiver<Command>,
    event_tx: broadcast::Sender<SessionEvent>,
    rng: StdRng,
    draft: String,
    suggestions: Vec<String>,
    name_index: Arc<Vec<String>>,
}

impl<S: CreatureSource> SessionWorker<S> {
    pub(crate) fn new(
        dex: Pokedex<S>,
        config: RuntimeConfig,
        command_rx: mpsc::Receiver<Command>,
        event_tx: broadcast::Sender<SessionEvent>,
    ) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            state: SessionState::loading(config.game.hint_budget),
            dex,
            config,
            command_rx,
            event_tx,
            rng,
            draft: String::new(),
            suggestions: Vec::new(),
            name_index: Arc::new(Vec::new()),
        }
    }

    /// Main worker loop: resolve the first target, then drain commands
    /// until every handle is gone.
    pub async fn run(mut self) {
        if let Err(error) = self.start_session().await {
            warn!(%error, "initial session start failed; a reset will retry");
        }

        while let Some(command) = self.command_rx.recv().await {
            self.handle_command(command).await;
        }
        debug!("all session handles dropped, worker exiting");
    }

    async fn handle_command(&mut self, command: Command) {
        match command {
            Command::SubmitGuess { text, reply } => {
                let result = self.submit_guess(text).await;
                if reply.send(result).is_err() {
                    debug!("SubmitGuess reply channel closed (caller dropped)");
                }
            }
            Command::RequestHint { reply } => {
                let result = self.request_hint();
                if reply.send(result).is_err() {
                    debug!("RequestHint reply channel closed (caller dropped)");
                }
            }
            Command::GiveUp { reply } => {
                let result = self.give_up();
                if reply.send(result).is_err() {
                    debug!("GiveUp reply channel closed (caller dropped)");
                }
            }
            Command::Reset { reply } => {
                self.publish(SessionEvent::SessionReset);
                let result = self.start_session().await;
                if reply.send(result).is_err() {
                    debug!("Reset reply channel closed (caller dropped)");
                }
            }
            Command::UpdateDraft { text } => self.update_draft(text),
            Command::SelectSuggestion { name } => {
                self.draft = name;
                self.suggestions.clear();
            }
            Command::Snapshot { reply } => {
                if reply.send(self.snapshot()).is_err() {
                    debug!("Snapshot reply channel closed (caller dropped)");
                }
            }
        }
    }

    /// Resolves a fresh target and replaces the whole session state.
    async fn start_session(&mut self) -> Result<()> {
        self.state = SessionState::loading(self.config.game.hint_budget);
        self.draft.clear();
        self.suggestions.clear();
        self.publish(SessionEvent::TargetLoading);

        // The name index is cosmetic; a failure inside all_names already
        // logs and degrades to an empty list.
        self.name_index = self.dex.all_names().await;

        let max_id = self.config.game.max_creature_id;
        for attempt in 1..=MAX_TARGET_ATTEMPTS {
            let drawn = self.dex.resolve_random(max_id, &mut self.rng).await;
            if let Some(target) = drawn {
                debug!(target_id = %target.id, attempt, "target resolved");
                self.state =
                    SessionState::with_target((*target).clone(), self.config.game.hint_budget);
                self.publish(SessionEvent::TargetReady);
                return Ok(());
            }
            warn!(attempt, "random target draw failed, retrying with a new id");
        }

        Err(RuntimeError::TargetUnavailable {
            attempts: MAX_TARGET_ATTEMPTS,
        })
    }

    async fn submit_guess(&mut self, text: String) -> Result<GuessReport> {
        let query = text.trim().to_string();
        if query.is_empty() {
            return Err(RuntimeError::EmptyGuess);
        }
        if self.state.outcome != Outcome::Playing || self.state.loading_target {
            return Err(SessionError::NotPlaying.into());
        }

        self.state = self.state.with_guess_in_flight(true);
        self.publish(SessionEvent::GuessStarted {
            query: query.clone(),
        });

        let resolved = self.dex.resolve(&query).await;
        self.state = self.state.with_guess_in_flight(false);

        let record = match resolved {
            Some(record) => record,
            None => {
                let error = RuntimeError::InvalidIdentifier {
                    query: query.clone(),
                };
                self.reject(&query, &error);
                return Err(error);
            }
        };

        match self.state.accept_guess((*record).clone()) {
            Ok(next) => {
                self.state = next;
                self.draft.clear();
                self.suggestions.clear();

                let entry = self
                    .state
                    .guesses
                    .last()
                    .cloned()
                    .expect("accept_guess appends an entry");
                let outcome = self.state.outcome;

                self.publish(SessionEvent::GuessAccepted {
                    entry: entry.clone(),
                    outcome,
                });
                if outcome == Outcome::Won {
                    if let Some(target) = self.state.target.clone() {
                        self.publish(SessionEvent::Won {
                            target,
                            guess_count: self.state.guesses.len(),
                        });
                    }
                }

                Ok(GuessReport { entry, outcome })
            }
            Err(error) => {
                let error = RuntimeError::from(error);
                self.reject(&query, &error);
                Err(error)
            }
        }
    }

    fn request_hint(&mut self) -> Result<Hint> {
        match self.state.reveal_hint(&mut self.rng) {
            Ok((next, hint)) => {
                self.state = next;
                self.publish(SessionEvent::HintRevealed {
                    hint: hint.clone(),
                    remaining: self.state.hint_budget,
                });
                Ok(hint)
            }
            Err(SessionError::HintsExhausted) => {
                self.publish(SessionEvent::HintsExhausted);
                Err(SessionError::HintsExhausted.into())
            }
            Err(error) => Err(error.into()),
        }
    }

    fn give_up(&mut self) -> Result<()> {
        let next = self.state.give_up()?;
        self.state = next;
        if let Some(target) = self.state.target.clone() {
            self.publish(SessionEvent::GaveUp { target });
        }
        Ok(())
    }

    fn update_draft(&mut self, text: String) {
        let needle = text.trim().to_lowercase();
        self.suggestions = if needle.is_empty() {
            Vec::new()
        } else {
            self.name_index
                .iter()
                .filter(|name| name.starts_with(&needle))
                .take(self.config.game.suggestion_limit)
                .cloned()
                .collect()
        };
        self.draft = text;
    }

    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            guesses: self.state.guesses.clone(),
            hints: self.state.hints.clone(),
            hint_budget: self.state.hint_budget,
            outcome: self.state.outcome,
            guess_in_flight: self.state.guess_in_flight,
            loading_target: self.state.loading_target,
            draft: self.draft.clone(),
            suggestions: self.suggestions.clone(),
            revealed_target: if self.state.outcome.is_terminal() {
                self.state.target.clone()
            } else {
                None
            },
        }
    }

    fn reject(&self, query: &str, error: &RuntimeError) {
        self.publish(SessionEvent::GuessRejected {
            query: query.to_string(),
            error: error.to_string(),
        });
    }

    fn publish(&self, event: SessionEvent) {
        // No subscribers is normal, not an error.
        if self.event_tx.send(event).is_err() {
            tracing::trace!("no session event subscribers");
        }
    }
}
