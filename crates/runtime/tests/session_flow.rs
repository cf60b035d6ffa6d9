//! End-to-end session scenarios over the in-memory creature source.
//!
//! The mock database holds a single valid id, so every session resolves
//! pikachu as its target and the scenarios are fully deterministic.

use std::time::Duration;

use game_core::{Attribute, CreatureId, CreatureRecord, GameConfig, Outcome};
use pokedex::MockCreatureSource;
use runtime::{Runtime, RuntimeConfig, RuntimeError, SessionHandle};

fn creature(
    id: u32,
    name: &str,
    secondary_type: Option<&str>,
    habitat: Option<&str>,
) -> CreatureRecord {
    CreatureRecord {
        id: CreatureId(id),
        name: name.into(),
        image_url: None,
        generation: "i".into(),
        primary_type: "electric".into(),
        secondary_type: secondary_type.map(Into::into),
        color: "yellow".into(),
        habitat: habitat.map(Into::into),
    }
}

/// Mock database where id 1 is pikachu (the only id a random draw can
/// land on with `max_creature_id = 1`), plus lookalikes for guessing.
fn seeded_source() -> MockCreatureSource {
    let source = MockCreatureSource::new();
    source.insert(creature(1, "pikachu", None, Some("forest")));
    source.insert(creature(26, "raichu", None, Some("forest")));
    source.insert(creature(3, "venusaur", Some("poison"), Some("grassland")));
    source
}

fn test_config() -> RuntimeConfig {
    RuntimeConfig {
        game: GameConfig {
            hint_budget: 3,
            max_creature_id: 1,
            suggestion_limit: 8,
        },
        rng_seed: Some(42),
        ..RuntimeConfig::default()
    }
}

fn start_runtime(source: MockCreatureSource) -> (Runtime, SessionHandle) {
    let runtime = Runtime::builder()
        .config(test_config())
        .build_with_source(source);
    let handle = runtime.handle();
    (runtime, handle)
}

#[tokio::test]
async fn session_plays_through_to_victory() {
    let (_runtime, handle) = start_runtime(seeded_source());

    let snapshot = handle.snapshot().await.unwrap();
    assert!(snapshot.is_playing());
    assert_eq!(snapshot.hint_budget, 3);
    assert!(snapshot.guesses.is_empty());
    assert!(
        snapshot.revealed_target.is_none(),
        "the target must stay hidden while playing"
    );

    // Raichu differs from the target in name alone.
    let report = handle.submit_guess("raichu").await.unwrap();
    assert_eq!(report.outcome, Outcome::Playing);
    assert!(!report.entry.comparison.is_exact_match());
    assert!(!report.entry.comparison.name);
    assert!(report.entry.comparison.generation);
    assert!(report.entry.comparison.primary_type);
    assert!(report.entry.comparison.secondary_type);
    assert!(report.entry.comparison.color);
    assert!(report.entry.comparison.habitat);

    let report = handle.submit_guess("pikachu").await.unwrap();
    assert_eq!(report.outcome, Outcome::Won);
    assert!(report.entry.comparison.is_exact_match());

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.outcome, Outcome::Won);
    assert_eq!(snapshot.guess_count(), 2);
    assert_eq!(
        snapshot.revealed_target.map(|t| t.name),
        Some("pikachu".to_string())
    );
}

#[tokio::test]
async fn duplicate_guess_never_produces_a_second_entry() {
    let (_runtime, handle) = start_runtime(seeded_source());

    handle.submit_guess("raichu").await.unwrap();
    let err = handle.submit_guess("raichu").await.unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Session(game_core::SessionError::DuplicateGuess { .. })
    ));

    // Case and whitespace differences are still the same guess.
    let err = handle.submit_guess("  RAICHU ").await.unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Session(game_core::SessionError::DuplicateGuess { .. })
    ));

    assert_eq!(handle.snapshot().await.unwrap().guess_count(), 1);
}

#[tokio::test]
async fn unknown_names_are_rejected_without_touching_state() {
    let (_runtime, handle) = start_runtime(seeded_source());

    let err = handle.submit_guess("missingno").await.unwrap_err();
    assert!(matches!(err, RuntimeError::InvalidIdentifier { .. }));

    let err = handle.submit_guess("   ").await.unwrap_err();
    assert!(matches!(err, RuntimeError::EmptyGuess));

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.guess_count(), 0);
    assert_eq!(snapshot.outcome, Outcome::Playing);
}

#[tokio::test]
async fn concurrent_submissions_append_exactly_one_entry() {
    let source = seeded_source().with_latency(Duration::from_millis(50));
    let (_runtime, handle) = start_runtime(source);

    // Make sure the session is playable before racing the guard.
    let snapshot = handle.snapshot().await.unwrap();
    assert!(snapshot.is_playing());

    let (first, second) = tokio::join!(
        handle.submit_guess("raichu"),
        handle.submit_guess("venusaur"),
    );

    assert!(first.is_ok(), "first submission should resolve: {first:?}");
    assert!(
        matches!(second, Err(RuntimeError::GuessInFlight)),
        "second submission must be rejected, not queued: {second:?}"
    );

    assert_eq!(handle.snapshot().await.unwrap().guess_count(), 1);
}

#[tokio::test]
async fn draft_edits_are_rejected_while_a_guess_is_pending() {
    let source = seeded_source().with_latency(Duration::from_millis(50));
    let (_runtime, handle) = start_runtime(source);
    assert!(handle.snapshot().await.unwrap().is_playing());

    let editor = handle.clone();
    let (guess, edit) = tokio::join!(handle.submit_guess("raichu"), async move {
        editor.update_draft("venu").await
    });

    guess.unwrap();
    assert!(matches!(edit, Err(RuntimeError::GuessInFlight)));
}

#[tokio::test]
async fn hint_budget_spends_one_per_revealed_hint() {
    let (_runtime, handle) = start_runtime(seeded_source());

    let mut revealed = Vec::new();
    for expected_remaining in [2u8, 1, 0] {
        let hint = handle.request_hint().await.unwrap();
        assert!(
            !revealed.contains(&hint.attribute),
            "attribute {:?} was hinted twice",
            hint.attribute
        );
        revealed.push(hint.attribute);

        let snapshot = handle.snapshot().await.unwrap();
        assert_eq!(snapshot.hint_budget, expected_remaining);
    }

    // Pikachu's secondary type and unknown-free habitat leave eligible
    // attributes behind, so the spent budget is what stops the fourth call.
    let err = handle.request_hint().await.unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Session(game_core::SessionError::HintBudgetSpent)
    ));
    assert_eq!(handle.snapshot().await.unwrap().hints.len(), 3);
}

#[tokio::test]
async fn hints_skip_sentinel_attributes() {
    let (_runtime, handle) = start_runtime(seeded_source());

    for _ in 0..3 {
        let hint = handle.request_hint().await.unwrap();
        assert_ne!(
            hint.attribute,
            Attribute::SecondaryType,
            "the target has no secondary type to disclose"
        );
    }
}

#[tokio::test]
async fn giving_up_reveals_the_target_and_freezes_guessing() {
    let (_runtime, handle) = start_runtime(seeded_source());

    handle.submit_guess("raichu").await.unwrap();
    handle.give_up().await.unwrap();

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.outcome, Outcome::GivenUp);
    assert_eq!(
        snapshot.revealed_target.as_ref().map(|t| t.name.as_str()),
        Some("pikachu")
    );

    let err = handle.submit_guess("venusaur").await.unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Session(game_core::SessionError::NotPlaying)
    ));
    assert_eq!(handle.snapshot().await.unwrap().guess_count(), 1);

    // Giving up twice is also rejected.
    let err = handle.give_up().await.unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Session(game_core::SessionError::NotPlaying)
    ));
}

#[tokio::test]
async fn reset_restores_a_fresh_playing_session() {
    let (_runtime, handle) = start_runtime(seeded_source());

    handle.submit_guess("raichu").await.unwrap();
    handle.request_hint().await.unwrap();
    handle.give_up().await.unwrap();

    handle.reset().await.unwrap();

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.outcome, Outcome::Playing);
    assert!(snapshot.guesses.is_empty());
    assert!(snapshot.hints.is_empty());
    assert_eq!(snapshot.hint_budget, 3);
    assert!(snapshot.revealed_target.is_none());

    // The new session accepts the previously-guessed name again.
    handle.submit_guess("raichu").await.unwrap();
}

#[tokio::test]
async fn draft_updates_drive_autocomplete_suggestions() {
    let (_runtime, handle) = start_runtime(seeded_source());

    handle.update_draft("ra").await.unwrap();
    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.draft, "ra");
    assert_eq!(snapshot.suggestions, ["raichu"]);

    // Case-insensitive prefix match, display text preserved as typed.
    handle.update_draft("RA").await.unwrap();
    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.draft, "RA");
    assert_eq!(snapshot.suggestions, ["raichu"]);

    handle.select_suggestion("raichu").await.unwrap();
    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.draft, "raichu");
    assert!(snapshot.suggestions.is_empty());

    handle.update_draft("").await.unwrap();
    let snapshot = handle.snapshot().await.unwrap();
    assert!(snapshot.suggestions.is_empty());
}

#[tokio::test]
async fn accepted_guess_clears_the_draft() {
    let (_runtime, handle) = start_runtime(seeded_source());

    handle.update_draft("raichu").await.unwrap();
    handle.submit_guess("raichu").await.unwrap();

    let snapshot = handle.snapshot().await.unwrap();
    assert!(snapshot.draft.is_empty());
    assert!(snapshot.suggestions.is_empty());
}

#[tokio::test]
async fn events_narrate_an_accepted_guess() {
    let (_runtime, handle) = start_runtime(seeded_source());
    // Snapshot first so subscription happens after startup events.
    assert!(handle.snapshot().await.unwrap().is_playing());

    let mut events = handle.subscribe();
    handle.submit_guess("pikachu").await.unwrap();

    let mut saw_started = false;
    let mut saw_accepted = false;
    let mut saw_won = false;
    while let Ok(event) = events.try_recv() {
        match event {
            runtime::SessionEvent::GuessStarted { ref query } if query == "pikachu" => {
                saw_started = true;
            }
            runtime::SessionEvent::GuessAccepted { ref entry, outcome } => {
                assert_eq!(entry.record.name, "pikachu");
                assert_eq!(outcome, Outcome::Won);
                saw_accepted = true;
            }
            runtime::SessionEvent::Won { ref target, .. } => {
                assert_eq!(target.name, "pikachu");
                saw_won = true;
            }
            _ => {}
        }
    }
    assert!(saw_started && saw_accepted && saw_won);
}

#[tokio::test]
async fn shutdown_joins_the_worker() {
    let (runtime, handle) = start_runtime(seeded_source());
    assert!(handle.snapshot().await.unwrap().is_playing());

    drop(handle);
    runtime.shutdown().await.unwrap();
}
