//! Plain-text rendering of session snapshots.

use game_core::{Attribute, GuessEntry};
use runtime::SessionSnapshot;

const COLUMNS: [Attribute; 6] = [
    Attribute::Name,
    Attribute::Generation,
    Attribute::PrimaryType,
    Attribute::SecondaryType,
    Attribute::Color,
    Attribute::Habitat,
];

/// Prints the current session as a guess table plus status lines.
pub fn snapshot(snapshot: &SessionSnapshot) {
    if snapshot.loading_target {
        println!("Resolving a new hidden creature...");
        return;
    }

    if !snapshot.suggestions.is_empty() {
        println!("Suggestions: {}", snapshot.suggestions.join(", "));
    }

    for entry in snapshot.guesses.iter().rev() {
        println!("{}", guess_row(entry));
    }

    for hint in &snapshot.hints {
        println!("Hint: {}", hint.text);
    }

    println!(
        "Guesses: {}  Hints left: {}",
        snapshot.guesses.len(),
        snapshot.hint_budget
    );
}

/// One guess as `name ✓|✗` cells, mirroring the original's colored table.
fn guess_row(entry: &GuessEntry) -> String {
    let record = &entry.record;
    let cells: Vec<String> = COLUMNS
        .iter()
        .map(|&attribute| {
            let value = match attribute {
                Attribute::Name => record.name.clone(),
                Attribute::Generation => record.generation.to_uppercase(),
                Attribute::PrimaryType => record.primary_type.clone(),
                Attribute::SecondaryType => record.secondary_type_label().to_string(),
                Attribute::Color => record.color.clone(),
                Attribute::Habitat => record.habitat_label().to_string(),
            };
            let marker = if entry.comparison.matches(attribute) {
                '✓'
            } else {
                '✗'
            };
            format!("{value} {marker}")
        })
        .collect();
    cells.join(" | ")
}
