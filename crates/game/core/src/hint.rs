//! Hint generation over the target's undisclosed attributes.
//!
//! Selection is an explicit filter-then-draw: build the eligible pool,
//! return `None` when it is empty, otherwise draw one attribute uniformly.
//! Callers pass the random source, so a seeded RNG makes every draw
//! reproducible in tests.

use std::collections::HashSet;

use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::creature::{Attribute, CreatureRecord};

/// A single disclosed attribute with its player-facing phrasing.
///
/// `value` holds exactly what was revealed — for [`Attribute::Name`] that is
/// the first letter only, never the full name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    pub attribute: Attribute,
    pub text: String,
    pub value: String,
}

/// Attributes that may still be hinted for `target`.
///
/// Excludes attributes already revealed and attributes whose target value is
/// a sentinel: an absent secondary type or an unknown habitat discloses
/// nothing and must never consume the player's budget.
pub fn eligible_attributes(
    target: &CreatureRecord,
    revealed: &HashSet<Attribute>,
) -> Vec<Attribute> {
    Attribute::iter()
        .filter(|attribute| !revealed.contains(attribute))
        .filter(|attribute| target.attribute_value(*attribute).is_some())
        .collect()
}

/// Draws the next hint uniformly from the eligible pool, or `None` when the
/// pool is exhausted.
pub fn next_hint<R: Rng + ?Sized>(
    target: &CreatureRecord,
    revealed: &HashSet<Attribute>,
    rng: &mut R,
) -> Option<Hint> {
    let pool = eligible_attributes(target, revealed);
    if pool.is_empty() {
        return None;
    }

    let attribute = pool[rng.gen_range(0..pool.len())];
    let raw = target
        .attribute_value(attribute)
        .expect("eligible attributes always carry a value");

    let (value, text) = match attribute {
        Attribute::Name => {
            let initial = first_letter(raw);
            let text = format!("The creature's name starts with \"{initial}\"");
            (initial, text)
        }
        Attribute::Generation => {
            let label = raw.to_uppercase();
            let text = format!("The creature is from Generation {label}");
            (label, text)
        }
        Attribute::PrimaryType => (
            raw.to_string(),
            format!("The creature's primary type is {}", capitalize(raw)),
        ),
        Attribute::SecondaryType => (
            raw.to_string(),
            format!("The creature's secondary type is {}", capitalize(raw)),
        ),
        Attribute::Color => (
            raw.to_string(),
            format!("The creature's color is {}", capitalize(raw)),
        ),
        Attribute::Habitat => (
            raw.to_string(),
            format!("The creature's habitat is {}", capitalize(raw)),
        ),
    };

    Some(Hint {
        attribute,
        text,
        value,
    })
}

fn first_letter(s: &str) -> String {
    s.chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
