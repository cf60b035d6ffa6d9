//! Attribute-by-attribute comparison of two canonical records.
//!
//! `compare` is a pure function over record pairs: no session knowledge, no
//! side effects, independently testable against literal records.

use serde::{Deserialize, Serialize};

use crate::creature::{Attribute, CreatureRecord};

/// Per-attribute match verdict for a single guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub name: bool,
    pub generation: bool,
    pub primary_type: bool,
    pub secondary_type: bool,
    pub color: bool,
    pub habitat: bool,
}

impl Comparison {
    /// True iff every compared attribute matched. This is the sole win
    /// condition.
    pub const fn is_exact_match(&self) -> bool {
        self.name
            && self.generation
            && self.primary_type
            && self.secondary_type
            && self.color
            && self.habitat
    }

    /// Verdict for a record compared against itself.
    pub const fn exact() -> Self {
        Self {
            name: true,
            generation: true,
            primary_type: true,
            secondary_type: true,
            color: true,
            habitat: true,
        }
    }

    pub const fn matches(&self, attribute: Attribute) -> bool {
        match attribute {
            Attribute::Name => self.name,
            Attribute::Generation => self.generation,
            Attribute::PrimaryType => self.primary_type,
            Attribute::SecondaryType => self.secondary_type,
            Attribute::Color => self.color,
            Attribute::Habitat => self.habitat,
        }
    }
}

/// Compares two records field by field. Symmetric and total; the image is
/// never consulted.
///
/// Two absent secondary types match: both creatures genuinely have no
/// second type. Two unknown habitats do NOT match: "unknown" is missing
/// data, not a shared trait, and treating it as a coincidental match would
/// disagree with hint eligibility. The one exception is identity — a record
/// compared against the same creature is exact by definition, which keeps a
/// target with an unknown habitat winnable.
pub fn compare(a: &CreatureRecord, b: &CreatureRecord) -> Comparison {
    if a.id == b.id {
        return Comparison::exact();
    }
    Comparison {
        name: eq(&a.name, &b.name),
        generation: eq(&a.generation, &b.generation),
        primary_type: eq(&a.primary_type, &b.primary_type),
        secondary_type: match (&a.secondary_type, &b.secondary_type) {
            (Some(a), Some(b)) => eq(a, b),
            (None, None) => true,
            _ => false,
        },
        color: eq(&a.color, &b.color),
        habitat: match (&a.habitat, &b.habitat) {
            (Some(a), Some(b)) => eq(a, b),
            _ => false,
        },
    }
}

fn eq(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}
