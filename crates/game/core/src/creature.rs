//! Canonical creature records and the attributes the game reasons about.
//!
//! Records are normalized by the data provider before they reach this crate:
//! every string is lowercase, absent upstream data is folded into the
//! sentinel encodings below, and a record without an id or name is rejected
//! at the provider boundary and never constructed.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Stable identity of a creature in the external database.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CreatureId(pub u32);

impl fmt::Display for CreatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Canonical snapshot of a creature, immutable once constructed.
///
/// Invariants:
/// - `name` is non-empty and lowercase, unique per id.
/// - `secondary_type: None` encodes the "no secondary type" sentinel
///   (rendered as "—").
/// - `habitat: None` encodes the "unknown habitat" sentinel. Unknown carries
///   no information: it is never hinted and never counts as a field match.
/// - `image_url` is presentation-only and never compared.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureRecord {
    pub id: CreatureId,
    pub name: String,
    pub image_url: Option<String>,
    /// Roman-numeral generation label ("i" through "ix").
    pub generation: String,
    pub primary_type: String,
    pub secondary_type: Option<String>,
    pub color: String,
    pub habitat: Option<String>,
}

impl CreatureRecord {
    /// Secondary type for display, with the "—" placeholder for mono-typed
    /// creatures.
    pub fn secondary_type_label(&self) -> &str {
        self.secondary_type.as_deref().unwrap_or("—")
    }

    /// Habitat for display, with the upstream "unknown" placeholder.
    pub fn habitat_label(&self) -> &str {
        self.habitat.as_deref().unwrap_or("unknown")
    }

    /// Raw value of a comparable attribute, or `None` when the target holds
    /// a sentinel there (nothing to disclose, nothing to match).
    pub fn attribute_value(&self, attribute: Attribute) -> Option<&str> {
        match attribute {
            Attribute::Name => Some(&self.name),
            Attribute::Generation => Some(&self.generation),
            Attribute::PrimaryType => Some(&self.primary_type),
            Attribute::SecondaryType => self.secondary_type.as_deref(),
            Attribute::Color => Some(&self.color),
            Attribute::Habitat => self.habitat.as_deref(),
        }
    }
}

/// The attributes guesses are compared on and hints are drawn from.
///
/// The sprite/image is deliberately absent: it is presentation data, not a
/// game attribute.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, EnumIter, Serialize, Deserialize)]
pub enum Attribute {
    Name,
    Generation,
    PrimaryType,
    SecondaryType,
    Color,
    Habitat,
}

impl Attribute {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Generation => "generation",
            Self::PrimaryType => "primary type",
            Self::SecondaryType => "secondary type",
            Self::Color => "color",
            Self::Habitat => "habitat",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
