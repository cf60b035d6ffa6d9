//! Wire types for the slice of the PokéAPI this game consumes.
//!
//! Only the fields the canonical record needs are modeled; everything else
//! in the (large) upstream payloads is ignored by serde.

use serde::Deserialize;

/// A `{ name, url }` reference, the API's universal link shape.
#[derive(Clone, Debug, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Response of `GET /pokemon/{id-or-name}`.
#[derive(Clone, Debug, Deserialize)]
pub struct PokemonResponse {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub sprites: SpriteSet,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    /// Link to the species resource carrying generation/color/habitat.
    pub species: NamedResource,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct SpriteSet {
    pub front_default: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// Response of the species resource linked from [`PokemonResponse`].
#[derive(Clone, Debug, Deserialize)]
pub struct SpeciesResponse {
    pub generation: NamedResource,
    pub color: NamedResource,
    /// Null upstream for creatures the database has no habitat for.
    pub habitat: Option<NamedResource>,
}

/// Response of `GET /pokemon?limit=N`, the bulk name index.
#[derive(Clone, Debug, Deserialize)]
pub struct NameIndexResponse {
    pub results: Vec<NamedResource>,
}
