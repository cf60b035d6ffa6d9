//! Assembly of canonical records from raw upstream payloads.
//!
//! All strings are lowercased here, generation labels are shortened to
//! their roman numeral, and absent optional data becomes the sentinel
//! encodings the rules crate expects. A payload without a usable id or
//! name never produces a record, so it can never reach the cache.

use game_core::{CreatureId, CreatureRecord};

use crate::api::{PokemonResponse, SpeciesResponse};
use crate::source::SourceError;

/// Builds the canonical record for one creature from its two linked
/// upstream resources.
pub fn canonicalize(
    pokemon: PokemonResponse,
    species: SpeciesResponse,
) -> Result<CreatureRecord, SourceError> {
    if pokemon.id == 0 {
        return Err(SourceError::Malformed("creature id 0 is not valid".into()));
    }
    let name = pokemon.name.trim().to_lowercase();
    if name.is_empty() {
        return Err(SourceError::Malformed(format!(
            "creature {} has no name",
            pokemon.id
        )));
    }

    let mut types = pokemon.types;
    types.sort_by_key(|slot| slot.slot);
    let primary_type = types
        .first()
        .map(|slot| slot.kind.name.to_lowercase())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| SourceError::Malformed(format!("creature {name} has no primary type")))?;
    let secondary_type = types
        .get(1)
        .map(|slot| slot.kind.name.to_lowercase())
        .filter(|name| !name.is_empty());

    Ok(CreatureRecord {
        id: CreatureId(pokemon.id),
        name,
        image_url: pokemon.sprites.front_default,
        generation: roman_generation(&species.generation.name),
        primary_type,
        secondary_type,
        color: species.color.name.to_lowercase(),
        habitat: species
            .habitat
            .map(|resource| resource.name.to_lowercase())
            .filter(|name| !name.is_empty() && name != "unknown"),
    })
}

/// `"generation-iv"` → `"iv"`. Labels the API may grow later pass through
/// lowercased, as the original database labels are already self-describing.
fn roman_generation(label: &str) -> String {
    let label = label.to_lowercase();
    label
        .strip_prefix("generation-")
        .map(str::to_string)
        .unwrap_or(label)
}
