//! Map untyped API records into strict internal types
//!
//! Every optional field of the upstream JSON is an `Option` here, and the
//! defaulting rules are applied once, in [`map_creature`]:
//!
//! | field          | source                         | fallback    |
//! |----------------|--------------------------------|-------------|
//! | id             | `id`                           | `0`         |
//! | name           | `name`                         | `""`        |
//! | front_sprite   | `sprites.front_default`        | `""`        |
//! | back_sprite    | `sprites.back_default`         | `""`        |
//! | hp / attack    | `stats[stat.name].base_stat`   | `0`         |
//! | type_name      | `types[0].type.name`           | `"unknown"` |

use crate::core::types::{Creature, TypeMember};
use serde::{Deserialize, Serialize};

pub const UNKNOWN_TYPE: &str = "unknown";

/// by-id resource as returned by the API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCreature {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub sprites: Option<RawSprites>,
    pub stats: Option<Vec<RawStat>>,
    pub types: Option<Vec<RawTypeSlot>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSprites {
    pub front_default: Option<String>,
    pub back_default: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawStat {
    pub base_stat: Option<i64>,
    pub stat: Option<NamedResource>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTypeSlot {
    #[serde(rename = "type")]
    pub kind: Option<NamedResource>,
}

/// `{name, url}` pair used all over the API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: Option<String>,
    pub url: Option<String>,
}

/// by-type resource as returned by the API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTypeListing {
    pub pokemon: Option<Vec<RawTypeEntry>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTypeEntry {
    pub pokemon: Option<NamedResource>,
}

/// Look up a base stat by name, falling back to 0
///
/// Negative values clamp to 0.
pub fn stat_value(raw: &RawCreature, stat_name: &str) -> u32 {
    raw.stats
        .iter()
        .flatten()
        .find(|s| {
            s.stat
                .as_ref()
                .and_then(|r| r.name.as_deref())
                .is_some_and(|n| n == stat_name)
        })
        .and_then(|s| s.base_stat)
        .map(clamp_non_negative)
        .unwrap_or(0)
}

/// Build a [`Creature`] from a raw record. Never fails.
pub fn map_creature(raw: &RawCreature) -> Creature {
    let sprites = raw.sprites.clone().unwrap_or_default();
    let type_name = raw
        .types
        .as_ref()
        .and_then(|types| types.first())
        .and_then(|slot| slot.kind.as_ref())
        .and_then(|kind| kind.name.clone())
        .unwrap_or_else(|| UNKNOWN_TYPE.to_string());

    Creature {
        id: raw.id.map(clamp_non_negative).unwrap_or(0),
        name: raw.name.clone().unwrap_or_default(),
        front_sprite: sprites.front_default.unwrap_or_default(),
        back_sprite: sprites.back_default.unwrap_or_default(),
        hp: stat_value(raw, "hp"),
        attack: stat_value(raw, "attack"),
        type_name,
    }
}

/// Flatten a by-type listing into `{name, url}` members
///
/// Entries missing either field keep an empty string; callers decide what to
/// drop.
pub fn map_type_members(raw: &RawTypeListing) -> Vec<TypeMember> {
    raw.pokemon
        .iter()
        .flatten()
        .filter_map(|entry| entry.pokemon.as_ref())
        .map(|res| TypeMember {
            name: res.name.clone().unwrap_or_default(),
            url: res.url.clone().unwrap_or_default(),
        })
        .collect()
}

fn clamp_non_negative(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}
