//! Creature detail records.
//!
//! These types represent the JSON returned by the pokedex detail endpoint
//! (`pokedex.php?pokemon=SHORTNAME`).

use serde::Deserialize;

/// Full detail record for one creature
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreatureDetail {
    /// Display name
    pub name: String,

    /// Lookup key, also the sprite filename stem
    pub shortname: String,

    /// Maximum health
    pub hp: u32,

    /// Image paths, relative to the pokedex base URL
    pub images: ImageSet,

    /// Type, weakness, and flavor text
    pub info: CreatureInfo,

    /// Up to 4 moves
    #[serde(default)]
    pub moves: Vec<MoveEntry>,
}

/// Image paths for a creature's card
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageSet {
    pub photo: String,

    #[serde(rename = "typeIcon")]
    pub type_icon: String,

    #[serde(rename = "weaknessIcon")]
    pub weakness_icon: String,
}

/// Descriptive info for a creature's card
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreatureInfo {
    #[serde(rename = "type")]
    pub kind: String,

    pub weakness: String,

    pub description: String,
}

/// One move in a creature's move list
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MoveEntry {
    /// Display name, as shown on the card
    pub name: String,

    /// Damage points. Absent for status moves.
    #[serde(default)]
    pub dp: Option<u32>,

    /// Move type, used to pick the icon
    #[serde(rename = "type")]
    pub kind: String,
}
