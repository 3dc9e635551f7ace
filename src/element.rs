//! The closed set of element types.
//!
//! Upstream records carry type names as loose strings. They are turned into
//! [`ElementType`] here, once, so the rest of the crate never sees a name it
//! cannot index.

use crate::error::ParseElementError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declaration order is the canonical enumeration order used for tie-breaks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
#[repr(u8)]
pub enum ElementType {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

static NAMES: phf::Map<&'static str, ElementType> = phf::phf_map! {
    "normal" => ElementType::Normal,
    "fire" => ElementType::Fire,
    "water" => ElementType::Water,
    "electric" => ElementType::Electric,
    "grass" => ElementType::Grass,
    "ice" => ElementType::Ice,
    "fighting" => ElementType::Fighting,
    "poison" => ElementType::Poison,
    "ground" => ElementType::Ground,
    "flying" => ElementType::Flying,
    "psychic" => ElementType::Psychic,
    "bug" => ElementType::Bug,
    "rock" => ElementType::Rock,
    "ghost" => ElementType::Ghost,
    "dragon" => ElementType::Dragon,
    "dark" => ElementType::Dark,
    "steel" => ElementType::Steel,
    "fairy" => ElementType::Fairy,
};

impl ElementType {
    pub const COUNT: usize = 18;

    pub const ALL: [ElementType; ElementType::COUNT] = [
        ElementType::Normal,
        ElementType::Fire,
        ElementType::Water,
        ElementType::Electric,
        ElementType::Grass,
        ElementType::Ice,
        ElementType::Fighting,
        ElementType::Poison,
        ElementType::Ground,
        ElementType::Flying,
        ElementType::Psychic,
        ElementType::Bug,
        ElementType::Rock,
        ElementType::Ghost,
        ElementType::Dragon,
        ElementType::Dark,
        ElementType::Steel,
        ElementType::Fairy,
    ];

    /// Position in the canonical order, usable as an array index.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase upstream name, e.g. `"fire"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            ElementType::Normal => "normal",
            ElementType::Fire => "fire",
            ElementType::Water => "water",
            ElementType::Electric => "electric",
            ElementType::Grass => "grass",
            ElementType::Ice => "ice",
            ElementType::Fighting => "fighting",
            ElementType::Poison => "poison",
            ElementType::Ground => "ground",
            ElementType::Flying => "flying",
            ElementType::Psychic => "psychic",
            ElementType::Bug => "bug",
            ElementType::Rock => "rock",
            ElementType::Ghost => "ghost",
            ElementType::Dragon => "dragon",
            ElementType::Dark => "dark",
            ElementType::Steel => "steel",
            ElementType::Fairy => "fairy",
        }
    }
}

impl FromStr for ElementType {
    type Err = ParseElementError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        NAMES.get(key.as_str()).copied().ok_or_else(|| ParseElementError {
            name: s.to_string(),
        })
    }
}

impl TryFrom<String> for ElementType {
    type Error = ParseElementError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
