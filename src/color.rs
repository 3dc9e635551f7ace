//! Display colors per element type.

use crate::element::ElementType;
use serde::{Serialize, Serializer};
use std::fmt;

/// A packed `0xRRGGBB` color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u32);

impl Rgb {
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    pub fn to_hex(self) -> String {
        format!("#{:06X}", self.0 & 0x00FF_FFFF)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Used for names that are not element types.
pub const NEUTRAL_COLOR: Rgb = Rgb(0x68A090);

pub const fn color_for(element: ElementType) -> Rgb {
    match element {
        ElementType::Normal => Rgb(0xA8A77A),
        ElementType::Fire => Rgb(0xEE8130),
        ElementType::Water => Rgb(0x6390F0),
        ElementType::Electric => Rgb(0xF7D02C),
        ElementType::Grass => Rgb(0x7AC74C),
        ElementType::Ice => Rgb(0x96D9D6),
        ElementType::Fighting => Rgb(0xC22E28),
        ElementType::Poison => Rgb(0xA33EA1),
        ElementType::Ground => Rgb(0xE2BF65),
        ElementType::Flying => Rgb(0xA98FF3),
        ElementType::Psychic => Rgb(0xF95587),
        ElementType::Bug => Rgb(0xA6B91A),
        ElementType::Rock => Rgb(0xB6A136),
        ElementType::Ghost => Rgb(0x735797),
        ElementType::Dragon => Rgb(0x6F35FC),
        ElementType::Dark => Rgb(0x705746),
        ElementType::Steel => Rgb(0xB7B7CE),
        ElementType::Fairy => Rgb(0xD685AD),
    }
}

/// Lookup by raw upstream name; names that do not parse get [`NEUTRAL_COLOR`].
pub fn color_for_name(name: &str) -> Rgb {
    name.parse::<ElementType>()
        .map(color_for)
        .unwrap_or(NEUTRAL_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_type_has_its_own_color() {
        let mut seen = std::collections::HashSet::new();
        for element in ElementType::ALL {
            let color = color_for(element);
            assert_ne!(color, NEUTRAL_COLOR, "{element} uses the neutral color");
            assert!(seen.insert(color), "{element} shares a color");
        }
    }

    #[test]
    fn name_lookup_agrees_with_enum_lookup() {
        for element in ElementType::ALL {
            assert_eq!(color_for_name(element.as_str()), color_for(element));
        }
        assert_eq!(color_for_name(" Dragon "), color_for(ElementType::Dragon));
    }

    #[test]
    fn unknown_names_fall_back_to_neutral() {
        assert_eq!(color_for_name("shadow"), NEUTRAL_COLOR);
        assert_eq!(color_for_name("FIRE"), Rgb(0xEE8130));
    }

    #[test]
    fn hex_and_channels() {
        let fire = color_for(ElementType::Fire);
        assert_eq!(fire.to_hex(), "#EE8130");
        assert_eq!((fire.red(), fire.green(), fire.blue()), (0xEE, 0x81, 0x30));
        assert_eq!(Rgb(0x0000FF).to_string(), "#0000FF");
    }
}
