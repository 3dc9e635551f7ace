//! Defensive type chart.
//!
//! Rows are keyed by the defending type and list only the attacking types
//! whose multiplier is not 1.0. Anything omitted is neutral.

use crate::element::ElementType;
use ElementType::*;

pub type ChartRow = &'static [(ElementType, f32)];

/// Non-neutral multipliers taken by `defender`.
pub fn row(defender: ElementType) -> ChartRow {
    match defender {
        Normal => &[(Fighting, 2.0), (Ghost, 0.0)],
        Fire => &[
            (Water, 2.0),
            (Ground, 2.0),
            (Rock, 2.0),
            (Fire, 0.5),
            (Grass, 0.5),
            (Ice, 0.5),
            (Bug, 0.5),
            (Steel, 0.5),
            (Fairy, 0.5),
        ],
        Water => &[
            (Electric, 2.0),
            (Grass, 2.0),
            (Fire, 0.5),
            (Water, 0.5),
            (Ice, 0.5),
            (Steel, 0.5),
        ],
        Electric => &[
            (Ground, 2.0),
            (Electric, 0.5),
            (Flying, 0.5),
            (Steel, 0.5),
        ],
        Grass => &[
            (Fire, 2.0),
            (Ice, 2.0),
            (Poison, 2.0),
            (Flying, 2.0),
            (Bug, 2.0),
            (Water, 0.5),
            (Electric, 0.5),
            (Grass, 0.5),
            (Ground, 0.5),
        ],
        Ice => &[
            (Fire, 2.0),
            (Fighting, 2.0),
            (Rock, 2.0),
            (Steel, 2.0),
            (Ice, 0.5),
        ],
        Fighting => &[
            (Flying, 2.0),
            (Psychic, 2.0),
            (Fairy, 2.0),
            (Bug, 0.5),
            (Rock, 0.5),
            (Dark, 0.5),
        ],
        Poison => &[
            (Ground, 2.0),
            (Psychic, 2.0),
            (Grass, 0.5),
            (Fighting, 0.5),
            (Poison, 0.5),
            (Bug, 0.5),
            (Fairy, 0.5),
        ],
        Ground => &[
            (Water, 2.0),
            (Grass, 2.0),
            (Ice, 2.0),
            (Poison, 0.5),
            (Rock, 0.5),
            (Electric, 0.0),
        ],
        Flying => &[
            (Electric, 2.0),
            (Ice, 2.0),
            (Rock, 2.0),
            (Grass, 0.5),
            (Fighting, 0.5),
            (Bug, 0.5),
            (Ground, 0.0),
        ],
        Psychic => &[
            (Bug, 2.0),
            (Ghost, 2.0),
            (Dark, 2.0),
            (Fighting, 0.5),
            (Psychic, 0.5),
        ],
        Bug => &[
            (Fire, 2.0),
            (Flying, 2.0),
            (Rock, 2.0),
            (Grass, 0.5),
            (Fighting, 0.5),
            (Ground, 0.5),
        ],
        Rock => &[
            (Water, 2.0),
            (Grass, 2.0),
            (Fighting, 2.0),
            (Ground, 2.0),
            (Steel, 2.0),
            (Normal, 0.5),
            (Fire, 0.5),
            (Poison, 0.5),
            (Flying, 0.5),
        ],
        Ghost => &[
            (Ghost, 2.0),
            (Dark, 2.0),
            (Poison, 0.5),
            (Bug, 0.5),
            (Normal, 0.0),
            (Fighting, 0.0),
        ],
        Dragon => &[
            (Ice, 2.0),
            (Dragon, 2.0),
            (Fairy, 2.0),
            (Fire, 0.5),
            (Water, 0.5),
            (Electric, 0.5),
            (Grass, 0.5),
        ],
        Dark => &[
            (Fighting, 2.0),
            (Bug, 2.0),
            (Fairy, 2.0),
            (Ghost, 0.5),
            (Dark, 0.5),
            (Psychic, 0.0),
        ],
        Steel => &[
            (Fire, 2.0),
            (Fighting, 2.0),
            (Ground, 2.0),
            (Normal, 0.5),
            (Grass, 0.5),
            (Ice, 0.5),
            (Flying, 0.5),
            (Psychic, 0.5),
            (Bug, 0.5),
            (Rock, 0.5),
            (Dragon, 0.5),
            (Steel, 0.5),
            (Fairy, 0.5),
            (Poison, 0.0),
        ],
        Fairy => &[
            (Poison, 2.0),
            (Steel, 2.0),
            (Fighting, 0.5),
            (Bug, 0.5),
            (Dark, 0.5),
            (Dragon, 0.0),
        ],
    }
}

/// Single-type multiplier; omitted chart entries are neutral.
pub fn multiplier(defender: ElementType, attacker: ElementType) -> f32 {
    row(defender)
        .iter()
        .find(|(atk, _)| *atk == attacker)
        .map(|(_, mult)| *mult)
        .unwrap_or(1.0)
}
