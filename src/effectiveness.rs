//! Defensive matchup profiles.
//!
//! A profile is built by multiplying the chart rows of every defending type,
//! so double weaknesses reach 4.0, double resistances 0.25, and any immunity
//! forces the entry to 0.0.

use crate::chart;
use crate::element::ElementType;
use crate::error::DefendingTypesError;
use serde::Serialize;

/// One or two defending types. Duplicates collapse to a single type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DefendingTypes {
    primary: ElementType,
    secondary: Option<ElementType>,
}

impl DefendingTypes {
    pub fn single(element: ElementType) -> Self {
        Self {
            primary: element,
            secondary: None,
        }
    }

    pub fn dual(primary: ElementType, secondary: ElementType) -> Self {
        Self {
            primary,
            secondary: (secondary != primary).then_some(secondary),
        }
    }

    pub fn primary(&self) -> ElementType {
        self.primary
    }

    pub fn secondary(&self) -> Option<ElementType> {
        self.secondary
    }

    pub fn iter(&self) -> impl Iterator<Item = ElementType> {
        std::iter::once(self.primary).chain(self.secondary)
    }

    /// `fire/flying`-style label.
    pub fn label(&self) -> String {
        match self.secondary {
            Some(second) => format!("{}/{}", self.primary, second),
            None => self.primary.to_string(),
        }
    }
}

impl TryFrom<&[ElementType]> for DefendingTypes {
    type Error = DefendingTypesError;

    fn try_from(types: &[ElementType]) -> Result<Self, Self::Error> {
        match types {
            [] => Err(DefendingTypesError::Empty),
            [only] => Ok(Self::single(*only)),
            [first, second] => Ok(Self::dual(*first, *second)),
            more => Err(DefendingTypesError::TooMany(more.len())),
        }
    }
}

/// Combined multiplier for every attacking type, indexed canonically.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectivenessProfile {
    multipliers: [f32; ElementType::COUNT],
}

impl EffectivenessProfile {
    pub fn get(&self, attacker: ElementType) -> f32 {
        self.multipliers[attacker.index()]
    }

    /// `(attacker, multiplier)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (ElementType, f32)> + '_ {
        ElementType::ALL
            .iter()
            .map(move |element| (*element, self.multipliers[element.index()]))
    }

    pub fn as_array(&self) -> &[f32; ElementType::COUNT] {
        &self.multipliers
    }
}

impl Serialize for EffectivenessProfile {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(ElementType::COUNT))?;
        for (element, mult) in self.iter() {
            map.serialize_entry(element.as_str(), &mult)?;
        }
        map.end()
    }
}

pub fn compute_profile(defenders: DefendingTypes) -> EffectivenessProfile {
    let mut multipliers = [1.0f32; ElementType::COUNT];
    for defender in defenders.iter() {
        for (attacker, mult) in chart::row(defender) {
            multipliers[attacker.index()] *= mult;
        }
    }
    EffectivenessProfile { multipliers }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Matchup {
    pub element: ElementType,
    pub multiplier: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MatchupClassification {
    /// Multiplier >= 2.0, strongest first.
    pub weaknesses: Vec<Matchup>,
    /// Multiplier in (0, 1), strongest resistance first.
    pub resistances: Vec<Matchup>,
    pub immunities: Vec<ElementType>,
}

impl MatchupClassification {
    /// Attackers at exactly 1.0, in canonical order.
    pub fn neutral(&self) -> Vec<ElementType> {
        ElementType::ALL
            .iter()
            .copied()
            .filter(|element| {
                !self.weaknesses.iter().any(|m| m.element == *element)
                    && !self.resistances.iter().any(|m| m.element == *element)
                    && !self.immunities.contains(element)
            })
            .collect()
    }

    pub fn weakness_to(&self, element: ElementType) -> Option<f32> {
        self.weaknesses
            .iter()
            .find(|m| m.element == element)
            .map(|m| m.multiplier)
    }

    pub fn resistance_to(&self, element: ElementType) -> Option<f32> {
        self.resistances
            .iter()
            .find(|m| m.element == element)
            .map(|m| m.multiplier)
    }
}

pub fn classify(profile: &EffectivenessProfile) -> MatchupClassification {
    let mut weaknesses = Vec::new();
    let mut resistances = Vec::new();
    let mut immunities = Vec::new();
    for (element, multiplier) in profile.iter() {
        let entry = Matchup {
            element,
            multiplier,
        };
        if multiplier == 0.0 {
            immunities.push(element);
        } else if multiplier >= 2.0 {
            weaknesses.push(entry);
        } else if multiplier < 1.0 {
            resistances.push(entry);
        }
    }
    // Stable sorts keep canonical order among equal multipliers.
    weaknesses.sort_by(|a, b| b.multiplier.total_cmp(&a.multiplier));
    resistances.sort_by(|a, b| a.multiplier.total_cmp(&b.multiplier));
    MatchupClassification {
        weaknesses,
        resistances,
        immunities,
    }
}

/// Profile and classification in one step.
pub fn matchups_for(defenders: DefendingTypes) -> MatchupClassification {
    classify(&compute_profile(defenders))
}
