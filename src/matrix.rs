use crate::effectiveness::{compute_profile, DefendingTypes, EffectivenessProfile};
use crate::element::ElementType;
use rayon::prelude::*;

/// Every single type, then every unordered pair, both in canonical order.
pub fn defending_combinations() -> Vec<DefendingTypes> {
    let mut combos: Vec<DefendingTypes> = ElementType::ALL
        .iter()
        .map(|t| DefendingTypes::single(*t))
        .collect();
    for i in 0..ElementType::COUNT {
        for j in (i + 1)..ElementType::COUNT {
            combos.push(DefendingTypes::dual(ElementType::ALL[i], ElementType::ALL[j]));
        }
    }
    combos
}

#[derive(Clone, Debug, PartialEq)]
pub struct MatrixRow {
    pub defenders: DefendingTypes,
    pub profile: EffectivenessProfile,
}

pub fn compute_matrix() -> Vec<MatrixRow> {
    let combos = defending_combinations();
    let rows: Vec<MatrixRow> = combos
        .par_iter()
        .map(|defenders| MatrixRow {
            defenders: *defenders,
            profile: compute_profile(*defenders),
        })
        .collect();
    tracing::debug!(rows = rows.len(), "computed defensive matrix");
    rows
}

fn format_multiplier(value: f32) -> String {
    if value.fract() == 0.0 {
        return format!("{value:.0}");
    }
    format!("{value:.2}").trim_end_matches('0').to_string()
}

pub fn render_csv(matrix: &[MatrixRow]) -> String {
    let mut out = String::from("defenders");
    for attacker in ElementType::ALL {
        out.push(',');
        out.push_str(attacker.as_str());
    }
    for row in matrix {
        out.push('\n');
        out.push_str(&row.defenders.label());
        for value in row.profile.as_array() {
            out.push(',');
            out.push_str(&format_multiplier(*value));
        }
    }
    out
}

pub fn write_csv(matrix: &[MatrixRow], path: &std::path::Path) -> anyhow::Result<()> {
    std::fs::write(path, render_csv(matrix))?;
    Ok(())
}
