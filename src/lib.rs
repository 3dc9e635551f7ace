//! Defensive type matchups and form labels for creature database records.
//!
//! Both engines are pure: [`effectiveness`] works over the static [`chart`],
//! and [`forms`] turns raw form records into display-ready descriptors.

pub mod chart;
pub mod color;
pub mod effectiveness;
pub mod element;
pub mod error;
pub mod forms;
pub mod matrix;
pub mod model;

pub use crate::color::{color_for, Rgb};
pub use crate::effectiveness::{
    classify, compute_profile, DefendingTypes, EffectivenessProfile, Matchup,
    MatchupClassification,
};
pub use crate::element::ElementType;
pub use crate::error::{DefendingTypesError, FormError, ParseElementError};
pub use crate::forms::{FormDescriptor, FormKind, FormResolver};
pub use crate::model::RawFormRecord;

use crate::forms::{audit_default_forms, DefaultFormAudit};
use crate::model::FormsFile;
use anyhow::Context;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Filter for the binary's log output. `directives` uses `RUST_LOG` syntax;
/// when it is unset or blank everything at INFO and above is shown.
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    match directives.map(str::trim).filter(|d| !d.is_empty()) {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::new("info"),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Matchup { types: Vec<String> },
    Forms { input: PathBuf },
    Matrix { output: PathBuf },
}

#[derive(Debug, Clone)]
pub struct CliOptions {
    pub command: Command,
    pub pretty: bool,
}

/// Parses upstream type names into a defending combination.
pub fn parse_defenders(names: &[String]) -> anyhow::Result<DefendingTypes> {
    let types = names
        .iter()
        .map(|name| name.parse::<ElementType>())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(DefendingTypes::try_from(types.as_slice())?)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchupReport {
    pub defenders: String,
    pub profile: EffectivenessProfile,
    #[serde(flatten)]
    pub classification: MatchupClassification,
    pub colors: BTreeMap<ElementType, Rgb>,
}

pub fn matchup_report(defenders: DefendingTypes) -> MatchupReport {
    let profile = compute_profile(defenders);
    let classification = classify(&profile);
    let colors = defenders.iter().map(|t| (t, color_for(t))).collect();
    MatchupReport {
        defenders: defenders.label(),
        profile,
        classification,
        colors,
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormsReport {
    pub forms: Vec<FormDescriptor>,
    pub default_index: Option<usize>,
}

pub fn load_forms(path: &Path) -> anyhow::Result<Vec<RawFormRecord>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read forms file at {}", path.display()))?;
    let parsed: FormsFile = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse JSON from {}", path.display()))?;
    Ok(parsed.into_records())
}

pub fn forms_report(records: &[RawFormRecord]) -> anyhow::Result<FormsReport> {
    let forms = forms::resolve_all(records)?;
    let default_index = match audit_default_forms(&forms) {
        DefaultFormAudit::Single(idx) => Some(idx),
        DefaultFormAudit::Missing | DefaultFormAudit::Ambiguous(_) => None,
    };
    Ok(FormsReport {
        forms,
        default_index,
    })
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(text)
}

pub fn run(opts: CliOptions) -> anyhow::Result<()> {
    match opts.command {
        Command::Matchup { types } => {
            let defenders = parse_defenders(&types)
                .with_context(|| format!("Invalid defending types {types:?}"))?;
            println!("{}", to_json(&matchup_report(defenders), opts.pretty)?);
        }
        Command::Forms { input } => {
            let records = load_forms(&input)?;
            let report = forms_report(&records)
                .with_context(|| format!("Failed to resolve forms from {}", input.display()))?;
            println!("{}", to_json(&report, opts.pretty)?);
        }
        Command::Matrix { output } => {
            let matrix = matrix::compute_matrix();
            matrix::write_csv(&matrix, &output)
                .with_context(|| format!("Failed to write matrix to {}", output.display()))?;
            println!(
                "Wrote {}x{} matrix to {}",
                matrix.len(),
                ElementType::COUNT,
                output.display()
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    fn enabled_under(filter: EnvFilter, level: Level) -> bool {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::sink)
            .finish();
        tracing::subscriber::with_default(subscriber, || match level {
            Level::DEBUG => tracing::enabled!(Level::DEBUG),
            Level::INFO => tracing::enabled!(Level::INFO),
            _ => tracing::enabled!(Level::WARN),
        })
    }

    #[test]
    fn log_filter_defaults_to_info() {
        assert!(enabled_under(log_filter(None), Level::INFO));
        assert!(!enabled_under(log_filter(None), Level::DEBUG));
        assert!(!enabled_under(log_filter(Some("  ")), Level::DEBUG));
    }

    #[test]
    fn log_filter_honours_debug_directive() {
        assert!(enabled_under(log_filter(Some("debug")), Level::DEBUG));
    }

    #[test]
    fn log_filter_can_raise_the_floor() {
        assert!(!enabled_under(log_filter(Some("warn")), Level::INFO));
        assert!(enabled_under(log_filter(Some("warn")), Level::WARN));
    }
}
