//! Display labels and classification for alternate forms.
//!
//! Upstream localized names are populated unevenly across species, so a label
//! is picked by a cascade of naming rules. Each rule looks at the record on its
//! own and either proposes a label or passes; the first proposal wins.

use crate::error::FormError;
use crate::model::RawFormRecord;
use serde::Serialize;

pub const DEFAULT_LABEL: &str = "Normal";
pub const GIGANTAMAX_LABEL: &str = "Gigantamax";
pub const REGIONAL_MARKERS: [&str; 4] = ["alola", "galar", "hisui", "paldea"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    Default,
    Mega,
    Regional,
    Gigantamax,
    Other,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDescriptor {
    pub pokemon_id: u32,
    pub internal_name: String,
    pub display_label: String,
    pub is_default: bool,
    pub is_mega: bool,
    pub kind: FormKind,
}

/// A slug split into its base species name and the dash-separated form words.
#[derive(Debug, PartialEq, Eq)]
struct Slug<'a> {
    base: &'a str,
    form_words: Vec<&'a str>,
}

impl<'a> Slug<'a> {
    fn parse(internal_name: &'a str) -> Self {
        let mut parts = internal_name.split('-');
        let base = parts.next().unwrap_or_default();
        Slug {
            base,
            form_words: parts.filter(|w| !w.is_empty()).collect(),
        }
    }

    fn form_token(&self) -> Option<String> {
        if self.form_words.is_empty() {
            None
        } else {
            Some(self.form_words.join("-").to_ascii_lowercase())
        }
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn title_words(words: &[&str]) -> String {
    words
        .iter()
        .filter(|w| !w.is_empty())
        .map(|w| title_case(w))
        .collect::<Vec<_>>()
        .join(" ")
}

/// "Mega" once at the front, whatever the slug spelled. A `mega` glued to the
/// front of any word (`megax`) is split off too.
fn mega_label(words: &[&str]) -> String {
    let mut rest = Vec::new();
    for word in words {
        if word.eq_ignore_ascii_case("mega") {
            continue;
        }
        match word.get(..4) {
            Some(prefix) if prefix.eq_ignore_ascii_case("mega") => rest.push(&word[4..]),
            _ => rest.push(*word),
        }
    }
    let tail = title_words(&rest);
    if tail.is_empty() {
        "Mega".to_string()
    } else {
        format!("Mega {tail}")
    }
}

/// A plain "Normal" says nothing about a non-default form.
fn informative(record: &RawFormRecord, label: String) -> Option<String> {
    if label.trim().is_empty() || (!record.is_default_form && label == DEFAULT_LABEL) {
        None
    } else {
        Some(label)
    }
}

/// A named step in the labelling cascade.
#[derive(Clone, Copy)]
pub struct NamingRule {
    pub name: &'static str,
    pub apply: fn(&RawFormRecord) -> Option<String>,
}

impl std::fmt::Debug for NamingRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("NamingRule").field(&self.name).finish()
    }
}

/// The upstream localized name, unless it only echoes the base species.
fn localized_name_label(record: &RawFormRecord) -> Option<String> {
    let name = record.localized_full_name.as_deref()?;
    if name.trim().is_empty() {
        return None;
    }
    let base = Slug::parse(&record.internal_name).base;
    if name.to_lowercase() == base.to_lowercase() {
        return None;
    }
    informative(record, name.to_string())
}

fn slug_label(record: &RawFormRecord) -> Option<String> {
    let slug = Slug::parse(&record.internal_name);
    let token = slug.form_token()?;
    let label = if REGIONAL_MARKERS.contains(&token.as_str()) {
        format!("{} Form", title_words(&slug.form_words))
    } else if token.starts_with("mega") {
        mega_label(&slug.form_words)
    } else if token == "gmax" {
        GIGANTAMAX_LABEL.to_string()
    } else {
        title_words(&slug.form_words)
    };
    informative(record, label)
}

/// Non-default forms nothing else could name: "<words> Form".
fn generic_form_label(record: &RawFormRecord) -> Option<String> {
    if record.is_default_form {
        return None;
    }
    let slug = Slug::parse(&record.internal_name);
    let words = if slug.form_words.is_empty() {
        vec![slug.base]
    } else {
        slug.form_words
    };
    let label = title_words(&words);
    if label.is_empty() {
        None
    } else {
        Some(format!("{label} Form"))
    }
}

fn default_label(_record: &RawFormRecord) -> Option<String> {
    Some(DEFAULT_LABEL.to_string())
}

pub const LOCALIZED_NAME: NamingRule = NamingRule {
    name: "localized-name",
    apply: localized_name_label,
};
pub const SLUG: NamingRule = NamingRule {
    name: "slug",
    apply: slug_label,
};
pub const GENERIC_FORM: NamingRule = NamingRule {
    name: "generic-form",
    apply: generic_form_label,
};
pub const DEFAULT: NamingRule = NamingRule {
    name: "default",
    apply: default_label,
};

pub const STANDARD_RULES: [NamingRule; 4] = [LOCALIZED_NAME, SLUG, GENERIC_FORM, DEFAULT];

fn classify_form(record: &RawFormRecord) -> FormKind {
    let slug = Slug::parse(&record.internal_name);
    let has_word = |needle: &str| slug.form_words.iter().any(|w| w.eq_ignore_ascii_case(needle));
    let mega_token = slug
        .form_token()
        .is_some_and(|token| token.starts_with("mega"));

    if record.is_default_form {
        FormKind::Default
    } else if record.is_mega_form || mega_token {
        FormKind::Mega
    } else if has_word("gmax") {
        FormKind::Gigantamax
    } else if REGIONAL_MARKERS.iter().any(|marker| has_word(*marker)) {
        FormKind::Regional
    } else {
        FormKind::Other
    }
}

/// Runs a cascade of [`NamingRule`]s over raw form records.
#[derive(Clone, Copy, Debug)]
pub struct FormResolver<'r> {
    rules: &'r [NamingRule],
}

impl Default for FormResolver<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

impl FormResolver<'static> {
    pub fn standard() -> Self {
        FormResolver {
            rules: &STANDARD_RULES,
        }
    }
}

impl<'r> FormResolver<'r> {
    /// Rules are tried in slice order.
    pub const fn with_rules(rules: &'r [NamingRule]) -> Self {
        FormResolver { rules }
    }

    pub fn rules(&self) -> &'r [NamingRule] {
        self.rules
    }

    pub fn resolve(&self, record: &RawFormRecord) -> Result<FormDescriptor, FormError> {
        if record.internal_name.trim().is_empty() {
            return Err(FormError::EmptyInternalName {
                pokemon_id: record.pokemon_id,
            });
        }
        let display_label = self
            .rules
            .iter()
            .find_map(|rule| {
                let label = (rule.apply)(record)?;
                tracing::debug!(
                    pokemon_id = record.pokemon_id,
                    rule = rule.name,
                    label = %label,
                    "form label resolved"
                );
                Some(label)
            })
            .unwrap_or_else(|| DEFAULT_LABEL.to_string());

        Ok(FormDescriptor {
            pokemon_id: record.pokemon_id,
            internal_name: record.internal_name.clone(),
            display_label,
            is_default: record.is_default_form,
            is_mega: record.is_mega_form,
            kind: classify_form(record),
        })
    }

    /// One descriptor per record, in input order. Stops at the first malformed record.
    pub fn resolve_all(&self, records: &[RawFormRecord]) -> Result<Vec<FormDescriptor>, FormError> {
        records.iter().map(|record| self.resolve(record)).collect()
    }
}

pub fn resolve(record: &RawFormRecord) -> Result<FormDescriptor, FormError> {
    FormResolver::default().resolve(record)
}

pub fn resolve_all(records: &[RawFormRecord]) -> Result<Vec<FormDescriptor>, FormError> {
    FormResolver::default().resolve_all(records)
}

/// Outcome of checking a species' form list for its default entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DefaultFormAudit {
    /// Index of the single default form.
    Single(usize),
    Missing,
    /// Pokemon ids of every form flagged as default.
    Ambiguous(Vec<u32>),
}

/// Reports, never repairs, the default flags of one species' forms.
pub fn audit_default_forms(forms: &[FormDescriptor]) -> DefaultFormAudit {
    let defaults: Vec<usize> = forms
        .iter()
        .enumerate()
        .filter(|(_, form)| form.is_default)
        .map(|(idx, _)| idx)
        .collect();
    match defaults.as_slice() {
        [only] => DefaultFormAudit::Single(*only),
        [] => {
            if !forms.is_empty() {
                tracing::warn!(
                    first = %forms[0].internal_name,
                    count = forms.len(),
                    "form list has no default form"
                );
            }
            DefaultFormAudit::Missing
        }
        many => {
            let ids: Vec<u32> = many.iter().map(|idx| forms[*idx].pokemon_id).collect();
            tracing::warn!(?ids, "form list has more than one default form");
            DefaultFormAudit::Ambiguous(ids)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> RawFormRecord {
        RawFormRecord::new(1, name)
    }

    #[test]
    fn slug_splits_on_first_dash() {
        let slug = Slug::parse("charizard-mega-x");
        assert_eq!(slug.base, "charizard");
        assert_eq!(slug.form_words, vec!["mega", "x"]);
        assert_eq!(slug.form_token().as_deref(), Some("mega-x"));
        assert_eq!(Slug::parse("pikachu").form_token(), None);
        assert_eq!(Slug::parse("mr-").form_words, Vec::<&str>::new());
    }

    #[test]
    fn title_case_keeps_the_tail() {
        assert_eq!(title_case("alola"), "Alola");
        assert_eq!(title_case("eTernal"), "ETernal");
        assert_eq!(title_case(""), "");
        assert_eq!(title_words(&["rapid", "strike"]), "Rapid Strike");
    }

    #[test]
    fn mega_prefix_is_never_doubled() {
        assert_eq!(mega_label(&["mega"]), "Mega");
        assert_eq!(mega_label(&["mega", "x"]), "Mega X");
        assert_eq!(mega_label(&["megay"]), "Mega Y");
        assert_eq!(mega_label(&["mega", "mega", "z"]), "Mega Z");
        assert_eq!(mega_label(&["mega", "megax"]), "Mega X");
        assert_eq!(mega_label(&["mega", "MEGAy"]), "Mega Y");
    }

    #[test]
    fn localized_rule_skips_echoed_base_name() {
        let echo = record("pikachu").with_localized_name("PIKACHU");
        assert_eq!(localized_name_label(&echo), None);
        let blank = record("raichu-alola").with_localized_name("  ");
        assert_eq!(localized_name_label(&blank), None);
        let named = record("raichu-alola").with_localized_name("Alolan Raichu");
        assert_eq!(localized_name_label(&named).as_deref(), Some("Alolan Raichu"));
    }

    #[test]
    fn slug_rule_special_cases() {
        assert_eq!(slug_label(&record("vulpix-alola")).as_deref(), Some("Alola Form"));
        assert_eq!(slug_label(&record("slowking-GALAR")).as_deref(), Some("GALAR Form"));
        assert_eq!(slug_label(&record("venusaur-gmax")).as_deref(), Some("Gigantamax"));
        assert_eq!(slug_label(&record("darmanitan-galar-zen")).as_deref(), Some("Galar Zen"));
        assert_eq!(slug_label(&record("pikachu")), None);
    }

    #[test]
    fn slug_rule_passes_on_normal_for_non_default() {
        assert_eq!(slug_label(&record("castform-normal")), None);
        let default = record("castform-normal").default_form(true);
        assert_eq!(slug_label(&default).as_deref(), Some("Normal"));
    }

    #[test]
    fn generic_rule_only_names_non_default_forms() {
        assert_eq!(
            generic_form_label(&record("castform-normal")).as_deref(),
            Some("Normal Form")
        );
        assert_eq!(
            generic_form_label(&record("unown")).as_deref(),
            Some("Unown Form")
        );
        assert_eq!(generic_form_label(&record("unown").default_form(true)), None);
    }

    #[test]
    fn classification_precedence() {
        assert_eq!(classify_form(&record("raichu").default_form(true)), FormKind::Default);
        assert_eq!(classify_form(&record("charizard-mega-x")), FormKind::Mega);
        assert_eq!(classify_form(&record("beedrill").mega(true)), FormKind::Mega);
        assert_eq!(classify_form(&record("charizard-gmax")), FormKind::Gigantamax);
        assert_eq!(classify_form(&record("darmanitan-galar-zen")), FormKind::Regional);
        assert_eq!(classify_form(&record("pikachu-rock-star")), FormKind::Other);
    }

    #[test]
    fn custom_rule_order_is_honoured() {
        let rules = [SLUG, LOCALIZED_NAME, DEFAULT];
        let resolver = FormResolver::with_rules(&rules);
        let form = record("raichu-alola").with_localized_name("Alolan Raichu");
        assert_eq!(resolver.resolve(&form).unwrap().display_label, "Alola Form");
        assert_eq!(resolver.rules().len(), 3);
    }

    #[test]
    fn default_resolver_runs_standard_rules() {
        let rules = FormResolver::default().rules();
        let names: Vec<&str> = rules.iter().map(|rule| rule.name).collect();
        assert_eq!(names, vec!["localized-name", "slug", "generic-form", "default"]);
    }

    #[test]
    fn empty_rule_list_falls_back_to_default_label() {
        let resolver = FormResolver::with_rules(&[]);
        let form = resolver.resolve(&record("raichu-alola")).unwrap();
        assert_eq!(form.display_label, DEFAULT_LABEL);
    }
}
