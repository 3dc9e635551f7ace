use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One alternate form as extracted from the upstream species payload.
///
/// Field names follow the mapping layer (`internalName`, `isDefaultForm`, ...)
/// but the raw upstream spellings (`name`, `is_default`, `is_mega`) are
/// accepted too. Anything else is kept in `extras`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFormRecord {
    #[serde(alias = "pokemon_id", alias = "id")]
    pub pokemon_id: u32,
    #[serde(alias = "internal_name", alias = "name")]
    pub internal_name: String,
    #[serde(default, alias = "localized_full_name", alias = "localizedName")]
    pub localized_full_name: Option<String>,
    #[serde(default, alias = "is_default_form", alias = "is_default")]
    pub is_default_form: bool,
    #[serde(default, alias = "is_mega_form", alias = "is_mega")]
    pub is_mega_form: bool,
    #[serde(flatten, default)]
    pub extras: HashMap<String, serde_json::Value>,
}

impl RawFormRecord {
    pub fn new(pokemon_id: u32, internal_name: impl Into<String>) -> Self {
        Self {
            pokemon_id,
            internal_name: internal_name.into(),
            localized_full_name: None,
            is_default_form: false,
            is_mega_form: false,
            extras: HashMap::new(),
        }
    }

    pub fn with_localized_name(mut self, name: impl Into<String>) -> Self {
        self.localized_full_name = Some(name.into());
        self
    }

    pub fn default_form(mut self, is_default: bool) -> Self {
        self.is_default_form = is_default;
        self
    }

    pub fn mega(mut self, is_mega: bool) -> Self {
        self.is_mega_form = is_mega;
        self
    }
}

/// A form list file: either a bare array or a species object with `forms`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum FormsFile {
    List(Vec<RawFormRecord>),
    Species {
        forms: Vec<RawFormRecord>,
        #[serde(flatten, default)]
        extras: HashMap<String, serde_json::Value>,
    },
}

impl FormsFile {
    pub fn into_records(self) -> Vec<RawFormRecord> {
        match self {
            FormsFile::List(records) => records,
            FormsFile::Species { forms, .. } => forms,
        }
    }
}
