// Core structs: MealRaw, Meal
use serde::Deserialize;
use std::collections::BTreeSet;
use thiserror::Error;

/// Fields the catalog stores either as a bare string or as a list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

/// A meal record as it appears in the catalog file. No shape guarantees:
/// every field is optional, scalars may stand in for lists, and several
/// fields go by more than one name across catalog revisions.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MealRaw {
    #[serde(default)]
    pub name: String,
    pub protein: Option<OneOrMany>,
    #[serde(alias = "dietary")]
    pub diet: Option<OneOrMany>,
    #[serde(alias = "method")]
    pub methods: Option<OneOrMany>,
    pub allergens: Option<OneOrMany>,
    #[serde(default)]
    pub is_one_pot: bool,
    pub ingredients: Option<OneOrMany>,
    pub instructions: Option<OneOrMany>,
    pub pro_tips: Option<OneOrMany>,
    pub variations: Option<OneOrMany>,
    pub servings: Option<String>,
    pub portion_size: Option<String>,
    pub prep_time: Option<String>,
    pub cook_time: Option<String>,
    pub total_time: Option<String>,
}

/// Canonical meal shape. Built once at load time, never mutated.
///
/// Tag sets hold lowercase trimmed tokens; `protein` never contains a diet
/// term (those are reclassified into `diet` during normalization). The
/// list fields are always present, possibly empty, so consumers never
/// special-case absence.
#[derive(Debug, Clone, PartialEq)]
pub struct Meal {
    pub name: String,
    pub protein: BTreeSet<String>,
    pub diet: BTreeSet<String>,
    pub methods: BTreeSet<String>,
    pub allergens: BTreeSet<String>,
    pub is_one_pot: bool,
    pub time_minutes: u32,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub pro_tips: Vec<String>,
    pub variations: Vec<String>,
    pub servings: String,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("catalog is not valid meal JSON: {0}")]
    Json(#[from] serde_json::Error),
}
