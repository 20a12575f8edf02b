use crate::model::{CatalogError, Meal, MealRaw};
use crate::normalizer::normalize_all;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Catalog bundled into the binary; the same data file the product page
/// imports at build time.
pub const DEFAULT_CATALOG: &str = include_str!("../data/meals.json");

/// Loads and normalizes the bundled catalog.
pub fn load_default() -> Result<Vec<Meal>, CatalogError> {
    parse_catalog(DEFAULT_CATALOG)
}

/// Loads and normalizes a catalog from a JSON file.
pub fn load_from_file(path: &Path) -> Result<Vec<Meal>, CatalogError> {
    let content = fs::read_to_string(path)?;
    parse_catalog(&content)
}

fn parse_catalog(json: &str) -> Result<Vec<Meal>, CatalogError> {
    let raws: Vec<MealRaw> = serde_json::from_str(json)?;
    Ok(normalize_all(&raws))
}

/// Distinct filter options across a catalog, sorted.
#[derive(Debug, Default)]
pub struct FilterOptions {
    pub proteins: Vec<String>,
    pub diets: Vec<String>,
    pub methods: Vec<String>,
    pub allergens: Vec<String>,
}

/// Collects the selectable values for each filter. The synthetic
/// `one-pot` token is offered as a separate flag, not a method choice.
pub fn filter_options(meals: &[Meal]) -> FilterOptions {
    let mut proteins = BTreeSet::new();
    let mut diets = BTreeSet::new();
    let mut methods = BTreeSet::new();
    let mut allergens = BTreeSet::new();
    for meal in meals {
        proteins.extend(meal.protein.iter().cloned());
        diets.extend(meal.diet.iter().cloned());
        methods.extend(meal.methods.iter().cloned());
        allergens.extend(meal.allergens.iter().cloned());
    }
    methods.remove("one-pot");
    FilterOptions {
        proteins: proteins.into_iter().collect(),
        diets: diets.into_iter().collect(),
        methods: methods.into_iter().collect(),
        allergens: allergens.into_iter().collect(),
    }
}
