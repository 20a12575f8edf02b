use crate::model::{Meal, MealRaw, OneOrMany};
use crate::utils::canon_token;
use regex::Regex;
use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

/// Protein tags that are really diet tags; catalog entries mix them up.
const PROTEIN_DIET_TERMS: [&str; 3] = ["vegetarian", "vegan", "pescatarian"];

/// Single source of truth for cooking-method equivalence. Every raw
/// synonym collapses into one canonical token; unknown tokens pass
/// through lowercased.
static METHOD_SYNONYMS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("stove top", "stove-top"),
        ("stovetop", "stove-top"),
        ("pan-fry", "stove-top"),
        ("pan fry", "stove-top"),
        ("skillet", "stove-top"),
        ("saute", "stove-top"),
        ("sauté", "stove-top"),
        ("oven", "oven-bake"),
        ("bake", "oven-bake"),
        ("baked", "oven-bake"),
        ("baking", "oven-bake"),
        ("roast", "oven-bake"),
        ("roasted", "oven-bake"),
        ("sheet pan", "oven-bake"),
        ("bbq", "grill"),
        ("barbecue", "grill"),
        ("grilled", "grill"),
        ("grilling", "grill"),
        ("smoker", "grill"),
        ("crockpot", "slow cooker"),
        ("crock pot", "slow cooker"),
        ("slow-cooker", "slow cooker"),
        ("slow cooking", "slow cooker"),
        ("instant-pot", "instant pot"),
        ("pressure cooker", "instant pot"),
        ("pressure-cooker", "instant pot"),
        ("air-fryer", "air fryer"),
        ("airfryer", "air fryer"),
        ("air frying", "air fryer"),
        ("one pot", "one-pot"),
        ("onepot", "one-pot"),
        ("single pot", "one-pot"),
    ])
});

static HOURS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*(?:hours?|hrs?|h\b)").unwrap());
static RANGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*[–-]\s*(\d+)\s*(?:minutes?|mins?|m\b)").unwrap());
static MINUTES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*(?:minutes?|mins?|m\b)").unwrap());

/// Coerces an optional scalar-or-list field into a plain vector.
/// Total over any input shape: absent -> empty, scalar -> one element.
pub fn to_vec(value: Option<&OneOrMany>) -> Vec<String> {
    match value {
        None => Vec::new(),
        Some(OneOrMany::One(s)) => vec![s.clone()],
        Some(OneOrMany::Many(list)) => list.clone(),
    }
}

/// Maps a free-text cooking-method synonym onto its canonical token.
pub fn normalize_method(token: &str) -> String {
    let token = canon_token(token);
    match METHOD_SYNONYMS.get(token.as_str()) {
        Some(canonical) => (*canonical).to_string(),
        None => token,
    }
}

/// Best-effort minute count from free-text durations.
///
/// `"1 hour 15 minutes"` -> 75; a range like `"8-10 min"` returns its
/// upper bound and overrides any hour component already counted.
/// Unparseable text yields 0; this never fails.
pub fn parse_duration(text: &str) -> u32 {
    let text = text.to_lowercase();
    let mut minutes = 0;
    if let Some(caps) = HOURS_RE.captures(&text) {
        minutes += caps[1].parse::<u32>().unwrap_or(0) * 60;
    }
    if let Some(caps) = RANGE_RE.captures(&text) {
        return caps[2].parse::<u32>().unwrap_or(0);
    }
    if let Some(caps) = MINUTES_RE.captures(&text) {
        minutes += caps[1].parse::<u32>().unwrap_or(0);
    }
    minutes
}

/// Builds a canonical `Meal` from a raw catalog record.
pub fn normalize_meal(raw: &MealRaw) -> Meal {
    let mut protein = token_set(raw.protein.as_ref());
    let mut diet = token_set(raw.diet.as_ref());
    let allergens = token_set(raw.allergens.as_ref());

    // Diet terms sometimes arrive tagged as proteins; move them over.
    for term in PROTEIN_DIET_TERMS {
        if protein.remove(term) {
            diet.insert(term.to_string());
        }
    }

    let mut methods: BTreeSet<String> = to_vec(raw.methods.as_ref())
        .iter()
        .map(|m| normalize_method(m))
        .filter(|m| !m.is_empty())
        .collect();

    let is_one_pot = raw.is_one_pot || methods.contains("one-pot");
    if is_one_pot {
        methods.insert("one-pot".to_string());
    }

    // Explicit total_time wins when it carries a usable number; otherwise
    // total time is prep + cook.
    let time_minutes = match raw.total_time.as_deref().map(parse_duration) {
        Some(total) if total > 0 => total,
        _ => {
            parse_duration(raw.prep_time.as_deref().unwrap_or(""))
                + parse_duration(raw.cook_time.as_deref().unwrap_or(""))
        }
    };

    Meal {
        name: raw.name.clone(),
        protein,
        diet,
        methods,
        allergens,
        is_one_pot,
        time_minutes,
        ingredients: to_vec(raw.ingredients.as_ref()),
        instructions: to_vec(raw.instructions.as_ref()),
        pro_tips: to_vec(raw.pro_tips.as_ref()),
        variations: to_vec(raw.variations.as_ref()),
        servings: raw
            .servings
            .clone()
            .or_else(|| raw.portion_size.clone())
            .unwrap_or_default(),
    }
}

/// Normalizes a whole raw catalog.
pub fn normalize_all(raws: &[MealRaw]) -> Vec<Meal> {
    raws.iter().map(normalize_meal).collect()
}

fn token_set(value: Option<&OneOrMany>) -> BTreeSet<String> {
    to_vec(value)
        .iter()
        .map(|s| canon_token(s))
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: &str) -> MealRaw {
        MealRaw {
            name: name.to_string(),
            ..MealRaw::default()
        }
    }

    #[test]
    fn to_vec_coerces_every_shape() {
        assert_eq!(to_vec(None), Vec::<String>::new());
        assert_eq!(
            to_vec(Some(&OneOrMany::One("chicken".into()))),
            vec!["chicken".to_string()]
        );
        assert_eq!(
            to_vec(Some(&OneOrMany::Many(vec!["a".into(), "b".into()]))),
            vec!["a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn every_method_synonym_maps_to_its_canonical_token() {
        let expected = [
            ("stove top", "stove-top"),
            ("stovetop", "stove-top"),
            ("pan-fry", "stove-top"),
            ("pan fry", "stove-top"),
            ("skillet", "stove-top"),
            ("saute", "stove-top"),
            ("sauté", "stove-top"),
            ("oven", "oven-bake"),
            ("bake", "oven-bake"),
            ("baked", "oven-bake"),
            ("baking", "oven-bake"),
            ("roast", "oven-bake"),
            ("roasted", "oven-bake"),
            ("sheet pan", "oven-bake"),
            ("bbq", "grill"),
            ("barbecue", "grill"),
            ("grilled", "grill"),
            ("grilling", "grill"),
            ("smoker", "grill"),
            ("crockpot", "slow cooker"),
            ("crock pot", "slow cooker"),
            ("slow-cooker", "slow cooker"),
            ("slow cooking", "slow cooker"),
            ("instant-pot", "instant pot"),
            ("pressure cooker", "instant pot"),
            ("pressure-cooker", "instant pot"),
            ("air-fryer", "air fryer"),
            ("airfryer", "air fryer"),
            ("air frying", "air fryer"),
            ("one pot", "one-pot"),
            ("onepot", "one-pot"),
            ("single pot", "one-pot"),
        ];
        for (synonym, canonical) in expected {
            assert_eq!(normalize_method(synonym), canonical, "synonym {synonym:?}");
        }
        // The table and the test must cover the same pairs.
        assert_eq!(expected.len(), METHOD_SYNONYMS.len());
    }

    #[test]
    fn unknown_method_passes_through_lowercased() {
        assert_eq!(normalize_method("  Wok "), "wok");
        assert_eq!(normalize_method("microwave"), "microwave");
    }

    #[test]
    fn parse_duration_fixtures() {
        assert_eq!(parse_duration("1 hour 15 minutes"), 75);
        assert_eq!(parse_duration("8–10 minutes"), 10);
        assert_eq!(parse_duration("8-10 minutes"), 10);
        assert_eq!(parse_duration("30 min"), 30);
        assert_eq!(parse_duration("2 hours"), 120);
        assert_eq!(parse_duration("45 mins"), 45);
        assert_eq!(parse_duration("no time given"), 0);
        assert_eq!(parse_duration(""), 0);
    }

    #[test]
    fn range_overrides_hour_component() {
        // The range upper bound wins outright, hours included.
        assert_eq!(parse_duration("1 hour, 8-10 minutes"), 10);
    }

    #[test]
    fn scalar_protein_becomes_a_one_element_set() {
        let mut m = raw("scalar");
        m.protein = Some(OneOrMany::One("Chicken".into()));
        let meal = normalize_meal(&m);
        assert!(meal.protein.contains("chicken"));
        assert_eq!(meal.protein.len(), 1);
    }

    #[test]
    fn missing_diet_field_yields_empty_set() {
        let meal = normalize_meal(&raw("bare"));
        assert!(meal.diet.is_empty());
        assert!(meal.ingredients.is_empty());
        assert!(meal.instructions.is_empty());
        assert!(meal.pro_tips.is_empty());
        assert!(meal.variations.is_empty());
    }

    #[test]
    fn diet_terms_move_from_protein_to_diet() {
        let mut m = raw("reclassify");
        m.protein = Some(OneOrMany::Many(vec!["Vegan".into(), "tofu".into()]));
        m.diet = Some(OneOrMany::Many(vec!["vegan".into()]));
        let meal = normalize_meal(&m);
        assert!(!meal.protein.contains("vegan"));
        assert!(meal.protein.contains("tofu"));
        // Union, de-duplicated.
        assert_eq!(meal.diet.iter().collect::<Vec<_>>(), vec!["vegan"]);
    }

    #[test]
    fn colliding_method_synonyms_deduplicate() {
        let mut m = raw("collide");
        m.methods = Some(OneOrMany::Many(vec!["stove top".into(), "skillet".into()]));
        let meal = normalize_meal(&m);
        assert_eq!(meal.methods.iter().collect::<Vec<_>>(), vec!["stove-top"]);
    }

    #[test]
    fn one_pot_flag_and_method_token_imply_each_other() {
        let mut flagged = raw("flagged");
        flagged.is_one_pot = true;
        let meal = normalize_meal(&flagged);
        assert!(meal.is_one_pot);
        assert!(meal.methods.contains("one-pot"));

        let mut tokened = raw("tokened");
        tokened.methods = Some(OneOrMany::One("single pot".into()));
        let meal = normalize_meal(&tokened);
        assert!(meal.is_one_pot);
        assert!(meal.methods.contains("one-pot"));
    }

    #[test]
    fn total_time_wins_over_prep_plus_cook() {
        let mut m = raw("timed");
        m.total_time = Some("25 minutes".into());
        m.prep_time = Some("10 min".into());
        m.cook_time = Some("30 min".into());
        assert_eq!(normalize_meal(&m).time_minutes, 25);

        // Unparseable total_time falls back to the sum.
        m.total_time = Some("quick".into());
        assert_eq!(normalize_meal(&m).time_minutes, 40);
    }

    #[test]
    fn servings_defaults_from_portion_size() {
        let mut m = raw("portions");
        m.portion_size = Some("6 bowls".into());
        assert_eq!(normalize_meal(&m).servings, "6 bowls");
        m.servings = Some("4".into());
        assert_eq!(normalize_meal(&m).servings, "4");
    }
}
