use clap::Parser;
use dinner_roller::catalog::{self, filter_options};
use dinner_roller::filter::{FilterCriteria, TimeBucket};
use dinner_roller::model::Meal;
use dinner_roller::normalizer::normalize_method;
use dinner_roller::selector::Roller;
use dinner_roller::utils::{canon_token, pretty_label};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, warn};

/// Rolls a random dinner idea from the meal catalog.
#[derive(Debug, Parser)]
#[command(name = "dinner-roller", version)]
struct Cli {
    /// Path to a meals JSON file (defaults to the bundled catalog).
    #[arg(long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Only meals with this protein.
    #[arg(long)]
    protein: Option<String>,

    /// Only meals with this diet tag (e.g. vegan, pescatarian).
    #[arg(long)]
    diet: Option<String>,

    /// Only meals using this cooking method; synonyms are accepted.
    #[arg(long)]
    method: Option<String>,

    /// Skip meals containing this allergen.
    #[arg(long)]
    exclude_allergen: Option<String>,

    /// Only one-pot meals.
    #[arg(long)]
    one_pot: bool,

    /// Total-time bucket.
    #[arg(long, value_enum)]
    time: Option<TimeBucket>,

    /// Number of meals to roll.
    #[arg(long, default_value_t = 1)]
    rolls: u32,

    /// RNG seed for reproducible rolls.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the available filter options and exit.
    #[arg(long)]
    list_options: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let meals = match &cli.data {
        Some(path) => catalog::load_from_file(path),
        None => catalog::load_default(),
    };
    let meals = match meals {
        Ok(meals) => meals,
        Err(e) => {
            error!("Catalog load error: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!("Loaded {} meals", meals.len());

    if cli.list_options {
        print_options(&meals);
        return ExitCode::SUCCESS;
    }

    let criteria = FilterCriteria {
        protein: cli.protein.as_deref().map(canon_token),
        diet: cli.diet.as_deref().map(canon_token),
        method: cli.method.as_deref().map(normalize_method),
        exclude_allergen: cli.exclude_allergen.as_deref().map(canon_token),
        one_pot_only: cli.one_pot,
        time: cli.time,
    };

    let mut roller = Roller::new(meals);
    roller.set_criteria(criteria);

    let candidates = roller.candidates();
    info!("{} meals match the filters", candidates.len());
    if candidates.is_empty() && !roller.criteria().is_empty() {
        warn!("No meals match the current filters; rolling from the full catalog");
    }

    let mut rng: Box<dyn RngCore> = match cli.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::rng()),
    };

    for _ in 0..cli.rolls {
        match roller.roll(&mut *rng) {
            Some(meal) => print_meal(meal),
            None => {
                warn!("The catalog is empty; nothing to roll");
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}

fn print_options(meals: &[Meal]) {
    let options = filter_options(meals);
    let show = |label: &str, values: &[String]| {
        let labels: Vec<String> = values.iter().map(|v| pretty_label(v)).collect();
        println!("{label}: {}", labels.join(", "));
    };
    show("Proteins", &options.proteins);
    show("Diets", &options.diets);
    show("Methods", &options.methods);
    show("Allergens", &options.allergens);
    println!("Time buckets: under-20, 20-40, over-40");
}

fn print_meal(meal: &Meal) {
    println!("\n🍽  {}", meal.name);
    if meal.time_minutes > 0 {
        println!("   Total time: {} min", meal.time_minutes);
    }
    if !meal.servings.is_empty() {
        println!("   Servings: {}", meal.servings);
    }

    let mut pills: Vec<String> = Vec::new();
    pills.extend(meal.protein.iter().map(|t| pretty_label(t)));
    pills.extend(meal.diet.iter().map(|t| pretty_label(t)));
    pills.extend(meal.methods.iter().map(|t| pretty_label(t)));
    if !pills.is_empty() {
        println!("   Tags: {}", pills.join(" · "));
    }
    if !meal.allergens.is_empty() {
        let list: Vec<String> = meal.allergens.iter().map(|t| pretty_label(t)).collect();
        println!("   Contains: {}", list.join(", "));
    }

    if !meal.ingredients.is_empty() {
        println!("   Ingredients:");
        for item in &meal.ingredients {
            println!("     - {item}");
        }
    }
    if !meal.instructions.is_empty() {
        println!("   Instructions:");
        for (i, step) in meal.instructions.iter().enumerate() {
            println!("     {}. {step}", i + 1);
        }
    }
    if !meal.pro_tips.is_empty() {
        println!("   Pro tips:");
        for tip in &meal.pro_tips {
            println!("     - {tip}");
        }
    }
    if !meal.variations.is_empty() {
        println!("   Variations:");
        for variation in &meal.variations {
            println!("     - {variation}");
        }
    }
}
