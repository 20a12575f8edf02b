use crate::model::Meal;
use clap::ValueEnum;

/// Total-time buckets offered by the filters.
///
/// Boundary convention: `20-40` is inclusive on both ends, `under-20` is
/// strictly below 20, `over-40` strictly above 40.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TimeBucket {
    #[value(name = "under-20")]
    Under20,
    #[value(name = "20-40")]
    From20To40,
    #[value(name = "over-40")]
    Over40,
}

impl TimeBucket {
    pub fn contains(self, minutes: u32) -> bool {
        match self {
            TimeBucket::Under20 => minutes < 20,
            TimeBucket::From20To40 => (20..=40).contains(&minutes),
            TimeBucket::Over40 => minutes > 40,
        }
    }
}

/// One set of filter selections. `None`/`false` means "no constraint";
/// active constraints combine with logical AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub protein: Option<String>,
    pub diet: Option<String>,
    pub method: Option<String>,
    pub exclude_allergen: Option<String>,
    pub one_pot_only: bool,
    pub time: Option<TimeBucket>,
}

impl FilterCriteria {
    /// True when no constraint is active.
    pub fn is_empty(&self) -> bool {
        self.protein.is_none()
            && self.diet.is_none()
            && self.method.is_none()
            && self.exclude_allergen.is_none()
            && !self.one_pot_only
            && self.time.is_none()
    }

    pub fn matches(&self, meal: &Meal) -> bool {
        if let Some(protein) = &self.protein {
            if !meal.protein.contains(protein) {
                return false;
            }
        }
        if let Some(diet) = &self.diet {
            if !meal.diet.contains(diet) {
                return false;
            }
        }
        if let Some(method) = &self.method {
            // "one-pot" also matches through the flag, not just the token.
            let via_flag = method.as_str() == "one-pot" && meal.is_one_pot;
            if !meal.methods.contains(method) && !via_flag {
                return false;
            }
        }
        if let Some(allergen) = &self.exclude_allergen {
            if meal.allergens.contains(allergen) {
                return false;
            }
        }
        if self.one_pot_only && !meal.is_one_pot {
            return false;
        }
        if let Some(bucket) = self.time {
            if !bucket.contains(meal.time_minutes) {
                return false;
            }
        }
        true
    }

    /// Computes the candidate list. Pure: no I/O, no mutation, the same
    /// criteria and catalog always yield the same subset.
    pub fn apply(&self, meals: &[Meal]) -> Vec<Meal> {
        meals.iter().filter(|m| self.matches(m)).cloned().collect()
    }
}
