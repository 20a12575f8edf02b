use crate::filter::FilterCriteria;
use crate::model::Meal;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Draws one meal uniformly at random.
///
/// Falls back to the unfiltered catalog when the candidate list is empty,
/// so filters that match nothing still produce a pick. `None` only when
/// both lists are empty.
pub fn select_random<R: Rng + ?Sized>(
    candidates: &[Meal],
    fallback: &[Meal],
    rng: &mut R,
) -> Option<Meal> {
    let pool = if candidates.is_empty() {
        fallback
    } else {
        candidates
    };
    pool.choose(rng).cloned()
}

/// Roll session owned by the shell: the normalized catalog, the active
/// criteria, and the current pick. The pick survives until the next roll
/// replaces it or a reset clears it.
#[derive(Debug)]
pub struct Roller {
    meals: Vec<Meal>,
    criteria: FilterCriteria,
    current: Option<Meal>,
}

impl Roller {
    pub fn new(meals: Vec<Meal>) -> Self {
        Self {
            meals,
            criteria: FilterCriteria::default(),
            current: None,
        }
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    /// Recomputes the candidate list from the active criteria.
    pub fn candidates(&self) -> Vec<Meal> {
        self.criteria.apply(&self.meals)
    }

    /// Rolls a new pick, replacing the previous one.
    pub fn roll<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&Meal> {
        let candidates = self.candidates();
        self.current = select_random(&candidates, &self.meals, rng);
        self.current.as_ref()
    }

    pub fn current(&self) -> Option<&Meal> {
        self.current.as_ref()
    }

    pub fn has_rolled(&self) -> bool {
        self.current.is_some()
    }

    /// Clears the criteria and the current pick.
    pub fn reset(&mut self) {
        self.criteria = FilterCriteria::default();
        self.current = None;
    }
}
