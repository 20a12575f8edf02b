//! Dinner roller core: loads a static meal catalog, normalizes loosely
//! shaped records into a canonical form, filters them by user-chosen
//! criteria, and draws one matching meal uniformly at random.

pub mod catalog;
pub mod filter;
pub mod model;
pub mod normalizer;
pub mod selector;
pub mod utils;

pub use filter::{FilterCriteria, TimeBucket};
pub use model::{CatalogError, Meal, MealRaw};
pub use normalizer::{normalize_all, normalize_meal, normalize_method, parse_duration};
pub use selector::{Roller, select_random};
