//! Typed filters.
//!
//! The screens toggle filters as `(category, value)` string pairs
//! ([`FilterOption`]). Those pairs are converted once, here, into [`Filter`]
//! values carrying already-typed payloads, so the engine never re-parses labels
//! such as `"< 20 min"`.
//!
//! [`FilterSet`] groups a list of filters by category. Each category is
//! evaluated on its own and the categories are combined with AND:
//!
//! | Category      | Within the category                                   |
//! |---------------|-------------------------------------------------------|
//! | `cookingTime` | OR: cooking time is below at least one threshold      |
//! | `mealTime`    | OR: recipe has at least one of the selected slots     |
//! | `diets`       | AND: recipe carries every selected diet               |
//! | `exclude`     | reject if any excluded ingredient is present          |
//! | `sort`        | accepted, no filtering effect                         |
//! | anything else | accepted, no filtering effect                         |

use std::fmt;

use crate::model::{FilterOption, Recipe};

pub const COOKING_TIME: &str = "cookingTime";
pub const MEAL_TIME: &str = "mealTime";
pub const DIETS: &str = "diets";
pub const EXCLUDE: &str = "exclude";
pub const SORT: &str = "sort";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    /// Any other label; matched verbatim.
    Other(String),
}

impl MealSlot {
    pub fn parse(label: &str) -> Self {
        match label {
            "Breakfast" => MealSlot::Breakfast,
            "Lunch" => MealSlot::Lunch,
            "Dinner" => MealSlot::Dinner,
            other => MealSlot::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
            MealSlot::Other(label) => label,
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Diet {
    Vegetarian,
    Vegan,
    GlutenFree,
    DairyFree,
    /// Any other label; matched verbatim.
    Other(String),
}

impl Diet {
    pub fn parse(label: &str) -> Self {
        match label {
            "Vegetarian" => Diet::Vegetarian,
            "Vegan" => Diet::Vegan,
            "Gluten-free" => Diet::GlutenFree,
            "Dairy-free" => Diet::DairyFree,
            other => Diet::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Diet::Vegetarian => "Vegetarian",
            Diet::Vegan => "Vegan",
            Diet::GlutenFree => "Gluten-free",
            Diet::DairyFree => "Dairy-free",
            Diet::Other(label) => label,
        }
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single filter criterion with a typed payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Passes recipes whose cooking time is strictly below `under_minutes`.
    CookingTime { under_minutes: u32 },
    MealTime(MealSlot),
    Diet(Diet),
    /// Lowercased ingredient name.
    Exclude(String),
    /// Reordering hint. Carried through, never filters.
    Sort(String),
    Unrecognized { category: String, value: String },
}

impl Filter {
    /// Convert a UI filter option into its typed form.
    pub fn from_option(option: &FilterOption) -> Self {
        let value = option.value.as_str();
        match option.category.as_str() {
            COOKING_TIME => Filter::CookingTime {
                under_minutes: threshold_minutes(value),
            },
            MEAL_TIME => Filter::MealTime(MealSlot::parse(value)),
            DIETS => Filter::Diet(Diet::parse(value)),
            EXCLUDE => Filter::Exclude(value.to_lowercase()),
            SORT => Filter::Sort(value.to_string()),
            other => Filter::Unrecognized {
                category: other.to_string(),
                value: value.to_string(),
            },
        }
    }

    pub fn category(&self) -> &str {
        match self {
            Filter::CookingTime { .. } => COOKING_TIME,
            Filter::MealTime(_) => MEAL_TIME,
            Filter::Diet(_) => DIETS,
            Filter::Exclude(_) => EXCLUDE,
            Filter::Sort(_) => SORT,
            Filter::Unrecognized { category, .. } => category,
        }
    }
}

/// Extract the minute threshold from a label such as `"< 20 min"`.
///
/// Every digit in the label is concatenated, so `"15-20 min"` reads as 1520.
/// A label without digits yields 0, which no recipe can be below.
pub fn threshold_minutes(label: &str) -> u32 {
    label
        .chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0u32, |acc, d| acc.saturating_mul(10).saturating_add(d))
}

/// Filters grouped by category, ready to test recipes against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    under_minutes: Vec<u32>,
    meal_slots: Vec<MealSlot>,
    diets: Vec<Diet>,
    excluded: Vec<String>,
}

impl FilterSet {
    pub fn new(filters: &[Filter]) -> Self {
        let mut set = FilterSet::default();
        for filter in filters {
            match filter {
                Filter::CookingTime { under_minutes } => set.under_minutes.push(*under_minutes),
                Filter::MealTime(slot) => set.meal_slots.push(slot.clone()),
                Filter::Diet(diet) => set.diets.push(diet.clone()),
                Filter::Exclude(ingredient) => set.excluded.push(ingredient.clone()),
                Filter::Sort(_) | Filter::Unrecognized { .. } => {}
            }
        }
        set
    }

    pub fn from_options(options: &[FilterOption]) -> Self {
        let filters: Vec<Filter> = options.iter().map(Filter::from_option).collect();
        Self::new(&filters)
    }

    /// True when no category would reject anything.
    pub fn is_empty(&self) -> bool {
        self.under_minutes.is_empty()
            && self.meal_slots.is_empty()
            && self.diets.is_empty()
            && self.excluded.is_empty()
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.cooking_time_ok(recipe)
            && self.meal_time_ok(recipe)
            && self.diets_ok(recipe)
            && !self.has_excluded(recipe)
    }

    fn cooking_time_ok(&self, recipe: &Recipe) -> bool {
        self.under_minutes.is_empty()
            || self
                .under_minutes
                .iter()
                .any(|limit| recipe.cooking_time < *limit)
    }

    fn meal_time_ok(&self, recipe: &Recipe) -> bool {
        self.meal_slots.is_empty()
            || self
                .meal_slots
                .iter()
                .any(|slot| recipe.meal_time.iter().any(|m| m == slot.label()))
    }

    fn diets_ok(&self, recipe: &Recipe) -> bool {
        self.diets
            .iter()
            .all(|diet| recipe.diets.iter().any(|d| d == diet.label()))
    }

    fn has_excluded(&self, recipe: &Recipe) -> bool {
        self.excluded
            .iter()
            .any(|ingredient| recipe.ingredients.contains(ingredient))
    }
}
