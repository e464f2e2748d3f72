use crate::filters::{Filter, FilterSet};
use crate::model::{FilterOption, Recipe};

/// Keep the recipes that pass every filter category, preserving input order.
///
/// An empty filter list returns the input unchanged.
pub fn run(recipes: &[Recipe], filters: &[Filter]) -> Vec<Recipe> {
    if filters.is_empty() {
        return recipes.to_vec();
    }

    let set = FilterSet::new(filters);
    recipes
        .iter()
        .filter(|recipe| set.matches(recipe))
        .cloned()
        .collect()
}

/// Same as [`run`], starting from the UI's string options.
pub fn by_options(recipes: &[Recipe], options: &[FilterOption]) -> Vec<Recipe> {
    let filters: Vec<Filter> = options.iter().map(Filter::from_option).collect();
    run(recipes, &filters)
}
