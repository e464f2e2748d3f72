use crate::model::Recipe;

/// True when the title, creator or any ingredient contains `query_lower`.
///
/// `query_lower` must already be lowercased.
pub fn matches(recipe: &Recipe, query_lower: &str) -> bool {
    recipe.title.to_lowercase().contains(query_lower)
        || recipe.creator.to_lowercase().contains(query_lower)
        || recipe
            .ingredients
            .iter()
            .any(|ingredient| ingredient.to_lowercase().contains(query_lower))
}

/// Case-insensitive substring search. Order is preserved.
pub fn run(recipes: &[Recipe], query: &str) -> Vec<Recipe> {
    let query_lower = query.to_lowercase();
    recipes
        .iter()
        .filter(|recipe| matches(recipe, &query_lower))
        .cloned()
        .collect()
}
