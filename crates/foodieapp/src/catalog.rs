//! Built-in recipe catalog.
//!
//! The catalog ships inside the library and never changes at runtime. It is
//! parsed once, on first use.

use crate::error::Result;
use crate::model::Recipe;
use once_cell::sync::Lazy;
use tracing::error;

const BUILTIN_JSON: &str = include_str!("../data/recipes.json");

static BUILTIN: Lazy<Vec<Recipe>> = Lazy::new(|| {
    from_json(BUILTIN_JSON).unwrap_or_else(|err| {
        error!(error = %err, "built-in catalog is malformed");
        Vec::new()
    })
});

/// The built-in recipes, in catalog order.
pub fn builtin() -> Vec<Recipe> {
    BUILTIN.clone()
}

/// Parse a catalog from a JSON array of recipes.
pub fn from_json(json: &str) -> Result<Vec<Recipe>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_parses() {
        let recipes = from_json(BUILTIN_JSON).unwrap();
        assert!(!recipes.is_empty());
        assert_eq!(builtin(), recipes);
    }

    #[test]
    fn builtin_ids_are_unique_and_not_created() {
        let recipes = builtin();
        let unique: HashSet<&str> = recipes.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(unique.len(), recipes.len());
        assert!(recipes.iter().all(|r| !r.id.starts_with("created-")));
    }

    #[test]
    fn builtin_ingredients_are_lowercase() {
        for recipe in builtin() {
            for ingredient in &recipe.ingredients {
                assert_eq!(ingredient, &ingredient.to_lowercase(), "{}", recipe.id);
            }
        }
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(from_json("{").is_err());
    }
}
