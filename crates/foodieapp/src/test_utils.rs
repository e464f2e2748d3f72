use crate::model::{Recipe, RecipeImage};
use crate::store::fs_backend::FsBackend;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    // Keeps the directory alive until the test is done
    pub _temp_dir: TempDir,
    pub backend: FsBackend,
    pub root: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        let backend = FsBackend::new(root.clone());
        Self {
            _temp_dir: temp_dir,
            backend,
            root,
        }
    }
}

/// A plain breakfast recipe; tests adjust the fields they care about.
pub fn recipe(id: &str, title: &str) -> Recipe {
    Recipe {
        id: id.to_string(),
        image: RecipeImage::asset("toast-egg.png"),
        title: title.to_string(),
        creator: "Mary".to_string(),
        likes: "10".to_string(),
        rating: "4".to_string(),
        cooking_time: 10,
        meal_time: vec!["Breakfast".to_string()],
        diets: vec!["Vegetarian".to_string()],
        ingredients: vec!["bread".to_string()],
    }
}

pub fn with_ingredients(mut recipe: Recipe, ingredients: &[&str]) -> Recipe {
    recipe.ingredients = ingredients.iter().map(|s| s.to_string()).collect();
    recipe
}

pub fn ids(recipes: &[Recipe]) -> Vec<&str> {
    recipes.iter().map(|r| r.id.as_str()).collect()
}
