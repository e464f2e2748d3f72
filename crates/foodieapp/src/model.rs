//! # Domain Model
//!
//! The core records shared by every layer: [`Recipe`], [`RecipeImage`] and
//! [`FilterOption`].
//!
//! ## Wire Shape
//!
//! Recipes are persisted as JSON arrays in flat key/value slots. Field names are
//! camelCase (`cookingTime`, `mealTime`) so blobs written by earlier versions of
//! the app load unchanged:
//!
//! ```text
//! {
//!   "id": "created-1718000000000-k3j9x0qa",
//!   "image": { "uri": "file:///photos/toast.jpg" },
//!   "title": "Avocado Toast",
//!   "creator": "You",
//!   "likes": "0",
//!   "rating": "5",
//!   "cookingTime": 15,
//!   "mealTime": ["Breakfast"],
//!   "diets": ["Vegetarian"],
//!   "ingredients": ["bread", "avocado"]
//! }
//! ```
//!
//! `likes` and `rating` are display strings. Nothing in the core coerces them to
//! numbers or sorts on them.

use serde::{Deserialize, Serialize};

/// Image shown for a recipe. Opaque to the core; only the UI interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecipeImage {
    /// A local file or remote URI picked by the user.
    Uri { uri: String },
    /// A bundled asset name, e.g. `avocado-toast.png`.
    Asset(String),
}

impl RecipeImage {
    pub fn uri(uri: impl Into<String>) -> Self {
        RecipeImage::Uri { uri: uri.into() }
    }

    pub fn asset(name: impl Into<String>) -> Self {
        RecipeImage::Asset(name.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub image: RecipeImage,
    pub title: String,
    pub creator: String,
    pub likes: String,
    pub rating: String,
    /// Minutes.
    pub cooking_time: u32,
    pub meal_time: Vec<String>,
    pub diets: Vec<String>,
    /// Lowercase ingredient names, quantities stripped.
    pub ingredients: Vec<String>,
}

/// One active filter as the UI toggles it.
///
/// `selected` is always `true` while the option is in the active list; it is
/// kept so the record shape matches what the screens already hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub category: String,
    pub value: String,
    pub selected: bool,
}

impl FilterOption {
    pub fn new(category: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            value: value.into(),
            selected: true,
        }
    }

    pub fn is(&self, category: &str, value: &str) -> bool {
        self.category == category && self.value == value
    }
}
