//! Free-text recipe ingestion.
//!
//! The create form hands over loosely structured text. This module turns it
//! into a [`Recipe`]:
//!
//! 1. **Ingredients**: one per line; blank lines dropped; a leading numeric
//!    quantity token is stripped (`"2 eggs"` → `"eggs"`); everything lowercased.
//! 2. **Cooking time**: the label is checked for `"15"`, `"20"`, `"30"`,
//!    `"1 hour"` in that order; 15 minutes when nothing matches.
//! 3. **Meal time**: `Lunch` if the title mentions lunch, burger or pasta;
//!    otherwise `Dinner` if it mentions dinner or steak; otherwise `Breakfast`.
//! 4. **Diets**: `Vegetarian` unless an ingredient mentions meat, beef, chicken
//!    or pork.
//! 5. **Id**: `created-<unix millis>-<8 base-36 chars>`. Not checked against
//!    existing ids.

use chrono::Utc;
use uuid::Uuid;

use crate::filters::{Diet, MealSlot};
use crate::model::{Recipe, RecipeImage};

pub const CREATED_ID_PREFIX: &str = "created-";
pub const DEFAULT_CREATOR: &str = "You";
pub const DEFAULT_IMAGE_ASSET: &str = "avocado-toast.png";
pub const DEFAULT_COOKING_MINUTES: u32 = 15;

const COOKING_TIME_MARKERS: [(&str, u32); 4] = [("15", 15), ("20", 20), ("30", 30), ("1 hour", 60)];
const LUNCH_WORDS: [&str; 3] = ["lunch", "burger", "pasta"];
const DINNER_WORDS: [&str; 2] = ["dinner", "steak"];
const MEAT_WORDS: [&str; 4] = ["meat", "beef", "chicken", "pork"];

/// What the create form submits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeDraft {
    pub title: String,
    /// Newline-delimited, quantities allowed.
    pub ingredients: String,
    /// Kept on the draft only; recipes do not model steps.
    pub steps: String,
    /// Label such as `"20 min"` or `"1 hour"`.
    pub cooking_time: String,
    /// Kept on the draft only.
    pub difficulty: String,
    /// Local image reference picked by the user.
    pub image: Option<String>,
}

impl RecipeDraft {
    pub fn new(title: impl Into<String>, ingredients: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ingredients: ingredients.into(),
            ..Default::default()
        }
    }

    pub fn with_cooking_time(mut self, label: impl Into<String>) -> Self {
        self.cooking_time = label.into();
        self
    }

    pub fn with_steps(mut self, steps: impl Into<String>) -> Self {
        self.steps = steps.into();
        self
    }

    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = difficulty.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// Build a new recipe from a draft.
pub fn run(draft: &RecipeDraft) -> Recipe {
    let ingredients = normalize_ingredients(&draft.ingredients);
    let diets = infer_diets(&ingredients)
        .into_iter()
        .map(|d| d.label().to_string())
        .collect();

    let image = match &draft.image {
        Some(uri) => RecipeImage::uri(uri.clone()),
        None => RecipeImage::asset(DEFAULT_IMAGE_ASSET),
    };

    Recipe {
        id: generate_id(),
        image,
        title: draft.title.clone(),
        creator: DEFAULT_CREATOR.to_string(),
        likes: "0".to_string(),
        rating: "5".to_string(),
        cooking_time: cooking_time_minutes(&draft.cooking_time),
        meal_time: vec![infer_meal_time(&draft.title).label().to_string()],
        diets,
        ingredients,
    }
}

pub fn normalize_ingredients(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(strip_quantity)
        .collect()
}

fn strip_quantity(line: &str) -> String {
    match line.split_once(' ') {
        Some((first, rest)) if is_number(first) => rest.to_lowercase(),
        _ => line.to_lowercase(),
    }
}

/// A quantity token: a signed decimal with optional exponent (`2`, `-1.5`,
/// `.5`, `1e2`), a signed `Infinity`, or an unsigned `0x`/`0o`/`0b` integer.
/// Words that only `f64::from_str` treats as numbers (`inf`, `nan`) are not.
fn is_number(token: &str) -> bool {
    let unsigned = token.strip_prefix(['+', '-']).unwrap_or(token);
    if unsigned == "Infinity" {
        return true;
    }
    if is_radix_integer(token) {
        return true;
    }
    unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.') && token.parse::<f64>().is_ok()
}

fn is_radix_integer(token: &str) -> bool {
    let radix = match token.get(..2).map(str::to_ascii_lowercase).as_deref() {
        Some("0x") => 16,
        Some("0o") => 8,
        Some("0b") => 2,
        _ => return false,
    };
    let digits = &token[2..];
    !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix))
}

pub fn cooking_time_minutes(label: &str) -> u32 {
    COOKING_TIME_MARKERS
        .iter()
        .find(|(marker, _)| label.contains(marker))
        .map(|(_, minutes)| *minutes)
        .unwrap_or(DEFAULT_COOKING_MINUTES)
}

pub fn infer_meal_time(title: &str) -> MealSlot {
    let title = title.to_lowercase();
    if LUNCH_WORDS.iter().any(|w| title.contains(w)) {
        MealSlot::Lunch
    } else if DINNER_WORDS.iter().any(|w| title.contains(w)) {
        MealSlot::Dinner
    } else {
        MealSlot::Breakfast
    }
}

pub fn infer_diets(ingredients: &[String]) -> Vec<Diet> {
    let has_meat = ingredients
        .iter()
        .any(|item| MEAT_WORDS.iter().any(|w| item.contains(w)));
    if has_meat {
        Vec::new()
    } else {
        vec![Diet::Vegetarian]
    }
}

/// `created-<unix millis>-<suffix>` with an 8 character base-36 random suffix.
pub fn generate_id() -> String {
    format!(
        "{}{}-{}",
        CREATED_ID_PREFIX,
        Utc::now().timestamp_millis(),
        base36_suffix(Uuid::new_v4().as_u128(), 8)
    )
}

fn base36_suffix(mut n: u128, len: usize) -> String {
    const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        out.push(ALPHABET[(n % 36) as usize] as char);
        n /= 36;
    }
    out
}
