use anyhow::Result;
use colored::Colorize;
use foodieapp::model::{Recipe, RecipeImage};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const ID_WIDTH: usize = 12;
const TIME_WIDTH: usize = 8;
const MEAL_WIDTH: usize = 20;
const SAVED_MARKER: &str = "♥";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum MessageLevel {
    Info,
    Success,
    Warning,
}

pub(super) fn print_message(level: MessageLevel, content: &str) {
    match level {
        MessageLevel::Info => println!("{}", content.dimmed()),
        MessageLevel::Success => println!("{}", content.green()),
        MessageLevel::Warning => eprintln!("{}", content.yellow()),
    }
}

pub(super) fn print_json(recipes: &[Recipe]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(recipes)?);
    Ok(())
}

pub(super) fn print_recipes(recipes: &[Recipe], is_saved: impl Fn(&str) -> bool) {
    if recipes.is_empty() {
        println!("No recipes found.");
        return;
    }

    for recipe in recipes {
        let marker = if is_saved(&recipe.id) {
            format!("{} ", SAVED_MARKER)
        } else {
            "  ".to_string()
        };
        let id = pad_to_width(&truncate_to_width(&recipe.id, ID_WIDTH), ID_WIDTH);
        let time = format!("{:>width$}", format_minutes(recipe.cooking_time), width = TIME_WIDTH);
        let meals = pad_to_width(
            &truncate_to_width(&recipe.meal_time.join(", "), MEAL_WIDTH),
            MEAL_WIDTH,
        );

        let fixed = marker.width() + ID_WIDTH + 1 + MEAL_WIDTH + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let title_and_creator = format!("{} · {}", recipe.title, recipe.creator);
        let title = pad_to_width(&truncate_to_width(&title_and_creator, available), available);

        println!(
            "{}{} {}{}{}",
            marker.red(),
            id.yellow(),
            title,
            meals.dimmed(),
            time.dimmed()
        );
    }
}

pub(super) fn print_full_recipe(recipe: &Recipe, saved: bool) {
    let marker = if saved { SAVED_MARKER } else { "" };
    println!("{} {} {}", recipe.id.yellow(), recipe.title.bold(), marker.red());
    println!("--------------------------------");
    println!("{} {}", "By:".dimmed(), recipe.creator);
    println!(
        "{} {} likes, rated {}",
        "Rating:".dimmed(),
        recipe.likes,
        recipe.rating
    );
    println!("{} {}", "Time:".dimmed(), format_minutes(recipe.cooking_time));
    println!("{} {}", "Meal:".dimmed(), recipe.meal_time.join(", "));
    if !recipe.diets.is_empty() {
        println!("{} {}", "Diets:".dimmed(), recipe.diets.join(", "));
    }
    println!("{} {}", "Image:".dimmed(), describe_image(&recipe.image));
    println!();
    println!("{}", "Ingredients".bold());
    for ingredient in &recipe.ingredients {
        println!("  - {}", ingredient);
    }
}

fn describe_image(image: &RecipeImage) -> String {
    match image {
        RecipeImage::Uri { uri } => uri.clone(),
        RecipeImage::Asset(name) => format!("asset:{}", name),
    }
}

fn format_minutes(minutes: u32) -> String {
    if minutes >= 60 && minutes % 60 == 0 {
        format!("{} h", minutes / 60)
    } else {
        format!("{} min", minutes)
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}
