use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "foodie", version)]
#[command(about = "Browse, filter, save and create recipes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding created and saved recipes
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Print recipes as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Filter as category=value, e.g. mealTime=Lunch or "cookingTime=< 20 min"
    #[arg(short, long = "filter", value_parser = parse_filter)]
    pub filters: Vec<(String, String)>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List recipes, optionally filtered
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// Search term
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Search titles, creators and ingredients
    Search {
        /// Search term
        query: String,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Show a recipe in full
    #[command(alias = "v")]
    Show {
        /// Recipe id
        id: String,
    },

    /// Save a recipe
    Save {
        /// Recipe id
        id: String,
    },

    /// Remove a recipe from the saved list
    Unsave {
        /// Recipe id
        id: String,
    },

    /// List saved recipes
    Saved,

    /// Create a recipe
    #[command(alias = "n")]
    Create {
        /// Recipe title
        #[arg(long)]
        title: String,

        /// Ingredients, one per line (use \n or repeat the flag)
        #[arg(long, required = true, num_args = 1..)]
        ingredients: Vec<String>,

        /// Preparation steps
        #[arg(long, default_value = "")]
        steps: String,

        /// Cooking time label, e.g. "20 min" or "1 hour"
        #[arg(long, default_value = "15 min")]
        cooking_time: String,

        /// Difficulty label
        #[arg(long, default_value = "Easy")]
        difficulty: String,

        /// Local image path or URI
        #[arg(long)]
        image: Option<String>,
    },
}

fn parse_filter(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((category, value)) if !category.trim().is_empty() && !value.trim().is_empty() => {
            Ok((category.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!("expected category=value, got {:?}", raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_filter_pairs() {
        assert_eq!(
            parse_filter("cookingTime=< 20 min").unwrap(),
            ("cookingTime".to_string(), "< 20 min".to_string())
        );
        assert!(parse_filter("mealTime").is_err());
        assert!(parse_filter("=Lunch").is_err());
    }

    #[test]
    fn parses_list_with_filters() {
        let cli = Cli::try_parse_from([
            "foodie",
            "list",
            "-f",
            "mealTime=Lunch",
            "--filter",
            "exclude=onion",
            "--search",
            "pasta",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::List { filters, search }) => {
                assert_eq!(filters.filters.len(), 2);
                assert_eq!(search.as_deref(), Some("pasta"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn create_requires_title_and_ingredients() {
        assert!(Cli::try_parse_from(["foodie", "create", "--title", "Toast"]).is_err());
        let cli = Cli::try_parse_from([
            "foodie",
            "create",
            "--title",
            "Toast",
            "--ingredients",
            "2 slices bread",
            "butter",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Create {
                ingredients,
                cooking_time,
                ..
            }) => {
                assert_eq!(ingredients, vec!["2 slices bread", "butter"]);
                assert_eq!(cooking_time, "15 min");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["foodie", "saved", "--json", "-v"]).unwrap();
        assert!(cli.json);
        assert!(cli.verbose);
    }
}
