//! # CLI Layer
//!
//! This module is **one possible UI client** for foodie. It is the only place
//! that touches the terminal, parses arguments or exits the process.
//!
//! ## Structure
//!
//! - `run()`: parse, set up logging, build the context, dispatch
//! - `init_context()`: config → `FsBackend` → `RecipeStore` → `RecipeContext`
//! - `handle_*()`: one handler per subcommand
//! - `finish()`: waits for background writes and reports failed ones

use super::print::{
    print_full_recipe, print_json, print_message, print_recipes, MessageLevel,
};
use super::setup::{Cli, Commands, FilterArgs};
use anyhow::{bail, Context, Result};
use clap::Parser;
use foodieapp::catalog;
use foodieapp::commands::create::RecipeDraft;
use foodieapp::config::FoodieConfig;
use foodieapp::context::RecipeContext;
use foodieapp::error::FoodieError;
use foodieapp::store::fs_backend::FsBackend;
use foodieapp::store::{PersistOutcome, RecipeStore};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

type Ctx = RecipeContext<FsBackend>;

struct AppContext {
    ctx: Ctx,
    json: bool,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut app = init_context(cli.data_dir).await?;
    app.json = cli.json;

    match cli.command {
        Some(Commands::List { filters, search }) => {
            handle_list(&mut app, &filters, search.as_deref())
        }
        Some(Commands::Search { query, filters }) => handle_list(&mut app, &filters, Some(&query)),
        Some(Commands::Show { id }) => handle_show(&app, &id),
        Some(Commands::Save { id }) => handle_save(&mut app, &id),
        Some(Commands::Unsave { id }) => handle_unsave(&mut app, &id),
        Some(Commands::Saved) => handle_saved(&app),
        Some(Commands::Create {
            title,
            ingredients,
            steps,
            cooking_time,
            difficulty,
            image,
        }) => {
            let mut draft = RecipeDraft::new(title, ingredients.join("\n"))
                .with_steps(steps)
                .with_cooking_time(cooking_time)
                .with_difficulty(difficulty);
            if let Some(image) = image {
                draft = draft.with_image(image);
            }
            handle_create(&mut app, &draft)
        }
        None => handle_list(&mut app, &FilterArgs::default(), None),
    }?;

    finish(&mut app.ctx).await
}

/// Logs go to stderr so stdout stays parseable. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

async fn init_context(data_dir: Option<PathBuf>) -> Result<AppContext> {
    let mut config = FoodieConfig::load(FoodieConfig::default_config_dir().as_deref())
        .context("Failed to load configuration")?;
    if data_dir.is_some() {
        config.data_dir = data_dir;
    }

    let root = config.data_dir()?;
    debug!(root = %root.display(), "opening recipe store");

    let store = RecipeStore::with_keys(FsBackend::new(root), config.store_keys());
    let ctx = RecipeContext::open(catalog::builtin(), store).await;

    Ok(AppContext { ctx, json: false })
}

fn handle_list(app: &mut AppContext, filters: &FilterArgs, search: Option<&str>) -> Result<()> {
    for (category, value) in &filters.filters {
        app.ctx.toggle_filter(category, value);
    }
    if !filters.filters.is_empty() {
        app.ctx.apply_filters()?;
    }
    if let Some(query) = search {
        app.ctx.search_recipes(query)?;
    }

    let recipes = app.ctx.filtered_recipes();
    if app.json {
        return print_json(recipes);
    }
    print_recipes(recipes, |id| app.ctx.is_recipe_saved(id));
    Ok(())
}

fn handle_show(app: &AppContext, id: &str) -> Result<()> {
    let Some(recipe) = app.ctx.find_recipe(id) else {
        bail!(FoodieError::RecipeNotFound(id.to_string()));
    };
    if app.json {
        return print_json(std::slice::from_ref(recipe));
    }
    print_full_recipe(recipe, app.ctx.is_recipe_saved(id));
    Ok(())
}

fn handle_save(app: &mut AppContext, id: &str) -> Result<()> {
    if app.ctx.find_recipe(id).is_none() {
        bail!(FoodieError::RecipeNotFound(id.to_string()));
    }
    if app.ctx.save_recipe(id)? {
        print_message(MessageLevel::Success, &format!("Saved recipe {}", id));
    } else {
        print_message(MessageLevel::Info, &format!("Recipe {} is already saved", id));
    }
    Ok(())
}

fn handle_unsave(app: &mut AppContext, id: &str) -> Result<()> {
    if app.ctx.remove_saved_recipe(id)? {
        print_message(MessageLevel::Success, &format!("Removed recipe {} from saved", id));
    } else {
        print_message(MessageLevel::Info, &format!("Recipe {} was not saved", id));
    }
    Ok(())
}

fn handle_saved(app: &AppContext) -> Result<()> {
    let saved = app.ctx.saved_recipes();
    if app.json {
        return print_json(saved);
    }
    if saved.is_empty() {
        print_message(MessageLevel::Info, "No saved recipes.");
        return Ok(());
    }
    print_recipes(saved, |_| true);
    Ok(())
}

fn handle_create(app: &mut AppContext, draft: &RecipeDraft) -> Result<()> {
    let recipe = app.ctx.add_created_recipe(draft)?;
    if app.json {
        return print_json(std::slice::from_ref(&recipe));
    }
    print_message(
        MessageLevel::Success,
        &format!("Created recipe {} ({})", recipe.title, recipe.id),
    );
    Ok(())
}

/// Wait for scheduled writes. A failed write does not undo the change in
/// memory, but the user should know it did not reach disk.
async fn finish(ctx: &mut Ctx) -> Result<()> {
    let failed: Vec<PersistOutcome> = ctx
        .flush()
        .await
        .into_iter()
        .filter(PersistOutcome::is_failed)
        .collect();

    for outcome in &failed {
        if let PersistOutcome::Failed { key, error } = outcome {
            print_message(
                MessageLevel::Warning,
                &format!("Could not write {}: {}", key, error),
            );
        }
    }
    if !failed.is_empty() {
        bail!("{} write(s) failed", failed.len());
    }
    Ok(())
}
