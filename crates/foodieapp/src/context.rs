//! # Recipe Context
//!
//! [`RecipeContext`] is the single owner of recipe state for an app session.
//! It is constructed once at startup and handed to the screens, which read its
//! lists and call its operations. It is the facade over [`crate::commands`]:
//! every filtering, search and creation rule lives there, the context only
//! decides which lists to feed in and where the result goes.
//!
//! ## State
//!
//! | List               | Source                                  | Persisted |
//! |--------------------|-----------------------------------------|-----------|
//! | `recipes`          | built-in catalog, fixed at construction | no        |
//! | `created_recipes`  | user drafts, newest first               | yes       |
//! | `saved_recipes`    | bookmarks, insertion order              | yes       |
//! | `filtered_recipes` | derived view the screens render         | no        |
//!
//! ## Lifecycle
//!
//! ```text
//! new() ──► Loading ──load().await──► Ready
//! ```
//!
//! While `Loading`, anything that recomputes the derived view or edits a
//! persisted list returns [`FoodieError::NotReady`]; otherwise the view would
//! briefly show a partial universe and the load would overwrite the edit.
//! Reads, [`toggle_filter`](RecipeContext::toggle_filter) and
//! [`is_recipe_saved`](RecipeContext::is_recipe_saved) work in both states.
//!
//! ## Persistence
//!
//! Every edit to `created_recipes` or `saved_recipes` spawns a background write
//! of the whole list on the Tokio runtime that ran [`load`](RecipeContext::load).
//! Operations return as soon as memory is updated. Every write logs its own
//! outcome. Handles of finished writes are released on the next edit, so
//! [`flush`](RecipeContext::flush) reports the writes still outstanding since
//! then; callers use it before shutdown or in tests.

use crate::commands::{self, create::RecipeDraft};
use crate::error::{FoodieError, Result};
use crate::model::{FilterOption, Recipe};
use crate::store::{KeyValueStore, PersistOutcome, RecipeStore, Slot};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Loading,
    Ready,
}

pub struct RecipeContext<S: KeyValueStore + 'static> {
    recipes: Vec<Recipe>,
    created_recipes: Vec<Recipe>,
    saved_recipes: Vec<Recipe>,
    filtered_recipes: Vec<Recipe>,
    active_filters: Vec<FilterOption>,
    search_query: String,
    lifecycle: Lifecycle,
    store: RecipeStore<S>,
    runtime: Option<Handle>,
    pending: Vec<(Slot, JoinHandle<PersistOutcome>)>,
}

impl<S: KeyValueStore + 'static> RecipeContext<S> {
    /// Create a context in the `Loading` state. The derived view starts as the
    /// built-in catalog.
    pub fn new(recipes: Vec<Recipe>, store: RecipeStore<S>) -> Self {
        Self {
            filtered_recipes: recipes.clone(),
            recipes,
            created_recipes: Vec::new(),
            saved_recipes: Vec::new(),
            active_filters: Vec::new(),
            search_query: String::new(),
            lifecycle: Lifecycle::Loading,
            store,
            runtime: None,
            pending: Vec::new(),
        }
    }

    /// Create and load in one step.
    pub async fn open(recipes: Vec<Recipe>, store: RecipeStore<S>) -> Self {
        let mut ctx = Self::new(recipes, store);
        ctx.load().await;
        ctx
    }

    /// Read both persisted slots and move to `Ready`.
    ///
    /// Missing or unreadable slots load as empty. Calling this again once ready
    /// does nothing.
    ///
    /// Persistence runs on the Tokio runtime this is awaited on. Awaited on any
    /// other executor the context still becomes ready, but edits stay in memory.
    pub async fn load(&mut self) {
        if self.lifecycle == Lifecycle::Ready {
            return;
        }

        self.created_recipes = self.store.load(Slot::Created).await;
        self.saved_recipes = self.store.load(Slot::Saved).await;
        self.runtime = match Handle::try_current() {
            Ok(handle) => Some(handle),
            Err(err) => {
                error!(error = %err, "no Tokio runtime, changes will not be persisted");
                None
            }
        };
        self.lifecycle = Lifecycle::Ready;

        info!(
            builtin = self.recipes.len(),
            created = self.created_recipes.len(),
            saved = self.saved_recipes.len(),
            "recipe context ready"
        );
        self.on_created_changed();
    }

    // --- Read accessors ---

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn filtered_recipes(&self) -> &[Recipe] {
        &self.filtered_recipes
    }

    pub fn created_recipes(&self) -> &[Recipe] {
        &self.created_recipes
    }

    pub fn saved_recipes(&self) -> &[Recipe] {
        &self.saved_recipes
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn active_filters(&self) -> &[FilterOption] {
        &self.active_filters
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_ready(&self) -> bool {
        self.lifecycle == Lifecycle::Ready
    }

    pub fn store(&self) -> &RecipeStore<S> {
        &self.store
    }

    /// Built-in and created recipes merged, created first, built-in winning
    /// on id collisions.
    pub fn universe(&self) -> Vec<Recipe> {
        commands::universe::merge(&self.recipes, &self.created_recipes)
    }

    // --- Search and filters ---

    /// Search the universe with the active filters applied first.
    ///
    /// A blank query clears the stored query and falls back to
    /// [`apply_filters`](Self::apply_filters).
    pub fn search_recipes(&mut self, query: &str) -> Result<()> {
        self.ensure_ready()?;

        if query.trim().is_empty() {
            self.search_query.clear();
            return self.apply_filters();
        }

        self.search_query = query.to_string();
        let candidates = commands::filter::by_options(&self.universe(), &self.active_filters);
        self.filtered_recipes = commands::search::run(&candidates, query);
        debug!(query, results = self.filtered_recipes.len(), "searched recipes");
        Ok(())
    }

    /// Add the `(category, value)` filter, or remove it if already active.
    /// Returns whether it is active afterwards.
    ///
    /// The derived view is not recomputed; call
    /// [`apply_filters`](Self::apply_filters) when the selection is done.
    pub fn toggle_filter(&mut self, category: &str, value: &str) -> bool {
        if let Some(pos) = self
            .active_filters
            .iter()
            .position(|f| f.is(category, value))
        {
            self.active_filters.remove(pos);
            false
        } else {
            self.active_filters.push(FilterOption::new(category, value));
            true
        }
    }

    /// Drop every filter and show the whole universe. The search query is
    /// left as is but no longer applied.
    pub fn clear_filters(&mut self) -> Result<()> {
        self.ensure_ready()?;
        self.active_filters.clear();
        self.filtered_recipes = self.universe();
        Ok(())
    }

    /// Recompute the derived view from the universe and the active filters.
    pub fn apply_filters(&mut self) -> Result<()> {
        self.ensure_ready()?;
        self.filtered_recipes = commands::filter::by_options(&self.universe(), &self.active_filters);
        debug!(
            filters = self.active_filters.len(),
            results = self.filtered_recipes.len(),
            "applied filters"
        );
        Ok(())
    }

    // --- Saved recipes ---

    /// Bookmark a built-in or created recipe. Unknown or already saved ids are
    /// a no-op. Returns whether the saved list changed.
    pub fn save_recipe(&mut self, id: &str) -> Result<bool> {
        self.ensure_ready()?;

        let Some(recipe) = commands::saved::find(&self.recipes, &self.created_recipes, id) else {
            debug!(id, "save ignored, no such recipe");
            return Ok(false);
        };
        if !commands::saved::add(&mut self.saved_recipes, recipe) {
            return Ok(false);
        }

        self.persist(Slot::Saved);
        Ok(true)
    }

    /// Remove a bookmark. The saved list is persisted even when `id` was not
    /// saved. Returns whether the saved list changed.
    pub fn remove_saved_recipe(&mut self, id: &str) -> Result<bool> {
        self.ensure_ready()?;
        let removed = commands::saved::remove(&mut self.saved_recipes, id);
        self.persist(Slot::Saved);
        Ok(removed)
    }

    pub fn is_recipe_saved(&self, id: &str) -> bool {
        commands::saved::contains(&self.saved_recipes, id)
    }

    /// Flip the bookmark for `id`, as the detail page's save button does.
    /// Returns whether the recipe is saved afterwards.
    pub fn toggle_saved(&mut self, id: &str) -> Result<bool> {
        if self.is_recipe_saved(id) {
            self.remove_saved_recipe(id)?;
        } else {
            self.save_recipe(id)?;
        }
        Ok(self.is_recipe_saved(id))
    }

    /// The first `limit` saved recipes.
    pub fn saved_preview(&self, limit: usize) -> &[Recipe] {
        &self.saved_recipes[..limit.min(self.saved_recipes.len())]
    }

    /// Look up a recipe by id, built-in catalog first.
    pub fn find_recipe(&self, id: &str) -> Option<&Recipe> {
        commands::saved::find(&self.recipes, &self.created_recipes, id)
    }

    // --- Creation ---

    /// Turn a draft into a recipe and put it at the top of both the created
    /// list and the current view.
    ///
    /// The new recipe is shown even if it would not pass the active filters or
    /// search; the view is only rebuilt when neither is active.
    pub fn add_created_recipe(&mut self, draft: &RecipeDraft) -> Result<Recipe> {
        self.ensure_ready()?;

        let recipe = commands::create::run(draft);
        self.created_recipes.insert(0, recipe.clone());
        self.persist(Slot::Created);

        self.filtered_recipes.insert(0, recipe.clone());
        self.on_created_changed();

        info!(id = %recipe.id, title = %recipe.title, "created recipe");
        Ok(recipe)
    }

    // --- Persistence ---

    /// Wait for the outstanding writes and return their outcomes in the order
    /// they were scheduled. Writes already released by a later edit were
    /// logged when they finished and are not repeated here.
    pub async fn flush(&mut self) -> Vec<PersistOutcome> {
        let mut outcomes = Vec::with_capacity(self.pending.len());
        for (slot, handle) in self.pending.drain(..) {
            let outcome = match handle.await {
                Ok(outcome) => outcome,
                Err(err) => {
                    error!(%slot, error = %err, "persist task did not complete");
                    PersistOutcome::Failed {
                        key: self.store.keys().key(slot).to_string(),
                        error: FoodieError::Store(err.to_string()),
                    }
                }
            };
            outcomes.push(outcome);
        }
        outcomes
    }

    /// Writes scheduled and not yet collected by [`flush`](Self::flush).
    pub fn pending_writes(&self) -> usize {
        self.pending.len()
    }

    fn persist(&mut self, slot: Slot) {
        let Some(runtime) = &self.runtime else {
            warn!(%slot, "no runtime, change kept in memory only");
            return;
        };
        self.pending.retain(|(_, handle)| !handle.is_finished());

        let snapshot = match slot {
            Slot::Created => self.created_recipes.clone(),
            Slot::Saved => self.saved_recipes.clone(),
        };
        let handle = self.store.persist(runtime, slot, snapshot);
        self.pending.push((slot, handle));
    }

    /// Rebuild the view from the universe when nothing narrows it.
    fn on_created_changed(&mut self) {
        if self.lifecycle != Lifecycle::Ready {
            return;
        }
        if !self.active_filters.is_empty() || !self.search_query.is_empty() {
            return;
        }
        self.filtered_recipes = self.universe();
    }

    fn ensure_ready(&self) -> Result<()> {
        match self.lifecycle {
            Lifecycle::Ready => Ok(()),
            Lifecycle::Loading => Err(FoodieError::NotReady),
        }
    }
}
