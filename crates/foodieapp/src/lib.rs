//! # Foodie Architecture
//!
//! Foodie is a **UI-agnostic recipe library**. Screens (mobile, terminal, web)
//! read lists from it and call its operations; none of the filtering, search or
//! persistence rules live in the UI.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  UI Layer (the `foodie` CLI, or any other client)           │
//! │  - Renders filtered/saved lists, collects drafts and taps   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Context (context.rs)                                       │
//! │  - Owns catalog, created, saved and derived lists           │
//! │  - Loading → Ready lifecycle, schedules persistence         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs, filters.rs)                  │
//! │  - Pure functions: merge, filter, search, create, saved     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - KeyValueStore trait: FsBackend, MemBackend (testing)     │
//! │  - RecipeStore: two JSON slots, background writes           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `context.rs` inward, code takes Rust values and returns Rust values.
//! It never writes to stdout/stderr and never exits the process. Diagnostics go
//! through `tracing`; the binary decides where they end up.
//!
//! ## Typical Wiring
//!
//! ```no_run
//! use foodieapp::catalog;
//! use foodieapp::context::RecipeContext;
//! use foodieapp::store::{fs_backend::FsBackend, RecipeStore};
//!
//! # async fn demo() -> foodieapp::error::Result<()> {
//! let store = RecipeStore::new(FsBackend::new("/tmp/foodie".into()));
//! let mut ctx = RecipeContext::open(catalog::builtin(), store).await;
//!
//! ctx.toggle_filter("mealTime", "Lunch");
//! ctx.apply_filters()?;
//! for recipe in ctx.filtered_recipes() {
//!     println!("{}", recipe.title);
//! }
//! ctx.flush().await;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`context`]: The state owner and entry point for all operations
//! - [`commands`]: Business logic for merging, filtering, searching, creating
//! - [`filters`]: Typed filter criteria and category grouping
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Recipe`, `FilterOption`)
//! - [`catalog`]: The built-in recipe set
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod catalog;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod filters;
pub mod model;
pub mod store;

#[cfg(test)]
mod test_utils;
