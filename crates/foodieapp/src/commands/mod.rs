//! # Command Layer
//!
//! The **core business logic** of the recipe app. Every module here is a set of
//! pure functions over recipe slices: no state, no storage, no async.
//!
//! ## Role and Responsibilities
//!
//! - [`universe`]: merge built-in and created recipes into one de-duplicated list
//! - [`filter`]: the filter engine (category grouping, AND across categories)
//! - [`search`]: case-insensitive substring search over title, creator, ingredients
//! - [`create`]: turn a free-text draft into a structured [`crate::model::Recipe`]
//! - [`saved`]: lookups and edits on the saved-recipe list
//!
//! ## What Commands Do NOT Do
//!
//! - **Hold state**: [`crate::context::RecipeContext`] owns the lists
//! - **Persist**: writes are scheduled by the context through [`crate::store`]
//! - **Log**: tracing happens at the context and store boundaries
//!
//! ## Testing Strategy
//!
//! **This is where the lion's share of testing lives.** Functions take plain
//! slices, so tests build recipes inline and assert on ids and order.

pub mod create;
pub mod filter;
pub mod saved;
pub mod search;
pub mod universe;
