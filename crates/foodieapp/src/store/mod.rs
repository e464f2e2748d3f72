//! # Persistence Gateway
//!
//! Recipes the user creates or saves survive restarts through two flat
//! key/value slots, each holding a full JSON array of recipes.
//!
//! ## Layers
//!
//! - [`backend::KeyValueStore`]: raw async `get`/`set` of string blobs. This is
//!   the "how" (memory, filesystem).
//! - [`recipe_store::RecipeStore`]: the "what". Knows the two slot keys,
//!   serializes recipe lists, recovers from bad blobs, and spawns background
//!   writes that report a typed [`recipe_store::PersistOutcome`].
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one `<key>.json` file per slot, written
//!   atomically (temp file then rename).
//! - [`mem_backend::MemBackend`]: in-memory map for tests, with switches to
//!   simulate read and write failures.
//!
//! ## Failure Model
//!
//! - **Read failure or malformed blob**: the slot loads as empty, a warning is
//!   logged, loading carries on.
//! - **Write failure**: logged and reported as `PersistOutcome::Failed`. The
//!   in-memory change stays, nothing is retried.
//!
//! Writes run on background tasks, serialized per store. A snapshot that
//! arrives after a newer one of the same slot is skipped and reported as
//! `PersistOutcome::Superseded`.

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod recipe_store;

pub use backend::KeyValueStore;
pub use recipe_store::{PersistOutcome, RecipeStore, Slot, StoreKeys};
