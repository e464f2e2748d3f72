//! # Configuration
//!
//! Settings are loaded with [`confique`], layered in priority order:
//! 1. **Environment variables**: `FOODIE_DATA_DIR`, `FOODIE_CREATED_KEY`, `FOODIE_SAVED_KEY`.
//! 2. **Config file**: `foodie.toml` in the directory passed to [`FoodieConfig::load`].
//! 3. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_dir` | OS data dir | Where the recipe slots are stored |
//! | `created_key` | `foodieFusion_createdRecipes` | Slot for user-created recipes |
//! | `saved_key` | `foodieFusion_savedRecipes` | Slot for saved recipes |

use crate::error::{FoodieError, Result};
use crate::store::StoreKeys;
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "foodie.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FoodieConfig {
    /// Directory holding the persisted recipe slots.
    #[config(env = "FOODIE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Storage key for user-created recipes.
    #[config(env = "FOODIE_CREATED_KEY", default = "foodieFusion_createdRecipes")]
    pub created_key: String,

    /// Storage key for saved recipes.
    #[config(env = "FOODIE_SAVED_KEY", default = "foodieFusion_savedRecipes")]
    pub saved_key: String,
}

impl Default for FoodieConfig {
    fn default() -> Self {
        let keys = StoreKeys::default();
        Self {
            data_dir: None,
            created_key: keys.created,
            saved_key: keys.saved,
        }
    }
}

impl FoodieConfig {
    /// Load from the environment and `<config_dir>/foodie.toml`, if present.
    pub fn load(config_dir: Option<&Path>) -> Result<Self> {
        let mut builder = FoodieConfig::builder().env();
        if let Some(dir) = config_dir {
            builder = builder.file(dir.join(CONFIG_FILE));
        }
        Ok(builder.load()?)
    }

    /// Platform config directory, e.g. `~/.config/foodie` on Linux.
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "foodie", "foodie").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// The configured data directory, or the platform data directory.
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        ProjectDirs::from("com", "foodie", "foodie")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| FoodieError::Config("Could not determine a data directory".to_string()))
    }

    pub fn store_keys(&self) -> StoreKeys {
        StoreKeys {
            created: self.created_key.clone(),
            saved: self.saved_key.clone(),
        }
    }
}
