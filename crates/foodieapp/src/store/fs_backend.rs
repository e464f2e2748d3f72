use super::backend::KeyValueStore;
use crate::error::{FoodieError, Result};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

/// File-per-key storage under a single data directory.
///
/// Key `foo` lives in `<root>/foo.json`.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
            && !key.starts_with('.');
        if !valid {
            return Err(FoodieError::Store(format!("Invalid storage key: {:?}", key)));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }

    async fn ensure_dir(&self) -> Result<()> {
        if fs::metadata(&self.root).await.is_err() {
            fs::create_dir_all(&self.root).await.map_err(FoodieError::Io)?;
        }
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FsBackend {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(FoodieError::Io(err)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let target = self.key_path(key)?;
        self.ensure_dir().await?;

        // Atomic write
        let tmp = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        if let Err(err) = fs::write(&tmp, value).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(FoodieError::Io(err));
        }
        if let Err(err) = fs::rename(&tmp, &target).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(FoodieError::Io(err));
        }
        Ok(())
    }
}
