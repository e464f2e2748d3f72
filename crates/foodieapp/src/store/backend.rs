use crate::error::Result;
use async_trait::async_trait;

/// Abstract interface for durable key/value blob storage.
///
/// Values are opaque strings; [`super::RecipeStore`] decides what goes in them.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    /// Returns Ok(None) if the key has never been written.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}
