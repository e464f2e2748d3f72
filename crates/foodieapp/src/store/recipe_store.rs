use super::backend::KeyValueStore;
use crate::error::{FoodieError, Result};
use crate::model::Recipe;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

pub const DEFAULT_CREATED_KEY: &str = "foodieFusion_createdRecipes";
pub const DEFAULT_SAVED_KEY: &str = "foodieFusion_savedRecipes";

/// The two durable slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Created,
    Saved,
}

impl Slot {
    fn index(self) -> usize {
        match self {
            Slot::Created => 0,
            Slot::Saved => 1,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Created => f.write_str("created"),
            Slot::Saved => f.write_str("saved"),
        }
    }
}

/// Storage keys for each slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreKeys {
    pub created: String,
    pub saved: String,
}

impl Default for StoreKeys {
    fn default() -> Self {
        Self {
            created: DEFAULT_CREATED_KEY.to_string(),
            saved: DEFAULT_SAVED_KEY.to_string(),
        }
    }
}

impl StoreKeys {
    pub fn key(&self, slot: Slot) -> &str {
        match slot {
            Slot::Created => &self.created,
            Slot::Saved => &self.saved,
        }
    }
}

/// Result of one background write.
#[derive(Debug)]
pub enum PersistOutcome {
    Written { key: String, count: usize },
    /// A newer snapshot of the same slot was already on disk.
    Superseded { key: String },
    Failed { key: String, error: FoodieError },
}

impl PersistOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, PersistOutcome::Written { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, PersistOutcome::Failed { .. })
    }

    pub fn key(&self) -> &str {
        match self {
            PersistOutcome::Written { key, .. }
            | PersistOutcome::Superseded { key }
            | PersistOutcome::Failed { key, .. } => key,
        }
    }
}

/// Orders background writes. Each snapshot gets a generation when it is
/// scheduled; per slot, a write never replaces a newer generation.
#[derive(Debug, Default)]
struct WriteOrder {
    next: AtomicU64,
    written: Mutex<[u64; 2]>,
}

/// Reads and writes recipe lists in their key/value slots.
pub struct RecipeStore<S: KeyValueStore> {
    backend: Arc<S>,
    keys: StoreKeys,
    order: Arc<WriteOrder>,
}

impl<S: KeyValueStore> Clone for RecipeStore<S> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            keys: self.keys.clone(),
            order: Arc::clone(&self.order),
        }
    }
}

impl<S: KeyValueStore + 'static> RecipeStore<S> {
    pub fn new(backend: S) -> Self {
        Self::with_keys(backend, StoreKeys::default())
    }

    pub fn with_keys(backend: S, keys: StoreKeys) -> Self {
        Self {
            backend: Arc::new(backend),
            keys,
            order: Arc::default(),
        }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn keys(&self) -> &StoreKeys {
        &self.keys
    }

    /// Read and parse a slot. Absent keys read as an empty list.
    pub async fn read(&self, slot: Slot) -> Result<Vec<Recipe>> {
        let key = self.keys.key(slot);
        match self.backend.get(key).await? {
            Some(blob) => Ok(serde_json::from_str(&blob)?),
            None => Ok(Vec::new()),
        }
    }

    /// Like [`read`](Self::read), but any failure degrades to an empty list.
    pub async fn load(&self, slot: Slot) -> Vec<Recipe> {
        match self.read(slot).await {
            Ok(recipes) => {
                debug!(%slot, count = recipes.len(), "loaded recipes");
                recipes
            }
            Err(err) => {
                warn!(%slot, key = self.keys.key(slot), error = %err, "could not load recipes, starting empty");
                Vec::new()
            }
        }
    }

    /// Serialize and write a full list to its slot.
    pub async fn write(&self, slot: Slot, recipes: &[Recipe]) -> Result<()> {
        let blob = serde_json::to_string(recipes)?;
        self.backend.set(self.keys.key(slot), &blob).await
    }

    /// Write `recipes` on a background task. The caller is never blocked and the
    /// outcome is logged; awaiting the handle is optional.
    ///
    /// Snapshots of the same slot land in the order they were scheduled: a
    /// task that finds a newer snapshot already written skips its own.
    pub fn persist(
        &self,
        runtime: &Handle,
        slot: Slot,
        recipes: Vec<Recipe>,
    ) -> JoinHandle<PersistOutcome> {
        let store = self.clone();
        let generation = self.order.next.fetch_add(1, Ordering::SeqCst) + 1;
        runtime.spawn(async move {
            let key = store.keys.key(slot).to_string();
            let count = recipes.len();

            let mut written = store.order.written.lock().await;
            if written[slot.index()] > generation {
                debug!(%slot, %key, generation, "skipping stale snapshot");
                return PersistOutcome::Superseded { key };
            }
            match store.write(slot, &recipes).await {
                Ok(()) => {
                    written[slot.index()] = generation;
                    debug!(%slot, %key, count, "persisted recipes");
                    PersistOutcome::Written { key, count }
                }
                Err(error) => {
                    error!(%slot, %key, %error, "failed to persist recipes");
                    PersistOutcome::Failed { key, error }
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use crate::test_utils::{ids, recipe};

    #[tokio::test]
    async fn absent_slots_load_empty() {
        let store = RecipeStore::new(MemBackend::new());
        assert!(store.load(Slot::Created).await.is_empty());
        assert!(store.read(Slot::Saved).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn malformed_blob_loads_empty() {
        let backend = MemBackend::new().with_value(DEFAULT_SAVED_KEY, "{not json");
        let store = RecipeStore::new(backend);

        assert!(store.read(Slot::Saved).await.is_err());
        assert!(store.load(Slot::Saved).await.is_empty());
    }

    #[tokio::test]
    async fn read_failure_loads_empty() {
        let backend = MemBackend::new();
        backend.set_simulate_read_error(true);
        let store = RecipeStore::new(backend);
        assert!(store.load(Slot::Created).await.is_empty());
    }

    #[tokio::test]
    async fn write_then_read_keeps_order_and_fields() {
        let store = RecipeStore::new(MemBackend::new());
        let recipes = vec![recipe("b", "Second"), recipe("a", "First")];

        store.write(Slot::Created, &recipes).await.unwrap();
        let loaded = store.read(Slot::Created).await.unwrap();
        assert_eq!(loaded, recipes);
        assert_eq!(ids(&loaded), vec!["b", "a"]);
    }

    #[tokio::test]
    async fn slots_are_independent() {
        let store = RecipeStore::new(MemBackend::new());
        store.write(Slot::Saved, &[recipe("1", "Toast")]).await.unwrap();

        assert!(store.read(Slot::Created).await.unwrap().is_empty());
        assert!(store.backend().raw(DEFAULT_SAVED_KEY).is_some());
        assert!(store.backend().raw(DEFAULT_CREATED_KEY).is_none());
    }

    #[tokio::test]
    async fn custom_keys() {
        let keys = StoreKeys {
            created: "c".into(),
            saved: "s".into(),
        };
        let store = RecipeStore::with_keys(MemBackend::new(), keys);
        store.write(Slot::Created, &[recipe("1", "Toast")]).await.unwrap();
        assert!(store.backend().raw("c").is_some());
    }

    #[tokio::test]
    async fn persist_reports_outcome() {
        let store = RecipeStore::new(MemBackend::new());
        let handle = Handle::current();

        let outcome = store
            .persist(&handle, Slot::Saved, vec![recipe("1", "Toast")])
            .await
            .unwrap();
        assert!(outcome.is_written());
        assert_eq!(outcome.key(), DEFAULT_SAVED_KEY);

        store.backend().set_simulate_write_error(true);
        let outcome = store.persist(&handle, Slot::Saved, vec![]).await.unwrap();
        assert!(matches!(outcome, PersistOutcome::Failed { .. }));
        // The earlier write is untouched.
        assert_eq!(store.read(Slot::Saved).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn stale_snapshot_is_superseded() {
        let store = RecipeStore::new(MemBackend::new());
        let handle = Handle::current();

        let older = store.persist(&handle, Slot::Saved, vec![recipe("1", "Toast")]);
        let newer = store.persist(&handle, Slot::Saved, vec![recipe("2", "Soup")]);

        // Land the newer snapshot first.
        store.order.written.lock().await[Slot::Saved.index()] = 2;
        store
            .write(Slot::Saved, &[recipe("2", "Soup")])
            .await
            .unwrap();
        let newer_outcome = newer.await.unwrap();
        let older_outcome = older.await.unwrap();

        assert!(matches!(older_outcome, PersistOutcome::Superseded { .. }));
        assert!(!older_outcome.is_failed());
        assert!(!older_outcome.is_written());
        assert_eq!(older_outcome.key(), DEFAULT_SAVED_KEY);
        assert!(newer_outcome.is_written());
        assert_eq!(ids(&store.read(Slot::Saved).await.unwrap()), vec!["2"]);
    }

    #[tokio::test]
    async fn generations_are_tracked_per_slot() {
        let store = RecipeStore::new(MemBackend::new());
        let handle = Handle::current();
        store.order.written.lock().await[Slot::Saved.index()] = u64::MAX;

        let created = store
            .persist(&handle, Slot::Created, vec![recipe("1", "Toast")])
            .await
            .unwrap();
        assert!(created.is_written());

        let saved = store.persist(&handle, Slot::Saved, vec![]).await.unwrap();
        assert!(matches!(saved, PersistOutcome::Superseded { .. }));
        assert!(store.backend().raw(DEFAULT_SAVED_KEY).is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn last_scheduled_snapshot_wins() {
        let store = RecipeStore::new(MemBackend::new());
        let handle = Handle::current();

        let mut tasks = Vec::new();
        for n in 1..=20 {
            let snapshot: Vec<Recipe> = (0..n).map(|i| recipe(&i.to_string(), "Toast")).collect();
            tasks.push(store.persist(&handle, Slot::Saved, snapshot));
        }
        let mut outcomes = Vec::new();
        for task in tasks {
            outcomes.push(task.await.unwrap());
        }

        assert!(outcomes.iter().all(|o| !o.is_failed()));
        assert!(outcomes.last().unwrap().is_written());
        assert_eq!(store.read(Slot::Saved).await.unwrap().len(), 20);
    }
}
