use super::backend::KeyValueStore;
use crate::error::{FoodieError, Result};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;

/// In-memory storage backend for testing.
///
/// Background writes run on other tasks, so state sits behind a `Mutex`
/// rather than a `RefCell`.
#[derive(Default)]
pub struct MemBackend {
    values: Mutex<HashMap<String, String>>,
    simulate_read_error: Mutex<bool>,
    simulate_write_error: Mutex<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing serialization.
    pub fn with_value(self, key: &str, value: &str) -> Self {
        self.values.lock().insert(key.to_string(), value.to_string());
        self
    }

    /// Enable read error simulation for testing load recovery.
    pub fn set_simulate_read_error(&self, simulate: bool) {
        *self.simulate_read_error.lock() = simulate;
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.lock() = simulate;
    }

    /// Raw stored value, for assertions.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.lock().get(key).cloned()
    }
}

#[async_trait]
impl KeyValueStore for MemBackend {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        if *self.simulate_read_error.lock() {
            return Err(FoodieError::Store("Simulated read error".to_string()));
        }
        Ok(self.values.lock().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        if *self.simulate_write_error.lock() {
            return Err(FoodieError::Store("Simulated write error".to_string()));
        }
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
