use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::domain::AppError;
use crate::ports::{KeyValueStore, StoreBatch, StoreValues};

/// In-memory key-value store for testing.
#[derive(Debug, Clone, Default)]
pub struct MockStore {
    // Arc so clones observe the same data
    values: Arc<Mutex<StoreValues>>,
    fail_writes: Arc<AtomicBool>,
    writes: Arc<AtomicUsize>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value.
    pub fn with_value(self, key: &str, value: Value) -> Self {
        self.values.lock().unwrap().insert(key.to_string(), value);
        self
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful batches applied.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.lock().unwrap().contains_key(key)
    }
}

impl KeyValueStore for MockStore {
    fn get(&self, keys: &[&str]) -> Result<StoreValues, AppError> {
        let values = self.values.lock().unwrap();
        Ok(keys
            .iter()
            .filter_map(|key| values.get(*key).map(|value| (key.to_string(), value.clone())))
            .collect())
    }

    fn apply(&self, batch: StoreBatch) -> Result<(), AppError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::storage_error("quota exceeded"));
        }
        let mut values = self.values.lock().unwrap();
        for key in &batch.remove {
            values.remove(key);
        }
        values.extend(batch.set);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
