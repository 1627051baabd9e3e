use std::collections::BTreeMap;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::AppError;

/// Values keyed by storage key.
pub type StoreValues = BTreeMap<String, Value>;

/// A set of writes and removals applied together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreBatch {
    pub set: StoreValues,
    pub remove: Vec<String>,
}

impl StoreBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a typed value for `key`.
    pub fn put<T: Serialize>(mut self, key: impl Into<String>, value: &T) -> Result<Self, AppError> {
        self.set.insert(key.into(), serde_json::to_value(value)?);
        Ok(self)
    }

    /// Queue removal of `key`.
    pub fn delete(mut self, key: impl Into<String>) -> Self {
        self.remove.push(key.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty() && self.remove.is_empty()
    }
}

/// Port for the local key-value store backing profiles and preferences.
pub trait KeyValueStore {
    /// Fetch the stored values for `keys`. Absent keys are omitted from the result.
    fn get(&self, keys: &[&str]) -> Result<StoreValues, AppError>;

    /// Apply every write and removal in `batch`, or none of them.
    fn apply(&self, batch: StoreBatch) -> Result<(), AppError>;

    /// Store each value under its key.
    fn set(&self, values: StoreValues) -> Result<(), AppError> {
        self.apply(StoreBatch { set: values, remove: Vec::new() })
    }

    /// Remove `key` if present.
    fn remove(&self, key: &str) -> Result<(), AppError> {
        self.apply(StoreBatch::new().delete(key))
    }
}

/// Typed helpers over [`KeyValueStore`].
pub trait KeyValueStoreExt: KeyValueStore {
    /// Read and deserialize a single key.
    fn get_value<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, AppError> {
        let mut values = self.get(&[key])?;
        match values.remove(key) {
            Some(Value::Null) | None => Ok(None),
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
        }
    }

    /// Serialize and store a single key.
    fn put_value<T: Serialize>(&self, key: &str, value: &T) -> Result<(), AppError> {
        let values = StoreValues::from([(key.to_string(), serde_json::to_value(value)?)]);
        self.set(values)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStoreExt for S {}
