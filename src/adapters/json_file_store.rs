use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::domain::AppError;
use crate::ports::{KeyValueStore, StoreBatch, StoreValues};

/// Key-value store persisted as one JSON object on disk.
///
/// Every batch rewrites the whole file through a sibling temp file and a rename, so a
/// failed write leaves the previous contents in place.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn read_all(&self) -> Result<Map<String, Value>, AppError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(err) => return Err(err.into()),
        };
        if content.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(AppError::storage_error(format!(
                "{} does not contain a JSON object",
                self.path.display()
            ))),
            Err(err) => Err(AppError::storage_error(format!(
                "{} is not valid JSON: {}",
                self.path.display(),
                err
            ))),
        }
    }

    fn write_all(&self, map: &Map<String, Value>) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(map)?;
        let temp = self.temp_path();
        fs::write(&temp, content)?;
        fs::rename(&temp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, keys: &[&str]) -> Result<StoreValues, AppError> {
        let map = self.read_all()?;
        Ok(keys
            .iter()
            .filter_map(|key| map.get(*key).map(|value| (key.to_string(), value.clone())))
            .collect())
    }

    fn apply(&self, batch: StoreBatch) -> Result<(), AppError> {
        if batch.is_empty() {
            return Ok(());
        }
        let mut map = self.read_all()?;
        for key in &batch.remove {
            map.remove(key);
        }
        for (key, value) in batch.set {
            map.insert(key, value);
        }
        log::debug!("[STORE] Writing {} key(s) to {}", map.len(), self.path.display());
        self.write_all(&map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::KeyValueStoreExt;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("storage.json"));

        assert!(store.get(&["profiles"]).unwrap().is_empty());
    }

    #[test]
    fn set_get_remove_roundtrip() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested").join("storage.json"));

        store.put_value("profiles", &vec!["default", "work"]).unwrap();
        store.put_value("work", &json!({"selectedText": "x"})).unwrap();

        let profiles: Vec<String> = store.get_value("profiles").unwrap().unwrap();
        assert_eq!(profiles, vec!["default", "work"]);

        store.remove("work").unwrap();
        assert!(store.get(&["work"]).unwrap().is_empty());
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn set_stores_every_value_in_one_write() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("storage.json"));
        let values = StoreValues::from([
            ("profiles".to_string(), json!(["default"])),
            ("currentProfile".to_string(), json!("default")),
        ]);

        store.set(values.clone()).unwrap();

        assert_eq!(store.get(&["profiles", "currentProfile"]).unwrap(), values);
    }

    #[test]
    fn batch_sets_and_removes_in_one_write() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("storage.json"));
        store.put_value("default", &json!({"boxes": []})).unwrap();

        let batch = StoreBatch::new().put("work", &json!({"boxes": []})).unwrap().delete("default");
        store.apply(batch).unwrap();

        let values = store.get(&["default", "work"]).unwrap();
        assert_eq!(values.len(), 1);
        assert!(values.contains_key("work"));
    }

    #[test]
    fn corrupt_file_is_reported_and_left_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "{not json").unwrap();
        let store = JsonFileStore::new(&path);

        let err = store.put_value("profiles", &vec!["default"]).unwrap_err();

        assert!(matches!(err, AppError::Storage(_)));
        assert_eq!(fs::read_to_string(&path).unwrap(), "{not json");
    }
}
