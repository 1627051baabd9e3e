//! Loaded state of the active profile.

use crate::domain::{AppError, BoxId, PREFERENCES_KEY, Preferences, ProfileRecord, order_key};
use crate::ports::{KeyValueStore, StoreBatch};

use super::board::{BoxBoard, BoxEdit};

/// Everything a command needs to read or mutate one profile.
#[derive(Debug, Clone)]
pub struct Session {
    pub profile: String,
    pub board: BoxBoard,
    pub preferences: Preferences,
}

impl Session {
    /// Fetch the profile record, its order record, and preferences in one read.
    pub fn load<S: KeyValueStore>(
        store: &S,
        profile: &str,
        default_box_count: usize,
    ) -> Result<Self, AppError> {
        let order_key = order_key(profile);
        let mut values = store.get(&[profile, order_key.as_str(), PREFERENCES_KEY])?;

        let record: Option<ProfileRecord> =
            values.remove(profile).map(serde_json::from_value).transpose()?;
        let order: Vec<String> = values
            .remove(&order_key)
            .map(serde_json::from_value)
            .transpose()?
            .unwrap_or_default();
        let preferences: Preferences = values
            .remove(PREFERENCES_KEY)
            .map(serde_json::from_value)
            .transpose()?
            .unwrap_or_default();

        log::debug!(
            "[BOARD] Loaded profile '{}' ({})",
            profile,
            if record.is_some() { "saved record" } else { "defaults" }
        );

        Ok(Self {
            profile: profile.to_string(),
            board: BoxBoard::materialize(record, &order, default_box_count),
            preferences,
        })
    }

    /// Batch holding the profile record and its order record.
    pub fn profile_batch(&self) -> Result<StoreBatch, AppError> {
        StoreBatch::new()
            .put(self.profile.as_str(), &self.board.to_record())?
            .put(order_key(&self.profile), &self.board.order_record())
    }

    /// Persist the profile record and order record together.
    pub fn save<S: KeyValueStore>(&self, store: &S) -> Result<(), AppError> {
        let batch = self.profile_batch()?;
        store.apply(batch).inspect_err(|e| {
            log::error!("[BOARD] Failed to save profile '{}': {}", self.profile, e);
        })
    }

    /// Persist the profile and preferences together.
    pub fn save_with_preferences<S: KeyValueStore>(&self, store: &S) -> Result<(), AppError> {
        let batch = self.profile_batch()?.put(PREFERENCES_KEY, &self.preferences)?;
        store.apply(batch).inspect_err(|e| {
            log::error!("[BOARD] Failed to save profile '{}': {}", self.profile, e);
        })
    }

    /// Apply an edit and save immediately.
    pub fn edit<S: KeyValueStore>(
        &mut self,
        store: &S,
        id: &BoxId,
        edit: BoxEdit,
    ) -> Result<(), AppError> {
        self.board.apply(id, edit)?;
        self.save(store)
    }
}
