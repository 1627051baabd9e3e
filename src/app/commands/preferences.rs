//! Process-wide preferences.

use crate::domain::{AppError, PREFERENCES_KEY, PreferenceToggle, Preferences};
use crate::ports::{KeyValueStore, KeyValueStoreExt};

pub fn load<S: KeyValueStore>(store: &S) -> Result<Preferences, AppError> {
    Ok(store.get_value(PREFERENCES_KEY)?.unwrap_or_default())
}

fn save<S: KeyValueStore>(store: &S, preferences: &Preferences) -> Result<(), AppError> {
    store.put_value(PREFERENCES_KEY, preferences).inspect_err(|e| {
        log::error!("[PREFS] Failed to save preferences: {}", e);
    })
}

/// Set one toggle and persist.
pub fn set<S: KeyValueStore>(
    store: &S,
    toggle: PreferenceToggle,
    value: bool,
) -> Result<Preferences, AppError> {
    let mut preferences = load(store)?;
    toggle.apply(&mut preferences, value);
    save(store, &preferences)?;
    log::info!("[PREFS] {:?} set to {}", toggle, value);
    Ok(preferences)
}

/// Append an entry to the rotation list.
pub fn add_rotation<S: KeyValueStore>(store: &S, content: &str) -> Result<Preferences, AppError> {
    let mut preferences = load(store)?;
    if preferences.rotating_content.is_empty() {
        preferences.rotating_box_index = 0;
    }
    preferences.rotating_content.push(content.to_string());
    save(store, &preferences)?;
    Ok(preferences)
}

/// Empty the rotation list and reset its index.
pub fn clear_rotation<S: KeyValueStore>(store: &S) -> Result<Preferences, AppError> {
    let mut preferences = load(store)?;
    preferences.rotating_content.clear();
    preferences.rotating_box_index = 0;
    save(store, &preferences)?;
    Ok(preferences)
}
