//! Profile enumeration, creation, renaming and selection.

use crate::domain::{
    AppError, CURRENT_PROFILE_KEY, DEFAULT_PROFILE, PROFILES_KEY, order_key,
    validate_profile_name,
};
use crate::ports::{KeyValueStore, KeyValueStoreExt, StoreBatch};

use super::session::Session;

/// Saved profile names, or `["default"]` when none are saved.
pub fn list<S: KeyValueStore>(store: &S) -> Result<Vec<String>, AppError> {
    let profiles: Option<Vec<String>> = store.get_value(PROFILES_KEY)?;
    Ok(match profiles {
        Some(profiles) if !profiles.is_empty() => profiles,
        _ => vec![DEFAULT_PROFILE.to_string()],
    })
}

/// Name of the active profile.
pub fn current<S: KeyValueStore>(store: &S) -> Result<String, AppError> {
    let current: Option<String> = store.get_value(CURRENT_PROFILE_KEY)?;
    Ok(current.unwrap_or_else(|| DEFAULT_PROFILE.to_string()))
}

/// Resolve the profile a command operates on: an explicit, listed name or the active one.
pub fn resolve<S: KeyValueStore>(store: &S, requested: Option<&str>) -> Result<String, AppError> {
    match requested {
        Some(name) => {
            if !list(store)?.iter().any(|p| p == name) {
                return Err(AppError::ProfileNotFound(name.to_string()));
            }
            Ok(name.to_string())
        }
        None => current(store),
    }
}

/// Switch the active profile and load it.
pub fn select<S: KeyValueStore>(
    store: &S,
    name: &str,
    default_box_count: usize,
) -> Result<Session, AppError> {
    if !list(store)?.iter().any(|p| p == name) {
        return Err(AppError::ProfileNotFound(name.to_string()));
    }
    store.put_value(CURRENT_PROFILE_KEY, &name)?;
    log::info!("[PROFILE] Selected profile '{}'", name);
    Session::load(store, name, default_box_count)
}

/// Add a new profile and make it active.
///
/// A duplicate name leaves both the list and the active profile untouched.
pub fn create<S: KeyValueStore>(store: &S, name: &str) -> Result<String, AppError> {
    let name = validate_profile_name(name)?;
    let mut profiles = list(store)?;
    if profiles.contains(&name) {
        log::warn!("[PROFILE] Profile '{}' already exists", name);
        return Err(AppError::ProfileExists(name));
    }
    profiles.push(name.clone());

    let batch = StoreBatch::new().put(PROFILES_KEY, &profiles)?.put(CURRENT_PROFILE_KEY, &name)?;
    store.apply(batch).inspect_err(|e| {
        log::error!("[PROFILE] Error creating profile '{}': {}", name, e);
    })?;
    log::info!("[PROFILE] Created profile '{}'", name);
    Ok(name)
}

/// Result of a rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOutcome {
    pub from: String,
    pub to: String,
    /// Whether the renamed profile was the active one.
    pub was_current: bool,
}

/// Move a profile's record and order record to a new name.
///
/// The copy, the removal of the old keys, and the list update are one store batch.
pub fn rename<S: KeyValueStore>(
    store: &S,
    old_name: &str,
    new_name: &str,
) -> Result<RenameOutcome, AppError> {
    let new_name = validate_profile_name(new_name)?;
    let mut profiles = list(store)?;
    let index = profiles
        .iter()
        .position(|p| p == old_name)
        .ok_or_else(|| AppError::ProfileNotFound(old_name.to_string()))?;
    if new_name == old_name {
        return Ok(RenameOutcome {
            from: old_name.to_string(),
            to: new_name,
            was_current: current(store)? == old_name,
        });
    }
    if profiles.contains(&new_name) {
        return Err(AppError::ProfileExists(new_name));
    }
    profiles[index] = new_name.clone();

    let old_order = order_key(old_name);
    let mut values = store.get(&[old_name, old_order.as_str()])?;
    let was_current = current(store)? == old_name;

    let mut batch = StoreBatch::new().put(PROFILES_KEY, &profiles)?;
    if let Some(record) = values.remove(old_name) {
        batch.set.insert(new_name.clone(), record);
        batch = batch.delete(old_name);
    }
    if let Some(order) = values.remove(&old_order) {
        batch.set.insert(order_key(&new_name), order);
        batch = batch.delete(old_order);
    }
    if was_current {
        batch = batch.put(CURRENT_PROFILE_KEY, &new_name)?;
    }

    store.apply(batch).inspect_err(|e| {
        log::error!("[PROFILE] Error renaming profile '{}': {}", old_name, e);
    })?;
    log::info!("[PROFILE] Renamed profile '{}' to '{}'", old_name, new_name);

    Ok(RenameOutcome { from: old_name.to_string(), to: new_name, was_current })
}
