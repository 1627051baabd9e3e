use serde::{Deserialize, Serialize};

use super::box_record::{BoxRecord, MirrorSettings};
use super::error::AppError;

/// Key holding the ordered list of profile names.
pub const PROFILES_KEY: &str = "profiles";
/// Key holding the preferences record.
pub const PREFERENCES_KEY: &str = "preferences";
/// Key holding the name of the active profile.
pub const CURRENT_PROFILE_KEY: &str = "currentProfile";
/// Profile used when none has been created.
pub const DEFAULT_PROFILE: &str = "default";

const ORDER_PREFIX: &str = "order_";

/// Storage key of a profile's order record.
pub fn order_key(profile: &str) -> String {
    format!("{}{}", ORDER_PREFIX, profile)
}

/// Validate a user-supplied profile name.
///
/// Names double as storage keys, so they may not collide with the fixed keys or
/// with the order key namespace.
pub fn validate_profile_name(name: &str) -> Result<String, AppError> {
    let trimmed = name.trim();
    let reserved = [PROFILES_KEY, PREFERENCES_KEY, CURRENT_PROFILE_KEY];
    if trimmed.is_empty() || trimmed.starts_with(ORDER_PREFIX) || reserved.contains(&trimmed) {
        return Err(AppError::InvalidProfileName(name.to_string()));
    }
    Ok(trimmed.to_string())
}

/// Everything persisted for one profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    #[serde(default)]
    pub boxes: Vec<BoxRecord>,
    #[serde(default)]
    pub selected_text: String,
    #[serde(default)]
    pub clipboard_content: String,
    #[serde(default)]
    pub selected_text_box: MirrorSettings,
    #[serde(default)]
    pub clipboard_box: MirrorSettings,
}
