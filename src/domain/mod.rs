pub mod box_record;
pub mod configuration;
pub mod error;
pub mod messages;
pub mod preferences;
pub mod profile;

pub use box_record::{
    BoxId, BoxKind, BoxRecord, CLIPBOARD_BOX, CLIPBOARD_CONTAINER, MirrorSettings, SELECTED_TEXT_BOX,
    SELECTED_TEXT_CONTAINER, merge_incoming,
};
pub use configuration::{
    AppConfig, BoxesConfig, ClipboardBackend, ClipboardConfig, SelectionBackend, StorageConfig,
    SyncConfig,
};
pub use error::AppError;
pub use messages::{SelectionRequest, SelectionResponse};
pub use preferences::{PreferenceToggle, Preferences};
pub use profile::{
    CURRENT_PROFILE_KEY, DEFAULT_PROFILE, PREFERENCES_KEY, PROFILES_KEY, ProfileRecord, order_key,
    validate_profile_name,
};
