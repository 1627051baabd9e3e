mod app_config;
pub mod parse;

pub use app_config::{
    AppConfig, BoxesConfig, ClipboardBackend, ClipboardConfig, SelectionBackend, StorageConfig,
    SyncConfig,
};
