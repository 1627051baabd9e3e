//! Environment-backed configuration loading.
//!
//! Pure schema parsing lives in `domain::configuration`.

mod load_config;
mod paths;

pub use load_config::{LoadedConfig, load_config, load_config_from};
pub use paths::{HOME_ENV, config_dir, data_dir};
