pub mod clipboard_arboard;
pub mod clipboard_file;
pub mod configured;
pub mod json_file_store;
pub mod selection_command;
pub mod selection_primary;

pub use clipboard_arboard::ArboardClipboard;
pub use clipboard_file::FileClipboard;
pub use configured::{ConfiguredClipboard, ConfiguredSelection};
pub use json_file_store::JsonFileStore;
pub use selection_command::CommandSelectionSource;
pub use selection_primary::PrimarySelection;
