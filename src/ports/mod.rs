mod clipboard;
mod key_value_store;
mod selection_source;

pub use clipboard::ClipboardPort;
pub use key_value_store::{KeyValueStore, KeyValueStoreExt, StoreBatch, StoreValues};
pub use selection_source::{NoSelection, SelectionSource};
