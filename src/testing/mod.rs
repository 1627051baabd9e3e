mod mock_clipboard;
mod mock_selection;
mod mock_store;

pub use mock_clipboard::MockClipboard;
pub use mock_selection::MockSelection;
pub use mock_store::MockStore;
