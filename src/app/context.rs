use crate::app::commands::{profiles, session::Session};
use crate::domain::{AppConfig, AppError};
use crate::ports::{ClipboardPort, KeyValueStore, SelectionSource};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: KeyValueStore, C: ClipboardPort, T: SelectionSource> {
    store: S,
    clipboard: C,
    selection: T,
    config: AppConfig,
}

impl<S: KeyValueStore, C: ClipboardPort, T: SelectionSource> AppContext<S, C, T> {
    /// Create a new application context.
    pub fn new(store: S, clipboard: C, selection: T, config: AppConfig) -> Self {
        Self { store, clipboard, selection, config }
    }

    /// Get a reference to the key-value store.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn clipboard_mut(&mut self) -> &mut C {
        &mut self.clipboard
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Borrow the store alongside the clipboard and selection source.
    pub fn parts_mut(&mut self) -> (&S, &mut C, &mut T) {
        (&self.store, &mut self.clipboard, &mut self.selection)
    }

    /// Load the requested profile, or the active one.
    pub fn open_session(&self, profile: Option<&str>) -> Result<Session, AppError> {
        let name = profiles::resolve(&self.store, profile)?;
        Session::load(&self.store, &name, self.config.boxes.default_count)
    }
}
