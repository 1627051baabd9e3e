use arboard::Clipboard;

use crate::domain::AppError;
use crate::ports::ClipboardPort;

/// Arboard-based system clipboard.
///
/// The platform handle is opened on first use so that commands which never touch the
/// clipboard also work on machines without a display.
#[derive(Default)]
pub struct ArboardClipboard {
    clipboard: Option<Clipboard>,
    wait_for_owner: bool,
}

impl ArboardClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// On Linux, keep serving written text until another application owns the
    /// clipboard. X11 and Wayland drop the contents when the writing process exits.
    pub fn waiting_for_owner(mut self) -> Self {
        self.wait_for_owner = true;
        self
    }

    pub fn waits_for_owner(&self) -> bool {
        self.wait_for_owner
    }

    fn handle(&mut self) -> Result<&mut Clipboard, AppError> {
        if self.clipboard.is_none() {
            let clipboard =
                Clipboard::new().map_err(|e| AppError::ClipboardError(format!("{}", e)))?;
            self.clipboard = Some(clipboard);
        }
        self.clipboard
            .as_mut()
            .ok_or_else(|| AppError::ClipboardError("clipboard unavailable".to_string()))
    }
}

impl ClipboardPort for ArboardClipboard {
    fn read_text(&mut self) -> Result<String, AppError> {
        self.handle()?.get_text().map_err(|e| AppError::ClipboardError(format!("{}", e)))
    }

    #[cfg(target_os = "linux")]
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        use arboard::SetExtLinux;

        let wait = self.wait_for_owner;
        let clipboard = self.handle()?;
        let result = if wait {
            log::info!("[CLIPBOARD] Holding the clipboard until another application takes it");
            clipboard.set().wait().text(text)
        } else {
            clipboard.set_text(text)
        };
        result.map_err(|e| AppError::ClipboardError(format!("{}", e)))
    }

    #[cfg(not(target_os = "linux"))]
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        self.handle()?.set_text(text).map_err(|e| AppError::ClipboardError(format!("{}", e)))
    }
}
