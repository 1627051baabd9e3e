use crate::domain::{AppError, SelectionRequest, SelectionResponse};
use crate::ports::SelectionSource;

/// Selection source reading the desktop primary selection.
///
/// Only X11 and Wayland expose a primary selection; other platforms report the source
/// as unavailable.
#[derive(Default)]
pub struct PrimarySelection {
    #[cfg(target_os = "linux")]
    clipboard: Option<arboard::Clipboard>,
}

impl PrimarySelection {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(target_os = "linux")]
impl SelectionSource for PrimarySelection {
    fn request(&mut self, _request: &SelectionRequest) -> Result<SelectionResponse, AppError> {
        use arboard::{GetExtLinux, LinuxClipboardKind};

        if self.clipboard.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| AppError::SelectionUnavailable(format!("{}", e)))?;
            self.clipboard = Some(clipboard);
        }
        let clipboard = self
            .clipboard
            .as_mut()
            .ok_or_else(|| AppError::SelectionUnavailable("display unavailable".to_string()))?;

        match clipboard.get().clipboard(LinuxClipboardKind::Primary).text() {
            Ok(selected_text) => Ok(SelectionResponse { selected_text }),
            Err(arboard::Error::ContentNotAvailable) => Ok(SelectionResponse::default()),
            Err(e) => Err(AppError::SelectionUnavailable(format!("{}", e))),
        }
    }
}

#[cfg(not(target_os = "linux"))]
impl SelectionSource for PrimarySelection {
    fn request(&mut self, _request: &SelectionRequest) -> Result<SelectionResponse, AppError> {
        Err(AppError::SelectionUnavailable(
            "primary selection is only available on Linux".to_string(),
        ))
    }
}
