use std::fs;
use std::io;
use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::ClipboardPort;

/// Clipboard stand-in backed by a plain text file.
#[derive(Debug, Clone)]
pub struct FileClipboard {
    path: PathBuf,
}

impl FileClipboard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ClipboardPort for FileClipboard {
    fn read_text(&mut self) -> Result<String, AppError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(text),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(String::new()),
            Err(err) => Err(AppError::ClipboardError(format!(
                "cannot read {}: {}",
                self.path.display(),
                err
            ))),
        }
    }

    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        fs::write(&self.path, text).map_err(|err| {
            AppError::ClipboardError(format!("cannot write {}: {}", self.path.display(), err))
        })
    }
}
