use crate::domain::AppError;
use crate::ports::ClipboardPort;

/// Mock clipboard for testing.
#[derive(Default)]
pub struct MockClipboard {
    pub contents: String,
    pub written: Vec<String>,
    pub should_fail: bool,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        Self { contents: text.to_string(), ..Self::default() }
    }

    pub fn failing() -> Self {
        Self { should_fail: true, ..Self::default() }
    }

    pub fn last_written(&self) -> Option<&str> {
        self.written.last().map(String::as_str)
    }
}

impl ClipboardPort for MockClipboard {
    fn read_text(&mut self) -> Result<String, AppError> {
        if self.should_fail {
            return Err(AppError::ClipboardError("Mock clipboard error".to_string()));
        }
        Ok(self.contents.clone())
    }

    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        if self.should_fail {
            return Err(AppError::ClipboardError("Mock clipboard error".to_string()));
        }
        self.contents = text.to_string();
        self.written.push(text.to_string());
        Ok(())
    }
}
