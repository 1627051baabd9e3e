use std::io::{self, Read, Write};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::domain::{AppError, SelectionRequest, SelectionResponse};
use crate::ports::SelectionSource;

/// Selection source backed by an external responder program.
///
/// The request is written to the program's stdin as one JSON line and the response is
/// read from its stdout as JSON. A responder that does not exit within the timeout is
/// killed and reported as unavailable.
#[derive(Debug, Clone)]
pub struct CommandSelectionSource {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);
const POLL_STEP: Duration = Duration::from_millis(5);

impl CommandSelectionSource {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self { program: program.into(), args, timeout: DEFAULT_TIMEOUT }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Build from a `[program, args...]` list.
    pub fn from_argv(argv: &[String]) -> Result<Self, AppError> {
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| AppError::config_error("selection command is empty"))?;
        Ok(Self::new(program.clone(), args.to_vec()))
    }

    fn describe(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn unavailable(&self, details: impl std::fmt::Display) -> AppError {
        AppError::SelectionUnavailable(format!("'{}': {}", self.describe(), details))
    }

    /// Wait for `child` until the timeout, killing it once the deadline passes.
    fn wait_bounded(&self, child: &mut Child) -> Result<Option<ExitStatus>, AppError> {
        let deadline = Instant::now() + self.timeout;
        loop {
            if let Some(status) = child.try_wait().map_err(|e| self.unavailable(e))? {
                return Ok(Some(status));
            }
            let now = Instant::now();
            if now >= deadline {
                if let Err(e) = child.kill() {
                    log::debug!("[SELECTION] Could not kill '{}': {}", self.describe(), e);
                }
                child.wait().map_err(|e| self.unavailable(e))?;
                return Ok(None);
            }
            thread::sleep(POLL_STEP.min(deadline - now));
        }
    }
}

fn drain<R: Read + Send + 'static>(mut pipe: R) -> JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Err(e) = pipe.read_to_end(&mut buf) {
            log::debug!("[SELECTION] Responder output cut short: {}", e);
        }
        buf
    })
}

fn collect(reader: Option<JoinHandle<Vec<u8>>>) -> Vec<u8> {
    reader.and_then(|handle| handle.join().ok()).unwrap_or_default()
}

impl SelectionSource for CommandSelectionSource {
    fn request(&mut self, request: &SelectionRequest) -> Result<SelectionResponse, AppError> {
        let payload = serde_json::to_string(request)?;

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.unavailable(e))?;

        if let Some(mut stdin) = child.stdin.take() {
            // A responder that ignores its input may already have exited.
            match writeln!(stdin, "{}", payload) {
                Err(e) if e.kind() != io::ErrorKind::BrokenPipe => return Err(self.unavailable(e)),
                _ => {}
            }
        }

        let stdout = child.stdout.take().map(drain);
        let stderr = child.stderr.take().map(drain);

        // Readers of a killed responder are left detached; a grandchild may still hold
        // the pipes open.
        let Some(status) = self.wait_bounded(&mut child)? else {
            log::warn!("[SELECTION] '{}' gave no answer within {:?}", self.describe(), self.timeout);
            return Err(self.unavailable(format!("no answer within {:?}", self.timeout)));
        };
        if !status.success() {
            let stderr = String::from_utf8_lossy(&collect(stderr)).trim().to_string();
            let details = if stderr.is_empty() { status.to_string() } else { stderr };
            return Err(self.unavailable(details));
        }

        let stdout = collect(stdout);
        let stdout = String::from_utf8_lossy(&stdout);
        let stdout = stdout.trim();
        if stdout.is_empty() {
            return Ok(SelectionResponse::default());
        }
        serde_json::from_str(stdout).map_err(|e| self.unavailable(format!("invalid response: {}", e)))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn shell(script: &str) -> CommandSelectionSource {
        CommandSelectionSource::new("sh", vec!["-c".to_string(), script.to_string()])
    }

    #[test]
    fn responder_receives_request_and_answers() {
        let mut source = shell(
            r#"read line; case "$line" in *getSelectedText*) printf '{"selectedText":"picked"}';; esac"#,
        );

        let response = source.request(&SelectionRequest::get_selected_text()).unwrap();

        assert_eq!(response.selected_text, "picked");
    }

    #[test]
    fn silent_responder_means_no_selection() {
        let mut source = shell("cat > /dev/null");

        let response = source.request(&SelectionRequest::get_selected_text()).unwrap();

        assert_eq!(response.selected_text, "");
    }

    #[test]
    fn failing_responder_is_unavailable() {
        let mut source = shell("echo 'no tab' >&2; exit 3");

        let err = source.request(&SelectionRequest::get_selected_text()).unwrap_err();

        assert!(matches!(err, AppError::SelectionUnavailable(ref msg) if msg.contains("no tab")));
    }

    #[test]
    fn slow_responder_is_killed_after_timeout() {
        let mut source = shell("sleep 5").with_timeout(Duration::from_millis(200));
        let started = Instant::now();

        let err = source.request(&SelectionRequest::get_selected_text()).unwrap_err();

        assert!(matches!(err, AppError::SelectionUnavailable(ref msg) if msg.contains("no answer")));
        assert!(started.elapsed() < Duration::from_secs(3));
    }

    #[test]
    fn missing_program_is_unavailable() {
        let mut source = CommandSelectionSource::new("clipmix-no-such-responder", vec![]);

        let err = source.request(&SelectionRequest::get_selected_text()).unwrap_err();

        assert!(matches!(err, AppError::SelectionUnavailable(_)));
    }

    #[test]
    fn empty_argv_is_a_config_error() {
        assert!(matches!(
            CommandSelectionSource::from_argv(&[]),
            Err(AppError::Configuration(_))
        ));
    }
}
