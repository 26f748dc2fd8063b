//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use serial_bootstrap::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Installing pyserial...");
//! ui.success("Installation complete!");
//! ui.wait_for_key("Press any key to exit...").unwrap();
//!
//! assert!(ui.has_message("pyserial"));
//! assert!(ui.has_success("complete"));
//! assert_eq!(ui.key_waits(), 1);
//! ```

use crate::error::Result;

use super::{OutputMode, SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    key_error: Option<std::io::ErrorKind>,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    hints: Vec<String>,
    progress: Vec<(usize, usize)>,
    spinners: Vec<String>,
    key_prompts: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Make every later `wait_for_key` record its prompt, then fail with `kind`.
    pub fn fail_key_waits(&mut self, kind: std::io::ErrorKind) {
        self.key_error = Some(kind);
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all captured hints.
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Get all captured progress updates.
    pub fn progress(&self) -> &[(usize, usize)] {
        &self.progress
    }

    /// Get all spinner messages that were started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Number of times `wait_for_key` was called.
    pub fn key_waits(&self) -> usize {
        self.key_prompts.len()
    }

    /// Prompts passed to `wait_for_key`.
    pub fn key_prompts(&self) -> &[String] {
        &self.key_prompts
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific hint was shown.
    pub fn has_hint(&self, msg: &str) -> bool {
        self.hints.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_hint(&mut self, hint: &str) {
        self.hints.push(hint.to_string());
    }

    fn show_progress(&mut self, current: usize, total: usize) {
        self.progress.push((current, total));
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner::new())
    }

    fn wait_for_key(&mut self, prompt: &str) -> Result<()> {
        self.key_prompts.push(prompt.to_string());
        match self.key_error {
            Some(kind) => Err(std::io::Error::from(kind).into()),
            None => Ok(()),
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Mock spinner that records its lifecycle.
#[derive(Debug, Default)]
pub struct MockSpinner {
    finish_message: Option<String>,
    succeeded: Option<bool>,
}

impl MockSpinner {
    /// Create a new mock spinner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the final finish message.
    pub fn finish_message(&self) -> Option<&str> {
        self.finish_message.as_deref()
    }

    /// `Some(true)` after `finish_success`, `Some(false)` after `finish_error`.
    pub fn succeeded(&self) -> Option<bool> {
        self.succeeded
    }
}

impl SpinnerHandle for MockSpinner {
    fn finish_success(&mut self, msg: &str) {
        self.finish_message = Some(msg.to_string());
        self.succeeded = Some(true);
    }

    fn finish_error(&mut self, msg: &str) {
        self.finish_message = Some(msg.to_string());
        self.succeeded = Some(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_each_channel_separately() {
        let mut ui = MockUI::new();
        ui.message("m");
        ui.success("s");
        ui.warning("w");
        ui.error("e");
        ui.show_header("h");
        ui.show_hint("hint");
        ui.show_progress(1, 3);

        assert_eq!(ui.messages(), ["m"]);
        assert_eq!(ui.successes(), ["s"]);
        assert_eq!(ui.warnings(), ["w"]);
        assert_eq!(ui.errors(), ["e"]);
        assert_eq!(ui.headers(), ["h"]);
        assert_eq!(ui.hints(), ["hint"]);
        assert_eq!(ui.progress(), [(1, 3)]);
    }

    #[test]
    fn records_key_waits() {
        let mut ui = MockUI::new();
        assert_eq!(ui.key_waits(), 0);
        ui.wait_for_key("Press any key").unwrap();
        assert_eq!(ui.key_waits(), 1);
        assert_eq!(ui.key_prompts(), ["Press any key"]);
    }

    #[test]
    fn records_spinners() {
        let mut ui = MockUI::new();
        let mut spinner = ui.start_spinner("Checking");
        spinner.finish_success("ok");
        assert_eq!(ui.spinners(), ["Checking"]);
    }

    #[test]
    fn mock_spinner_tracks_outcome() {
        let mut spinner = MockSpinner::new();
        spinner.finish_error("nope");
        assert_eq!(spinner.finish_message(), Some("nope"));
        assert_eq!(spinner.succeeded(), Some(false));
    }

    #[test]
    fn keeps_mode_and_is_never_interactive() {
        let ui = MockUI::with_mode(OutputMode::Quiet);
        assert!(!ui.is_interactive());
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn failing_key_wait_still_records_prompt() {
        let mut ui = MockUI::new();
        ui.fail_key_waits(std::io::ErrorKind::Interrupted);

        let err = ui.wait_for_key("Press any key").unwrap_err();

        assert!(matches!(err, crate::error::BootstrapError::Io(_)));
        assert_eq!(ui.key_waits(), 1);
    }
}
