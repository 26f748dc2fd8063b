//! Non-interactive UI for CI/headless environments.

use crate::error::Result;

use super::{OutputMode, ProgressSpinner, SpinnerHandle, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Writes plain text without colors or spinners and never blocks on input.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        println!("✓ {}", msg);
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("== {} ==", title);
        }
    }

    fn show_hint(&mut self, hint: &str) {
        println!("  {}", hint);
    }

    fn show_progress(&mut self, current: usize, total: usize) {
        if self.mode.shows_status() {
            print!("[{}/{}] ", current, total);
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_status() {
            println!("{}", message);
        }
        Box::new(ProgressSpinner::hidden())
    }

    fn wait_for_key(&mut self, _prompt: &str) -> Result<()> {
        tracing::debug!("Skipping keypress wait in non-interactive mode");
        Ok(())
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
