//! Progress spinners.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use super::SpinnerHandle;

/// A progress spinner for the in-flight check.
///
/// The message may span several lines; the loading skeleton is drawn
/// that way beneath the spinner title.
pub struct ProgressSpinner {
    bar: ProgressBar,
}

impl ProgressSpinner {
    /// Create a new spinner with a message.
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        // The template is a literal and always parses.
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.blue} {msg}")
        {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar }
    }

    /// Create a spinner that doesn't show (for silent mode).
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }
}

impl SpinnerHandle for ProgressSpinner {
    fn set_message(&mut self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }

    fn finish_clear(&mut self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_creation() {
        let spinner = ProgressSpinner::new("Checking...");
        drop(spinner);
    }

    #[test]
    fn hidden_spinner() {
        let mut spinner = ProgressSpinner::hidden();
        spinner.finish_clear();
        assert!(spinner.bar.is_finished());
    }

    #[test]
    fn spinner_set_multiline_message() {
        let mut spinner = ProgressSpinner::hidden();
        spinner.set_message("Checking...\n░░░░\n░░");
        assert_eq!(spinner.bar.message().lines().count(), 3);
        spinner.finish_clear();
    }

    #[test]
    fn spinner_finish_clear() {
        let mut spinner = ProgressSpinner::new("Checking...");
        spinner.finish_clear();
        assert!(spinner.bar.is_finished());
    }
}
