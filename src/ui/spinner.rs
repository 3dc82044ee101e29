//! Progress spinners.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use super::theme::Theme;

/// A progress spinner for long-running quiet operations.
///
/// Package-manager steps stream their child output directly and don't use
/// spinners; these wrap capture-mode work (settings, Dock, probes).
pub struct ProgressSpinner {
    bar: ProgressBar,
}

impl ProgressSpinner {
    /// Create a new spinner with a message.
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar }
    }

    /// Create a spinner that doesn't show (for quiet mode).
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Update the spinner message.
    pub fn set_message(&self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }

    /// Finish, marking the operation successful.
    pub fn finish_success(&self, msg: &str) {
        self.finish_with(Theme::detect().format_success(msg));
    }

    /// Finish, marking the operation failed.
    pub fn finish_error(&self, msg: &str) {
        self.finish_with(Theme::detect().format_error(msg));
    }

    /// Finish, marking the operation skipped.
    pub fn finish_skipped(&self, msg: &str) {
        self.finish_with(Theme::detect().format_skipped(msg));
    }

    fn finish_with(&self, line: String) {
        self.bar.set_style(
            ProgressStyle::default_spinner()
                .template("{msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        self.bar.finish_with_message(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_spinner_finishes_quietly() {
        let spinner = ProgressSpinner::hidden();
        spinner.set_message("working");
        spinner.finish_success("done");
    }

    #[test]
    fn spinner_accepts_finish_variants() {
        ProgressSpinner::hidden().finish_error("bad");
        ProgressSpinner::hidden().finish_skipped("skipped");
    }
}
