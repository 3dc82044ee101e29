//! Output mode and status writer.

use std::str::FromStr;

use super::theme::Theme;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show all output including per-item progress detail.
    Verbose,
    /// Show progress and status only.
    #[default]
    Normal,
    /// Show warnings and errors only.
    Quiet,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbose" => Ok(Self::Verbose),
            "normal" => Ok(Self::Normal),
            "quiet" => Ok(Self::Quiet),
            _ => Err(format!("unknown output mode: {}", s)),
        }
    }
}

impl OutputMode {
    /// Check if this mode shows routine status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}

/// Styled status writer that respects the output mode.
#[derive(Debug)]
pub struct Output {
    mode: OutputMode,
    theme: Theme,
}

impl Output {
    /// Create a new output writer.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            theme: Theme::detect(),
        }
    }

    /// Get the output mode.
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Get the active theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Write a plain status line.
    pub fn println(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    /// Write a header/banner line.
    pub fn header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.header.apply_to(title));
        }
    }

    /// Write a numbered step header, e.g. `[3/12] Install formulae`.
    pub fn step_header(&mut self, current: usize, total: usize, name: &str) {
        if self.mode.shows_status() {
            println!(
                "{} {}",
                self.theme
                    .step_number
                    .apply_to(format!("[{}/{}]", current, total)),
                self.theme.highlight.apply_to(name)
            );
        }
    }

    /// Write a success line.
    pub fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    /// Write a warning line. Shown in all modes.
    pub fn warning(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_warning(msg));
    }

    /// Write an error line. Shown in all modes.
    pub fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }
}
