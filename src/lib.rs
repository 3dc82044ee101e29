//! rigup - Interactive macOS provisioning automation.
//!
//! rigup replaces ad-hoc machine-setup shell scripts with a declarative
//! YAML configuration and an ordered, confirmation-gated step pipeline:
//! update the OS, install Homebrew packages and App Store apps, configure
//! developer runtimes, apply system preference toggles, lay out the Dock,
//! set Git identity, and optionally restart.
//!
//! # Modules
//!
//! - [`actions`] - Adapters from config sections to provisioning steps
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration discovery, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`pipeline`] - Step model, executor, and sequential runner
//! - [`plan`] - Assembly of the ordered step catalog
//! - [`preflight`] - Platform and network prerequisite checks
//! - [`privilege`] - Background sudo keep-alive
//! - [`shell`] - External command execution
//! - [`ui`] - Prompts, spinners, and terminal output

pub mod actions;
pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod plan;
pub mod preflight;
pub mod privilege;
pub mod shell;
pub mod ui;

pub use error::{Result, RigupError};
