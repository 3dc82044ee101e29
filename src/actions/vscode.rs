//! VS Code extension installs.

use std::collections::HashSet;

use crate::error::Result;
use crate::pipeline::Step;
use crate::shell;
use crate::ui::ProgressSpinner;

use super::aggregate_failures;

/// Install the configured extensions. Confirmation-gated: not every
/// machine being provisioned is an editor machine.
pub fn extensions_step(extensions: Vec<String>) -> Step {
    Step::new("Install editor extensions", move || {
        install_extensions(&extensions)
    })
    .optional()
    .with_confirmation()
}

fn install_extensions(extensions: &[String]) -> Result<()> {
    if !shell::command_exists("code") {
        return Err(anyhow::anyhow!(
            "the `code` CLI is not available; install VS Code and its shell command first"
        )
        .into());
    }

    let installed = shell::run_capture("code", &["--list-extensions"])
        .map(|out| parse_installed(&out))
        .unwrap_or_default();

    let mut failed = Vec::new();
    for extension in extensions {
        if installed.contains(&extension.to_lowercase()) {
            tracing::debug!(extension = %extension, "already installed");
            continue;
        }

        let spinner = ProgressSpinner::new(&format!("Installing {}", extension));
        match shell::run_capture("code", &["--install-extension", extension, "--force"]) {
            Ok(_) => spinner.finish_success(extension),
            Err(e) => {
                tracing::warn!(extension = %extension, error = %e, "install failed");
                spinner.finish_error(extension);
                failed.push(extension.clone());
            }
        }
    }

    aggregate_failures("editor extensions", failed)
}

/// Extension ids are case-insensitive; normalize for the presence check.
fn parse_installed(output: &str) -> HashSet<String> {
    output
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty())
        .collect()
}
