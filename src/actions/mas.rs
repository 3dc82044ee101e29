//! Mac App Store installs via the `mas` CLI.

use std::collections::HashSet;

use crate::config::MasApp;
use crate::error::Result;
use crate::pipeline::Step;
use crate::shell;
use crate::ui::ProgressSpinner;

use super::aggregate_failures;

/// Install the configured App Store apps, skipping what `mas list`
/// already reports. Optional: store installs fail for account reasons
/// rigup can't fix (not signed in, app not purchased).
pub fn store_apps_step(apps: Vec<MasApp>) -> Step {
    Step::new("Install App Store apps", move || install_apps(&apps)).optional()
}

fn install_apps(apps: &[MasApp]) -> Result<()> {
    if !shell::command_exists("mas") {
        return Err(anyhow::anyhow!(
            "mas is not installed; add it to packages.formulae"
        )
        .into());
    }

    let installed = shell::run_capture("mas", &["list"])
        .map(|out| parse_installed_ids(&out))
        .unwrap_or_default();

    let mut failed = Vec::new();
    for app in apps {
        if installed.contains(&app.id) {
            tracing::debug!(app = %app.name, "already installed");
            continue;
        }

        let spinner = ProgressSpinner::new(&format!("Installing {}", app.name));
        match shell::run_capture("mas", &["install", &app.id.to_string()]) {
            Ok(_) => spinner.finish_success(&app.name),
            Err(e) => {
                tracing::warn!(app = %app.name, error = %e, "install failed");
                spinner.finish_error(&app.name);
                failed.push(app.name.clone());
            }
        }
    }

    aggregate_failures("App Store apps", failed)
}

/// Parse the ids out of `mas list` output (`<id> <name> (<version>)`).
fn parse_installed_ids(output: &str) -> HashSet<u64> {
    output
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .filter_map(|id| id.parse().ok())
        .collect()
}
