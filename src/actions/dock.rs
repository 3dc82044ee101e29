//! Dock layout via `dockutil`.

use std::path::Path;

use crate::config::DockConfig;
use crate::error::Result;
use crate::pipeline::Step;
use crate::shell;
use crate::ui::ProgressSpinner;

use super::aggregate_failures;

/// Apply the configured Dock layout, restarting the Dock once at the end.
pub fn dock_step(config: DockConfig) -> Step {
    Step::new("Configure Dock layout", move || apply_dock(&config)).optional()
}

fn apply_dock(config: &DockConfig) -> Result<()> {
    if !shell::command_exists("dockutil") {
        return Err(anyhow::anyhow!(
            "dockutil is not installed; add it to packages.formulae"
        )
        .into());
    }

    if config.replace {
        let spinner = ProgressSpinner::new("Clearing Dock");
        match shell::run_capture("dockutil", &["--remove", "all", "--no-restart"]) {
            Ok(_) => spinner.finish_success("Cleared Dock"),
            Err(e) => {
                spinner.finish_error("Clearing Dock");
                return Err(e);
            }
        }
    }

    for label in &config.remove {
        // Removal of an item that isn't present is not worth failing over.
        if !shell::run_quiet("dockutil", &["--remove", label, "--no-restart"]) {
            tracing::warn!(item = %label, "dock item not removed (may not exist)");
        }
    }

    let mut failed = Vec::new();
    for app_path in &config.add {
        let label = dock_label(app_path);
        if shell::run_quiet("dockutil", &["--find", &label]) {
            tracing::debug!(app = %label, "already in Dock");
            continue;
        }

        let spinner = ProgressSpinner::new(&format!("Adding {} to Dock", label));
        match shell::run_capture("dockutil", &["--add", app_path, "--no-restart"]) {
            Ok(_) => spinner.finish_success(&label),
            Err(e) => {
                tracing::warn!(app = %label, error = %e, "dock add failed");
                spinner.finish_error(&label);
                failed.push(label);
            }
        }
    }

    // One restart at the end instead of one per change.
    shell::run_quiet("killall", &["Dock"]);

    aggregate_failures("Dock items", failed)
}

/// The label dockutil knows an app by: its bundle name without `.app`.
fn dock_label(app_path: &str) -> String {
    Path::new(app_path)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(app_path)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_strips_directory_and_extension() {
        assert_eq!(dock_label("/Applications/Safari.app"), "Safari");
        assert_eq!(
            dock_label("/Applications/Visual Studio Code.app"),
            "Visual Studio Code"
        );
    }

    #[test]
    fn label_passes_through_bare_names() {
        assert_eq!(dock_label("Launchpad"), "Launchpad");
    }

    #[test]
    fn dock_step_is_optional() {
        let step = dock_step(DockConfig::default());
        assert!(step.optional);
        assert_eq!(step.name, "Configure Dock layout");
    }
}
