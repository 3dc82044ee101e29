//! Developer runtimes via a version manager (`mise` by default).

use std::path::{Path, PathBuf};

use crate::config::RuntimesConfig;
use crate::error::Result;
use crate::pipeline::Step;
use crate::shell;

use super::aggregate_failures;

/// Pin the configured tools globally. Confirmation-gated: runtime
/// managers rewrite shell activation state some operators manage by hand.
pub fn runtimes_step(config: RuntimesConfig) -> Step {
    Step::new("Configure developer runtimes", move || {
        configure_runtimes(&config)
    })
    .optional()
    .with_confirmation()
}

fn configure_runtimes(config: &RuntimesConfig) -> Result<()> {
    let Some(manager) = manager_command(&config.manager) else {
        return Err(anyhow::anyhow!(
            "runtime manager `{}` not found on PATH or under the user install locations",
            config.manager
        )
        .into());
    };

    let mut failed = Vec::new();
    for tool in &config.tools {
        let spec = tool.spec();
        tracing::info!(tool = %spec, "pinning global runtime");
        if let Err(e) = shell::run(&manager, &["use", "--global", &spec]) {
            tracing::warn!(tool = %spec, error = %e, "pin failed");
            failed.push(spec);
        }
    }

    aggregate_failures("runtimes", failed)
}

/// Resolve the manager executable: PATH first, then the usual per-user
/// install locations.
fn manager_command(name: &str) -> Option<String> {
    if shell::command_exists(name) {
        return Some(name.to_string());
    }

    let home = dirs::home_dir()?;
    install_candidates(name, &home)
        .into_iter()
        .find(|p| p.is_file())
        .map(|p| p.display().to_string())
}

/// Per-user install locations, XDG-style: `~/.local/bin/<name>` and
/// `$XDG_DATA_HOME/<name>/bin/<name>`.
fn install_candidates(name: &str, home: &Path) -> Vec<PathBuf> {
    let data_home = std::env::var_os("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| home.join(".local").join("share"));

    vec![
        home.join(".local").join("bin").join(name),
        data_home.join(name).join("bin").join(name),
    ]
}
