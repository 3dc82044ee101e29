//! Homebrew steps: bootstrap, self-update, and bulk package installs.

use std::path::Path;

use crate::error::Result;
use crate::pipeline::Step;
use crate::shell;

use super::aggregate_failures;

/// Official installer script; piped into bash the way Homebrew documents.
const INSTALL_SCRIPT_URL: &str =
    "https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh";

/// Where `brew` lands on Apple Silicon and Intel machines. Checked
/// directly because a fresh install is not on PATH in this process.
const BREW_LOCATIONS: [&str; 2] = ["/opt/homebrew/bin/brew", "/usr/local/bin/brew"];

/// What a bulk install is installing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageKind {
    Formula,
    Cask,
}

impl PackageKind {
    fn noun(self) -> &'static str {
        match self {
            Self::Formula => "formulae",
            Self::Cask => "casks",
        }
    }
}

/// Install Homebrew itself when absent. Mandatory: everything after it
/// depends on `brew` being present.
pub fn bootstrap_step() -> Step {
    Step::new("Install Homebrew", || {
        if let Some(brew) = brew_command() {
            tracing::debug!(brew = %brew, "Homebrew already installed");
            return Ok(());
        }

        let script = format!("curl -fsSL {} | /bin/bash", INSTALL_SCRIPT_URL);
        shell::run_with_env("/bin/bash", &["-c", &script], &[("NONINTERACTIVE", "1")])
    })
}

/// Refresh Homebrew's index and upgrade what is already installed.
pub fn update_step() -> Step {
    Step::new("Update Homebrew", || {
        let brew = require_brew()?;
        shell::run(&brew, &["update"])?;
        shell::run(&brew, &["upgrade"])
    })
}

/// Install the configured formulae. Mandatory: later steps (mas,
/// dockutil, runtime managers) arrive through this list.
pub fn formulae_step(formulae: Vec<String>) -> Step {
    Step::new("Install Homebrew formulae", move || {
        install_bulk(PackageKind::Formula, &formulae)
    })
}

/// Install the configured casks. Optional: a single refusing cask
/// shouldn't sink the run.
pub fn casks_step(casks: Vec<String>) -> Step {
    Step::new("Install Homebrew casks", move || {
        install_bulk(PackageKind::Cask, &casks)
    })
    .optional()
}

fn install_bulk(kind: PackageKind, names: &[String]) -> Result<()> {
    let brew = require_brew()?;
    let mut failed = Vec::new();

    for name in names {
        if is_installed(&brew, kind, name) {
            tracing::debug!(package = %name, "already installed");
            continue;
        }

        tracing::info!(package = %name, "installing");
        let args = match kind {
            PackageKind::Formula => vec!["install", name.as_str()],
            PackageKind::Cask => vec!["install", "--cask", name.as_str()],
        };
        if let Err(e) = shell::run(&brew, &args) {
            tracing::warn!(package = %name, error = %e, "install failed");
            failed.push(name.clone());
        }
    }

    aggregate_failures(kind.noun(), failed)
}

fn is_installed(brew: &str, kind: PackageKind, name: &str) -> bool {
    let args = match kind {
        PackageKind::Formula => vec!["list", "--formula", "--versions", name],
        PackageKind::Cask => vec!["list", "--cask", name],
    };
    shell::run_quiet(brew, &args)
}

/// Resolve the brew executable, looking past PATH at the standard prefixes.
fn brew_command() -> Option<String> {
    if shell::command_exists("brew") {
        return Some("brew".to_string());
    }
    BREW_LOCATIONS
        .iter()
        .find(|p| Path::new(p).is_file())
        .map(|p| (*p).to_string())
}

fn require_brew() -> Result<String> {
    brew_command()
        .ok_or_else(|| anyhow::anyhow!("brew not found; did the Homebrew install succeed?").into())
}
