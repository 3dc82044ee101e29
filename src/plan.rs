//! Assembly of the ordered step catalog.
//!
//! Order is fixed: OS updates first, then the package manager and
//! everything installed through it, then configuration that depends on
//! the installed tools, with the restart offer last. Sections without
//! content produce no step.

use crate::actions::git::GitIdentity;
use crate::actions::{brew, defaults, dock, git, macos, mas, runtime, vscode};
use crate::config::Config;
use crate::pipeline::Step;

/// Build the ordered steps for a run.
///
/// `identity` is the resolved Git identity; `None` (or an empty identity)
/// omits the Git step.
pub fn build_steps(config: &Config, identity: Option<GitIdentity>) -> Vec<Step> {
    let mut steps = Vec::new();

    steps.push(macos::software_update_step());
    if config.update.check_frequency_days > 0 {
        steps.push(macos::update_schedule_step(config.update.check_frequency_days));
    }

    steps.push(brew::bootstrap_step());
    steps.push(brew::update_step());

    if !config.packages.formulae.is_empty() {
        steps.push(brew::formulae_step(config.packages.formulae.clone()));
    }
    if !config.packages.casks.is_empty() {
        steps.push(brew::casks_step(config.packages.casks.clone()));
    }
    if !config.packages.mas.is_empty() {
        steps.push(mas::store_apps_step(config.packages.mas.clone()));
    }

    if let Some(runtimes) = &config.runtimes {
        if !runtimes.tools.is_empty() {
            steps.push(runtime::runtimes_step(runtimes.clone()));
        }
    }

    if !config.packages.vscode_extensions.is_empty() {
        steps.push(vscode::extensions_step(
            config.packages.vscode_extensions.clone(),
        ));
    }

    if !config.settings.is_empty() {
        steps.push(defaults::settings_step(config.settings.clone()));
    }

    if let Some(dock_config) = &config.dock {
        if !dock_config.is_empty() {
            steps.push(dock::dock_step(dock_config.clone()));
        }
    }

    if let Some(identity) = identity {
        if !identity.is_empty() {
            steps.push(git::identity_step(identity));
        }
    }

    if config.restart {
        steps.push(macos::restart_step());
    }

    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_config() -> Config {
        serde_yaml::from_str(
            r#"
packages:
  formulae: [git, mas, dockutil]
  casks: [raycast]
  mas:
    - id: 409203825
      name: Numbers
  vscode_extensions: [rust-lang.rust-analyzer]
runtimes:
  manager: mise
  tools:
    - name: node
      version: lts
settings:
  - domain: com.apple.dock
    key: autohide
    type: bool
    value: "true"
dock:
  add: [/Applications/Safari.app]
"#,
        )
        .unwrap()
    }

    fn names(steps: &[Step]) -> Vec<&str> {
        steps.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn full_config_plans_every_step_in_order() {
        let identity = GitIdentity {
            name: "Ada".into(),
            email: "ada@example.com".into(),
        };
        let steps = build_steps(&full_config(), Some(identity));

        assert_eq!(
            names(&steps),
            vec![
                "Install macOS software updates",
                "Set software update schedule",
                "Install Homebrew",
                "Update Homebrew",
                "Install Homebrew formulae",
                "Install Homebrew casks",
                "Install App Store apps",
                "Configure developer runtimes",
                "Install editor extensions",
                "Apply system settings",
                "Configure Dock layout",
                "Set Git identity",
                "Restart now",
            ]
        );
    }

    #[test]
    fn empty_config_still_updates_and_bootstraps() {
        let config: Config = serde_yaml::from_str("restart: false").unwrap();
        let steps = build_steps(&config, None);

        assert_eq!(
            names(&steps),
            vec![
                "Install macOS software updates",
                "Set software update schedule",
                "Install Homebrew",
                "Update Homebrew",
            ]
        );
    }

    #[test]
    fn zero_check_frequency_omits_the_schedule_step() {
        let config: Config =
            serde_yaml::from_str("update:\n  check_frequency_days: 0\nrestart: false").unwrap();
        let steps = build_steps(&config, None);

        assert!(!names(&steps).contains(&"Set software update schedule"));
    }

    #[test]
    fn empty_identity_omits_the_git_step() {
        let config: Config = serde_yaml::from_str("restart: false").unwrap();
        let steps = build_steps(&config, Some(GitIdentity::default()));

        assert!(!names(&steps).contains(&"Set Git identity"));
    }

    #[test]
    fn restart_is_last_when_enabled() {
        let steps = build_steps(&full_config(), None);
        assert_eq!(steps.last().map(|s| s.name.as_str()), Some("Restart now"));
    }

    #[test]
    fn step_names_are_unique() {
        let steps = build_steps(&full_config(), None);
        let mut seen = std::collections::HashSet::new();
        for step in &steps {
            assert!(seen.insert(step.name.clone()), "duplicate {}", step.name);
        }
    }
}
