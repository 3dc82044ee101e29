//! System preference toggles via `defaults write`.

use std::collections::BTreeSet;

use crate::config::SettingDirective;
use crate::error::Result;
use crate::pipeline::Step;
use crate::shell;
use crate::ui::ProgressSpinner;

use super::aggregate_failures;

/// Processes restarted after their preference domains change. Order is
/// stable so repeated runs behave identically.
static AFFECTED_PROCESSES: [(&str, &str); 3] = [
    ("com.apple.dock", "Dock"),
    ("com.apple.finder", "Finder"),
    ("com.apple.systemuiserver", "SystemUIServer"),
];

/// Apply every settings directive, then bounce the affected UI processes.
/// Optional: a rejected preference key shouldn't sink the run.
pub fn settings_step(directives: Vec<SettingDirective>) -> Step {
    Step::new("Apply system settings", move || {
        apply_settings(&directives)
    })
    .optional()
}

fn apply_settings(directives: &[SettingDirective]) -> Result<()> {
    let mut failed = Vec::new();

    for directive in directives {
        let label = format!("{} {}", directive.domain, directive.key);
        let spinner = ProgressSpinner::new(&label);
        match shell::run_capture("defaults", &directive.defaults_args()) {
            Ok(_) => spinner.finish_success(&label),
            Err(e) => {
                tracing::warn!(setting = %label, error = %e, "defaults write failed");
                spinner.finish_error(&label);
                failed.push(label);
            }
        }
    }

    for process in affected_processes(directives) {
        // The process may simply not be running; that's fine.
        shell::run_quiet("killall", &[process]);
    }

    aggregate_failures("settings", failed)
}

fn affected_processes(directives: &[SettingDirective]) -> BTreeSet<&'static str> {
    let mut processes = BTreeSet::new();
    for directive in directives {
        for (domain, process) in &AFFECTED_PROCESSES {
            if directive.domain.eq_ignore_ascii_case(domain) {
                processes.insert(*process);
            }
        }
    }
    processes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SettingKind;

    fn directive(domain: &str) -> SettingDirective {
        SettingDirective {
            domain: domain.into(),
            key: "k".into(),
            kind: SettingKind::Bool,
            value: "true".into(),
        }
    }

    #[test]
    fn dock_settings_restart_the_dock() {
        let processes = affected_processes(&[directive("com.apple.dock")]);
        assert!(processes.contains("Dock"));
        assert!(!processes.contains("Finder"));
    }

    #[test]
    fn unrelated_domains_restart_nothing() {
        let processes = affected_processes(&[directive("NSGlobalDomain")]);
        assert!(processes.is_empty());
    }

    #[test]
    fn processes_are_deduplicated() {
        let processes = affected_processes(&[
            directive("com.apple.dock"),
            directive("com.apple.dock"),
        ]);
        assert_eq!(processes.len(), 1);
    }

    #[test]
    fn settings_step_is_optional() {
        let step = settings_step(vec![directive("com.apple.dock")]);
        assert!(step.optional);
        assert!(!step.requires_confirmation);
    }
}
