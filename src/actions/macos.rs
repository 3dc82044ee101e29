//! macOS system steps: software updates and the final restart.

use crate::pipeline::Step;
use crate::shell;
use crate::ui::Answer;

/// Install all pending macOS software updates. Mandatory and
/// confirmation-gated; `softwareupdate` exits cleanly when there is
/// nothing to install.
pub fn software_update_step() -> Step {
    Step::new("Install macOS software updates", || {
        shell::run("softwareupdate", &["--install", "--all"])
    })
    .with_confirmation()
}

/// Write the automatic update check frequency. Needs the cached sudo
/// credentials the privilege keeper maintains.
pub fn update_schedule_step(days: u32) -> Step {
    Step::new("Set software update schedule", move || {
        shell::run_capture(
            "sudo",
            &[
                "defaults",
                "write",
                "/Library/Preferences/com.apple.SoftwareUpdate",
                "ScheduleFrequency",
                "-int",
                &days.to_string(),
            ],
        )
        .map(|_| ())
    })
    .optional()
}

/// Restart the machine. Defaults to No: the operator may have unsaved
/// work in other apps.
pub fn restart_step() -> Step {
    Step::new("Restart now", || {
        shell::run("sudo", &["shutdown", "-r", "now"])
    })
    .with_confirmation()
    .confirm_default(Answer::No)
    .optional()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn software_update_is_mandatory_and_gated() {
        let step = software_update_step();
        assert!(!step.optional);
        assert!(step.requires_confirmation);
        assert_eq!(step.confirm_default, Answer::Yes);
    }

    #[test]
    fn schedule_step_is_optional() {
        let step = update_schedule_step(7);
        assert!(step.optional);
        assert!(!step.requires_confirmation);
    }

    #[test]
    fn restart_defaults_to_no() {
        let step = restart_step();
        assert!(step.requires_confirmation);
        assert_eq!(step.confirm_default, Answer::No);
    }
}
