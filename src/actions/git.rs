//! Git identity configuration.

use crate::config::GitConfig;
use crate::error::Result;
use crate::pipeline::Step;
use crate::shell;
use crate::ui::Prompt;

/// A resolved Git identity. Either field may be empty, in which case it
/// is left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitIdentity {
    pub name: String,
    pub email: String,
}

impl GitIdentity {
    /// Whether there is anything to configure.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty()
    }
}

/// Resolve the identity from config, asking the operator for whatever is
/// missing. Asking happens at planning time; the pipeline itself only
/// ever asks yes/no questions.
pub fn resolve_identity(config: &GitConfig, prompt: &mut dyn Prompt) -> GitIdentity {
    let name = match &config.name {
        Some(name) => name.clone(),
        None => prompt.ask("Git author name (blank to skip):"),
    };
    let email = match &config.email {
        Some(email) => email.clone(),
        None => prompt.ask("Git author email (blank to skip):"),
    };

    GitIdentity {
        name: name.trim().to_string(),
        email: email.trim().to_string(),
    }
}

/// Write the identity into the global Git config.
pub fn identity_step(identity: GitIdentity) -> Step {
    Step::new("Set Git identity", move || apply_identity(&identity)).with_confirmation()
}

fn apply_identity(identity: &GitIdentity) -> Result<()> {
    if !shell::command_exists("git") {
        return Err(anyhow::anyhow!("git is not installed; add it to packages.formulae").into());
    }

    for (key, value) in [
        ("user.name", identity.name.as_str()),
        ("user.email", identity.email.as_str()),
    ] {
        if value.is_empty() {
            continue;
        }
        shell::run_capture("git", &["config", "--global", key, value])?;
        tracing::info!(key, value, "configured");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockPrompt;

    #[test]
    fn config_values_skip_the_prompt() {
        let config = GitConfig {
            name: Some("Ada Lovelace".into()),
            email: Some("ada@example.com".into()),
        };
        let mut prompt = MockPrompt::new();

        let identity = resolve_identity(&config, &mut prompt);

        assert_eq!(identity.name, "Ada Lovelace");
        assert_eq!(identity.email, "ada@example.com");
        assert!(prompt.questions.is_empty());
    }

    #[test]
    fn missing_values_are_asked_for() {
        let config = GitConfig::default();
        let mut prompt = MockPrompt::new();
        prompt
            .push_reply("Grace Hopper")
            .push_reply("grace@example.com");

        let identity = resolve_identity(&config, &mut prompt);

        assert_eq!(identity.name, "Grace Hopper");
        assert_eq!(identity.email, "grace@example.com");
        assert_eq!(prompt.questions.len(), 2);
    }

    #[test]
    fn blank_answers_leave_identity_empty() {
        let config = GitConfig::default();
        let mut prompt = MockPrompt::new();

        let identity = resolve_identity(&config, &mut prompt);

        assert!(identity.is_empty());
    }

    #[test]
    fn identity_step_is_mandatory_but_gated() {
        let step = identity_step(GitIdentity {
            name: "Ada".into(),
            email: String::new(),
        });
        assert!(!step.optional);
        assert!(step.requires_confirmation);
    }
}
