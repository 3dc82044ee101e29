//! The `list` command: preview the planned steps.

use std::path::PathBuf;

use crate::actions::git::GitIdentity;
use crate::config;
use crate::error::Result;
use crate::plan;
use crate::ui::Output;

use super::{Command, CommandResult};

/// Prints the planned steps with their policies; no side effects.
pub struct ListCommand {
    config_path: Option<PathBuf>,
}

impl ListCommand {
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self { config_path }
    }
}

impl Command for ListCommand {
    fn execute(&self, out: &mut Output) -> Result<CommandResult> {
        let (path, config) = config::load_discovered(self.config_path.as_deref())?;

        // Identity from config values only; `run` asks for anything
        // missing, which a preview shouldn't do.
        let identity = config.git.as_ref().map(|g| GitIdentity {
            name: g.name.clone().unwrap_or_default(),
            email: g.email.clone().unwrap_or_default(),
        });

        let steps = plan::build_steps(&config, identity);

        out.header(&format!(
            "Planned steps for {} ({})",
            path.display(),
            steps.len()
        ));
        for (index, step) in steps.iter().enumerate() {
            let policy = if step.optional { "optional" } else { "mandatory" };
            let gate = if step.requires_confirmation {
                ", asks first"
            } else {
                ""
            };
            out.println(&format!(
                "{:2}. {} [{}{}]",
                index + 1,
                step.name,
                policy,
                gate
            ));
        }

        Ok(CommandResult::success())
    }
}
