//! The `init` command: write a starter configuration.

use std::fs;
use std::path::PathBuf;

use anyhow::anyhow;
use include_dir::{include_dir, Dir};

use crate::config::CONFIG_FILE_NAME;
use crate::error::Result;
use crate::ui::Output;

use super::{Command, CommandResult};

/// Starter config embedded at compile time.
static TEMPLATES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Writes the starter `rigup.yml`, refusing to overwrite an existing one.
pub struct InitCommand {
    config_path: Option<PathBuf>,
}

impl InitCommand {
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self { config_path }
    }
}

impl Command for InitCommand {
    fn execute(&self, out: &mut Output) -> Result<CommandResult> {
        let target = self
            .config_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));

        if target.exists() {
            return Err(anyhow!(
                "refusing to overwrite existing config at {}",
                target.display()
            )
            .into());
        }

        let template = TEMPLATES_DIR
            .get_file("rigup.yml")
            .and_then(|f| f.contents_utf8())
            .ok_or_else(|| anyhow!("embedded starter template is missing"))?;

        if let Some(parent) = target.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&target, template)?;

        out.success(&format!("Wrote starter config to {}", target.display()));
        out.println("Edit it, then preview the plan with `rigup list`.");

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_template_is_valid_config() {
        let template = TEMPLATES_DIR
            .get_file("rigup.yml")
            .and_then(|f| f.contents_utf8())
            .unwrap();

        let config: crate::config::Config = serde_yaml::from_str(template).unwrap();
        assert!(!config.packages.formulae.is_empty());
        crate::config::schema::validate(&config).unwrap();
    }
}
