//! Configuration schema.
//!
//! The config is the single source for package lists, setting directives,
//! and Dock layout. The pipeline treats package names as opaque
//! identifiers passed through to actions; setting directives are the one
//! structured exception, validated up front so a typo fails the run
//! before any step executes.

use serde::Deserialize;

use crate::error::{Result, RigupError};

/// Root configuration document.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// macOS software update behavior.
    #[serde(default)]
    pub update: UpdateConfig,

    /// Packages to install, grouped by category.
    #[serde(default)]
    pub packages: PackagesConfig,

    /// Developer runtime configuration.
    #[serde(default)]
    pub runtimes: Option<RuntimesConfig>,

    /// System preference directives.
    #[serde(default)]
    pub settings: Vec<SettingDirective>,

    /// Dock layout directives.
    #[serde(default)]
    pub dock: Option<DockConfig>,

    /// Git identity; missing values are asked for at run time.
    #[serde(default)]
    pub git: Option<GitConfig>,

    /// Offer a restart once provisioning finishes.
    #[serde(default = "default_restart")]
    pub restart: bool,
}

fn default_restart() -> bool {
    true
}

/// macOS software update behavior.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateConfig {
    /// Days between automatic update checks; 0 leaves the schedule alone.
    #[serde(default = "default_check_frequency")]
    pub check_frequency_days: u32,
}

impl Default for UpdateConfig {
    fn default() -> Self {
        Self {
            check_frequency_days: default_check_frequency(),
        }
    }
}

fn default_check_frequency() -> u32 {
    7
}

/// Packages grouped by category.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackagesConfig {
    /// Homebrew formulae.
    #[serde(default)]
    pub formulae: Vec<String>,

    /// Homebrew casks.
    #[serde(default)]
    pub casks: Vec<String>,

    /// Mac App Store apps.
    #[serde(default)]
    pub mas: Vec<MasApp>,

    /// VS Code extension identifiers.
    #[serde(default)]
    pub vscode_extensions: Vec<String>,
}

/// A Mac App Store app.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MasApp {
    /// App Store numeric identifier.
    pub id: u64,
    /// Display name, used for progress output only.
    pub name: String,
}

/// Developer runtime configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuntimesConfig {
    /// Runtime manager executable, e.g. `mise`.
    #[serde(default = "default_manager")]
    pub manager: String,

    /// Tools to pin globally.
    #[serde(default)]
    pub tools: Vec<RuntimeTool>,
}

fn default_manager() -> String {
    "mise".to_string()
}

/// One globally pinned runtime tool.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuntimeTool {
    pub name: String,
    pub version: String,
}

impl RuntimeTool {
    /// Render as the `tool@version` spec runtime managers accept.
    pub fn spec(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }
}

/// One typed system preference directive.
///
/// Structured on purpose: directives become `defaults write` argument
/// vectors, never shell-evaluated text.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingDirective {
    /// Preference domain, e.g. `com.apple.dock`.
    pub domain: String,
    /// Preference key.
    pub key: String,
    /// Value type.
    #[serde(rename = "type")]
    pub kind: SettingKind,
    /// Value, validated against `kind`.
    pub value: String,
}

/// Value types accepted by `defaults write`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingKind {
    Bool,
    Int,
    Float,
    String,
}

impl SettingKind {
    /// The `defaults write` type flag.
    pub fn type_flag(self) -> &'static str {
        match self {
            Self::Bool => "-bool",
            Self::Int => "-int",
            Self::Float => "-float",
            Self::String => "-string",
        }
    }
}

impl SettingDirective {
    /// Check the value parses as the declared type.
    pub fn validate(&self) -> Result<()> {
        let ok = match self.kind {
            SettingKind::Bool => matches!(self.value.as_str(), "true" | "false" | "1" | "0"),
            SettingKind::Int => self.value.parse::<i64>().is_ok(),
            SettingKind::Float => self.value.parse::<f64>().is_ok(),
            SettingKind::String => true,
        };

        if ok {
            Ok(())
        } else {
            Err(RigupError::ConfigValidation {
                message: format!(
                    "setting {} {} has a non-{:?} value: {:?}",
                    self.domain, self.key, self.kind, self.value
                ),
            })
        }
    }

    /// Arguments for `defaults`, e.g. `write com.apple.dock autohide -bool true`.
    pub fn defaults_args(&self) -> Vec<&str> {
        vec![
            "write",
            &self.domain,
            &self.key,
            self.kind.type_flag(),
            &self.value,
        ]
    }
}

/// Git identity values; either may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GitConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Dock layout directives.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DockConfig {
    /// Wipe existing persistent apps before adding.
    #[serde(default)]
    pub replace: bool,

    /// Application paths to add.
    #[serde(default)]
    pub add: Vec<String>,

    /// Item labels to remove.
    #[serde(default)]
    pub remove: Vec<String>,
}

impl DockConfig {
    /// Whether there is anything to do.
    pub fn is_empty(&self) -> bool {
        !self.replace && self.add.is_empty() && self.remove.is_empty()
    }
}

/// Validate the whole document.
pub fn validate(config: &Config) -> Result<()> {
    for setting in &config.settings {
        setting.validate()?;
    }

    if let Some(runtimes) = &config.runtimes {
        if runtimes.manager.trim().is_empty() {
            return Err(RigupError::ConfigValidation {
                message: "runtimes.manager must not be empty".to_string(),
            });
        }
    }

    for app in &config.packages.mas {
        if app.id == 0 {
            return Err(RigupError::ConfigValidation {
                message: format!("mas app {:?} has an invalid id", app.name),
            });
        }
    }

    Ok(())
}
