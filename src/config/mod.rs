//! Configuration discovery, parsing, and validation.

pub mod loader;
pub mod schema;

pub use loader::{discover, load, load_discovered, CONFIG_FILE_NAME};
pub use schema::{
    Config, DockConfig, GitConfig, MasApp, PackagesConfig, RuntimeTool, RuntimesConfig,
    SettingDirective, SettingKind, UpdateConfig,
};
