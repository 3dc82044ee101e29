//! Configuration file discovery and loading.
//!
//! Lookup order:
//! 1. An explicit `--config PATH`
//! 2. `./rigup.yml`
//! 3. `$XDG_CONFIG_HOME/rigup/config.yml` (or `~/.config/rigup/config.yml`)

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::{self, Config};
use crate::error::{Result, RigupError};

/// Config file name searched in the working directory.
pub const CONFIG_FILE_NAME: &str = "rigup.yml";

/// Locate the configuration file.
pub fn discover(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        return Err(RigupError::ConfigNotFound {
            searched: path.display().to_string(),
        });
    }

    let mut candidates = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(xdg) = xdg_config_path() {
        candidates.push(xdg);
    }

    for candidate in &candidates {
        if candidate.is_file() {
            return Ok(candidate.clone());
        }
    }

    Err(RigupError::ConfigNotFound {
        searched: candidates
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", "),
    })
}

/// XDG-style user config location for rigup.
fn xdg_config_path() -> Option<PathBuf> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))?;
    Some(base.join("rigup").join("config.yml"))
}

/// Load and validate a configuration file.
pub fn load(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)?;

    let config: Config =
        serde_yaml::from_str(&contents).map_err(|e| RigupError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    schema::validate(&config)?;
    Ok(config)
}

/// Discover, load, and validate in one call.
pub fn load_discovered(explicit: Option<&Path>) -> Result<(PathBuf, Config)> {
    let path = discover(explicit)?;
    tracing::debug!(path = %path.display(), "loading configuration");
    let config = load(&path)?;
    Ok((path, config))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn explicit_path_wins() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "restart: false").unwrap();

        let found = discover(Some(file.path())).unwrap();
        assert_eq!(found, file.path());
    }

    #[test]
    fn missing_explicit_path_is_config_not_found() {
        let err = discover(Some(Path::new("/definitely/not/here.yml"))).unwrap_err();
        match err {
            RigupError::ConfigNotFound { searched } => {
                assert!(searched.contains("not/here.yml"));
            }
            other => panic!("expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn load_parses_a_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "packages:\n  formulae: [git]").unwrap();

        let config = load(file.path()).unwrap();
        assert_eq!(config.packages.formulae, vec!["git"]);
    }

    #[test]
    fn load_reports_parse_errors_with_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "packages: [this, is, not, a, mapping]").unwrap();

        let err = load(file.path()).unwrap_err();
        assert!(matches!(err, RigupError::ConfigParse { .. }));
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn load_runs_validation() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "settings:\n  - {{ domain: d, key: k, type: int, value: fast }}"
        )
        .unwrap();

        let err = load(file.path()).unwrap_err();
        assert!(matches!(err, RigupError::ConfigValidation { .. }));
    }

    #[test]
    fn load_discovered_returns_path_and_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "restart: false").unwrap();

        let (path, config) = load_discovered(Some(file.path())).unwrap();
        assert_eq!(path, file.path());
        assert!(!config.restart);
    }
}
