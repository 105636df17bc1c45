//! Configuration for campus (stored in ~/.config/campus/campus.toml)

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{CampusError, Result};

pub use types::{AccessConfig, CampusConfig, CompassConfig};

const CONFIG_DIR: &str = "campus";
const CONFIG_FILE: &str = "campus.toml";

pub const API_KEY_ENV_VAR: &str = "CAMPUS_COMPASS_API_KEY";
pub const ENDPOINT_ENV_VAR: &str = "CAMPUS_COMPASS_ENDPOINT";

impl CampusConfig {
    /// Path of the config file, under `dir` when given
    pub fn config_path(dir: Option<&Path>) -> Result<PathBuf> {
        let config_dir = match dir {
            Some(dir) => dir.to_path_buf(),
            None => dirs::config_dir()
                .ok_or_else(|| {
                    CampusError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR),
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load the config file, then apply environment overrides
    ///
    /// A missing file yields the defaults.
    pub fn load(dir: Option<&Path>) -> Result<Self> {
        let path = Self::config_path(dir)?;
        let mut config = Self::load_file(&path)?;
        config.apply_overrides(|name| std::env::var(name).ok());
        Ok(config)
    }

    fn load_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            CampusError::failed(&format!("read config from {}", path.display()), e)
        })?;

        toml::from_str(&content).map_err(|e| {
            CampusError::failed(&format!("parse config from {}", path.display()), e)
        })
    }

    /// Apply `CAMPUS_COMPASS_*` overrides; blank values are ignored
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(key) = value(API_KEY_ENV_VAR) {
            self.compass.api_key = Some(key);
        }
        if let Some(endpoint) = value(ENDPOINT_ENV_VAR) {
            self.compass.endpoint = endpoint;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compass::gemini::DEFAULT_ENDPOINT;
    use crate::session::Role;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let path = CampusConfig::config_path(Some(dir.path())).unwrap();
        let config = CampusConfig::load_file(&path).unwrap();
        assert_eq!(config, CampusConfig::default());
        assert_eq!(config.access.fallback_role, Role::Premium);
        assert_eq!(config.compass.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_load_sections() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("campus.toml"),
            r#"
            [compass]
            model = "gemini-test"
            api_key = "shared"

            [access]
            fallback_role = "free"

            [access.roles]
            ana = "admin"
            "#,
        )
        .unwrap();

        let path = CampusConfig::config_path(Some(dir.path())).unwrap();
        let config = CampusConfig::load_file(&path).unwrap();
        assert_eq!(config.compass.model, "gemini-test");
        assert_eq!(config.compass.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.compass.api_key.as_deref(), Some("shared"));
        assert_eq!(config.access.fallback_role, Role::Free);
        assert_eq!(
            config.access.roles.get("ana").map(String::as_str),
            Some("admin")
        );
    }

    #[test]
    fn test_unknown_role_name_still_loads() {
        use crate::session::RoleLookup;

        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("campus.toml"),
            "[access.roles]\nana = \"owner\"\nluis = \"admin\"\n",
        )
        .unwrap();

        let path = CampusConfig::config_path(Some(dir.path())).unwrap();
        let config = CampusConfig::load_file(&path).unwrap();
        let table = config.access.role_table();
        assert!(table.role_for("ana").is_err());
        assert_eq!(table.role_for("luis").unwrap(), Some(Role::Admin));
        assert_eq!(table.role_for("zoe").unwrap(), None);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("campus.toml"),
            "[access]\nfallback_role = \"owner\"\n",
        )
        .unwrap();
        let path = CampusConfig::config_path(Some(dir.path())).unwrap();
        let err = CampusConfig::load_file(&path).unwrap_err();
        assert!(err.to_string().contains("parse config"));
    }

    #[test]
    fn test_overrides() {
        let mut config = CampusConfig::default();
        config.apply_overrides(|name| match name {
            API_KEY_ENV_VAR => Some("from-env".to_string()),
            ENDPOINT_ENV_VAR => Some("  ".to_string()),
            _ => None,
        });
        assert_eq!(config.compass.api_key.as_deref(), Some("from-env"));
        assert_eq!(config.compass.endpoint, DEFAULT_ENDPOINT);
    }
}
