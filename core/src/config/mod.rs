//! Persistent browser settings.
//!
//! Settings live in a small JSON document. A missing file is not an error; the defaults start at
//! the current directory, accept every file, and put no bound on the navigation depth.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::fs::ExtensionFilter;

use super::Result;

const APP_QUALIFIER: &str = "org";
const APP_ORGANISATION: &str = "dirnav";
const APP_NAME: &str = "dirnav";
const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable overriding the config file location.
pub const CONFIG_ENV_VAR: &str = "DIRNAV_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Directory opened on startup. `None` means the process working directory.
    pub start_dir: Option<PathBuf>,
    /// `|`-delimited extension filter applied to the root frame.
    pub filter: String,
    /// Deepest navigation depth allowed; the root is depth 0.
    pub max_depth: Option<usize>,
}

impl BrowserConfig {
    /// Location of the config file: `$DIRNAV_CONFIG`, else the platform config directory.
    pub fn default_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|value| !value.is_empty()) {
            return Some(PathBuf::from(path));
        }
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANISATION, APP_NAME)
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load from [`BrowserConfig::default_path`], falling back to defaults.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        match fs::read(path) {
            Ok(bytes) => {
                let config = serde_json::from_slice(&bytes)
                    .with_context(|| format!("parsing config at {}", path.display()))?;
                debug!(path = %path.display(), "loaded config");
                Ok(config)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => {
                Err(err).with_context(|| format!("reading config at {}", path.display()))
            }
        }
    }

    /// Write the config atomically: a temp file in the same directory is persisted over `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let parent = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .ok_or_else(|| anyhow!("config path {} has no parent directory", path.display()))?;
        fs::create_dir_all(parent)
            .with_context(|| format!("creating config directory {}", parent.display()))?;

        let data = serde_json::to_vec_pretty(self)?;
        let mut temp = NamedTempFile::new_in(parent)?;
        temp.write_all(&data)?;
        temp.flush()?;
        temp.persist(path).map_err(|err| err.error)?;
        debug!(path = %path.display(), "saved config");
        Ok(())
    }

    pub fn start_dir_or_current(&self) -> Result<PathBuf> {
        match &self.start_dir {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir().context("resolving current directory"),
        }
    }

    pub fn extension_filter(&self) -> ExtensionFilter {
        ExtensionFilter::parse(&self.filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = BrowserConfig::load_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, BrowserConfig::default());
        assert!(config.extension_filter().is_accept_all());
    }

    #[test]
    fn saves_and_reloads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);
        let config = BrowserConfig {
            start_dir: Some(PathBuf::from("/srv/media")),
            filter: "png|jpg".to_string(),
            max_depth: Some(8),
        };

        config.save_to(&path).unwrap();
        config.save_to(&path).unwrap();
        let loaded = BrowserConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.extension_filter().tokens(), ["png", "jpg"]);
    }

    #[test]
    fn partial_documents_fill_in_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, br#"{ "filter": "bin" }"#).unwrap();

        let loaded = BrowserConfig::load_from(&path).unwrap();
        assert_eq!(loaded.filter, "bin");
        assert_eq!(loaded.start_dir, None);
        assert_eq!(loaded.max_depth, None);
    }

    // Single test so nothing else races on the process environment.
    #[test]
    fn env_override_drives_default_path_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.json");
        let config = BrowserConfig {
            start_dir: Some(dir.path().to_path_buf()),
            filter: "rs|toml".to_string(),
            max_depth: Some(3),
        };
        config.save_to(&path).unwrap();

        unsafe { std::env::set_var(CONFIG_ENV_VAR, &path) };
        assert_eq!(BrowserConfig::default_path(), Some(path.clone()));
        assert_eq!(BrowserConfig::load().unwrap(), config);

        unsafe { std::env::set_var(CONFIG_ENV_VAR, dir.path().join("absent.json")) };
        assert_eq!(BrowserConfig::load().unwrap(), BrowserConfig::default());

        unsafe { std::env::set_var(CONFIG_ENV_VAR, "") };
        let platform = ProjectDirs::from(APP_QUALIFIER, APP_ORGANISATION, APP_NAME)
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME));
        assert_eq!(BrowserConfig::default_path(), platform);

        unsafe { std::env::remove_var(CONFIG_ENV_VAR) };
        assert_eq!(BrowserConfig::default_path(), platform);
    }

    #[test]
    fn malformed_documents_are_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, b"{ not json").unwrap();
        assert!(BrowserConfig::load_from(&path).is_err());
    }
}
