use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::components::ThemeMode;

#[cfg(not(target_arch = "wasm32"))]
const CONFIG_ENV: &str = "AUDIOBOOK_CONFIG";
#[cfg(not(target_arch = "wasm32"))]
const CONFIG_DIR_NAME: &str = "pdf-audiobook";
#[cfg(not(target_arch = "wasm32"))]
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Launch-time settings. Read once, never written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub appearance: ThemeMode,
    #[serde(default = "default_splash_delay_ms")]
    pub splash_delay_ms: u64,
    #[serde(default = "default_seed_sample_uploads")]
    pub seed_sample_uploads: bool,
}

fn default_splash_delay_ms() -> u64 {
    1200
}

fn default_seed_sample_uploads() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            appearance: ThemeMode::default(),
            splash_delay_ms: default_splash_delay_ms(),
            seed_sample_uploads: default_seed_sample_uploads(),
        }
    }
}

impl AppConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads the config file if one exists, falling back to defaults otherwise.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_or_default() -> Self {
        let Some(path) = config_path() else {
            log::info!("no config directory available, using default settings");
            return Self::default();
        };
        Self::load_from_or_default(&path)
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load_or_default() -> Self {
        Self::default()
    }

    fn load_from_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::info!("config file {} not found, using defaults", path.display());
            return Self::default();
        }
        match Self::from_path(path) {
            Ok(config) => {
                log::info!("loaded config from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("{err}; using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn config_path() -> Option<PathBuf> {
    if let Ok(explicit) = std::env::var(CONFIG_ENV) {
        if !explicit.trim().is_empty() {
            return Some(PathBuf::from(explicit));
        }
    }
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_object_yields_defaults() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.splash_delay_ms, 1200);
        assert!(config.seed_sample_uploads);
        assert_eq!(config.appearance, ThemeMode::System);
    }

    #[test]
    fn reads_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "appearance": "dark", "splash_delay_ms": 300 }}"#).unwrap();

        let config = AppConfig::from_path(file.path()).unwrap();
        assert_eq!(config.appearance, ThemeMode::Dark);
        assert_eq!(config.splash_delay_ms, 300);
        assert!(config.seed_sample_uploads);
    }

    #[test]
    fn invalid_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = AppConfig::from_path(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn missing_or_broken_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");
        assert_eq!(AppConfig::load_from_or_default(&missing), AppConfig::default());

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{ \"splash_delay_ms\": \"soon\" }").unwrap();
        assert_eq!(AppConfig::load_from_or_default(&broken), AppConfig::default());
    }
}
