//! Configuration for the album picker.
//!
//! Loaded from a TOML file. Search order when no path is given:
//! - ./album-keys.toml
//! - ~/.config/album-keys/config.toml
//!
//! A missing file means defaults; command-line flags override both.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "album-keys";

const CONFIG_FILE_NAME: &str = "config.toml";

const LOCAL_CONFIG_FILE_NAME: &str = "album-keys.toml";

pub fn get_config_path() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(|home| {
        PathBuf::from(home)
            .join(".config")
            .join(APP_NAME)
            .join(CONFIG_FILE_NAME)
    })
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub albums: AlbumsConfig,
    pub logging: LoggingConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AlbumsConfig {
    /// JSON album list; `-` reads stdin
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Write logs to `log_file` instead of stderr (the picker owns the terminal)
    pub log_to_file: bool,

    pub log_file: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// List albums that could not be given a keybinding
    pub show_unbound: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            log_to_file: false,
            log_file: PathBuf::from("album-keys.log"),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { show_unbound: true }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_path_buf(), e.to_string()))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(path.to_path_buf(), e.to_string()))?;

        Ok(config)
    }

    /// Loads the first config file found in the default locations.
    pub fn load_default() -> Result<Self, ConfigError> {
        let local = PathBuf::from(LOCAL_CONFIG_FILE_NAME);
        if local.exists() {
            return Self::load(local);
        }
        match get_config_path() {
            Some(path) if path.exists() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.logging.level, "warn");
        assert!(config.ui.show_unbound);
        assert_eq!(config.albums.file, None);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config: Config = toml::from_str(
            r#"
            [albums]
            file = "albums.json"

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.albums.file, Some(PathBuf::from("albums.json")));
        assert_eq!(config.logging.level, "debug");
        assert!(!config.logging.log_to_file);
        assert!(config.ui.show_unbound);
    }

    #[test]
    fn load_reads_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ui]\nshow_unbound = false").unwrap();
        let config = Config::load(file.path()).unwrap();
        assert!(!config.ui.show_unbound);
    }

    #[test]
    fn load_reports_missing_and_malformed_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(Config::load(&missing), Err(ConfigError::FileNotFound(_))));

        let bad = dir.path().join("bad.toml");
        fs::write(&bad, "[logging\nlevel = ").unwrap();
        assert!(matches!(Config::load(&bad), Err(ConfigError::ParseError(..))));
    }
}
