//! Configuration file handling for shapeshift.
//!
//! The config only shapes the terminal host. The effect's own constants
//! (cadence, sample gap, font size) are not configurable.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use shapeshift_core::Theme;
use thiserror::Error;

/// Errors from loading or saving the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine the config directory")]
    NoConfigDir,
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// User configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Labels to cycle instead of the built-in sequence.
    pub labels: Option<Vec<String>>,
    /// Terminal color theme.
    pub theme: Theme,
    /// Milliseconds between frames.
    pub frame_interval_ms: u64,
    /// Virtual pixels per terminal cell, horizontally.
    pub cell_width_px: f32,
    /// Virtual pixels per terminal cell, vertically.
    pub cell_height_px: f32,
    /// Write a log file.
    pub log: bool,
    /// Seed for a reproducible animation.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            labels: None,
            theme: Theme::Dark,
            frame_interval_ms: 33,
            cell_width_px: 8.0,
            cell_height_px: 16.0,
            log: true,
            seed: None,
        }
    }
}

impl Config {
    /// Load the config from its default location, or defaults if absent.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load the config from `path`, or defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save the config to its default location.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save the config to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_error = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(io_error)
    }

    /// Path of the config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        project_dirs()
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Path of the log file.
    pub fn log_path() -> Result<PathBuf, ConfigError> {
        project_dirs()
            .map(|dirs| dirs.data_local_dir().join("shapeshift.log"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Labels joined into a pipe-delimited sequence, if configured.
    pub fn label_sequence(&self) -> Option<String> {
        self.labels
            .as_ref()
            .filter(|labels| !labels.is_empty())
            .map(|labels| labels.join("|"))
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "shapeshift")
}
