//! Configuration management for stem-namer.
//!
//! Loads the TOML configuration from the platform config directory (or an
//! explicit path), writing a default file on first run.

use crate::{
    AppError, AppResult,
    config::{CONFIG_FILE, LabelsConfig, ModelConfig, project_dirs},
};

use std::{
    fs,
    io::Write,
    panic::Location,
    path::{Path, PathBuf},
};

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use stem_namer_core::LabelSource;
use tracing::{debug, info, instrument, warn};

/// Main configuration struct.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Classifier model configuration.
    #[serde(default)]
    pub model: ModelConfig,
    /// Class label file configuration.
    #[serde(default)]
    pub labels: LabelsConfig,
}

impl Config {
    /// Load configuration from the default location, creating it if absent.
    ///
    /// Note: This does NOT validate the model path exists. Call
    /// `validate_model_path()` before loading the model.
    #[track_caller]
    #[instrument]
    pub fn load() -> AppResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            info!("No config found, creating default");
            let config = Self::default();
            config.save_to(&config_path)?;

            warn!(
                model_path = ?config.model.path,
                "Default config created. The YAMNet ONNX model must be placed there before classifying."
            );

            Ok(config)
        }
    }

    /// Load configuration from an explicit file, which must exist.
    #[track_caller]
    #[instrument]
    pub fn load_from(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to read config {:?}: {}", path, e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let config = Self::parse(&contents)?;

        info!(config_path = ?path, "Configuration loaded");

        Ok(config)
    }

    /// Parse configuration from TOML text. Missing sections and fields take
    /// their defaults.
    #[track_caller]
    pub fn parse(contents: &str) -> AppResult<Self> {
        toml::from_str(contents).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to parse config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Validate that the classifier model file exists at the configured path.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn validate_model_path(&self) -> AppResult<()> {
        if !self.model.path.exists() {
            return Err(AppError::ConfigError {
                reason: format!(
                    "Classifier model not found at: {:?}. Export YAMNet to ONNX or set [model] path in the config.",
                    self.model.path
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }

    /// Where and how the class labels are obtained.
    pub fn label_source(&self) -> LabelSource {
        LabelSource {
            url: self.labels.url.clone(),
            path: self.labels.path.clone(),
            refresh: self.labels.refresh.into(),
        }
    }

    /// Save configuration to `config_path` using atomic write pattern.
    ///
    /// Writes to a temporary file first, then renames to prevent corruption
    /// if the process crashes during the write. The temporary file is
    /// removed when any step fails.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn save_to(&self, config_path: &Path) -> AppResult<()> {
        let contents = toml::to_string_pretty(self).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to serialize config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if let Some(config_dir) = config_path.parent().filter(|p| !p.exists()) {
            fs::create_dir_all(config_dir)?;
            debug!(config_dir = ?config_dir, "Created config directory");
        }

        let temp_path = config_path.with_extension("toml.tmp");

        if let Err(e) = write_and_rename(&temp_path, config_path, contents.as_bytes()) {
            if let Err(cleanup) = fs::remove_file(&temp_path) {
                debug!(temp_path = ?temp_path, error = %cleanup, "Temp config file not removed");
            }
            return Err(e);
        }

        info!(config_path = ?config_path, "Configuration saved (atomic write)");

        Ok(())
    }

    #[track_caller]
    fn config_path() -> AppResult<PathBuf> {
        let proj_dirs = project_dirs().ok_or_else(|| AppError::ConfigError {
            reason: "Failed to get config directory".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(proj_dirs.config_dir().join(CONFIG_FILE))
    }
}

#[track_caller]
fn write_and_rename(temp_path: &Path, config_path: &Path, contents: &[u8]) -> AppResult<()> {
    let mut temp_file = fs::File::create(temp_path).map_err(|e| AppError::ConfigError {
        reason: format!("Failed to create temp config file: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    temp_file
        .write_all(contents)
        .and_then(|_| temp_file.sync_all())
        .map_err(|e| AppError::ConfigError {
            reason: format!("Failed to write temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    fs::rename(temp_path, config_path).map_err(|e| AppError::ConfigError {
        reason: format!("Failed to rename temp config to final: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })
}
