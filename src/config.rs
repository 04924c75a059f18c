//! algo-recognizer configuration management.
//!
//! The configuration file is looked up in order:
//! - the `--config` flag
//! - `$ALGO_RECOGNIZER_CONFIG`
//! - `<config dir>/algo-recognizer/config.toml`
//!
//! A missing file yields the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dataset::{DEFAULT_DATASET_PATH, DEFAULT_DATASET_ROOT, DEFAULT_EXTENSIONS};
use crate::error::{RecognizerError, Result};
use crate::fs_utils;
use crate::model::DEFAULT_MODEL_PATH;
use crate::train::ConvergencePolicy;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "ALGO_RECOGNIZER_CONFIG";

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RecognizerConfig {
    #[serde(default)]
    pub model: ModelConfig,

    #[serde(default)]
    pub training: TrainingConfig,

    #[serde(default)]
    pub dataset: DatasetConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Model bundle location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "default_model_path")]
    pub path: PathBuf,
}

fn default_model_path() -> PathBuf {
    PathBuf::from(DEFAULT_MODEL_PATH)
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: default_model_path(),
        }
    }
}

/// Iteration budget used by `train`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingConfig {
    #[serde(default = "default_initial_iter")]
    pub initial_iter: usize,
    #[serde(default = "default_max_total_iter")]
    pub max_total_iter: usize,
}

fn default_initial_iter() -> usize {
    ConvergencePolicy::default().initial_iter
}

fn default_max_total_iter() -> usize {
    ConvergencePolicy::default().max_total_iter
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            initial_iter: default_initial_iter(),
            max_total_iter: default_max_total_iter(),
        }
    }
}

impl TrainingConfig {
    pub fn policy(&self) -> ConvergencePolicy {
        ConvergencePolicy {
            initial_iter: self.initial_iter,
            max_total_iter: self.max_total_iter,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    #[serde(default = "default_dataset_root")]
    pub root: PathBuf,
    #[serde(default = "default_dataset_output")]
    pub output: PathBuf,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_dataset_root() -> PathBuf {
    PathBuf::from(DEFAULT_DATASET_ROOT)
}

fn default_dataset_output() -> PathBuf {
    PathBuf::from(DEFAULT_DATASET_PATH)
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect()
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            root: default_dataset_root(),
            output: default_dataset_output(),
            extensions: default_extensions(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl RecognizerConfig {
    /// Path of the per-user config file, if the platform has a config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("algo-recognizer").join("config.toml"))
    }

    /// Resolve the config file to use: explicit path, then environment, then default
    pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
            .or_else(Self::default_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;

        toml::from_str(&content).map_err(|e| RecognizerError::ConfigError {
            message: format!("Failed to parse config {}: {}", path.display(), e),
        })
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| RecognizerError::ConfigError {
            message: format!("Failed to serialize config: {}", e),
        })?;

        fs_utils::write_atomic(path, content)?;
        Ok(())
    }

    /// Get a configuration value by key path (e.g., "model.path")
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();
        match parts.as_slice() {
            ["model", "path"] => Some(self.model.path.display().to_string()),
            ["training", "initial_iter"] => Some(self.training.initial_iter.to_string()),
            ["training", "max_total_iter"] => Some(self.training.max_total_iter.to_string()),
            ["dataset", "root"] => Some(self.dataset.root.display().to_string()),
            ["dataset", "output"] => Some(self.dataset.output.display().to_string()),
            ["dataset", "extensions"] => Some(self.dataset.extensions.join(", ")),
            ["logging", "level"] => Some(self.logging.level.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key path
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();
        match parts.as_slice() {
            ["model", "path"] => self.model.path = PathBuf::from(value),
            ["training", "initial_iter"] => self.training.initial_iter = parse_count(key, value)?,
            ["training", "max_total_iter"] => {
                self.training.max_total_iter = parse_count(key, value)?
            }
            ["dataset", "root"] => self.dataset.root = PathBuf::from(value),
            ["dataset", "output"] => self.dataset.output = PathBuf::from(value),
            ["dataset", "extensions"] => {
                self.dataset.extensions = value
                    .split(',')
                    .map(|ext| ext.trim().trim_start_matches('.').to_string())
                    .filter(|ext| !ext.is_empty())
                    .collect();
            }
            ["logging", "level"] => {
                if !LOG_LEVELS.contains(&value) {
                    return Err(RecognizerError::ConfigError {
                        message: format!(
                            "Invalid log level: {}. Must be one of: {}",
                            value,
                            LOG_LEVELS.join(", ")
                        ),
                    });
                }
                self.logging.level = value.to_string();
            }
            _ => {
                return Err(RecognizerError::ConfigError {
                    message: format!("Unknown configuration key: {}", key),
                });
            }
        }
        Ok(())
    }

    /// Display configuration as TOML text
    pub fn display(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| RecognizerError::ConfigError {
            message: format!("Failed to serialize config: {}", e),
        })
    }
}

fn parse_count(key: &str, value: &str) -> Result<usize> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(RecognizerError::ConfigError {
            message: format!("{} must be a positive integer, got {:?}", key, value),
        }),
    }
}
