//! Command modules for the algo-recognizer CLI
//!
//! Each command module implements a single top-level command:
//! - `scan` - extract functions and predict their tags
//! - `extract` - function boundaries only
//! - `predict` - whole-file prediction
//! - `dataset` - build a training set from a labelled tree
//! - `train` - fit or update the model bundle
//! - `config` - show and edit the configuration file
//!
//! All command handlers take their respective `Args` struct from `cli.rs`
//! and a shared `CommandContext`, and return the text to print on stdout.

pub mod config;
pub mod dataset;
pub mod extract;
pub mod predict;
pub mod scan;
pub mod train;

pub use config::run_config;
pub use dataset::run_dataset;
pub use extract::run_extract;
pub use predict::run_predict;
pub use scan::run_scan;
pub use train::run_train;

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;
use crate::config::RecognizerConfig;
use crate::error::{RecognizerError, Result};
use crate::fetch;
use crate::schema::SourceDocument;

/// Shared context passed to all command handlers
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
    /// Output format (text or json)
    pub format: OutputFormat,
    /// Show verbose output
    pub verbose: bool,
    /// Loaded configuration
    pub config: RecognizerConfig,
    /// Config file the configuration came from, if one could be resolved
    pub config_path: Option<PathBuf>,
}

impl CommandContext {
    /// Create a new CommandContext from CLI args, loading the configuration
    pub fn from_cli(format: OutputFormat, verbose: bool, config: Option<&Path>) -> Result<Self> {
        let config_path = RecognizerConfig::resolve_path(config);
        let config = match &config_path {
            Some(path) => RecognizerConfig::load_from(path)?,
            None => RecognizerConfig::default(),
        };
        Ok(Self {
            format,
            verbose,
            config,
            config_path,
        })
    }

    /// Model path from a flag, falling back to the configured one
    pub fn model_path(&self, flag: Option<&PathBuf>) -> PathBuf {
        flag.cloned()
            .unwrap_or_else(|| self.config.model.path.clone())
    }
}

/// Read a local file or download a GitHub URL into a [`SourceDocument`]
pub fn load_source(source: &str) -> Result<SourceDocument> {
    if fetch::is_remote(source) {
        // Validate before paying for a runtime
        fetch::github_raw_url(source)?;
        let runtime = tokio::runtime::Runtime::new().map_err(|e| RecognizerError::FetchFailure {
            message: format!("Failed to create async runtime: {}", e),
        })?;
        let text = runtime.block_on(fetch::fetch_source(source))?;
        return Ok(SourceDocument::new(source, text));
    }

    let path = Path::new(source);
    if !path.is_file() {
        return Err(RecognizerError::FileNotFound {
            path: source.to_string(),
        });
    }
    let text = fs::read_to_string(path)?;
    Ok(SourceDocument::new(source, text))
}

/// Serialize a command result as pretty JSON
pub(crate) fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(format!("{}\n", serde_json::to_string_pretty(value)?))
}
