//! Error types and exit codes for algo-recognizer

use std::process::ExitCode;
use thiserror::Error;

/// Main error type for algo-recognizer operations
#[derive(Error, Debug)]
pub enum RecognizerError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Not a valid GitHub URL: {url}")]
    InvalidUrl { url: String },

    #[error("Failed to fetch source: {message}")]
    FetchFailure { message: String },

    #[error("Failed to parse file: {message}")]
    ParseFailure { message: String },

    #[error("Model error: {message}")]
    ModelFailure { message: String },

    #[error("Dataset error: {message}")]
    DatasetFailure { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RecognizerError {
    /// Convert error to the process exit code:
    /// - 0: Success
    /// - 1: File not found / IO error
    /// - 2: Invalid URL / fetch failure
    /// - 3: Parse failure
    /// - 4: Model or dataset failure
    /// - 5: Configuration error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::FileNotFound { .. } => ExitCode::from(1),
            Self::InvalidUrl { .. } => ExitCode::from(2),
            Self::FetchFailure { .. } => ExitCode::from(2),
            Self::ParseFailure { .. } => ExitCode::from(3),
            Self::ModelFailure { .. } => ExitCode::from(4),
            Self::DatasetFailure { .. } => ExitCode::from(4),
            Self::ConfigError { .. } => ExitCode::from(5),
            Self::Io(_) => ExitCode::from(1),
        }
    }
}

impl From<bincode::Error> for RecognizerError {
    fn from(e: bincode::Error) -> Self {
        Self::ModelFailure {
            message: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for RecognizerError {
    fn from(e: serde_json::Error) -> Self {
        Self::DatasetFailure {
            message: e.to_string(),
        }
    }
}

/// Result type alias for algo-recognizer operations
pub type Result<T> = std::result::Result<T, RecognizerError>;
