//! CLI argument definitions using clap with subcommand architecture

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Locate functions in source files and predict what algorithm each one implements
#[derive(Parser, Debug)]
#[command(name = "algo-recognizer")]
#[command(about = "Detect functions in source code and tag the algorithms they implement")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (applies to all commands)
    #[arg(short, long, default_value = "text", value_enum, global = true)]
    pub format: OutputFormat,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (defaults to $ALGO_RECOGNIZER_CONFIG, then the user config dir)
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,
}

/// Available subcommands for algo-recognizer
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract functions from a file or GitHub URL and predict their tags
    #[command(visible_alias = "s")]
    Scan(ScanArgs),

    /// List function boundaries without running the classifier
    #[command(visible_alias = "x")]
    Extract(ExtractArgs),

    /// Predict language and tags for a whole file
    Predict(PredictArgs),

    /// Generate a training dataset from a labelled directory tree
    Dataset(DatasetArgs),

    /// Train or update the model bundle
    Train(TrainArgs),

    /// Manage algo-recognizer configuration
    Config(ConfigArgs),
}

/// Arguments for the scan command
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Local file path or GitHub file URL
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Model bundle to use
    #[arg(short, long, env = "ALGO_RECOGNIZER_MODEL", value_name = "FILE")]
    pub model: Option<PathBuf>,

    /// Include functions for which no tag was predicted
    #[arg(short, long)]
    pub all: bool,
}

/// Arguments for the extract command
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Local file path or GitHub file URL
    #[arg(value_name = "SOURCE")]
    pub source: String,
}

/// Arguments for the predict command
#[derive(Args, Debug)]
pub struct PredictArgs {
    /// Source file to classify as a whole
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Model bundle to use
    #[arg(short, long, env = "ALGO_RECOGNIZER_MODEL", value_name = "FILE")]
    pub model: Option<PathBuf>,
}

/// Arguments for the dataset command
#[derive(Args, Debug)]
pub struct DatasetArgs {
    /// Root of the labelled tree (`<language>/<category>/<variant>/<file>`)
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Where to write the dataset JSON
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// File extensions to collect (comma-separated, e.g. "go,py,cpp")
    #[arg(long, value_delimiter = ',')]
    pub ext: Vec<String>,
}

/// Arguments for the train command
#[derive(Args, Debug)]
pub struct TrainArgs {
    /// Dataset JSON produced by `dataset`
    #[arg(short, long, value_name = "FILE")]
    pub dataset: Option<PathBuf>,

    /// Model bundle to create or update
    #[arg(short, long, env = "ALGO_RECOGNIZER_MODEL", value_name = "FILE")]
    pub model: Option<PathBuf>,

    /// Ignore an existing model and train from scratch
    #[arg(long)]
    pub fresh: bool,

    /// Iterations of the first fitting attempt (also the retry increment)
    #[arg(long, value_name = "N")]
    pub initial_iter: Option<usize>,

    /// Total iteration budget before a non-converged fit is accepted
    #[arg(long, value_name = "N")]
    pub max_total_iter: Option<usize>,
}

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Config operation: show, get, set, reset
    #[command(subcommand)]
    pub operation: ConfigOperation,
}

/// Config subcommand operations
#[derive(Subcommand, Debug)]
pub enum ConfigOperation {
    /// Show current configuration
    Show,

    /// Print a single configuration value
    Get {
        /// Configuration key (e.g., model.path, logging.level)
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., model.path, training.max_total_iter)
        key: String,
        /// Value to set
        value: String,
    },

    /// Reset configuration to defaults
    Reset,
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON for machine parsing
    Json,
}
