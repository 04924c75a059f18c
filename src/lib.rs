//! algo-recognizer: find functions in source files and tag the algorithms they implement
//!
//! The library has two halves. Extraction turns a [`SourceDocument`] into ordered
//! [`FunctionRecord`]s using a strategy picked from the file name:
//!
//! - Python: tree-sitter parse, top-level functions only
//! - C++: line scan that tracks `class`/`struct` scopes and brace depth
//! - everything else: a regex over typed function heads
//!
//! Classification featurizes each function's snippet against a frozen vocabulary and
//! predicts a language label and a set of algorithm tags with a [`ModelBundle`].
//! [`Pipeline`] ties the two together.
//!
//! # Example
//!
//! ```ignore
//! use algo_recognizer::{ModelBundle, Pipeline, SourceDocument};
//! use std::path::Path;
//!
//! let bundle = ModelBundle::load(Path::new("model/algo_recognizer.bin"))?;
//! let doc = SourceDocument::new("sort.py", "def bubble(a):\n    return a\n");
//!
//! for annotated in Pipeline::new(&bundle).run(&doc)? {
//!     println!("{} {:?}", annotated.function.name, annotated.prediction.tags);
//! }
//! ```

pub mod classifier;
pub mod cli;
pub mod commands;
pub mod config;
pub mod dataset;
pub mod error;
pub mod extract;
pub mod features;
pub mod fetch;
pub mod fs_utils;
pub mod lang;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod schema;
pub mod train;

// Re-export commonly used types
pub use classifier::SnippetClassifier;
pub use cli::{Cli, Commands, OutputFormat};
pub use config::RecognizerConfig;
pub use dataset::TrainingExample;
pub use error::{RecognizerError, Result};
pub use extract::{extract, extract_with, SNIPPET_WINDOW};
pub use features::{FeatureVector, Featurizer};
pub use lang::{Lang, Strategy};
pub use model::ModelBundle;
pub use pipeline::Pipeline;
pub use schema::{AnnotatedFunction, FunctionRecord, LanguageLabel, Prediction, SourceDocument};
pub use train::{ConvergencePolicy, ConvergenceWarning, Trainer, TrainingReport};
