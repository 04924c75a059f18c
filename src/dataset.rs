//! Training dataset generation
//!
//! Training files live in a directory tree whose path encodes their labels:
//! `algorithms/<language>/<category>/<variant>/<file>` becomes the tags
//! `[language, category, variant]`.

use std::fs;
use std::path::{Component, Path};

use ignore::WalkBuilder;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{RecognizerError, Result};
use crate::fs_utils;

/// Default dataset root directory
pub const DEFAULT_DATASET_ROOT: &str = "algorithms";

/// Default output file for the generated dataset
pub const DEFAULT_DATASET_PATH: &str = "datasets/train.json";

/// Extensions collected by default
pub const DEFAULT_EXTENSIONS: &[&str] = &["go", "py", "cpp"];

/// One labelled source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub code: String,
    pub tags: Vec<String>,
}

/// Derive tags from the directories between `root` and the file.
///
/// If `path` does not start with `root`, the components after the last directory
/// named like `root` are used; failing that, every parent directory is a tag.
pub fn tags_from_path(path: &Path, root: &Path) -> Vec<String> {
    let relative = match path.strip_prefix(root) {
        Ok(rel) => rel.to_path_buf(),
        Err(_) => {
            let components: Vec<Component> = path.components().collect();
            let anchor = root
                .file_name()
                .and_then(|name| components.iter().rposition(|c| c.as_os_str() == name));
            match anchor {
                Some(pos) => components[pos + 1..].iter().collect(),
                None => path.to_path_buf(),
            }
        }
    };

    let parts: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().to_string()),
            _ => None,
        })
        .collect();

    match parts.split_last() {
        Some((_, dirs)) => dirs.to_vec(),
        None => Vec::new(),
    }
}

/// Walk `root` and collect every file with one of `extensions`, in path order
pub fn generate(root: &Path, extensions: &[String]) -> Result<Vec<TrainingExample>> {
    if !root.is_dir() {
        return Err(RecognizerError::FileNotFound {
            path: root.display().to_string(),
        });
    }

    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .hidden(true)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b));

    let mut examples = Vec::new();
    for entry in builder.build() {
        let entry = entry.map_err(|e| RecognizerError::DatasetFailure {
            message: format!("Failed to walk {}: {}", root.display(), e),
        })?;

        let is_file = entry.file_type().is_some_and(|ft| ft.is_file());
        let wanted = entry
            .path()
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| extensions.iter().any(|want| want == ext));
        if !is_file || !wanted {
            continue;
        }

        debug!("Adding {}", entry.path().display());
        let code = fs::read_to_string(entry.path())?;
        examples.push(TrainingExample {
            code,
            tags: tags_from_path(entry.path(), root),
        });
    }

    Ok(examples)
}

/// Write the dataset as pretty JSON. An empty dataset is not written.
///
/// Returns whether a file was written.
pub fn write_dataset(path: &Path, examples: &[TrainingExample]) -> Result<bool> {
    if examples.is_empty() {
        info!("Dataset not generated: no examples found");
        return Ok(false);
    }
    let json = serde_json::to_string_pretty(examples)?;
    fs_utils::write_atomic(path, json)?;
    info!(
        "Dataset generated with {} examples at {}",
        examples.len(),
        path.display()
    );
    Ok(true)
}

pub fn read_dataset(path: &Path) -> Result<Vec<TrainingExample>> {
    if !path.exists() {
        return Err(RecognizerError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
