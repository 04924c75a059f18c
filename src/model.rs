//! Persisted model bundle
//!
//! A bundle holds everything prediction needs: the frozen featurizer, the language
//! classifier, the tag classifier and the tag binarizer. It is stored with bincode.
//! Once loaded it is never mutated, so one bundle can serve any number of threads.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::classifier::{LanguageClassifier, SnippetClassifier, TagBinarizer, TagClassifier};
use crate::error::{RecognizerError, Result};
use crate::features::{FeatureVector, Featurizer};
use crate::fs_utils;
use crate::schema::LanguageLabel;

/// Bumped whenever the serialized layout changes
pub const MODEL_FORMAT_VERSION: u32 = 1;

/// Default bundle location, relative to the working directory
pub const DEFAULT_MODEL_PATH: &str = "model/algo_recognizer.bin";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelBundle {
    pub version: u32,
    pub featurizer: Featurizer,
    pub language: LanguageClassifier,
    pub tags: TagClassifier,
    pub binarizer: TagBinarizer,
}

impl ModelBundle {
    /// A bundle that has learned nothing: every snippet is `unknown` with no tags
    pub fn empty() -> Self {
        Self {
            version: MODEL_FORMAT_VERSION,
            featurizer: Featurizer::default(),
            language: LanguageClassifier::new(0),
            tags: TagClassifier::new(0, 0),
            binarizer: TagBinarizer::default(),
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let bundle: Self = bincode::deserialize(bytes)?;
        if bundle.version != MODEL_FORMAT_VERSION {
            return Err(RecognizerError::ModelFailure {
                message: format!(
                    "Unsupported model format version {} (expected {})",
                    bundle.version, MODEL_FORMAT_VERSION
                ),
            });
        }
        bundle.check_shape()?;
        Ok(bundle)
    }

    /// Scorer counts must line up with the label set and the binarizer columns
    fn check_shape(&self) -> Result<()> {
        if self.language.n_scorers() != LanguageLabel::ALL.len() {
            return Err(RecognizerError::ModelFailure {
                message: format!(
                    "Corrupt model: {} language scorers for {} labels",
                    self.language.n_scorers(),
                    LanguageLabel::ALL.len()
                ),
            });
        }
        if self.tags.n_tags() != self.binarizer.len() {
            return Err(RecognizerError::ModelFailure {
                message: format!(
                    "Corrupt model: {} tag scorers for {} tags",
                    self.tags.n_tags(),
                    self.binarizer.len()
                ),
            });
        }
        Ok(())
    }

    /// Load a bundle from disk
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RecognizerError::ModelFailure {
                message: format!(
                    "Model not found at {} (run `algo-recognizer train` first)",
                    path.display()
                ),
            });
        }
        info!("Opening model {}", path.display());
        let bytes = fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// Save a bundle, replacing any existing file atomically
    pub fn save(&self, path: &Path) -> Result<()> {
        fs_utils::write_atomic(path, self.to_bytes()?)?;
        info!("Saved model to {}", path.display());
        Ok(())
    }
}

impl SnippetClassifier for ModelBundle {
    fn transform(&self, snippet: &str) -> FeatureVector {
        self.featurizer.transform(snippet)
    }

    fn predict_language(&self, features: &FeatureVector) -> LanguageLabel {
        self.language.predict(features)
    }

    fn predict_tags(&self, features: &FeatureVector) -> Vec<bool> {
        self.tags.predict(features)
    }

    fn decode_tags(&self, mask: &[bool]) -> BTreeSet<String> {
        self.binarizer.inverse_transform(mask)
    }
}
