//! Snippet classification
//!
//! - `sgd`: binary logistic scorer shared by both classifiers
//! - `language`: multi-class language prediction over a closed label set
//! - `tags`: one-vs-rest tag prediction and tag mask decoding
//!
//! The pipeline only depends on the [`SnippetClassifier`] trait, so a persisted
//! model bundle and a test double are interchangeable.

pub mod language;
pub mod sgd;
pub mod tags;

pub use language::LanguageClassifier;
pub use sgd::{FitOutcome, LinearScorer, SgdParams};
pub use tags::{TagBinarizer, TagClassifier};

use std::collections::BTreeSet;

use crate::features::FeatureVector;
use crate::schema::{LanguageLabel, Prediction};

/// Read-only prediction contract consumed by the pipeline.
///
/// Implementations must be safe to share across threads once fitted.
pub trait SnippetClassifier {
    /// Featurize a snippet with the frozen vocabulary
    fn transform(&self, snippet: &str) -> FeatureVector;

    fn predict_language(&self, features: &FeatureVector) -> LanguageLabel;

    /// One flag per known tag
    fn predict_tags(&self, features: &FeatureVector) -> Vec<bool>;

    /// Turn a tag mask back into tag names
    fn decode_tags(&self, mask: &[bool]) -> BTreeSet<String>;

    /// Featurize and classify a snippet. Never fails; an empty snippet is valid.
    fn predict(&self, snippet: &str) -> Prediction {
        let features = self.transform(snippet);
        let mask = self.predict_tags(&features);
        Prediction {
            language: self.predict_language(&features),
            tags: self.decode_tags(&mask),
        }
    }
}
