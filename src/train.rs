//! Offline training of the model bundle
//!
//! Dataset tags are split into a language target (the first tag naming a known
//! language) and the remaining algorithm tags. Both classifiers are fitted under a
//! growing iteration budget: a fit that does not converge is retried with a larger
//! budget until a ceiling, after which it is kept and a warning is reported.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::classifier::{
    FitOutcome, LanguageClassifier, SgdParams, TagBinarizer, TagClassifier,
};
use crate::dataset::TrainingExample;
use crate::error::{RecognizerError, Result};
use crate::features::Featurizer;
use crate::model::{ModelBundle, MODEL_FORMAT_VERSION};
use crate::schema::LanguageLabel;

/// Iteration budget for one model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvergencePolicy {
    /// Budget of the first attempt, and the increment between attempts
    pub initial_iter: usize,
    /// Cumulative budget after which a non-converged fit is accepted
    pub max_total_iter: usize,
}

impl Default for ConvergencePolicy {
    fn default() -> Self {
        Self {
            initial_iter: 1000,
            max_total_iter: 5000,
        }
    }
}

/// A fit that exhausted its budget without converging. Training still succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvergenceWarning {
    pub model: String,
    pub total_iter: usize,
}

impl fmt::Display for ConvergenceWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} model did not converge after {} iterations",
            self.model, self.total_iter
        )
    }
}

/// Fit `model` with `attempt(model, max_iter)`, growing `max_iter` until it converges.
///
/// Every failed attempt except the last is rolled back before the retry, so each
/// retry starts from the state the model had on entry.
pub fn fit_with_budget<M, F>(
    model: &mut M,
    name: &str,
    policy: &ConvergencePolicy,
    mut attempt: F,
) -> Option<ConvergenceWarning>
where
    M: Clone,
    F: FnMut(&mut M, usize) -> FitOutcome,
{
    let step = policy.initial_iter.max(1);
    let snapshot = model.clone();
    let mut max_iter = step;
    let mut total_iter = 0;

    loop {
        let outcome = attempt(model, max_iter);
        if outcome.converged {
            return None;
        }

        total_iter += step;
        if total_iter >= policy.max_total_iter {
            let warning = ConvergenceWarning {
                model: name.to_string(),
                total_iter,
            };
            warn!("{}", warning);
            return Some(warning);
        }

        max_iter = total_iter + step;
        warn!(
            "{} model did not converge, increasing max_iter to {}",
            name, max_iter
        );
        *model = snapshot.clone();
    }
}

/// Split dataset tags into the language target and the algorithm tags.
///
/// The language is the first tag that names a known language, compared
/// case-insensitively; `unknown` if none does. Language names are removed from the
/// algorithm tags.
pub fn split_targets(tags: &[String]) -> (LanguageLabel, Vec<String>) {
    let is_language = |tag: &str| {
        LanguageLabel::ALL
            .iter()
            .any(|label| label.as_str() == tag.to_lowercase())
    };

    let language = tags
        .iter()
        .find(|t| is_language(t.as_str()))
        .map(|t| t.parse().unwrap_or(LanguageLabel::Unknown))
        .unwrap_or(LanguageLabel::Unknown);

    let others = tags
        .iter()
        .filter(|t| !is_language(t.as_str()))
        .cloned()
        .collect();

    (language, others)
}

/// Summary of a training run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingReport {
    pub examples: usize,
    pub vocabulary_size: usize,
    pub tags: Vec<String>,
    /// True when an existing bundle was updated instead of replaced
    pub incremental: bool,
    pub warnings: Vec<ConvergenceWarning>,
}

#[derive(Debug, Clone, Default)]
pub struct Trainer {
    pub policy: ConvergencePolicy,
    pub params: SgdParams,
}

impl Trainer {
    pub fn new(policy: ConvergencePolicy) -> Self {
        Self {
            policy,
            params: SgdParams::default(),
        }
    }

    /// Train a bundle from `examples`.
    ///
    /// With `existing`, its vocabulary is kept frozen, its tag columns are extended
    /// with new tags, and both classifiers continue from their learned weights.
    pub fn train(
        &self,
        examples: &[TrainingExample],
        existing: Option<ModelBundle>,
    ) -> Result<(ModelBundle, TrainingReport)> {
        if examples.is_empty() {
            return Err(RecognizerError::DatasetFailure {
                message: "Dataset is empty".to_string(),
            });
        }

        let codes: Vec<&str> = examples.iter().map(|e| e.code.as_str()).collect();
        let (languages, tag_sets): (Vec<LanguageLabel>, Vec<Vec<String>>) =
            examples.iter().map(|e| split_targets(&e.tags)).unzip();

        let incremental = existing.is_some();
        let mut bundle = match existing {
            Some(mut bundle) => {
                let added = bundle.binarizer.extend(&tag_sets);
                bundle.tags.ensure_tags(bundle.binarizer.len());
                info!(
                    "Updating existing model ({} new tags, vocabulary of {} kept)",
                    added,
                    bundle.featurizer.vocabulary_size()
                );
                bundle
            }
            None => {
                let featurizer = Featurizer::fit(&codes);
                let binarizer = TagBinarizer::fit(&tag_sets);
                let n_features = featurizer.vocabulary_size();
                ModelBundle {
                    version: MODEL_FORMAT_VERSION,
                    language: LanguageClassifier::new(n_features),
                    tags: TagClassifier::new(n_features, binarizer.len()),
                    featurizer,
                    binarizer,
                }
            }
        };

        let x = bundle.featurizer.transform_batch(&codes);
        let masks = bundle.binarizer.transform(&tag_sets);
        let params = self.params;
        let mut warnings = Vec::new();

        warnings.extend(fit_with_budget(
            &mut bundle.language,
            "language",
            &self.policy,
            |model, max_iter| model.partial_fit(&x, &languages, &params, max_iter),
        ));
        warnings.extend(fit_with_budget(
            &mut bundle.tags,
            "tags",
            &self.policy,
            |model, max_iter| model.fit(&x, &masks, &params, max_iter),
        ));

        info!("Model trained on {} examples", examples.len());

        let report = TrainingReport {
            examples: examples.len(),
            vocabulary_size: bundle.featurizer.vocabulary_size(),
            tags: bundle.binarizer.classes().to_vec(),
            incremental,
            warnings,
        };
        Ok((bundle, report))
    }
}
