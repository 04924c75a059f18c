//! Multi-class language classifier
//!
//! One scorer per label in [`LanguageLabel::ALL`]. The label space is the closed
//! enum, so every incremental fit covers the full set and it can never shrink.

use serde::{Deserialize, Serialize};

use crate::classifier::sgd::{FitOutcome, LinearScorer, SgdParams};
use crate::features::FeatureVector;
use crate::schema::LanguageLabel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageClassifier {
    /// Indexed by [`LanguageLabel::index`]
    scorers: Vec<LinearScorer>,
    samples_seen: usize,
}

impl LanguageClassifier {
    pub fn new(n_features: usize) -> Self {
        Self {
            scorers: LanguageLabel::ALL
                .iter()
                .map(|_| LinearScorer::new(n_features))
                .collect(),
            samples_seen: 0,
        }
    }

    /// Number of per-label scorers; a well-formed classifier has one per label
    pub fn n_scorers(&self) -> usize {
        self.scorers.len()
    }

    pub fn samples_seen(&self) -> usize {
        self.samples_seen
    }

    /// Train on a new batch, keeping everything learned from earlier batches
    pub fn partial_fit(
        &mut self,
        x: &[FeatureVector],
        y: &[LanguageLabel],
        params: &SgdParams,
        max_iter: usize,
    ) -> FitOutcome {
        let mut outcome = FitOutcome::trivial();
        for label in LanguageLabel::ALL {
            let targets: Vec<bool> = y.iter().map(|l| *l == label).collect();
            let scorer = &mut self.scorers[label.index()];
            outcome = outcome.merge(scorer.fit_epochs(x, &targets, params, max_iter));
        }
        self.samples_seen += x.len();
        outcome
    }

    /// Highest-scoring label; `Unknown` until the classifier has seen data
    pub fn predict(&self, x: &FeatureVector) -> LanguageLabel {
        if self.samples_seen == 0 {
            return LanguageLabel::Unknown;
        }

        let mut best = (LanguageLabel::Unknown, f64::NEG_INFINITY);
        for label in LanguageLabel::ALL {
            let score = self.scorers[label.index()].decision(x);
            if score > best.1 {
                best = (label, score);
            }
        }
        best.0
    }
}
