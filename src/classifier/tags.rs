//! Multi-label tag prediction
//!
//! [`TagBinarizer`] maps tag sets to fixed-width boolean masks and back.
//! [`TagClassifier`] keeps one independent scorer per mask column.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::classifier::sgd::{FitOutcome, LinearScorer, SgdParams};
use crate::features::FeatureVector;

/// Tag set <-> mask conversion
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagBinarizer {
    classes: Vec<String>,
}

impl TagBinarizer {
    /// Learn the tag columns, sorted
    pub fn fit<S: AsRef<str>>(tag_sets: &[Vec<S>]) -> Self {
        let classes: BTreeSet<String> = tag_sets
            .iter()
            .flatten()
            .map(|t| t.as_ref().to_string())
            .collect();
        Self {
            classes: classes.into_iter().collect(),
        }
    }

    /// Append tags not seen before. Existing columns keep their positions.
    ///
    /// Returns the number of columns added.
    pub fn extend<S: AsRef<str>>(&mut self, tag_sets: &[Vec<S>]) -> usize {
        let new_tags: BTreeSet<String> = tag_sets
            .iter()
            .flatten()
            .map(|t| t.as_ref().to_string())
            .filter(|t| !self.classes.contains(t))
            .collect();
        let added = new_tags.len();
        self.classes.extend(new_tags);
        added
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn transform<S: AsRef<str>>(&self, tag_sets: &[Vec<S>]) -> Vec<Vec<bool>> {
        tag_sets
            .iter()
            .map(|tags| {
                self.classes
                    .iter()
                    .map(|class| tags.iter().any(|t| t.as_ref() == class))
                    .collect()
            })
            .collect()
    }

    /// Tags whose column is set. Columns beyond the known classes are ignored.
    pub fn inverse_transform(&self, mask: &[bool]) -> BTreeSet<String> {
        self.classes
            .iter()
            .zip(mask)
            .filter(|(_, on)| **on)
            .map(|(class, _)| class.clone())
            .collect()
    }
}

/// One-vs-rest tag classifier
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TagClassifier {
    scorers: Vec<LinearScorer>,
    n_features: usize,
}

impl TagClassifier {
    pub fn new(n_features: usize, n_tags: usize) -> Self {
        Self {
            scorers: (0..n_tags).map(|_| LinearScorer::new(n_features)).collect(),
            n_features,
        }
    }

    pub fn n_tags(&self) -> usize {
        self.scorers.len()
    }

    /// Grow to `n_tags` columns; new columns start untrained
    pub fn ensure_tags(&mut self, n_tags: usize) {
        while self.scorers.len() < n_tags {
            self.scorers.push(LinearScorer::new(self.n_features));
        }
    }

    /// Train every column on `(x, masks)`, continuing from the current weights
    pub fn fit(
        &mut self,
        x: &[FeatureVector],
        masks: &[Vec<bool>],
        params: &SgdParams,
        max_iter: usize,
    ) -> FitOutcome {
        let mut outcome = FitOutcome::trivial();
        for (column, scorer) in self.scorers.iter_mut().enumerate() {
            let targets: Vec<bool> = masks
                .iter()
                .map(|m| m.get(column).copied().unwrap_or(false))
                .collect();
            outcome = outcome.merge(scorer.fit_epochs(x, &targets, params, max_iter));
        }
        outcome
    }

    /// Mask of tags whose scorer is positive. May be all false.
    pub fn predict(&self, x: &FeatureVector) -> Vec<bool> {
        self.scorers.iter().map(|s| s.decision(x) > 0.0).collect()
    }
}
