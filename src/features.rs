//! Bag-of-tokens featurization
//!
//! The vocabulary is learned once from the training corpus and then frozen. Tokens
//! are runs of alphanumerics and underscores; case is preserved so training and
//! inference see exactly the same tokens. Tokens outside the vocabulary are dropped.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

/// Split text into tokens on whitespace and punctuation
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|word| !word.is_empty())
}

/// Sparse token counts, sorted by vocabulary index
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureVector {
    entries: Vec<(usize, f64)>,
}

impl FeatureVector {
    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dot product with a dense weight vector. Indices beyond `weights` count as zero.
    pub fn dot(&self, weights: &[f64]) -> f64 {
        self.entries
            .iter()
            .filter_map(|&(i, v)| weights.get(i).map(|w| w * v))
            .sum()
    }

    /// Count of the token at `index`, zero when absent
    pub fn get(&self, index: usize) -> f64 {
        self.entries
            .binary_search_by_key(&index, |&(i, _)| i)
            .map(|pos| self.entries[pos].1)
            .unwrap_or(0.0)
    }
}

/// Frozen token -> index mapping
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Featurizer {
    vocabulary: HashMap<String, usize>,
}

impl Featurizer {
    /// Learn the vocabulary from a corpus. Indices follow lexicographic token order.
    pub fn fit<S: AsRef<str>>(corpus: &[S]) -> Self {
        let tokens: BTreeSet<&str> = corpus
            .iter()
            .flat_map(|text| tokenize(text.as_ref()))
            .collect();

        let vocabulary = tokens
            .into_iter()
            .enumerate()
            .map(|(index, token)| (token.to_string(), index))
            .collect();

        Self { vocabulary }
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.vocabulary.get(token).copied()
    }

    /// Count known tokens in `text`
    pub fn transform(&self, text: &str) -> FeatureVector {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for token in tokenize(text) {
            if let Some(&index) = self.vocabulary.get(token) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let mut entries: Vec<(usize, f64)> = counts.into_iter().collect();
        entries.sort_unstable_by_key(|&(i, _)| i);
        FeatureVector { entries }
    }

    pub fn transform_batch<S: AsRef<str>>(&self, texts: &[S]) -> Vec<FeatureVector> {
        texts.iter().map(|t| self.transform(t.as_ref())).collect()
    }
}
