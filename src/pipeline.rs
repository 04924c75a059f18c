//! Extraction + prediction pipeline
//!
//! The pipeline borrows a fitted classifier and never mutates it. Documents share no
//! state, so [`Pipeline::run_batch`] fans them out over rayon without locking.

use rayon::prelude::*;
use tracing::{debug, info};

use crate::classifier::SnippetClassifier;
use crate::error::Result;
use crate::extract::extract;
use crate::schema::{AnnotatedFunction, SourceDocument};

pub struct Pipeline<'a, C: SnippetClassifier + ?Sized> {
    classifier: &'a C,
}

impl<'a, C: SnippetClassifier + ?Sized> Pipeline<'a, C> {
    pub fn new(classifier: &'a C) -> Self {
        Self { classifier }
    }

    /// Extract every function in `document` and classify each one independently.
    ///
    /// Output order is extraction order. A document without functions yields an empty
    /// list. Functions with no predicted tags are kept; filtering is up to the caller.
    ///
    /// # Errors
    ///
    /// Returns `RecognizerError::ParseFailure` when structured extraction rejects the
    /// document.
    pub fn run(&self, document: &SourceDocument) -> Result<Vec<AnnotatedFunction>> {
        let functions = extract(document)?;

        if functions.is_empty() {
            info!("No functions detected in {}", document.identifier);
            return Ok(Vec::new());
        }

        debug!(
            "Classifying {} functions from {}",
            functions.len(),
            document.identifier
        );

        Ok(functions
            .into_iter()
            .map(|function| {
                let prediction = self.classifier.predict(&function.snippet);
                AnnotatedFunction {
                    function,
                    prediction,
                }
            })
            .collect())
    }
}

impl<'a, C: SnippetClassifier + Sync + ?Sized> Pipeline<'a, C> {
    /// Run several documents in parallel. Results line up with `documents`; one
    /// document failing does not affect the others.
    pub fn run_batch(&self, documents: &[SourceDocument]) -> Vec<Result<Vec<AnnotatedFunction>>> {
        documents.par_iter().map(|doc| self.run(doc)).collect()
    }
}
