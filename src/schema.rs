//! Data model shared by extraction, prediction and reporting

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::lang::Lang;

/// A source file handed to the extractor. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    /// Path or URL the text came from
    pub identifier: String,
    /// Raw source text
    pub text: String,
    /// Declared or inferred language hint. Takes precedence over the identifier
    /// when extraction picks a strategy.
    pub language: Option<Lang>,
}

impl SourceDocument {
    pub fn new(identifier: impl Into<String>, text: impl Into<String>) -> Self {
        let identifier = identifier.into();
        let language = Lang::from_identifier(&identifier);
        Self {
            identifier,
            text: text.into(),
            language,
        }
    }

    /// A document whose language is declared rather than inferred
    pub fn with_language(
        identifier: impl Into<String>,
        text: impl Into<String>,
        language: Lang,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            text: text.into(),
            language: Some(language),
        }
    }
}

/// One function found in a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRecord {
    /// Function name, prefixed by enclosing scopes joined with `.`
    pub name: String,
    /// 1-based, inclusive
    pub start_line: usize,
    /// 1-based, inclusive
    pub end_line: usize,
    /// Source lines `start_line..=end_line` joined by `\n`
    pub snippet: String,
    /// Parameter list text without the surrounding parentheses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<String>,
}

impl FunctionRecord {
    /// Number of lines in the snippet, counting trailing empty lines
    pub fn line_count(&self) -> usize {
        self.snippet.split('\n').count()
    }
}

/// Closed set of language labels the classifier can predict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageLabel {
    Go,
    Cpp,
    Python,
    Unknown,
}

impl LanguageLabel {
    /// Every label, in classifier index order
    pub const ALL: [LanguageLabel; 4] = [Self::Go, Self::Cpp, Self::Python, Self::Unknown];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Go => "go",
            Self::Cpp => "cpp",
            Self::Python => "python",
            Self::Unknown => "unknown",
        }
    }

    /// Position of this label in [`LanguageLabel::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Self::Go => 0,
            Self::Cpp => 1,
            Self::Python => 2,
            Self::Unknown => 3,
        }
    }
}

impl fmt::Display for LanguageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageLabel {
    type Err = std::convert::Infallible;

    /// Case-insensitive; anything outside the closed set is `Unknown`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "go" => Self::Go,
            "cpp" => Self::Cpp,
            "python" => Self::Python,
            _ => Self::Unknown,
        })
    }
}

/// Classifier output for one snippet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    pub language: LanguageLabel,
    pub tags: BTreeSet<String>,
}

/// A function record together with its prediction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedFunction {
    #[serde(flatten)]
    pub function: FunctionRecord,
    #[serde(flatten)]
    pub prediction: Prediction,
}
