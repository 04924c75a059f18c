//! Language detection and extraction strategy selection

use tree_sitter::Language;

use crate::schema::SourceDocument;

/// Source languages recognized from file identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    Python,
    Cpp,
    C,
    Go,
    Java,
    JavaScript,
}

impl Lang {
    /// Detect language from a path or URL.
    ///
    /// Query strings and fragments are ignored, so
    /// `https://host/sort.py?raw=true` is still Python.
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        let stripped = identifier
            .split(['?', '#'])
            .next()
            .unwrap_or(identifier);
        let file_name = stripped.rsplit(['/', '\\']).next().unwrap_or(stripped);
        let (_, ext) = file_name.rsplit_once('.')?;
        Self::from_extension(ext)
    }

    /// Detect language from file extension string
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "py" | "pyi" => Some(Self::Python),
            "cpp" | "cc" | "cxx" | "hpp" | "hxx" | "hh" => Some(Self::Cpp),
            "c" | "h" => Some(Self::C),
            "go" => Some(Self::Go),
            "java" => Some(Self::Java),
            "js" | "mjs" | "cjs" => Some(Self::JavaScript),
            _ => None,
        }
    }

    /// Get the canonical name of the language
    pub fn name(&self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Cpp => "cpp",
            Self::C => "c",
            Self::Go => "go",
            Self::Java => "java",
            Self::JavaScript => "javascript",
        }
    }

    /// Extraction strategy used for this language
    pub fn strategy(&self) -> Strategy {
        match self {
            Self::Python => Strategy::Structured,
            Self::Cpp => Strategy::BraceTracking,
            Self::C | Self::Go | Self::Java | Self::JavaScript => Strategy::Regex,
        }
    }

    /// Get the tree-sitter grammar, for languages parsed structurally
    pub fn tree_sitter_language(&self) -> Option<Language> {
        match self {
            Self::Python => Some(tree_sitter_python::LANGUAGE.into()),
            _ => None,
        }
    }
}

/// Function extraction strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Full parse of the document, top-level declarations only
    Structured,
    /// Line scan with class/struct scope and brace-depth stacks
    BraceTracking,
    /// Single regex scan for typed function heads
    Regex,
}

impl Strategy {
    /// Select a strategy from a file identifier. Unknown extensions fall back to `Regex`.
    pub fn select(identifier: &str) -> Self {
        Lang::from_identifier(identifier)
            .map(|lang| lang.strategy())
            .unwrap_or(Self::Regex)
    }

    /// Strategy for a document: its language hint wins, then the identifier
    pub fn for_document(document: &SourceDocument) -> Self {
        match document.language {
            Some(lang) => lang.strategy(),
            None => Self::select(&document.identifier),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Structured => "structured",
            Self::BraceTracking => "brace-tracking",
            Self::Regex => "regex",
        }
    }
}
