//! Error types
//!
//! Every fallible library operation returns [`Result`].

/// Error type for ranking operations.
#[derive(Debug, thiserror::Error)]
pub enum SimrankError {
    /// Two vectors that must be compared have different lengths.
    ///
    /// `index` names the corpus document when the mismatch was found
    /// while ranking or loading a corpus.
    #[error("Dimension mismatch{}: expected {expected}, got {actual}", fmt_index(.index))]
    DimensionMismatch {
        index: Option<usize>,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid input: {0}")]
    InputParse(String),

    #[error("Corpus is empty")]
    EmptyCorpus,

    #[error("Invalid vector: {0}")]
    InvalidVector(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn fmt_index(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(" at document {}", i + 1),
        None => String::new(),
    }
}

impl SimrankError {
    pub(crate) fn mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            index: None,
            expected,
            actual,
        }
    }

    /// Attach the offending corpus index to a dimension mismatch.
    pub(crate) fn at_document(self, i: usize) -> Self {
        match self {
            Self::DimensionMismatch {
                expected, actual, ..
            } => Self::DimensionMismatch {
                index: Some(i),
                expected,
                actual,
            },
            other => other,
        }
    }
}

/// Result type for ranking operations.
pub type Result<T> = std::result::Result<T, SimrankError>;
