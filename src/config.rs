//! Ranker Configuration

use std::path::PathBuf;

use crate::error::Result;
use crate::vector::Corpus;

/// How ranking results are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// A single JSON object per query
    Json,
}

/// Ranker configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Corpus file; `None` uses the built-in documents
    pub corpus_path: Option<PathBuf>,

    /// Output format
    pub format: OutputFormat,

    /// Decimal places for printed scores
    pub precision: usize,

    /// Also list the best `k` documents
    pub top_k: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            corpus_path: None,
            format: OutputFormat::Text,
            precision: 4,
            top_k: None,
        }
    }
}

impl Config {
    /// Set the corpus file
    pub fn with_corpus_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.corpus_path = Some(path.into());
        self
    }

    /// Set the output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set score precision
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// List the best `k` documents
    pub fn with_top_k(mut self, k: usize) -> Self {
        self.top_k = Some(k);
        self
    }

    /// Build the corpus this configuration points at
    pub fn load_corpus(&self) -> Result<Corpus> {
        match &self.corpus_path {
            Some(path) => Corpus::load(path),
            None => Ok(Corpus::builtin()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.precision, 4);
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.top_k.is_none());
        assert_eq!(config.load_corpus().unwrap(), Corpus::builtin());
    }

    #[test]
    fn test_load_corpus_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs.json");
        std::fs::write(&path, r#"{"documents": [[1, 1], [0, 2]]}"#).unwrap();

        let config = Config::default()
            .with_corpus_path(&path)
            .with_format(OutputFormat::Json)
            .with_precision(2)
            .with_top_k(1);

        let corpus = config.load_corpus().unwrap();
        assert_eq!(corpus.dimension(), 2);
        assert_eq!(config.top_k, Some(1));
    }
}
