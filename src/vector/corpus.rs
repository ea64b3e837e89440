//! Corpus
//!
//! Immutable, ordered collection of reference vectors. Built once at
//! startup from a file or from the built-in documents, then shared
//! read-only.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{Result, SimrankError};

/// Documents used when no corpus file is given.
const BUILTIN_DOCUMENTS: [[f64; 3]; 5] = [
    [1.0, 2.0, 3.0],
    [2.0, 3.0, 4.0],
    [5.0, 5.0, 5.0],
    [1.0, 0.0, 1.0],
    [3.0, 3.0, 3.0],
];

/// Accepted JSON layouts for a corpus file
#[derive(Deserialize)]
#[serde(untagged)]
enum CorpusFile {
    Bare(Vec<Vec<f64>>),
    Wrapped { documents: Vec<Vec<f64>> },
}

/// Fixed collection of equal-length vectors
#[derive(Debug, Clone, PartialEq)]
pub struct Corpus {
    documents: Vec<Vec<f64>>,
    /// Dimension shared by every document
    dimension: usize,
}

impl Corpus {
    /// Build a corpus, validating that it is non-empty, that every
    /// document has the dimension of the first one, and that all values
    /// are finite.
    pub fn new(documents: Vec<Vec<f64>>) -> Result<Self> {
        let dimension = match documents.first() {
            Some(first) => first.len(),
            None => return Err(SimrankError::EmptyCorpus),
        };
        if dimension == 0 {
            return Err(SimrankError::InvalidVector(
                "documents must have at least one component".to_string(),
            ));
        }

        for (i, doc) in documents.iter().enumerate() {
            if doc.len() != dimension {
                return Err(SimrankError::mismatch(dimension, doc.len()).at_document(i));
            }
            if let Some(pos) = doc.iter().position(|v| !v.is_finite()) {
                return Err(SimrankError::InvalidVector(format!(
                    "document {} has non-finite value at index {}",
                    i + 1,
                    pos
                )));
            }
        }

        Ok(Self {
            documents,
            dimension,
        })
    }

    /// The five three-dimensional documents the tool ships with
    pub fn builtin() -> Self {
        Self {
            documents: BUILTIN_DOCUMENTS.iter().map(|d| d.to_vec()).collect(),
            dimension: 3,
        }
    }

    /// Parse a JSON corpus: either `[[..], ..]` or `{"documents": [[..], ..]}`
    pub fn from_json_str(s: &str) -> Result<Self> {
        let documents = match serde_json::from_str::<CorpusFile>(s)? {
            CorpusFile::Bare(docs) => docs,
            CorpusFile::Wrapped { documents } => documents,
        };
        Self::new(documents)
    }

    /// Parse a text corpus: one document per line, components separated by
    /// whitespace or commas. Blank lines and `#` comments are skipped.
    pub fn from_text_str(s: &str) -> Result<Self> {
        let mut documents = Vec::new();
        for (lineno, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let doc = line
                .split(|c: char| c.is_whitespace() || c == ',')
                .filter(|t| !t.is_empty())
                .map(|t| {
                    t.parse::<f64>().map_err(|_| {
                        SimrankError::InputParse(format!(
                            "line {}: '{}' is not a number",
                            lineno + 1,
                            t
                        ))
                    })
                })
                .collect::<Result<Vec<f64>>>()?;
            documents.push(doc);
        }
        Self::new(documents)
    }

    /// Load a corpus file. `.json` files are parsed as JSON, anything else
    /// as the line-based text format.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let corpus = if is_json {
            Self::from_json_str(&contents)?
        } else {
            Self::from_text_str(&contents)?
        };

        info!(
            path = %path.display(),
            documents = corpus.len(),
            dimension = corpus.dimension(),
            "Loaded corpus"
        );
        Ok(corpus)
    }

    /// Get document dimension
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Get number of documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Pairs with `len`; `Corpus::new` never yields an empty corpus
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Get a document by 0-based index
    pub fn get(&self, index: usize) -> Option<&[f64]> {
        self.documents.get(index).map(Vec::as_slice)
    }

    /// Documents in corpus order
    pub fn documents(&self) -> &[Vec<f64>] {
        &self.documents
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin() {
        let corpus = Corpus::builtin();
        assert_eq!(corpus.len(), 5);
        assert!(!corpus.is_empty());
        assert_eq!(corpus.dimension(), 3);
        assert_eq!(corpus.get(2), Some(&[5.0, 5.0, 5.0][..]));
        assert_eq!(corpus.get(5), None);
        assert_eq!(Corpus::new(corpus.documents().to_vec()).unwrap(), corpus);
    }

    #[test]
    fn test_empty_corpus() {
        assert!(matches!(Corpus::new(vec![]), Err(SimrankError::EmptyCorpus)));
        assert!(matches!(
            Corpus::from_text_str("# nothing here\n\n"),
            Err(SimrankError::EmptyCorpus)
        ));
    }

    #[test]
    fn test_zero_dimension_corpus() {
        assert!(matches!(
            Corpus::new(vec![vec![]]),
            Err(SimrankError::InvalidVector(_))
        ));
        assert!(matches!(
            Corpus::from_json_str("[[]]"),
            Err(SimrankError::InvalidVector(_))
        ));
        assert!(matches!(
            Corpus::from_json_str(r#"{"documents": [[]]}"#),
            Err(SimrankError::InvalidVector(_))
        ));
    }

    #[test]
    fn test_dimension_mismatch() {
        let result = Corpus::new(vec![vec![1.0, 2.0, 3.0], vec![1.0, 2.0]]);
        assert!(matches!(
            result,
            Err(SimrankError::DimensionMismatch {
                index: Some(1),
                expected: 3,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_invalid_values() {
        let result = Corpus::new(vec![vec![1.0, f64::NAN]]);
        assert!(matches!(result, Err(SimrankError::InvalidVector(_))));

        let result = Corpus::new(vec![vec![1.0, 2.0], vec![f64::INFINITY, 0.0]]);
        assert!(matches!(result, Err(SimrankError::InvalidVector(_))));
    }

    #[test]
    fn test_from_json_bare() {
        let corpus = Corpus::from_json_str("[[1, 2], [3.5, -4]]").unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.dimension(), 2);
        assert_eq!(corpus.get(1), Some(&[3.5, -4.0][..]));
    }

    #[test]
    fn test_from_json_wrapped() {
        let corpus = Corpus::from_json_str(r#"{"documents": [[1, 0, 1]]}"#).unwrap();
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.dimension(), 3);
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(
            Corpus::from_json_str("[[1, 2],"),
            Err(SimrankError::Json(_))
        ));
        assert!(matches!(
            Corpus::from_json_str(r#"{"docs": []}"#),
            Err(SimrankError::Json(_))
        ));
    }

    #[test]
    fn test_from_text() {
        let text = "# reference documents\n1 2 3\n\n2, 3, 4\n  5,5 5  \n";
        let corpus = Corpus::from_text_str(text).unwrap();
        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.get(1), Some(&[2.0, 3.0, 4.0][..]));
        assert_eq!(corpus.get(2), Some(&[5.0, 5.0, 5.0][..]));
    }

    #[test]
    fn test_from_text_bad_number() {
        let err = Corpus::from_text_str("1 2 3\n4 x 6\n").unwrap_err();
        match err {
            SimrankError::InputParse(msg) => assert!(msg.contains("line 2")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_files() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("corpus.json");
        std::fs::write(&json_path, "[[1, 2, 3], [3, 3, 3]]").unwrap();
        let corpus = Corpus::load(&json_path).unwrap();
        assert_eq!(corpus.len(), 2);

        let text_path = dir.path().join("corpus.txt");
        let mut file = std::fs::File::create(&text_path).unwrap();
        writeln!(file, "1 0 1").unwrap();
        writeln!(file, "5 5 5").unwrap();
        drop(file);
        let corpus = Corpus::load(&text_path).unwrap();
        assert_eq!(corpus.get(0), Some(&[1.0, 0.0, 1.0][..]));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Corpus::load(dir.path().join("missing.json"));
        assert!(matches!(result, Err(SimrankError::Io(_))));
    }
}
