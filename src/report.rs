//! Result rendering
//!
//! Presentation of a [`RankingResult`]. Documents are numbered from 1 in
//! every rendering.

use serde::Serialize;
use std::fmt;

use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::vector::RankingResult;

#[derive(Serialize)]
struct JsonScore {
    document: usize,
    score: f64,
}

#[derive(Serialize)]
struct JsonReport {
    scores: Vec<JsonScore>,
    best_document: usize,
    best_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    top: Option<Vec<JsonScore>>,
}

/// Renders one ranking result
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    result: &'a RankingResult,
    precision: usize,
    top_k: Option<usize>,
}

impl<'a> Report<'a> {
    pub fn new(result: &'a RankingResult) -> Self {
        Self {
            result,
            precision: 4,
            top_k: None,
        }
    }

    /// Take precision and top-k from `config`
    pub fn from_config(result: &'a RankingResult, config: &Config) -> Self {
        Self {
            result,
            precision: config.precision,
            top_k: config.top_k,
        }
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_top_k(mut self, k: usize) -> Self {
        self.top_k = Some(k);
        self
    }

    /// Render in the requested format
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_string()),
            OutputFormat::Json => self.to_json(),
        }
    }

    /// Full-precision JSON object
    pub fn to_json(&self) -> Result<String> {
        let entry = |index: usize, score: f64| JsonScore {
            document: index + 1,
            score,
        };
        let report = JsonReport {
            scores: self
                .result
                .scores
                .iter()
                .enumerate()
                .map(|(i, &s)| entry(i, s))
                .collect(),
            best_document: self.result.best_index + 1,
            best_score: self.result.best_score,
            top: self.top_k.map(|k| {
                self.result
                    .top(k)
                    .into_iter()
                    .map(|d| entry(d.index, d.score))
                    .collect()
            }),
        };
        Ok(serde_json::to_string(&report)?)
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.precision;
        for (i, score) in self.result.scores.iter().enumerate() {
            writeln!(f, "Similarity with document {} = {:.*}", i + 1, p, score)?;
        }

        writeln!(f)?;
        writeln!(f, "Best matching document: {}", self.result.best_index + 1)?;
        write!(f, "Maximum Cosine Similarity: {:.*}", p, self.result.best_score)?;

        if let Some(k) = self.top_k {
            let top = self.result.top(k);
            writeln!(f)?;
            writeln!(f)?;
            write!(f, "Top {} matches:", top.len())?;
            for (rank, doc) in top.iter().enumerate() {
                write!(
                    f,
                    "\n  #{}: document {} ({:.*})",
                    rank + 1,
                    doc.index + 1,
                    p,
                    doc.score
                )?;
            }
        }
        Ok(())
    }
}
