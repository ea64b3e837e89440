//! Similarity Ranker
//!
//! Linear-scan cosine ranking of a query against a corpus.
//!
//! The scan is O(n * d) for n documents of dimension d. The best match is
//! tracked while scanning with a strict `>` comparison, so on equal scores
//! the earliest document wins. No output happens here; see
//! [`crate::report`] for rendering.

use serde::Serialize;
use std::cmp::Ordering;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

use super::corpus::Corpus;
use super::similarity::cosine_similarity;
use crate::error::{Result, SimrankError};
use crate::metrics::Metrics;

/// Score of a single corpus document
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DocumentScore {
    /// 0-based position in the corpus
    pub index: usize,
    /// Cosine similarity to the query
    pub score: f64,
}

/// Outcome of ranking one query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingResult {
    /// Similarity of every document, in corpus order
    pub scores: Vec<f64>,
    /// 0-based index of the best document
    pub best_index: usize,
    /// Similarity of the best document
    pub best_score: f64,
}

impl RankingResult {
    /// The best match as a [`DocumentScore`]
    pub fn best(&self) -> DocumentScore {
        DocumentScore {
            index: self.best_index,
            score: self.best_score,
        }
    }

    /// Up to `k` documents ordered by score, highest first.
    ///
    /// Equal scores keep corpus order.
    pub fn top(&self, k: usize) -> Vec<DocumentScore> {
        let mut ranked: Vec<DocumentScore> = self
            .scores
            .iter()
            .enumerate()
            .map(|(index, &score)| DocumentScore { index, score })
            .collect();

        ranked.sort_by(|a, b| match b.score.total_cmp(&a.score) {
            Ordering::Equal => a.index.cmp(&b.index),
            other => other,
        });
        ranked.truncate(k);
        ranked
    }
}

/// Rank every document in `corpus` by cosine similarity to `query`.
///
/// Fails with [`SimrankError::EmptyCorpus`] for an empty corpus and with
/// [`SimrankError::DimensionMismatch`] (naming the document) as soon as a
/// document's length differs from the query's.
pub fn rank<V: AsRef<[f64]>>(query: &[f64], corpus: &[V]) -> Result<RankingResult> {
    let mut scores = Vec::with_capacity(corpus.len());
    let mut best: Option<DocumentScore> = None;

    for (index, doc) in corpus.iter().enumerate() {
        let doc = doc.as_ref();
        if doc.len() != query.len() {
            return Err(SimrankError::mismatch(query.len(), doc.len()).at_document(index));
        }

        let score = cosine_similarity(query, doc)?;
        debug!(document = index + 1, score, "Scored document");
        scores.push(score);

        match best {
            Some(current) if score > current.score => best = Some(DocumentScore { index, score }),
            None => best = Some(DocumentScore { index, score }),
            _ => {}
        }
    }

    let best = best.ok_or(SimrankError::EmptyCorpus)?;
    Ok(RankingResult {
        scores,
        best_index: best.index,
        best_score: best.score,
    })
}

/// Ranks queries against a shared, read-only corpus
///
/// Cheap to clone; clones share the corpus and the metrics.
#[derive(Debug, Clone)]
pub struct SimilarityRanker {
    corpus: Arc<Corpus>,
    metrics: Arc<Metrics>,
}

impl SimilarityRanker {
    /// Create a ranker with its own metrics collector
    pub fn new(corpus: Arc<Corpus>) -> Self {
        Self::with_metrics(corpus, Arc::new(Metrics::new()))
    }

    /// Create a ranker that records into `metrics`
    pub fn with_metrics(corpus: Arc<Corpus>, metrics: Arc<Metrics>) -> Self {
        Self { corpus, metrics }
    }

    /// Rank `query` against the corpus
    pub fn rank(&self, query: &[f64]) -> Result<RankingResult> {
        let start = Instant::now();
        let result = rank(query, self.corpus.documents());
        let elapsed = start.elapsed();

        match &result {
            Ok(r) => {
                self.metrics.record_query(self.corpus.len(), elapsed);
                debug!(
                    best = r.best_index + 1,
                    score = r.best_score,
                    latency = ?elapsed,
                    "Query ranked"
                );
            }
            Err(_) => self.metrics.record_rejected(),
        }

        result
    }

    /// Dimension every query must have
    pub fn dimension(&self) -> usize {
        self.corpus.dimension()
    }

    /// The corpus being ranked against
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Metrics recorded by this ranker
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}
