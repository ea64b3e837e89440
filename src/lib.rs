//! SIMRANK - Cosine Similarity Ranking
//!
//! Ranks a fixed corpus of vectors against a query vector by cosine
//! similarity and reports the best match. Ranking returns plain data;
//! rendering lives in [`report`].

pub mod config;
pub mod error;
pub mod metrics;
pub mod report;
pub mod vector;

pub use config::{Config, OutputFormat};
pub use error::{Result, SimrankError};
pub use metrics::Metrics;
pub use report::Report;
pub use vector::{parse_query, rank, Corpus, DocumentScore, RankingResult, SimilarityRanker};
