//! Vector Module
//!
//! Similarity functions, the reference corpus and the ranker.

mod corpus;
mod query;
mod ranker;
mod similarity;

pub use corpus::Corpus;
pub use query::parse_query;
pub use ranker::{rank, DocumentScore, RankingResult, SimilarityRanker};
pub use similarity::{cosine_similarity, dot_product, magnitude};
