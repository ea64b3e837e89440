//! SIMRANK CLI
//!
//! Ranks a corpus against a query given on the command line or typed at
//! an interactive prompt.

use anyhow::Context;
use clap::Parser;
use simrank::{parse_query, Config, OutputFormat, Report, SimilarityRanker};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

/// SIMRANK - Cosine Similarity Ranking
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Corpus file (.json, or one whitespace-separated vector per line).
    /// Uses the built-in documents when omitted
    #[arg(short, long)]
    corpus: Option<PathBuf>,

    /// Rank this query and exit instead of prompting
    #[arg(short, long, allow_hyphen_values = true)]
    query: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Decimal places for printed scores
    #[arg(short, long, default_value_t = 4)]
    precision: usize,

    /// Also list the best K documents
    #[arg(short, long)]
    top: Option<usize>,
}

impl Args {
    fn into_config(self) -> (Config, Option<String>) {
        let mut config = Config::default()
            .with_format(self.format)
            .with_precision(self.precision);
        if let Some(path) = self.corpus {
            config = config.with_corpus_path(path);
        }
        if let Some(k) = self.top {
            config = config.with_top_k(k);
        }
        (config, self.query)
    }
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so reports stay clean on stdout
    fmt()
        .with_env_filter(default_filter())
        .with_writer(io::stderr)
        .init();

    let (config, query) = Args::parse().into_config();

    let corpus = config.load_corpus().context("failed to load corpus")?;
    info!(
        documents = corpus.len(),
        dimension = corpus.dimension(),
        "Corpus ready"
    );
    let ranker = SimilarityRanker::new(Arc::new(corpus));

    match query {
        Some(input) => {
            let output = rank_once(&ranker, &config, &input)?;
            println!("{}", output);
        }
        None => interactive(&ranker, &config)?,
    }

    info!("{}", ranker.metrics().summary());
    Ok(())
}

fn default_filter() -> EnvFilter {
    log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref())
}

/// `RUST_LOG` when set and valid, otherwise warnings from this crate only
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("simrank=warn"))
}

fn rank_once(ranker: &SimilarityRanker, config: &Config, input: &str) -> anyhow::Result<String> {
    let query = parse_query(input, ranker.dimension())?;
    let result = ranker.rank(&query)?;
    Ok(Report::from_config(&result, config).render(config.format)?)
}

fn interactive(ranker: &SimilarityRanker, config: &Config) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock();

    loop {
        print!("Enter {} values: ", ranker.dimension());
        io::stdout().flush()?;

        let mut input = String::new();
        if lines.read_line(&mut input)? == 0 {
            println!();
            break;
        }
        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
            break;
        }

        match rank_once(ranker, config, input) {
            Ok(output) => println!("{}\n", output),
            Err(e) => {
                warn!(input, error = %e, "Rejected query");
                eprintln!("Error: {}", e);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_default() {
        assert!(log_filter(None).to_string().contains("simrank=warn"));
    }

    #[test]
    fn test_log_filter_respects_env_level() {
        let filter = log_filter(Some("simrank=debug")).to_string();
        assert!(filter.contains("simrank=debug"));
        assert!(!filter.contains("warn"));
    }
}
