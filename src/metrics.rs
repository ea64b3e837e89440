//! Basic Metrics
//!
//! Query counters and ranking latency tracking.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Latency aggregate in microseconds
#[derive(Debug, Clone, Copy)]
struct Latency {
    sum_us: u64,
    count: u64,
    min_us: u64,
    max_us: u64,
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            sum_us: 0,
            count: 0,
            min_us: u64::MAX,
            max_us: 0,
        }
    }
}

/// Metrics collector
#[derive(Debug, Default)]
pub struct Metrics {
    /// Successfully ranked queries
    queries: AtomicU64,

    /// Queries that failed validation (dimension mismatch, empty corpus)
    rejected: AtomicU64,

    /// Total documents scored across all queries
    documents_scored: AtomicU64,

    latency: Mutex<Latency>,
}

impl Metrics {
    /// Create new metrics collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a ranked query that scored `documents` documents
    pub fn record_query(&self, documents: usize, latency: Duration) {
        self.queries.fetch_add(1, Ordering::Relaxed);
        self.documents_scored
            .fetch_add(documents as u64, Ordering::Relaxed);

        let latency_us = latency.as_micros() as u64;
        let mut agg = self.latency.lock();
        agg.sum_us += latency_us;
        agg.count += 1;
        agg.min_us = agg.min_us.min(latency_us);
        agg.max_us = agg.max_us.max(latency_us);
    }

    /// Record a query that was rejected before a result was produced
    pub fn record_rejected(&self) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Get ranked query count
    pub fn queries(&self) -> u64 {
        self.queries.load(Ordering::Relaxed)
    }

    /// Get rejected query count
    pub fn rejected(&self) -> u64 {
        self.rejected.load(Ordering::Relaxed)
    }

    /// Get total documents scored
    pub fn documents_scored(&self) -> u64 {
        self.documents_scored.load(Ordering::Relaxed)
    }

    /// Get average latency in microseconds
    pub fn avg_latency_us(&self) -> f64 {
        let agg = self.latency.lock();
        if agg.count == 0 {
            return 0.0;
        }
        agg.sum_us as f64 / agg.count as f64
    }

    /// Get min latency in microseconds
    pub fn min_latency_us(&self) -> u64 {
        let min = self.latency.lock().min_us;
        if min == u64::MAX {
            0
        } else {
            min
        }
    }

    /// Get max latency in microseconds
    pub fn max_latency_us(&self) -> u64 {
        self.latency.lock().max_us
    }

    /// Get a summary of metrics
    pub fn summary(&self) -> String {
        format!(
            "Queries: {} (rejected: {}) | Documents scored: {} | Latency (µs): avg={:.1}, min={}, max={}",
            self.queries(),
            self.rejected(),
            self.documents_scored(),
            self.avg_latency_us(),
            self.min_latency_us(),
            self.max_latency_us()
        )
    }
}
