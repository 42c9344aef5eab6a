//! Prometheus metrics for the cache and the read path.

use metrics::{counter, describe_counter};

/// Metric names.
pub mod names {
    /// Cache lookups that found a value.
    pub const CACHE_HITS_TOTAL: &str = "catalog_cache_hits_total";
    /// Cache lookups that found nothing.
    pub const CACHE_MISSES_TOTAL: &str = "catalog_cache_misses_total";
    /// Backend failures absorbed by the cache client.
    pub const CACHE_ERRORS_TOTAL: &str = "catalog_cache_errors_total";
    /// Operations skipped because the cache was not ready.
    pub const CACHE_SKIPPED_TOTAL: &str = "catalog_cache_skipped_total";
    /// Fallback replica queries issued by fetch-by-id.
    pub const READ_FALLBACKS_TOTAL: &str = "catalog_read_fallbacks_total";
}

/// Register all metric descriptions.
pub fn register_metrics() {
    describe_counter!(names::CACHE_HITS_TOTAL, "Total number of cache hits");
    describe_counter!(names::CACHE_MISSES_TOTAL, "Total number of cache misses");
    describe_counter!(
        names::CACHE_ERRORS_TOTAL,
        "Total number of cache backend errors, by operation"
    );
    describe_counter!(
        names::CACHE_SKIPPED_TOTAL,
        "Total number of cache operations skipped while the cache was not ready"
    );
    describe_counter!(
        names::READ_FALLBACKS_TOTAL,
        "Total number of fallback replica reads, by outcome"
    );
}

/// Cache metrics recorder.
pub struct CacheMetrics;

impl CacheMetrics {
    /// Record a hit.
    pub fn hit() {
        counter!(names::CACHE_HITS_TOTAL).increment(1);
    }

    /// Record a miss.
    pub fn miss() {
        counter!(names::CACHE_MISSES_TOTAL).increment(1);
    }

    /// Record an absorbed backend error.
    pub fn error(operation: &'static str) {
        counter!(names::CACHE_ERRORS_TOTAL, "operation" => operation).increment(1);
    }

    /// Record an operation skipped while not ready.
    pub fn skipped(operation: &'static str) {
        counter!(names::CACHE_SKIPPED_TOTAL, "operation" => operation).increment(1);
    }
}

/// Read-path metrics recorder.
pub struct ReadMetrics;

impl ReadMetrics {
    /// Record a fallback replica read and how it ended
    /// (`found`, `not_found` or `failed`).
    pub fn fallback(outcome: &'static str) {
        counter!(names::READ_FALLBACKS_TOTAL, "outcome" => outcome).increment(1);
    }
}
