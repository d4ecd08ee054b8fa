//! Basic metrics instrumentation for tracking gateway activity.
//!
//! Counts operations, denials and collaborator failures, and tracks the time
//! spent waiting on collaborators. Counters hold no contact data.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector shared by clones of the gateway.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Gateway operations started
    operations_total: Arc<AtomicU64>,

    /// Operations refused for a missing capability
    permission_denied_total: Arc<AtomicU64>,

    /// Collaborator calls made
    collaborator_calls_total: Arc<AtomicU64>,

    /// Collaborator calls that failed or timed out
    collaborator_failures_total: Arc<AtomicU64>,

    /// Total time spent in collaborator calls in milliseconds
    collaborator_duration_total_ms: Arc<AtomicU64>,

    /// Navigation requests handed to the host
    navigation_requests_total: Arc<AtomicU64>,

    /// Numbers the block list accepted a block for
    numbers_blocked_total: Arc<AtomicU64>,

    /// Numbers the block list accepted an unblock for
    numbers_unblocked_total: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            operations_total: Arc::new(AtomicU64::new(0)),
            permission_denied_total: Arc::new(AtomicU64::new(0)),
            collaborator_calls_total: Arc::new(AtomicU64::new(0)),
            collaborator_failures_total: Arc::new(AtomicU64::new(0)),
            collaborator_duration_total_ms: Arc::new(AtomicU64::new(0)),
            navigation_requests_total: Arc::new(AtomicU64::new(0)),
            numbers_blocked_total: Arc::new(AtomicU64::new(0)),
            numbers_unblocked_total: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn record_operation(&self) {
        self.operations_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_permission_denied(&self) {
        self.permission_denied_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a collaborator call with duration.
    pub fn record_collaborator_call(&self, duration: Duration) {
        self.collaborator_calls_total.fetch_add(1, Ordering::Relaxed);
        self.collaborator_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn record_collaborator_failure(&self) {
        self.collaborator_failures_total
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_navigation_request(&self) {
        self.navigation_requests_total
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_numbers_blocked(&self, count: usize) {
        self.numbers_blocked_total
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn record_numbers_unblocked(&self, count: usize) {
        self.numbers_unblocked_total
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn operations_total(&self) -> u64 {
        self.operations_total.load(Ordering::Relaxed)
    }

    pub fn permission_denied_total(&self) -> u64 {
        self.permission_denied_total.load(Ordering::Relaxed)
    }

    pub fn collaborator_calls_total(&self) -> u64 {
        self.collaborator_calls_total.load(Ordering::Relaxed)
    }

    pub fn collaborator_failures_total(&self) -> u64 {
        self.collaborator_failures_total.load(Ordering::Relaxed)
    }

    pub fn collaborator_duration_total_ms(&self) -> u64 {
        self.collaborator_duration_total_ms.load(Ordering::Relaxed)
    }

    /// Get average collaborator call duration in milliseconds.
    pub fn collaborator_duration_avg_ms(&self) -> f64 {
        let total = self.collaborator_duration_total_ms.load(Ordering::Relaxed);
        let count = self.collaborator_calls_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    pub fn navigation_requests_total(&self) -> u64 {
        self.navigation_requests_total.load(Ordering::Relaxed)
    }

    pub fn numbers_blocked_total(&self) -> u64 {
        self.numbers_blocked_total.load(Ordering::Relaxed)
    }

    pub fn numbers_unblocked_total(&self) -> u64 {
        self.numbers_unblocked_total.load(Ordering::Relaxed)
    }

    /// Reset all metrics to zero.
    pub fn reset(&self) {
        self.operations_total.store(0, Ordering::Relaxed);
        self.permission_denied_total.store(0, Ordering::Relaxed);
        self.collaborator_calls_total.store(0, Ordering::Relaxed);
        self.collaborator_failures_total.store(0, Ordering::Relaxed);
        self.collaborator_duration_total_ms.store(0, Ordering::Relaxed);
        self.navigation_requests_total.store(0, Ordering::Relaxed);
        self.numbers_blocked_total.store(0, Ordering::Relaxed);
        self.numbers_unblocked_total.store(0, Ordering::Relaxed);
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            operations_total: self.operations_total(),
            permission_denied_total: self.permission_denied_total(),
            collaborator_calls_total: self.collaborator_calls_total(),
            collaborator_failures_total: self.collaborator_failures_total(),
            collaborator_duration_avg_ms: self.collaborator_duration_avg_ms(),
            navigation_requests_total: self.navigation_requests_total(),
            numbers_blocked_total: self.numbers_blocked_total(),
            numbers_unblocked_total: self.numbers_unblocked_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone)]
pub struct MetricsSummary {
    pub operations_total: u64,
    pub permission_denied_total: u64,
    pub collaborator_calls_total: u64,
    pub collaborator_failures_total: u64,
    pub collaborator_duration_avg_ms: f64,
    pub navigation_requests_total: u64,
    pub numbers_blocked_total: u64,
    pub numbers_unblocked_total: u64,
}

/// Helper for timing collaborator calls.
pub struct OperationTimer {
    start: Instant,
    metrics: Metrics,
}

impl OperationTimer {
    /// Start timing a collaborator call.
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Complete the timing and record the duration.
    pub fn complete(self) {
        self.metrics.record_collaborator_call(self.start.elapsed());
    }

    /// Complete the timing and record as a failure.
    pub fn complete_with_error(self) {
        self.metrics.record_collaborator_call(self.start.elapsed());
        self.metrics.record_collaborator_failure();
    }
}
