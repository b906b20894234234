//! Per-interval latency summary.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::sink::metric::{Metric, MetricNamer};
use crate::stats::percentile::{percentile, StatsError};

/// Snapshot of one flush interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub min: Duration,
    pub p5: Duration,
    pub p25: Duration,
    pub median: Duration,
    pub p75: Duration,
    pub p95: Duration,
    pub max: Duration,
    pub timeouts: u64,
    pub count: u64,
    pub errors: u64,
    pub timestamp: SystemTime,
}

impl Summary {
    /// Sort `samples` in place and derive the order statistics.
    pub fn from_samples(
        samples: &mut [Duration],
        timeouts: u64,
        errors: u64,
        timestamp: SystemTime,
    ) -> Result<Self, StatsError> {
        samples.sort_unstable();
        let samples = &*samples;

        Ok(Self {
            min: percentile(samples, 0)?,
            p5: percentile(samples, 5)?,
            p25: percentile(samples, 25)?,
            median: percentile(samples, 50)?,
            p75: percentile(samples, 75)?,
            p95: percentile(samples, 95)?,
            max: percentile(samples, 100)?,
            timeouts,
            count: samples.len() as u64,
            errors,
            timestamp,
        })
    }

    /// Flush time as whole Unix seconds.
    pub fn unix_timestamp(&self) -> i64 {
        self.timestamp
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0)
    }

    /// Expand into the ten named samples written to the sink.
    pub fn to_metrics(&self, namer: &MetricNamer) -> Vec<Metric> {
        let at = self.unix_timestamp();
        let latency = |suffix: &str, d: Duration| Metric::new(namer.name(suffix), millis(d), at);
        let counter = |suffix: &str, n: u64| Metric::new(namer.name(suffix), n as i64, at);

        vec![
            latency("min", self.min),
            latency("max", self.max),
            latency("median", self.median),
            latency("5p", self.p5),
            latency("25p", self.p25),
            latency("75p", self.p75),
            latency("95p", self.p95),
            counter("timeouts", self.timeouts),
            counter("count", self.count),
            counter("errors", self.errors),
        ]
    }
}

/// Whole milliseconds, truncated.
fn millis(d: Duration) -> i64 {
    d.as_millis() as i64
}
