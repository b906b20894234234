//! Per-interval sample buffer.

use std::mem;
use std::time::{Duration, SystemTime};

use crate::probe::Observation;
use crate::stats::Summary;

/// Latencies and failure counters accumulated since the last flush.
///
/// The sample count is the length of `samples`, so it can never disagree with
/// the buffered data.
#[derive(Debug, Default)]
pub struct SampleBuffer {
    samples: Vec<Duration>,
    timeouts: u64,
    errors: u64,
}

impl SampleBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one observation. Each outcome bumps at most one counter.
    pub fn record(&mut self, observation: Observation) {
        if observation.is_timeout() {
            self.timeouts += 1;
        }
        if observation.is_error() {
            self.errors += 1;
        }
        self.samples.push(observation.latency);
    }

    pub fn count(&self) -> u64 {
        self.samples.len() as u64
    }

    pub fn timeouts(&self) -> u64 {
        self.timeouts
    }

    pub fn errors(&self) -> u64 {
        self.errors
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Summarize and clear. Returns `None` when nothing was recorded.
    pub fn flush_and_reset(&mut self, now: SystemTime) -> Option<Summary> {
        if self.samples.is_empty() {
            return None;
        }

        let mut samples = mem::take(&mut self.samples);
        let timeouts = mem::take(&mut self.timeouts);
        let errors = mem::take(&mut self.errors);

        // Non-empty was checked above.
        let summary = Summary::from_samples(&mut samples, timeouts, errors, now).ok();

        // Keep the allocation for the next interval.
        samples.clear();
        self.samples = samples;
        summary
    }
}
