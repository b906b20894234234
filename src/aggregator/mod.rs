//! Aggregation subsystem.
//!
//! # Data Flow
//! ```text
//! Observation (from probe loop, capacity-1 channel)
//!     → buffer.rs (append, bump counters)
//!
//! Flush timer tick
//!     → buffer.rs (summarize, clear)
//!     → stats (order statistics)
//!     → sink (one batch, fire-and-forget)
//! ```
//!
//! # Design Decisions
//! - Single owner: `record` and `flush_and_reset` run on the same task, so the
//!   buffer needs no lock and a flush sees exactly the records before it
//! - The buffer is reset whether or not the sink accepts the batch
//! - On shutdown every queued observation is recorded, then one final flush

pub mod buffer;

use std::time::{Duration, SystemTime};

use tokio::sync::{mpsc, watch};
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::agent::AgentState;
use crate::config::CarbonConfig;
use crate::lifecycle::ShutdownListener;
use crate::probe::Observation;
use crate::sink::{MetricNamer, MetricsSink};
use crate::stats::Summary;

pub use buffer::SampleBuffer;

/// Owns the sample buffer and the sink.
pub struct Aggregator<S> {
    buffer: SampleBuffer,
    namer: MetricNamer,
    flush_interval: Duration,
    sink: S,
}

impl<S: MetricsSink> Aggregator<S> {
    pub fn new(config: &CarbonConfig, sink: S) -> Self {
        Self {
            buffer: SampleBuffer::new(),
            namer: MetricNamer::new(&config.namespace),
            flush_interval: config.interval(),
            sink,
        }
    }

    pub fn buffer(&self) -> &SampleBuffer {
        &self.buffer
    }

    pub fn record(&mut self, observation: Observation) {
        self.buffer.record(observation);
    }

    /// Summarize and clear the buffer.
    pub fn flush_and_reset(&mut self) -> Option<Summary> {
        let summary = self.buffer.flush_and_reset(SystemTime::now());
        if summary.is_none() {
            tracing::info!("No sample to send to Carbon");
        }
        summary
    }

    /// Flush and submit. Sink failures are logged and the data is dropped.
    pub async fn flush(&mut self) {
        let Some(summary) = self.flush_and_reset() else {
            return;
        };

        tracing::info!(count = summary.count, "Summarizing samples and sending to Carbon");
        let batch = summary.to_metrics(&self.namer);

        match self.sink.submit(&batch).await {
            Ok(()) => tracing::debug!(
                count = summary.count,
                median_ms = summary.median.as_millis() as u64,
                timeouts = summary.timeouts,
                errors = summary.errors,
                "Summary submitted"
            ),
            Err(e) => tracing::warn!(error = %e, count = summary.count, "Could not write to Carbon; dropping interval"),
        }
    }

    /// Consume observations and flush on the flush cadence until shutdown.
    ///
    /// Returns the sink once both loops have stopped.
    pub async fn run(
        mut self,
        mut observations: mpsc::Receiver<Observation>,
        mut shutdown: ShutdownListener,
        state: watch::Sender<AgentState>,
    ) -> S {
        tracing::info!(interval = ?self.flush_interval, namespace = %self.namer.namespace(), "Aggregator starting");

        let mut ticker = time::interval_at(Instant::now() + self.flush_interval, self.flush_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.flush().await;
                }
                received = observations.recv() => match received {
                    Some(observation) => self.record(observation),
                    None => {
                        tracing::info!("Probe loop closed its channel");
                        break;
                    }
                },
                _ = shutdown.recv() => {
                    tracing::info!("Stopping Carbon submission");
                    break;
                }
            }
        }

        state.send_replace(AgentState::Draining);

        // Ends once the probe loop has finished its in-flight probe and dropped its sender.
        while let Some(observation) = observations.recv().await {
            self.record(observation);
        }
        self.flush().await;

        state.send_replace(AgentState::Stopped);
        tracing::info!("Aggregator stopped");
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{Metric, SinkError};
    use async_trait::async_trait;

    #[derive(Default)]
    struct FailingSink {
        attempts: usize,
    }

    #[async_trait]
    impl MetricsSink for FailingSink {
        async fn submit(&mut self, _batch: &[Metric]) -> Result<(), SinkError> {
            self.attempts += 1;
            Err(SinkError::Write {
                addr: "test".into(),
                source: std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone"),
            })
        }
    }

    fn config() -> CarbonConfig {
        CarbonConfig {
            namespace: "test".into(),
            ..CarbonConfig::default()
        }
    }

    #[tokio::test]
    async fn failed_submit_still_resets_buffer() {
        let mut aggregator = Aggregator::new(&config(), FailingSink::default());
        aggregator.record(Observation::success(Duration::from_millis(4)));
        aggregator.record(Observation::error(Duration::from_millis(9)));

        aggregator.flush().await;

        assert_eq!(aggregator.sink.attempts, 1);
        assert!(aggregator.buffer().is_empty());
        assert_eq!(aggregator.buffer().errors(), 0);
    }

    #[tokio::test]
    async fn empty_flush_does_not_touch_sink() {
        let mut aggregator = Aggregator::new(&config(), FailingSink::default());
        aggregator.flush().await;
        assert_eq!(aggregator.sink.attempts, 0);
    }

    #[test]
    fn record_then_flush_counts_records() {
        let mut aggregator = Aggregator::new(&config(), FailingSink::default());
        for _ in 0..5 {
            aggregator.record(Observation::success(Duration::from_millis(1)));
        }
        aggregator.record(Observation::timeout(Duration::from_secs(30)));

        let summary = aggregator.flush_and_reset().unwrap();
        assert_eq!(summary.count, 6);
        assert_eq!(summary.timeouts, 1);
        assert_eq!(summary.errors, 0);
        assert!(aggregator.flush_and_reset().is_none());
    }
}
