//! Metrics sink subsystem.
//!
//! # Data Flow
//! ```text
//! Summary (one per flush tick with data)
//!     → metric.rs (namespaced Metric batch)
//!     → carbon.rs (plaintext lines over TCP)
//!     → Carbon / Graphite
//! ```
//!
//! # Design Decisions
//! - Only the aggregator task holds the sink; no sharing, no locking
//! - Submission is fire-and-forget: a failed batch is logged and dropped
//! - The initial connection is made at startup and is fatal on failure
//! - Every connect and write is bounded by the sink timeout, so a stalled
//!   Carbon server cannot hold up the flush loop

pub mod carbon;
pub mod metric;

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

pub use carbon::CarbonSink;
pub use metric::{Metric, MetricNamer};

/// Errors raised while talking to a sink.
#[derive(Debug, Error)]
pub enum SinkError {
    /// Could not open a connection to the sink.
    #[error("could not connect to {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The connection broke while writing a batch.
    #[error("write to {addr} failed: {source}")]
    Write {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// Connecting or writing did not finish in time.
    #[error("{op} to {addr} timed out after {after:?}")]
    Timeout {
        op: &'static str,
        addr: String,
        after: Duration,
    },
}

/// Destination for named numeric samples.
#[async_trait]
pub trait MetricsSink: Send {
    /// Submit one batch. All samples share a timestamp.
    async fn submit(&mut self, batch: &[Metric]) -> Result<(), SinkError>;
}
