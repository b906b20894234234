//! Probing subsystem.
//!
//! # Data Flow
//! ```text
//! Probe timer tick
//!     → http.rs (one timed GET, body drained)
//!     → Observation { latency, outcome }
//!     → aggregator (bounded handoff)
//! ```
//!
//! # Design Decisions
//! - Only transport failures are errors; any HTTP status is a success
//! - Timeouts are classified separately from other errors
//! - Latency is recorded for failures too
//! - No retries: one tick, one observation

pub mod http;

use std::time::Duration;

use async_trait::async_trait;

pub use http::{HttpProber, ProberError};

/// How a probe ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Timeout,
    Error,
}

/// Result of a single probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observation {
    pub latency: Duration,
    pub outcome: Outcome,
}

impl Observation {
    pub fn success(latency: Duration) -> Self {
        Self {
            latency,
            outcome: Outcome::Success,
        }
    }

    pub fn timeout(latency: Duration) -> Self {
        Self {
            latency,
            outcome: Outcome::Timeout,
        }
    }

    pub fn error(latency: Duration) -> Self {
        Self {
            latency,
            outcome: Outcome::Error,
        }
    }

    pub fn is_timeout(&self) -> bool {
        self.outcome == Outcome::Timeout
    }

    /// A transport failure other than a timeout.
    pub fn is_error(&self) -> bool {
        self.outcome == Outcome::Error
    }
}

/// Something that can be probed once per tick.
#[async_trait]
pub trait Probe: Send + Sync {
    async fn probe(&self) -> Observation;
}
