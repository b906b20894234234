//! Order statistics over latency samples.
//!
//! # Design Decisions
//! - Nearest-rank selection with round-half-up, never interpolation
//! - Empty input is an error, not a zeroed summary
//! - Sorting happens once per flush, on the aggregator's own buffer

pub mod percentile;
pub mod summary;

pub use percentile::{percentile, StatsError};
pub use summary::Summary;
