//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! probe loop, aggregator, sink, lifecycle
//!     → tracing events with structured fields
//!     → logging.rs (EnvFilter + fmt layer)
//!     → stdout
//! ```
//!
//! # Design Decisions
//! - Per-probe results at debug, loop lifecycle at info, sink failures at warn
//! - The agent's own health is visible in its logs; the latency data itself
//!   goes to Carbon

pub mod logging;
