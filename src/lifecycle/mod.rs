//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Parse flags → Load config → Validate → Connect sink → Spawn loops
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Probe loop stops → Aggregator drains → Final flush → Exit
//!
//! Signals (signals.rs):
//!     SIGQUIT/SIGTERM/SIGINT → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - An in-flight probe is never interrupted; it finishes or times out

pub mod shutdown;
pub mod signals;

pub use shutdown::{Shutdown, ShutdownListener};
