//! HTTP latency pinger library.

pub mod agent;
pub mod aggregator;
pub mod config;
pub mod lifecycle;
pub mod observability;
pub mod probe;
pub mod sink;
pub mod stats;

pub use agent::{AgentHandle, AgentState};
pub use config::PingerConfig;
pub use lifecycle::Shutdown;
