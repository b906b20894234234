//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the pinger.
//! All types derive Serde traits for deserialization from config files.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration for the pinger.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PingerConfig {
    /// What to probe and how often.
    pub probe: ProbeConfig,

    /// Where summaries are written and how often.
    pub carbon: CarbonConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Probe target configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// The URL to issue the GET to.
    pub url: String,

    /// HTTP request timeout in milliseconds.
    pub timeout_ms: u64,

    /// Interval between probes in milliseconds.
    pub interval_ms: u64,
}

impl ProbeConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost/".to_string(),
            timeout_ms: 30_000,
            interval_ms: 10_000,
        }
    }
}

/// Carbon (Graphite plaintext) sink configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CarbonConfig {
    /// Carbon host or IP.
    pub host: String,

    /// Carbon plaintext port.
    pub port: u16,

    /// Interval between flushes in milliseconds.
    pub interval_ms: u64,

    /// Bound on each connect and each batch write, in milliseconds.
    pub timeout_ms: u64,

    /// Dotted prefix for every metric name.
    pub namespace: String,
}

impl CarbonConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// `host:port` as accepted by `TcpStream::connect`.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for CarbonConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 2003,
            interval_ms: 60_000,
            timeout_ms: 5_000,
            namespace: "http-pinger".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
