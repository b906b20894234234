//! Command-line flags.
//!
//! Every flag is optional; a flag that is present overrides the value from the
//! config file (or the built-in default when no file is given).

use std::path::PathBuf;

use clap::Parser;

use crate::config::loader::{read_config, ConfigError};
use crate::config::schema::PingerConfig;
use crate::config::validation::validate_config;

#[derive(Debug, Parser)]
#[command(name = "http-pinger")]
#[command(about = "Probe an HTTP endpoint and ship latency percentiles to Carbon", long_about = None)]
pub struct Cli {
    /// Optional TOML config file; flags take precedence over its values.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// The URL to issue the GET to.
    #[arg(long)]
    pub url: Option<String>,

    /// Carbon host/IP.
    #[arg(long)]
    pub carbon_host: Option<String>,

    /// Carbon port.
    #[arg(long)]
    pub carbon_port: Option<u16>,

    /// HTTP request socket timeout in milliseconds.
    #[arg(long)]
    pub http_timeout_ms: Option<u64>,

    /// HTTP test interval in milliseconds.
    #[arg(long)]
    pub http_interval_ms: Option<u64>,

    /// Interval to write to Carbon in milliseconds.
    #[arg(long)]
    pub carbon_interval_ms: Option<u64>,

    /// Carbon connect and write timeout in milliseconds.
    #[arg(long)]
    pub carbon_timeout_ms: Option<u64>,

    /// Where the Carbon data should be stored in Graphite.
    #[arg(long)]
    pub carbon_namespace: Option<String>,

    /// Default log level when RUST_LOG is unset.
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Build the final, validated configuration.
    pub fn into_config(self) -> Result<PingerConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => read_config(path)?,
            None => PingerConfig::default(),
        };
        self.apply(&mut config);
        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }

    fn apply(self, config: &mut PingerConfig) {
        if let Some(url) = self.url {
            config.probe.url = url;
        }
        if let Some(timeout) = self.http_timeout_ms {
            config.probe.timeout_ms = timeout;
        }
        if let Some(interval) = self.http_interval_ms {
            config.probe.interval_ms = interval;
        }
        if let Some(host) = self.carbon_host {
            config.carbon.host = host;
        }
        if let Some(port) = self.carbon_port {
            config.carbon.port = port;
        }
        if let Some(interval) = self.carbon_interval_ms {
            config.carbon.interval_ms = interval;
        }
        if let Some(timeout) = self.carbon_timeout_ms {
            config.carbon.timeout_ms = timeout;
        }
        if let Some(namespace) = self.carbon_namespace {
            config.carbon.namespace = namespace;
        }
        if let Some(level) = self.log_level {
            config.observability.log_level = level;
        }
    }
}
