//! HTTP latency pinger.
//!
//! Probes one URL on a fixed interval and writes latency percentiles to
//! Carbon on a second, independent interval.
//!
//! # Architecture Overview
//!
//! ```text
//!   ┌──────────────┐  probe tick   ┌────────────┐  Observation   ┌──────────────┐
//!   │ probe timer  │──────────────▶│ probe_loop │───(cap 1)─────▶│  Aggregator  │
//!   └──────────────┘               │  + Prober  │                │ SampleBuffer │
//!                                  └────────────┘                └──────┬───────┘
//!   ┌──────────────┐  flush tick                                        │
//!   │ flush timer  │───────────────────────────────────────────────────▶│
//!   └──────────────┘                                                    ▼
//!                                                    stats::Summary → CarbonSink
//! ```

use clap::Parser;

use http_pinger::agent;
use http_pinger::config::Cli;
use http_pinger::lifecycle::{signals, Shutdown};
use http_pinger::observability::logging;
use http_pinger::probe::HttpProber;
use http_pinger::sink::{CarbonSink, MetricNamer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Cli::parse().into_config()?;

    logging::init(&config.observability);

    let namer = MetricNamer::new(&config.carbon.namespace);
    tracing::info!(
        url = %config.probe.url,
        probe_interval_ms = config.probe.interval_ms,
        timeout_ms = config.probe.timeout_ms,
        carbon = %config.carbon.address(),
        flush_interval_ms = config.carbon.interval_ms,
        namespace = %namer.namespace(),
        "Configuration loaded"
    );

    let prober = HttpProber::new(&config.probe)?;
    let sink = CarbonSink::connect(config.carbon.address(), config.carbon.timeout()).await?;

    let shutdown = Shutdown::new();
    let handle = agent::spawn(&config, prober, sink, &shutdown);

    signals::shutdown_on_signal(&shutdown).await?;
    let sink = handle.join().await?;

    tracing::info!(carbon = %sink.addr(), connected = sink.is_connected(), "Shutdown complete");
    Ok(())
}
