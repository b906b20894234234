//! Timed HTTP GET probe.

use std::time::Instant;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use url::Url;

use crate::config::ProbeConfig;
use crate::probe::{Observation, Probe};

/// Errors building a prober at startup.
#[derive(Debug, Error)]
pub enum ProberError {
    #[error("invalid probe URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("could not build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

pub struct HttpProber {
    client: Client,
    url: Url,
}

impl HttpProber {
    pub fn new(config: &ProbeConfig) -> Result<Self, ProberError> {
        let url = Url::parse(&config.url)?;
        // Direct connection only: latency through a proxy measures the proxy.
        let client = Client::builder()
            .timeout(config.timeout())
            .no_proxy()
            .build()?;

        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    async fn fetch(&self) -> Result<StatusCode, reqwest::Error> {
        let response = self.client.get(self.url.clone()).send().await?;
        let status = response.status();
        // Not interested in the body, but the request is not done until it is read.
        response.bytes().await?;
        Ok(status)
    }
}

#[async_trait]
impl Probe for HttpProber {
    async fn probe(&self) -> Observation {
        tracing::debug!(url = %self.url, "Making test HTTP request");

        let start = Instant::now();
        let result = self.fetch().await;
        let latency = start.elapsed();

        match result {
            Ok(status) => {
                tracing::debug!(url = %self.url, status = %status, latency = ?latency, "Probe completed");
                Observation::success(latency)
            }
            Err(e) if e.is_timeout() => {
                tracing::warn!(url = %self.url, latency = ?latency, "Probe failed: timeout");
                Observation::timeout(latency)
            }
            Err(e) => {
                tracing::warn!(url = %self.url, error = %e, "Probe failed: connection error");
                Observation::error(latency)
            }
        }
    }
}
