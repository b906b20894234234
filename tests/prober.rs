//! Probe classification against live sockets.

use std::time::Duration;

use http_pinger::config::ProbeConfig;
use http_pinger::probe::{HttpProber, Outcome, Probe};

mod common;

fn prober_for(addr: std::net::SocketAddr, timeout_ms: u64) -> HttpProber {
    let config = ProbeConfig {
        url: format!("http://{}/", addr),
        timeout_ms,
        interval_ms: 1_000,
    };
    HttpProber::new(&config).unwrap()
}

#[tokio::test]
async fn test_ok_response_is_success() {
    let addr = common::start_mock_backend(200).await;
    let observation = prober_for(addr, 2_000).probe().await;

    assert_eq!(observation.outcome, Outcome::Success);
    assert!(observation.latency > Duration::ZERO);
}

#[tokio::test]
async fn test_server_error_status_is_still_success() {
    let addr = common::start_mock_backend(503).await;
    let observation = prober_for(addr, 2_000).probe().await;

    assert_eq!(observation.outcome, Outcome::Success);
    assert!(!observation.is_error());
}

#[tokio::test]
async fn test_connection_refused_is_error() {
    let addr = common::closed_port().await;
    let observation = prober_for(addr, 2_000).probe().await;

    assert_eq!(observation.outcome, Outcome::Error);
    assert!(observation.is_error());
    assert!(!observation.is_timeout());
}

#[tokio::test]
async fn test_silent_backend_times_out() {
    let addr = common::start_silent_backend().await;
    let observation = prober_for(addr, 200).probe().await;

    assert_eq!(observation.outcome, Outcome::Timeout);
    assert!(observation.is_timeout());
    assert!(!observation.is_error());
    // Latency reflects the time spent waiting, not zero.
    assert!(observation.latency >= Duration::from_millis(200));
}
