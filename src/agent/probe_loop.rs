//! Periodic probe driver.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::lifecycle::ShutdownListener;
use crate::probe::{Observation, Probe};

/// Probe on every tick and hand each observation to the aggregator.
///
/// `observations` has capacity 1: the next probe cannot start until the
/// aggregator has taken the previous result, so at most one probe is ever in
/// flight. Shutdown is checked between probes only.
pub async fn run<P: Probe>(
    prober: P,
    interval: Duration,
    observations: mpsc::Sender<Observation>,
    mut shutdown: ShutdownListener,
) {
    tracing::info!(interval = ?interval, "Probe loop starting");

    let mut ticker = time::interval_at(Instant::now() + interval, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            biased;
            _ = shutdown.recv() => {
                tracing::info!("Stopping test loop");
                break;
            }
            _ = ticker.tick() => {}
        }

        let observation = prober.probe().await;
        if observations.send(observation).await.is_err() {
            tracing::warn!("Aggregator is gone; stopping test loop");
            break;
        }
        if shutdown.is_triggered() {
            tracing::info!("Stopping test loop after in-flight probe");
            break;
        }
    }
}
