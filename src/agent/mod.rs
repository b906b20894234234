//! Coordination of the probe and flush loops.
//!
//! # Data Flow
//! ```text
//!  probe timer ──▶ probe_loop ──(mpsc, capacity 1)──▶ Aggregator ◀── flush timer
//!                      ▲                                   │
//!                      └────────── Shutdown ───────────────┤
//!                                                          ▼
//!                                                    MetricsSink
//! ```
//!
//! # States
//! ```text
//! Running → Draining: shutdown observed (or probe loop gone)
//! Draining → Stopped: queued observations recorded, final flush attempted
//! ```

pub mod probe_loop;

use tokio::sync::{mpsc, watch};
use tokio::task::{JoinError, JoinHandle};

use crate::aggregator::Aggregator;
use crate::config::PingerConfig;
use crate::lifecycle::Shutdown;
use crate::probe::Probe;
use crate::sink::MetricsSink;

/// Depth of the probe → aggregator handoff.
pub const HANDOFF_CAPACITY: usize = 1;

/// Lifecycle of a running agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentState {
    Running,
    Draining,
    Stopped,
}

/// Handle to the two spawned loops.
pub struct AgentHandle<S> {
    state: watch::Receiver<AgentState>,
    probe_task: JoinHandle<()>,
    aggregator_task: JoinHandle<S>,
}

/// Spawn the probe loop and the aggregator loop.
///
/// Both loops subscribe to `shutdown`; triggering it drains and stops them.
pub fn spawn<P, S>(config: &PingerConfig, prober: P, sink: S, shutdown: &Shutdown) -> AgentHandle<S>
where
    P: Probe + 'static,
    S: MetricsSink + 'static,
{
    let (state_tx, state_rx) = watch::channel(AgentState::Running);
    let (obs_tx, obs_rx) = mpsc::channel(HANDOFF_CAPACITY);

    let aggregator = Aggregator::new(&config.carbon, sink);
    let aggregator_task = tokio::spawn(aggregator.run(obs_rx, shutdown.subscribe(), state_tx));

    let probe_task = tokio::spawn(probe_loop::run(
        prober,
        config.probe.interval(),
        obs_tx,
        shutdown.subscribe(),
    ));

    tracing::info!(url = %config.probe.url, "Starting");

    AgentHandle {
        state: state_rx,
        probe_task,
        aggregator_task,
    }
}

impl<S> AgentHandle<S> {
    pub fn state(&self) -> AgentState {
        *self.state.borrow()
    }

    /// Subscribe to state transitions.
    pub fn watch_state(&self) -> watch::Receiver<AgentState> {
        self.state.clone()
    }

    /// Wait for both loops to finish and return the sink.
    pub async fn join(self) -> Result<S, JoinError> {
        self.probe_task.await?;
        self.aggregator_task.await
    }
}
