//! OS signal handling.
//!
//! # Responsibilities
//! - Register handlers for SIGQUIT, SIGTERM and SIGINT (Ctrl-C)
//! - Translate the first one received into a shutdown trigger
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - Registration failure is a startup error, not a silent no-op

use std::io;

use crate::lifecycle::Shutdown;

/// Wait for the first termination signal.
#[cfg(unix)]
pub async fn wait_for_signal() -> io::Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut quit = signal(SignalKind::quit())?;
    let mut term = signal(SignalKind::terminate())?;
    let mut int = signal(SignalKind::interrupt())?;

    let name = tokio::select! {
        _ = quit.recv() => "SIGQUIT",
        _ = term.recv() => "SIGTERM",
        _ = int.recv() => "SIGINT",
    };
    Ok(name)
}

/// Wait for the first termination signal.
#[cfg(not(unix))]
pub async fn wait_for_signal() -> io::Result<&'static str> {
    tokio::signal::ctrl_c().await?;
    Ok("ctrl-c")
}

/// Trigger `shutdown` once a termination signal arrives.
pub async fn shutdown_on_signal(shutdown: &Shutdown) -> io::Result<()> {
    let name = wait_for_signal().await?;
    tracing::info!(signal = name, "Shutdown signal received");
    shutdown.trigger();
    Ok(())
}
