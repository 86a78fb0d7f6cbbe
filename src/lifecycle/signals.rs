//! OS signal handling.

use crate::lifecycle::shutdown::Shutdown;

/// Wait for Ctrl-C, then trigger shutdown.
///
/// Intended to run as its own task for the life of the process.
pub async fn shutdown_on_interrupt(shutdown: Shutdown) {
    match tokio::signal::ctrl_c().await {
        Ok(()) => {
            tracing::info!("Interrupt received, shutting down");
            shutdown.trigger();
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to listen for interrupt signal");
        }
    }
}
