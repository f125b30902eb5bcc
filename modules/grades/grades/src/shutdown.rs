//! OS signal handling for graceful shutdown.

use anyhow::Result;
use tokio::signal;
use tokio_util::sync::CancellationToken;

/// Wait for Ctrl+C or SIGTERM.
///
/// # Errors
///
/// Returns an error if a signal handler cannot be installed.
pub async fn wait_for_shutdown() -> Result<()> {
    tokio::select! {
        result = signal::ctrl_c() => {
            result?;
            tracing::info!("Received Ctrl+C signal");
        }
        result = wait_sigterm() => {
            result?;
            tracing::info!("Received SIGTERM signal");
        }
    }
    Ok(())
}

#[cfg(unix)]
async fn wait_sigterm() -> Result<()> {
    let mut handler = signal::unix::signal(signal::unix::SignalKind::terminate())?;
    handler.recv().await;
    Ok(())
}

#[cfg(not(unix))]
async fn wait_sigterm() -> Result<()> {
    std::future::pending::<Result<()>>().await
}

/// Cancel `token` once a termination signal arrives.
pub fn cancel_on_signal(token: CancellationToken) {
    tokio::spawn(async move {
        if let Err(e) = wait_for_shutdown().await {
            tracing::warn!(error = %e, "signal handler failed, falling back to ctrl_c()");
            if let Err(e) = signal::ctrl_c().await {
                tracing::error!(error = %e, "ctrl_c() failed");
            }
        }
        token.cancel();
    });
}
