//! Interrupt handling
//!
//! A background task turns SIGINT/SIGTERM into a cancelled
//! [`CancellationToken`]. The batch checks the token between entries, so the
//! entry in flight when the signal arrives still completes.

use tokio::signal;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, warn};

/// Printed to stderr when an interrupt is received
pub const INTERRUPT_NOTICE: &str = "Received interrupt signal. Finishing the current file, then stopping...";

/// Spawn the signal listener
///
/// The task ends after cancelling `token`, or on its own once the token is
/// cancelled by someone else. Abort the handle when the batch is done.
pub fn install_signal_handler(token: CancellationToken) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::select! {
            _ = wait_for_signal() => {
                eprintln!("\n{}", INTERRUPT_NOTICE);
                warn!("Interrupt received, cancelling batch");
                token.cancel();
            }
            _ = token.cancelled() => {}
        }
    })
}

/// Resolves on the first SIGINT or SIGTERM (Ctrl+C on other platforms)
///
/// A handler that cannot be registered never resolves, so a failed
/// registration does not look like an interrupt.
async fn wait_for_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
