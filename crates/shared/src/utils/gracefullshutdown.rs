use std::io;
use tokio::signal;
use tracing::{error, info};

pub async fn shutdown_signal() {
    let ctrl_c = async { park_on_failure(signal::ctrl_c().await, "Ctrl+C").await };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => park_on_failure(Err(e), "SIGTERM").await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("🛑 Received Ctrl+C, shutting down"),
        _ = terminate => info!("🛑 Received SIGTERM, shutting down"),
    }
}

/// A handler that failed to install never fires.
async fn park_on_failure(result: io::Result<()>, handler: &str) {
    if let Err(e) = result {
        error!("❌ Failed to install {handler} handler: {e}");
        std::future::pending::<()>().await;
    }
}
