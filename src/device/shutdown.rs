use tokio::sync::watch;
use tokio::task;
use tracing::{info, warn};

/// Flips the returned flag to `true` once SIGINT (or SIGTERM on unix) arrives.
pub fn listen_for_shutdown() -> watch::Receiver<bool> {
    let (tx, rx) = watch::channel(false);

    task::spawn(async move {
        wait_for_signal().await;
        // The simulator may already be gone
        let _ = tx.send(true);
    });

    rx
}

async fn wait_for_signal() {
    let interrupt = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("🛑 Received SIGINT"),
            Err(e) => {
                warn!("⚠️ Unable to listen for SIGINT: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                info!("🛑 Received SIGTERM");
            }
            Err(e) => {
                warn!("⚠️ Unable to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = interrupt => {}
        _ = terminate => {}
    }
}
