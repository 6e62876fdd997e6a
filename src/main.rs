use crate::app_config::AppConfig;
use crate::device::{LogTransmitter, Simulator, listen_for_shutdown};
use tracing::info;

mod app_config;
mod backend;
mod device;
mod domain;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!(
        device_id = config.device().id(),
        backend_url = config.backend().url(),
        "✅  Loaded configuration, polling every {:?}",
        config.device().poll_interval()
    );

    let client = backend::new_client()?;
    let simulator = Simulator::new(client, &config, LogTransmitter)?;
    let shutdown = listen_for_shutdown();

    info!("🔥 {} is up and running", env!("CARGO_PKG_NAME"));
    simulator.run(shutdown).await;

    info!("👋 {} stopped", env!("CARGO_PKG_NAME"));
    Ok(())
}
