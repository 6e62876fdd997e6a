use crate::backend::{BackendError, Endpoints};
use reqwest::{Client, StatusCode};
use tracing::{info, instrument};

/// Announces the device to the backend with a single status ping.
#[instrument(skip_all)]
pub async fn register(client: &Client, endpoints: &Endpoints) -> Result<StatusCode, BackendError> {
    info!("📡 Registering device...");

    let response = client.get(endpoints.status()).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(BackendError::UnexpectedStatus(status));
    }

    info!(status_code = %status, "📡 Registering device... OK");
    Ok(status)
}
