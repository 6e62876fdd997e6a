use crate::backend::{BackendError, Endpoints};
use crate::domain::Command;
use reqwest::{Client, StatusCode};
use tracing::{debug, info, instrument};

/// Asks the backend for the next pending command.
///
/// `200` carries a command, `204` means nothing is waiting. Every other status is an error.
#[instrument(skip_all)]
pub async fn fetch_command(client: &Client, endpoints: &Endpoints) -> Result<Option<Command>, BackendError> {
    let url = endpoints.commands();
    debug!("Polling {}", url);

    let response = client.get(url).send().await?;
    let status = response.status();
    debug!(status_code = %status, "Polling... {}", status);

    match status {
        StatusCode::OK => {
            let body = response.bytes().await?;
            let command: Command = serde_json::from_slice(&body)?;
            info!(command_id = command.id, "📥 Command received");
            debug!(command_id = command.id, "Command received: {:?}", command);
            Ok(Some(command))
        }
        StatusCode::NO_CONTENT => {
            debug!("No commands pending");
            Ok(None)
        }
        _ => Err(BackendError::UnexpectedStatus(status)),
    }
}
