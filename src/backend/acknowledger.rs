use crate::backend::{BackendError, Endpoints};
use reqwest::{Client, StatusCode};
use tracing::{info, instrument};

/// Confirms to the backend that the command with `command_id` has been processed.
#[instrument(skip(client, endpoints))]
pub async fn acknowledge(client: &Client, endpoints: &Endpoints, command_id: &str) -> Result<StatusCode, BackendError> {
    let response = client.post(endpoints.ack(command_id)?).body("").send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(BackendError::UnexpectedStatus(status));
    }

    info!(command_id, status_code = %status, "✅ Command acknowledged");
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use test_log::test;

    #[test(tokio::test)]
    async fn acknowledge_posts_an_empty_body() -> Result<(), Box<dyn std::error::Error>> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/device/ESP32_SIMULATOR/ack/c1")
            .match_body(Matcher::Exact(String::new()))
            .with_status(200)
            .expect(1)
            .create_async()
            .await;

        let endpoints = Endpoints::new(&format!("{}/api", server.url()), "ESP32_SIMULATOR")?;
        let status = acknowledge(&Client::new(), &endpoints, "c1").await?;

        mock.assert_async().await;
        assert_eq!(status, StatusCode::OK);
        Ok(())
    }

    #[tokio::test]
    async fn acknowledge_reports_a_non_success_status() -> Result<(), Box<dyn std::error::Error>> {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/device/ESP32_SIMULATOR/ack/c1")
            .with_status(404)
            .create_async()
            .await;

        let endpoints = Endpoints::new(&format!("{}/api", server.url()), "ESP32_SIMULATOR")?;
        let result = acknowledge(&Client::new(), &endpoints, "c1").await;

        assert!(matches!(result, Err(BackendError::UnexpectedStatus(StatusCode::NOT_FOUND))));
        Ok(())
    }

    #[tokio::test]
    async fn acknowledge_refuses_a_dot_segment_command_id() -> Result<(), Box<dyn std::error::Error>> {
        let mut server = mockito::Server::new_async().await;
        let mock = server.mock("POST", Matcher::Any).expect(0).create_async().await;

        let endpoints = Endpoints::new(&format!("{}/api", server.url()), "ESP32_SIMULATOR")?;
        let result = acknowledge(&Client::new(), &endpoints, "..").await;

        mock.assert_async().await;
        assert!(matches!(result, Err(BackendError::Endpoint(_))));
        Ok(())
    }
}
