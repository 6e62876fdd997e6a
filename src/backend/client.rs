use crate::backend::EndpointError;
use reqwest::{Client, StatusCode};
use thiserror::Error;

pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub fn new_client() -> Result<Client, BackendError> {
    let client = Client::builder().user_agent(USER_AGENT).build()?;
    Ok(client)
}

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("unexpected status code {0}")]
    UnexpectedStatus(StatusCode),
    #[error("malformed response body: {0}")]
    MalformedBody(#[from] serde_json::Error),
    #[error(transparent)]
    Endpoint(#[from] EndpointError),
}
