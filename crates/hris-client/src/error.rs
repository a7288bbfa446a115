//! Client error types and response helpers

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use hris_core::DomainError;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{message}")]
    Status { status: StatusCode, message: String },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Network(e) => e.status(),
            _ => None,
        }
    }
}

impl From<ClientError> for DomainError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Status { status, .. } if status == StatusCode::UNAUTHORIZED => {
                DomainError::Unauthorized
            }
            ClientError::Status { status, message } => DomainError::Request {
                status: status.as_u16(),
                message,
            },
            ClientError::Network(e) => DomainError::Network(e.to_string()),
            ClientError::Decode(msg) => DomainError::Decode(msg),
            other => DomainError::Internal(other.to_string()),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Turn a non-success response into [`ClientError::Status`].
///
/// The server's `message` (or `error`) field is preferred; `fallback` is used
/// when the body carries neither.
pub async fn ensure_success(response: Response, fallback: &str) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.message.or(b.error))
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| fallback.to_string());

    Err(ClientError::Status { status, message })
}

/// Check the status, then decode the body as JSON.
pub async fn read_json<T: DeserializeOwned>(response: Response, fallback: &str) -> Result<T, ClientError> {
    let response = ensure_success(response, fallback).await?;
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(format!("{}: {}", fallback, e)))
}
