//! Workbench API error types

use serde::Serialize;
use thiserror::Error;

/// Failure of a call to the workbench service
#[derive(Debug, Clone, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ApiError {
    #[error("Not found: {resource}")]
    NotFound { resource: String },
    #[error("Request failed with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Network error: {message}")]
    Network { message: String },
    #[error("Invalid response: {message}")]
    Decode { message: String },
}

impl ApiError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode {
                message: e.to_string(),
            }
        } else if let Some(status) = e.status() {
            Self::status(status.as_u16(), e.to_string())
        } else {
            Self::network(e.to_string())
        }
    }
}
