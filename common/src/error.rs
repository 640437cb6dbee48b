use serde_json::Value;
use thiserror::Error;

use crate::forms::FieldErrors;

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a call against the campaign backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Status { status: u16, body: Option<Value> },
    /// A 2xx response whose body did not match the expected shape.
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("could not encode request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Builds a status error, keeping the body only if it is valid JSON.
    pub fn from_status(status: u16, body: &str) -> Self {
        let body = serde_json::from_str::<Value>(body).ok();
        ApiError::Status { status, body }
    }

    /// Field-keyed validation messages, when the error body is a JSON object.
    pub fn field_errors(&self) -> Option<FieldErrors> {
        match self {
            ApiError::Status {
                body: Some(body), ..
            } => FieldErrors::from_server(body),
            _ => None,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
