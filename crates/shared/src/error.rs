//! Shared error types and the console's JSON error envelope.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error envelope returned by `/api/v1/*` endpoints on failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_message: Option<String>,
}

/// Attempt to parse an error envelope into a user-facing message.
/// Prefers `detailedMessage`, falls back to `message`.
pub fn try_error_detail(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<ErrorEnvelope>(body).ok()?;
    if let Some(detail) = parsed.detailed_message {
        if !detail.trim().is_empty() {
            return Some(detail);
        }
    }
    if !parsed.message.trim().is_empty() {
        return Some(parsed.message);
    }
    None
}

/// API error type for client-side use
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("Deserialization error: {0}")]
    Deserialize(String),
}

impl ApiError {
    /// The message shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Http { body, .. } => {
                try_error_detail(body).unwrap_or_else(|| self.to_string())
            }
            _ => self.to_string(),
        }
    }
}
