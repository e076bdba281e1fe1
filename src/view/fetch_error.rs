//! Normalization of failed fetches
//!
//! Every backend failure collapses into one `{ detail, status }` shape.
//! `detail` is chosen by priority:
//! 1. `message` on the error body
//! 2. `detail` on the error body
//! 3. the transport status text, when the body is empty or falsy

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Normalized fetch failure stored in the view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchError {
    pub detail: String,
    pub status: u16,
}

/// HTTP response attached to a rejected fetch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectedResponse {
    /// Response body
    #[serde(default)]
    pub data: Value,
    /// HTTP status code
    pub status: u16,
    /// Transport-level reason phrase
    #[serde(default, rename = "statusText")]
    pub status_text: Option<String>,
}

/// Payload of a rejected fetch
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RejectionPayload {
    /// Missing when the request never produced a response
    #[serde(default)]
    pub response: Option<RejectedResponse>,
    /// Client-side failure message, used only without a response
    #[serde(default)]
    pub message: Option<String>,
    /// Fetch generation this failure answers
    #[serde(default)]
    pub generation: Option<u64>,
}

impl RejectionPayload {
    pub fn from_response(response: RejectedResponse) -> Self {
        Self {
            response: Some(response),
            ..Self::default()
        }
    }
}

impl FetchError {
    /// Status reported when no HTTP response exists
    pub const NO_RESPONSE_STATUS: u16 = 0;

    /// Normalizes a rejection payload
    pub fn from_rejection(payload: &RejectionPayload) -> Self {
        match &payload.response {
            Some(response) => Self::from_response(response),
            None => Self {
                detail: payload
                    .message
                    .clone()
                    .unwrap_or_else(|| "Network error".to_string()),
                status: Self::NO_RESPONSE_STATUS,
            },
        }
    }

    /// Normalizes an HTTP error response
    pub fn from_response(response: &RejectedResponse) -> Self {
        let status_text = || response.status_text.clone().unwrap_or_default();

        let detail = if is_truthy(&response.data) {
            body_field(&response.data, "message")
                .or_else(|| body_field(&response.data, "detail"))
                .unwrap_or_else(status_text)
        } else {
            status_text()
        };

        Self {
            detail,
            status: response.status,
        }
    }
}

fn body_field(body: &Value, key: &str) -> Option<String> {
    body.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Mirrors the falsy values an HTTP client hands back for an empty body
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
