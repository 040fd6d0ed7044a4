//! Shared HTTP response helpers.
//!
//! Centralizes the non-success → [`ApiError::Api`] conversion so the gateway
//! stays focused on building requests.

use serde_json::Value;

use crate::error::{ApiError, FieldErrors};

/// Message used when an error body is not JSON.
pub const UNREADABLE_ERROR_MESSAGE: &str = "An error occurred";

/// Message used when an error body is JSON without a usable `message`.
pub const MISSING_MESSAGE: &str = "Request failed";

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success. Otherwise reads the body and
/// returns [`ApiError::Api`] carrying the server's `message`, the fixed
/// fallbacks above, and any `errors` field map.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status().as_u16();
    let body = resp.bytes().await.unwrap_or_default();
    Err(error_from_body(status, &body))
}

fn error_from_body(status: u16, body: &[u8]) -> ApiError {
    let Ok(value) = serde_json::from_slice::<Value>(body) else {
        return ApiError::Api {
            status,
            message: UNREADABLE_ERROR_MESSAGE.to_string(),
            errors: None,
        };
    };

    let message = value
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map_or_else(|| MISSING_MESSAGE.to_string(), str::to_string);
    let errors = value
        .get("errors")
        .cloned()
        .and_then(|e| serde_json::from_value::<FieldErrors>(e).ok());

    ApiError::Api {
        status,
        message,
        errors,
    }
}
