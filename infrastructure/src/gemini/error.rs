//! Mapping of HTTP and transport failures onto [`GatewayError`]

use super::protocol::ErrorResponse;
use handoff_application::ports::llm_gateway::GatewayError;

/// Map a non-2xx status and its body.
///
/// The service's own error message is used when the body parses as the
/// standard `{"error": {...}}` envelope; otherwise the raw body is kept.
pub fn from_status(status: u16, body: &str) -> GatewayError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.trim().to_string());

    match status {
        400 => GatewayError::InvalidRequest(message),
        401 | 403 => GatewayError::Authentication(message),
        429 => GatewayError::RateLimited(message),
        500..=599 => GatewayError::ServerError { status, message },
        _ => GatewayError::RequestFailed(format!("HTTP {}: {}", status, message)),
    }
}

/// Map a `reqwest` failure that happened before a status was received.
///
/// The URL is stripped from the message.
pub fn from_transport(err: reqwest::Error) -> GatewayError {
    let err = err.without_url();
    if err.is_timeout() {
        GatewayError::Timeout
    } else if err.is_connect() {
        GatewayError::ConnectionError(err.to_string())
    } else {
        GatewayError::RequestFailed(err.to_string())
    }
}
