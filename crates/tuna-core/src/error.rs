//! Error Types
//!
//! Every call through the dispatcher ends in exactly one of four failure
//! classes (encode, transport, status, decode). Gateway business outcomes
//! carried inside a 200 body are not errors at this layer.

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for gateway operations
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Gateway client errors
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Invalid configuration (base URL, header values, environment)
    #[error("Configuration error: {0}")]
    Config(String),

    /// The request value could not be serialized; nothing was sent
    #[error("Request encoding failed: {0}")]
    Encode(#[source] serde_json::Error),

    /// Connectivity, TLS, timeout or body read failure
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The exchange completed with a status other than 200 OK
    #[error("Unexpected status code {status}")]
    Status {
        status: StatusCode,
        /// Raw body text, kept for diagnostics only
        body: String,
    },

    /// A 200 body did not match the expected response schema
    #[error("Response decoding failed: {0}")]
    Decode(#[source] serde_json::Error),

    /// A composed workflow could not continue after a gateway-side rejection
    #[error("Gateway rejected request (code {code}): {message}")]
    Rejected { code: i32, message: String },
}

impl GatewayError {
    /// Check if the caller may reasonably retry
    ///
    /// The client itself never retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            GatewayError::Transport(_) => true,
            GatewayError::Status { status, .. } => status.is_server_error(),
            _ => false,
        }
    }

    /// HTTP status observed on the wire, if the exchange got that far
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            GatewayError::Status { status, .. } => Some(*status),
            GatewayError::Transport(e) => e.status(),
            _ => None,
        }
    }

    /// Get user-friendly message
    pub fn user_message(&self) -> &str {
        match self {
            GatewayError::Config(_) => "Payment gateway client is misconfigured.",
            GatewayError::Encode(_) => "The request could not be prepared.",
            GatewayError::Transport(_) => "The payment gateway could not be reached. Please try again.",
            GatewayError::Status { .. } => "The payment gateway refused the request.",
            GatewayError::Decode(_) => "The payment gateway returned an unexpected response.",
            GatewayError::Rejected { .. } => "The payment gateway rejected the request.",
        }
    }
}
