//! Request Dispatcher
//!
//! The single generic routine every gateway operation goes through:
//!
//! ```text
//! request ─▶ encode ─▶ resolve URL ─▶ headers ─▶ send ─▶ status == 200? ─▶ decode ─▶ response
//!              │                                   │            │             │
//!           Encode                             Transport      Status        Decode
//! ```
//!
//! Exactly one HTTP request is issued per call. Nothing is retried or cached.
//! Business outcomes inside a decoded body are returned untouched.

use std::time::{Duration, Instant};

use reqwest::{Client, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::GatewayConfig;
use crate::endpoint::Operation;
use crate::error::{GatewayError, Result};
use crate::headers::HeaderPolicy;

/// Generic call engine shared by all API surfaces
///
/// Immutable after construction and cheap to clone; the underlying reqwest
/// client is reference counted, so clones share one connection pool.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    http: Client,
    base_url: Url,
    headers: HeaderPolicy,
    timeout: Option<Duration>,
}

impl Dispatcher {
    /// Create a dispatcher over an existing HTTP client
    ///
    /// Fails with [`GatewayError::Config`] on a malformed base URL or an
    /// illegal header value.
    pub fn new(http: Client, config: &GatewayConfig) -> Result<Self> {
        let base_url = config.parsed_base_url()?;
        let headers = HeaderPolicy::new(&config.user_agent, &config.app_token)?;

        Ok(Self {
            http,
            base_url,
            headers,
            timeout: config.timeout,
        })
    }

    /// Create a dispatcher with a fresh HTTP client
    pub fn from_config(config: &GatewayConfig) -> Result<Self> {
        let http = Client::builder()
            .build()
            .map_err(|e| GatewayError::Config(format!("failed to create HTTP client: {e}")))?;
        Self::new(http, config)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fully resolved URL of an operation
    pub fn url_for(&self, operation: Operation) -> Result<Url> {
        operation.endpoint().resolve(&self.base_url)
    }

    /// Perform one gateway call
    pub async fn execute<Req, Resp>(&self, operation: Operation, request: &Req) -> Result<Resp>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let body = serde_json::to_vec(request).map_err(GatewayError::Encode)?;

        let endpoint = operation.endpoint();
        let url = self.url_for(operation)?;

        tracing::debug!(
            operation = %operation,
            method = %endpoint.method,
            url = %url,
            bytes = body.len(),
            "Dispatching gateway request"
        );

        let mut builder = self
            .headers
            .apply(self.http.request(endpoint.method.as_method(), url))
            .body(body);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let started = Instant::now();
        let response = builder.send().await.map_err(|e| {
            tracing::warn!(operation = %operation, error = %e, "Gateway transport failure");
            GatewayError::Transport(e)
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            // Opaque diagnostics only; this may be an intermediary's problem document
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                operation = %operation,
                status = status.as_u16(),
                "Gateway returned unexpected status"
            );
            return Err(GatewayError::Status { status, body });
        }

        let bytes = response.bytes().await?;
        let decoded = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::warn!(operation = %operation, error = %e, "Gateway response did not match schema");
            GatewayError::Decode(e)
        })?;

        tracing::debug!(
            operation = %operation,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Gateway request completed"
        );

        Ok(decoded)
    }
}
