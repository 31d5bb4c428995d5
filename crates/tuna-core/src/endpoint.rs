//! Endpoint Catalog
//!
//! Static mapping from gateway operation to HTTP method and path. Paths are
//! relative references resolved against the configured base URL.
//!
//! Every operation is a POST except token deletion. Query-like operations
//! (status, options, list) still carry their parameters in a JSON body.

use std::fmt;
use std::str::FromStr;

use reqwest::{Method, Url};

use crate::error::{GatewayError, Result};

/// Path prefix of the tokenization API
pub const TOKEN_PREFIX: &str = "/api/Token";
/// Path prefix of the payment API
pub const PAYMENT_PREFIX: &str = "/api/Payment";

/// HTTP methods used by the gateway
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_method(self) -> Method {
        match self {
            HttpMethod::Post => Method::POST,
            HttpMethod::Delete => Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Post => f.write_str("POST"),
            HttpMethod::Delete => f.write_str("DELETE"),
        }
    }
}

/// Method and path of one remote operation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Endpoint {
    pub method: HttpMethod,
    pub path: &'static str,
}

impl Endpoint {
    const fn post(path: &'static str) -> Self {
        Self { method: HttpMethod::Post, path }
    }

    const fn delete(path: &'static str) -> Self {
        Self { method: HttpMethod::Delete, path }
    }

    /// Resolve against a base URL
    ///
    /// The path is absolute, so it replaces whatever path the base carries
    /// while keeping scheme and authority.
    pub fn resolve(&self, base: &Url) -> Result<Url> {
        base.join(self.path)
            .map_err(|e| GatewayError::Config(format!("cannot resolve {} against {base}: {e}", self.path)))
    }
}

/// Gateway operations
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    SessionNew,
    SessionValidate,
    TokenGenerate,
    TokenList,
    TokenDelete,
    CvvBind,
    PaymentInit,
    PaymentCancel,
    PaymentCancelItem,
    PaymentCapture,
    PaymentContinue,
    PaymentStatus,
    PaymentOptions,
    PaymentFunction,
}

impl Operation {
    pub const ALL: [Operation; 14] = [
        Operation::SessionNew,
        Operation::SessionValidate,
        Operation::TokenGenerate,
        Operation::TokenList,
        Operation::TokenDelete,
        Operation::CvvBind,
        Operation::PaymentInit,
        Operation::PaymentCancel,
        Operation::PaymentCancelItem,
        Operation::PaymentCapture,
        Operation::PaymentContinue,
        Operation::PaymentStatus,
        Operation::PaymentOptions,
        Operation::PaymentFunction,
    ];

    /// Endpoint descriptor for this operation
    pub const fn endpoint(self) -> Endpoint {
        match self {
            Operation::SessionNew => Endpoint::post("/api/Token/NewSession"),
            Operation::SessionValidate => Endpoint::post("/api/Token/ValidateSession"),
            Operation::TokenGenerate => Endpoint::post("/api/Token/Generate"),
            Operation::TokenList => Endpoint::post("/api/Token/List"),
            Operation::TokenDelete => Endpoint::delete("/api/Token/Delete"),
            Operation::CvvBind => Endpoint::post("/api/Token/Bind"),
            Operation::PaymentInit => Endpoint::post("/api/Payment/Init"),
            Operation::PaymentCancel => Endpoint::post("/api/Payment/Cancel"),
            Operation::PaymentCancelItem => Endpoint::post("/api/Payment/CancelItem"),
            Operation::PaymentCapture => Endpoint::post("/api/Payment/Capture"),
            Operation::PaymentContinue => Endpoint::post("/api/Payment/Continue"),
            Operation::PaymentStatus => Endpoint::post("/api/Payment/Status"),
            Operation::PaymentOptions => Endpoint::post("/api/Payment/Options"),
            Operation::PaymentFunction => Endpoint::post("/api/Payment/Function"),
        }
    }

    /// Logical operation name
    pub const fn name(self) -> &'static str {
        match self {
            Operation::SessionNew => "session-new",
            Operation::SessionValidate => "session-validate",
            Operation::TokenGenerate => "token-generate",
            Operation::TokenList => "token-list",
            Operation::TokenDelete => "token-delete",
            Operation::CvvBind => "cvv-bind",
            Operation::PaymentInit => "payment-init",
            Operation::PaymentCancel => "payment-cancel",
            Operation::PaymentCancelItem => "payment-cancel-item",
            Operation::PaymentCapture => "payment-capture",
            Operation::PaymentContinue => "payment-continue",
            Operation::PaymentStatus => "payment-status",
            Operation::PaymentOptions => "payment-options",
            Operation::PaymentFunction => "payment-function",
        }
    }

    /// Whether the operation belongs to the tokenization API
    pub fn is_tokenization(self) -> bool {
        self.endpoint().path.starts_with(TOKEN_PREFIX)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_lowercase();
        if name == "token-bind" {
            return Ok(Operation::CvvBind);
        }
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == name)
            .ok_or_else(|| GatewayError::Config(format!("unknown operation: {s}")))
    }
}
