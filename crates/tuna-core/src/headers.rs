//! Header Policy
//!
//! The fixed header set applied to every outbound gateway call.

use std::fmt;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use reqwest::RequestBuilder;

use crate::error::{GatewayError, Result};

/// Header carrying the application token
pub const APP_TOKEN_HEADER: &str = "x-tuna-apptoken";

const JSON_CONTENT_TYPE: &str = "application/json";

/// Content type, user agent and app token headers
///
/// Values are validated once at construction so that applying the policy
/// cannot fail.
#[derive(Clone)]
pub struct HeaderPolicy {
    headers: HeaderMap,
}

impl HeaderPolicy {
    /// Build the policy from a user agent and an application token
    pub fn new(user_agent: &str, app_token: &str) -> Result<Self> {
        let user_agent = HeaderValue::from_str(user_agent)
            .map_err(|e| GatewayError::Config(format!("invalid user agent: {e}")))?;
        let mut app_token = HeaderValue::from_str(app_token)
            .map_err(|e| GatewayError::Config(format!("invalid app token: {e}")))?;
        app_token.set_sensitive(true);

        let mut headers = HeaderMap::with_capacity(3);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        headers.insert(USER_AGENT, user_agent);
        headers.insert(HeaderName::from_static(APP_TOKEN_HEADER), app_token);

        Ok(Self { headers })
    }

    /// Set the fixed headers on an outbound request, replacing any previous values
    pub fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        request.headers(self.headers.clone())
    }

    /// The header set this policy applies
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

impl fmt::Debug for HeaderPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // HeaderValue's Debug already prints "Sensitive" for the token
        f.debug_struct("HeaderPolicy").field("headers", &self.headers).finish()
    }
}
