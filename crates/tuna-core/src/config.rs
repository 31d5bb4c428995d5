//! Gateway Configuration
//!
//! Base URL, user agent and application token shared by every call. Loaded
//! from the environment or built directly; validated when a dispatcher is
//! constructed, never at call time.

use std::fmt;
use std::time::Duration;

use reqwest::Url;

use crate::error::{GatewayError, Result};

/// Environment variable holding the gateway base URL
pub const ENV_BASE_URL: &str = "TUNA_BASE_URL";
/// Environment variable holding the application token
pub const ENV_APP_TOKEN: &str = "TUNA_APP_TOKEN";
/// Environment variable overriding the user agent
pub const ENV_USER_AGENT: &str = "TUNA_USER_AGENT";
/// Environment variable holding the per-call timeout in seconds
pub const ENV_TIMEOUT_SECS: &str = "TUNA_TIMEOUT_SECS";

/// Default user agent sent with every request
pub fn default_user_agent() -> String {
    format!("tuna-client/{}", env!("CARGO_PKG_VERSION"))
}

/// Gateway client configuration
#[derive(Clone)]
pub struct GatewayConfig {
    /// Absolute base URL; endpoint paths resolve against it
    pub base_url: String,

    /// Value of the `User-Agent` header
    pub user_agent: String,

    /// Application token sent in the `x-tuna-apptoken` header
    pub app_token: String,

    /// Per-call deadline forwarded to the transport
    pub timeout: Option<Duration>,
}

impl GatewayConfig {
    /// Create a configuration with the default user agent and no timeout
    pub fn new(base_url: impl Into<String>, app_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            user_agent: default_user_agent(),
            app_token: app_token.into(),
            timeout: None,
        }
    }

    /// Set the user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the per-call timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_env_with_base_url(None)
    }

    /// Create from environment variables, taking the base URL from the
    /// caller when given
    ///
    /// With an explicit base URL, `TUNA_BASE_URL` is neither read nor required.
    pub fn from_env_with_base_url(base_url: Option<String>) -> Result<Self> {
        Self::from_lookup(base_url, |key| std::env::var(key).ok())
    }

    fn from_lookup(base_url: Option<String>, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let base_url = base_url
            .or_else(|| lookup(ENV_BASE_URL))
            .ok_or_else(|| GatewayError::Config(format!("{ENV_BASE_URL} not set")))?;
        let app_token = lookup(ENV_APP_TOKEN)
            .ok_or_else(|| GatewayError::Config(format!("{ENV_APP_TOKEN} not set")))?;

        let mut config = Self::new(base_url, app_token);

        if let Some(user_agent) = lookup(ENV_USER_AGENT) {
            config.user_agent = user_agent;
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                GatewayError::Config(format!("{ENV_TIMEOUT_SECS} is not a number of seconds: {raw}"))
            })?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Parse and validate the base URL
    ///
    /// The URL must be absolute and able to act as a base for path resolution.
    pub fn parsed_base_url(&self) -> Result<Url> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| GatewayError::Config(format!("invalid base URL {:?}: {e}", self.base_url)))?;

        if url.cannot_be_a_base() {
            return Err(GatewayError::Config(format!(
                "base URL {:?} cannot be used to resolve endpoint paths",
                self.base_url
            )));
        }

        Ok(url)
    }
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("app_token", &"[redacted]")
            .field("timeout", &self.timeout)
            .finish()
    }
}
