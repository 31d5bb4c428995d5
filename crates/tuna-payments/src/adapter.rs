//! Payment Adapter
//!
//! Higher-level workflows composed from the tokenization and payment
//! surfaces. The adapter is stateless: it caches nothing, and identifiers it
//! returns (such as session IDs) are the caller's to keep.

use std::sync::Arc;

use tuna_core::{Dispatcher, GatewayConfig, GatewayError, Result};

use crate::model::NewSessionRequest;
use crate::payment::{PaymentApi, PaymentClient};
use crate::token::{TokenApi, TokenClient};

/// Both gateway surfaces behind one handle
#[derive(Clone)]
pub struct PaymentAdapter {
    tokens: Arc<dyn TokenApi>,
    payments: Arc<dyn PaymentApi>,
}

impl PaymentAdapter {
    pub fn new(tokens: Arc<dyn TokenApi>, payments: Arc<dyn PaymentApi>) -> Self {
        Self { tokens, payments }
    }

    /// Build both clients over one shared HTTP client
    pub fn from_config(config: &GatewayConfig) -> Result<Self> {
        Ok(Self::from_dispatcher(Dispatcher::from_config(config)?))
    }

    /// Build both clients over an existing dispatcher
    pub fn from_dispatcher(dispatcher: Dispatcher) -> Self {
        Self::new(
            Arc::new(TokenClient::from_dispatcher(dispatcher.clone())),
            Arc::new(PaymentClient::from_dispatcher(dispatcher)),
        )
    }

    pub fn tokens(&self) -> &dyn TokenApi {
        self.tokens.as_ref()
    }

    pub fn payments(&self) -> &dyn PaymentApi {
        self.payments.as_ref()
    }

    /// Open a gateway session for a customer and return its ID
    ///
    /// A 200 answer without a session ID means the gateway refused the
    /// session; that is reported as [`GatewayError::Rejected`] because there
    /// is nothing to return.
    pub async fn new_session(&self, user_id: &str, email: &str) -> Result<String> {
        let response = self
            .tokens
            .new_session(&NewSessionRequest::for_customer(user_id, email))
            .await?;

        match response.session_id {
            Some(session_id) if !session_id.is_empty() => {
                tracing::info!(user_id = %user_id, "Opened gateway session");
                Ok(session_id)
            }
            _ => {
                tracing::warn!(
                    user_id = %user_id,
                    code = response.code,
                    "Gateway did not open a session"
                );
                Err(GatewayError::Rejected {
                    code: response.code,
                    message: response.message.unwrap_or_default(),
                })
            }
        }
    }
}
