//! Tokenization API Client
//!
//! Session lifecycle, card tokens and CVV binding.

use async_trait::async_trait;
use tuna_core::{Dispatcher, GatewayConfig, Operation, Result};

use crate::model::{
    BindCvvRequest, BindCvvResponse, DeleteCardTokenRequest, DeleteCardTokenResponse,
    GenerateCardTokenRequest, GenerateCardTokenResponse, ListTokensRequest, ListTokensResponse,
    NewSessionRequest, NewSessionResponse, ValidateSessionRequest, ValidateSessionResponse,
};

/// Tokenization API surface
///
/// Implemented by [`TokenClient`]; swap in another implementation to test
/// code built on top of it.
#[async_trait]
pub trait TokenApi: Send + Sync {
    /// Open a session for a customer
    async fn new_session(&self, request: &NewSessionRequest) -> Result<NewSessionResponse>;

    /// Check that a session is still usable
    async fn validate_session(&self, request: &ValidateSessionRequest) -> Result<ValidateSessionResponse>;

    /// Tokenize card data within a session
    async fn generate_card_token(&self, request: &GenerateCardTokenRequest) -> Result<GenerateCardTokenResponse>;

    /// List the cards stored for a session's customer
    async fn list_tokens(&self, request: &ListTokensRequest) -> Result<ListTokensResponse>;

    /// Remove a stored card
    async fn delete_card_token(&self, request: &DeleteCardTokenRequest) -> Result<DeleteCardTokenResponse>;

    /// Attach a CVV to a stored card for the next payment
    async fn bind_cvv(&self, request: &BindCvvRequest) -> Result<BindCvvResponse>;
}

/// HTTP client for the tokenization API
#[derive(Clone, Debug)]
pub struct TokenClient {
    dispatcher: Dispatcher,
}

impl TokenClient {
    /// Create a client over an existing HTTP client
    pub fn new(http: reqwest::Client, config: &GatewayConfig) -> Result<Self> {
        Ok(Self::from_dispatcher(Dispatcher::new(http, config)?))
    }

    pub fn from_dispatcher(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }
}

#[async_trait]
impl TokenApi for TokenClient {
    async fn new_session(&self, request: &NewSessionRequest) -> Result<NewSessionResponse> {
        self.dispatcher.execute(Operation::SessionNew, request).await
    }

    async fn validate_session(&self, request: &ValidateSessionRequest) -> Result<ValidateSessionResponse> {
        self.dispatcher.execute(Operation::SessionValidate, request).await
    }

    async fn generate_card_token(&self, request: &GenerateCardTokenRequest) -> Result<GenerateCardTokenResponse> {
        self.dispatcher.execute(Operation::TokenGenerate, request).await
    }

    async fn list_tokens(&self, request: &ListTokensRequest) -> Result<ListTokensResponse> {
        self.dispatcher.execute(Operation::TokenList, request).await
    }

    async fn delete_card_token(&self, request: &DeleteCardTokenRequest) -> Result<DeleteCardTokenResponse> {
        self.dispatcher.execute(Operation::TokenDelete, request).await
    }

    async fn bind_cvv(&self, request: &BindCvvRequest) -> Result<BindCvvResponse> {
        self.dispatcher.execute(Operation::CvvBind, request).await
    }
}
