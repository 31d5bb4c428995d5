//! Payment API Client
//!
//! Payment initiation and follow-up operations. All calls are POSTs with a
//! JSON body, including the read-only status and options queries.

use async_trait::async_trait;
use tuna_core::{Dispatcher, GatewayConfig, Operation, Result};

use crate::model::{
    CancelItemRequest, CancelItemResponse, CancelRequest, CancelResponse, CaptureRequest,
    CaptureResponse, ContinueRequest, ContinueResponse, FunctionRequest, FunctionResponse,
    InitRequest, InitResponse, OptionsRequest, OptionsResponse, StatusRequest, StatusResponse,
};

/// Payment API surface
#[async_trait]
pub trait PaymentApi: Send + Sync {
    async fn init(&self, request: &InitRequest) -> Result<InitResponse>;

    async fn cancel(&self, request: &CancelRequest) -> Result<CancelResponse>;

    async fn cancel_item(&self, request: &CancelItemRequest) -> Result<CancelItemResponse>;

    async fn capture(&self, request: &CaptureRequest) -> Result<CaptureResponse>;

    /// Resume a payment waiting on an external step
    async fn continue_payment(&self, request: &ContinueRequest) -> Result<ContinueResponse>;

    async fn status(&self, request: &StatusRequest) -> Result<StatusResponse>;

    /// Discover the payment options available to a partner
    async fn options(&self, request: &OptionsRequest) -> Result<OptionsResponse>;

    /// Generic extension call (gift card balance and similar)
    async fn function(&self, request: &FunctionRequest) -> Result<FunctionResponse>;
}

/// HTTP client for the payment API
#[derive(Clone, Debug)]
pub struct PaymentClient {
    dispatcher: Dispatcher,
}

impl PaymentClient {
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
impl PaymentApi for PaymentClient {
    async fn init(&self, request: &InitRequest) -> Result<InitResponse> {
        self.dispatcher.execute(Operation::PaymentInit, request).await
    }

    async fn cancel(&self, request: &CancelRequest) -> Result<CancelResponse> {
        self.dispatcher.execute(Operation::PaymentCancel, request).await
    }

    async fn cancel_item(&self, request: &CancelItemRequest) -> Result<CancelItemResponse> {
        self.dispatcher.execute(Operation::PaymentCancelItem, request).await
    }

    async fn capture(&self, request: &CaptureRequest) -> Result<CaptureResponse> {
        self.dispatcher.execute(Operation::PaymentCapture, request).await
    }

    async fn continue_payment(&self, request: &ContinueRequest) -> Result<ContinueResponse> {
        self.dispatcher.execute(Operation::PaymentContinue, request).await
    }

    async fn status(&self, request: &StatusRequest) -> Result<StatusResponse> {
        self.dispatcher.execute(Operation::PaymentStatus, request).await
    }

    async fn options(&self, request: &OptionsRequest) -> Result<OptionsResponse> {
        self.dispatcher.execute(Operation::PaymentOptions, request).await
    }

    async fn function(&self, request: &FunctionRequest) -> Result<FunctionResponse> {
        self.dispatcher.execute(Operation::PaymentFunction, request).await
    }
}
