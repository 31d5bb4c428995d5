//! # tuna-payments
//!
//! Typed clients for the Tuna tokenization and payment APIs.
//!
//! ## Surfaces
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     PaymentAdapter                       │
//! │    ┌────────────────────┐      ┌────────────────────┐    │
//! │    │  TokenApi          │      │  PaymentApi        │    │
//! │    │  sessions, tokens, │      │  init, capture,    │    │
//! │    │  CVV binding       │      │  cancel, status... │    │
//! │    └─────────┬──────────┘      └─────────┬──────────┘    │
//! └──────────────┼───────────────────────────┼───────────────┘
//!                └──────── Dispatcher ───────┘
//! ```
//!
//! Each client method is one HTTP call. Gateway outcomes (`code`,
//! [`Message`](model::Message)) come back inside the decoded response and
//! are never turned into errors by the clients.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tuna_payments::{GatewayConfig, PaymentAdapter, model::BindCvvRequest};
//!
//! let adapter = PaymentAdapter::from_config(&GatewayConfig::from_env()?)?;
//!
//! let session_id = adapter.new_session("user-42", "ana@example.com").await?;
//! let bound = adapter.tokens().bind_cvv(&BindCvvRequest {
//!     token: card_token,
//!     session_id,
//!     cvv: "123".into(),
//! }).await?;
//!
//! if bound.code < 0 {
//!     // gateway refused; the HTTP exchange itself succeeded
//! }
//! ```

pub mod adapter;
pub mod model;
pub mod payment;
pub mod token;

pub use adapter::PaymentAdapter;
pub use model::{PaymentOutcome, TokenOutcome};
pub use payment::{PaymentApi, PaymentClient};
pub use token::{TokenApi, TokenClient};

// Re-export core types for convenience
pub use tuna_core::{Dispatcher, GatewayConfig, GatewayError, Operation, Result};
