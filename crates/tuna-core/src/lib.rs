//! # tuna-core
//!
//! Request dispatch and error classification shared by the Tuna tokenization
//! and payment APIs.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         Dispatcher                           │
//! │  ┌──────────────┐  ┌──────────────┐  ┌────────────────────┐  │
//! │  │   Endpoint   │  │    Header    │  │   reqwest Client   │  │
//! │  │   Catalog    │──│    Policy    │──│    (transport)     │  │
//! │  └──────────────┘  └──────────────┘  └────────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! A call ends in a decoded response or one of four classified failures
//! (`Encode`, `Transport`, `Status`, `Decode`). A gateway rejection reported
//! inside a 200 body is *not* a failure here; callers inspect the decoded
//! response themselves.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tuna_core::{Dispatcher, GatewayConfig, Operation};
//!
//! let config = GatewayConfig::new("https://sandbox.tuna-demo.uy", "app-token");
//! let dispatcher = Dispatcher::from_config(&config)?;
//!
//! let response: BindCvvResponse = dispatcher.execute(Operation::CvvBind, &request).await?;
//! ```

pub mod config;
pub mod dispatch;
pub mod endpoint;
pub mod error;
pub mod headers;

pub use config::GatewayConfig;
pub use dispatch::Dispatcher;
pub use endpoint::{Endpoint, HttpMethod, Operation};
pub use error::{GatewayError, Result};
pub use headers::{APP_TOKEN_HEADER, HeaderPolicy};
