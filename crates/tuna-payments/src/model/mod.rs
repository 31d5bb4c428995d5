//! Schema Model
//!
//! Request and response records for every gateway operation.

pub mod loose;
pub mod payment;
pub mod shared;
pub mod token;

pub use loose::LooseValue;
pub use payment::*;
pub use shared::{AdditionalInfo, Address, Customer, DeliveryAddress, Message};
pub use token::*;
