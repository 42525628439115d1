//! # FAC Gateway
//!
//! Request construction and gateway facade for the First Atlantic Commerce
//! acquirer.
//!
//! ## Architecture
//!
//! - `builders/` - Pure payload builders, one per operation
//! - `gateway` - Facade that validates credentials and returns typed requests
//! - `codec` - XML encoding/decoding of the acquirer's wire format
//!
//! Sending is generic over `T: AcquirerTransport`, so any HTTP client (or a
//! test double) can carry the encoded request.

pub mod builders;
pub mod codec;
pub mod config;
pub mod gateway;
pub mod params;
pub mod requests;
pub mod signature;

mod gateway_tests;

pub use config::{Credentials, GatewayConfig};
pub use gateway::Gateway;
pub use params::*;
pub use requests::*;
