//! # FAC Types
//!
//! Domain types, wire payloads and port traits for the First Atlantic
//! Commerce adapter. This crate has ZERO I/O dependencies - only data
//! structures, encoding rules, and trait definitions.
//!
//! ## Layout
//!
//! - `domain/` - Money, transaction codes, modification types, cards
//! - `payloads` - Request payloads in the acquirer's wire shape
//! - `responses` - Acquirer replies and the normalized result
//! - `ports/` - Trait definitions that adapters must implement
//! - `error` - Request, transport and gateway error types

pub mod domain;
pub mod error;
pub mod payloads;
pub mod ports;
pub mod responses;

// Re-export commonly used types
pub use domain::{
    AMOUNT_WIDTH, BillingAddress, Card, ModificationType, Money, TransactionCode,
    normalize_amount, resolve_currency_numeric,
};
pub use error::{GatewayError, RequestError, TransportError};
pub use fac_currency::CurrencyCode;
pub use payloads::*;
pub use ports::{AcquirerTransport, RawResponse};
pub use responses::GatewayResponse;
