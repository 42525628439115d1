//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The gateway depends on these traits, not concrete implementations.

mod transport;

pub use transport::{AcquirerTransport, RawResponse};
