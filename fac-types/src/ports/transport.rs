//! Transport port.
//!
//! The adapter never performs I/O itself. Anything that can POST a body to a
//! URL and hand back the status and body implements this trait: the reqwest
//! client in production, an in-memory stub in tests.

use crate::error::TransportError;

/// Raw reply from the acquirer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Port trait for the HTTP collaborator.
#[async_trait::async_trait]
pub trait AcquirerTransport: Send + Sync {
    /// Posts an encoded request body and returns the acquirer's reply.
    ///
    /// Non-2xx statuses are returned as `Ok`; only failures to obtain a reply
    /// at all are errors.
    async fn post(
        &self,
        url: &str,
        content_type: &str,
        body: String,
    ) -> Result<RawResponse, TransportError>;
}
