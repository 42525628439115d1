//! # FAC HTTP Transport
//!
//! Posts encoded requests to the acquirer over HTTPS with `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use fac_types::{AcquirerTransport, RawResponse, TransportError};
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;

/// Default time allowed for the acquirer to reply.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// HTTP transport backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    /// Reuses an existing client, e.g. one with custom TLS settings.
    pub fn with_client(http: Client) -> Self {
        Self {
            http,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AcquirerTransport for HttpTransport {
    async fn post(
        &self,
        url: &str,
        content_type: &str,
        body: String,
    ) -> Result<RawResponse, TransportError> {
        let resp = self
            .http
            .post(url)
            .header(CONTENT_TYPE, content_type)
            .timeout(self.timeout)
            .body(body)
            .send()
            .await
            .map_err(map_error)?;

        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(map_error)?;
        tracing::debug!(status, bytes = body.len(), "received acquirer reply");

        Ok(RawResponse { status, body })
    }
}

fn map_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Connection(err.to_string())
    }
}
