//! Error types for the gateway adapter.

/// Request-construction errors (raised before anything is sent).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("Gateway is not configured: missing {0}")]
    MissingCredentials(&'static str),

    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),

    #[error("A transaction reference is required for this operation")]
    MissingReference,

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid card: {0}")]
    InvalidCard(String),

    #[error("Invalid transaction code: {0}")]
    InvalidTransactionCode(u32),
}

impl From<fac_currency::UnknownCurrency> for RequestError {
    fn from(err: fac_currency::UnknownCurrency) -> Self {
        RequestError::UnsupportedCurrency(err.0)
    }
}

/// Transport-level errors (reported by the HTTP collaborator).
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request timed out")]
    Timeout,
}

/// Application-level errors returned from sending a request.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Acquirer returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Failed to encode request: {0}")]
    Encoding(String),

    #[error("Invalid response from acquirer: {0}")]
    InvalidResponse(String),
}

impl GatewayError {
    /// True for failures worth retrying by the caller.
    pub fn is_retryable(&self) -> bool {
        match self {
            GatewayError::Transport(_) => true,
            GatewayError::Http { status, .. } => *status >= 500,
            GatewayError::Request(_)
            | GatewayError::Encoding(_)
            | GatewayError::InvalidResponse(_) => false,
        }
    }
}
