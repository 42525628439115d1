//! Typed, not-yet-sent request objects returned by the gateway facade.
//!
//! Each request owns its payload and knows which acquirer operation it targets,
//! which root element wraps it on the wire, and how its reply is shaped.

use serde::Serialize;
use serde::de::DeserializeOwned;

use fac_types::responses::{
    AuthorizeResponse, HostedPagePreprocessResponse, HostedPageResultsResponse,
    ModificationResponse, TransactionStatusResponse,
};
use fac_types::{
    AuthorizePayload, GatewayResponse, HostedPagePreprocessPayload, HostedPageResultsPayload,
    ModificationPayload, TransactionStatusPayload,
};

/// A request ready to be encoded and sent.
pub trait AcquirerRequest: Send + Sync {
    type Payload: Serialize + Send + Sync;
    type Response: DeserializeOwned + Into<GatewayResponse>;

    /// Path appended to the service endpoint.
    const OPERATION: &'static str;
    /// Root element of the encoded body.
    const ROOT: &'static str;

    /// The payload exactly as it will be sent.
    fn data(&self) -> &Self::Payload;
}

macro_rules! define_requests {
    (
        $(
            $(#[$meta:meta])*
            $name:ident($payload:ty) => ($operation:literal, $root:literal, $response:ty)
        ),* $(,)?
    ) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, PartialEq, Eq)]
            pub struct $name {
                data: $payload,
            }

            impl $name {
                pub(crate) fn new(data: $payload) -> Self {
                    Self { data }
                }

                pub fn into_data(self) -> $payload {
                    self.data
                }
            }

            impl AcquirerRequest for $name {
                type Payload = $payload;
                type Response = $response;

                const OPERATION: &'static str = $operation;
                const ROOT: &'static str = $root;

                fn data(&self) -> &Self::Payload {
                    &self.data
                }
            }
        )*
    };
}

define_requests! {
    /// Card authorization without capture.
    AuthorizeRequest(AuthorizePayload) => ("Authorize", "AuthorizeRequest", AuthorizeResponse),
    /// Card sale, optionally tokenizing the card.
    PurchaseRequest(AuthorizePayload) => ("Authorize", "AuthorizeRequest", AuthorizeResponse),
    /// Capture, void or refund of a prior transaction.
    TransactionModificationRequest(ModificationPayload) => (
        "TransactionModification",
        "TransactionModificationRequest",
        ModificationResponse
    ),
    HostedPagePreprocessRequest(HostedPagePreprocessPayload) => (
        "HostedPagePreprocess",
        "HostedPagePreprocessRequest",
        HostedPagePreprocessResponse
    ),
    HostedPageResultsRequest(HostedPageResultsPayload) => (
        "HostedPageResults",
        "HostedPageResultsRequest",
        HostedPageResultsResponse
    ),
    TransactionStatusRequest(TransactionStatusPayload) => (
        "TransactionStatus",
        "TransactionStatusRequest",
        TransactionStatusResponse
    ),
}
