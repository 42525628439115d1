//! Gateway Facade
//!
//! Validates merchant configuration once, then exposes one method per
//! acquirer operation. Each method returns a constructed request that has
//! not been sent; `send` hands it to a transport.

use fac_types::{
    AcquirerTransport, GatewayError, GatewayResponse, ModificationType, RequestError,
};

use crate::builders;
use crate::codec;
use crate::config::{Credentials, GatewayConfig};
use crate::params::{
    CardTransactionParams, HostedPageParams, HostedPageResultParams, ModificationParams,
    TransactionStatusParams,
};
use crate::requests::{
    AcquirerRequest, AuthorizeRequest, HostedPagePreprocessRequest, HostedPageResultsRequest,
    PurchaseRequest, TransactionModificationRequest, TransactionStatusRequest,
};

/// First Atlantic Commerce gateway.
///
/// Holds read-only configuration; safe to share across threads.
#[derive(Debug, Clone)]
pub struct Gateway {
    config: GatewayConfig,
    credentials: Credentials,
}

impl Gateway {
    /// Creates a gateway, failing if any merchant credential is missing.
    pub fn new(config: GatewayConfig) -> Result<Self, RequestError> {
        let credentials = config.credentials()?;
        Ok(Self {
            config,
            credentials,
        })
    }

    pub fn name(&self) -> &'static str {
        "First Atlantic Commerce."
    }

    pub fn short_name(&self) -> &'static str {
        "FAC"
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    pub fn test_mode(&self) -> bool {
        self.config.test_mode
    }

    /// Service base URL for the configured environment.
    pub fn endpoint(&self) -> String {
        self.config.endpoint()
    }

    /// Full URL a request of type `R` is posted to.
    pub fn request_url<R: AcquirerRequest>(&self) -> String {
        format!("{}{}", self.endpoint(), R::OPERATION)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Card Operations
    // ─────────────────────────────────────────────────────────────────────────────

    /// Builds an authorization request.
    #[tracing::instrument(skip(self, params), fields(order = %params.transaction_id))]
    pub fn authorize(&self, params: CardTransactionParams) -> Result<AuthorizeRequest, RequestError> {
        let data = builders::card::authorize(&self.credentials, &params)?;
        tracing::debug!(code = %data.transaction_details.transaction_code, "built authorize request");
        Ok(AuthorizeRequest::new(data))
    }

    /// Builds a purchase request.
    #[tracing::instrument(skip(self, params), fields(order = %params.transaction_id, create_card = params.create_card))]
    pub fn purchase(&self, params: CardTransactionParams) -> Result<PurchaseRequest, RequestError> {
        let data = builders::card::purchase(&self.credentials, &params)?;
        tracing::debug!(code = %data.transaction_details.transaction_code, "built purchase request");
        Ok(PurchaseRequest::new(data))
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Modifications
    // ─────────────────────────────────────────────────────────────────────────────

    pub fn capture(
        &self,
        params: ModificationParams,
    ) -> Result<TransactionModificationRequest, RequestError> {
        self.modify(params, ModificationType::Capture)
    }

    pub fn void(
        &self,
        params: ModificationParams,
    ) -> Result<TransactionModificationRequest, RequestError> {
        self.modify(params, ModificationType::Void)
    }

    pub fn refund(
        &self,
        params: ModificationParams,
    ) -> Result<TransactionModificationRequest, RequestError> {
        self.modify(params, ModificationType::Refund)
    }

    #[tracing::instrument(skip_all, fields(order = ?params.transaction_id, kind = %modification_type))]
    fn modify(
        &self,
        params: ModificationParams,
        modification_type: ModificationType,
    ) -> Result<TransactionModificationRequest, RequestError> {
        let data = builders::modification::build(&self.credentials, &params, modification_type)?;
        Ok(TransactionModificationRequest::new(data))
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Hosted Page
    // ─────────────────────────────────────────────────────────────────────────────

    /// Builds a hosted page preprocess request.
    #[tracing::instrument(skip(self, params), fields(order = %params.transaction_id))]
    pub fn hosted_page(
        &self,
        params: HostedPageParams,
    ) -> Result<HostedPagePreprocessRequest, RequestError> {
        let data = builders::hosted_page::preprocess(&self.credentials, &params)?;
        Ok(HostedPagePreprocessRequest::new(data))
    }

    /// Builds a request for the outcome of a finished hosted page session.
    pub fn hosted_page_result(
        &self,
        params: HostedPageResultParams,
    ) -> Result<HostedPageResultsRequest, RequestError> {
        let data = builders::hosted_page::results(&params)?;
        Ok(HostedPageResultsRequest::new(data))
    }

    /// URL the card holder is redirected to for a preprocessed session.
    pub fn hosted_page_url(&self, security_token: &str) -> Result<String, RequestError> {
        let page_set = self
            .config
            .page_set
            .as_deref()
            .ok_or(RequestError::MissingParameter("pageSet"))?;
        let page_name = self
            .config
            .page_name
            .as_deref()
            .ok_or(RequestError::MissingParameter("pageName"))?;
        if security_token.is_empty() {
            return Err(RequestError::MissingParameter("securityToken"));
        }
        Ok(format!(
            "{}{}/{}/{}",
            self.config.pages_endpoint(),
            page_set,
            page_name,
            security_token
        ))
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Status
    // ─────────────────────────────────────────────────────────────────────────────

    #[tracing::instrument(skip(self, params), fields(order = %params.transaction_id))]
    pub fn transaction_status(
        &self,
        params: TransactionStatusParams,
    ) -> Result<TransactionStatusRequest, RequestError> {
        let data = builders::status::build(&self.credentials, &params)?;
        Ok(TransactionStatusRequest::new(data))
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Sending
    // ─────────────────────────────────────────────────────────────────────────────

    /// Encodes a request, posts it through `transport` and normalizes the reply.
    #[tracing::instrument(skip_all, fields(operation = R::OPERATION))]
    pub async fn send<R, T>(&self, transport: &T, request: &R) -> Result<GatewayResponse, GatewayError>
    where
        R: AcquirerRequest,
        T: AcquirerTransport + ?Sized,
    {
        let body = codec::encode(R::ROOT, request.data())?;
        let url = self.request_url::<R>();
        tracing::debug!(%url, bytes = body.len(), "posting request");

        let raw = transport.post(&url, codec::CONTENT_TYPE, body).await?;
        if !raw.is_success() {
            tracing::warn!(status = raw.status, "acquirer returned an error status");
            return Err(GatewayError::Http {
                status: raw.status,
                body: raw.body,
            });
        }

        let response: R::Response = codec::decode(&raw.body)?;
        let normalized: GatewayResponse = response.into();
        tracing::info!(
            approved = normalized.approved,
            response_code = %normalized.response_code,
            "acquirer replied"
        );
        Ok(normalized)
    }
}
