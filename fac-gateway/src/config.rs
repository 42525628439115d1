//! Gateway configuration.

use std::env;
use std::fmt;

use serde::Deserialize;

use fac_types::RequestError;

pub const LIVE_ENDPOINT: &str = "https://marlin.firstatlanticcommerce.com/PGServiceXML/";
pub const TEST_ENDPOINT: &str = "https://ecm.firstatlanticcommerce.com/PGServiceXML/";
pub const LIVE_PAGES: &str = "https://marlin.firstatlanticcommerce.com/MerchantPages/";
pub const TEST_PAGES: &str = "https://ecm.firstatlanticcommerce.com/MerchantPages/";

/// Merchant configuration, set once and read by every builder.
#[derive(Clone, Default, Deserialize)]
pub struct GatewayConfig {
    pub merchant_id: Option<String>,
    pub merchant_password: Option<String>,
    pub acquirer_id: Option<String>,
    #[serde(default)]
    pub test_mode: bool,
    /// Hosted page set and page name configured in the merchant portal
    pub page_set: Option<String>,
    pub page_name: Option<String>,
    /// Replaces the acquirer's base URL (sandbox proxies, local stubs)
    pub endpoint_override: Option<String>,
}

impl GatewayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from `FAC_*` environment variables.
    ///
    /// Absent credentials are left unset; `Gateway::new` reports them.
    pub fn from_env() -> Self {
        let var = |name: &str| env::var(name).ok().filter(|v| !v.trim().is_empty());
        Self {
            merchant_id: var("FAC_MERCHANT_ID"),
            merchant_password: var("FAC_MERCHANT_PASSWORD"),
            acquirer_id: var("FAC_ACQUIRER_ID"),
            test_mode: var("FAC_TEST_MODE")
                .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
            page_set: var("FAC_PAGE_SET"),
            page_name: var("FAC_PAGE_NAME"),
            endpoint_override: var("FAC_ENDPOINT"),
        }
    }

    pub fn with_merchant_id(mut self, merchant_id: impl ToString) -> Self {
        self.merchant_id = Some(merchant_id.to_string());
        self
    }

    pub fn with_merchant_password(mut self, password: impl Into<String>) -> Self {
        self.merchant_password = Some(password.into());
        self
    }

    pub fn with_acquirer_id(mut self, acquirer_id: impl ToString) -> Self {
        self.acquirer_id = Some(acquirer_id.to_string());
        self
    }

    pub fn with_test_mode(mut self, test_mode: bool) -> Self {
        self.test_mode = test_mode;
        self
    }

    pub fn with_hosted_page(mut self, page_set: impl Into<String>, page_name: impl Into<String>) -> Self {
        self.page_set = Some(page_set.into());
        self.page_name = Some(page_name.into());
        self
    }

    pub fn with_endpoint_override(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint_override = Some(endpoint.into());
        self
    }

    /// Checks that all merchant credentials are present.
    pub fn credentials(&self) -> Result<Credentials, RequestError> {
        fn required(value: &Option<String>, name: &'static str) -> Result<String, RequestError> {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(String::from)
                .ok_or(RequestError::MissingCredentials(name))
        }

        Ok(Credentials {
            merchant_id: required(&self.merchant_id, "merchantId")?,
            password: required(&self.merchant_password, "merchantPassword")?,
            acquirer_id: required(&self.acquirer_id, "acquirerId")?,
        })
    }

    /// Base URL for service calls, ending in `/`.
    pub fn endpoint(&self) -> String {
        match &self.endpoint_override {
            Some(url) => format!("{}/", url.trim_end_matches('/')),
            None if self.test_mode => TEST_ENDPOINT.to_string(),
            None => LIVE_ENDPOINT.to_string(),
        }
    }

    pub fn pages_endpoint(&self) -> &'static str {
        if self.test_mode { TEST_PAGES } else { LIVE_PAGES }
    }
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("merchant_id", &self.merchant_id)
            .field("merchant_password", &self.merchant_password.as_ref().map(|_| "***"))
            .field("acquirer_id", &self.acquirer_id)
            .field("test_mode", &self.test_mode)
            .field("page_set", &self.page_set)
            .field("page_name", &self.page_name)
            .field("endpoint_override", &self.endpoint_override)
            .finish()
    }
}

/// Validated merchant credentials passed to every builder.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub merchant_id: String,
    pub password: String,
    pub acquirer_id: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("merchant_id", &self.merchant_id)
            .field("acquirer_id", &self.acquirer_id)
            .finish_non_exhaustive()
    }
}
