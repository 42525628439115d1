//! Acquirer replies and the normalized result handed back to callers.

use serde::{Deserialize, Serialize};

/// Response code for an approved card transaction or accepted modification.
pub const APPROVED: &str = "1";
/// Response code for a successfully created hosted page session.
pub const PREPROCESS_OK: &str = "0";

/// Result block carried by authorization and status replies.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreditCardTransactionResults {
    #[serde(default)]
    pub auth_code: Option<String>,
    #[serde(rename = "AVSResult", default)]
    pub avs_result: Option<String>,
    #[serde(rename = "CVV2Result", default)]
    pub cvv2_result: Option<String>,
    #[serde(default)]
    pub original_response_code: Option<String>,
    #[serde(default)]
    pub padded_card_number: Option<String>,
    #[serde(default)]
    pub reason_code: Option<String>,
    #[serde(default)]
    pub reason_code_description: Option<String>,
    #[serde(default)]
    pub reference_number: Option<String>,
    #[serde(default)]
    pub response_code: String,
    #[serde(rename = "TokenizedPAN", default)]
    pub tokenized_pan: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AuthorizeResponse {
    #[serde(default)]
    pub acquirer_id: Option<String>,
    #[serde(default)]
    pub merchant_id: Option<String>,
    #[serde(default)]
    pub order_number: Option<String>,
    #[serde(default)]
    pub signature: Option<String>,
    #[serde(default)]
    pub credit_card_transaction_results: CreditCardTransactionResults,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModificationResponse {
    #[serde(default)]
    pub acquirer_id: Option<String>,
    #[serde(default)]
    pub merchant_id: Option<String>,
    #[serde(default)]
    pub order_number: Option<String>,
    #[serde(default)]
    pub original_response_code: Option<String>,
    #[serde(default)]
    pub reason_code: Option<String>,
    #[serde(default)]
    pub reason_code_description: Option<String>,
    #[serde(default)]
    pub response_code: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HostedPagePreprocessResponse {
    #[serde(default)]
    pub response_code: String,
    #[serde(default)]
    pub response_code_description: Option<String>,
    #[serde(default)]
    pub security_token: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HostedPageResultsResponse {
    #[serde(default)]
    pub auth_response: AuthorizeResponse,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransactionStatusResponse {
    #[serde(default)]
    pub acquirer_id: Option<String>,
    #[serde(default)]
    pub merchant_id: Option<String>,
    #[serde(default)]
    pub order_number: Option<String>,
    #[serde(default)]
    pub credit_card_transaction_results: CreditCardTransactionResults,
}

/// Normalized outcome of any operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GatewayResponse {
    pub approved: bool,
    pub response_code: String,
    pub reason_code: Option<String>,
    pub message: Option<String>,
    /// Acquirer reference number, or the order number when none is given.
    pub reference: Option<String>,
    pub order_number: Option<String>,
    pub auth_code: Option<String>,
    /// Card token issued when one was requested
    pub card_reference: Option<String>,
    /// Security token of a hosted page session
    pub redirect_token: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl From<AuthorizeResponse> for GatewayResponse {
    fn from(resp: AuthorizeResponse) -> Self {
        let results = resp.credit_card_transaction_results;
        let order_number = non_empty(resp.order_number);
        let response_code = results.response_code.trim().to_string();
        Self {
            approved: response_code == APPROVED,
            response_code,
            reason_code: non_empty(results.reason_code),
            message: non_empty(results.reason_code_description),
            reference: non_empty(results.reference_number).or_else(|| order_number.clone()),
            order_number,
            auth_code: non_empty(results.auth_code),
            card_reference: non_empty(results.tokenized_pan),
            redirect_token: None,
        }
    }
}

impl From<ModificationResponse> for GatewayResponse {
    fn from(resp: ModificationResponse) -> Self {
        let order_number = non_empty(resp.order_number);
        let response_code = resp.response_code.trim().to_string();
        Self {
            approved: response_code == APPROVED,
            response_code,
            reason_code: non_empty(resp.reason_code),
            message: non_empty(resp.reason_code_description),
            reference: order_number.clone(),
            order_number,
            ..Default::default()
        }
    }
}

impl From<HostedPagePreprocessResponse> for GatewayResponse {
    fn from(resp: HostedPagePreprocessResponse) -> Self {
        let response_code = resp.response_code.trim().to_string();
        let redirect_token = non_empty(resp.security_token);
        Self {
            approved: response_code == PREPROCESS_OK && redirect_token.is_some(),
            response_code,
            message: non_empty(resp.response_code_description),
            redirect_token,
            ..Default::default()
        }
    }
}

impl From<HostedPageResultsResponse> for GatewayResponse {
    fn from(resp: HostedPageResultsResponse) -> Self {
        resp.auth_response.into()
    }
}

impl From<TransactionStatusResponse> for GatewayResponse {
    fn from(resp: TransactionStatusResponse) -> Self {
        AuthorizeResponse {
            acquirer_id: resp.acquirer_id,
            merchant_id: resp.merchant_id,
            order_number: resp.order_number,
            signature: None,
            credit_card_transaction_results: resp.credit_card_transaction_results,
        }
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results(code: &str) -> CreditCardTransactionResults {
        CreditCardTransactionResults {
            auth_code: Some("123456".into()),
            reason_code: Some("1".into()),
            reason_code_description: Some("Transaction is approved.".into()),
            reference_number: Some("307916543749".into()),
            response_code: code.into(),
            tokenized_pan: Some(" ".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_approved_authorization() {
        let resp = AuthorizeResponse {
            order_number: Some("1234".into()),
            credit_card_transaction_results: results("1"),
            ..Default::default()
        };
        let normalized = GatewayResponse::from(resp);

        assert!(normalized.approved);
        assert_eq!(normalized.reference.as_deref(), Some("307916543749"));
        assert_eq!(normalized.auth_code.as_deref(), Some("123456"));
        assert_eq!(normalized.card_reference, None);
    }

    #[test]
    fn test_declined_authorization() {
        let resp = AuthorizeResponse {
            credit_card_transaction_results: results("2"),
            ..Default::default()
        };
        assert!(!GatewayResponse::from(resp).approved);
    }

    #[test]
    fn test_modification_reference_falls_back_to_order() {
        let resp = ModificationResponse {
            order_number: Some("1234".into()),
            response_code: "1".into(),
            reason_code: Some("1101".into()),
            ..Default::default()
        };
        let normalized = GatewayResponse::from(resp);
        assert!(normalized.approved);
        assert_eq!(normalized.reference.as_deref(), Some("1234"));
    }

    #[test]
    fn test_preprocess_requires_token() {
        let ok = HostedPagePreprocessResponse {
            response_code: "0".into(),
            security_token: Some("_JBfLQJNiEmFBtnF3AfoeQ2".into()),
            ..Default::default()
        };
        let normalized = GatewayResponse::from(ok);
        assert!(normalized.approved);
        assert_eq!(
            normalized.redirect_token.as_deref(),
            Some("_JBfLQJNiEmFBtnF3AfoeQ2")
        );

        let missing = HostedPagePreprocessResponse {
            response_code: "0".into(),
            ..Default::default()
        };
        assert!(!GatewayResponse::from(missing).approved);
    }
}
