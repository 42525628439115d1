//! Request payloads in the acquirer's wire shape.
//!
//! Field names and nesting mirror the acquirer's documented schema exactly.
//! Within each struct, fields are declared in alphabetical element order; the
//! acquirer's XML service rejects elements that arrive out of order.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::domain::{ModificationType, TransactionCode};

/// Merchant password, serialized verbatim but never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn new(password: impl Into<String>) -> Self {
        Self(password.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(***)")
    }
}

impl Serialize for Password {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Shared blocks
// ─────────────────────────────────────────────────────────────────────────────

/// Core transaction block shared by card and hosted-page payloads.
///
/// `Code` is the transaction code representation: an integer
/// [`TransactionCode`] in card payloads, a decimal `String` in the hosted-page
/// payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransactionDetails<Code = TransactionCode> {
    pub acquirer_id: String,
    /// 12-digit zero-padded minor units
    pub amount: String,
    /// 3-digit ISO 4217 numeric code
    pub currency: String,
    pub currency_exponent: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_reference: Option<String>,
    #[serde(rename = "IPAddress", skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    pub merchant_id: String,
    pub order_number: String,
    pub signature: String,
    pub signature_method: String,
    pub transaction_code: Code,
}

#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CardDetails {
    #[serde(rename = "CardCVV2", skip_serializing_if = "Option::is_none")]
    pub card_cvv2: Option<String>,
    /// MMYY
    pub card_expiry_date: String,
    pub card_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
}

impl fmt::Debug for CardDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = self.card_number.len().saturating_sub(4);
        f.debug_struct("CardDetails")
            .field(
                "card_number",
                &format_args!("****{}", self.card_number.get(start..).unwrap_or_default()),
            )
            .field("card_expiry_date", &self.card_expiry_date)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BillingDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_to_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_to_address2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_to_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_to_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_to_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_to_first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_to_last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_to_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_to_telephone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_to_zip_post_code: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Operation payloads
// ─────────────────────────────────────────────────────────────────────────────

/// Card authorization payload, used by both authorize and purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AuthorizePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_details: Option<BillingDetails>,
    pub card_details: CardDetails,
    pub transaction_details: TransactionDetails,
}

/// Flat capture/refund/void payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModificationPayload {
    pub acquirer_id: String,
    pub amount: String,
    pub currency: String,
    pub currency_exponent: u32,
    pub merchant_id: String,
    pub modification_type: ModificationType,
    pub order_number: String,
    pub password: Password,
}

/// Hosted page session setup. The transaction code is a string here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostedPagePreprocessPayload {
    #[serde(rename = "CardHolderResponseURL")]
    pub card_holder_response_url: String,
    #[serde(rename = "TransactionDetails")]
    pub transaction_details: TransactionDetails<String>,
}

/// Hosted page result lookup: the session token, untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostedPageResultsPayload {
    pub string: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransactionStatusPayload {
    pub acquirer_id: String,
    pub merchant_id: String,
    pub order_number: String,
    pub password: Password,
}
