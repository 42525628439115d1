//! Caller-supplied parameters, one struct per operation.

use fac_types::{Card, TransactionCode};

/// Parameters for authorize and purchase.
#[derive(Debug, Clone, Default)]
pub struct CardTransactionParams {
    /// Major-unit decimal string, e.g. `"10.00"`
    pub amount: String,
    /// Alphabetic ISO 4217 code
    pub currency: String,
    /// Merchant order number
    pub transaction_id: String,
    pub card: Card,
    /// Ask the acquirer to tokenize the card
    pub create_card: bool,
    pub transaction_code: Option<TransactionCode>,
    pub client_ip: Option<String>,
    pub customer_reference: Option<String>,
}

impl CardTransactionParams {
    pub fn new(
        amount: impl Into<String>,
        currency: impl Into<String>,
        transaction_id: impl Into<String>,
        card: Card,
    ) -> Self {
        Self {
            amount: amount.into(),
            currency: currency.into(),
            transaction_id: transaction_id.into(),
            card,
            ..Default::default()
        }
    }

    pub fn with_create_card(mut self, create_card: bool) -> Self {
        self.create_card = create_card;
        self
    }

    pub fn with_transaction_code(mut self, code: TransactionCode) -> Self {
        self.transaction_code = Some(code);
        self
    }
}

/// Parameters for capture, void and refund.
#[derive(Debug, Clone, Default)]
pub struct ModificationParams {
    pub amount: String,
    pub currency: String,
    /// Order number of the original transaction
    pub transaction_id: Option<String>,
}

impl ModificationParams {
    pub fn new(
        amount: impl Into<String>,
        currency: impl Into<String>,
        transaction_id: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            currency: currency.into(),
            transaction_id: Some(transaction_id.into()),
        }
    }
}

/// Parameters for setting up a hosted page session.
#[derive(Debug, Clone, Default)]
pub struct HostedPageParams {
    pub amount: String,
    pub currency: String,
    pub transaction_id: String,
    /// Where the acquirer sends the card holder afterwards
    pub card_holder_response_url: String,
    pub create_card: bool,
    pub transaction_code: Option<TransactionCode>,
    pub client_ip: Option<String>,
    pub customer_reference: Option<String>,
}

impl HostedPageParams {
    pub fn new(
        amount: impl Into<String>,
        currency: impl Into<String>,
        transaction_id: impl Into<String>,
        card_holder_response_url: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            currency: currency.into(),
            transaction_id: transaction_id.into(),
            card_holder_response_url: card_holder_response_url.into(),
            ..Default::default()
        }
    }

    pub fn with_transaction_code(mut self, code: TransactionCode) -> Self {
        self.transaction_code = Some(code);
        self
    }
}

/// Parameters for retrieving a finished hosted page session.
#[derive(Debug, Clone, Default)]
pub struct HostedPageResultParams {
    pub token: String,
}

impl HostedPageResultParams {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TransactionStatusParams {
    pub transaction_id: String,
}

impl TransactionStatusParams {
    pub fn new(transaction_id: impl Into<String>) -> Self {
        Self {
            transaction_id: transaction_id.into(),
        }
    }
}
