//! Request builders.
//!
//! Each builder is a pure function from credentials and operation parameters
//! to a wire payload. Builders never perform I/O and never return a partially
//! filled payload: any validation failure aborts the whole build.

pub mod card;
pub mod hosted_page;
pub mod modification;
pub mod status;

use fac_types::{Money, RequestError, TransactionDetails};

use crate::config::Credentials;
use crate::signature::{self, SIGNATURE_METHOD};

/// Fills the shared transaction block and signs it.
pub(crate) fn transaction_details<Code>(
    credentials: &Credentials,
    money: &Money,
    order_number: &str,
    transaction_code: Code,
    ip_address: Option<String>,
    customer_reference: Option<String>,
) -> Result<TransactionDetails<Code>, RequestError> {
    let amount = money.normalized_amount()?;
    let currency = money.currency_numeric().to_string();
    let signature = signature::sign(credentials, order_number, &amount, &currency);

    Ok(TransactionDetails {
        acquirer_id: credentials.acquirer_id.clone(),
        amount,
        currency,
        currency_exponent: money.currency_exponent(),
        customer_reference,
        ip_address,
        merchant_id: credentials.merchant_id.clone(),
        order_number: order_number.to_string(),
        signature,
        signature_method: SIGNATURE_METHOD.to_string(),
        transaction_code,
    })
}

/// Rejects an empty order number.
pub(crate) fn order_number(transaction_id: &str) -> Result<&str, RequestError> {
    let trimmed = transaction_id.trim();
    if trimmed.is_empty() {
        return Err(RequestError::MissingParameter("transactionId"));
    }
    Ok(trimmed)
}
