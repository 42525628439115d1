//! Capture, void and refund payloads.

use fac_types::{ModificationPayload, ModificationType, Money, Password, RequestError};

use crate::config::Credentials;
use crate::params::ModificationParams;

/// Builds a flat modification payload against a prior transaction.
pub fn build(
    credentials: &Credentials,
    params: &ModificationParams,
    modification_type: ModificationType,
) -> Result<ModificationPayload, RequestError> {
    let order_number = params
        .transaction_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or(RequestError::MissingReference)?;
    let money = Money::parse(&params.amount, &params.currency)?;

    Ok(ModificationPayload {
        acquirer_id: credentials.acquirer_id.clone(),
        amount: money.normalized_amount()?,
        currency: money.currency_numeric().to_string(),
        currency_exponent: money.currency_exponent(),
        merchant_id: credentials.merchant_id.clone(),
        modification_type,
        order_number: order_number.to_string(),
        password: Password::new(credentials.password.clone()),
    })
}
