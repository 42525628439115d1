//! Card payloads for authorize and purchase.

use fac_types::{
    AuthorizePayload, BillingDetails, Card, CardDetails, Money, RequestError, TransactionCode,
};

use super::{order_number, transaction_details};
use crate::config::Credentials;
use crate::params::CardTransactionParams;

/// Builds an authorization payload. Funds are held, not captured.
pub fn authorize(
    credentials: &Credentials,
    params: &CardTransactionParams,
) -> Result<AuthorizePayload, RequestError> {
    build(credentials, params)
}

/// Builds a purchase payload, tokenizing the card when `create_card` is set.
pub fn purchase(
    credentials: &Credentials,
    params: &CardTransactionParams,
) -> Result<AuthorizePayload, RequestError> {
    build(credentials, params)
}

/// `SINGLE_PASS` unless overridden, plus `REQUEST_TOKEN` when a card token is wanted.
pub fn select_transaction_code(
    requested: Option<TransactionCode>,
    create_card: bool,
) -> TransactionCode {
    let mut code = requested.unwrap_or(TransactionCode::SINGLE_PASS);
    if create_card {
        code |= TransactionCode::REQUEST_TOKEN;
    }
    code
}

fn build(
    credentials: &Credentials,
    params: &CardTransactionParams,
) -> Result<AuthorizePayload, RequestError> {
    let order = order_number(&params.transaction_id)?;
    let money = Money::parse(&params.amount, &params.currency)?;
    params.card.validate()?;

    let code = select_transaction_code(params.transaction_code, params.create_card);
    let details = transaction_details(
        credentials,
        &money,
        order,
        code,
        params.client_ip.clone(),
        params.customer_reference.clone(),
    )?;

    Ok(AuthorizePayload {
        billing_details: billing_details(&params.card),
        card_details: card_details(&params.card),
        transaction_details: details,
    })
}

fn card_details(card: &Card) -> CardDetails {
    CardDetails {
        card_cvv2: card.cvv.clone(),
        card_expiry_date: card.expiry_mmyy(),
        card_number: card.number.clone(),
        issue_number: card.issue_number.clone(),
        start_date: card.start_date.clone(),
    }
}

fn billing_details(card: &Card) -> Option<BillingDetails> {
    let billing = &card.billing;
    if billing.is_empty() && card.first_name.is_none() && card.last_name.is_none() {
        return None;
    }
    Some(BillingDetails {
        bill_to_address: billing.address1.clone(),
        bill_to_address2: billing.address2.clone(),
        bill_to_city: billing.city.clone(),
        bill_to_country: billing.country.clone(),
        bill_to_email: billing.email.clone(),
        bill_to_first_name: card.first_name.clone(),
        bill_to_last_name: card.last_name.clone(),
        bill_to_state: billing.state.clone(),
        bill_to_telephone: billing.phone.clone(),
        bill_to_zip_post_code: billing.postcode.clone(),
    })
}
