//! Hosted page preprocess and result payloads.

use fac_types::{
    HostedPagePreprocessPayload, HostedPageResultsPayload, Money, RequestError,
};

use super::card::select_transaction_code;
use super::{order_number, transaction_details};
use crate::config::Credentials;
use crate::params::{HostedPageParams, HostedPageResultParams};

/// Builds the payload that opens a hosted page session.
///
/// The transaction code travels as a decimal string in this payload only.
pub fn preprocess(
    credentials: &Credentials,
    params: &HostedPageParams,
) -> Result<HostedPagePreprocessPayload, RequestError> {
    let order = order_number(&params.transaction_id)?;
    let response_url = params.card_holder_response_url.trim();
    if response_url.is_empty() {
        return Err(RequestError::MissingParameter("cardHolderResponseURL"));
    }
    let money = Money::parse(&params.amount, &params.currency)?;

    let code = select_transaction_code(params.transaction_code, params.create_card);
    let details = transaction_details(
        credentials,
        &money,
        order,
        code.as_wire_string(),
        params.client_ip.clone(),
        params.customer_reference.clone(),
    )?;

    Ok(HostedPagePreprocessPayload {
        card_holder_response_url: response_url.to_string(),
        transaction_details: details,
    })
}

/// Wraps a session token for result retrieval, untouched.
pub fn results(params: &HostedPageResultParams) -> Result<HostedPageResultsPayload, RequestError> {
    if params.token.is_empty() {
        return Err(RequestError::MissingParameter("token"));
    }
    Ok(HostedPageResultsPayload {
        string: params.token.clone(),
    })
}
