//! Transaction status lookup payload.

use fac_types::{Password, RequestError, TransactionStatusPayload};

use super::order_number;
use crate::config::Credentials;
use crate::params::TransactionStatusParams;

pub fn build(
    credentials: &Credentials,
    params: &TransactionStatusParams,
) -> Result<TransactionStatusPayload, RequestError> {
    let order = order_number(&params.transaction_id)?;
    Ok(TransactionStatusPayload {
        acquirer_id: credentials.acquirer_id.clone(),
        merchant_id: credentials.merchant_id.clone(),
        order_number: order.to_string(),
        password: Password::new(credentials.password.clone()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::fixtures::credentials;

    #[test]
    fn test_status_payload() {
        let payload = build(&credentials(), &TransactionStatusParams::new("1234")).unwrap();
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["OrderNumber"], "1234");
        assert_eq!(json["MerchantId"], "123456");
        assert_eq!(json["Password"], "abcdefg");
    }

    #[test]
    fn test_status_requires_order() {
        assert_eq!(
            build(&credentials(), &TransactionStatusParams::new("")),
            Err(RequestError::MissingParameter("transactionId"))
        );
    }
}
