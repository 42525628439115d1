//! Request signing.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_ENGINE;
use sha1::{Digest, Sha1};

use crate::config::Credentials;

pub const SIGNATURE_METHOD: &str = "SHA1";

/// Signs a transaction: `Base64(SHA1(password + merchant + acquirer + order + amount + currency))`.
///
/// `amount` is the 12-digit wire amount and `currency` the numeric code.
pub fn sign(credentials: &Credentials, order_number: &str, amount: &str, currency: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(credentials.password.as_bytes());
    hasher.update(credentials.merchant_id.as_bytes());
    hasher.update(credentials.acquirer_id.as_bytes());
    hasher.update(order_number.as_bytes());
    hasher.update(amount.as_bytes());
    hasher.update(currency.as_bytes());
    BASE64_ENGINE.encode(hasher.finalize())
}
