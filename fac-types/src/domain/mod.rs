//! Domain models for the gateway adapter.

pub mod card;
pub mod modification;
pub mod money;
pub mod transaction_code;

pub use card::{BillingAddress, Card};
pub use modification::ModificationType;
pub use money::{AMOUNT_WIDTH, Money, normalize_amount, resolve_currency_numeric};
pub use transaction_code::TransactionCode;
