//! Decimal monetary value with embedded currency, and the acquirer's
//! fixed-width amount encoding.

use std::fmt;
use std::str::FromStr;

use fac_currency::CurrencyCode;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::RequestError;

/// Width of the zero-padded minor-unit amount sent to the acquirer.
pub const AMOUNT_WIDTH: usize = 12;

const MAX_MINOR_UNITS: u64 = 999_999_999_999;

/// Accepts `digits[.digits]` with an optional sign, nothing else.
fn is_plain_decimal(s: &str) -> bool {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };
    let digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    digits(whole) && fraction.is_none_or(digits)
}

/// Money as supplied by the caller: a major-unit decimal plus its currency.
///
/// The amount is kept as a `Decimal` so that `"10.00"` never passes through
/// binary floating point on its way to `000000001000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Money {
    amount: Decimal,
    currency: CurrencyCode,
}

impl Money {
    /// Creates a new Money value.
    pub fn new(amount: Decimal, currency: CurrencyCode) -> Result<Self, RequestError> {
        if amount < Decimal::ZERO {
            return Err(RequestError::InvalidAmount(
                "amount cannot be negative".into(),
            ));
        }
        Ok(Self { amount, currency })
    }

    /// Parses a decimal string and an alphabetic currency code.
    pub fn parse(amount: &str, currency: &str) -> Result<Self, RequestError> {
        let currency: CurrencyCode = currency.parse()?;
        let trimmed = amount.trim();
        let not_a_number = || RequestError::InvalidAmount(format!("'{}' is not a number", amount));
        if !is_plain_decimal(trimmed) {
            return Err(not_a_number());
        }
        let amount = Decimal::from_str(trimmed).map_err(|_| not_a_number())?;
        Self::new(amount, currency)
    }

    /// Returns the major-unit amount.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency.
    pub fn currency(&self) -> CurrencyCode {
        self.currency
    }

    /// Amount in minor units, truncated toward zero.
    pub fn minor_units(&self) -> Result<u64, RequestError> {
        let scale = Decimal::from(10u64.pow(self.currency.exponent()));
        self.amount
            .checked_mul(scale)
            .map(|scaled| scaled.trunc())
            .and_then(|units| units.to_u64())
            .filter(|units| *units <= MAX_MINOR_UNITS)
            .ok_or_else(|| {
                RequestError::InvalidAmount(format!(
                    "{} does not fit in {} digits",
                    self.amount, AMOUNT_WIDTH
                ))
            })
    }

    /// The acquirer's amount field: minor units, zero-padded to 12 digits.
    pub fn normalized_amount(&self) -> Result<String, RequestError> {
        Ok(format!("{:0width$}", self.minor_units()?, width = AMOUNT_WIDTH))
    }

    /// Three-digit ISO 4217 numeric currency code.
    pub fn currency_numeric(&self) -> &'static str {
        self.currency.numeric()
    }

    pub fn currency_exponent(&self) -> u32 {
        self.currency.exponent()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let places = self.currency.exponent() as usize;
        write!(f, "{}{:.*}", self.currency.symbol(), places, self.amount)
    }
}

/// Converts a decimal amount into the acquirer's 12-digit minor-unit string.
pub fn normalize_amount(amount: Decimal, currency: &str) -> Result<String, RequestError> {
    Money::new(amount, currency.parse()?)?.normalized_amount()
}

/// Looks up the numeric ISO 4217 code for an alphabetic one.
pub fn resolve_currency_numeric(alpha: &str) -> Result<&'static str, RequestError> {
    Ok(alpha.parse::<CurrencyCode>()?.numeric())
}
