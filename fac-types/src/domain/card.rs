//! Card details supplied by the caller.
//!
//! The adapter only reads a card to fill request payloads; it never stores one.

use std::fmt;

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::RequestError;

/// Billing address used for address verification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingAddress {
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postcode: Option<String>,
    pub country: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl BillingAddress {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A payment card.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub number: String,
    pub expiry_month: u32,
    pub expiry_year: i32,
    pub cvv: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Only present on some Maestro/Solo cards
    pub issue_number: Option<String>,
    /// MMYY
    pub start_date: Option<String>,
    #[serde(default)]
    pub billing: BillingAddress,
}

impl Card {
    pub fn new(number: impl Into<String>, expiry_month: u32, expiry_year: i32) -> Self {
        Self {
            number: number.into(),
            expiry_month,
            expiry_year,
            ..Default::default()
        }
    }

    pub fn with_cvv(mut self, cvv: impl Into<String>) -> Self {
        self.cvv = Some(cvv.into());
        self
    }

    pub fn with_name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.first_name = Some(first.into());
        self.last_name = Some(last.into());
        self
    }

    pub fn with_billing(mut self, billing: BillingAddress) -> Self {
        self.billing = billing;
        self
    }

    /// Expiry in the acquirer's `MMYY` form.
    pub fn expiry_mmyy(&self) -> String {
        format!(
            "{:02}{:02}",
            self.expiry_month,
            self.expiry_year.rem_euclid(100)
        )
    }

    /// Last four digits of the card number.
    pub fn last_four(&self) -> &str {
        let start = self.number.len().saturating_sub(4);
        self.number.get(start..).unwrap_or_default()
    }

    /// Validates the card against today's date.
    pub fn validate(&self) -> Result<(), RequestError> {
        self.validate_at(Utc::now().date_naive())
    }

    /// Validates number format, Luhn checksum and expiry.
    pub fn validate_at(&self, today: NaiveDate) -> Result<(), RequestError> {
        if self.number.is_empty() || !self.number.chars().all(|c| c.is_ascii_digit()) {
            return Err(RequestError::InvalidCard(
                "card number must contain only digits".into(),
            ));
        }
        if !(12..=19).contains(&self.number.len()) {
            return Err(RequestError::InvalidCard(
                "card number has an invalid length".into(),
            ));
        }
        if !luhn_valid(&self.number) {
            return Err(RequestError::InvalidCard("card number is invalid".into()));
        }
        if !(1..=12).contains(&self.expiry_month) {
            return Err(RequestError::InvalidCard(
                "expiry month must be between 1 and 12".into(),
            ));
        }
        let expired = (self.expiry_year, self.expiry_month) < (today.year(), today.month());
        if expired {
            return Err(RequestError::InvalidCard("card has expired".into()));
        }
        Ok(())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Card")
            .field("number", &format_args!("****{}", self.last_four()))
            .field("expiry", &self.expiry_mmyy())
            .field("cvv", &self.cvv.as_ref().map(|_| "***"))
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .finish_non_exhaustive()
    }
}

fn luhn_valid(number: &str) -> bool {
    let sum: u32 = number
        .chars()
        .rev()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
        .map(|(i, d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();
    sum % 10 == 0
}
