//! Transaction codes understood by the acquirer.
//!
//! The acquirer expresses compound intents by summing power-of-two codes
//! (`SINGLE_PASS + REQUEST_TOKEN = 136`). Here each code is a flag in a
//! bitmask, so combining the same flag twice cannot produce a different code.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::RequestError;

/// A set of transaction flags.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TransactionCode(u32);

impl TransactionCode {
    /// Plain authorization, no extra processing.
    pub const NONE: Self = Self(0);
    /// Pre-authorization: funds are held and captured later.
    pub const PREAUTH: Self = Self::NONE;
    /// Run an address verification check.
    pub const AVS_CHECK: Self = Self(1);
    /// Capture immediately after authorization.
    pub const DEPOSIT: Self = Self(2);
    /// First transaction of a recurring series.
    pub const INITIAL_RECURRING: Self = Self(4);
    /// Authorize in a single pass, without 3-D Secure.
    pub const SINGLE_PASS: Self = Self(8);
    /// Authenticate with 3-D Secure.
    pub const THREE_D_SECURE: Self = Self(64);
    /// Return a token for the card alongside the result.
    pub const REQUEST_TOKEN: Self = Self(128);
    /// Hosted page authorization with 3-D Secure.
    pub const HOSTED_PAGE_3DS: Self = Self(256);
    /// Run fraud checks only.
    pub const FRAUD_CHECK_ONLY: Self = Self(512);
    /// Subsequent transaction of a recurring series.
    pub const RECURRING: Self = Self(2048);

    const FLAGS: [(Self, &'static str); 9] = [
        (Self::AVS_CHECK, "AVS_CHECK"),
        (Self::DEPOSIT, "DEPOSIT"),
        (Self::INITIAL_RECURRING, "INITIAL_RECURRING"),
        (Self::SINGLE_PASS, "SINGLE_PASS"),
        (Self::THREE_D_SECURE, "THREE_D_SECURE"),
        (Self::REQUEST_TOKEN, "REQUEST_TOKEN"),
        (Self::HOSTED_PAGE_3DS, "HOSTED_PAGE_3DS"),
        (Self::FRAUD_CHECK_ONLY, "FRAUD_CHECK_ONLY"),
        (Self::RECURRING, "RECURRING"),
    ];

    const KNOWN_BITS: u32 = 1 | 2 | 4 | 8 | 64 | 128 | 256 | 512 | 2048;

    /// Builds a code from a raw integer, rejecting bits with no named flag.
    pub fn from_bits(bits: u32) -> Result<Self, RequestError> {
        if bits & !Self::KNOWN_BITS != 0 {
            return Err(RequestError::InvalidTransactionCode(bits));
        }
        Ok(Self(bits))
    }

    /// The integer sent to the acquirer.
    pub fn bits(&self) -> u32 {
        self.0
    }

    pub fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// The code rendered as a decimal string, as the hosted page expects.
    pub fn as_wire_string(&self) -> String {
        self.0.to_string()
    }

    /// Names of the flags set in this code.
    pub fn flag_names(&self) -> Vec<&'static str> {
        Self::FLAGS
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect()
    }
}

impl BitOr for TransactionCode {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for TransactionCode {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl TryFrom<u32> for TransactionCode {
    type Error = RequestError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Self::from_bits(bits)
    }
}

impl fmt::Display for TransactionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for TransactionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return write!(f, "TransactionCode(NONE)");
        }
        write!(f, "TransactionCode({})", self.flag_names().join(" | "))
    }
}

impl Serialize for TransactionCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.0)
    }
}

impl<'de> Deserialize<'de> for TransactionCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bits = u32::deserialize(deserializer)?;
        Self::from_bits(bits).map_err(serde::de::Error::custom)
    }
}
