//! Post-authorization modification types.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Operation applied to an existing transaction.
///
/// Serialized as the bare integer the acquirer expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModificationType {
    Capture,
    Refund,
    /// Reversal of an authorization that has not settled.
    Void,
}

impl ModificationType {
    pub const CAPTURE: u8 = 1;
    pub const REFUND: u8 = 2;
    pub const VOID: u8 = 3;

    pub fn code(&self) -> u8 {
        match self {
            ModificationType::Capture => Self::CAPTURE,
            ModificationType::Refund => Self::REFUND,
            ModificationType::Void => Self::VOID,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            Self::CAPTURE => Some(ModificationType::Capture),
            Self::REFUND => Some(ModificationType::Refund),
            Self::VOID => Some(ModificationType::Void),
            _ => None,
        }
    }
}

impl fmt::Display for ModificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModificationType::Capture => write!(f, "CAPTURE"),
            ModificationType::Refund => write!(f, "REFUND"),
            ModificationType::Void => write!(f, "VOID"),
        }
    }
}

impl Serialize for ModificationType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for ModificationType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u8::deserialize(deserializer)?;
        Self::from_code(code)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown modification type {}", code)))
    }
}
