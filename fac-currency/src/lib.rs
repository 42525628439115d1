//! ISO 4217 Currency Table with Macro-Based Generation
//!
//! The acquirer only understands numeric ISO 4217 codes and amounts in minor
//! units, so every currency carries its alphabetic code, numeric code and
//! minor-unit exponent. Currencies are defined declaratively using a macro
//! that generates the `CurrencyCode` enum and its lookups.
//!
//! # Adding a New Currency
//! Add a line to the `define_currencies!` macro invocation:
//! ```ignore
//! define_currencies! {
//!     // ... existing currencies ...
//!     CHF => ("CHF", "756", 2, "Fr"),
//! }
//! ```
//!
//! # Example
//! ```
//! use fac_currency::CurrencyCode;
//!
//! let usd: CurrencyCode = "usd".parse().unwrap();
//! assert_eq!(usd.numeric(), "840");
//! assert_eq!(usd.exponent(), 2);
//! ```

/// Error returned when an alphabetic code is not in the table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported currency: {0}")]
pub struct UnknownCurrency(pub String);

// ─────────────────────────────────────────────────────────────────────────────
// THE MACRO: Defines the CurrencyCode enum and its lookup tables
// ─────────────────────────────────────────────────────────────────────────────

/// Macro to define currencies with auto-generated lookups.
///
/// # Syntax
/// ```ignore
/// define_currencies! {
///     Name => ("ALPHA", "NUMERIC", exponent, "SYMBOL"),
/// }
/// ```
#[macro_export]
macro_rules! define_currencies {
    (
        $(
            $name:ident => ($alpha:literal, $numeric:literal, $exponent:expr, $symbol:literal)
        ),* $(,)?
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "UPPERCASE")]
        pub enum CurrencyCode {
            $($name),*
        }

        impl CurrencyCode {
            /// Alphabetic ISO 4217 code.
            pub fn alpha(&self) -> &'static str {
                match self {
                    $(CurrencyCode::$name => $alpha),*
                }
            }

            /// Three-digit numeric ISO 4217 code, zero-padded.
            pub fn numeric(&self) -> &'static str {
                match self {
                    $(CurrencyCode::$name => $numeric),*
                }
            }

            /// Number of minor-unit digits (2 for cents).
            pub fn exponent(&self) -> u32 {
                match self {
                    $(CurrencyCode::$name => $exponent),*
                }
            }

            pub fn symbol(&self) -> &'static str {
                match self {
                    $(CurrencyCode::$name => $symbol),*
                }
            }

            pub fn all() -> &'static [CurrencyCode] {
                &[$(CurrencyCode::$name),*]
            }

            /// Reverse lookup from the numeric code.
            pub fn from_numeric(numeric: &str) -> Option<CurrencyCode> {
                match numeric {
                    $($numeric => Some(CurrencyCode::$name),)*
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for CurrencyCode {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.alpha())
            }
        }

        impl std::str::FromStr for CurrencyCode {
            type Err = $crate::UnknownCurrency;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_uppercase().as_str() {
                    $($alpha => Ok(CurrencyCode::$name),)*
                    _ => Err($crate::UnknownCurrency(s.to_string())),
                }
            }
        }
    };
}

// ─────────────────────────────────────────────────────────────────────────────
// CURRENCY DEFINITIONS - Add new currencies here!
// ─────────────────────────────────────────────────────────────────────────────

define_currencies! {
    USD => ("USD", "840", 2, "$"),
    EUR => ("EUR", "978", 2, "€"),
    GBP => ("GBP", "826", 2, "£"),
    CAD => ("CAD", "124", 2, "$"),
    JMD => ("JMD", "388", 2, "J$"),
    TTD => ("TTD", "780", 2, "TT$"),
    BBD => ("BBD", "052", 2, "Bds$"),
    BSD => ("BSD", "044", 2, "B$"),
    BZD => ("BZD", "084", 2, "BZ$"),
    BMD => ("BMD", "060", 2, "$"),
    KYD => ("KYD", "136", 2, "CI$"),
    XCD => ("XCD", "951", 2, "EC$"),
    GYD => ("GYD", "328", 2, "G$"),
    DOP => ("DOP", "214", 2, "RD$"),
    AWG => ("AWG", "533", 2, "ƒ"),
    ANG => ("ANG", "532", 2, "ƒ"),
    HTG => ("HTG", "332", 2, "G"),
    SRD => ("SRD", "968", 2, "$"),
    JPY => ("JPY", "392", 0, "¥"),
}

/// Resolves an alphabetic code straight to its numeric form.
pub fn numeric_for(alpha: &str) -> Result<&'static str, UnknownCurrency> {
    alpha.parse::<CurrencyCode>().map(|c| c.numeric())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
