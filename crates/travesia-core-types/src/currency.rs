//! Fixed currency allow-list for package pricing
//!
//! The backend stores the currency as a three-letter code from a closed set.
//! Anything outside the set normalizes to the documented default (`MXN`),
//! so both diff sides always compare canonical values.

use serde::{Deserialize, Serialize};

/// Supported pricing currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    /// Mexican peso — the default for all catalog packages
    #[default]
    #[serde(rename = "MXN")]
    Mxn,
    /// US dollar
    #[serde(rename = "USD")]
    Usd,
    /// Euro
    #[serde(rename = "EUR")]
    Eur,
}

impl Currency {
    /// Parse a wire code, returning `None` for codes outside the allow-list.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "MXN" => Some(Self::Mxn),
            "USD" => Some(Self::Usd),
            "EUR" => Some(Self::Eur),
            _ => None,
        }
    }

    /// Parse a wire code, falling back to the default for unknown codes.
    pub fn from_code_or_default(code: &str) -> Self {
        Self::from_code(code).unwrap_or_default()
    }

    /// The canonical wire code.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Mxn => "MXN",
            Self::Usd => "USD",
            Self::Eur => "EUR",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_code())
    }
}
