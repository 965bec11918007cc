// ============================================================================
// Currency Codes
// The ISO 4217 codes offered to users, with their display symbols
// ============================================================================

use super::errors::CurrencyError;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Currencies an expense can be recorded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CurrencyCode {
    USD,
    EUR,
    GBP,
    JPY,
    AUD,
    CAD,
    CHF,
    CNY,
    SEK,
    NZD,
    MXN,
    SGD,
    HKD,
    NOK,
    KRW,
    TRY,
    RUB,
    INR,
    BRL,
    ZAR,
}

/// All supported currencies, in display order.
pub const CURRENCIES: [CurrencyCode; 20] = [
    CurrencyCode::USD,
    CurrencyCode::EUR,
    CurrencyCode::GBP,
    CurrencyCode::JPY,
    CurrencyCode::AUD,
    CurrencyCode::CAD,
    CurrencyCode::CHF,
    CurrencyCode::CNY,
    CurrencyCode::SEK,
    CurrencyCode::NZD,
    CurrencyCode::MXN,
    CurrencyCode::SGD,
    CurrencyCode::HKD,
    CurrencyCode::NOK,
    CurrencyCode::KRW,
    CurrencyCode::TRY,
    CurrencyCode::RUB,
    CurrencyCode::INR,
    CurrencyCode::BRL,
    CurrencyCode::ZAR,
];

impl CurrencyCode {
    /// Three-letter ISO code.
    pub const fn as_str(self) -> &'static str {
        match self {
            CurrencyCode::USD => "USD",
            CurrencyCode::EUR => "EUR",
            CurrencyCode::GBP => "GBP",
            CurrencyCode::JPY => "JPY",
            CurrencyCode::AUD => "AUD",
            CurrencyCode::CAD => "CAD",
            CurrencyCode::CHF => "CHF",
            CurrencyCode::CNY => "CNY",
            CurrencyCode::SEK => "SEK",
            CurrencyCode::NZD => "NZD",
            CurrencyCode::MXN => "MXN",
            CurrencyCode::SGD => "SGD",
            CurrencyCode::HKD => "HKD",
            CurrencyCode::NOK => "NOK",
            CurrencyCode::KRW => "KRW",
            CurrencyCode::TRY => "TRY",
            CurrencyCode::RUB => "RUB",
            CurrencyCode::INR => "INR",
            CurrencyCode::BRL => "BRL",
            CurrencyCode::ZAR => "ZAR",
        }
    }

    /// Display symbol; currencies without a well-known symbol use their code.
    pub const fn symbol(self) -> &'static str {
        match self {
            CurrencyCode::USD => "$",
            CurrencyCode::EUR => "€",
            CurrencyCode::GBP => "£",
            CurrencyCode::JPY | CurrencyCode::CNY => "¥",
            CurrencyCode::AUD => "A$",
            CurrencyCode::CAD => "C$",
            CurrencyCode::CHF => "Fr",
            CurrencyCode::SEK => "kr",
            CurrencyCode::NZD => "NZ$",
            CurrencyCode::INR => "₹",
            CurrencyCode::BRL => "R$",
            other => other.as_str(),
        }
    }
}

/// Exact, case-sensitive membership test against `CURRENCIES`.
pub fn is_currency_code(code: &str) -> bool {
    code.parse::<CurrencyCode>().is_ok()
}

/// Symbol for any well-formed code, falling back to the code itself.
pub fn currency_symbol(code: &str) -> &str {
    match code.parse::<CurrencyCode>() {
        Ok(known) => known.symbol(),
        Err(_) => code,
    }
}

/// Three ASCII letters, upper case. Codes outside `CURRENCIES` can still
/// be well-formed.
pub(crate) fn is_well_formed(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase())
}

impl FromStr for CurrencyCode {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CURRENCIES
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CurrencyError::UnsupportedCurrency(s.to_string()))
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
