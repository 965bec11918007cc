// ============================================================================
// Currency Errors
// ============================================================================

use std::fmt;

/// Errors raised while building a currency formatter.
///
/// Parsing user input never fails; these only cover configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    /// Not three upper-case ASCII letters
    InvalidCurrencyCode(String),
    /// Well-formed but not one of the offered currencies
    UnsupportedCurrency(String),
}

impl fmt::Display for CurrencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrencyError::InvalidCurrencyCode(code) => {
                write!(f, "invalid currency code: {:?}", code)
            },
            CurrencyError::UnsupportedCurrency(code) => {
                write!(f, "unsupported currency: {:?}", code)
            },
        }
    }
}

impl std::error::Error for CurrencyError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CurrencyError::InvalidCurrencyCode("us".to_string()).to_string(),
            "invalid currency code: \"us\""
        );
    }
}
