// ============================================================================
// Numeric Errors
// Conditions raised by minor-unit arithmetic and conversion
// ============================================================================

use std::fmt;

/// Why a minor-unit computation has no representable result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Amount above `MinorUnits::MAX`
    Overflow,
    /// Amount below `MinorUnits::MIN`
    Underflow,
    /// Rounded division with a zero divisor
    DivisionByZero,
    /// Strict parse saw more than two fraction digits
    PrecisionLoss,
    /// Not a number (NaN, infinity, or malformed canonical text)
    InvalidInput,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => write!(f, "amount exceeds the largest i64 minor-unit value"),
            NumericError::Underflow => write!(f, "amount is below the smallest i64 minor-unit value"),
            NumericError::DivisionByZero => write!(f, "cannot divide minor units by zero"),
            NumericError::PrecisionLoss => {
                write!(f, "amount has more than two fraction digits")
            },
            NumericError::InvalidInput => write!(f, "not a valid amount"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for minor-unit arithmetic
pub type NumericResult<T> = Result<T, NumericError>;

/// `Overflow` for a positive out-of-range intermediate, `Underflow` otherwise.
#[inline]
pub(crate) fn out_of_range(value: i128) -> NumericError {
    if value > 0 {
        NumericError::Overflow
    } else {
        NumericError::Underflow
    }
}
