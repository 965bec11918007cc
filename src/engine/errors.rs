// ============================================================================
// Split Errors
// Typed conditions returned by the allocators
// ============================================================================

use crate::domain::SplitType;
use crate::numeric::{MinorUnits, NumericError};
use rust_decimal::Decimal;
use std::fmt;

/// Why a split could not be computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitError {
    /// The strategy needs at least one participant
    InvalidParticipantCount { count: usize },
    /// Share weights add up to zero
    InvalidShareTotal,
    /// A percentage outside `[0, 100]`
    InvalidPercentage { index: usize, value: Decimal },
    /// Exact amounts do not add up to the total; `discrepancy = total - allocated`
    SplitMismatch {
        total: MinorUnits,
        allocated: MinorUnits,
        discrepancy: MinorUnits,
    },
    /// Weights of the wrong kind for the requested split type
    WeightsMismatch { split_type: SplitType },
    /// Number of users differs from the number of shares
    ParticipantMismatch { users: usize, shares: usize },
    /// Unknown split type name
    UnknownSplitType(String),
    /// Arithmetic overflow in an intermediate or the residual correction
    Numeric(NumericError),
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitError::InvalidParticipantCount { count } => {
                write!(f, "invalid participant count: {}", count)
            },
            SplitError::InvalidShareTotal => write!(f, "share weights must not all be zero"),
            SplitError::InvalidPercentage { index, value } => write!(
                f,
                "percentage {} at position {} is outside 0..=100",
                value, index
            ),
            SplitError::SplitMismatch {
                total,
                allocated,
                discrepancy,
            } => write!(
                f,
                "split mismatch: amounts add up to {} but total is {} (off by {})",
                allocated, total, discrepancy
            ),
            SplitError::WeightsMismatch { split_type } => {
                write!(f, "weights do not match split type {}", split_type)
            },
            SplitError::ParticipantMismatch { users, shares } => {
                write!(f, "{} users but {} shares", users, shares)
            },
            SplitError::UnknownSplitType(name) => write!(f, "unknown split type: {:?}", name),
            SplitError::Numeric(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SplitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SplitError::Numeric(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NumericError> for SplitError {
    fn from(err: NumericError) -> Self {
        SplitError::Numeric(err)
    }
}

/// Result type alias for split operations
pub type SplitResult<T> = Result<T, SplitError>;
