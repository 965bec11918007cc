// ============================================================================
// Exact Split
// Caller-supplied amounts, validated against the total
// ============================================================================

use super::errors::{SplitError, SplitResult};
use crate::domain::SplitType;
use crate::interfaces::SplitAllocator;
use crate::numeric::{out_of_range, MinorUnits};

/// Exact split allocator
///
/// Never rounds or redistributes. The amounts are returned unchanged when
/// they add up to the total; otherwise the request is rejected with the
/// signed discrepancy so the caller can show how far off the entry is.
///
/// Settlement, adjustment and currency-conversion records use the same
/// validation under their own split type.
pub struct ExactSplit {
    pub amounts: Vec<MinorUnits>,
    split_type: SplitType,
}

impl ExactSplit {
    pub fn new(amounts: Vec<MinorUnits>) -> Self {
        Self::with_split_type(SplitType::Exact, amounts)
    }

    pub fn with_split_type(split_type: SplitType, amounts: Vec<MinorUnits>) -> Self {
        Self {
            amounts,
            split_type,
        }
    }
}

impl SplitAllocator for ExactSplit {
    fn allocate(&self, total: MinorUnits) -> SplitResult<Vec<MinorUnits>> {
        split_exact(total, &self.amounts)
    }

    fn name(&self) -> &str {
        "Exact"
    }

    fn participant_count(&self) -> usize {
        self.amounts.len()
    }

    fn split_type(&self) -> SplitType {
        self.split_type
    }
}

/// Accept `amounts` if they add up to `total`.
///
/// An empty list is valid for a zero total only.
///
/// # Errors
/// - `SplitMismatch` with `discrepancy = total - sum(amounts)`
/// - `Numeric` if the sum or the discrepancy leaves the `i64` range
pub fn split_exact(total: MinorUnits, amounts: &[MinorUnits]) -> SplitResult<Vec<MinorUnits>> {
    let allocated: i128 = amounts.iter().map(|a| a.raw_value() as i128).sum();
    let discrepancy = total.raw_value() as i128 - allocated;
    if discrepancy == 0 {
        return Ok(amounts.to_vec());
    }

    Err(SplitError::SplitMismatch {
        total,
        allocated: to_minor(allocated)?,
        discrepancy: to_minor(discrepancy)?,
    })
}

fn to_minor(value: i128) -> SplitResult<MinorUnits> {
    i64::try_from(value)
        .map(MinorUnits::from_raw)
        .map_err(|_| SplitError::from(out_of_range(value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::NumericError;

    fn cents(values: &[i64]) -> Vec<MinorUnits> {
        values.iter().map(|v| MinorUnits::from_raw(*v)).collect()
    }

    #[test]
    fn test_matching_amounts_pass_through() {
        let amounts = cents(&[600, 400]);
        assert_eq!(split_exact(MinorUnits::from_raw(1000), &amounts), Ok(amounts));
    }

    #[test]
    fn test_order_and_zero_rows_preserved() {
        let amounts = cents(&[0, 999, 1]);
        assert_eq!(split_exact(MinorUnits::from_raw(1000), &amounts), Ok(amounts));
    }

    #[test]
    fn test_under_allocation() {
        assert_eq!(
            split_exact(MinorUnits::from_raw(1000), &cents(&[600, 300])),
            Err(SplitError::SplitMismatch {
                total: MinorUnits::from_raw(1000),
                allocated: MinorUnits::from_raw(900),
                discrepancy: MinorUnits::from_raw(100),
            })
        );
    }

    #[test]
    fn test_over_allocation_is_negative() {
        match split_exact(MinorUnits::from_raw(1000), &cents(&[600, 500])) {
            Err(SplitError::SplitMismatch { discrepancy, .. }) => {
                assert_eq!(discrepancy, MinorUnits::from_raw(-100));
            },
            other => panic!("expected mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_amounts() {
        assert_eq!(split_exact(MinorUnits::ZERO, &[]), Ok(vec![]));
        assert!(split_exact(MinorUnits::from_raw(1), &[]).is_err());
    }

    #[test]
    fn test_huge_sum_reports_overflow() {
        assert_eq!(
            split_exact(MinorUnits::ZERO, &cents(&[i64::MAX, i64::MAX])),
            Err(SplitError::Numeric(NumericError::Overflow))
        );
    }

    #[test]
    fn test_custom_split_type() {
        let allocator = ExactSplit::with_split_type(SplitType::Settlement, cents(&[500]));
        assert_eq!(allocator.split_type(), SplitType::Settlement);
        assert_eq!(allocator.allocate(MinorUnits::from_raw(500)), Ok(cents(&[500])));
    }
}
