// ============================================================================
// Share Split
// Proportional to integer weights, drift corrected on the first
// ============================================================================

use super::errors::{SplitError, SplitResult};
use super::residual::apply_residual;
use crate::domain::SplitType;
use crate::interfaces::SplitAllocator;
use crate::numeric::{out_of_range, BigMath, MinorUnits, NumericError};

/// Share-based split allocator
///
/// Equivalent to a percentage split with `p_i = w_i / Σw × 100`, but
/// computed directly in integers: `round(total × w_i / Σw)`, then the
/// same first-participant correction.
///
/// # Example
/// ```text
/// Total: 10.00, shares: [2, 1, 1]
///   shares = [500, 250, 250]
/// ```
pub struct ShareSplit {
    pub shares: Vec<u64>,
}

impl ShareSplit {
    pub fn new(shares: Vec<u64>) -> Self {
        Self { shares }
    }
}

impl SplitAllocator for ShareSplit {
    fn allocate(&self, total: MinorUnits) -> SplitResult<Vec<MinorUnits>> {
        split_by_shares(total, &self.shares)
    }

    fn name(&self) -> &str {
        "Share"
    }

    fn participant_count(&self) -> usize {
        self.shares.len()
    }

    fn split_type(&self) -> SplitType {
        SplitType::Share
    }
}

/// Split `total` proportionally to `shares`.
///
/// # Errors
/// - `InvalidParticipantCount` for an empty list
/// - `InvalidShareTotal` if every weight is zero
/// - `Numeric` if the weights or the correction overflow
pub fn split_by_shares(total: MinorUnits, shares: &[u64]) -> SplitResult<Vec<MinorUnits>> {
    if shares.is_empty() {
        return Err(SplitError::InvalidParticipantCount { count: 0 });
    }

    let total_shares: u128 = shares.iter().map(|s| *s as u128).sum();
    if total_shares == 0 {
        return Err(SplitError::InvalidShareTotal);
    }
    let total_shares = i128::try_from(total_shares).map_err(|_| NumericError::Overflow)?;

    let raw_total = total.raw_value() as i128;
    let mut allocated = shares
        .iter()
        .map(|share| {
            let weighted = raw_total
                .checked_mul(*share as i128)
                .ok_or_else(|| out_of_range(raw_total))?;
            let amount = BigMath::round_div_wide(weighted, total_shares)?;
            i64::try_from(amount)
                .map(MinorUnits::from_raw)
                .map_err(|_| SplitError::from(out_of_range(amount)))
        })
        .collect::<SplitResult<Vec<_>>>()?;

    apply_residual(total, &mut allocated)?;
    Ok(allocated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(shares: &[MinorUnits]) -> Vec<i64> {
        shares.iter().map(|s| s.raw_value()).collect()
    }

    #[test]
    fn test_ratio_split() {
        let shares = split_by_shares(MinorUnits::from_raw(1000), &[2, 1, 1]).unwrap();
        assert_eq!(raw(&shares), vec![500, 250, 250]);
    }

    #[test]
    fn test_equal_weights_front_load_drift() {
        // 1000 / 3 = 333.33 -> 333 each, +1 on the first
        let shares = split_by_shares(MinorUnits::from_raw(1000), &[1, 1, 1]).unwrap();
        assert_eq!(raw(&shares), vec![334, 333, 333]);
    }

    #[test]
    fn test_rounding_up_drift() {
        // 100 * 1/6 = 16.67 -> 17; 100 * 5/6 = 83.33 -> 83
        let shares = split_by_shares(MinorUnits::from_raw(100), &[1, 5]).unwrap();
        assert_eq!(raw(&shares), vec![17, 83]);

        // Each 2/3 of 1 rounds to 1 and 1/3 rounds to 0: sum 1 already
        let shares = split_by_shares(MinorUnits::from_raw(1), &[2, 1]).unwrap();
        assert_eq!(raw(&shares), vec![1, 0]);

        // 0.5 + 0.5 both round up: drift -1 on the first
        let shares = split_by_shares(MinorUnits::from_raw(1), &[1, 1]).unwrap();
        assert_eq!(raw(&shares), vec![0, 1]);
    }

    #[test]
    fn test_zero_weight_participant() {
        let shares = split_by_shares(MinorUnits::from_raw(900), &[0, 1, 2]).unwrap();
        assert_eq!(raw(&shares), vec![0, 300, 600]);
    }

    #[test]
    fn test_negative_total() {
        let shares = split_by_shares(MinorUnits::from_raw(-1000), &[2, 1, 1]).unwrap();
        assert_eq!(raw(&shares), vec![-500, -250, -250]);
    }

    #[test]
    fn test_huge_weights() {
        let shares =
            split_by_shares(MinorUnits::MAX, &[u64::MAX, u64::MAX]).unwrap();
        assert_eq!(
            MinorUnits::checked_sum(shares.iter().copied()),
            Ok(MinorUnits::MAX)
        );
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(
            split_by_shares(MinorUnits::from_raw(1000), &[]),
            Err(SplitError::InvalidParticipantCount { count: 0 })
        );
        assert_eq!(
            split_by_shares(MinorUnits::from_raw(1000), &[0, 0, 0]),
            Err(SplitError::InvalidShareTotal)
        );
    }
}
