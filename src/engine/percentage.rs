// ============================================================================
// Percentage Split
// Independent rounding per participant, drift corrected on the first
// ============================================================================

use super::errors::{SplitError, SplitResult};
use super::residual::apply_residual;
use crate::domain::request::check_percentages;
use crate::domain::SplitType;
use crate::interfaces::SplitAllocator;
use crate::numeric::{MinorUnits, NumericError};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Percentage split allocator
///
/// Each share is `round(total × p / 100)`, half away from zero. Rounding
/// each entry on its own can leave the sum a few units away from the total;
/// the whole difference, positive or negative, is added to the first
/// participant.
///
/// # Example
/// ```text
/// Total: 1.00, percentages: [33.5, 33.5, 33]
///   raw shares = [34, 34, 33] -> sum 101, drift -1
///   shares     = [33, 34, 33]
/// ```
pub struct PercentageSplit {
    pub percentages: Vec<Decimal>,
}

impl PercentageSplit {
    pub fn new(percentages: Vec<Decimal>) -> Self {
        Self { percentages }
    }
}

impl SplitAllocator for PercentageSplit {
    fn allocate(&self, total: MinorUnits) -> SplitResult<Vec<MinorUnits>> {
        split_by_percentage(total, &self.percentages)
    }

    fn name(&self) -> &str {
        "Percentage"
    }

    fn participant_count(&self) -> usize {
        self.percentages.len()
    }

    fn split_type(&self) -> SplitType {
        SplitType::Percentage
    }
}

/// Split `total` by percentages, correcting rounding drift on the first
/// participant.
///
/// Percentages do not have to add up to 100; whatever they leave
/// unallocated (or over-allocate) also lands on the first participant.
///
/// # Errors
/// - `InvalidParticipantCount` for an empty list
/// - `InvalidPercentage` for a value outside `[0, 100]`
/// - `Numeric` if the correction overflows
pub fn split_by_percentage(
    total: MinorUnits,
    percentages: &[Decimal],
) -> SplitResult<Vec<MinorUnits>> {
    if percentages.is_empty() {
        return Err(SplitError::InvalidParticipantCount { count: 0 });
    }
    check_percentages(percentages)?;

    let total_dec = Decimal::from(total.raw_value());
    let mut shares = percentages
        .iter()
        .map(|p| percentage_of(total_dec, *p))
        .collect::<SplitResult<Vec<_>>>()?;

    apply_residual(total, &mut shares)?;
    Ok(shares)
}

/// `round(total × p / 100)` for a single participant.
fn percentage_of(total: Decimal, percentage: Decimal) -> SplitResult<MinorUnits> {
    let share = total
        .checked_mul(percentage)
        .and_then(|v| v.checked_div(Decimal::ONE_HUNDRED))
        .ok_or(NumericError::Overflow)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    // |p| <= 100, so the share is never larger than the total
    share
        .to_i64()
        .map(MinorUnits::from_raw)
        .ok_or(SplitError::Numeric(NumericError::Overflow))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pct(values: &[i64]) -> Vec<Decimal> {
        values.iter().map(|v| Decimal::from(*v)).collect()
    }

    fn raw(shares: &[MinorUnits]) -> Vec<i64> {
        shares.iter().map(|s| s.raw_value()).collect()
    }

    #[test]
    fn test_even_percentages() {
        let shares = split_by_percentage(MinorUnits::from_raw(1000), &pct(&[50, 50])).unwrap();
        assert_eq!(raw(&shares), vec![500, 500]);
    }

    #[test]
    fn test_unequal_percentages() {
        let shares = split_by_percentage(MinorUnits::from_raw(1000), &pct(&[70, 30])).unwrap();
        assert_eq!(raw(&shares), vec![700, 300]);
    }

    #[test]
    fn test_thirds_conserve_total() {
        let shares =
            split_by_percentage(MinorUnits::from_raw(100), &pct(&[33, 33, 34])).unwrap();
        assert_eq!(raw(&shares).iter().sum::<i64>(), 100);
    }

    #[test]
    fn test_positive_drift_goes_to_first() {
        // 33.33% of 10.00 = 333.3 -> 333 each, sum 999
        let third = Decimal::new(3333, 2);
        let shares = split_by_percentage(
            MinorUnits::from_raw(1000),
            &[third, third, Decimal::new(3334, 2)],
        )
        .unwrap();
        assert_eq!(raw(&shares), vec![334, 333, 333]);
        assert_eq!(raw(&shares).iter().sum::<i64>(), 1000);
    }

    #[test]
    fn test_negative_drift_goes_to_first() {
        let half = Decimal::new(335, 1);
        let shares = split_by_percentage(
            MinorUnits::from_raw(100),
            &[half, half, Decimal::from(33)],
        )
        .unwrap();
        assert_eq!(raw(&shares), vec![33, 34, 33]);
    }

    #[test]
    fn test_percentages_short_of_hundred() {
        let shares = split_by_percentage(MinorUnits::from_raw(1000), &pct(&[25, 25])).unwrap();
        assert_eq!(raw(&shares), vec![750, 250]);
    }

    #[test]
    fn test_negative_total() {
        let shares = split_by_percentage(MinorUnits::from_raw(-1000), &pct(&[70, 30])).unwrap();
        assert_eq!(raw(&shares), vec![-700, -300]);
    }

    #[test]
    fn test_large_total() {
        let shares = split_by_percentage(MinorUnits::MAX, &pct(&[50, 50])).unwrap();
        assert_eq!(
            MinorUnits::checked_sum(shares.iter().copied()),
            Ok(MinorUnits::MAX)
        );
    }

    #[test]
    fn test_rejects_empty_and_out_of_range() {
        assert_eq!(
            split_by_percentage(MinorUnits::from_raw(1000), &[]),
            Err(SplitError::InvalidParticipantCount { count: 0 })
        );
        assert_eq!(
            split_by_percentage(MinorUnits::from_raw(1000), &pct(&[50, -10])),
            Err(SplitError::InvalidPercentage {
                index: 1,
                value: Decimal::from(-10)
            })
        );
    }
}
