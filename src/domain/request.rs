// ============================================================================
// Split Request
// A total plus the per-participant weights of one strategy
// ============================================================================

use super::SplitType;
use crate::engine::{SplitError, SplitResult};
use crate::numeric::MinorUnits;
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Participant weights, one entry per participant in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ParticipantWeights {
    /// Unit weight for each of `n` participants
    Equal(usize),
    /// Percentages in `[0, 100]`, normally adding up to 100
    Percentage(Vec<Decimal>),
    /// Share counts, at least one non-zero
    Shares(Vec<u64>),
    /// Caller-supplied amounts that must add up to the total
    Exact(Vec<MinorUnits>),
}

impl ParticipantWeights {
    pub fn len(&self) -> usize {
        match self {
            ParticipantWeights::Equal(count) => *count,
            ParticipantWeights::Percentage(percentages) => percentages.len(),
            ParticipantWeights::Shares(shares) => shares.len(),
            ParticipantWeights::Exact(amounts) => amounts.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The split type these weights imply.
    pub fn default_split_type(&self) -> SplitType {
        match self {
            ParticipantWeights::Equal(_) => SplitType::Equal,
            ParticipantWeights::Percentage(_) => SplitType::Percentage,
            ParticipantWeights::Shares(_) => SplitType::Share,
            ParticipantWeights::Exact(_) => SplitType::Exact,
        }
    }
}

/// Input to a split: the total and how to weigh each participant.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SplitRequest {
    pub total: MinorUnits,
    pub split_type: SplitType,
    pub weights: ParticipantWeights,
}

impl SplitRequest {
    /// Request whose split type follows from its weights.
    pub fn new(total: MinorUnits, weights: ParticipantWeights) -> Self {
        Self {
            total,
            split_type: weights.default_split_type(),
            weights,
        }
    }

    pub fn equal(total: MinorUnits, participants: usize) -> Self {
        Self::new(total, ParticipantWeights::Equal(participants))
    }

    pub fn percentage(total: MinorUnits, percentages: Vec<Decimal>) -> Self {
        Self::new(total, ParticipantWeights::Percentage(percentages))
    }

    pub fn shares(total: MinorUnits, shares: Vec<u64>) -> Self {
        Self::new(total, ParticipantWeights::Shares(shares))
    }

    pub fn exact(total: MinorUnits, amounts: Vec<MinorUnits>) -> Self {
        Self::new(total, ParticipantWeights::Exact(amounts))
    }

    /// Exact amounts recorded under another type (settlement, adjustment,
    /// currency conversion).
    pub fn exact_as(split_type: SplitType, total: MinorUnits, amounts: Vec<MinorUnits>) -> Self {
        Self {
            total,
            split_type,
            weights: ParticipantWeights::Exact(amounts),
        }
    }

    pub fn participant_count(&self) -> usize {
        self.weights.len()
    }

    /// Structural checks that do not depend on rounding: the weights fit
    /// the split type, there is at least one participant where division
    /// is needed, percentages are in range and shares are not all zero.
    ///
    /// Exact amounts are only checked against the total by the allocator.
    pub fn validate(&self) -> SplitResult<()> {
        let compatible = match &self.weights {
            ParticipantWeights::Exact(_) => self.split_type.takes_exact_amounts(),
            weights => weights.default_split_type() == self.split_type,
        };
        if !compatible {
            return Err(SplitError::WeightsMismatch {
                split_type: self.split_type,
            });
        }

        match &self.weights {
            ParticipantWeights::Equal(0) => {
                Err(SplitError::InvalidParticipantCount { count: 0 })
            },
            ParticipantWeights::Percentage(percentages) => {
                if percentages.is_empty() {
                    return Err(SplitError::InvalidParticipantCount { count: 0 });
                }
                check_percentages(percentages)
            },
            ParticipantWeights::Shares(shares) => {
                if shares.is_empty() {
                    return Err(SplitError::InvalidParticipantCount { count: 0 });
                }
                if shares.iter().all(|s| *s == 0) {
                    return Err(SplitError::InvalidShareTotal);
                }
                Ok(())
            },
            _ => Ok(()),
        }
    }
}

/// Every percentage must lie in `[0, 100]`.
pub(crate) fn check_percentages(percentages: &[Decimal]) -> SplitResult<()> {
    match percentages
        .iter()
        .position(|p| *p < Decimal::ZERO || *p > Decimal::ONE_HUNDRED)
    {
        Some(index) => Err(SplitError::InvalidPercentage {
            index,
            value: percentages[index],
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cents(raw: i64) -> MinorUnits {
        MinorUnits::from_raw(raw)
    }

    #[test]
    fn test_split_type_follows_weights() {
        assert_eq!(SplitRequest::equal(cents(100), 2).split_type, SplitType::Equal);
        assert_eq!(
            SplitRequest::shares(cents(100), vec![1, 2]).split_type,
            SplitType::Share
        );
        assert_eq!(
            SplitRequest::exact_as(SplitType::Settlement, cents(100), vec![cents(100)]).split_type,
            SplitType::Settlement
        );
    }

    #[test]
    fn test_validate_accepts_canonical_requests() {
        assert!(SplitRequest::equal(cents(1000), 3).validate().is_ok());
        assert!(SplitRequest::percentage(cents(1000), vec![Decimal::from(70), Decimal::from(30)])
            .validate()
            .is_ok());
        assert!(SplitRequest::shares(cents(1000), vec![2, 1, 0]).validate().is_ok());
        // Mismatched exact amounts are the allocator's concern
        assert!(SplitRequest::exact(cents(1000), vec![cents(1)]).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_participants() {
        assert_eq!(
            SplitRequest::equal(cents(1000), 0).validate(),
            Err(SplitError::InvalidParticipantCount { count: 0 })
        );
        assert_eq!(
            SplitRequest::percentage(cents(1000), vec![]).validate(),
            Err(SplitError::InvalidParticipantCount { count: 0 })
        );
        assert_eq!(
            SplitRequest::shares(cents(1000), vec![]).validate(),
            Err(SplitError::InvalidParticipantCount { count: 0 })
        );
    }

    #[test]
    fn test_validate_rejects_bad_weights() {
        assert_eq!(
            SplitRequest::shares(cents(1000), vec![0, 0]).validate(),
            Err(SplitError::InvalidShareTotal)
        );
        assert_eq!(
            SplitRequest::percentage(cents(1000), vec![Decimal::from(101)]).validate(),
            Err(SplitError::InvalidPercentage {
                index: 0,
                value: Decimal::from(101)
            })
        );
    }

    #[test]
    fn test_validate_rejects_incompatible_split_type() {
        let request = SplitRequest {
            total: cents(1000),
            split_type: SplitType::Settlement,
            weights: ParticipantWeights::Equal(2),
        };
        assert_eq!(
            request.validate(),
            Err(SplitError::WeightsMismatch {
                split_type: SplitType::Settlement
            })
        );
    }
}
