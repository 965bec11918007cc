// ============================================================================
// Split Type
// ============================================================================

use crate::engine::SplitError;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How an expense is divided, using the backend's names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum SplitType {
    /// Same amount for everyone, remainder to the first participants
    Equal,
    /// Per-participant percentage of the total
    Percentage,
    /// Proportional to integer share weights
    Share,
    /// Amounts typed in by the user, must add up to the total
    Exact,
    /// Manual correction entry
    Adjustment,
    /// Debt repayment between two users
    Settlement,
    /// Counterpart entry of a converted expense
    CurrencyConversion,
}

impl SplitType {
    pub const fn as_str(self) -> &'static str {
        match self {
            SplitType::Equal => "EQUAL",
            SplitType::Percentage => "PERCENTAGE",
            SplitType::Share => "SHARE",
            SplitType::Exact => "EXACT",
            SplitType::Adjustment => "ADJUSTMENT",
            SplitType::Settlement => "SETTLEMENT",
            SplitType::CurrencyConversion => "CURRENCY_CONVERSION",
        }
    }

    /// Whether the amounts come from the caller rather than being computed.
    pub const fn takes_exact_amounts(self) -> bool {
        matches!(
            self,
            SplitType::Exact
                | SplitType::Adjustment
                | SplitType::Settlement
                | SplitType::CurrencyConversion
        )
    }
}

impl FromStr for SplitType {
    type Err = SplitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EQUAL" => Ok(SplitType::Equal),
            "PERCENTAGE" => Ok(SplitType::Percentage),
            "SHARE" => Ok(SplitType::Share),
            "EXACT" => Ok(SplitType::Exact),
            "ADJUSTMENT" => Ok(SplitType::Adjustment),
            "SETTLEMENT" => Ok(SplitType::Settlement),
            "CURRENCY_CONVERSION" => Ok(SplitType::CurrencyConversion),
            other => Err(SplitError::UnknownSplitType(other.to_string())),
        }
    }
}

impl fmt::Display for SplitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for split_type in [
            SplitType::Equal,
            SplitType::Percentage,
            SplitType::Share,
            SplitType::Exact,
            SplitType::Adjustment,
            SplitType::Settlement,
            SplitType::CurrencyConversion,
        ] {
            assert_eq!(split_type.as_str().parse::<SplitType>(), Ok(split_type));
        }
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(
            "equal".parse::<SplitType>(),
            Err(SplitError::UnknownSplitType("equal".to_string()))
        );
    }

    #[test]
    fn test_exact_amount_types() {
        assert!(SplitType::Settlement.takes_exact_amounts());
        assert!(SplitType::Exact.takes_exact_amounts());
        assert!(!SplitType::Equal.takes_exact_amounts());
        assert!(!SplitType::Share.takes_exact_amounts());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&SplitType::CurrencyConversion).unwrap();
        assert_eq!(json, "\"CURRENCY_CONVERSION\"");
        assert_eq!(serde_json::from_str::<SplitType>("\"SHARE\"").unwrap(), SplitType::Share);
    }
}
