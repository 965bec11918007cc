// ============================================================================
// Allocation Domain Model
// ============================================================================

use super::SplitType;
use crate::numeric::{BigMath, MinorUnits};
use std::fmt;
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Value Objects
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SplitId(Uuid);

impl SplitId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SplitId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SplitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A computed split: one share per participant, in request order, adding
/// up exactly to `total`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Allocation {
    /// Identifier used to correlate engine events
    pub split_id: SplitId,

    pub split_type: SplitType,

    pub total: MinorUnits,

    pub shares: Vec<MinorUnits>,
}

impl Allocation {
    pub fn new(
        split_id: SplitId,
        split_type: SplitType,
        total: MinorUnits,
        shares: Vec<MinorUnits>,
    ) -> Self {
        Self {
            split_id,
            split_type,
            total,
            shares,
        }
    }

    pub fn participant_count(&self) -> usize {
        self.shares.len()
    }

    /// Largest minus smallest share; 0 or 1 for an equal split of a
    /// non-negative total.
    pub fn spread(&self) -> i64 {
        let raw: Vec<i64> = self.shares.iter().map(|s| s.raw_value()).collect();
        match (BigMath::max(&raw), BigMath::min(&raw)) {
            (Some(max), Some(min)) => max.saturating_sub(min),
            _ => 0,
        }
    }
}
