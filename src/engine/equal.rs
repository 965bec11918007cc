// ============================================================================
// Equal Split
// Same share for everyone, remainder front-loaded
// ============================================================================

use super::errors::{SplitError, SplitResult};
use crate::domain::SplitType;
use crate::interfaces::SplitAllocator;
use crate::numeric::{out_of_range, MinorUnits};

/// Equal split allocator
///
/// Every participant gets `floor(|total| / n)`; the `|total| mod n`
/// leftover minor units go one each to the first participants in input
/// order. A negative total is split by magnitude and every share negated,
/// so the extra unit is also front-loaded.
///
/// # Example
/// ```text
/// Total: 10.00, participants: 3
///   base = 333, remainder = 1
///   shares = [334, 333, 333]
/// ```
pub struct EqualSplit {
    pub participants: usize,
}

impl EqualSplit {
    pub fn new(participants: usize) -> Self {
        Self { participants }
    }
}

impl SplitAllocator for EqualSplit {
    fn allocate(&self, total: MinorUnits) -> SplitResult<Vec<MinorUnits>> {
        split_equal(total, self.participants)
    }

    fn name(&self) -> &str {
        "Equal"
    }

    fn participant_count(&self) -> usize {
        self.participants
    }

    fn split_type(&self) -> SplitType {
        SplitType::Equal
    }
}

/// Split `total` into `participants` shares differing by at most one
/// minor unit, larger shares first.
///
/// # Errors
/// `InvalidParticipantCount` when `participants` is zero.
pub fn split_equal(total: MinorUnits, participants: usize) -> SplitResult<Vec<MinorUnits>> {
    if participants == 0 {
        return Err(SplitError::InvalidParticipantCount { count: 0 });
    }

    // i128 so that |i64::MIN| is representable
    let raw = total.raw_value() as i128;
    let sign = raw.signum();
    let magnitude = raw.abs();
    let n = participants as i128;
    let base = magnitude / n;
    let remainder = magnitude % n;

    (0..participants)
        .map(|i| {
            let extra = if (i as i128) < remainder { 1 } else { 0 };
            let share = sign * (base + extra);
            i64::try_from(share)
                .map(MinorUnits::from_raw)
                .map_err(|_| SplitError::from(out_of_range(share)))
        })
        .collect()
}
