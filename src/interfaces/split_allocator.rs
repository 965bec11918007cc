// ============================================================================
// Split Allocator Interface
// Defines the contract for pluggable split strategies
// ============================================================================

use crate::domain::SplitType;
use crate::engine::SplitResult;
use crate::numeric::MinorUnits;

/// Strategy pattern interface for split allocators
/// Implementations: EqualSplit, PercentageSplit, ShareSplit, ExactSplit
pub trait SplitAllocator: Send + Sync {
    /// Distribute `total` over the participants this allocator was built for
    ///
    /// # Returns
    /// One share per participant in input order, adding up to `total`
    fn allocate(&self, total: MinorUnits) -> SplitResult<Vec<MinorUnits>>;

    /// Get the allocator name for logging
    fn name(&self) -> &str;

    /// Number of shares `allocate` produces
    fn participant_count(&self) -> usize;

    /// Split type recorded on the resulting allocation
    fn split_type(&self) -> SplitType;

    /// Check the conservation invariant: shares add up to exactly `total`
    fn is_balanced(&self, total: MinorUnits, shares: &[MinorUnits]) -> bool {
        MinorUnits::checked_sum(shares.iter().copied()) == Ok(total)
    }
}
