// ============================================================================
// Residual Correction
// ============================================================================

use super::errors::{SplitError, SplitResult};
use crate::numeric::{out_of_range, MinorUnits};

/// Add `total - sum(shares)` to the first share so the shares add up to
/// `total` exactly.
pub(crate) fn apply_residual(total: MinorUnits, shares: &mut [MinorUnits]) -> SplitResult<()> {
    let allocated: i128 = shares.iter().map(|s| s.raw_value() as i128).sum();
    let drift = total.raw_value() as i128 - allocated;
    if drift == 0 {
        return Ok(());
    }

    let first = shares
        .first_mut()
        .ok_or(SplitError::InvalidParticipantCount { count: 0 })?;
    let corrected = first.raw_value() as i128 + drift;
    *first = i64::try_from(corrected)
        .map(MinorUnits::from_raw)
        .map_err(|_| out_of_range(corrected))?;

    Ok(())
}
