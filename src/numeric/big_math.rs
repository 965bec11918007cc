// ============================================================================
// Integer Math Helpers
// Sign, extrema and rounded division over minor-unit integers
// ============================================================================

use super::errors::{out_of_range, NumericError, NumericResult};

/// Integer helpers used by the split allocators.
///
/// All operations are total except `round_div` by zero, which is reported
/// as `DivisionByZero` instead of producing a non-finite value.
pub struct BigMath;

impl BigMath {
    /// Absolute value.
    ///
    /// # Errors
    /// Returns `Overflow` for `i64::MIN`.
    #[inline]
    pub fn abs(n: i64) -> NumericResult<i64> {
        n.checked_abs().ok_or(NumericError::Overflow)
    }

    /// Sign of `n`: -1, 0 or 1.
    #[inline]
    pub const fn sign(n: i64) -> i64 {
        n.signum()
    }

    /// Smallest value of the list, `None` when empty.
    #[inline]
    pub fn min(values: &[i64]) -> Option<i64> {
        values.iter().copied().min()
    }

    /// Largest value of the list, `None` when empty.
    #[inline]
    pub fn max(values: &[i64]) -> Option<i64> {
        values.iter().copied().max()
    }

    /// Nearest integer to `dividend / divisor`, ties away from zero.
    ///
    /// # Errors
    /// - `DivisionByZero` if `divisor` is zero
    /// - `Overflow` / `Underflow` if the quotient does not fit in i64
    #[inline]
    pub fn round_div(dividend: i64, divisor: i64) -> NumericResult<i64> {
        let q = Self::round_div_wide(dividend as i128, divisor as i128)?;
        i64::try_from(q).map_err(|_| out_of_range(q))
    }

    /// `round_div` over i128 operands, for products of two i64 values.
    pub(crate) fn round_div_wide(dividend: i128, divisor: i128) -> NumericResult<i128> {
        if divisor == 0 {
            return Err(NumericError::DivisionByZero);
        }

        let quotient = dividend / divisor;
        let remainder = dividend % divisor;

        // |remainder| * 2 >= |divisor| means the fraction is at least one half
        let r = remainder.unsigned_abs();
        let d = divisor.unsigned_abs();
        if r >= d - r {
            let away = if (dividend < 0) == (divisor < 0) { 1 } else { -1 };
            Ok(quotient + away)
        } else {
            Ok(quotient)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abs() {
        assert_eq!(BigMath::abs(-100), Ok(100));
        assert_eq!(BigMath::abs(100), Ok(100));
        assert_eq!(BigMath::abs(0), Ok(0));
        assert_eq!(BigMath::abs(i64::MIN), Err(NumericError::Overflow));
    }

    #[test]
    fn test_sign() {
        assert_eq!(BigMath::sign(-100), -1);
        assert_eq!(BigMath::sign(100), 1);
        assert_eq!(BigMath::sign(0), 0);
    }

    #[test]
    fn test_min_max() {
        assert_eq!(BigMath::min(&[1, 2, 3]), Some(1));
        assert_eq!(BigMath::min(&[-5, 0, 5]), Some(-5));
        assert_eq!(BigMath::max(&[1, 2, 3]), Some(3));
        assert_eq!(BigMath::max(&[-5, 0, 5]), Some(5));
        assert_eq!(BigMath::min(&[]), None);
        assert_eq!(BigMath::max(&[]), None);
    }

    #[test]
    fn test_round_div() {
        assert_eq!(BigMath::round_div(10, 3), Ok(3));
        assert_eq!(BigMath::round_div(11, 3), Ok(4));
        assert_eq!(BigMath::round_div(100, 4), Ok(25));
    }

    #[test]
    fn test_round_div_ties() {
        assert_eq!(BigMath::round_div(5, 2), Ok(3));
        assert_eq!(BigMath::round_div(-5, 2), Ok(-3));
        assert_eq!(BigMath::round_div(5, -2), Ok(-3));
        assert_eq!(BigMath::round_div(-5, -2), Ok(3));
        assert_eq!(BigMath::round_div(7, 4), Ok(2));
        assert_eq!(BigMath::round_div(-7, 4), Ok(-2));
    }

    #[test]
    fn test_round_div_by_zero() {
        assert_eq!(BigMath::round_div(10, 0), Err(NumericError::DivisionByZero));
    }

    #[test]
    fn test_round_div_overflow() {
        assert_eq!(BigMath::round_div(i64::MIN, -1), Err(NumericError::Overflow));
        assert_eq!(
            BigMath::round_div_wide(i64::MAX as i128 * 3, 3),
            Ok(i64::MAX as i128)
        );
    }
}
