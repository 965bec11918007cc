// ============================================================================
// Minor-Unit Amount
// Exact integer representation of money in the smallest currency unit
// ============================================================================

use super::errors::{out_of_range, NumericError, NumericResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Monetary amount stored as an integer count of minor units.
///
/// Every currency is treated as having two fractional digits, so the
/// stored value is `major × 100` (cents for USD, "centi-yen" for JPY).
///
/// # Value Range
/// - Minimum: -92,233,720,368,547,758.08
/// - Maximum: +92,233,720,368,547,758.07
///
/// # Example
/// ```
/// use split_engine::numeric::MinorUnits;
///
/// let price = MinorUnits::from_major(12).unwrap();
/// let tip: MinorUnits = "1.50".parse().unwrap();
/// assert_eq!(price.checked_add(tip).unwrap().raw_value(), 1350);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[repr(transparent)]
pub struct MinorUnits(i64);

impl MinorUnits {
    /// Minor units per major unit
    pub const SCALE: i64 = 100;

    /// Number of fractional digits rendered
    pub const DECIMALS: u32 = 2;

    /// Zero value
    pub const ZERO: Self = Self(0);

    /// Maximum representable value
    pub const MAX: Self = Self(i64::MAX);

    /// Minimum representable value
    pub const MIN: Self = Self(i64::MIN);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a raw minor-unit count.
    #[inline]
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Create from a whole number of major units.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the value is too large to represent.
    #[inline]
    pub fn from_major(value: i64) -> NumericResult<Self> {
        value
            .checked_mul(Self::SCALE)
            .map(Self)
            .ok_or_else(|| out_of_range(value as i128))
    }

    /// Convert from a major-unit `Decimal`, rounding half away from zero
    /// to the nearest minor unit.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the value does not fit in i64.
    pub fn from_decimal(d: Decimal) -> NumericResult<Self> {
        let out_of_range = || {
            if d.is_sign_negative() {
                NumericError::Underflow
            } else {
                NumericError::Overflow
            }
        };

        let scaled = d
            .checked_mul(Decimal::ONE_HUNDRED)
            .ok_or_else(out_of_range)?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

        scaled.to_i64().map(Self).ok_or_else(out_of_range)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the raw minor-unit count.
    #[inline]
    pub const fn raw_value(self) -> i64 {
        self.0
    }

    /// Get the major-unit part (truncated toward zero).
    #[inline]
    pub const fn major_part(self) -> i64 {
        self.0 / Self::SCALE
    }

    /// Get the minor-unit part as a positive value in `0..100`.
    #[inline]
    pub const fn minor_part(self) -> u64 {
        (self.0 % Self::SCALE).unsigned_abs()
    }

    /// Check if value is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Check if value is positive.
    #[inline]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Check if value is negative.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// -1, 0 or 1 depending on the sign.
    #[inline]
    pub const fn signum(self) -> i64 {
        self.0.signum()
    }

    /// Convert to a major-unit `Decimal` with scale 2.
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, Self::DECIMALS)
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Get absolute value.
    ///
    /// # Errors
    /// Returns `Overflow` for `MIN`, whose magnitude is not representable.
    #[inline]
    pub fn checked_abs(self) -> NumericResult<Self> {
        self.0.checked_abs().map(Self).ok_or(NumericError::Overflow)
    }

    /// Checked negation.
    #[inline]
    pub fn checked_neg(self) -> NumericResult<Self> {
        self.0.checked_neg().map(Self).ok_or(NumericError::Overflow)
    }

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        self.0.checked_add(rhs.0).map(Self).ok_or_else(|| {
            if rhs.0 > 0 {
                NumericError::Overflow
            } else {
                NumericError::Underflow
            }
        })
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        self.0.checked_sub(rhs.0).map(Self).ok_or_else(|| {
            if rhs.0 < 0 {
                NumericError::Overflow
            } else {
                NumericError::Underflow
            }
        })
    }

    /// Multiply by an integer.
    #[inline]
    pub fn checked_mul_int(self, rhs: i64) -> NumericResult<Self> {
        self.0
            .checked_mul(rhs)
            .map(Self)
            .ok_or_else(|| out_of_range(self.0 as i128 * rhs as i128))
    }

    /// Sum a sequence of amounts without intermediate overflow.
    ///
    /// The running total is kept in i128, so only a final result outside
    /// the i64 range is an error.
    pub fn checked_sum<I>(amounts: I) -> NumericResult<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        let total: i128 = amounts.into_iter().map(|a| a.0 as i128).sum();
        i64::try_from(total)
            .map(Self)
            .map_err(|_| out_of_range(total))
    }
}

// ============================================================================
// Conversion from floating point (trusted numeric input)
// ============================================================================

/// Convert a major-unit number to minor units: `round(value × 100)`,
/// ties away from zero.
///
/// # Errors
/// - `InvalidInput` for NaN or infinite input
/// - `Overflow` / `Underflow` if the result does not fit in i64
///
/// # Example
/// ```
/// use split_engine::numeric::to_minor_units;
///
/// assert_eq!(to_minor_units(99.99).unwrap().raw_value(), 9999);
/// assert_eq!(to_minor_units(-12.5).unwrap().raw_value(), -1250);
/// ```
pub fn to_minor_units(value: f64) -> NumericResult<MinorUnits> {
    // 2^63; i64::MIN is exactly -2^63, i64::MAX rounds up to 2^63 as f64
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    if !value.is_finite() {
        return Err(NumericError::InvalidInput);
    }

    let scaled = (value * MinorUnits::SCALE as f64).round();
    if scaled >= LIMIT {
        Err(NumericError::Overflow)
    } else if scaled < -LIMIT {
        Err(NumericError::Underflow)
    } else {
        Ok(MinorUnits(scaled as i64))
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl From<MinorUnits> for i64 {
    #[inline]
    fn from(value: MinorUnits) -> Self {
        value.0
    }
}

impl Neg for MinorUnits {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

// Infallible Add/Sub panic on overflow like the primitive ops; use checked_* on untrusted values
impl Add for MinorUnits {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for MinorUnits {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sum for MinorUnits {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a MinorUnits> for MinorUnits {
    fn sum<I: Iterator<Item = &'a MinorUnits>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for MinorUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MinorUnits({}, raw={})", self, self.0)
    }
}

/// Canonical plain form: `"1234.50"`, `"-0.05"`. No grouping, no symbol.
impl fmt::Display for MinorUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        write!(
            f,
            "{}{}.{:02}",
            sign,
            magnitude / Self::SCALE as u64,
            magnitude % Self::SCALE as u64
        )
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for MinorUnits {
    type Err = NumericError;

    /// Strictly parse the canonical plain form.
    ///
    /// # Examples
    /// - "123" -> 12300
    /// - "123.4" -> 12340
    /// - "-0.01" -> -1
    ///
    /// Symbols, grouping and anything else are rejected; see
    /// `CurrencyFormatter::parse` for the lenient user-input parser.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let (is_negative, s) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (int_str, frac_str) = match s.split_once('.') {
            Some((int_str, frac_str)) => (int_str, frac_str),
            None => (s, ""),
        };

        if int_str.is_empty() && frac_str.is_empty() {
            return Err(NumericError::InvalidInput);
        }
        if !int_str.bytes().all(|b| b.is_ascii_digit())
            || !frac_str.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(NumericError::InvalidInput);
        }
        if frac_str.len() > Self::DECIMALS as usize {
            return Err(NumericError::PrecisionLoss);
        }

        let int_val: i128 = if int_str.is_empty() {
            0
        } else {
            int_str.parse().map_err(|_| NumericError::Overflow)?
        };
        let frac_val: i128 = if frac_str.is_empty() {
            0
        } else {
            // Pad "5" to "50"
            format!("{:0<2}", frac_str)
                .parse()
                .map_err(|_| NumericError::InvalidInput)?
        };

        let magnitude = int_val
            .checked_mul(Self::SCALE as i128)
            .and_then(|v| v.checked_add(frac_val))
            .ok_or(NumericError::Overflow)?;
        let raw = if is_negative { -magnitude } else { magnitude };

        i64::try_from(raw).map(Self).map_err(|_| out_of_range(raw))
    }
}

// ============================================================================
// Tests
// ============================================================================
