// ============================================================================
// Numeric Module
// Exact minor-unit arithmetic for money
// ============================================================================
//
// This module provides:
// - MinorUnits: i64 count of the smallest currency unit (always ×100)
// - BigMath: sign, extrema and rounded integer division
// - NumericError: Error types for arithmetic operations
//
// Design principles:
// - No floating-point arithmetic on stored amounts
// - All fallible arithmetic returns Result (no panics)
// - Overflow is rejected, never wrapped or saturated silently

mod big_math;
mod errors;
mod minor_units;

pub use big_math::BigMath;
pub use errors::{NumericError, NumericResult};
pub use minor_units::{to_minor_units, MinorUnits};

pub(crate) use errors::out_of_range;
