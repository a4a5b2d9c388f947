use std::cmp::Ordering;

use crate::error::SemanticError;

/// Truncates an `f64` toward zero and converts it to `i64`.
///
/// Unlike a plain `as` cast, non-finite and out-of-range values are rejected
/// instead of saturating.
///
/// ## Errors
/// Returns `SemanticError::ArithmeticOverflow` if the value is NaN, infinite
/// or outside the `i64` range after truncation.
///
/// ## Example
/// ```
/// use nahw::{error::SemanticError, util::num::f64_trunc_to_i64_checked};
///
/// assert_eq!(f64_trunc_to_i64_checked(2.5, 1).unwrap(), 2);
/// assert_eq!(f64_trunc_to_i64_checked(-2.5, 1).unwrap(), -2);
///
/// let err = f64_trunc_to_i64_checked(1e20, 7).unwrap_err();
/// assert_eq!(err, SemanticError::ArithmeticOverflow { line: 7 });
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_trunc_to_i64_checked(value: f64, line: usize) -> Result<i64, SemanticError> {
    let truncated = value.trunc();
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range.
    if !truncated.is_finite() || truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return Err(SemanticError::ArithmeticOverflow { line });
    }
    Ok(truncated as i64)
}

/// Orders an `i64` against an `f64` without rounding the whole number.
///
/// A plain `as f64` cast loses precision above `2^53`; here the real is split
/// into its whole and fractional parts instead. Returns `None` only when the
/// real is NaN.
///
/// ## Example
/// ```
/// use std::cmp::Ordering;
///
/// use nahw::util::num::cmp_i64_f64;
///
/// assert_eq!(cmp_i64_f64(2, 2.5), Some(Ordering::Less));
/// assert_eq!(cmp_i64_f64(4, 4.0), Some(Ordering::Equal));
/// // 2^53 + 1 rounds to 2^53 as a real but still compares greater.
/// assert_eq!(cmp_i64_f64(9_007_199_254_740_993, 9_007_199_254_740_992.0),
///            Some(Ordering::Greater));
/// assert_eq!(cmp_i64_f64(0, f64::NAN), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn cmp_i64_f64(whole: i64, real: f64) -> Option<Ordering> {
    if real.is_nan() {
        return None;
    }
    if real >= i64::MAX as f64 {
        return Some(Ordering::Less);
    }
    if real < i64::MIN as f64 {
        return Some(Ordering::Greater);
    }

    let truncated = real.trunc();
    match whole.cmp(&(truncated as i64)) {
        Ordering::Equal => 0.0.partial_cmp(&(real - truncated)),
        unequal => Some(unequal),
    }
}
