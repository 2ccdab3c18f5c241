use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Truncates an `f64` toward zero and converts it to `i64`.
///
/// ## Errors
/// Returns `RuntimeError::Overflow` if the value is NaN, infinite, or outside
/// the `i64` range after truncation.
///
/// ## Example
/// ```
/// use hrl::{error::RuntimeError, util::num::f64_to_i64_truncated};
///
/// assert_eq!(f64_to_i64_truncated(2.9, 1).unwrap(), 2);
/// assert_eq!(f64_to_i64_truncated(-2.9, 1).unwrap(), -2);
/// assert!(matches!(f64_to_i64_truncated(f64::NAN, 3),
///                  Err(RuntimeError::Overflow { line: 3 })));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_truncated(value: f64, line: usize) -> EvalResult<i64> {
    let truncated = value.trunc();
    // i64::MAX as f64 rounds up to 2^63, which is already out of range.
    if !truncated.is_finite() || truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return Err(RuntimeError::Overflow { line });
    }
    Ok(truncated as i64)
}

/// Converts an HRL index into a `usize` position inside an array of `len`
/// elements.
///
/// ## Errors
/// Returns `RuntimeError::IndexOutOfBounds` for negative indices and indices
/// at or past `len`.
///
/// ## Example
/// ```
/// use hrl::util::num::checked_index;
///
/// assert_eq!(checked_index(1, 3, 1).unwrap(), 1);
/// assert!(checked_index(3, 3, 1).is_err());
/// assert!(checked_index(-1, 3, 1).is_err());
/// ```
pub fn checked_index(index: i64, len: usize, line: usize) -> EvalResult<usize> {
    usize::try_from(index).ok()
                          .filter(|position| *position < len)
                          .ok_or(RuntimeError::IndexOutOfBounds { index, len, line })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_goes_toward_zero() {
        assert_eq!(f64_to_i64_truncated(7.99, 1).unwrap(), 7);
        assert_eq!(f64_to_i64_truncated(-7.99, 1).unwrap(), -7);
        assert_eq!(f64_to_i64_truncated(0.0, 1).unwrap(), 0);
    }

    #[test]
    fn truncation_rejects_out_of_range() {
        assert!(f64_to_i64_truncated(f64::INFINITY, 1).is_err());
        assert!(f64_to_i64_truncated(1e300, 1).is_err());
        assert!(f64_to_i64_truncated(-1e300, 1).is_err());
    }

    #[test]
    fn index_bounds() {
        assert_eq!(checked_index(0, 1, 1).unwrap(), 0);
        assert_eq!(checked_index(5, 0, 9).unwrap_err(),
                   RuntimeError::IndexOutOfBounds { index: 5,
                                                    len:   0,
                                                    line:  9, });
    }
}
