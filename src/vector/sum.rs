//! Reduction of a sequence to its sum.

use crate::error::{KernelError, Result};
use crate::lane::Lane;
use crate::lane::batch::load_batch;

/// Sums `values` through a register-sized accumulator.
///
/// Each batch is added into the accumulator with the same lane add used by
/// [`crate::vector::add`]. For integer kinds every accumulation is checked
/// with the sign-bit test. The accumulator lanes are then added in a wider
/// type, so the final reduction fails only when the total itself does not
/// fit. Float kinds are never checked.
///
/// An empty input returns zero.
///
/// # Example
///
/// ```
/// use lanewise::vector::sum::sum;
///
/// assert_eq!(sum(&[1, 2, 3, 4, 5]).unwrap(), 15);
/// assert!(sum(&[i32::MAX, 1]).is_err());
/// ```
///
/// # Errors
///
/// `Overflow` if an integer sum does not fit the lane kind.
#[tracing::instrument(level = "trace", skip_all, fields(kind = %T::KIND, len = values.len()))]
pub fn sum<T: Lane>(values: &[T]) -> Result<T> {
    if values.is_empty() {
        return Ok(T::ZERO);
    }

    let overflow = || KernelError::Overflow {
        kind: T::KIND,
        operation: "sum",
    };

    let mut acc = T::Batch::default();
    for offset in (0..values.len()).step_by(T::BATCH) {
        let batch = load_batch(values, offset);
        let next = T::add_batch(acc, batch);
        if T::batch_overflowed(&next, &acc, &batch) {
            tracing::debug!(offset, "accumulator overflow");
            return Err(overflow());
        }
        acc = next;
    }

    horizontal_sum::<T>(&acc).ok_or_else(|| {
        tracing::debug!("overflow while reducing accumulator lanes");
        overflow()
    })
}

/// Adds up the lanes of a batch. `None` when an integer total does not fit.
pub fn horizontal_sum<T: Lane>(batch: &T::Batch) -> Option<T> {
    T::reduce_lanes(batch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lane::LaneKind;

    #[test]
    fn empty_is_zero() {
        assert_eq!(sum::<i32>(&[]).unwrap(), 0);
        assert_eq!(sum::<f64>(&[]).unwrap(), 0.0);
    }

    #[test]
    fn sums_with_tail() {
        assert_eq!(sum(&[1i64, 2, 3]).unwrap(), 6);
        assert_eq!(sum(&[0.5f32, 0.25, 0.125, 0.0625, 1.0]).unwrap(), 1.9375);
    }

    #[test]
    fn lane_overflow_fails() {
        // Same lane twice: lane 0 accumulates MAX then 1.
        let values = [i32::MAX, 0, 0, 0, 1];
        assert_eq!(
            sum(&values),
            Err(KernelError::Overflow {
                kind: LaneKind::Int32,
                operation: "sum"
            })
        );
    }

    #[test]
    fn horizontal_overflow_fails() {
        assert!(sum(&[i32::MAX, 1]).is_err());
        assert!(sum(&[i64::MIN, -1]).is_err());
    }

    #[test]
    fn lane_order_does_not_overflow_a_fitting_total() {
        // Lane 1 holds 1 and lane 0 holds MAX; lane 2 brings the total back.
        let values = [0, 1, -5, 0, i32::MAX, 0, 0, 0];
        assert_eq!(sum(&values).unwrap(), i32::MAX - 4);
    }

    #[test]
    fn negative_totals_are_fine() {
        assert_eq!(sum(&[i32::MIN, 1, 2, 3, 4]).unwrap(), i32::MIN + 10);
    }

    #[test]
    fn floats_never_overflow() {
        assert!(sum(&[f32::MAX, f32::MAX]).unwrap().is_infinite());
    }
}
