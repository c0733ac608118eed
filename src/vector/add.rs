//! Elementwise add and subtract.

use super::ensure_same_len;
use crate::error::{KernelError, Result};
use crate::lane::Lane;
use crate::lane::batch::{load_batch, push_batch};

/// Which elementwise operation to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
}

impl BinaryOp {
    pub const fn name(self) -> &'static str {
        match self {
            BinaryOp::Add => "add",
            BinaryOp::Sub => "sub",
        }
    }
}

/// What to do when an integer lane overflows during add/subtract.
///
/// Float kinds are never checked, whatever the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Two's-complement wraparound. [`add`] and [`sub`] use this.
    #[default]
    Wrap,
    /// Fail the whole call with `Overflow` if any lane overflows.
    Check,
}

/// `result[i] = left[i] + right[i]`, wrapping on integer overflow.
///
/// # Example
///
/// ```
/// use lanewise::vector::add::add;
///
/// assert_eq!(add(&[i32::MAX, 1], &[1, 1]).unwrap(), vec![i32::MIN, 2]);
/// assert!(add(&[1, 2, 3], &[1]).is_err());
/// ```
pub fn add<T: Lane>(left: &[T], right: &[T]) -> Result<Vec<T>> {
    binary_op(BinaryOp::Add, left, right, OverflowPolicy::Wrap)
}

/// `result[i] = left[i] - right[i]`, wrapping on integer overflow.
pub fn sub<T: Lane>(left: &[T], right: &[T]) -> Result<Vec<T>> {
    binary_op(BinaryOp::Sub, left, right, OverflowPolicy::Wrap)
}

/// Applies `op` lane-wise over two equal-length sequences.
///
/// Works one register batch at a time. With [`OverflowPolicy::Check`], each
/// integer batch goes through the sign-bit test and the first overflowing
/// batch fails the call.
///
/// # Errors
///
/// - `LengthMismatch` if the operands differ in length.
/// - `Overflow` under [`OverflowPolicy::Check`] for integer kinds.
#[tracing::instrument(
    level = "trace",
    skip_all,
    fields(kind = %T::KIND, op = op.name(), len = left.len())
)]
pub fn binary_op<T: Lane>(
    op: BinaryOp,
    left: &[T],
    right: &[T],
    policy: OverflowPolicy,
) -> Result<Vec<T>> {
    ensure_same_len(left, right)?;

    let len = left.len();
    let check = policy == OverflowPolicy::Check && T::KIND.is_integer();
    let mut result = Vec::with_capacity(len);

    for offset in (0..len).step_by(T::BATCH) {
        let l = load_batch(left, offset);
        let r = load_batch(right, offset);

        let (out, overflowed) = match op {
            BinaryOp::Add => {
                let out = T::add_batch(l, r);
                (out, check && T::batch_overflowed(&out, &l, &r))
            }
            BinaryOp::Sub => {
                // l - r overflows exactly when the addition out + r = l does.
                let out = T::sub_batch(l, r);
                (out, check && T::batch_overflowed(&l, &out, &r))
            }
        };

        if overflowed {
            tracing::debug!(offset, "integer overflow in batch");
            return Err(KernelError::Overflow {
                kind: T::KIND,
                operation: op.name(),
            });
        }

        push_batch::<T>(&out, len - offset, &mut result);
    }

    Ok(result)
}
