//! Batched engines over 1-D numeric sequences.
//!
//! Each engine walks its inputs one register batch at a time, zero-padding
//! the last batch and writing back only the in-range lanes. Inputs are never
//! mutated; every call returns a freshly allocated result.
//!
//! Available engines:
//! - `add`: elementwise add/subtract
//! - `sum`: reduction to a scalar
//! - `mul`: elementwise multiply
//! - `scalar`: sequence-with-scalar broadcasts built on the above

pub mod add;
pub mod mul;
pub mod scalar;
pub mod sum;

use crate::error::{KernelError, Result};

/// Fails with `LengthMismatch` unless both operands have the same length.
pub(crate) fn ensure_same_len<T>(left: &[T], right: &[T]) -> Result<()> {
    if left.len() != right.len() {
        tracing::debug!(
            left = left.len(),
            right = right.len(),
            "rejecting operands of different lengths"
        );
        return Err(KernelError::LengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }
    Ok(())
}
