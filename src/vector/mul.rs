//! Elementwise multiply.

use super::ensure_same_len;
use crate::error::Result;
use crate::lane::Lane;
use crate::lane::batch::{load_batch, push_batch};

/// `result[i] = left[i] * right[i]`.
///
/// Integer products keep their low bits (wrapping); float products are
/// IEEE 754. The lane strategy per kind:
///
/// - `f32`/`f64`: one vector multiply per batch.
/// - `i32`: `pmulld` with SSE4.1, otherwise two even/odd 32×32→64
///   multiplies packed back to 32-bit lanes.
/// - `i64`: split into 32-bit halves and recombined.
///
/// # Example
///
/// ```
/// use lanewise::vector::mul::vec_mul;
///
/// assert_eq!(vec_mul(&[2i64, 3], &[5, 7]).unwrap(), vec![10, 21]);
/// ```
///
/// # Errors
///
/// `LengthMismatch` if the operands differ in length.
#[tracing::instrument(level = "trace", skip_all, fields(kind = %T::KIND, len = left.len()))]
pub fn vec_mul<T: Lane>(left: &[T], right: &[T]) -> Result<Vec<T>> {
    ensure_same_len(left, right)?;

    let len = left.len();
    let mut result = Vec::with_capacity(len);

    for offset in (0..len).step_by(T::BATCH) {
        let product = T::mul_batch(load_batch(left, offset), load_batch(right, offset));
        push_batch::<T>(&product, len - offset, &mut result);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KernelError;

    #[test]
    fn i32_products_with_tail() {
        let left = [1, -2, 3, -4, 5];
        let right = [6, 7, -8, -9, 10];
        assert_eq!(vec_mul(&left, &right).unwrap(), vec![6, -14, -24, 36, 50]);
    }

    #[test]
    fn i64_is_elementwise() {
        let out = vec_mul(&[2i64, 3], &[5, 7]).unwrap();
        assert_eq!(out, vec![10, 21]);
        assert_ne!(out, vec![21, 21]);
    }

    #[test]
    fn f64_products() {
        let out = vec_mul(&[1.5f64, -2.0, 4.0], &[2.0, 2.0, 0.25]).unwrap();
        assert_eq!(out, vec![3.0, -4.0, 1.0]);
    }

    #[test]
    fn empty_and_mismatch() {
        assert!(vec_mul::<f32>(&[], &[]).unwrap().is_empty());
        assert_eq!(
            vec_mul(&[1.0f32], &[]),
            Err(KernelError::LengthMismatch { left: 1, right: 0 })
        );
    }
}
