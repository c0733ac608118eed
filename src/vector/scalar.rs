//! Sequence-with-scalar operations.
//!
//! The scalar is broadcast into every lane of one register and combined with
//! each batch of the sequence, exactly as if it had been expanded into a
//! sequence of the same length. Integer results wrap.

use crate::lane::Lane;
use crate::lane::batch::{load_batch, push_batch};

fn broadcast<T: Lane>(value: T) -> T::Batch {
    let mut batch = T::Batch::default();
    batch.as_mut().fill(value);
    batch
}

fn map_batches<T: Lane>(
    values: &[T],
    scalar: T,
    op: impl Fn(T::Batch, T::Batch) -> T::Batch,
) -> Vec<T> {
    let splat = broadcast(scalar);
    let mut result = Vec::with_capacity(values.len());
    for offset in (0..values.len()).step_by(T::BATCH) {
        let out = op(load_batch(values, offset), splat);
        push_batch::<T>(&out, values.len() - offset, &mut result);
    }
    result
}

/// `values[i] + scalar`.
pub fn add_scalar<T: Lane>(values: &[T], scalar: T) -> Vec<T> {
    map_batches(values, scalar, T::add_batch)
}

/// `values[i] - scalar`.
pub fn sub_scalar<T: Lane>(values: &[T], scalar: T) -> Vec<T> {
    map_batches(values, scalar, T::sub_batch)
}

/// `values[i] * scalar`.
///
/// ```
/// use lanewise::vector::scalar::mul_scalar;
///
/// assert_eq!(mul_scalar(&[10i64, 9, 8], -2), vec![-20, -18, -16]);
/// ```
pub fn mul_scalar<T: Lane>(values: &[T], scalar: T) -> Vec<T> {
    map_batches(values, scalar, T::mul_batch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtracts_integer_scalar() {
        let values = [10, 9, 8, 7, 6, 5, 4, 3, 2, 1];
        assert_eq!(
            sub_scalar(&values, 2),
            vec![8, 7, 6, 5, 4, 3, 2, 1, 0, -1]
        );
    }

    #[test]
    fn subtracts_float_scalar() {
        let values = [10.0f32, 9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0];
        let out = sub_scalar(&values, 2.8);
        assert_eq!(out.len(), values.len());
        for (v, o) in values.iter().zip(&out) {
            assert!((v - 2.8 - o).abs() < 1e-6);
        }
    }

    #[test]
    fn multiplies_by_negative_scalar() {
        let values = [10, 9, 8, 7, 6, 5, 4, 3, 2, 1];
        let expected: Vec<i32> = values.iter().map(|v| v * -2).collect();
        assert_eq!(mul_scalar(&values, -2), expected);
    }

    #[test]
    fn adds_scalar_to_empty() {
        assert!(add_scalar::<f64>(&[], 1.0).is_empty());
        assert_eq!(add_scalar(&[1.0f64, 2.0, 3.0], 0.5), vec![1.5, 2.5, 3.5]);
    }
}
