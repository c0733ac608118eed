//! Dense row-major matrix multiply.

use super::Matrix;
use super::transpose::transpose;
use crate::error::{KernelError, Result};
use crate::lane::Lane;

/// `C = A × B` for row-major `A` (left_rows × left_cols) and `B`
/// (right_rows × right_cols). Returns `C` as a new left_rows × right_cols
/// row-major buffer.
///
/// For every output element the products `A[row, k] * B[k, col]` are formed
/// for all `k` into a partial buffer, then summed left to right. How the
/// products are formed depends on the lane kind:
///
/// - `i32`: pairs of 32×32→64 widening multiplies, so no single product
///   overflows. The 64-bit total is truncated back to 32 bits.
/// - `f32`: 4-wide vector multiplies.
/// - `f64`: 2-wide vector multiplies.
/// - `i64`: scalar wrapping multiplies.
///
/// B is transposed once up front so each of its columns is contiguous.
///
/// # Example
///
/// ```
/// use lanewise::matrix::matmul::mat_mul_slices;
///
/// let c = mat_mul_slices(&[1, 2, 3], 1, 3, &[4, 5, 6], 3, 1).unwrap();
/// assert_eq!(c, vec![32]);
/// ```
///
/// # Errors
///
/// - `ShapeMismatch` if either slice length differs from rows × cols.
/// - `DimensionMismatch` if `left_cols != right_rows`, or if the result
///   would have more than `usize::MAX` elements.
#[tracing::instrument(
    level = "trace",
    skip(left, right),
    fields(kind = %T::KIND)
)]
pub fn mat_mul_slices<T: Lane>(
    left: &[T],
    left_rows: usize,
    left_cols: usize,
    right: &[T],
    right_rows: usize,
    right_cols: usize,
) -> Result<Vec<T>> {
    check_shape(left, left_rows, left_cols)?;
    check_shape(right, right_rows, right_cols)?;

    if left_cols != right_rows {
        tracing::debug!("inner dimensions differ");
        return Err(KernelError::DimensionMismatch {
            left_rows,
            left_cols,
            right_rows,
            right_cols,
        });
    }

    let common = left_cols;
    let Some(out_len) = left_rows.checked_mul(right_cols) else {
        tracing::debug!("result dimensions overflow");
        return Err(KernelError::DimensionMismatch {
            left_rows,
            left_cols,
            right_rows,
            right_cols,
        });
    };

    let mut right_t = vec![T::ZERO; right.len()];
    transpose(right, &mut right_t, right_rows, right_cols);

    let mut partials = vec![T::Partial::default(); common];
    let mut result = Vec::with_capacity(out_len);

    for row in 0..left_rows {
        let a_row = &left[row * common..(row + 1) * common];
        for col in 0..right_cols {
            let b_col = &right_t[col * common..(col + 1) * common];
            T::partial_products(a_row, b_col, &mut partials);
            result.push(T::reduce_partials(&partials));
        }
    }

    Ok(result)
}

/// [`mat_mul_slices`] over two [`Matrix`] values.
///
/// ```
/// use lanewise::Matrix;
/// use lanewise::matrix::matmul::mat_mul;
///
/// let eye = Matrix::<f32>::identity(2).unwrap();
/// let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(mat_mul(&eye, &m).unwrap(), m);
/// ```
pub fn mat_mul<T: Lane>(left: &Matrix<T>, right: &Matrix<T>) -> Result<Matrix<T>> {
    let data = mat_mul_slices(
        left.as_slice(),
        left.rows(),
        left.cols(),
        right.as_slice(),
        right.rows(),
        right.cols(),
    )?;
    Matrix::from_vec(left.rows(), right.cols(), data)
}

fn check_shape<T>(data: &[T], rows: usize, cols: usize) -> Result<()> {
    match rows.checked_mul(cols) {
        Some(len) if len == data.len() => Ok(()),
        _ => {
            tracing::debug!(rows, cols, len = data.len(), "matrix shape does not match data");
            Err(KernelError::ShapeMismatch {
                rows,
                cols,
                len: data.len(),
            })
        }
    }
}
