//! Row-major dense matrix.

use super::matmul::mat_mul;
use super::transpose::transpose;
use crate::error::{KernelError, Result};
use crate::lane::{Lane, LaneKind};
use crate::vector::add::{add, sub};
use crate::vector::scalar::{add_scalar, mul_scalar, sub_scalar};
use std::fmt;
use std::ops::{Index, IndexMut};

/// A `rows × cols` matrix of one lane kind, stored row-major.
///
/// Both dimensions are at least 1 and `data.len() == rows * cols` always
/// holds.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Lane> Matrix<T> {
    /// A `rows × cols` matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        let len = checked_len(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: vec![T::ZERO; len],
        })
    }

    /// Wraps row-major `data` as a `rows × cols` matrix.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        let len = checked_len(rows, cols)?;
        if data.len() != len {
            return Err(KernelError::ShapeMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// The `n × n` identity.
    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Self::zeros(n, n)?;
        for i in 0..n {
            m.data[i * n + i] = T::ONE;
        }
        Ok(m)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`; a matrix has at least one element.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn kind(&self) -> LaneKind {
        T::KIND
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        let pos = self.checked_index(row, col)?;
        Ok(self.data[pos])
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let pos = self.checked_index(row, col)?;
        self.data[pos] = value;
        Ok(())
    }

    /// Element at row-major position `pos`.
    pub fn get_linear(&self, pos: usize) -> Result<T> {
        self.data
            .get(pos)
            .copied()
            .ok_or_else(|| self.linear_out_of_bounds(pos))
    }

    pub fn set_linear(&mut self, pos: usize, value: T) -> Result<()> {
        let err = self.linear_out_of_bounds(pos);
        let slot = self.data.get_mut(pos).ok_or(err)?;
        *slot = value;
        Ok(())
    }

    /// Replaces every element. `data` must have exactly `rows * cols` values.
    pub fn fill(&mut self, data: Vec<T>) -> Result<()> {
        if data.len() != self.data.len() {
            return Err(KernelError::ShapeMismatch {
                rows: self.rows,
                cols: self.cols,
                len: data.len(),
            });
        }
        self.data = data;
        Ok(())
    }

    pub fn transpose(&self) -> Self {
        let mut data = vec![T::ZERO; self.data.len()];
        transpose(&self.data, &mut data, self.rows, self.cols);
        Self {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }

    /// Same elements in the same order, viewed as `rows × cols`.
    pub fn reshape(&self, rows: usize, cols: usize) -> Result<Self> {
        Self::from_vec(rows, cols, self.data.clone())
    }

    /// Elementwise sum. Integer lanes wrap.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other)?;
        Ok(self.with_data(add(&self.data, &other.data)?))
    }

    /// Elementwise difference. Integer lanes wrap.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other)?;
        Ok(self.with_data(sub(&self.data, &other.data)?))
    }

    /// Matrix product `self × other`.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        mat_mul(self, other)
    }

    pub fn add_scalar(&self, scalar: T) -> Self {
        self.with_data(add_scalar(&self.data, scalar))
    }

    pub fn sub_scalar(&self, scalar: T) -> Self {
        self.with_data(sub_scalar(&self.data, scalar))
    }

    pub fn mul_scalar(&self, scalar: T) -> Self {
        self.with_data(mul_scalar(&self.data, scalar))
    }

    fn with_data(&self, data: Vec<T>) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data,
        }
    }

    fn check_same_shape(&self, other: &Self) -> Result<()> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(KernelError::DimensionMismatch {
                left_rows: self.rows,
                left_cols: self.cols,
                right_rows: other.rows,
                right_cols: other.cols,
            });
        }
        Ok(())
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(KernelError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    fn linear_out_of_bounds(&self, pos: usize) -> KernelError {
        KernelError::IndexOutOfBounds {
            row: pos / self.cols,
            col: pos % self.cols,
            rows: self.rows,
            cols: self.cols,
        }
    }
}

fn checked_len(rows: usize, cols: usize) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Err(KernelError::EmptyShape { rows, cols });
    }
    rows.checked_mul(cols).ok_or(KernelError::ShapeMismatch {
        rows,
        cols,
        len: usize::MAX,
    })
}

/// Panics if `(row, col)` is out of bounds, like slice indexing.
impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        &mut self.data[row * self.cols + col]
    }
}

/// One `|a b c|` line per row.
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.cols) {
            f.write_str("|")?;
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", value)?;
            }
            f.write_str("|\n")?;
        }
        Ok(())
    }
}
