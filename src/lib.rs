//! Fixed-width SIMD kernels for 1-D vectors and 2-D row-major matrices.
//!
//! Everything works in batches sized for one 128-bit register: 4 lanes of
//! `i32`/`f32` or 2 lanes of `i64`/`f64`. Sequences whose length is not a
//! multiple of the batch size are zero-padded on load and the padding never
//! reaches an output.
//!
//! ## Usage
//!
//! ```
//! use lanewise::{add, mat_mul, sum, vec_mul, Matrix};
//!
//! let a = vec![1, 2, 3, 4, 5];
//! let b = vec![10, 20, 30, 40, 50];
//!
//! assert_eq!(add(&a, &b).unwrap(), vec![11, 22, 33, 44, 55]);
//! assert_eq!(vec_mul(&a, &b).unwrap(), vec![10, 40, 90, 160, 250]);
//! assert_eq!(sum(&a).unwrap(), 15);
//!
//! let left = Matrix::from_vec(1, 3, vec![1.0, 2.0, 3.0]).unwrap();
//! let right = Matrix::from_vec(3, 1, vec![4.0, 5.0, 6.0]).unwrap();
//! assert_eq!(mat_mul(&left, &right).unwrap().as_slice(), &[32.0]);
//! ```
//!
//! ## What's inside
//!
//! - `lane`: the four lane kinds and their batch sizes
//! - `kernels`: SSE2 register kernels (x86_64, `simd` feature) with a
//!   portable fallback
//! - `vector`: add/sub, sum, elementwise multiply, scalar broadcasts
//! - `matrix`: `Matrix` and the matrix multiply engine
//! - `dynamic`: runtime lane-kind dispatch for binding layers
//!
//! ## Overflow
//!
//! Integer add, sub and multiply wrap. `sum` fails with
//! [`KernelError::Overflow`] when one of its lane accumulators or the final
//! integer total does not fit. Pass
//! [`OverflowPolicy::Check`] to [`binary_op`] to get the same check on
//! add/sub.

pub mod dynamic;
pub mod error;
pub mod kernels;
pub mod lane;
pub mod matrix;
pub mod vector;

pub use dynamic::{Scalar, Sequence};
pub use error::{KernelError, Result};
pub use lane::{Lane, LaneKind};
pub use matrix::Matrix;
pub use matrix::matmul::{mat_mul, mat_mul_slices};
pub use vector::add::{BinaryOp, OverflowPolicy, add, binary_op, sub};
pub use vector::mul::vec_mul;
pub use vector::scalar::{add_scalar, mul_scalar, sub_scalar};
pub use vector::sum::sum;
