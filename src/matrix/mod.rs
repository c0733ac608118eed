//! Dense row-major matrices and the matrix multiply engine.
//!
//! - `dense`: the `Matrix` type with checked element access
//! - `matmul`: batched partial-product matrix multiply
//! - `naive_ijk`: scalar triple loop, the correctness baseline
//! - `transpose`: row-major transpose used to make B's columns contiguous

pub mod dense;
pub mod matmul;
pub mod naive_ijk;
pub mod transpose;

pub use dense::Matrix;
