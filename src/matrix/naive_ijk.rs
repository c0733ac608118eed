use crate::lane::Lane;

/// Naive matrix multiplication using i-j-k loop order.
///
/// This is the textbook triple-loop implementation, one scalar
/// multiply-add at a time with the lane kind's own arithmetic (wrapping for
/// integers). Use it as a correctness baseline for the batched engine, not
/// for performance.
///
/// # Arguments
///
/// * `a` - Matrix A (m × k), row-major
/// * `b` - Matrix B (k × n), row-major
/// * `c` - Matrix C (m × n), row-major, accumulated into (C += A * B)
/// * `m` - Rows of A and C
/// * `n` - Columns of B and C
/// * `k` - Columns of A, rows of B
pub fn matmul_naive_ijk<T: Lane>(a: &[T], b: &[T], c: &mut [T], m: usize, n: usize, k: usize) {
    for i in 0..m {
        for j in 0..n {
            for p in 0..k {
                c[i * n + j] = c[i * n + j].wrapping_add(a[i * k + p].wrapping_mul(b[p * n + j]));
            }
        }
    }
}
