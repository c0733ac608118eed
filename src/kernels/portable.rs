//! Portable lane-array kernels.
//!
//! Used when the `simd` feature is off or the target is not x86_64. The loops
//! are fixed-length, so the compiler is free to vectorize them.

use crate::lane::LaneKind;

/// Applies `op` lane by lane.
#[inline]
pub fn zip_lanes<T: Copy, const N: usize>(
    left: [T; N],
    right: [T; N],
    op: impl Fn(T, T) -> T,
) -> [T; N] {
    let mut out = left;
    for (o, r) in out.iter_mut().zip(right) {
        *o = op(*o, r);
    }
    out
}

/// Full signed 32×32→64 products of a pair of lanes.
#[inline]
pub fn mul_widen_i32x2(left: [i32; 2], right: [i32; 2]) -> [i64; 2] {
    [
        left[0] as i64 * right[0] as i64,
        left[1] as i64 * right[1] as i64,
    ]
}

/// Sign-bit overflow test on 32-bit lanes.
#[inline]
pub fn sign_overflow_i32x4(result: [i32; 4], left: [i32; 4], right: [i32; 4]) -> bool {
    let mask = LaneKind::Int32.overflow_mask();
    (0..4).any(|i| ((result[i] ^ left[i]) & (result[i] ^ right[i])) as u32 as u64 & mask != 0)
}

/// Sign-bit overflow test on 64-bit lanes.
#[inline]
pub fn sign_overflow_i64x2(result: [i64; 2], left: [i64; 2], right: [i64; 2]) -> bool {
    let mask = LaneKind::Int64.overflow_mask();
    (0..2).any(|i| ((result[i] ^ left[i]) & (result[i] ^ right[i])) as u64 & mask != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zip_lanes_wraps() {
        let out = zip_lanes([i32::MAX, 1, 2, 3], [1, 1, 1, 1], i32::wrapping_add);
        assert_eq!(out, [i32::MIN, 2, 3, 4]);
    }

    #[test]
    fn sign_test_flags_only_overflowing_lanes() {
        let left = [i32::MAX, 5, -5, 0];
        let right = [1, 5, -5, 0];
        let result = zip_lanes(left, right, i32::wrapping_add);
        assert!(sign_overflow_i32x4(result, left, right));

        let left = [1, 5, -5, 0];
        let result = zip_lanes(left, right, i32::wrapping_add);
        assert!(!sign_overflow_i32x4(result, left, right));
    }

    #[test]
    fn widening_product_keeps_sign() {
        assert_eq!(
            mul_widen_i32x2([-3, i32::MAX], [7, i32::MAX]),
            [-21, (i32::MAX as i64) * (i32::MAX as i64)]
        );
    }
}
