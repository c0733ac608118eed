//! 128-bit register kernels.
//!
//! One function per (operation, lane kind): it takes one batch of each
//! operand as a lane array and returns the result batch. Which backend runs
//! is fixed at compile time:
//!
//! - `sse2`: x86_64 with the `simd` feature (the default). The 32-bit lane
//!   multiply uses `pmulld` when built with `target_feature = "sse4.1"`.
//! - `portable`: plain lane loops everywhere else.
//!
//! Both backends produce identical results for every input.

pub mod portable;
#[cfg(all(target_arch = "x86_64", feature = "simd"))]
pub mod sse2;

use std::fmt;

/// Register backend compiled into this build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Sse2,
    Sse41,
    Portable,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Backend::Sse2 => "SSE2",
            Backend::Sse41 => "SSE4.1",
            Backend::Portable => "portable",
        };
        f.write_str(name)
    }
}

/// Reports which register backend the kernels were compiled with.
pub const fn backend() -> Backend {
    if cfg!(all(target_arch = "x86_64", feature = "simd")) {
        if cfg!(target_feature = "sse4.1") {
            Backend::Sse41
        } else {
            Backend::Sse2
        }
    } else {
        Backend::Portable
    }
}

macro_rules! register_op {
    ($(#[$meta:meta])* $name:ident, $lane:ty, $n:literal, $portable:expr) => {
        $(#[$meta])*
        #[inline]
        pub fn $name(left: [$lane; $n], right: [$lane; $n]) -> [$lane; $n] {
            #[cfg(all(target_arch = "x86_64", feature = "simd"))]
            {
                // SAFETY: SSE2 is part of the x86_64 baseline.
                unsafe { sse2::$name(left, right) }
            }
            #[cfg(not(all(target_arch = "x86_64", feature = "simd")))]
            {
                portable::zip_lanes(left, right, $portable)
            }
        }
    };
}

register_op!(add_i32x4, i32, 4, i32::wrapping_add);
register_op!(sub_i32x4, i32, 4, i32::wrapping_sub);
register_op!(
    /// Low 32 bits of each lane product.
    mul_i32x4, i32, 4, i32::wrapping_mul
);

register_op!(add_i64x2, i64, 2, i64::wrapping_add);
register_op!(sub_i64x2, i64, 2, i64::wrapping_sub);
register_op!(
    /// Low 64 bits of each lane product.
    mul_i64x2, i64, 2, i64::wrapping_mul
);

register_op!(add_f32x4, f32, 4, |a, b| a + b);
register_op!(sub_f32x4, f32, 4, |a, b| a - b);
register_op!(mul_f32x4, f32, 4, |a, b| a * b);

register_op!(add_f64x2, f64, 2, |a, b| a + b);
register_op!(sub_f64x2, f64, 2, |a, b| a - b);
register_op!(mul_f64x2, f64, 2, |a, b| a * b);

/// Full signed 32×32→64 products of a pair of lanes.
#[inline]
pub fn mul_widen_i32x2(left: [i32; 2], right: [i32; 2]) -> [i64; 2] {
    #[cfg(all(target_arch = "x86_64", feature = "simd"))]
    {
        // SAFETY: SSE2 is part of the x86_64 baseline.
        unsafe { sse2::mul_widen_i32x2(left, right) }
    }
    #[cfg(not(all(target_arch = "x86_64", feature = "simd")))]
    {
        portable::mul_widen_i32x2(left, right)
    }
}

/// Sign-bit overflow test: does any lane of `result` disagree in sign with
/// both `left` and `right`?
#[inline]
pub fn sign_overflow_i32x4(result: [i32; 4], left: [i32; 4], right: [i32; 4]) -> bool {
    #[cfg(all(target_arch = "x86_64", feature = "simd"))]
    {
        // SAFETY: SSE2 is part of the x86_64 baseline.
        unsafe { sse2::sign_overflow_i32x4(result, left, right) }
    }
    #[cfg(not(all(target_arch = "x86_64", feature = "simd")))]
    {
        portable::sign_overflow_i32x4(result, left, right)
    }
}

/// 64-bit lane version of [`sign_overflow_i32x4`].
#[inline]
pub fn sign_overflow_i64x2(result: [i64; 2], left: [i64; 2], right: [i64; 2]) -> bool {
    #[cfg(all(target_arch = "x86_64", feature = "simd"))]
    {
        // SAFETY: SSE2 is part of the x86_64 baseline.
        unsafe { sse2::sign_overflow_i64x2(result, left, right) }
    }
    #[cfg(not(all(target_arch = "x86_64", feature = "simd")))]
    {
        portable::sign_overflow_i64x2(result, left, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_matches_build() {
        let backend = backend();
        if cfg!(all(target_arch = "x86_64", feature = "simd")) {
            assert_ne!(backend, Backend::Portable);
        } else {
            assert_eq!(backend, Backend::Portable);
        }
    }

    #[test]
    fn i32_multiply_keeps_low_bits() {
        let left = [3, -4, i32::MAX, 65_536];
        let right = [7, 5, 2, 65_536];
        assert_eq!(
            mul_i32x4(left, right),
            [21, -20, i32::MAX.wrapping_mul(2), 0]
        );
    }

    #[test]
    fn i64_multiply_is_elementwise() {
        assert_eq!(mul_i64x2([2, 3], [5, 7]), [10, 21]);
        assert_eq!(
            mul_i64x2([-1 << 40, i64::MAX], [3, 3]),
            [-3 << 40, i64::MAX.wrapping_mul(3)]
        );
    }

    #[test]
    fn widening_multiply_handles_negatives() {
        assert_eq!(mul_widen_i32x2([-2, 3], [5, -7]), [-10, -21]);
        assert_eq!(
            mul_widen_i32x2([i32::MIN, i32::MIN], [i32::MIN, -1]),
            [(i32::MIN as i64) * (i32::MIN as i64), -(i32::MIN as i64)]
        );
    }

    #[test]
    fn overflow_test_on_64_bit_lanes() {
        let left = [i64::MAX, 0];
        let right = [1, 0];
        let result = add_i64x2(left, right);
        assert!(sign_overflow_i64x2(result, left, right));
        assert!(!sign_overflow_i64x2([3, 4], [1, 2], [2, 2]));
    }
}
