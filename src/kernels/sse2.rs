//! SSE2 register kernels (x86_64 only).
//!
//! Every function loads its lane arrays into one 128-bit register, applies a
//! single vector operation and stores the register back. SSE2 is part of the
//! x86_64 baseline so these are always callable on that target; they stay
//! `unsafe fn` because they work through raw register loads and stores.

use std::arch::x86_64::*;

#[inline]
#[allow(unsafe_op_in_unsafe_fn)]
unsafe fn load_i32x4(v: &[i32; 4]) -> __m128i {
    _mm_loadu_si128(v.as_ptr() as *const __m128i)
}

#[inline]
#[allow(unsafe_op_in_unsafe_fn)]
unsafe fn store_i32x4(r: __m128i) -> [i32; 4] {
    let mut out = [0i32; 4];
    _mm_storeu_si128(out.as_mut_ptr() as *mut __m128i, r);
    out
}

#[inline]
#[allow(unsafe_op_in_unsafe_fn)]
unsafe fn load_i64x2(v: &[i64; 2]) -> __m128i {
    _mm_loadu_si128(v.as_ptr() as *const __m128i)
}

#[inline]
#[allow(unsafe_op_in_unsafe_fn)]
unsafe fn store_i64x2(r: __m128i) -> [i64; 2] {
    let mut out = [0i64; 2];
    _mm_storeu_si128(out.as_mut_ptr() as *mut __m128i, r);
    out
}

#[inline]
#[allow(unsafe_op_in_unsafe_fn)]
unsafe fn store_f32x4(r: __m128) -> [f32; 4] {
    let mut out = [0f32; 4];
    _mm_storeu_ps(out.as_mut_ptr(), r);
    out
}

#[inline]
#[allow(unsafe_op_in_unsafe_fn)]
unsafe fn store_f64x2(r: __m128d) -> [f64; 2] {
    let mut out = [0f64; 2];
    _mm_storeu_pd(out.as_mut_ptr(), r);
    out
}

// ------------------------------------------------------------
// Add / subtract
// ------------------------------------------------------------

/// # Safety
///
/// Caller must be on x86_64 (SSE2 is baseline there).
#[inline]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn add_i32x4(left: [i32; 4], right: [i32; 4]) -> [i32; 4] {
    store_i32x4(_mm_add_epi32(load_i32x4(&left), load_i32x4(&right)))
}

/// # Safety
///
/// Caller must be on x86_64 (SSE2 is baseline there).
#[inline]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn sub_i32x4(left: [i32; 4], right: [i32; 4]) -> [i32; 4] {
    store_i32x4(_mm_sub_epi32(load_i32x4(&left), load_i32x4(&right)))
}

/// # Safety
///
/// Caller must be on x86_64 (SSE2 is baseline there).
#[inline]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn add_i64x2(left: [i64; 2], right: [i64; 2]) -> [i64; 2] {
    store_i64x2(_mm_add_epi64(load_i64x2(&left), load_i64x2(&right)))
}

/// # Safety
///
/// Caller must be on x86_64 (SSE2 is baseline there).
#[inline]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn sub_i64x2(left: [i64; 2], right: [i64; 2]) -> [i64; 2] {
    store_i64x2(_mm_sub_epi64(load_i64x2(&left), load_i64x2(&right)))
}

/// # Safety
///
/// Caller must be on x86_64 (SSE2 is baseline there).
#[inline]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn add_f32x4(left: [f32; 4], right: [f32; 4]) -> [f32; 4] {
    store_f32x4(_mm_add_ps(
        _mm_loadu_ps(left.as_ptr()),
        _mm_loadu_ps(right.as_ptr()),
    ))
}

/// # Safety
///
/// Caller must be on x86_64 (SSE2 is baseline there).
#[inline]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn sub_f32x4(left: [f32; 4], right: [f32; 4]) -> [f32; 4] {
    store_f32x4(_mm_sub_ps(
        _mm_loadu_ps(left.as_ptr()),
        _mm_loadu_ps(right.as_ptr()),
    ))
}

/// # Safety
///
/// Caller must be on x86_64 (SSE2 is baseline there).
#[inline]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn add_f64x2(left: [f64; 2], right: [f64; 2]) -> [f64; 2] {
    store_f64x2(_mm_add_pd(
        _mm_loadu_pd(left.as_ptr()),
        _mm_loadu_pd(right.as_ptr()),
    ))
}

/// # Safety
///
/// Caller must be on x86_64 (SSE2 is baseline there).
#[inline]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn sub_f64x2(left: [f64; 2], right: [f64; 2]) -> [f64; 2] {
    store_f64x2(_mm_sub_pd(
        _mm_loadu_pd(left.as_ptr()),
        _mm_loadu_pd(right.as_ptr()),
    ))
}

// ------------------------------------------------------------
// Multiply
// ------------------------------------------------------------

/// Low 32 bits of each lane product.
///
/// With SSE4.1 this is a single `pmulld`. Plain SSE2 has no 32-bit lane
/// multiply, so lanes 0/2 and 1/3 go through two 32×32→64 `pmuludq` and the
/// low halves are shuffled back together.
///
/// # Safety
///
/// Caller must be on x86_64 (SSE2 is baseline there).
#[inline]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn mul_i32x4(left: [i32; 4], right: [i32; 4]) -> [i32; 4] {
    let a = load_i32x4(&left);
    let b = load_i32x4(&right);

    #[cfg(target_feature = "sse4.1")]
    {
        store_i32x4(_mm_mullo_epi32(a, b))
    }

    #[cfg(not(target_feature = "sse4.1"))]
    {
        let even = _mm_mul_epu32(a, b); // lanes 0, 2
        let odd = _mm_mul_epu32(_mm_srli_si128(a, 4), _mm_srli_si128(b, 4)); // lanes 1, 3
        store_i32x4(_mm_unpacklo_epi32(
            _mm_shuffle_epi32(even, 0b00_00_10_00),
            _mm_shuffle_epi32(odd, 0b00_00_10_00),
        ))
    }
}

/// Low 64 bits of each lane product.
///
/// SSE2 has no 64-bit lane multiply. Each lane is split into 32-bit halves:
/// `lo*lo + ((hi*lo + lo*hi) << 32)`, which is exact modulo 2^64.
///
/// # Safety
///
/// Caller must be on x86_64 (SSE2 is baseline there).
#[inline]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn mul_i64x2(left: [i64; 2], right: [i64; 2]) -> [i64; 2] {
    let a = load_i64x2(&left);
    let b = load_i64x2(&right);

    let lo_lo = _mm_mul_epu32(a, b);
    let hi_lo = _mm_mul_epu32(_mm_srli_epi64(a, 32), b);
    let lo_hi = _mm_mul_epu32(a, _mm_srli_epi64(b, 32));
    let cross = _mm_slli_epi64(_mm_add_epi64(hi_lo, lo_hi), 32);

    store_i64x2(_mm_add_epi64(lo_lo, cross))
}

/// # Safety
///
/// Caller must be on x86_64 (SSE2 is baseline there).
#[inline]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn mul_f32x4(left: [f32; 4], right: [f32; 4]) -> [f32; 4] {
    store_f32x4(_mm_mul_ps(
        _mm_loadu_ps(left.as_ptr()),
        _mm_loadu_ps(right.as_ptr()),
    ))
}

/// # Safety
///
/// Caller must be on x86_64 (SSE2 is baseline there).
#[inline]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn mul_f64x2(left: [f64; 2], right: [f64; 2]) -> [f64; 2] {
    store_f64x2(_mm_mul_pd(
        _mm_loadu_pd(left.as_ptr()),
        _mm_loadu_pd(right.as_ptr()),
    ))
}

/// Full signed 32×32→64 products of a pair of lanes.
///
/// The pair is placed in lanes 0 and 2 so a single `pmuludq` covers both.
/// `pmuludq` is unsigned, so a negative operand contributes an extra
/// `other << 32` which is subtracted back out.
///
/// # Safety
///
/// Caller must be on x86_64 (SSE2 is baseline there).
#[inline]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn mul_widen_i32x2(left: [i32; 2], right: [i32; 2]) -> [i64; 2] {
    let a = _mm_setr_epi32(left[0], 0, left[1], 0);
    let b = _mm_setr_epi32(right[0], 0, right[1], 0);

    let unsigned = _mm_mul_epu32(a, b);

    let a_neg = _mm_srai_epi32(a, 31);
    let b_neg = _mm_srai_epi32(b, 31);
    let fix_a = _mm_slli_epi64(_mm_and_si128(a_neg, b), 32);
    let fix_b = _mm_slli_epi64(_mm_and_si128(b_neg, a), 32);

    store_i64x2(_mm_sub_epi64(_mm_sub_epi64(unsigned, fix_a), fix_b))
}

// ------------------------------------------------------------
// Sign-bit overflow test
// ------------------------------------------------------------

/// `(result ^ left) & (result ^ right)` has its sign bit set on any lane.
///
/// # Safety
///
/// Caller must be on x86_64 (SSE2 is baseline there).
#[inline]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn sign_overflow_i32x4(result: [i32; 4], left: [i32; 4], right: [i32; 4]) -> bool {
    let r = load_i32x4(&result);
    let flags = _mm_and_si128(
        _mm_xor_si128(r, load_i32x4(&left)),
        _mm_xor_si128(r, load_i32x4(&right)),
    );
    _mm_movemask_ps(_mm_castsi128_ps(flags)) != 0
}

/// 64-bit lane version of [`sign_overflow_i32x4`].
///
/// # Safety
///
/// Caller must be on x86_64 (SSE2 is baseline there).
#[inline]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn sign_overflow_i64x2(result: [i64; 2], left: [i64; 2], right: [i64; 2]) -> bool {
    let r = load_i64x2(&result);
    let flags = _mm_and_si128(
        _mm_xor_si128(r, load_i64x2(&left)),
        _mm_xor_si128(r, load_i64x2(&right)),
    );
    _mm_movemask_pd(_mm_castsi128_pd(flags)) != 0
}
