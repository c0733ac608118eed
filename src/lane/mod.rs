//! Lane kinds and the `Lane` trait.
//!
//! A 128-bit register holds 4 lanes of a 32-bit scalar or 2 lanes of a
//! 64-bit scalar. `Lane` is implemented for exactly the four supported
//! scalars and ties each of them to its batch type and register kernels, so
//! the engines in [`crate::vector`] and [`crate::matrix`] are written once.

pub mod batch;

use crate::kernels;
use std::fmt;

/// Width of the SIMD register every batch is sized for.
pub const REGISTER_BITS: usize = 128;

/// The four supported scalar representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaneKind {
    Int32,
    Int64,
    Float32,
    Float64,
}

impl LaneKind {
    pub const ALL: [LaneKind; 4] = [
        LaneKind::Int32,
        LaneKind::Int64,
        LaneKind::Float32,
        LaneKind::Float64,
    ];

    pub const fn bit_width(self) -> usize {
        match self {
            LaneKind::Int32 | LaneKind::Float32 => 32,
            LaneKind::Int64 | LaneKind::Float64 => 64,
        }
    }

    /// Lanes per 128-bit register: 4 for 32-bit kinds, 2 for 64-bit kinds.
    pub const fn batch_capacity(self) -> usize {
        REGISTER_BITS / self.bit_width()
    }

    /// `1 << (bit_width - 1)`, the sign bit tested for overflow.
    pub const fn overflow_mask(self) -> u64 {
        1u64 << (self.bit_width() - 1)
    }

    /// Integer kinds are overflow-checked; float kinds never are.
    pub const fn is_integer(self) -> bool {
        matches!(self, LaneKind::Int32 | LaneKind::Int64)
    }

    pub const fn name(self) -> &'static str {
        match self {
            LaneKind::Int32 => "i32",
            LaneKind::Int64 => "i64",
            LaneKind::Float32 => "f32",
            LaneKind::Float64 => "f64",
        }
    }
}

impl fmt::Display for LaneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

mod private {
    pub trait Sealed {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// A scalar that fits the 128-bit register model.
///
/// Integer arithmetic wraps; float arithmetic is IEEE 754. Overflow is only
/// ever reported through [`Lane::batch_overflowed`] and
/// [`Lane::reduce_lanes`], never by the arithmetic itself.
pub trait Lane:
    private::Sealed
    + Copy
    + Default
    + PartialEq
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + 'static
{
    const KIND: LaneKind;

    /// Lanes per register. Equal to `KIND.batch_capacity()`.
    const BATCH: usize;

    const ZERO: Self;
    const ONE: Self;

    /// One register worth of lanes.
    type Batch: Copy + Default + fmt::Debug + AsRef<[Self]> + AsMut<[Self]>;

    /// Per-product type used by the matrix engine before reduction.
    type Partial: Copy + Default + fmt::Debug;

    fn add_batch(left: Self::Batch, right: Self::Batch) -> Self::Batch;
    fn sub_batch(left: Self::Batch, right: Self::Batch) -> Self::Batch;
    fn mul_batch(left: Self::Batch, right: Self::Batch) -> Self::Batch;

    /// Sign-bit overflow test for `result = left + right`. Always `false` for
    /// float kinds.
    fn batch_overflowed(result: &Self::Batch, left: &Self::Batch, right: &Self::Batch) -> bool;

    /// Sum of the lanes of one batch. Integer kinds add in a wider type, so
    /// `None` means only that the total itself does not fit.
    fn reduce_lanes(batch: &Self::Batch) -> Option<Self>;

    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
    fn wrapping_mul(self, rhs: Self) -> Self;

    /// Writes `left[k] * right[k]` into `partials[k]` for every `k`.
    ///
    /// All three slices have the same length.
    fn partial_products(left: &[Self], right: &[Self], partials: &mut [Self::Partial]);

    /// Left-to-right sum of the partial products.
    fn reduce_partials(partials: &[Self::Partial]) -> Self;
}

impl Lane for i32 {
    const KIND: LaneKind = LaneKind::Int32;
    const BATCH: usize = 4;
    const ZERO: Self = 0;
    const ONE: Self = 1;

    type Batch = [i32; 4];
    type Partial = i64;

    fn add_batch(left: [i32; 4], right: [i32; 4]) -> [i32; 4] {
        kernels::add_i32x4(left, right)
    }

    fn sub_batch(left: [i32; 4], right: [i32; 4]) -> [i32; 4] {
        kernels::sub_i32x4(left, right)
    }

    fn mul_batch(left: [i32; 4], right: [i32; 4]) -> [i32; 4] {
        kernels::mul_i32x4(left, right)
    }

    fn batch_overflowed(result: &[i32; 4], left: &[i32; 4], right: &[i32; 4]) -> bool {
        kernels::sign_overflow_i32x4(*result, *left, *right)
    }

    fn reduce_lanes(batch: &[i32; 4]) -> Option<i32> {
        let total: i64 = batch.iter().map(|&lane| i64::from(lane)).sum();
        i32::try_from(total).ok()
    }

    fn wrapping_add(self, rhs: Self) -> Self {
        i32::wrapping_add(self, rhs)
    }

    fn wrapping_sub(self, rhs: Self) -> Self {
        i32::wrapping_sub(self, rhs)
    }

    fn wrapping_mul(self, rhs: Self) -> Self {
        i32::wrapping_mul(self, rhs)
    }

    // Products are widened to 64 bits, so the register only holds 2 of them.
    fn partial_products(left: &[i32], right: &[i32], partials: &mut [i64]) {
        for offset in (0..left.len()).step_by(2) {
            let l = batch::load::<i32, 2>(left, offset);
            let r = batch::load::<i32, 2>(right, offset);
            batch::store(&kernels::mul_widen_i32x2(l, r), &mut partials[offset..]);
        }
    }

    // Truncation to 32 bits matches wrapping arithmetic on the products.
    fn reduce_partials(partials: &[i64]) -> i32 {
        partials.iter().fold(0i64, |acc, &p| acc.wrapping_add(p)) as i32
    }
}

impl Lane for i64 {
    const KIND: LaneKind = LaneKind::Int64;
    const BATCH: usize = 2;
    const ZERO: Self = 0;
    const ONE: Self = 1;

    type Batch = [i64; 2];
    type Partial = i64;

    fn add_batch(left: [i64; 2], right: [i64; 2]) -> [i64; 2] {
        kernels::add_i64x2(left, right)
    }

    fn sub_batch(left: [i64; 2], right: [i64; 2]) -> [i64; 2] {
        kernels::sub_i64x2(left, right)
    }

    fn mul_batch(left: [i64; 2], right: [i64; 2]) -> [i64; 2] {
        kernels::mul_i64x2(left, right)
    }

    fn batch_overflowed(result: &[i64; 2], left: &[i64; 2], right: &[i64; 2]) -> bool {
        kernels::sign_overflow_i64x2(*result, *left, *right)
    }

    fn reduce_lanes(batch: &[i64; 2]) -> Option<i64> {
        let total: i128 = batch.iter().map(|&lane| i128::from(lane)).sum();
        i64::try_from(total).ok()
    }

    fn wrapping_add(self, rhs: Self) -> Self {
        i64::wrapping_add(self, rhs)
    }

    fn wrapping_sub(self, rhs: Self) -> Self {
        i64::wrapping_sub(self, rhs)
    }

    fn wrapping_mul(self, rhs: Self) -> Self {
        i64::wrapping_mul(self, rhs)
    }

    fn partial_products(left: &[i64], right: &[i64], partials: &mut [i64]) {
        for ((p, &l), &r) in partials.iter_mut().zip(left).zip(right) {
            *p = l.wrapping_mul(r);
        }
    }

    fn reduce_partials(partials: &[i64]) -> i64 {
        partials.iter().fold(0, |acc, &p| acc.wrapping_add(p))
    }
}

impl Lane for f32 {
    const KIND: LaneKind = LaneKind::Float32;
    const BATCH: usize = 4;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    type Batch = [f32; 4];
    type Partial = f32;

    fn add_batch(left: [f32; 4], right: [f32; 4]) -> [f32; 4] {
        kernels::add_f32x4(left, right)
    }

    fn sub_batch(left: [f32; 4], right: [f32; 4]) -> [f32; 4] {
        kernels::sub_f32x4(left, right)
    }

    fn mul_batch(left: [f32; 4], right: [f32; 4]) -> [f32; 4] {
        kernels::mul_f32x4(left, right)
    }

    fn batch_overflowed(_: &[f32; 4], _: &[f32; 4], _: &[f32; 4]) -> bool {
        false
    }

    fn reduce_lanes(batch: &Self::Batch) -> Option<Self> {
        Some(batch.iter().sum())
    }

    fn wrapping_add(self, rhs: Self) -> Self {
        self + rhs
    }

    fn wrapping_sub(self, rhs: Self) -> Self {
        self - rhs
    }

    fn wrapping_mul(self, rhs: Self) -> Self {
        self * rhs
    }

    fn partial_products(left: &[f32], right: &[f32], partials: &mut [f32]) {
        batch::batched_products(left, right, partials);
    }

    fn reduce_partials(partials: &[f32]) -> f32 {
        partials.iter().sum()
    }
}

impl Lane for f64 {
    const KIND: LaneKind = LaneKind::Float64;
    const BATCH: usize = 2;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    type Batch = [f64; 2];
    type Partial = f64;

    fn add_batch(left: [f64; 2], right: [f64; 2]) -> [f64; 2] {
        kernels::add_f64x2(left, right)
    }

    fn sub_batch(left: [f64; 2], right: [f64; 2]) -> [f64; 2] {
        kernels::sub_f64x2(left, right)
    }

    fn mul_batch(left: [f64; 2], right: [f64; 2]) -> [f64; 2] {
        kernels::mul_f64x2(left, right)
    }

    fn batch_overflowed(_: &[f64; 2], _: &[f64; 2], _: &[f64; 2]) -> bool {
        false
    }

    fn reduce_lanes(batch: &Self::Batch) -> Option<Self> {
        Some(batch.iter().sum())
    }

    fn wrapping_add(self, rhs: Self) -> Self {
        self + rhs
    }

    fn wrapping_sub(self, rhs: Self) -> Self {
        self - rhs
    }

    fn wrapping_mul(self, rhs: Self) -> Self {
        self * rhs
    }

    fn partial_products(left: &[f64], right: &[f64], partials: &mut [f64]) {
        batch::batched_products(left, right, partials);
    }

    fn reduce_partials(partials: &[f64]) -> f64 {
        partials.iter().sum()
    }
}
