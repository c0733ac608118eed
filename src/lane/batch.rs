//! Loading and storing register-sized batches.
//!
//! A batch starting at `offset` holds the next `BATCH` elements. The last
//! batch of a sequence whose length is not a multiple of `BATCH` is
//! zero-padded on load, and only the in-range lanes are written back on
//! store, so padding never reaches an output.

use super::Lane;

/// Copies `N` lanes starting at `offset`, zero-filling past the end of `src`.
#[inline]
pub fn load<T: Lane, const N: usize>(src: &[T], offset: usize) -> [T; N] {
    let mut lanes = [T::ZERO; N];
    fill(&mut lanes, src, offset);
    lanes
}

/// Loads one register batch of `T` starting at `offset`.
#[inline]
pub fn load_batch<T: Lane>(src: &[T], offset: usize) -> T::Batch {
    let mut batch = T::Batch::default();
    fill(batch.as_mut(), src, offset);
    batch
}

#[inline]
fn fill<T: Lane>(lanes: &mut [T], src: &[T], offset: usize) {
    let available = src.len().saturating_sub(offset).min(lanes.len());
    if available > 0 {
        lanes[..available].copy_from_slice(&src[offset..offset + available]);
    }
    for lane in &mut lanes[available..] {
        *lane = T::ZERO;
    }
}

/// Writes as many lanes as fit into `dst`. Lanes past the end are dropped.
#[inline]
pub fn store<T: Copy>(lanes: &[T], dst: &mut [T]) {
    let n = lanes.len().min(dst.len());
    dst[..n].copy_from_slice(&lanes[..n]);
}

/// Appends the first `valid` lanes of a batch to `out`.
#[inline]
pub fn push_batch<T: Lane>(batch: &T::Batch, valid: usize, out: &mut Vec<T>) {
    let lanes = batch.as_ref();
    out.extend_from_slice(&lanes[..valid.min(lanes.len())]);
}

/// `left[k] * right[k]` into `partials[k]`, one register batch at a time.
pub(crate) fn batched_products<T: Lane<Partial = T>>(
    left: &[T],
    right: &[T],
    partials: &mut [T],
) {
    for offset in (0..left.len()).step_by(T::BATCH) {
        let product = T::mul_batch(load_batch(left, offset), load_batch(right, offset));
        store(product.as_ref(), &mut partials[offset..]);
    }
}
