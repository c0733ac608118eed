//! Property-based tests for the batched engines.
//!
//! Invariants that must hold for all inputs:
//! - add/sub are inverse (with wraparound for integers)
//! - add is commutative
//! - sum equals the scalar left-to-right fold when nothing overflows, and
//!   any successful sum equals the exact total
//! - vec_mul equals lane-wise scalar multiplication
//! - matrix multiply equals the naive triple loop
//! - mismatched lengths never produce output

use proptest::prelude::*;

use lanewise::matrix::naive_ijk::matmul_naive_ijk;
use lanewise::{KernelError, add, mat_mul_slices, sub, sum, vec_mul};

fn equal_len_pair<T: std::fmt::Debug + Clone>(
    elem: impl Strategy<Value = T> + Clone,
) -> impl Strategy<Value = (Vec<T>, Vec<T>)> {
    (0usize..40).prop_flat_map(move |len| {
        (
            prop::collection::vec(elem.clone(), len),
            prop::collection::vec(elem.clone(), len),
        )
    })
}

// Integer-valued floats keep every operation below exact.
fn exact_f32() -> impl Strategy<Value = f32> + Clone {
    (-1000i32..1000).prop_map(|v| v as f32)
}

// Finite operands: a sum or product can reach infinity but never NaN.
fn finite_f32() -> impl Strategy<Value = f32> + Clone {
    -1e30f32..1e30f32
}

fn exact_f64() -> impl Strategy<Value = f64> + Clone {
    (-1_000_000i64..1_000_000).prop_map(|v| v as f64)
}

// Reference for the i32 sum: each of the four lanes folds its own elements
// with checked adds, then the lane totals are added in i64.
fn lane_checked_sum_i32(values: &[i32]) -> Option<i32> {
    let mut lanes = [0i32; 4];
    for (i, &v) in values.iter().enumerate() {
        lanes[i % 4] = lanes[i % 4].checked_add(v)?;
    }
    i32::try_from(lanes.iter().map(|&l| i64::from(l)).sum::<i64>()).ok()
}

proptest! {
    #[test]
    fn prop_sub_undoes_add_i32((a, b) in equal_len_pair(any::<i32>())) {
        let sum = add(&a, &b).unwrap();
        prop_assert_eq!(sub(&sum, &b).unwrap(), a);
    }

    #[test]
    fn prop_sub_undoes_add_i64((a, b) in equal_len_pair(any::<i64>())) {
        let sum = add(&a, &b).unwrap();
        prop_assert_eq!(sub(&sum, &b).unwrap(), a);
    }

    #[test]
    fn prop_sub_undoes_add_f64((a, b) in equal_len_pair(exact_f64())) {
        let sum = add(&a, &b).unwrap();
        prop_assert_eq!(sub(&sum, &b).unwrap(), a);
    }

    #[test]
    fn prop_sub_undoes_add_f32((a, b) in equal_len_pair(exact_f32())) {
        let sum = add(&a, &b).unwrap();
        prop_assert_eq!(sub(&sum, &b).unwrap(), a);
    }

    #[test]
    fn prop_add_commutes_i32((a, b) in equal_len_pair(any::<i32>())) {
        prop_assert_eq!(add(&a, &b).unwrap(), add(&b, &a).unwrap());
    }

    #[test]
    fn prop_add_commutes_f64((a, b) in equal_len_pair(-1e300f64..1e300f64)) {
        prop_assert_eq!(add(&a, &b).unwrap(), add(&b, &a).unwrap());
    }

    #[test]
    fn prop_add_commutes_i64((a, b) in equal_len_pair(any::<i64>())) {
        prop_assert_eq!(add(&a, &b).unwrap(), add(&b, &a).unwrap());
    }

    #[test]
    fn prop_add_commutes_f32((a, b) in equal_len_pair(finite_f32())) {
        prop_assert_eq!(add(&a, &b).unwrap(), add(&b, &a).unwrap());
    }

    #[test]
    fn prop_sum_matches_fold_i32(v in prop::collection::vec(-1_000_000i32..1_000_000, 0..200)) {
        prop_assert_eq!(sum(&v).unwrap(), v.iter().fold(0i32, |acc, x| acc + x));
    }

    #[test]
    fn prop_sum_matches_lane_model_i32(v in prop::collection::vec(any::<i32>(), 0..40)) {
        let result = sum(&v);
        prop_assert_eq!(result.clone().ok(), lane_checked_sum_i32(&v));
        if let Ok(total) = result {
            prop_assert_eq!(i64::from(total), v.iter().map(|&x| i64::from(x)).sum::<i64>());
        }
    }

    #[test]
    fn prop_sum_fails_when_total_does_not_fit_i32(v in prop::collection::vec(any::<i32>(), 0..40)) {
        let total: i64 = v.iter().map(|&x| i64::from(x)).sum();
        if i32::try_from(total).is_err() {
            prop_assert!(sum(&v).is_err());
        }
    }

    #[test]
    fn prop_sum_matches_fold_i64(v in prop::collection::vec(any::<i32>(), 0..200)) {
        let v: Vec<i64> = v.into_iter().map(i64::from).collect();
        prop_assert_eq!(sum(&v).unwrap(), v.iter().fold(0i64, |acc, x| acc + x));
    }

    #[test]
    fn prop_sum_matches_fold_f32(v in prop::collection::vec(exact_f32(), 0..200)) {
        prop_assert_eq!(sum(&v).unwrap(), v.iter().fold(0.0f32, |acc, x| acc + x));
    }

    #[test]
    fn prop_vec_mul_matches_scalar_i32((a, b) in equal_len_pair(any::<i32>())) {
        let expected: Vec<i32> = a.iter().zip(&b).map(|(x, y)| x.wrapping_mul(*y)).collect();
        prop_assert_eq!(vec_mul(&a, &b).unwrap(), expected);
    }

    #[test]
    fn prop_vec_mul_matches_scalar_i64((a, b) in equal_len_pair(any::<i64>())) {
        let expected: Vec<i64> = a.iter().zip(&b).map(|(x, y)| x.wrapping_mul(*y)).collect();
        prop_assert_eq!(vec_mul(&a, &b).unwrap(), expected);
    }

    #[test]
    fn prop_vec_mul_matches_scalar_f32((a, b) in equal_len_pair(finite_f32())) {
        let expected: Vec<f32> = a.iter().zip(&b).map(|(x, y)| x * y).collect();
        prop_assert_eq!(vec_mul(&a, &b).unwrap(), expected);
    }

    #[test]
    fn prop_vec_mul_matches_scalar_f64((a, b) in equal_len_pair(exact_f64())) {
        let expected: Vec<f64> = a.iter().zip(&b).map(|(x, y)| x * y).collect();
        prop_assert_eq!(vec_mul(&a, &b).unwrap(), expected);
    }

    #[test]
    fn prop_length_mismatch_has_no_output(
        a in prop::collection::vec(any::<i32>(), 0..20),
        b in prop::collection::vec(any::<i32>(), 0..20),
    ) {
        prop_assume!(a.len() != b.len());
        let expected: Result<Vec<i32>, KernelError> = Err(KernelError::LengthMismatch { left: a.len(), right: b.len() });
        prop_assert_eq!(add(&a, &b), expected.clone());
        prop_assert_eq!(sub(&a, &b), expected.clone());
        prop_assert_eq!(vec_mul(&a, &b), expected);
    }

    #[test]
    fn prop_matmul_matches_naive_i32(
        (m, n, k, a, b) in (1usize..6, 1usize..6, 1usize..9).prop_flat_map(|(m, n, k)| (
            Just(m),
            Just(n),
            Just(k),
            prop::collection::vec(any::<i32>(), m * k),
            prop::collection::vec(any::<i32>(), k * n),
        ))
    ) {
        let mut expected = vec![0; m * n];
        matmul_naive_ijk(&a, &b, &mut expected, m, n, k);
        prop_assert_eq!(mat_mul_slices(&a, m, k, &b, k, n).unwrap(), expected);
    }

    #[test]
    fn prop_matmul_matches_naive_f64(
        (m, n, k, a, b) in (1usize..6, 1usize..6, 1usize..9).prop_flat_map(|(m, n, k)| (
            Just(m),
            Just(n),
            Just(k),
            prop::collection::vec(exact_f64(), m * k),
            prop::collection::vec(exact_f64(), k * n),
        ))
    ) {
        let mut expected = vec![0.0; m * n];
        matmul_naive_ijk(&a, &b, &mut expected, m, n, k);
        prop_assert_eq!(mat_mul_slices(&a, m, k, &b, k, n).unwrap(), expected);
    }
}
