//! Runtime lane-kind dispatch.
//!
//! Binding layers that receive untyped arrays cannot pick `T` at compile
//! time. `Sequence` carries the lane kind as a variant and forwards each
//! operation to the generic engine for that kind.

use crate::error::{KernelError, Result};
use crate::lane::LaneKind;
use crate::vector::add::{BinaryOp, OverflowPolicy, binary_op};
use crate::vector::mul::vec_mul;
use crate::vector::sum::sum;
use std::fmt;

/// A numeric sequence whose lane kind is only known at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Sequence {
    Int32(Vec<i32>),
    Int64(Vec<i64>),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
}

/// A single value of any lane kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
}

impl Scalar {
    pub fn kind(&self) -> LaneKind {
        match self {
            Scalar::Int32(_) => LaneKind::Int32,
            Scalar::Int64(_) => LaneKind::Int64,
            Scalar::Float32(_) => LaneKind::Float32,
            Scalar::Float64(_) => LaneKind::Float64,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int32(v) => write!(f, "{}", v),
            Scalar::Int64(v) => write!(f, "{}", v),
            Scalar::Float32(v) => write!(f, "{}", v),
            Scalar::Float64(v) => write!(f, "{}", v),
        }
    }
}

macro_rules! zip_kinds {
    ($left:expr, $right:expr, |$l:ident, $r:ident| $body:expr) => {
        match ($left, $right) {
            (Sequence::Int32($l), Sequence::Int32($r)) => Ok(Sequence::Int32($body?)),
            (Sequence::Int64($l), Sequence::Int64($r)) => Ok(Sequence::Int64($body?)),
            (Sequence::Float32($l), Sequence::Float32($r)) => Ok(Sequence::Float32($body?)),
            (Sequence::Float64($l), Sequence::Float64($r)) => Ok(Sequence::Float64($body?)),
            (l, r) => Err(KernelError::KindMismatch {
                left: l.kind(),
                right: r.kind(),
            }),
        }
    };
}

impl Sequence {
    pub fn kind(&self) -> LaneKind {
        match self {
            Sequence::Int32(_) => LaneKind::Int32,
            Sequence::Int64(_) => LaneKind::Int64,
            Sequence::Float32(_) => LaneKind::Float32,
            Sequence::Float64(_) => LaneKind::Float64,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Sequence::Int32(v) => v.len(),
            Sequence::Int64(v) => v.len(),
            Sequence::Float32(v) => v.len(),
            Sequence::Float64(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `op` applied lane-wise with the given overflow policy.
    pub fn binary_op(
        &self,
        op: BinaryOp,
        other: &Sequence,
        policy: OverflowPolicy,
    ) -> Result<Sequence> {
        zip_kinds!(self, other, |l, r| binary_op(op, l, r, policy))
    }

    pub fn add(&self, other: &Sequence) -> Result<Sequence> {
        self.binary_op(BinaryOp::Add, other, OverflowPolicy::Wrap)
    }

    pub fn sub(&self, other: &Sequence) -> Result<Sequence> {
        self.binary_op(BinaryOp::Sub, other, OverflowPolicy::Wrap)
    }

    pub fn vec_mul(&self, other: &Sequence) -> Result<Sequence> {
        zip_kinds!(self, other, |l, r| vec_mul(l, r))
    }

    pub fn sum(&self) -> Result<Scalar> {
        Ok(match self {
            Sequence::Int32(v) => Scalar::Int32(sum(v)?),
            Sequence::Int64(v) => Scalar::Int64(sum(v)?),
            Sequence::Float32(v) => Scalar::Float32(sum(v)?),
            Sequence::Float64(v) => Scalar::Float64(sum(v)?),
        })
    }
}

impl From<Vec<i32>> for Sequence {
    fn from(v: Vec<i32>) -> Self {
        Sequence::Int32(v)
    }
}

impl From<Vec<i64>> for Sequence {
    fn from(v: Vec<i64>) -> Self {
        Sequence::Int64(v)
    }
}

impl From<Vec<f32>> for Sequence {
    fn from(v: Vec<f32>) -> Self {
        Sequence::Float32(v)
    }
}

impl From<Vec<f64>> for Sequence {
    fn from(v: Vec<f64>) -> Self {
        Sequence::Float64(v)
    }
}
