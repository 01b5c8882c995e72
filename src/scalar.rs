//! Element-type abstraction for the floating-point kernels.
//!
//! The kernels are generic functions monomorphized per precision; which
//! monomorphization runs is decided once, at the CLI boundary, from the
//! dtype tag. Kernel logic itself never branches on precision.

use std::ops::{Add, AddAssign, Mul, Sub};

/// Floating-point element usable by the GEMM and reduction kernels.
///
/// Implemented for `f32` and `f64` only. Carries the additive identity,
/// the dtype label used in result records, and conversions to/from `f64`
/// (input generation draws in `f64` and converts down; checksums convert
/// back up).
pub trait Scalar:
    Copy
    + Default
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + AddAssign
{
    /// Additive identity.
    const ZERO: Self;

    /// Label written to the `dtype` column of result records.
    const LABEL: &'static str;

    fn from_f64(x: f64) -> Self;

    fn to_f64(self) -> f64;
}

impl Scalar for f32 {
    const ZERO: Self = 0.0;
    const LABEL: &'static str = "float";

    fn from_f64(x: f64) -> Self {
        x as f32
    }

    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Scalar for f64 {
    const ZERO: Self = 0.0;
    const LABEL: &'static str = "double";

    fn from_f64(x: f64) -> Self {
        x
    }

    fn to_f64(self) -> f64 {
        self
    }
}
