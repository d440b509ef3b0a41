//! Scalar element types.
//!
//! Every tuple, vector, color and quaternion in this crate is generic over a
//! [`Scalar`]: one of the primitive integers, `f32`, `f64`, or [`half::f16`].
//!
//! # Design
//!
//! The trait is a thin layer over [`num_traits`]. It adds what the generic
//! code needs on top of plain arithmetic:
//!
//! - whether the type is integral or floating ([`Scalar::IS_FLOAT`])
//! - its representable range ([`Scalar::MIN`], [`Scalar::MAX`])
//! - lossy bridges through `f64` and `i128` used by color conversion
//! - `square_root` and `absolute`, which also work on integers
//!
//! Floating-only operations (normalisation, rotation, slerp) are bounded on
//! [`Real`] instead, which adds [`num_traits::Float`].
//!
//! # Usage
//!
//! ```rust
//! use lumen_math::Scalar;
//!
//! assert!(!u8::IS_FLOAT);
//! assert_eq!(u8::MAX.as_f64(), 255.0);
//! assert_eq!(144i32.square_root(), 12);
//! ```
//!
//! # Dependencies
//!
//! - [`num_traits`] - numeric capability traits
//! - [`half`] - `f16` support

use crate::equivalent::Equivalent;
use half::f16;
use num_traits::{Float, Num, NumCast};
use std::fmt;
use std::str::FromStr;

/// Numeric element type of a tuple.
///
/// Implemented for `i8`, `i16`, `i32`, `i64`, `u8`, `u16`, `u32`, `u64`,
/// `f16`, `f32` and `f64`.
pub trait Scalar:
    Copy
    + Default
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + FromStr
    + Num
    + NumCast
    + Equivalent
    + Send
    + Sync
    + 'static
{
    /// Type name used in logs and diagnostics.
    const NAME: &'static str;

    /// Whether this is a floating-point type.
    const IS_FLOAT: bool;

    /// Smallest finite value.
    const MIN: Self;

    /// Largest finite value.
    const MAX: Self;

    /// Converts to `f64` with `as` semantics.
    fn as_f64(self) -> f64;

    /// Converts from `f64` with `as` semantics.
    ///
    /// Integers truncate toward zero and saturate at their range, NaN maps
    /// to zero.
    fn from_f64_lossy(v: f64) -> Self;

    /// Converts to `i128` with `as` semantics.
    fn as_i128(self) -> i128;

    /// Converts from `i128` with `as` semantics.
    fn from_i128_lossy(v: i128) -> Self;

    /// Square root. Integers return the truncated root.
    fn square_root(self) -> Self;

    /// Absolute value. Identity for unsigned integers, saturating at `MAX`
    /// for signed ones.
    fn absolute(self) -> Self;
}

/// Floating-point scalar.
///
/// Blanket-implemented for every [`Scalar`] that is also a
/// [`num_traits::Float`], so `f16`, `f32` and `f64`.
pub trait Real: Scalar + Float {}

impl<T: Scalar + Float> Real for T {}

macro_rules! impl_scalar_signed {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            const NAME: &'static str = stringify!($t);
            const IS_FLOAT: bool = false;
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;

            #[inline]
            fn as_f64(self) -> f64 { self as f64 }
            #[inline]
            fn from_f64_lossy(v: f64) -> Self { v as $t }
            #[inline]
            fn as_i128(self) -> i128 { self as i128 }
            #[inline]
            fn from_i128_lossy(v: i128) -> Self { v as $t }
            #[inline]
            fn square_root(self) -> Self { (self as f64).sqrt() as $t }
            #[inline]
            fn absolute(self) -> Self { self.saturating_abs() }
        }
    )*};
}

macro_rules! impl_scalar_unsigned {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            const NAME: &'static str = stringify!($t);
            const IS_FLOAT: bool = false;
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;

            #[inline]
            fn as_f64(self) -> f64 { self as f64 }
            #[inline]
            fn from_f64_lossy(v: f64) -> Self { v as $t }
            #[inline]
            fn as_i128(self) -> i128 { self as i128 }
            #[inline]
            fn from_i128_lossy(v: i128) -> Self { v as $t }
            #[inline]
            fn square_root(self) -> Self { (self as f64).sqrt() as $t }
            #[inline]
            fn absolute(self) -> Self { self }
        }
    )*};
}

macro_rules! impl_scalar_float {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            const NAME: &'static str = stringify!($t);
            const IS_FLOAT: bool = true;
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;

            #[inline]
            fn as_f64(self) -> f64 { self as f64 }
            #[inline]
            fn from_f64_lossy(v: f64) -> Self { v as $t }
            #[inline]
            fn as_i128(self) -> i128 { self as i128 }
            #[inline]
            fn from_i128_lossy(v: i128) -> Self { v as $t }
            #[inline]
            fn square_root(self) -> Self { self.sqrt() }
            #[inline]
            fn absolute(self) -> Self { self.abs() }
        }
    )*};
}

impl_scalar_signed!(i8, i16, i32, i64);
impl_scalar_unsigned!(u8, u16, u32, u64);
impl_scalar_float!(f32, f64);

impl Scalar for f16 {
    const NAME: &'static str = "f16";
    const IS_FLOAT: bool = true;
    const MIN: Self = f16::MIN;
    const MAX: Self = f16::MAX;

    #[inline]
    fn as_f64(self) -> f64 {
        f16::to_f64(self)
    }

    #[inline]
    fn from_f64_lossy(v: f64) -> Self {
        f16::from_f64(v)
    }

    #[inline]
    fn as_i128(self) -> i128 {
        f16::to_f64(self) as i128
    }

    #[inline]
    fn from_i128_lossy(v: i128) -> Self {
        f16::from_f64(v as f64)
    }

    #[inline]
    fn square_root(self) -> Self {
        f16::from_f32(f16::to_f32(self).sqrt())
    }

    #[inline]
    fn absolute(self) -> Self {
        Float::abs(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn largest<T: Scalar>() -> f64 {
        T::MAX.as_f64()
    }

    #[test]
    fn test_scalar_kind() {
        assert!(!i32::IS_FLOAT);
        assert!(!u64::IS_FLOAT);
        assert!(f32::IS_FLOAT);
        assert!(f16::IS_FLOAT);
        assert_eq!(u16::NAME, "u16");
    }

    #[test]
    fn test_scalar_range() {
        assert_eq!(largest::<u8>(), 255.0);
        assert_eq!(largest::<i16>(), 32767.0);
        assert_eq!(u32::MAX.as_i128(), 4_294_967_295);
        assert_eq!(i8::MIN.as_i128(), -128);
    }

    #[test]
    fn test_scalar_lossy_from_f64() {
        assert_eq!(u8::from_f64_lossy(300.7), 255);
        assert_eq!(u8::from_f64_lossy(-4.0), 0);
        assert_eq!(i32::from_f64_lossy(12.9), 12);
        assert_eq!(i32::from_f64_lossy(f64::NAN), 0);
        assert_eq!(f32::from_f64_lossy(0.5), 0.5);
    }

    #[test]
    fn test_scalar_square_root() {
        assert_eq!(625u32.square_root(), 25);
        assert_eq!(10i64.square_root(), 3);
        assert_eq!(2.25f64.square_root(), 1.5);
        assert_eq!(f16::from_f32(4.0).square_root(), f16::from_f32(2.0));
    }

    #[test]
    fn test_scalar_absolute() {
        assert_eq!((-7i16).absolute(), 7);
        assert_eq!(7u16.absolute(), 7);
        assert_eq!((-0.25f32).absolute(), 0.25);
        assert_eq!(i8::MIN.absolute(), i8::MAX);
        assert_eq!(i64::MIN.absolute(), i64::MAX);
    }
}
