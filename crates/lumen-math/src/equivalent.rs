//! Tolerant scalar comparison.
//!
//! [`Equivalent`] decides whether two scalars are "the same number" once
//! floating-point rounding is taken into account. Integers compare exactly.
//!
//! # Algorithm
//!
//! For floating-point values `a` and `b` with tolerance `eps`:
//!
//! 1. `a == b` is equivalent (covers signed zeros and equal infinities)
//! 2. `|a - b| < eps` is equivalent (absolute margin near zero)
//! 3. otherwise equivalent iff `|a - b| / max(|a|, |b|) <= eps`
//!
//! NaN is never equivalent to anything, not even itself.
//!
//! # Tolerances
//!
//! | Type  | Tolerance            |
//! |-------|----------------------|
//! | `f16` | `4 * f16::EPSILON`   |
//! | `f32` | `50 * f32::EPSILON`  |
//! | `f64` | `25 * f64::EPSILON`  |
//! | ints  | exact                |
//!
//! # Usage
//!
//! ```rust
//! use lumen_math::equivalent;
//!
//! let sum: f64 = (0..10).map(|_| 0.1).sum();
//! assert!(sum != 1.0);
//! assert!(equivalent(sum, 1.0));
//! assert!(!equivalent(1.0, 1.01));
//! ```

use half::f16;
use num_traits::Float;

/// Approximate equality for scalar types.
pub trait Equivalent: Copy {
    /// Comparison tolerance. Zero for integers.
    const TOLERANCE: Self;

    /// Returns `true` if `self` and `other` are equal within [`Self::TOLERANCE`].
    fn equivalent(self, other: Self) -> bool;
}

/// Returns `true` if `a` and `b` are equivalent.
///
/// Free-function form of [`Equivalent::equivalent`].
#[inline]
pub fn equivalent<T: Equivalent>(a: T, b: T) -> bool {
    a.equivalent(b)
}

#[inline]
fn equivalent_float<F: Float>(a: F, b: F, tolerance: F) -> bool {
    if a == b {
        return true;
    }

    let diff = (a - b).abs();
    if diff < tolerance {
        return true;
    }

    // NaN falls through here and compares false
    diff / a.abs().max(b.abs()) <= tolerance
}

macro_rules! impl_equivalent_int {
    ($($t:ty),*) => {$(
        impl Equivalent for $t {
            const TOLERANCE: Self = 0;

            #[inline]
            fn equivalent(self, other: Self) -> bool {
                self == other
            }
        }
    )*};
}

impl_equivalent_int!(i8, i16, i32, i64, u8, u16, u32, u64);

impl Equivalent for f32 {
    const TOLERANCE: Self = 50.0 * f32::EPSILON;

    #[inline]
    fn equivalent(self, other: Self) -> bool {
        equivalent_float(self, other, Self::TOLERANCE)
    }
}

impl Equivalent for f64 {
    const TOLERANCE: Self = 25.0 * f64::EPSILON;

    #[inline]
    fn equivalent(self, other: Self) -> bool {
        equivalent_float(self, other, Self::TOLERANCE)
    }
}

impl Equivalent for f16 {
    const TOLERANCE: Self = f16::from_f32_const(4.0 * f16::EPSILON.to_f32_const());

    #[inline]
    fn equivalent(self, other: Self) -> bool {
        equivalent_float(self, other, Self::TOLERANCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summed<T: Float>(value: T, times: usize) -> T {
        (0..times).fold(T::zero(), |acc, _| acc + value)
    }

    #[test]
    fn test_equivalent_normal_values() {
        assert!(equivalent(summed(0.1f32, 10), 1.0));
        assert!(equivalent(summed(0.1f64, 10), 1.0));
        assert!(equivalent(summed(100.0f32, 10), 1000.0));
        assert!(equivalent(summed(100.0f64, 10), 1000.0));
    }

    #[test]
    fn test_equivalent_huge_values() {
        assert!(equivalent(summed(1.234e35f32, 10), 1.234e36));
        assert!(equivalent(summed(1.234e35f64, 10), 1.234e36));
    }

    #[test]
    fn test_equivalent_tiny_values() {
        assert!(equivalent(summed(1.234e-7f32, 10), 1.234e-6));
        assert!(equivalent(summed(1.234e-7f64, 10), 1.234e-6));
        assert!(equivalent(1e-30f32, 0.0));
        assert!(equivalent(-1e-30f64, -0.0));
    }

    #[test]
    fn test_equivalent_sanity() {
        for (a, b) in [(1.0, 1.1), (1.0, 1.05), (1.0, 1.01), (0.25, 0.2)] {
            assert!(!equivalent::<f32>(a as f32, b as f32));
            assert!(!equivalent::<f64>(a, b));
        }
        assert!(!equivalent(1e10f64, 1.005e10));
        assert!(!equivalent(1e10f32, 1.005e10));
        assert!(!equivalent(-1e-10f64, 1e-10));
        assert!(!equivalent(1e-5f64, 1.5e-5));
    }

    #[test]
    fn test_equivalent_zeroes() {
        assert!(equivalent(0.0f32, -0.0));
        let f = 0.1f64;
        assert!(equivalent(f - f, 0.0));
        assert!(equivalent(1000.0 * f - f * 1000.0, 0.0));
    }

    #[test]
    fn test_equivalent_infinities() {
        assert!(equivalent(f64::INFINITY, f64::INFINITY));
        assert!(equivalent(0.0f32.ln(), f32::NEG_INFINITY));
        assert!(!equivalent(f64::INFINITY, f64::NEG_INFINITY));
    }

    #[test]
    fn test_equivalent_nan() {
        assert!(!equivalent(f32::NAN, 0.0));
        assert!(!equivalent(f64::NAN, f64::NAN));
        assert!(!equivalent(f64::NAN, f64::INFINITY));
    }

    #[test]
    fn test_equivalent_integers_exact() {
        assert!(equivalent(12u8, 12));
        assert!(!equivalent(12i64, 13));
    }

    #[test]
    fn test_equivalent_half() {
        let a = f16::from_f32(0.1) + f16::from_f32(0.2);
        assert!(equivalent(a, f16::from_f32(0.3)));
        assert!(!equivalent(f16::from_f32(1.0), f16::from_f32(1.1)));
    }
}
