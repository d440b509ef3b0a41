//! Inner-product operations shared by tuples and quaternions.
//!
//! [`InnerSpace`] is the one capability the metric helpers need: a dot
//! product and an elementwise map. Everything else (magnitude, normalisation,
//! distance) is derived from it, and exposed both as trait methods and as
//! free functions.
//!
//! # Usage
//!
//! ```rust
//! use lumen_math::{dot, magnitude, normalize, Vec3};
//!
//! let v = Vec3::new(1.0f64, 2.0, 2.0);
//! assert_eq!(magnitude(v), 3.0);
//! assert_eq!(dot(v, Vec3::new(0.0, 1.0, 0.0)), 2.0);
//! assert_eq!(normalize(Vec3::new(0.0f32, 0.0, 5.0)), Vec3::new(0.0, 0.0, 1.0));
//! ```

use crate::kind::TupleKind;
use crate::scalar::{Real, Scalar};
use crate::tuple::Tuple;
use num_traits::Zero;

/// Types with a dot product over [`Scalar`] elements.
pub trait InnerSpace: Copy {
    /// Element type.
    type Element: Scalar;

    /// Sum of elementwise products.
    fn dot(self, other: Self) -> Self::Element;

    /// Applies `f` to every element.
    fn map_elements<F: FnMut(Self::Element) -> Self::Element>(self, f: F) -> Self;

    /// Elementwise `|self - other|`, computed without unsigned underflow.
    fn abs_diff(self, other: Self) -> Self;

    /// Squared magnitude.
    #[inline]
    fn magnitude_squared(self) -> Self::Element {
        self.dot(self)
    }

    /// Magnitude. Integral elements give the truncated root.
    #[inline]
    fn magnitude(self) -> Self::Element {
        self.magnitude_squared().square_root()
    }

    /// Scales to unit magnitude.
    ///
    /// # Panics
    ///
    /// Panics if the magnitude is zero.
    #[inline]
    fn normalize(self) -> Self
    where
        Self::Element: Real,
    {
        let magnitude = self.magnitude();
        assert!(
            magnitude != <Self::Element as Zero>::zero(),
            "cannot normalize a zero-magnitude value"
        );
        self.map_elements(|v| v / magnitude)
    }

    /// Squared distance between `self` and `other`.
    #[inline]
    fn distance_squared(self, other: Self) -> Self::Element {
        self.abs_diff(other).magnitude_squared()
    }

    /// Distance between `self` and `other`.
    #[inline]
    fn distance(self, other: Self) -> Self::Element {
        self.abs_diff(other).magnitude()
    }
}

impl<T: Scalar, const N: usize, K: TupleKind> InnerSpace for Tuple<T, N, K> {
    type Element = T;

    #[inline]
    fn dot(self, other: Self) -> T {
        self.iter()
            .zip(other.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    #[inline]
    fn map_elements<F: FnMut(T) -> T>(self, f: F) -> Self {
        self.map(f)
    }

    #[inline]
    fn abs_diff(self, other: Self) -> Self {
        self.zip_map(other, |a, b| if a > b { a - b } else { b - a })
    }
}

/// Dot product.
#[inline]
pub fn dot<V: InnerSpace>(a: V, b: V) -> V::Element {
    a.dot(b)
}

/// Magnitude (length).
#[inline]
pub fn magnitude<V: InnerSpace>(v: V) -> V::Element {
    v.magnitude()
}

/// Squared magnitude.
#[inline]
pub fn magnitude_squared<V: InnerSpace>(v: V) -> V::Element {
    v.magnitude_squared()
}

/// Unit-magnitude copy of `v`.
///
/// # Panics
///
/// Panics if `v` has zero magnitude.
#[inline]
pub fn normalize<V: InnerSpace>(v: V) -> V
where
    V::Element: Real,
{
    v.normalize()
}

/// Distance between two points.
#[inline]
pub fn distance<V: InnerSpace>(a: V, b: V) -> V::Element {
    a.distance(b)
}

/// Squared distance between two points.
#[inline]
pub fn distance_squared<V: InnerSpace>(a: V, b: V) -> V::Element {
    a.distance_squared(b)
}
