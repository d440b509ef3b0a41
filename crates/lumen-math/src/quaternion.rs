//! Quaternions and 3D rotation.
//!
//! [`Quaternion`] stores a real part `r` and an imaginary part `(i, j, k)`.
//! Unit quaternions (versors) represent rotations; the operators never
//! normalise, while [`rotate`](Quaternion::rotate), [`slerp`](Quaternion::slerp)
//! and [`look_at`](Quaternion::look_at) normalise internally.
//!
//! # Usage
//!
//! ```rust
//! use lumen_math::{Quaternion, Vec3};
//! use std::f64::consts::PI;
//!
//! let q = Quaternion::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), PI / 2.0);
//! let v = Vec3::new(1.0, 0.0, 0.0) * q;
//! assert!((v.y() - 1.0).abs() < 1e-12);
//! ```
//!
//! # Conventions
//!
//! - Hamilton product: `a * b` applies `b` first, then `a`.
//! - `v * q` rotates `v` by `q`, right-handed.
//! - `Default` is the identity rotation, not the zero quaternion.
//!
//! # Dependencies
//!
//! - [`glam`] - `f32` interop (`glam::Quat`)

use crate::constants::{LOOK_AT_THRESHOLD, SLERP_THRESHOLD, pi};
use crate::error::{Error, Result};
use crate::format::parse_values;
use crate::frame::get_tangent;
use crate::scalar::{Real, Scalar};
use crate::space::InnerSpace;
use crate::vector::Vec3;
use num_traits::AsPrimitive;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;
use tracing::{debug, trace};

/// Quaternion `r + i·î + j·ĵ + k·k̂`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion<T> {
    /// Real part.
    pub r: T,
    /// First imaginary component.
    pub i: T,
    /// Second imaginary component.
    pub j: T,
    /// Third imaginary component.
    pub k: T,
}

impl<T> Quaternion<T> {
    /// Creates a quaternion from its four components.
    #[inline]
    pub const fn new(r: T, i: T, j: T, k: T) -> Self {
        Self { r, i, j, k }
    }

    /// Creates from `[r, i, j, k]`.
    #[inline]
    pub fn from_array([r, i, j, k]: [T; 4]) -> Self {
        Self { r, i, j, k }
    }

    /// Components as `[r, i, j, k]`.
    #[inline]
    pub fn to_array(self) -> [T; 4] {
        [self.r, self.i, self.j, self.k]
    }
}

impl<T: Scalar> Quaternion<T> {
    /// The identity rotation `(1, 0, 0, 0)`.
    #[inline]
    pub fn identity() -> Self {
        Self::new(T::one(), T::zero(), T::zero(), T::zero())
    }

    /// The zero quaternion.
    #[inline]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::zero())
    }

    /// Creates from a real part and a vector part.
    #[inline]
    pub fn from_parts(r: T, v: Vec3<T>) -> Self {
        Self::new(r, v.x(), v.y(), v.z())
    }

    /// Imaginary part as a vector.
    #[inline]
    pub fn vector_part(&self) -> Vec3<T> {
        Vec3::new(self.i, self.j, self.k)
    }

    /// Converts every component with `as` semantics.
    #[inline]
    pub fn cast<U: Scalar>(self) -> Quaternion<U>
    where
        T: AsPrimitive<U>,
    {
        Quaternion::new(self.r.as_(), self.i.as_(), self.j.as_(), self.k.as_())
    }

    /// Tolerant comparison, component by component.
    #[inline]
    pub fn equals_approximately(&self, other: &Self) -> bool {
        self.r.equivalent(other.r)
            && self.i.equivalent(other.i)
            && self.j.equivalent(other.j)
            && self.k.equivalent(other.k)
    }
}

impl<T: Scalar + Neg<Output = T>> Quaternion<T> {
    /// Conjugate `(r, -i, -j, -k)`.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(self.r, -self.i, -self.j, -self.k)
    }
}

impl<T: Real> Quaternion<T> {
    /// Rotation of `angle` radians about `axis`.
    ///
    /// # Panics
    ///
    /// Panics if `axis` is zero.
    pub fn from_axis_angle(axis: Vec3<T>, angle: T) -> Self {
        assert!(
            axis.magnitude_squared() != T::zero(),
            "rotation axis must be non-zero"
        );
        let half = angle / (T::one() + T::one());
        let (sin, cos) = half.sin_cos();
        Self::from_parts(cos, axis.normalize() * sin)
    }

    /// Multiplicative inverse `conjugate / |q|²`.
    #[inline]
    pub fn inverse(self) -> Self {
        self.conjugate() / self.magnitude_squared()
    }

    /// Rotates `v` by this quaternion after normalising it.
    ///
    /// # Panics
    ///
    /// Panics if `self` is zero.
    pub fn rotate(self, v: Vec3<T>) -> Vec3<T> {
        assert!(
            self.magnitude_squared() != T::zero(),
            "cannot rotate by a zero quaternion"
        );
        let q = self.normalize();
        let (x, y, z) = (v.x(), v.y(), v.z());

        // v * q^-1
        let r = q.i * x + q.j * y + q.k * z;
        let i = q.r * x + q.j * z - q.k * y;
        let j = q.r * y - q.i * z + q.k * x;
        let k = q.r * z + q.i * y - q.j * x;

        // q * (v * q^-1), real part cancels
        Vec3::new(
            r * q.i + i * q.r - j * q.k + k * q.j,
            r * q.j + i * q.k + j * q.r - k * q.i,
            r * q.k - i * q.j + j * q.i + k * q.r,
        )
    }

    /// Spherical linear interpolation along the shorter arc.
    ///
    /// Both inputs are normalised. Nearly parallel inputs fall back to
    /// normalised linear interpolation.
    #[inline]
    pub fn slerp(self, other: Self, t: T) -> Self {
        self.slerp_with_threshold(other, t, T::from_f64_lossy(SLERP_THRESHOLD))
    }

    /// [`slerp`](Self::slerp) with an explicit near-parallel cosine threshold.
    pub fn slerp_with_threshold(self, other: Self, t: T, threshold: T) -> Self {
        let a = self.normalize();
        let mut b = other.normalize();
        let mut d = a.dot(b);

        if d < T::zero() {
            b = -b;
            d = -d;
        }

        if d >= threshold {
            trace!(dot = ?d, "Quaternion::slerp near-parallel, using nlerp");
            return (a * (T::one() - t) + b * t).normalize();
        }

        let theta_0 = d.min(T::one()).acos();
        let theta = theta_0 * t;
        let s1 = theta.sin() / theta_0.sin();
        let s0 = theta.cos() - d * s1;

        a * s0 + b * s1
    }

    /// Shortest rotation turning direction `from` into direction `to`.
    ///
    /// Opposite directions rotate half a turn about a tangent of `from`.
    pub fn look_at(from: Vec3<T>, to: Vec3<T>) -> Self {
        let k_cos_theta = from.dot(to);
        let k = (from.magnitude_squared() * to.magnitude_squared()).sqrt();

        if k_cos_theta / k < -T::from_f64_lossy(LOOK_AT_THRESHOLD) {
            trace!("Quaternion::look_at opposite directions");
            return Self::from_axis_angle(get_tangent(from), pi());
        }

        Self::from_parts(k_cos_theta + k, from.cross(to)).normalize()
    }
}

/// Spherical linear interpolation between `a` and `b`.
#[inline]
pub fn slerp<T: Real>(a: Quaternion<T>, b: Quaternion<T>, t: T) -> Quaternion<T> {
    a.slerp(b, t)
}

/// Conjugate of `q`.
#[inline]
pub fn conjugate<T: Scalar + Neg<Output = T>>(q: Quaternion<T>) -> Quaternion<T> {
    q.conjugate()
}

/// Inverse of `q`.
#[inline]
pub fn inverse<T: Real>(q: Quaternion<T>) -> Quaternion<T> {
    q.inverse()
}

impl<T: Scalar> Default for Quaternion<T> {
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Scalar> InnerSpace for Quaternion<T> {
    type Element = T;

    #[inline]
    fn dot(self, other: Self) -> T {
        self.r * other.r + self.i * other.i + self.j * other.j + self.k * other.k
    }

    #[inline]
    fn map_elements<F: FnMut(T) -> T>(self, mut f: F) -> Self {
        Self::new(f(self.r), f(self.i), f(self.j), f(self.k))
    }

    #[inline]
    fn abs_diff(self, other: Self) -> Self {
        let diff = |a: T, b: T| if a > b { a - b } else { b - a };
        Self::new(
            diff(self.r, other.r),
            diff(self.i, other.i),
            diff(self.j, other.j),
            diff(self.k, other.k),
        )
    }
}

impl<T> From<[T; 4]> for Quaternion<T> {
    #[inline]
    fn from(a: [T; 4]) -> Self {
        Self::from_array(a)
    }
}

impl<T> From<Quaternion<T>> for [T; 4] {
    #[inline]
    fn from(q: Quaternion<T>) -> Self {
        q.to_array()
    }
}

// ============================================================================
// Operators
// ============================================================================

// Quaternion + Quaternion
impl<T: Scalar> Add for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.r + rhs.r, self.i + rhs.i, self.j + rhs.j, self.k + rhs.k)
    }
}

// Quaternion - Quaternion
impl<T: Scalar> Sub for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.r - rhs.r, self.i - rhs.i, self.j - rhs.j, self.k - rhs.k)
    }
}

impl<T: Scalar> AddAssign for Quaternion<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign for Quaternion<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

// Quaternion * Quaternion (Hamilton)
impl<T: Scalar> Mul for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn mul(self, b: Self) -> Self {
        let a = self;
        Self::new(
            a.r * b.r - a.i * b.i - a.j * b.j - a.k * b.k,
            a.r * b.i + a.i * b.r + a.j * b.k - a.k * b.j,
            a.r * b.j - a.i * b.k + a.j * b.r + a.k * b.i,
            a.r * b.k + a.i * b.j - a.j * b.i + a.k * b.r,
        )
    }
}

impl<T: Scalar> MulAssign for Quaternion<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

// Quaternion * scalar
impl<T: Scalar> Mul<T> for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn mul(self, s: T) -> Self {
        self.map_elements(|v| v * s)
    }
}

// Quaternion / scalar
impl<T: Scalar> Div<T> for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn div(self, s: T) -> Self {
        self.map_elements(|v| v / s)
    }
}

impl<T: Scalar> MulAssign<T> for Quaternion<T> {
    #[inline]
    fn mul_assign(&mut self, s: T) {
        *self = *self * s;
    }
}

impl<T: Scalar> DivAssign<T> for Quaternion<T> {
    #[inline]
    fn div_assign(&mut self, s: T) {
        *self = *self / s;
    }
}

// Quaternion / Quaternion
impl<T: Real> Div for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}

impl<T: Real> DivAssign for Quaternion<T> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

// -Quaternion
impl<T: Scalar + Neg<Output = T>> Neg for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map_elements(|v| -v)
    }
}

// Vec3 * Quaternion
impl<T: Real> Mul<Quaternion<T>> for Vec3<T> {
    type Output = Self;

    #[inline]
    fn mul(self, q: Quaternion<T>) -> Self {
        q.rotate(self)
    }
}

impl<T: Real> MulAssign<Quaternion<T>> for Vec3<T> {
    #[inline]
    fn mul_assign(&mut self, q: Quaternion<T>) {
        *self = q.rotate(*self);
    }
}

// scalar * Quaternion
macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {$(
        impl Mul<Quaternion<$t>> for $t {
            type Output = Quaternion<$t>;

            #[inline]
            fn mul(self, q: Quaternion<$t>) -> Quaternion<$t> {
                q * self
            }
        }
    )*};
}

impl_scalar_lhs_mul!(i8, i16, i32, i64, u8, u16, u32, u64, half::f16, f32, f64);

// ============================================================================
// Text form
// ============================================================================

impl<T: fmt::Display> fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {} {} {}}}", self.r, self.i, self.j, self.k)
    }
}

impl<T: Scalar> FromStr for Quaternion<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_values::<T, 4>(s)
            .map(Self::from_array)
            .inspect_err(|err| debug!(kind = "quaternion", input = s, %err, "Rejected quaternion text"))
    }
}

// ============================================================================
// glam interop
// ============================================================================

impl Quaternion<f32> {
    /// Converts to glam Quat.
    #[inline]
    pub fn to_glam(self) -> glam::Quat {
        glam::Quat::from_xyzw(self.i, self.j, self.k, self.r)
    }

    /// Creates from glam Quat.
    #[inline]
    pub fn from_glam(q: glam::Quat) -> Self {
        let [x, y, z, w] = q.to_array();
        Self::new(w, x, y, z)
    }
}

impl From<glam::Quat> for Quaternion<f32> {
    #[inline]
    fn from(q: glam::Quat) -> Self {
        Self::from_glam(q)
    }
}

impl From<Quaternion<f32>> for glam::Quat {
    #[inline]
    fn from(q: Quaternion<f32>) -> glam::Quat {
        q.to_glam()
    }
}
