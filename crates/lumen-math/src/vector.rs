//! 2D and 3D vectors.
//!
//! [`Vec2`] and [`Vec3`] are [`Tuple`]s tagged [`Vec2Tag`] and [`Vec3Tag`].
//! They get the full tuple arithmetic plus named accessors and geometric
//! operations: cross product, axis rotations and reflection.
//!
//! # Usage
//!
//! ```rust
//! use lumen_math::Vec3;
//!
//! let x = Vec3::new(1, 0, 0);
//! let y = Vec3::new(0, 1, 0);
//! assert_eq!(x.cross(y), Vec3::new(0, 0, 1));
//! ```
//!
//! # Conventions
//!
//! - Right-handed coordinates, `x.cross(y) == z`.
//! - Rotations are right-hand rotations about the cardinal axes, angles in
//!   radians.
//!
//! # Dependencies
//!
//! - [`glam`] - `f32` interop (`glam::Vec2`, `glam::Vec3`)

use crate::kind::{Vec2Tag, Vec3Tag};
use crate::scalar::{Real, Scalar};
use crate::space::InnerSpace;
use crate::tuple::Tuple;

/// 2D vector.
pub type Vec2<T> = Tuple<T, 2, Vec2Tag>;

/// 3D vector.
pub type Vec3<T> = Tuple<T, 3, Vec3Tag>;

// ============================================================================
// Vec2
// ============================================================================

impl<T> Vec2<T> {
    /// Creates a new vector.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self::from_array([x, y])
    }
}

impl<T: Copy> Vec2<T> {
    /// X component.
    #[inline]
    pub fn x(&self) -> T {
        self[0]
    }

    /// Y component.
    #[inline]
    pub fn y(&self) -> T {
        self[1]
    }

    /// Mutable X component.
    #[inline]
    pub fn x_mut(&mut self) -> &mut T {
        &mut self[0]
    }

    /// Mutable Y component.
    #[inline]
    pub fn y_mut(&mut self) -> &mut T {
        &mut self[1]
    }
}

impl<T: Real> Vec2<T> {
    /// Rotates counter-clockwise by `theta` radians.
    #[inline]
    pub fn rotate(self, theta: T) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self::new(
            self.x() * cos - self.y() * sin,
            self.x() * sin + self.y() * cos,
        )
    }
}

// ============================================================================
// Vec3
// ============================================================================

impl<T> Vec3<T> {
    /// Creates a new vector.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self::from_array([x, y, z])
    }
}

impl<T: Copy> Vec3<T> {
    /// X component.
    #[inline]
    pub fn x(&self) -> T {
        self[0]
    }

    /// Y component.
    #[inline]
    pub fn y(&self) -> T {
        self[1]
    }

    /// Z component.
    #[inline]
    pub fn z(&self) -> T {
        self[2]
    }

    /// Mutable X component.
    #[inline]
    pub fn x_mut(&mut self) -> &mut T {
        &mut self[0]
    }

    /// Mutable Y component.
    #[inline]
    pub fn y_mut(&mut self) -> &mut T {
        &mut self[1]
    }

    /// Mutable Z component.
    #[inline]
    pub fn z_mut(&mut self) -> &mut T {
        &mut self[2]
    }
}

impl<T: Scalar> Vec3<T> {
    /// Cross product, right-handed.
    ///
    /// Anticommutative, and zero for parallel operands.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y() * other.z() - self.z() * other.y(),
            self.z() * other.x() - self.x() * other.z(),
            self.x() * other.y() - self.y() * other.x(),
        )
    }
}

impl<T: Real> Vec3<T> {
    /// Rotates about the X axis by `theta` radians.
    #[inline]
    pub fn rotate_x(self, theta: T) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self::new(
            self.x(),
            self.y() * cos - self.z() * sin,
            self.y() * sin + self.z() * cos,
        )
    }

    /// Rotates about the Y axis by `theta` radians.
    #[inline]
    pub fn rotate_y(self, theta: T) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self::new(
            self.x() * cos + self.z() * sin,
            self.y(),
            -self.x() * sin + self.z() * cos,
        )
    }

    /// Rotates about the Z axis by `theta` radians.
    #[inline]
    pub fn rotate_z(self, theta: T) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self::new(
            self.x() * cos - self.y() * sin,
            self.x() * sin + self.y() * cos,
            self.z(),
        )
    }

    /// Reflects `self` about the surface with unit `normal`:
    /// `self - 2 * dot(self, normal) * normal`.
    ///
    /// `self` is expected to be a unit direction, checked in debug builds.
    #[inline]
    pub fn reflect(self, normal: Self) -> Self {
        debug_assert!(
            (self.magnitude_squared() - T::one()).abs() <= T::from_f64_lossy(1e-3),
            "reflect expects a unit direction"
        );
        let two = T::one() + T::one();
        self - normal * (two * self.dot(normal))
    }
}

/// Cross product of two 3D vectors.
#[inline]
pub fn cross<T: Scalar>(a: Vec3<T>, b: Vec3<T>) -> Vec3<T> {
    a.cross(b)
}

/// Reflection of unit `direction` about `normal`.
#[inline]
pub fn reflect<T: Real>(direction: Vec3<T>, normal: Vec3<T>) -> Vec3<T> {
    direction.reflect(normal)
}

impl<T: Scalar> From<Vec2<T>> for Vec3<T> {
    #[inline]
    fn from(v: Vec2<T>) -> Self {
        v.widen()
    }
}

// ============================================================================
// glam interop
// ============================================================================

impl Vec2<f32> {
    /// Converts to glam Vec2.
    #[inline]
    pub fn to_glam(self) -> glam::Vec2 {
        glam::Vec2::from_array(self.into_array())
    }

    /// Creates from glam Vec2.
    #[inline]
    pub fn from_glam(v: glam::Vec2) -> Self {
        Self::from_array(v.to_array())
    }
}

impl Vec3<f32> {
    /// Converts to glam Vec3.
    #[inline]
    pub fn to_glam(self) -> glam::Vec3 {
        glam::Vec3::from_array(self.into_array())
    }

    /// Creates from glam Vec3.
    #[inline]
    pub fn from_glam(v: glam::Vec3) -> Self {
        Self::from_array(v.to_array())
    }
}

impl From<glam::Vec2> for Vec2<f32> {
    #[inline]
    fn from(v: glam::Vec2) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vec2<f32>> for glam::Vec2 {
    #[inline]
    fn from(v: Vec2<f32>) -> glam::Vec2 {
        v.to_glam()
    }
}

impl From<glam::Vec3> for Vec3<f32> {
    #[inline]
    fn from(v: glam::Vec3) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vec3<f32>> for glam::Vec3 {
    #[inline]
    fn from(v: Vec3<f32>) -> glam::Vec3 {
        v.to_glam()
    }
}
