//! # lumen-math
//!
//! Generic numeric primitives for graphics and simulation code.
//!
//! This crate provides small fixed-size value types, generic over the scalar
//! they hold (any primitive integer, `f32`, `f64` or `half::f16`):
//!
//! - [`Tuple`] - `N` scalars plus a zero-sized kind tag
//! - [`Vec2`], [`Vec3`] - vectors with dot/cross products and rotations
//! - [`Color`] - RGB colors with conversion between channel types
//! - [`Quaternion`] - rotations, slerp and look-at
//!
//! ## Design Philosophy
//!
//! The core principle is **compile-time kind safety**. A vector and a color
//! share storage but are distinct types; they only mix where a conversion is
//! declared:
//!
//! ```rust
//! use lumen_math::{Color, Vec3};
//!
//! let v = Vec3::new(0.5f32, 0.25, 1.0);
//! let c: Color<f32> = v.into(); // declared conversion
//! // let bad = c + Vec2::new(1.0, 2.0); // compile error
//! assert_eq!(c.g(), 0.25);
//! ```
//!
//! Comparison with `==` is exact. Tolerant comparison is always explicit,
//! through [`equals_approximately`] or the [`Equivalent`] trait.
//!
//! ## Crate Structure
//!
//! ```text
//! scalar, equivalent
//!    ^
//!    +-- kind, tuple, format, space
//!          ^
//!          +-- vector, frame, color
//!                ^
//!                +-- quaternion
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Serialize/Deserialize for tuples and quaternions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod color;
pub mod constants;
pub mod equivalent;
pub mod error;
pub mod format;
pub mod frame;
pub mod kind;
pub mod quaternion;
pub mod scalar;
pub mod space;
pub mod tuple;
pub mod vector;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-exports for convenience
pub use color::{Color, brightness, luminance};
pub use equivalent::{Equivalent, equivalent};
pub use error::{Error, Result};
pub use kind::{ColorTag, ConvertibleTo, TupleKind, TupleTag, Vec2Tag, Vec3Tag};
pub use quaternion::{Quaternion, conjugate, inverse, slerp};
pub use scalar::{Real, Scalar};
pub use space::{InnerSpace, distance, distance_squared, dot, magnitude, magnitude_squared, normalize};
pub use tuple::{Tuple, equals_approximately, equals_exact};
pub use vector::{Vec2, Vec3, cross, reflect};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use lumen_math::prelude::*;
///
/// let q = Quaternion::<f32>::identity();
/// assert_eq!(Vec3::new(1.0, 2.0, 3.0) * q, Vec3::new(1.0, 2.0, 3.0));
/// ```
pub mod prelude {
    pub use crate::color::Color;
    pub use crate::equivalent::Equivalent;
    pub use crate::error::{Error, Result};
    pub use crate::frame::{
        get_basis_vectors, get_random_direction_on_cone_angle, get_random_direction_on_hemisphere,
        get_tangent,
    };
    pub use crate::kind::{ColorTag, ConvertibleTo, TupleKind, TupleTag, Vec2Tag, Vec3Tag};
    pub use crate::quaternion::Quaternion;
    pub use crate::scalar::{Real, Scalar};
    pub use crate::space::{
        InnerSpace, distance, distance_squared, dot, magnitude, magnitude_squared, normalize,
    };
    pub use crate::tuple::{Tuple, equals_approximately, equals_exact};
    pub use crate::vector::{Vec2, Vec3, cross, reflect};
}
