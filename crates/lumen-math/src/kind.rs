//! Tuple kinds and the conversion table between them.
//!
//! A tuple's kind is a zero-sized marker type carried as a type parameter,
//! so a `Vec3<f32>` and a `Color<f32>` share storage but are distinct types.
//!
//! # Design
//!
//! Kinds implement [`TupleKind`]. Which kinds may be turned into which is
//! declared once, in this file, by implementing [`ConvertibleTo`]:
//!
//! | From      | To                      |
//! |-----------|-------------------------|
//! | any kind  | itself                  |
//! | any kind  | [`TupleTag`]            |
//! | [`Vec2Tag`] | [`Vec3Tag`]           |
//! | [`Vec3Tag`] | [`Vec2Tag`], [`ColorTag`] |
//! | [`ColorTag`] | [`Vec3Tag`]          |
//!
//! Nothing else converts. Mixing a vector with a color in arithmetic, or
//! retagging a plain tuple as a vector, is a compile error.
//!
//! # Usage
//!
//! ```rust
//! use lumen_math::{ConvertibleTo, TupleKind, Vec3Tag, ColorTag};
//!
//! fn assert_convertible<A: ConvertibleTo<B>, B: TupleKind>() {}
//! assert_convertible::<Vec3Tag, ColorTag>();
//! assert_eq!(ColorTag::NAME, "color");
//! ```

use std::fmt;
use std::hash::Hash;

/// Marker trait for tuple kinds.
///
/// Kinds never carry data; they only steer which operations type-check.
pub trait TupleKind:
    Copy + Clone + Default + PartialEq + Eq + Hash + Send + Sync + fmt::Debug + 'static
{
    /// Human-readable kind name, used in `Debug` output and logs.
    const NAME: &'static str;
}

/// Declares that tuples of kind `Self` may be viewed as kind `K`.
///
/// Governs retagging, widening, narrowing and cross-kind addition.
pub trait ConvertibleTo<K: TupleKind>: TupleKind {}

impl<K: TupleKind> ConvertibleTo<K> for K {}

/// Plain tuple with no geometric or color meaning.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TupleTag;

/// Two-dimensional vector.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vec2Tag;

/// Three-dimensional vector.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vec3Tag;

/// RGB color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ColorTag;

impl TupleKind for TupleTag {
    const NAME: &'static str = "tuple";
}

impl TupleKind for Vec2Tag {
    const NAME: &'static str = "vec2";
}

impl TupleKind for Vec3Tag {
    const NAME: &'static str = "vec3";
}

impl TupleKind for ColorTag {
    const NAME: &'static str = "color";
}

macro_rules! convertible {
    ($($from:ty => $to:ty),* $(,)?) => {
        $(impl ConvertibleTo<$to> for $from {})*
    };
}

convertible! {
    Vec2Tag => TupleTag,
    Vec3Tag => TupleTag,
    ColorTag => TupleTag,
    Vec2Tag => Vec3Tag,
    Vec3Tag => Vec2Tag,
    Vec3Tag => ColorTag,
    ColorTag => Vec3Tag,
}
