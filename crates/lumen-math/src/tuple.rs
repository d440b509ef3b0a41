//! Fixed-size tagged tuples.
//!
//! [`Tuple`] is the storage and arithmetic core of the crate: `N` scalars of
//! type `T`, tagged with a zero-sized kind `K`. Vectors and colors are type
//! aliases of it with a specific kind.
//!
//! # Design
//!
//! - Storage is a plain `[T; N]` plus `PhantomData<K>`, `#[repr(C)]`, so a
//!   tuple has exactly the layout of its array.
//! - Kinds only matter at compile time. Arithmetic between kinds, retagging
//!   and resizing all require a [`ConvertibleTo`] declaration.
//! - `N == 0` is rejected at compile time.
//!
//! # Operators
//!
//! | Expression                 | Requirement                          |
//! |----------------------------|--------------------------------------|
//! | `a + b`, `a - b`, `+=`, `-=` | `b`'s kind converts into `a`'s kind |
//! | `a * s`, `a / s`, `a % s`  | `s: T`                               |
//! | `s * a`                    | `s` is a primitive scalar            |
//! | `a * b`, `a / b`, `a % b`  | same kind, componentwise             |
//! | `-a`                       | signed `T`                           |
//!
//! # Usage
//!
//! ```rust
//! use lumen_math::{Tuple, Vec3};
//!
//! let t: Tuple<i32, 3> = Tuple::from_partial(&[1]);
//! assert_eq!(t.into_array(), [1, 0, 0]);
//!
//! let v = Vec3::new(1, 2, 3);
//! let sum = t + v; // vec3 converts into a plain tuple
//! assert_eq!(sum.into_array(), [2, 2, 3]);
//! ```

use crate::kind::{ConvertibleTo, TupleKind, TupleTag};
use crate::scalar::{Real, Scalar};
use half::f16;
use num_traits::AsPrimitive;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Rem, RemAssign, Sub,
    SubAssign,
};

/// `N` values of `T` tagged with kind `K`.
///
/// See the [module documentation](self) for the operator table.
#[repr(C)]
pub struct Tuple<T, const N: usize, K = TupleTag> {
    data: [T; N],
    _kind: PhantomData<K>,
}

impl<T, const N: usize, K> Tuple<T, N, K> {
    /// Number of elements.
    pub const LEN: usize = N;

    /// Creates a tuple from its elements.
    #[inline]
    pub const fn from_array(data: [T; N]) -> Self {
        const { assert!(N > 0, "tuples must hold at least one element") };
        Self {
            data,
            _kind: PhantomData,
        }
    }

    /// Borrows the elements.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.data
    }

    /// Mutably borrows the elements.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.data
    }

    /// Returns the elements.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.data
    }

    /// Iterates over the elements.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterates mutably over the elements.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Applies `f` to every element, keeping the kind.
    #[inline]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Tuple<U, N, K> {
        Tuple::from_array(self.data.map(f))
    }
}

impl<T: Copy, const N: usize, K> Tuple<T, N, K> {
    /// Combines two tuples element by element.
    #[inline]
    pub fn zip_map<U: Copy, R, K2, F>(self, other: Tuple<U, N, K2>, mut f: F) -> Tuple<R, N, K>
    where
        F: FnMut(T, U) -> R,
    {
        Tuple::from_array(std::array::from_fn(|i| f(self.data[i], other.data[i])))
    }

    /// Returns element `I`, checking the index at compile time.
    ///
    /// ```rust
    /// use lumen_math::Vec3;
    ///
    /// let v = Vec3::new(1, 2, 3);
    /// assert_eq!(v.get::<2>(), 3);
    /// ```
    #[inline]
    pub fn get<const I: usize>(&self) -> T {
        const { assert!(I < N, "tuple element index out of range") };
        self.data[I]
    }

    /// Builds a two-element tuple from the elements at `A` and `B`.
    ///
    /// Indices are checked at compile time. The kind is kept.
    #[inline]
    pub fn swizzle2<const A: usize, const B: usize>(&self) -> Tuple<T, 2, K> {
        const { assert!(A < N && B < N, "swizzle index out of range") };
        Tuple::from_array([self.data[A], self.data[B]])
    }

    /// Builds a three-element tuple from the elements at `A`, `B` and `C`.
    ///
    /// ```rust
    /// use lumen_math::Vec3;
    ///
    /// let v = Vec3::new(1, 2, 3);
    /// assert_eq!(v.swizzle3::<2, 1, 0>(), Vec3::new(3, 2, 1));
    /// ```
    #[inline]
    pub fn swizzle3<const A: usize, const B: usize, const C: usize>(&self) -> Tuple<T, 3, K> {
        const { assert!(A < N && B < N && C < N, "swizzle index out of range") };
        Tuple::from_array([self.data[A], self.data[B], self.data[C]])
    }

    /// Builds a four-element tuple from the elements at `A`, `B`, `C` and `D`.
    #[inline]
    pub fn swizzle4<const A: usize, const B: usize, const C: usize, const D: usize>(
        &self,
    ) -> Tuple<T, 4, K> {
        const { assert!(A < N && B < N && C < N && D < N, "swizzle index out of range") };
        Tuple::from_array([self.data[A], self.data[B], self.data[C], self.data[D]])
    }

    /// Runtime-indexed swizzle.
    ///
    /// # Panics
    ///
    /// Panics if any index is `>= N`.
    #[inline]
    pub fn gather<const M: usize>(&self, indices: [usize; M]) -> Tuple<T, M, K> {
        Tuple::from_array(indices.map(|i| self[i]))
    }
}

// ============================================================================
// Construction and conversion
// ============================================================================

impl<T: Scalar, const N: usize, K: TupleKind> Tuple<T, N, K> {
    /// Creates a tuple with every element set to `value`.
    #[inline]
    pub fn splat(value: T) -> Self {
        Self::from_array([value; N])
    }

    /// Creates the all-zero tuple.
    #[inline]
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    /// Creates a tuple from up to `N` leading values.
    ///
    /// Extra values are ignored, missing trailing values are zero.
    #[inline]
    pub fn from_partial(values: &[T]) -> Self {
        let mut data = [T::zero(); N];
        for (dst, src) in data.iter_mut().zip(values) {
            *dst = *src;
        }
        Self::from_array(data)
    }

    /// Creates a tuple from an array of any length, with the rule of
    /// [`from_partial`](Self::from_partial).
    #[inline]
    pub fn resize_from<const M: usize>(values: [T; M]) -> Self {
        Self::from_partial(&values)
    }

    /// Views this tuple as another kind of the same length.
    #[inline]
    pub fn retag<K2: TupleKind>(self) -> Tuple<T, N, K2>
    where
        K: ConvertibleTo<K2>,
    {
        Tuple::from_array(self.data)
    }

    /// Converts into a tuple with at least as many elements, zero-filling.
    ///
    /// ```rust
    /// use lumen_math::{Vec2, Vec3, Vec3Tag};
    ///
    /// let v: Vec3<i32> = Vec2::new(4, 5).widen::<3, Vec3Tag>();
    /// assert_eq!(v, Vec3::new(4, 5, 0));
    /// ```
    #[inline]
    pub fn widen<const M: usize, K2: TupleKind>(self) -> Tuple<T, M, K2>
    where
        K: ConvertibleTo<K2>,
    {
        const { assert!(M >= N, "widen cannot shrink a tuple, use narrow") };
        Tuple::from_partial(&self.data)
    }

    /// Converts into a tuple with at most as many elements, keeping the
    /// leading ones.
    #[inline]
    pub fn narrow<const M: usize, K2: TupleKind>(self) -> Tuple<T, M, K2>
    where
        K: ConvertibleTo<K2>,
    {
        const { assert!(M <= N, "narrow cannot grow a tuple, use widen") };
        Tuple::from_partial(&self.data)
    }

    /// Converts every element to another scalar type with `as` semantics.
    #[inline]
    pub fn cast<U: Scalar>(self) -> Tuple<U, N, K>
    where
        T: AsPrimitive<U>,
    {
        self.map(|v| v.as_())
    }

    /// Sum of all elements.
    #[inline]
    pub fn sum(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, &v| acc + v)
    }

    /// Componentwise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        self.zip_map(other, |a, b| if b < a { b } else { a })
    }

    /// Componentwise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        self.zip_map(other, |a, b| if b > a { b } else { a })
    }

    /// Componentwise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        self.map(Scalar::absolute)
    }

    /// Exact comparison with a tuple of a convertible kind.
    #[inline]
    pub fn equals_exact<K2>(&self, other: &Tuple<T, N, K2>) -> bool
    where
        K2: ConvertibleTo<K>,
    {
        self.data == other.data
    }

    /// Tolerant comparison with a tuple of a convertible kind.
    ///
    /// Each element pair is compared with [`Equivalent`](crate::Equivalent).
    #[inline]
    pub fn equals_approximately<K2>(&self, other: &Tuple<T, N, K2>) -> bool
    where
        K2: ConvertibleTo<K>,
    {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.equivalent(*b))
    }

    /// Componentwise `self < other`.
    #[inline]
    pub fn less_than(&self, other: &Self) -> Tuple<bool, N, K> {
        self.zip_map(*other, |a, b| a < b)
    }

    /// Componentwise `self <= other`.
    #[inline]
    pub fn less_equal(&self, other: &Self) -> Tuple<bool, N, K> {
        self.zip_map(*other, |a, b| a <= b)
    }

    /// Componentwise `self > other`.
    #[inline]
    pub fn greater_than(&self, other: &Self) -> Tuple<bool, N, K> {
        self.zip_map(*other, |a, b| a > b)
    }

    /// Componentwise `self >= other`.
    #[inline]
    pub fn greater_equal(&self, other: &Self) -> Tuple<bool, N, K> {
        self.zip_map(*other, |a, b| a >= b)
    }
}

impl<T: Real, const N: usize, K: TupleKind> Tuple<T, N, K> {
    /// Linear interpolation. `t = 0` gives `self`, `t = 1` gives `other`.
    #[inline]
    pub fn lerp(self, other: Self, t: T) -> Self {
        self.zip_map(other, |a, b| a * (T::one() - t) + b * t)
    }
}

impl<const N: usize, K> Tuple<bool, N, K> {
    /// Returns `true` if every element is `true`.
    #[inline]
    pub fn all(&self) -> bool {
        self.data.iter().all(|&b| b)
    }

    /// Returns `true` if any element is `true`.
    #[inline]
    pub fn any(&self) -> bool {
        self.data.iter().any(|&b| b)
    }
}

/// Exact comparison of two tuples of convertible kinds.
#[inline]
pub fn equals_exact<T: Scalar, const N: usize, K: TupleKind, K2: ConvertibleTo<K>>(
    a: &Tuple<T, N, K>,
    b: &Tuple<T, N, K2>,
) -> bool {
    a.equals_exact(b)
}

/// Tolerant comparison of two tuples of convertible kinds.
#[inline]
pub fn equals_approximately<T: Scalar, const N: usize, K: TupleKind, K2: ConvertibleTo<K>>(
    a: &Tuple<T, N, K>,
    b: &Tuple<T, N, K2>,
) -> bool {
    a.equals_approximately(b)
}

// ============================================================================
// Std traits
// ============================================================================

impl<T: Copy, const N: usize, K> Clone for Tuple<T, N, K> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Copy, const N: usize, K> Copy for Tuple<T, N, K> {}

impl<T: PartialEq, const N: usize, K> PartialEq for Tuple<T, N, K> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Eq, const N: usize, K> Eq for Tuple<T, N, K> {}

impl<T: Hash, const N: usize, K> Hash for Tuple<T, N, K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.hash(state);
    }
}

impl<T: Scalar, const N: usize, K: TupleKind> Default for Tuple<T, N, K> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: fmt::Debug, const N: usize, K: TupleKind> fmt::Debug for Tuple<T, N, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", K::NAME)?;
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T, const N: usize, K> From<[T; N]> for Tuple<T, N, K> {
    #[inline]
    fn from(data: [T; N]) -> Self {
        Self::from_array(data)
    }
}

impl<T, const N: usize, K> From<Tuple<T, N, K>> for [T; N] {
    #[inline]
    fn from(t: Tuple<T, N, K>) -> [T; N] {
        t.data
    }
}

impl<T, const N: usize, K> IntoIterator for Tuple<T, N, K> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, const N: usize, K> IntoIterator for &'a Tuple<T, N, K> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

// Indexing
impl<T, const N: usize, K> Index<usize> for Tuple<T, N, K> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        match self.data.get(i) {
            Some(v) => v,
            None => panic!("tuple index {i} out of range for length {N}"),
        }
    }
}

impl<T, const N: usize, K> IndexMut<usize> for Tuple<T, N, K> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        match self.data.get_mut(i) {
            Some(v) => v,
            None => panic!("tuple index {i} out of range for length {N}"),
        }
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

// Tuple + Tuple (rhs kind converts into lhs kind)
impl<T: Scalar, const N: usize, K: TupleKind, K2: ConvertibleTo<K>> Add<Tuple<T, N, K2>>
    for Tuple<T, N, K>
{
    type Output = Self;

    #[inline]
    fn add(self, rhs: Tuple<T, N, K2>) -> Self {
        self.zip_map(rhs, |a, b| a + b)
    }
}

// Tuple - Tuple
impl<T: Scalar, const N: usize, K: TupleKind, K2: ConvertibleTo<K>> Sub<Tuple<T, N, K2>>
    for Tuple<T, N, K>
{
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Tuple<T, N, K2>) -> Self {
        self.zip_map(rhs, |a, b| a - b)
    }
}

impl<T: Scalar, const N: usize, K: TupleKind, K2: ConvertibleTo<K>> AddAssign<Tuple<T, N, K2>>
    for Tuple<T, N, K>
{
    #[inline]
    fn add_assign(&mut self, rhs: Tuple<T, N, K2>) {
        *self = *self + rhs;
    }
}

impl<T: Scalar, const N: usize, K: TupleKind, K2: ConvertibleTo<K>> SubAssign<Tuple<T, N, K2>>
    for Tuple<T, N, K>
{
    #[inline]
    fn sub_assign(&mut self, rhs: Tuple<T, N, K2>) {
        *self = *self - rhs;
    }
}

// Tuple * Tuple, Tuple / Tuple, Tuple % Tuple (componentwise, same kind)
// Tuple * T, Tuple / T, Tuple % T
macro_rules! impl_componentwise {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $sym:tt) => {
        impl<T: Scalar, const N: usize, K: TupleKind> $Op for Tuple<T, N, K> {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: Self) -> Self {
                self.zip_map(rhs, |a, b| a $sym b)
            }
        }

        impl<T: Scalar, const N: usize, K: TupleKind> $Op<T> for Tuple<T, N, K> {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: T) -> Self {
                self.map(|a| a $sym rhs)
            }
        }

        impl<T: Scalar, const N: usize, K: TupleKind> $OpAssign for Tuple<T, N, K> {
            #[inline]
            fn $op_assign(&mut self, rhs: Self) {
                *self = *self $sym rhs;
            }
        }

        impl<T: Scalar, const N: usize, K: TupleKind> $OpAssign<T> for Tuple<T, N, K> {
            #[inline]
            fn $op_assign(&mut self, rhs: T) {
                *self = *self $sym rhs;
            }
        }
    };
}

impl_componentwise!(Mul, mul, MulAssign, mul_assign, *);
impl_componentwise!(Div, div, DivAssign, div_assign, /);
impl_componentwise!(Rem, rem, RemAssign, rem_assign, %);

// -Tuple
impl<T: Scalar + Neg<Output = T>, const N: usize, K: TupleKind> Neg for Tuple<T, N, K> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|a| -a)
    }
}

// scalar * Tuple
macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {$(
        impl<const N: usize, K: TupleKind> Mul<Tuple<$t, N, K>> for $t {
            type Output = Tuple<$t, N, K>;

            #[inline]
            fn mul(self, rhs: Tuple<$t, N, K>) -> Tuple<$t, N, K> {
                rhs * self
            }
        }
    )*};
}

impl_scalar_lhs_mul!(i8, i16, i32, i64, u8, u16, u32, u64, f16, f32, f64);
