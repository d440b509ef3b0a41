//! Error types for lumen-math.
//!
//! Almost everything in this crate is infallible: arithmetic on value types
//! cannot fail, and broken preconditions (normalising a zero vector, an
//! out-of-range index) panic. The one recoverable failure is reading a value
//! back from its text form, which is what [`Error`] describes.
//!
//! # Usage
//!
//! ```rust
//! use lumen_math::{Error, Vec3};
//!
//! let err = "{1, 2, 3}".parse::<Vec3<i32>>().unwrap_err();
//! assert!(err.is_separator_error());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::format`] - `FromStr` for tuples
//! - [`crate::Quaternion`] - `FromStr` for quaternions

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while parsing the `{v0 v1 ... vN-1}` text format.
///
/// # Categories
///
/// - **Framing errors**: [`MissingOpenBrace`](Error::MissingOpenBrace),
///   [`MissingCloseBrace`](Error::MissingCloseBrace), [`TrailingInput`](Error::TrailingInput)
/// - **Separator errors**: [`UnexpectedSeparator`](Error::UnexpectedSeparator)
/// - **Content errors**: [`ValueCount`](Error::ValueCount), [`InvalidValue`](Error::InvalidValue)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Text does not start with `{`.
    #[error("expected '{{' at start of input")]
    MissingOpenBrace,

    /// Text has no closing `}`.
    #[error("expected '}}' after values")]
    MissingCloseBrace,

    /// Values are not separated by exactly one space.
    ///
    /// Covers commas, tabs, doubled spaces and spaces next to a brace.
    #[error("unexpected separator {found:?} at value {index}")]
    UnexpectedSeparator {
        /// Index of the value where the bad separator was found
        index: usize,
        /// Offending character
        found: char,
    },

    /// Wrong number of values between the braces.
    #[error("expected {expected} values, found {found}")]
    ValueCount {
        /// Values the target type holds
        expected: usize,
        /// Values present in the text
        found: usize,
    },

    /// A value could not be parsed as the target scalar type.
    #[error("invalid {scalar} value {token:?} at index {index}")]
    InvalidValue {
        /// Index of the value
        index: usize,
        /// Text of the value
        token: String,
        /// Name of the scalar type
        scalar: &'static str,
    },

    /// Non-whitespace text follows the closing `}`.
    #[error("unexpected trailing input {0:?}")]
    TrailingInput(String),
}

impl Error {
    /// Creates an [`Error::UnexpectedSeparator`] error.
    #[inline]
    pub fn unexpected_separator(index: usize, found: char) -> Self {
        Self::UnexpectedSeparator { index, found }
    }

    /// Creates an [`Error::ValueCount`] error.
    #[inline]
    pub fn value_count(expected: usize, found: usize) -> Self {
        Self::ValueCount { expected, found }
    }

    /// Creates an [`Error::InvalidValue`] error.
    #[inline]
    pub fn invalid_value(index: usize, token: impl Into<String>, scalar: &'static str) -> Self {
        Self::InvalidValue {
            index,
            token: token.into(),
            scalar,
        }
    }

    /// Creates an [`Error::TrailingInput`] error.
    #[inline]
    pub fn trailing_input(rest: impl Into<String>) -> Self {
        Self::TrailingInput(rest.into())
    }

    /// Returns `true` if the braces around the values are wrong.
    #[inline]
    pub fn is_framing_error(&self) -> bool {
        matches!(
            self,
            Self::MissingOpenBrace | Self::MissingCloseBrace | Self::TrailingInput(_)
        )
    }

    /// Returns `true` if values were separated incorrectly.
    #[inline]
    pub fn is_separator_error(&self) -> bool {
        matches!(self, Self::UnexpectedSeparator { .. })
    }

    /// Returns `true` if the number of values was wrong.
    #[inline]
    pub fn is_count_error(&self) -> bool {
        matches!(self, Self::ValueCount { .. })
    }
}
