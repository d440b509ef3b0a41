//! Text form of tuples: `{v0 v1 ... vN-1}`.
//!
//! Values are written with the scalar's own `Display` and read back with its
//! `FromStr`, separated by exactly one space and wrapped in braces.
//! Whitespace around the whole text is ignored, nothing else is.
//!
//! # Usage
//!
//! ```rust
//! use lumen_math::{Color, Vec3};
//!
//! let v = Vec3::new(1.5f32, -2.0, 0.25);
//! assert_eq!(v.to_string(), "{1.5 -2 0.25}");
//! assert_eq!("{1.5 -2 0.25}".parse::<Vec3<f32>>().unwrap(), v);
//!
//! assert!("{1 2}".parse::<Color<u8>>().is_err());
//! ```
//!
//! # Failure
//!
//! Parsing builds a new value, so a failed parse never leaves a partially
//! written destination behind. See [`Error`] for the failure kinds.

use crate::error::{Error, Result};
use crate::kind::TupleKind;
use crate::scalar::Scalar;
use crate::tuple::Tuple;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

impl<T: fmt::Display, const N: usize, K> fmt::Display for Tuple<T, N, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, v) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            fmt::Display::fmt(v, f)?;
        }
        f.write_str("}")
    }
}

impl<T: Scalar, const N: usize, K: TupleKind> FromStr for Tuple<T, N, K> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_values(s)
            .map(Self::from_array)
            .inspect_err(|err| debug!(kind = K::NAME, input = s, %err, "Rejected tuple text"))
    }
}

/// Parses exactly `N` brace-wrapped, space-separated values.
pub(crate) fn parse_values<T: Scalar, const N: usize>(text: &str) -> Result<[T; N]> {
    let text = text.trim();
    let rest = text.strip_prefix('{').ok_or(Error::MissingOpenBrace)?;
    let close = rest.find('}').ok_or(Error::MissingCloseBrace)?;
    let (body, tail) = rest.split_at(close);

    let tail = &tail[1..];
    if !tail.is_empty() {
        return Err(Error::trailing_input(tail));
    }

    if body.is_empty() {
        return Err(Error::value_count(N, 0));
    }

    let found = body.split(' ').count();
    if found != N {
        // a malformed separator also changes the count, report it first
        check_separators(body)?;
        return Err(Error::value_count(N, found));
    }

    let mut values = [T::zero(); N];
    for (index, (slot, token)) in values.iter_mut().zip(body.split(' ')).enumerate() {
        check_token(index, token)?;
        *slot = token
            .parse()
            .map_err(|_| Error::invalid_value(index, token, T::NAME))?;
    }
    Ok(values)
}

fn check_separators(body: &str) -> Result<()> {
    body.split(' ')
        .enumerate()
        .try_for_each(|(index, token)| check_token(index, token))
}

fn check_token(index: usize, token: &str) -> Result<()> {
    if token.is_empty() {
        return Err(Error::unexpected_separator(index, ' '));
    }
    match token.chars().find(|&c| c.is_whitespace() || c == ',' || c == ';') {
        Some(found) => Err(Error::unexpected_separator(index, found)),
        None => Ok(()),
    }
}
