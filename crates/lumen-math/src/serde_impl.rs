//! Serde support for tuples (feature `serde`).
//!
//! A tuple serialises as a plain sequence of its elements, so a
//! `Vec3<f32>` becomes `[1.0, 2.0, 3.0]` in JSON. The kind is not written;
//! it is carried by the type being deserialised into. Deserialising
//! rejects sequences of the wrong length.
//!
//! `Quaternion` derives its impls and serialises as a struct with fields
//! `r`, `i`, `j`, `k`.

use crate::tuple::Tuple;
use serde::de::{Error as _, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

impl<T: Serialize, const N: usize, K> Serialize for Tuple<T, N, K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>, const N: usize, K> Deserialize<'de> for Tuple<T, N, K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(TupleVisitor::<T, N, K>(PhantomData))
    }
}

struct TupleVisitor<T, const N: usize, K>(PhantomData<(T, K)>);

impl<'de, T: Deserialize<'de>, const N: usize, K> Visitor<'de> for TupleVisitor<T, N, K> {
    type Value = Tuple<T, N, K>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a sequence of {N} values")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut values = Vec::with_capacity(N);
        while let Some(v) = seq.next_element()? {
            if values.len() == N {
                return Err(A::Error::invalid_length(N + 1, &self));
            }
            values.push(v);
        }

        let found = values.len();
        let data: [T; N] = values
            .try_into()
            .map_err(|_| A::Error::invalid_length(found, &self))?;
        Ok(Tuple::from_array(data))
    }
}
