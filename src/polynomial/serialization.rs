// src/polynomial/serialization.rs
//
// A polynomial serializes as its coefficient list, constant term first.
// Deserialization goes through the normalizing constructor, so `[1, 2, 0]`
// and `[4, -1]` both read back as `{1,2}`.

use std::fmt;
use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use crate::field::z3::Z3;
use crate::polynomial::polynomial::Polynomial;

impl Serialize for Polynomial {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let coefficients = self.coefficients();
        let mut seq = serializer.serialize_seq(Some(coefficients.len()))?;
        for coefficient in coefficients {
            seq.serialize_element(coefficient)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Polynomial {
    fn deserialize<D>(deserializer: D) -> Result<Polynomial, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PolynomialVisitor;

        impl<'de> Visitor<'de> for PolynomialVisitor {
            type Value = Polynomial;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a sequence of integer coefficients")
            }

            fn visit_seq<V>(self, mut seq: V) -> Result<Polynomial, V::Error>
            where
                V: SeqAccess<'de>,
            {
                let mut coefficients = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(coefficient) = seq.next_element::<Z3>()? {
                    coefficients.push(coefficient);
                }
                Ok(Polynomial::from_vec(coefficients))
            }
        }

        deserializer.deserialize_seq(PolynomialVisitor)
    }
}
