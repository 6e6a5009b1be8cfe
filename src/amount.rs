// src/amount.rs
// ============================================================================
// TOKEN AMOUNT NORMALIZATION
// ============================================================================
// Total-supply values reach the engine in three external shapes: a plain
// number, a decimal string (form inputs), or a big-integer value exceeding
// native float precision (contract reads of 18-decimal supplies). This module
// collapses all three into a single computational form instead of branching
// on runtime shape inside each calculator. Precision loss beyond standard
// double precision is accepted and not a defect.
// ============================================================================

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Amount normalization errors
#[derive(Error, Debug)]
pub enum AmountError {
    #[error("Unparseable amount string: {0:?}")]
    InvalidDecimal(String),
}

/// A token quantity normalized to a computational numeric form.
///
/// Constructed from a plain `f64`, an unsigned integer (including `u128`
/// supplies in smallest units), or a decimal string. All calculator inputs
/// and outputs that represent token quantities flow through this type.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct TokenAmount(f64);

impl TokenAmount {
    /// Create an amount directly from its computational value.
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// The computational value of this amount.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<f64> for TokenAmount {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<u64> for TokenAmount {
    fn from(value: u64) -> Self {
        Self(value as f64)
    }
}

impl From<u128> for TokenAmount {
    fn from(value: u128) -> Self {
        // 18-decimal on-chain supplies overflow u64; the cast keeps the top
        // ~15.9 significant digits, which is the documented precision bound.
        Self(value as f64)
    }
}

impl FromStr for TokenAmount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<f64>()
            .map(Self)
            .map_err(|_| AmountError::InvalidDecimal(s.to_string()))
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for TokenAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> Deserialize<'de> for TokenAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AmountVisitor;

        impl<'de> Visitor<'de> for AmountVisitor {
            type Value = TokenAmount;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a number or a decimal string")
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(TokenAmount(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(TokenAmount(v as f64))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(TokenAmount(v as f64))
            }

            fn visit_u128<E: de::Error>(self, v: u128) -> Result<Self::Value, E> {
                Ok(TokenAmount(v as f64))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(AmountVisitor)
    }
}
