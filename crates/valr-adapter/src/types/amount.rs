/*
[INPUT]:  Decimal amounts as sent on the wire (JSON strings, occasionally numbers)
[OUTPUT]: Amount newtype holding the exact wire text, parsed to Decimal on demand
[POS]:    Data layer - money and quantity representation
[UPDATE]: When changing how amounts are decoded or converted
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::http::{Result, ValrError};

/// A price, quantity or balance exactly as VALR sent it.
///
/// The text is never rounded or normalised, so values beyond `Decimal`'s
/// 28 significant digits and odd values such as `""` survive decoding and
/// serialize back unchanged. Use [`Amount::as_decimal`] for arithmetic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Amount(String);

impl Amount {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parse as a `Decimal`. Fails instead of rounding when the text does not
    /// fit.
    pub fn as_decimal(&self) -> Result<Decimal> {
        Decimal::from_str_exact(&self.0).map_err(|source| ValrError::InvalidAmount {
            value: self.0.clone(),
            source,
        })
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Amount {
    type Err = Infallible;

    fn from_str(raw: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::new(raw))
    }
}

impl From<&str> for Amount {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Amount {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(raw) => Ok(Self(raw)),
            Value::Number(number) => Ok(Self(number.to_string())),
            _ => Err(serde::de::Error::custom("expected a decimal string or number")),
        }
    }
}
