//! The three truth values and their textual, integer and boolean forms.


use std::{fmt, str::FromStr};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, Visitor},
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid literal: {0:?}")]
    InvalidLiteral(String),
    #[error("invalid integer value: {0}")]
    InvalidIntegerValue(i64),
}

/// A single Kleene truth value.
///
/// Ordered by its integer encoding:
///
/// | variant   | integer | literal     |
/// |-----------|---------|-------------|
/// | `False`   | `-1`    | `"FALSE"`   |
/// | `Unknown` | `0`     | `"UNKNOWN"` |
/// | `True`    | `1`     | `"TRUE"`    |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(strum::EnumIter))]
#[repr(i8)]
pub enum Value {
    False = -1,
    Unknown = 0,
    True = 1,
}

pub const FALSE: Value = Value::False;
pub const UNKNOWN: Value = Value::Unknown;
pub const TRUE: Value = Value::True;

impl Value {
    /// Every member, in ascending order.
    pub const ALL: [Value; 3] = [FALSE, UNKNOWN, TRUE];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Value::False => "FALSE",
            Value::Unknown => "UNKNOWN",
            Value::True => "TRUE",
        }
    }

    #[must_use]
    pub const fn to_i64(self) -> i64 {
        match self {
            Value::False => -1,
            Value::Unknown => 0,
            Value::True => 1,
        }
    }

    /// Returns `true` only for `True`.
    ///
    /// `False` and `Unknown` both map to `false`, so this cannot be inverted.
    /// Use [`Value::to_option`] to keep the distinction.
    #[must_use]
    pub const fn to_bool(self) -> bool {
        matches!(self, Value::True)
    }

    #[must_use]
    pub const fn to_option(self) -> Option<bool> {
        match self {
            Value::False => Some(false),
            Value::Unknown => None,
            Value::True => Some(true),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Value::Unknown)
    }

    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Value::False => 'F',
            Value::Unknown => 'U',
            Value::True => 'T',
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Value {
    type Err = Error;

    /// Accepts `FALSE`/`-1`, `UNKNOWN`/`0` and `TRUE`/`1`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_uppercase().as_str() {
            "FALSE" | "-1" => Ok(Value::False),
            "UNKNOWN" | "0" => Ok(Value::Unknown),
            "TRUE" | "1" => Ok(Value::True),
            _ => Err(Error::InvalidLiteral(s.to_string())),
        }
    }
}

impl TryFrom<i64> for Value {
    type Error = Error;

    fn try_from(i: i64) -> Result<Self, Error> {
        match i {
            -1 => Ok(Value::False),
            0 => Ok(Value::Unknown),
            1 => Ok(Value::True),
            _ => Err(Error::InvalidIntegerValue(i)),
        }
    }
}

impl From<Value> for i64 {
    fn from(value: Value) -> i64 {
        value.to_i64()
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        if b { Value::True } else { Value::False }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

struct ValueVisitor;

impl Visitor<'_> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a truth value literal or one of -1, 0, 1")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
        Value::try_from(v).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
        let i = i64::try_from(v).map_err(|_| E::custom(format!("invalid integer value: {v}")))?;
        self.visit_i64(i)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}
