//! Kleene operators over [`Value`].
//!
//! Conjunction is the minimum and disjunction the maximum of the operands
//! under `False < Unknown < True`. Implication is derived as `!a | b`.


use std::{fmt, str::FromStr};

#[cfg(feature = "clap")]
use clap::{ValueEnum, builder::PossibleValue};
use thiserror::Error;

use crate::value::Value;

/// Same member, not logical equivalence: never `Unknown`.
#[must_use]
pub fn identity_equal(a: Value, b: Value) -> Value {
    Value::from(a == b)
}

#[must_use]
pub fn not(a: Value) -> Value {
    match a {
        Value::False => Value::True,
        Value::True => Value::False,
        Value::Unknown => Value::Unknown,
    }
}

#[must_use]
pub fn and(a: Value, b: Value) -> Value {
    match (a, b) {
        (Value::False, _) | (_, Value::False) => Value::False,
        (Value::Unknown, _) | (_, Value::Unknown) => Value::Unknown,
        (Value::True, Value::True) => Value::True,
    }
}

#[must_use]
pub fn or(a: Value, b: Value) -> Value {
    match (a, b) {
        (Value::True, _) | (_, Value::True) => Value::True,
        (Value::Unknown, _) | (_, Value::Unknown) => Value::Unknown,
        (Value::False, Value::False) => Value::False,
    }
}

#[must_use]
pub fn implies(a: Value, b: Value) -> Value {
    or(not(a), b)
}

/// Biconditional: `Unknown` whenever either side is `Unknown`.
#[must_use]
pub fn equivalent(a: Value, b: Value) -> Value {
    if a.is_known() && b.is_known() {
        Value::from(a == b)
    } else {
        Value::Unknown
    }
}

/// Conjunction of every value, `True` for an empty input.
///
/// Stops consuming `values` at the first `False`.
#[must_use]
pub fn all(values: impl IntoIterator<Item = Value>) -> Value {
    let mut acc = Value::True;
    for v in values {
        acc = and(acc, v);
        if acc == Value::False {
            break;
        }
    }
    acc
}

/// Disjunction of every value, `False` for an empty input.
///
/// Stops consuming `values` at the first `True`.
#[must_use]
pub fn any(values: impl IntoIterator<Item = Value>) -> Value {
    let mut acc = Value::False;
    for v in values {
        acc = or(acc, v);
        if acc == Value::True {
            break;
        }
    }
    acc
}

impl Value {
    #[must_use]
    pub fn implies(self, rhs: Self) -> Self {
        implies(self, rhs)
    }

    #[must_use]
    pub fn equivalent(self, rhs: Self) -> Self {
        equivalent(self, rhs)
    }

    #[must_use]
    pub fn identical(self, rhs: Self) -> Self {
        identity_equal(self, rhs)
    }
}

impl std::ops::Not for Value {
    type Output = Self;

    fn not(self) -> Self {
        not(self)
    }
}

impl std::ops::BitAnd for Value {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        and(self, rhs)
    }
}

impl std::ops::BitOr for Value {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        or(self, rhs)
    }
}

impl std::ops::BitAndAssign for Value {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = and(*self, rhs);
    }
}

impl std::ops::BitOrAssign for Value {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = or(*self, rhs);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unknown operator: {0:?}")]
    UnknownOperator(String),
    #[error("{operator} takes {expected}, got {found}")]
    Arity {
        operator: Operator,
        expected: Arity,
        found: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Unary,
    Binary,
    Variadic,
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Unary => write!(f, "1 operand"),
            Arity::Binary => write!(f, "2 operands"),
            Arity::Variadic => write!(f, "any number of operands"),
        }
    }
}

/// An operator selected by name at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Not,
    And,
    Or,
    Implies,
    Equivalent,
    Equal,
    All,
    Any,
}

pub const ALL_OPERATORS: &[Operator] = &[
    Operator::Not,
    Operator::And,
    Operator::Or,
    Operator::Implies,
    Operator::Equivalent,
    Operator::Equal,
    Operator::All,
    Operator::Any,
];

impl Operator {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Operator::Not => "not",
            Operator::And => "and",
            Operator::Or => "or",
            Operator::Implies => "implies",
            Operator::Equivalent => "equivalent",
            Operator::Equal => "equal",
            Operator::All => "all",
            Operator::Any => "any",
        }
    }

    #[must_use]
    pub const fn arity(self) -> Arity {
        match self {
            Operator::Not => Arity::Unary,
            Operator::And
            | Operator::Or
            | Operator::Implies
            | Operator::Equivalent
            | Operator::Equal => Arity::Binary,
            Operator::All | Operator::Any => Arity::Variadic,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> Option<char> {
        match self {
            Operator::Not => Some('¬'),
            Operator::And => Some('∧'),
            Operator::Or => Some('∨'),
            Operator::Implies => Some('→'),
            Operator::Equivalent => Some('↔'),
            Operator::Equal => Some('='),
            Operator::All | Operator::Any => None,
        }
    }

    #[must_use]
    pub fn unary(self) -> Option<fn(Value) -> Value> {
        match self {
            Operator::Not => Some(not),
            Operator::And
            | Operator::Or
            | Operator::Implies
            | Operator::Equivalent
            | Operator::Equal
            | Operator::All
            | Operator::Any => None,
        }
    }

    #[must_use]
    pub fn binary(self) -> Option<fn(Value, Value) -> Value> {
        match self {
            Operator::And => Some(and),
            Operator::Or => Some(or),
            Operator::Implies => Some(implies),
            Operator::Equivalent => Some(equivalent),
            Operator::Equal => Some(identity_equal),
            Operator::Not | Operator::All | Operator::Any => None,
        }
    }

    /// Applies the operator to `operands`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Arity` if the number of operands does not fit the
    /// operator's arity.
    pub fn apply(self, operands: &[Value]) -> Result<Value, Error> {
        let arity_error = || Error::Arity {
            operator: self,
            expected: self.arity(),
            found: operands.len(),
        };
        let values = operands.iter().copied();
        match (self, operands) {
            (Operator::All, _) => Ok(all(values)),
            (Operator::Any, _) => Ok(any(values)),
            (Operator::Not, &[a]) => Ok(not(a)),
            (_, &[a, b]) => self.binary().map(|f| f(a, b)).ok_or_else(arity_error),
            _ => Err(arity_error()),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        ALL_OPERATORS
            .iter()
            .copied()
            .find(|op| op.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownOperator(s.to_string()))
    }
}

#[cfg(feature = "clap")]
impl ValueEnum for Operator {
    fn value_variants<'a>() -> &'a [Self] {
        ALL_OPERATORS
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(PossibleValue::new(self.name()))
    }
}
