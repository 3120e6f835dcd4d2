//! Truth tables for the unary and binary operators.

#[cfg(test)]
mod tests;

use std::fmt;

use crate::{ops::Operator, value::Value};

#[derive(Debug, Clone, Copy)]
enum Kind {
    Unary(fn(Value) -> Value),
    Binary(fn(Value, Value) -> Value),
}

/// The complete table of an operator, computed from the operator itself.
#[derive(Debug, Clone, Copy)]
pub struct TruthTable {
    operator: Operator,
    symbol: char,
    kind: Kind,
}

impl TruthTable {
    /// Returns `None` for variadic operators.
    #[must_use]
    pub fn new(operator: Operator) -> Option<TruthTable> {
        let symbol = operator.symbol()?;
        let kind = match (operator.unary(), operator.binary()) {
            (Some(f), _) => Kind::Unary(f),
            (None, Some(f)) => Kind::Binary(f),
            (None, None) => return None,
        };
        Some(TruthTable {
            operator,
            symbol,
            kind,
        })
    }

    #[must_use]
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Every combination of operands with its result, operands ascending.
    #[must_use]
    pub fn rows(&self) -> Vec<(Vec<Value>, Value)> {
        match self.kind {
            Kind::Unary(f) => Value::ALL.iter().map(|&a| (vec![a], f(a))).collect(),
            Kind::Binary(f) => Value::ALL
                .iter()
                .flat_map(|&a| Value::ALL.iter().map(move |&b| (vec![a, b], f(a, b))))
                .collect(),
        }
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            Kind::Unary(op) => {
                writeln!(f, "+---+----+")?;
                writeln!(f, "| A | {}A |", self.symbol)?;
                writeln!(f, "|---+----|")?;
                for a in Value::ALL {
                    writeln!(f, "| {} |  {} |", a.letter(), op(a).letter())?;
                }
                writeln!(f, "+---+----+")
            }
            Kind::Binary(op) => {
                writeln!(f, "+--------+-----------+")?;
                writeln!(f, "|        |     B     |")?;
                writeln!(f, "| A {} B  |---+---+---|", self.symbol)?;
                write!(f, "|       ")?;
                for b in Value::ALL {
                    write!(f, " | {}", b.letter())?;
                }
                writeln!(f, " |")?;
                writeln!(f, "|----+---+---+---+---|")?;
                for (i, a) in Value::ALL.into_iter().enumerate() {
                    // Row label sits on the middle row.
                    let label = if i == 1 { 'A' } else { ' ' };
                    write!(f, "| {label}  | {}", a.letter())?;
                    for b in Value::ALL {
                        write!(f, " | {}", op(a, b).letter())?;
                    }
                    writeln!(f, " |")?;
                }
                writeln!(f, "+----+---+---+---+---+")
            }
        }
    }
}
