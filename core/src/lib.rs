//! Kleene's strong three-valued logic.
//!
//! The value domain is [`Value`], with the members [`FALSE`], [`UNKNOWN`] and
//! [`TRUE`]. Operators live in [`ops`], both as free functions and as the
//! `!`, `&` and `|` operators on [`Value`].

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_in_result)]

pub mod ops;
pub mod table;
pub mod value;

pub use ops::{Arity, Operator};
pub use table::TruthTable;
pub use value::{FALSE, TRUE, UNKNOWN, Value};
