//! Monkey Object - runtime values and scopes.
//!
//! # Architecture
//!
//! - `Value`: shared handle to an `Object`; identity is observable through
//!   `Value::ptr_eq` and is what `==`/`!=` compare for non-integer operands
//! - `Object`: the closed set of runtime variants (integers, strings,
//!   booleans, null, return/error markers, functions, builtins, arrays, hashes)
//! - `HashKey`: `(kind, digest)` pair for the hashable variants
//! - `Environment`: chain of scopes with shared, never-copied outer links
//! - `EvalErrorKind`/`ErrorValue`: the payload of the `Error` variant
//!
//! `TRUE`, `FALSE` and `NULL` are interned per thread. `Value::boolean` and
//! `Value::null` are the only way to obtain them, so no second boolean or null
//! instance can exist on a thread.

mod environment;
pub mod errors;
mod hash_key;
mod value;

pub use environment::{Environment, LocalScope};
pub use errors::{
    depth_limit_exceeded, division_by_zero, identifier_not_found, integer_overflow,
    modulo_by_zero, operator_type, type_mismatch, unknown_operator, unusable_as_hash_key,
    ErrorValue, EvalErrorKind,
};
pub use hash_key::{HashKey, Hashable};
pub use value::{
    BuiltinFn, BuiltinValue, FunctionValue, HashPair, HashValue, Object, ObjectKind, Value,
};
