//! Error payloads for the `Error` object variant.
//!
//! # Structured Error Categories
//!
//! `EvalErrorKind` carries the data of each failure so hosts can match on
//! the category instead of parsing text. The `Display` impl produces the
//! message; `ErrorValue` stores both. Factory functions below are the public
//! API and keep every message in one place.

use monkey_ir::{InfixOp, PrefixOp};

use crate::value::ObjectKind;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    // Type/Operator
    /// A prefix operator applied to an operand type it does not support.
    #[error("unknown operator: {operator}{operand}")]
    OperatorType {
        operator: PrefixOp,
        operand: ObjectKind,
    },
    /// Infix operands of differing kinds.
    #[error("type mismatch: {left} {operator} {right}")]
    TypeMismatch {
        left: ObjectKind,
        operator: InfixOp,
        right: ObjectKind,
    },
    /// An operator with no semantics for the given operand kinds.
    #[error("unknown operator: {left} {operator} {right}")]
    UnknownOperator {
        left: ObjectKind,
        operator: InfixOp,
        right: ObjectKind,
    },

    // Access
    #[error("identifier not found: {name}")]
    IdentifierNotFound { name: String },
    #[error("unusable as hash key: {kind}")]
    UnusableAsHashKey { kind: ObjectKind },

    // Arithmetic
    #[error("division by zero")]
    DivisionByZero,
    #[error("modulo by zero")]
    ModuloByZero,
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },

    // Resources
    #[error("maximum evaluation depth exceeded (limit: {limit})")]
    DepthLimitExceeded { limit: usize },

    /// Free-form error, e.g. raised by a host builtin.
    #[error("{message}")]
    Custom { message: String },
}

/// Payload of an `Error` object.
///
/// `message` always equals `kind.to_string()`; it is stored so rendering
/// never re-formats.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ErrorValue {
    kind: EvalErrorKind,
    message: String,
}

impl ErrorValue {
    /// Create an error from a structured kind.
    pub fn new(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        ErrorValue { kind, message }
    }

    /// Create a free-form error with just a message.
    pub fn custom(message: impl Into<String>) -> Self {
        Self::new(EvalErrorKind::Custom {
            message: message.into(),
        })
    }

    #[inline]
    pub fn kind(&self) -> &EvalErrorKind {
        &self.kind
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<EvalErrorKind> for ErrorValue {
    fn from(kind: EvalErrorKind) -> Self {
        ErrorValue::new(kind)
    }
}

// Type/Operator Errors

/// Prefix operator applied to an unsupported operand, e.g. `-true`.
#[cold]
pub fn operator_type(operator: PrefixOp, operand: ObjectKind) -> ErrorValue {
    ErrorValue::new(EvalErrorKind::OperatorType { operator, operand })
}

/// Infix operands of different kinds, e.g. `5 + true`.
#[cold]
pub fn type_mismatch(left: ObjectKind, operator: InfixOp, right: ObjectKind) -> ErrorValue {
    ErrorValue::new(EvalErrorKind::TypeMismatch {
        left,
        operator,
        right,
    })
}

/// Same-kind operands the operator has no meaning for, e.g. `true + false`.
#[cold]
pub fn unknown_operator(left: ObjectKind, operator: InfixOp, right: ObjectKind) -> ErrorValue {
    ErrorValue::new(EvalErrorKind::UnknownOperator {
        left,
        operator,
        right,
    })
}

// Access Errors

#[cold]
pub fn identifier_not_found(name: &str) -> ErrorValue {
    ErrorValue::new(EvalErrorKind::IdentifierNotFound {
        name: name.to_owned(),
    })
}

#[cold]
pub fn unusable_as_hash_key(kind: ObjectKind) -> ErrorValue {
    ErrorValue::new(EvalErrorKind::UnusableAsHashKey { kind })
}

// Arithmetic Errors

#[cold]
pub fn division_by_zero() -> ErrorValue {
    ErrorValue::new(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn modulo_by_zero() -> ErrorValue {
    ErrorValue::new(EvalErrorKind::ModuloByZero)
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> ErrorValue {
    ErrorValue::new(EvalErrorKind::IntegerOverflow { operation })
}

// Resource Errors

#[cold]
pub fn depth_limit_exceeded(limit: usize) -> ErrorValue {
    ErrorValue::new(EvalErrorKind::DepthLimitExceeded { limit })
}
