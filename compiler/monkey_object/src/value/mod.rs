//! Runtime values for the Monkey evaluator.
//!
//! # Handle Architecture
//!
//! Every runtime value is a `Value`, a cheap-to-clone handle onto a shared
//! `Object`. Handles have identity: `Value::ptr_eq` tells two handles onto the
//! same allocation apart from two equal-looking allocations. Identity is what
//! `==`/`!=` observe for non-integer operands, so construction goes through
//! factory methods only:
//!
//! ```text
//! let n = Value::integer(5);       // fresh allocation
//! let t = Value::boolean(true);    // interned TRUE
//! let z = Value::null();           // interned NULL
//! ```

mod composite;
mod heap;

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use monkey_ir::{BlockStatement, Identifier};

use crate::environment::Environment;
use crate::errors::{unusable_as_hash_key, ErrorValue};
use crate::hash_key::{HashKey, Hashable};

pub use composite::{BuiltinFn, BuiltinValue, FunctionValue, HashPair, HashValue};
use heap::Heap;

/// Kind tag of an object, used for dispatch and in error messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ObjectKind {
    Integer,
    String,
    Boolean,
    Null,
    ReturnValue,
    Error,
    Function,
    Builtin,
    Array,
    Hash,
}

impl ObjectKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "INTEGER",
            Self::String => "STRING",
            Self::Boolean => "BOOLEAN",
            Self::Null => "NULL",
            Self::ReturnValue => "RETURN_VALUE",
            Self::Error => "ERROR",
            Self::Function => "FUNCTION",
            Self::Builtin => "BUILTIN",
            Self::Array => "ARRAY",
            Self::Hash => "HASH",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runtime object.
pub enum Object {
    Integer(i64),
    String(String),
    /// Only ever allocated for the two interned singletons.
    Boolean(bool),
    /// Only ever allocated for the interned singleton.
    Null,
    /// Marks an early `return`; never a value a program can observe.
    ReturnValue(Value),
    /// Marks a failed evaluation.
    Error(ErrorValue),
    Function(FunctionValue),
    Builtin(BuiltinValue),
    Array(Vec<Value>),
    Hash(HashValue),
}

impl Object {
    pub fn kind(&self) -> ObjectKind {
        match self {
            Object::Integer(_) => ObjectKind::Integer,
            Object::String(_) => ObjectKind::String,
            Object::Boolean(_) => ObjectKind::Boolean,
            Object::Null => ObjectKind::Null,
            Object::ReturnValue(_) => ObjectKind::ReturnValue,
            Object::Error(_) => ObjectKind::Error,
            Object::Function(_) => ObjectKind::Function,
            Object::Builtin(_) => ObjectKind::Builtin,
            Object::Array(_) => ObjectKind::Array,
            Object::Hash(_) => ObjectKind::Hash,
        }
    }

    /// Human-readable rendering used for program output and error messages.
    pub fn inspect(&self) -> String {
        self.to_string()
    }

    /// Hash key for integers, strings and booleans; `None` for everything else.
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Object::Integer(n) => Some(n.hash_key()),
            Object::String(s) => Some(s.as_str().hash_key()),
            Object::Boolean(b) => Some(b.hash_key()),
            Object::Null
            | Object::ReturnValue(_)
            | Object::Error(_)
            | Object::Function(_)
            | Object::Builtin(_)
            | Object::Array(_)
            | Object::Hash(_) => None,
        }
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Integer(n) => write!(f, "{n}"),
            Object::String(s) => f.write_str(s),
            Object::Boolean(b) => write!(f, "{b}"),
            Object::Null => f.write_str("null"),
            Object::ReturnValue(inner) => write!(f, "{inner}"),
            Object::Error(err) => write!(f, "ERROR: {err}"),
            Object::Function(func) => write!(f, "{func}"),
            Object::Builtin(_) => f.write_str("builtin function"),
            Object::Array(elements) => {
                f.write_str("[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str("]")
            }
            Object::Hash(hash) => write!(f, "{hash}"),
        }
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({self})", self.kind())
    }
}

/// Shared handle onto an `Object`.
#[derive(Clone)]
pub struct Value(Heap<Object>);

thread_local! {
    static TRUE: Value = Value(Heap::new(Object::Boolean(true)));
    static FALSE: Value = Value(Heap::new(Object::Boolean(false)));
    static NULL: Value = Value(Heap::new(Object::Null));
}

// Factory Methods (ONLY way to construct values)

impl Value {
    #[inline]
    fn alloc(object: Object) -> Self {
        Value(Heap::new(object))
    }

    /// Create a fresh integer.
    #[inline]
    pub fn integer(n: i64) -> Self {
        Self::alloc(Object::Integer(n))
    }

    /// Create a fresh string.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Self::alloc(Object::String(s.into()))
    }

    /// The interned `TRUE` or `FALSE`.
    #[inline]
    pub fn boolean(b: bool) -> Self {
        if b {
            TRUE.with(Value::clone)
        } else {
            FALSE.with(Value::clone)
        }
    }

    /// The interned `NULL`.
    #[inline]
    pub fn null() -> Self {
        NULL.with(Value::clone)
    }

    /// Wrap `value` as an early-return marker.
    pub fn return_value(value: Value) -> Self {
        Self::alloc(Object::ReturnValue(value))
    }

    pub fn error(err: impl Into<ErrorValue>) -> Self {
        Self::alloc(Object::Error(err.into()))
    }

    /// Create a closure over `env`.
    pub fn function(
        parameters: Rc<[Identifier]>,
        body: Rc<BlockStatement>,
        env: Environment,
    ) -> Self {
        Self::alloc(Object::Function(FunctionValue {
            parameters,
            body,
            env,
        }))
    }

    pub fn builtin(name: &'static str, func: BuiltinFn) -> Self {
        Self::alloc(Object::Builtin(BuiltinValue { name, func }))
    }

    pub fn array(elements: Vec<Value>) -> Self {
        Self::alloc(Object::Array(elements))
    }

    /// Build a hash from key/value pairs. Later duplicates win.
    ///
    /// Fails on the first key whose kind is not hashable.
    pub fn hash(pairs: impl IntoIterator<Item = (Value, Value)>) -> Result<Self, ErrorValue> {
        let mut hash = HashValue::default();
        for (key, value) in pairs {
            let hash_key = key
                .hash_key()
                .ok_or_else(|| unusable_as_hash_key(key.kind()))?;
            hash.insert(hash_key, HashPair { key, value });
        }
        Ok(Self::alloc(Object::Hash(hash)))
    }
}

// Identity and Accessors

impl Value {
    /// Whether both handles refer to the same object.
    #[inline]
    pub fn ptr_eq(a: &Value, b: &Value) -> bool {
        Heap::ptr_eq(&a.0, &b.0)
    }

    /// Truthiness: everything except the interned `FALSE` and `NULL`.
    pub fn is_truthy(&self) -> bool {
        !(FALSE.with(|f| Value::ptr_eq(self, f)) || NULL.with(|n| Value::ptr_eq(self, n)))
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(**self, Object::Error(_))
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        NULL.with(|n| Value::ptr_eq(self, n))
    }

    pub fn as_integer(&self) -> Option<i64> {
        match **self {
            Object::Integer(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match &**self {
            Object::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match **self {
            Object::Boolean(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_error(&self) -> Option<&ErrorValue> {
        match &**self {
            Object::Error(err) => Some(err),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionValue> {
        match &**self {
            Object::Function(func) => Some(func),
            _ => None,
        }
    }

    pub fn as_builtin(&self) -> Option<&BuiltinValue> {
        match &**self {
            Object::Builtin(builtin) => Some(builtin),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match &**self {
            Object::Array(elements) => Some(elements),
            _ => None,
        }
    }

    pub fn as_hash(&self) -> Option<&HashValue> {
        match &**self {
            Object::Hash(hash) => Some(hash),
            _ => None,
        }
    }

    /// Payload of a return marker.
    pub fn as_return_value(&self) -> Option<&Value> {
        match &**self {
            Object::ReturnValue(inner) => Some(inner),
            _ => None,
        }
    }
}

impl Deref for Value {
    type Target = Object;

    #[inline]
    fn deref(&self) -> &Object {
        &self.0
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&**self, f)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}
