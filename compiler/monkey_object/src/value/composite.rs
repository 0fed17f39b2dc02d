//! Composite payloads: functions, builtins and hashes.

use std::fmt;
use std::rc::Rc;

use monkey_ir::{BlockStatement, Identifier};
use rustc_hash::FxHashMap;

use super::Value;
use crate::environment::Environment;
use crate::hash_key::HashKey;

/// A closure: parameters and body from the AST plus the defining scope.
///
/// The environment is shared with every other closure created in the same
/// scope, never copied.
#[derive(Clone)]
pub struct FunctionValue {
    pub parameters: Rc<[Identifier]>,
    pub body: Rc<BlockStatement>,
    pub env: Environment,
}

impl fmt::Display for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("fn(")?;
        for (i, param) in self.parameters.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{param}")?;
        }
        write!(f, ") {{\n{}\n}}", self.body)
    }
}

/// Host callable signature.
pub type BuiltinFn = fn(&[Value]) -> Value;

/// A host-provided function. Opaque to the evaluator.
#[derive(Clone, Copy)]
pub struct BuiltinValue {
    pub name: &'static str,
    pub func: BuiltinFn,
}

impl BuiltinValue {
    #[inline]
    pub fn call(&self, args: &[Value]) -> Value {
        (self.func)(args)
    }
}

/// A key/value entry; the original key object is kept for rendering.
#[derive(Clone, Debug)]
pub struct HashPair {
    pub key: Value,
    pub value: Value,
}

/// Mapping from `HashKey` to the pair that produced it.
#[derive(Clone, Debug, Default)]
pub struct HashValue {
    pairs: FxHashMap<HashKey, HashPair>,
}

impl HashValue {
    pub(super) fn insert(&mut self, key: HashKey, pair: HashPair) {
        self.pairs.insert(key, pair);
    }

    #[inline]
    pub fn get(&self, key: &HashKey) -> Option<&HashPair> {
        self.pairs.get(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Pairs ordered by key, for deterministic rendering.
    pub fn sorted_pairs(&self) -> Vec<(&HashKey, &HashPair)> {
        let mut pairs: Vec<_> = self.pairs.iter().collect();
        pairs.sort_unstable_by_key(|(key, _)| **key);
        pairs
    }
}

impl fmt::Display for HashValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (_, pair)) in self.sorted_pairs().into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", pair.key, pair.value)?;
        }
        f.write_str("}")
    }
}
