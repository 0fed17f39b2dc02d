//! Lexical environments.
//!
//! An `Environment` is a handle onto one scope. Scopes form a chain through
//! their outer link; lookups walk outward, definitions only ever touch the
//! innermost scope. Handles are shared, so every closure created while a
//! scope is live keeps that same scope alive.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::value::Value;

/// A single-threaded scope wrapper for reference-counted interior mutability.
///
/// Wraps `Rc<RefCell<T>>` so that scope allocations go through `new()`.
/// Not thread-safe: independent evaluations on other threads must build
/// their own environment trees.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Whether both handles wrap the same allocation.
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

/// Bindings of one scope plus its fixed outer link.
struct Scope {
    store: FxHashMap<String, Value>,
    outer: Option<Environment>,
}

/// Handle onto a scope in the chain.
#[derive(Clone)]
pub struct Environment(LocalScope<Scope>);

impl Environment {
    /// Create a root scope with no outer link.
    pub fn new() -> Self {
        Environment(LocalScope::new(Scope {
            store: FxHashMap::default(),
            outer: None,
        }))
    }

    /// Create an empty scope whose outer link is `outer`.
    ///
    /// The link is set here and never changes, which keeps the chain acyclic.
    pub fn new_enclosed(outer: &Environment) -> Self {
        Environment(LocalScope::new(Scope {
            store: FxHashMap::default(),
            outer: Some(outer.clone()),
        }))
    }

    /// Look up `name` here, then outward through the chain.
    pub fn get(&self, name: &str) -> Option<Value> {
        let scope = self.0.borrow();
        if let Some(value) = scope.store.get(name) {
            return Some(value.clone());
        }
        scope.outer.as_ref().and_then(|outer| outer.get(name))
    }

    /// Bind `name` in this scope only, shadowing any outer binding.
    ///
    /// Returns `value` for chaining.
    pub fn set(&self, name: impl Into<String>, value: Value) -> Value {
        self.0.borrow_mut().store.insert(name.into(), value.clone());
        value
    }

    /// Whether `name` is bound in this scope, ignoring outer scopes.
    pub fn contains_local(&self, name: &str) -> bool {
        self.0.borrow().store.contains_key(name)
    }

    pub fn outer(&self) -> Option<Environment> {
        self.0.borrow().outer.clone()
    }

    /// Number of scopes from this one to the root, inclusive.
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut current = self.outer();
        while let Some(env) = current {
            depth += 1;
            current = env.outer();
        }
        depth
    }

    /// Whether both handles refer to the same scope.
    #[inline]
    pub fn ptr_eq(a: &Environment, b: &Environment) -> bool {
        LocalScope::ptr_eq(&a.0, &b.0)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Environment {
    // Bindings may hold closures over this very scope; print names only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = self.0.borrow();
        let mut names: Vec<&str> = scope.store.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Environment")
            .field("bindings", &names)
            .field("depth", &self.depth())
            .finish()
    }
}
