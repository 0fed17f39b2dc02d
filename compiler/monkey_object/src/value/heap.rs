//! Shared allocation behind every `Value`.

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// Reference-counted allocation with a crate-private constructor.
///
/// External code cannot build a `Heap` and therefore cannot build a `Value`
/// outside the factory methods. That is what keeps booleans and null interned.
#[repr(transparent)]
pub struct Heap<T>(Rc<T>);

impl<T> Heap<T> {
    #[inline]
    pub(super) fn new(value: T) -> Self {
        Heap(Rc::new(value))
    }

    /// Whether both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl<T> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Rc::clone(&self.0))
    }
}

impl<T> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heap_deref() {
        let h = Heap::new(42i64);
        assert_eq!(*h, 42);
    }

    #[test]
    fn test_heap_clone_shares_allocation() {
        let h1 = Heap::new(vec![1, 2, 3]);
        let h2 = h1.clone();
        assert_eq!(*h1, *h2);
        assert!(Heap::ptr_eq(&h1, &h2));
    }

    #[test]
    fn test_equal_contents_are_distinct_allocations() {
        let h1 = Heap::new("hello".to_string());
        let h2 = Heap::new("hello".to_string());
        assert_eq!(*h1, *h2);
        assert!(!Heap::ptr_eq(&h1, &h2));
    }
}
