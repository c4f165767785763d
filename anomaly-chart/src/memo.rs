//! Lazily computed, invalidatable values.

use std::cell::{Cell, OnceCell};
use std::rc::Rc;

/// A cached derived value.
///
/// The value is computed on first read and handed out as a shared handle, so
/// every read until the next [`Memo::invalidate`] returns the same allocation.
#[derive(Debug)]
pub struct Memo<T> {
    value: OnceCell<Rc<T>>,
    computations: Cell<u64>,
}

impl<T> Memo<T> {
    pub fn new() -> Self {
        Self {
            value: OnceCell::new(),
            computations: Cell::new(0),
        }
    }

    /// Return the cached value, computing it first if needed.
    pub fn get_or_compute(&self, compute: impl FnOnce() -> T) -> Rc<T> {
        let value = self.value.get_or_init(|| {
            self.computations.set(self.computations.get() + 1);
            Rc::new(compute())
        });
        Rc::clone(value)
    }

    /// Drop the cached value. Returns whether anything was cached.
    pub fn invalidate(&mut self) -> bool {
        self.value.take().is_some()
    }

    pub fn is_cached(&self) -> bool {
        self.value.get().is_some()
    }

    /// How many times the value has been computed.
    pub fn computations(&self) -> u64 {
        self.computations.get()
    }
}

impl<T> Default for Memo<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_computes_once() {
        let memo = Memo::new();
        let a = memo.get_or_compute(|| vec![1, 2, 3]);
        let b = memo.get_or_compute(|| unreachable!());

        assert!(Rc::ptr_eq(&a, &b));
        assert_eq!(memo.computations(), 1);
    }

    #[test]
    fn test_invalidate() {
        let mut memo = Memo::new();
        assert!(!memo.invalidate());

        let first = memo.get_or_compute(|| 1);
        assert!(memo.is_cached());
        assert!(memo.invalidate());
        assert!(!memo.is_cached());

        let second = memo.get_or_compute(|| 2);
        assert!(!Rc::ptr_eq(&first, &second));
        assert_eq!(*second, 2);
        assert_eq!(memo.computations(), 2);
    }
}
