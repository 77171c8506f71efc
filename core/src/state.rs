//! State cells shared between the session components and the UI.
//!
//! Components never own their state directly; they hold a [`StateCell`]
//! so the same logic can drive a reactive signal in the browser or a plain
//! `Rc<RefCell<_>>` in tests.

use std::cell::RefCell;
use std::rc::Rc;

/// Shared, single-threaded handle to a piece of component state.
pub trait StateCell<T: Clone> {
    /// Snapshot of the current value.
    fn get(&self) -> T;

    /// Mutate the value in place.
    ///
    /// Returns `false` when the backing storage has been disposed, in which
    /// case `f` is not run.
    fn update(&self, f: impl FnOnce(&mut T)) -> bool;

    fn set(&self, value: T) -> bool {
        self.update(|current| *current = value)
    }
}

/// `Rc<RefCell<T>>` cell for tests and non-UI callers.
#[derive(Debug, Default)]
pub struct LocalCell<T> {
    inner: Rc<RefCell<T>>,
}

impl<T> LocalCell<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(value)),
        }
    }
}

impl<T> Clone for LocalCell<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone> StateCell<T> for LocalCell<T> {
    fn get(&self) -> T {
        self.inner.borrow().clone()
    }

    fn update(&self, f: impl FnOnce(&mut T)) -> bool {
        let mut value = self.inner.borrow_mut();
        f(&mut *value);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let cell = LocalCell::new(Vec::<u32>::new());
        let other = cell.clone();

        assert!(other.update(|v| v.push(1)));
        assert!(cell.set(vec![1, 2]));
        assert_eq!(other.get(), vec![1, 2]);
    }
}
