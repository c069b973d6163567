use std::cell::RefCell;
use std::rc::Rc;

/// Mutable slot that outlives re-renders and never triggers one.
pub struct RefSlot<T>(Rc<RefCell<Option<T>>>);

impl<T> Clone for RefSlot<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> Default for RefSlot<T> {
    fn default() -> Self {
        Self(Rc::new(RefCell::new(None)))
    }
}

impl<T> RefSlot<T> {
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.0.borrow().is_some()
    }

    /// Store `make()` unless the slot is already occupied. Returns whether
    /// `make` ran.
    pub fn fill_with(&self, make: impl FnOnce() -> T) -> bool {
        if self.is_set() {
            return false;
        }
        let value = make();
        *self.0.borrow_mut() = Some(value);
        true
    }

    pub fn take(&self) -> Option<T> {
        self.0.borrow_mut().take()
    }
}
