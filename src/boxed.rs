//! Reference-semantics holder for a value.
//!
//! [`BoxedCell`] converts value semantics into reference semantics: cloning
//! the cell clones the *handle*, not the payload, so every clone aliases the
//! same slot and observes every other handle's writes.

use crate::indirect::IndirectReference;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A shared slot holding one value.
///
/// # Example
///
/// ```
/// use cellkit::BoxedCell;
///
/// let a = BoxedCell::new("hello".to_string());
/// let b = a.clone();
/// a.set("world".to_string());
/// assert_eq!(b.get(), "world");
/// ```
pub struct BoxedCell<V> {
    slot: Rc<RefCell<V>>,
}

impl<V> BoxedCell<V> {
    /// Create a new cell holding `initial`.
    pub fn new(initial: V) -> Self {
        Self {
            slot: Rc::new(RefCell::new(initial)),
        }
    }

    /// Store a new value. Visible through every handle to this cell.
    pub fn set(&self, value: V) {
        *self.slot.borrow_mut() = value;
    }

    /// Store a new value and return the previous one.
    pub fn replace(&self, value: V) -> V {
        self.slot.replace(value)
    }

    /// Run `f` with a borrow of the current value, without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&V) -> R) -> R {
        f(&self.slot.borrow())
    }
}

impl<V: Clone> BoxedCell<V> {
    /// Return a copy of the current value.
    pub fn get(&self) -> V {
        self.slot.borrow().clone()
    }
}

impl<V: Clone + 'static> BoxedCell<V> {
    /// Derive an [`IndirectReference`] whose read and write delegate to this
    /// cell.
    pub fn as_indirect(&self) -> IndirectReference<V> {
        let reader = self.clone();
        let writer = self.clone();
        IndirectReference::new(move || reader.get(), move |value| writer.set(value))
    }
}

impl<V> Clone for BoxedCell<V> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for BoxedCell<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BoxedCell").field(&self.slot.borrow()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_share_one_slot() {
        let a = BoxedCell::new(1);
        let b = a.clone();

        a.set(2);
        assert_eq!(b.get(), 2);

        b.set(3);
        assert_eq!(a.get(), 3);
    }

    #[test]
    fn replace_returns_previous_value() {
        let cell = BoxedCell::new(10);
        assert_eq!(cell.replace(20), 10);
        assert_eq!(cell.get(), 20);
    }

    #[test]
    fn with_borrows_without_cloning() {
        let cell = BoxedCell::new(vec![1, 2, 3]);
        let len = cell.with(|v| v.len());
        assert_eq!(len, 3);
    }

    #[test]
    fn derived_indirect_reference_aliases_the_cell() {
        let cell = BoxedCell::new(0);
        let indirect = cell.as_indirect();

        indirect.set(7);
        assert_eq!(cell.get(), 7);

        cell.set(8);
        assert_eq!(indirect.get(), 8);
    }
}
