//! Copy-on-write holder for a cloneable payload.

use std::fmt;
use std::rc::Rc;

/// A cell that clones its payload on first mutation after a share.
///
/// Reads hand out cheap [`Rc`] shares of the payload. A mutation through
/// [`make_mut`](CopyOnWriteCell::make_mut) first checks whether the cell is
/// the sole owner of the payload (strong count one, no weak references); if
/// it is, the payload is mutated in place, otherwise it is cloned first so
/// outstanding shares keep their prior snapshot.
///
/// # Example
///
/// ```
/// use cellkit::CopyOnWriteCell;
///
/// let mut cell = CopyOnWriteCell::new(vec![1, 2]);
/// let snapshot = cell.snapshot();
///
/// cell.make_mut().push(3);
/// assert_eq!(*snapshot, vec![1, 2]);
/// assert_eq!(*cell.get(), vec![1, 2, 3]);
/// ```
pub struct CopyOnWriteCell<V: Clone> {
    payload: Rc<V>,
}

impl<V: Clone> CopyOnWriteCell<V> {
    /// Create a cell owning `value` exclusively.
    pub fn new(value: V) -> Self {
        Self {
            payload: Rc::new(value),
        }
    }

    /// Create a cell adopting an already-shared payload.
    pub fn from_shared(payload: Rc<V>) -> Self {
        Self { payload }
    }

    /// A share of the current payload. The share keeps observing the value
    /// as of this call even if the cell mutates afterwards.
    pub fn snapshot(&self) -> Rc<V> {
        Rc::clone(&self.payload)
    }

    /// Borrow the current payload without cloning or sharing it.
    pub fn get(&self) -> &V {
        &self.payload
    }

    /// Mutable access to the payload.
    ///
    /// Clones the payload iff other shares are outstanding; the uniqueness
    /// check and the clone-or-reuse decision are a single step inside
    /// [`Rc::make_mut`].
    pub fn make_mut(&mut self) -> &mut V {
        Rc::make_mut(&mut self.payload)
    }

    /// Replace the payload unconditionally. Outstanding shares keep the old
    /// payload.
    pub fn set(&mut self, value: V) {
        self.payload = Rc::new(value);
    }

    /// Whether this cell is the sole owner of its payload.
    pub fn is_unique(&self) -> bool {
        Rc::strong_count(&self.payload) == 1 && Rc::weak_count(&self.payload) == 0
    }
}

impl<V: Clone + fmt::Debug> fmt::Debug for CopyOnWriteCell<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CopyOnWriteCell")
            .field("payload", &self.payload)
            .field("unique", &self.is_unique())
            .finish()
    }
}
