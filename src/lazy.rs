//! Deferred-computation holder that memoizes on first access.

use std::fmt;

enum LazyState<V> {
    Pending(Box<dyn FnOnce() -> V>),
    Ready(V),
}

/// A value computed on first access.
///
/// Starts out holding a producer closure. The first [`get`](LazyCell::get)
/// runs the producer exactly once, stores the result, and every later read
/// returns the stored value. A [`set`](LazyCell::set) before the first read
/// discards the producer without ever calling it.
///
/// Not synchronized: `get` takes `&mut self`, so the Pending-to-Ready
/// transition cannot race in safe single-threaded code. A multi-threaded
/// variant would need a once-style guard around that transition.
///
/// # Example
///
/// ```
/// use cellkit::LazyCell;
///
/// let mut cell = LazyCell::new(|| "expensive".len());
/// assert!(!cell.is_ready());
/// assert_eq!(*cell.get(), 9);
/// assert!(cell.is_ready());
/// ```
pub struct LazyCell<V> {
    // `None` only while the producer runs, and permanently if it panicked.
    state: Option<LazyState<V>>,
}

impl<V> LazyCell<V> {
    /// Create a cell that will run `producer` on first access.
    pub fn new(producer: impl FnOnce() -> V + 'static) -> Self {
        Self {
            state: Some(LazyState::Pending(Box::new(producer))),
        }
    }

    /// Create a cell that is already resolved, with no producer involved.
    pub fn ready(value: V) -> Self {
        Self {
            state: Some(LazyState::Ready(value)),
        }
    }

    /// Whether the value has been resolved (by a read or a write).
    pub fn is_ready(&self) -> bool {
        matches!(self.state, Some(LazyState::Ready(_)))
    }

    /// Read the value, resolving it on the first call.
    ///
    /// # Panics
    ///
    /// Panics if the producer panicked during an earlier access.
    pub fn get(&mut self) -> &V {
        if matches!(self.state, Some(LazyState::Pending(_))) {
            let Some(LazyState::Pending(produce)) = self.state.take() else {
                unreachable!()
            };
            self.state = Some(LazyState::Ready(produce()));
        }
        match &self.state {
            Some(LazyState::Ready(value)) => value,
            _ => panic!("LazyCell: producer panicked during a previous access"),
        }
    }

    /// Store a value directly, discarding any pending producer.
    ///
    /// If this happens before the first read, the producer is never called.
    pub fn set(&mut self, value: V) {
        self.state = Some(LazyState::Ready(value));
    }
}

impl<V: fmt::Debug> fmt::Debug for LazyCell<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            Some(LazyState::Ready(value)) => f.debug_tuple("LazyCell").field(value).finish(),
            Some(LazyState::Pending(_)) => f.write_str("LazyCell(<pending>)"),
            None => f.write_str("LazyCell(<poisoned>)"),
        }
    }
}
