//! Delayed-initialization holders.
//!
//! Both cells enforce definite-initialization rules dynamically: reading
//! before the first write is a bug and fails fast. [`DeferredSingleAssign`]
//! additionally rejects a second write; [`DeferredReassignable`] accepts any
//! number of writes and can be reset back to the uninitialized state.

use crate::error::{Error, Result};

/// A write-once slot: must be assigned exactly once, before the first read.
///
/// # Example
///
/// ```
/// use cellkit::DeferredSingleAssign;
///
/// let mut port = DeferredSingleAssign::new();
/// port.set(8080u16);
/// assert_eq!(*port.get(), 8080);
/// ```
#[derive(Debug, Default)]
pub struct DeferredSingleAssign<V> {
    slot: Option<V>,
}

impl<V> DeferredSingleAssign<V> {
    /// Create an uninitialized slot.
    pub fn new() -> Self {
        Self { slot: None }
    }

    /// Whether the slot has been assigned.
    pub fn is_initialized(&self) -> bool {
        self.slot.is_some()
    }

    /// Perform the one-time initialization.
    ///
    /// # Panics
    ///
    /// Panics if the slot was already initialized.
    pub fn set(&mut self, value: V) {
        if self.try_set(value).is_err() {
            panic!("DeferredSingleAssign: initialized twice");
        }
    }

    /// Perform the one-time initialization, returning
    /// [`Error::AlreadyInitialized`] on a second write.
    pub fn try_set(&mut self, value: V) -> Result<()> {
        if self.slot.is_some() {
            return Err(Error::AlreadyInitialized);
        }
        self.slot = Some(value);
        Ok(())
    }

    /// Read the value.
    ///
    /// # Panics
    ///
    /// Panics if the slot has not been initialized yet.
    pub fn get(&self) -> &V {
        match self.try_get() {
            Ok(value) => value,
            Err(_) => panic!("DeferredSingleAssign: accessed before being initialized"),
        }
    }

    /// Read the value, returning [`Error::Uninitialized`] before the first
    /// write.
    pub fn try_get(&self) -> Result<&V> {
        self.slot.as_ref().ok_or(Error::Uninitialized)
    }
}

/// A reassignable slot: must be assigned before the first read, may be
/// assigned any number of times, and can be reset to uninitialized.
///
/// # Example
///
/// ```
/// use cellkit::DeferredReassignable;
///
/// let mut name = DeferredReassignable::new();
/// name.set("ada");
/// name.set("grace");
/// assert_eq!(*name.get(), "grace");
///
/// name.reset();
/// assert!(!name.is_initialized());
/// ```
#[derive(Debug, Default)]
pub struct DeferredReassignable<V> {
    slot: Option<V>,
}

impl<V> DeferredReassignable<V> {
    /// Create an uninitialized slot.
    pub fn new() -> Self {
        Self { slot: None }
    }

    /// Whether the slot currently holds a value.
    pub fn is_initialized(&self) -> bool {
        self.slot.is_some()
    }

    /// Assign a value. Always succeeds.
    pub fn set(&mut self, value: V) {
        self.slot = Some(value);
    }

    /// Clear back to uninitialized, dropping the current value (and any
    /// resources it holds) without assigning a new one.
    pub fn reset(&mut self) {
        self.slot = None;
    }

    /// Read the value.
    ///
    /// # Panics
    ///
    /// Panics if the slot is uninitialized.
    pub fn get(&self) -> &V {
        match self.try_get() {
            Ok(value) => value,
            Err(_) => panic!("DeferredReassignable: accessed before being initialized"),
        }
    }

    /// Read the value, returning [`Error::Uninitialized`] while the slot is
    /// empty.
    pub fn try_get(&self) -> Result<&V> {
        self.slot.as_ref().ok_or(Error::Uninitialized)
    }
}
