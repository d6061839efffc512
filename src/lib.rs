//! # cellkit
//!
//! A toolkit of small, independent single-value wrapper cells. Each wrapper
//! customizes one aspect of how a stored value is read and written:
//!
//! - [`BoxedCell`] - reference semantics for a value (all handles alias one slot)
//! - [`ClampedValue`] - keeps a value inside a fixed closed range
//! - [`CopyOnWriteCell`] - clones its payload on first mutation after a share
//! - [`DeferredSingleAssign`] - write-once delayed initialization
//! - [`DeferredReassignable`] - write-many delayed initialization with reset
//! - [`LazyCell`] - memoizes a producer on first access
//! - [`IndirectReference`] - a read/write closure pair over shared storage
//! - [`PersistedSetting`] - a key-value-store-backed setting with typed codecs
//!
//! ## Quick Start
//!
//! ```
//! use cellkit::prelude::*;
//! use std::rc::Rc;
//!
//! // Reference semantics: both handles see the same slot.
//! let a = BoxedCell::new(1);
//! let b = a.clone();
//! a.set(2);
//! assert_eq!(b.get(), 2);
//!
//! // Store-backed setting with a typed default.
//! let store = Rc::new(MemoryStore::new());
//! let volume = PersistedSetting::new("volume", || 11i64, store.clone());
//! assert_eq!(volume.get(), 11);
//! volume.set(3);
//! assert_eq!(volume.get(), 3);
//! ```
//!
//! ## Concurrency
//!
//! Every wrapper is designed for single-threaded or externally-synchronized
//! use. There is no internal locking and no async surface; handles are `Rc`
//! based and `!Send`.

#![warn(missing_docs)]

mod boxed;
mod clamped;
mod cow;
mod deferred;
mod error;
mod indirect;
mod lazy;
mod settings;

pub mod prelude;

pub use boxed::BoxedCell;
pub use clamped::ClampedValue;
pub use cow::CopyOnWriteCell;
pub use deferred::{DeferredReassignable, DeferredSingleAssign};
pub use error::{Error, Result};
pub use indirect::{IndirectReference, Lens};
pub use lazy::LazyCell;
pub use settings::{
    Blob, KeyCodec, MemoryStore, PersistedSetting, SettingsStore, Stored, ValueCodec,
};
