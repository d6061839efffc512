//! Convenient imports for cellkit.
//!
//! Re-exports every wrapper and the settings machinery so one import is
//! enough:
//!
//! ```
//! use cellkit::prelude::*;
//!
//! let cell = BoxedCell::new(1);
//! assert_eq!(cell.get(), 1);
//! ```

// Wrappers
pub use crate::boxed::BoxedCell;
pub use crate::clamped::ClampedValue;
pub use crate::cow::CopyOnWriteCell;
pub use crate::deferred::{DeferredReassignable, DeferredSingleAssign};
pub use crate::indirect::{IndirectReference, Lens};
pub use crate::lazy::LazyCell;

// Settings
pub use crate::settings::{Blob, KeyCodec, MemoryStore, PersistedSetting, SettingsStore, Stored, ValueCodec};

// Error handling
pub use crate::error::{Error, Result};
