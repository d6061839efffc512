//! Error types for cellkit.
//!
//! The fallible surface is small by design: most wrappers have panicking
//! primary accessors (a definite-initialization bug should fail fast) and
//! `try_*` variants that return these errors instead.

use thiserror::Error;

/// All cellkit errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A deferred cell was read before its first write.
    #[error("cell accessed before being initialized")]
    Uninitialized,

    /// A write-once cell was written twice.
    #[error("cell initialized twice")]
    AlreadyInitialized,

    /// A clamped value was constructed with an initial value outside its range.
    #[error("initial value {value} outside range {range}")]
    OutOfRange {
        /// The offending initial value.
        value: String,
        /// The allowed closed range.
        range: String,
    },

    /// A clamped value was constructed with an empty range (`lo > hi`).
    #[error("empty range: {range}")]
    EmptyRange {
        /// The offending range.
        range: String,
    },
}

/// Result type for cellkit operations.
pub type Result<T> = std::result::Result<T, Error>;
