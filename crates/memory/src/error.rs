//! Error types for arena operations.
//!
//! Uses thiserror for clean, idiomatic Rust error definitions.

use thiserror::Error;

/// Arena operation errors.
///
/// Every variant describes a refused allocation. A refused call never
/// mutates the arena: cursors and the finalizer ledger are exactly as
/// they were before the call, so callers are free to retry with a
/// smaller request or to reset and start over.
#[must_use = "errors should be handled"]
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArenaError {
    /// The free span between the bump cursor and the finalizer ledger is
    /// smaller than the padded request. Also reported when the request
    /// itself fits but the matching ledger entry does not.
    #[error("arena out of space: requested {requested} bytes, {available} available")]
    OutOfSpace {
        /// Padded size of the refused request, in bytes.
        requested: usize,
        /// Free span at the time of the call, in bytes.
        available: usize,
    },

    /// `alloc_array` was called with `count == 0`.
    #[error("zero-length array allocation")]
    ZeroCount,

    /// `count * size_of::<T>()` does not fit in `usize`.
    #[error("allocation size overflow: {count} elements of {size} bytes")]
    SizeOverflow {
        /// Requested element count.
        count: usize,
        /// Size of one element, in bytes.
        size: usize,
    },
}

impl ArenaError {
    /// Create an out-of-space error.
    pub fn out_of_space(requested: usize, available: usize) -> Self {
        Self::OutOfSpace {
            requested,
            available,
        }
    }

    /// Create a size overflow error.
    pub fn size_overflow(count: usize, size: usize) -> Self {
        Self::SizeOverflow { count, size }
    }

    /// Whether retrying after freeing space (or with a smaller request)
    /// can succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::OutOfSpace { .. })
    }

    /// Stable error code for categorization.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::OutOfSpace { .. } => "MEM:ARENA:SPACE",
            Self::ZeroCount => "MEM:ARENA:ZERO",
            Self::SizeOverflow { .. } => "MEM:ARENA:OVERFLOW",
        }
    }
}

/// Result type for arena operations.
pub type ArenaResult<T> = core::result::Result<T, ArenaError>;

/// Generic result type alias.
pub type Result<T> = ArenaResult<T>;
