//! Error types for buffer operations.
//!
//! Every precondition violation surfaces as a [`BufferError`] raised at the
//! point of the violated check. Failed operations never leave partial state
//! behind: bulk transfers validate fully before touching the cursor, so a
//! buffer observed after an `Err` is identical to the buffer observed before
//! the call.
//!
//! Callers are expected to branch on specific variants to drive higher-level
//! protocols; [`BufferError::Underflow`] signalling "need more input" is the
//! canonical example.

use thiserror::Error;

/// Error type for buffer operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BufferError {
    /// A relative read requested more elements than remain.
    #[error("buffer underflow: needed {needed}, remaining {remaining}")]
    Underflow {
        /// Elements the operation required.
        needed: usize,
        /// Elements actually remaining.
        remaining: usize,
    },

    /// A relative write would exceed the remaining space.
    #[error("buffer overflow: needed {needed}, remaining {remaining}")]
    Overflow {
        /// Elements the operation required.
        needed: usize,
        /// Elements of space actually remaining.
        remaining: usize,
    },

    /// `reset` was called while no mark is set.
    #[error("invalid mark: mark is not set")]
    InvalidMark,

    /// A mutating operation was invoked on a read-only buffer.
    #[error("buffer is read-only")]
    ReadOnly,

    /// An absolute index or cursor bound fell outside its valid range.
    #[error("index out of bounds: {index} exceeds bound {bound}")]
    OutOfBounds {
        /// The offending index or requested bound.
        index: usize,
        /// The exclusive upper bound it must stay within.
        bound: usize,
    },

    /// A buffer-to-buffer transfer where both ends alias the same storage.
    ///
    /// Overlapping self-transfer has no defined semantics, so it is rejected
    /// outright rather than given one.
    #[error("buffers share the same backing storage")]
    SharedStorage,

    /// The buffer has no accessible backing array.
    #[error("no accessible backing array")]
    NoBackingArray,
}

impl BufferError {
    /// True if this error reports an exhausted buffer (underflow or
    /// overflow).
    ///
    /// Refill/flush loops use this to distinguish "out of data or space"
    /// from contract misuse.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        matches!(self, Self::Underflow { .. } | Self::Overflow { .. })
    }

    /// True if this error reports a rejected mutation of read-only state.
    #[must_use]
    pub const fn is_read_only(&self) -> bool {
        matches!(self, Self::ReadOnly)
    }

    /// True if this error reports an out-of-range index or cursor bound.
    #[must_use]
    pub const fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}

/// Result alias for buffer operations.
pub type Result<T> = core::result::Result<T, BufferError>;
