//! The capacity/limit/position/mark state machine shared by every buffer.
//!
//! Implemented once and composed into [`Buffer`](crate::buffer::Buffer);
//! the transition rules are identical for every element type.
//!
//! # Invariants
//!
//! After every operation: `mark <= position <= limit <= capacity` (with the
//! mark clause only while a mark is set). Capacity is fixed for the life of
//! the state. A transition that would leave the mark above the new position
//! or limit drops the mark entirely rather than leaving it stale.

use crate::error::{BufferError, Result};

/// Cursor state: the four bound integers and their transition rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CursorState {
    capacity: usize,
    limit: usize,
    position: usize,
    mark: Option<usize>,
}

impl CursorState {
    /// Fresh state over `capacity` elements: position 0, limit = capacity,
    /// no mark.
    pub(crate) const fn new(capacity: usize) -> Self {
        CursorState {
            capacity,
            limit: capacity,
            position: 0,
            mark: None,
        }
    }

    /// State with an explicit initial window. Callers validate
    /// `position <= limit <= capacity` beforehand.
    pub(crate) fn with_window(capacity: usize, position: usize, limit: usize) -> Self {
        debug_assert!(position <= limit && limit <= capacity);
        CursorState {
            capacity,
            limit,
            position,
            mark: None,
        }
    }

    #[inline]
    pub(crate) const fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub(crate) const fn limit(&self) -> usize {
        self.limit
    }

    #[inline]
    pub(crate) const fn position(&self) -> usize {
        self.position
    }

    #[inline]
    pub(crate) const fn remaining(&self) -> usize {
        self.limit - self.position
    }

    #[inline]
    pub(crate) const fn has_remaining(&self) -> bool {
        self.position < self.limit
    }

    /// Set the limit. Clamps the position down to the new limit and drops
    /// the mark if it would land above it.
    pub(crate) fn set_limit(&mut self, limit: usize) -> Result<()> {
        if limit > self.capacity {
            return Err(BufferError::OutOfBounds {
                index: limit,
                bound: self.capacity,
            });
        }
        self.limit = limit;
        if self.position > limit {
            self.position = limit;
        }
        if matches!(self.mark, Some(mark) if mark > limit) {
            self.mark = None;
        }
        Ok(())
    }

    /// Set the position. Drops the mark if it would land above the new
    /// position.
    pub(crate) fn set_position(&mut self, position: usize) -> Result<()> {
        if position > self.limit {
            return Err(BufferError::OutOfBounds {
                index: position,
                bound: self.limit,
            });
        }
        self.position = position;
        if matches!(self.mark, Some(mark) if mark > position) {
            self.mark = None;
        }
        Ok(())
    }

    /// Record the current position as the mark.
    pub(crate) fn mark(&mut self) {
        self.mark = Some(self.position);
    }

    /// Restore the position to the mark. The mark itself survives, so
    /// repeated resets return to the same spot.
    pub(crate) fn reset(&mut self) -> Result<()> {
        match self.mark {
            Some(mark) => {
                self.position = mark;
                Ok(())
            }
            None => Err(BufferError::InvalidMark),
        }
    }

    /// Position 0, limit = capacity, mark dropped. Stored data is untouched.
    pub(crate) fn clear(&mut self) {
        self.position = 0;
        self.limit = self.capacity;
        self.mark = None;
    }

    /// Limit = position, position 0, mark dropped: switch from filling to
    /// draining.
    pub(crate) fn flip(&mut self) {
        self.limit = self.position;
        self.position = 0;
        self.mark = None;
    }

    /// Position 0, mark dropped; limit untouched: re-read the window.
    pub(crate) fn rewind(&mut self) {
        self.position = 0;
        self.mark = None;
    }

    /// Post-compaction state: position = surviving element count, limit =
    /// capacity, mark dropped.
    pub(crate) fn compact(&mut self) {
        self.position = self.remaining();
        self.limit = self.capacity;
        self.mark = None;
    }

    /// Advance the position by `n`. Callers check `n <= remaining()` first.
    #[inline]
    pub(crate) fn advance(&mut self, n: usize) {
        debug_assert!(n <= self.remaining());
        self.position += n;
    }
}
