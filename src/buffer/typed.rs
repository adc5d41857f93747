//! The generic fixed-capacity positional buffer.
//!
//! One implementation of the full buffer contract, shared by every element
//! type: relative and absolute access against the cursor window, bulk
//! transfers with all-or-nothing validation, compaction, and the aliasing
//! projections (duplicate, slice, read-only).
//!
//! # Aliasing
//!
//! [`duplicate`](Buffer::duplicate), [`slice`](Buffer::slice),
//! [`as_read_only`](Buffer::as_read_only), and the view factories on byte
//! buffers all share the backing store: writes through one handle are
//! visible through every other. Cursor state (position, limit, mark) is
//! never shared; each handle moves independently.
//!
//! # Ordering and equality
//!
//! Comparison covers the remaining range of each buffer, element-wise from
//! each one's position. Floats use the crate-wide policy: NaN equals NaN
//! and sorts after every other value. The hash covers the same remaining
//! range, so it changes when position or limit move. That is expected,
//! not a bug.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use std::cell::{Ref, RefMut};

use crate::buffer::cursor::CursorState;
use crate::buffer::element::Element;
use crate::buffer::storage::Backing;
use crate::error::{BufferError, Result};
use crate::order::ByteOrder;

/// Default order for a fresh buffer: byte buffers are big-endian
/// independent of host; wider native-array buffers report the platform
/// order.
fn default_order<T: Element>() -> ByteOrder {
    if T::WIDTH == 1 {
        ByteOrder::BigEndian
    } else {
        ByteOrder::native()
    }
}

/// A fixed-capacity positional buffer of `T` elements.
///
/// Relative operations move a cursor bounded by a limit; absolute
/// operations address the window directly. See the crate docs for the
/// protocol walkthrough.
///
/// # Examples
///
/// ```
/// use flipbuf::I32Buffer;
///
/// let mut buf = I32Buffer::allocate(3);
/// buf.put(10).unwrap().put(20).unwrap();
/// buf.flip();
/// assert_eq!(buf.remaining(), 2);
/// assert_eq!(buf.get().unwrap(), 10);
/// assert_eq!(buf.get().unwrap(), 20);
/// assert!(buf.get().unwrap_err().is_exhausted());
/// ```
pub struct Buffer<T: Element> {
    backing: Backing<T>,
    /// Element offset of this buffer's index 0 within the backing store
    /// (nonzero for slices).
    offset: usize,
    cursor: CursorState,
    read_only: bool,
    order: ByteOrder,
}

impl<T: Element> Buffer<T> {
    /// Allocate a buffer over fresh zero-filled storage.
    ///
    /// Position 0, limit = capacity, no mark.
    ///
    /// # Examples
    ///
    /// ```
    /// use flipbuf::ByteBuffer;
    ///
    /// let buf = ByteBuffer::allocate(16);
    /// assert_eq!(buf.capacity(), 16);
    /// assert_eq!(buf.remaining(), 16);
    /// ```
    #[must_use]
    pub fn allocate(capacity: usize) -> Self {
        Buffer {
            backing: Backing::allocate(capacity),
            offset: 0,
            cursor: CursorState::new(capacity),
            read_only: false,
            order: default_order::<T>(),
        }
    }

    /// Wrap existing elements. Capacity and limit are the vector length,
    /// position 0.
    ///
    /// The storage is shared with every duplicate, slice, and view made
    /// from this buffer; reach it back through [`array`](Buffer::array).
    #[must_use]
    pub fn wrap(elements: Vec<T>) -> Self {
        let capacity = elements.len();
        Buffer {
            backing: Backing::from_vec(elements),
            offset: 0,
            cursor: CursorState::new(capacity),
            read_only: false,
            order: default_order::<T>(),
        }
    }

    /// Wrap existing elements with an initial window: position = `offset`,
    /// limit = `offset + length`, capacity = the vector length.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfBounds`] when `offset + length` exceeds the
    /// vector length (or overflows).
    pub fn wrap_range(elements: Vec<T>, offset: usize, length: usize) -> Result<Self> {
        let capacity = elements.len();
        let end = offset
            .checked_add(length)
            .filter(|&end| end <= capacity)
            .ok_or(BufferError::OutOfBounds {
                index: offset.saturating_add(length),
                bound: capacity,
            })?;
        Ok(Buffer {
            backing: Backing::from_vec(elements),
            offset: 0,
            cursor: CursorState::with_window(capacity, offset, end),
            read_only: false,
            order: default_order::<T>(),
        })
    }

    /// Internal constructor for projections and views.
    pub(crate) fn with_parts(
        backing: Backing<T>,
        offset: usize,
        cursor: CursorState,
        read_only: bool,
        order: ByteOrder,
    ) -> Self {
        Buffer {
            backing,
            offset,
            cursor,
            read_only,
            order,
        }
    }

    // === Cursor protocol ===

    /// Fixed element capacity.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cursor.capacity()
    }

    /// Current limit.
    #[inline]
    #[must_use]
    pub fn limit(&self) -> usize {
        self.cursor.limit()
    }

    /// Current position.
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Elements between position and limit.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cursor.remaining()
    }

    /// True while `position < limit`.
    #[inline]
    #[must_use]
    pub fn has_remaining(&self) -> bool {
        self.cursor.has_remaining()
    }

    /// True when every mutating operation is rejected.
    #[inline]
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Byte order used for multi-byte encode/decode through this buffer.
    ///
    /// Byte buffers start big-endian and can be switched with
    /// [`set_order`](Buffer::set_order); views keep the order captured
    /// when they were created; native-array buffers of wider elements
    /// report the platform order.
    #[inline]
    #[must_use]
    pub fn order(&self) -> ByteOrder {
        self.order
    }

    /// Set the limit. The position clamps down to the new limit; a mark
    /// above it is dropped.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfBounds`] when `limit > capacity`.
    pub fn set_limit(&mut self, limit: usize) -> Result<&mut Self> {
        self.cursor.set_limit(limit)?;
        Ok(self)
    }

    /// Set the position. A mark above the new position is dropped.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfBounds`] when `position > limit`.
    pub fn set_position(&mut self, position: usize) -> Result<&mut Self> {
        self.cursor.set_position(position)?;
        Ok(self)
    }

    /// Record the current position as the mark.
    pub fn mark(&mut self) -> &mut Self {
        self.cursor.mark();
        self
    }

    /// Restore the position to the mark; the mark survives.
    ///
    /// # Errors
    ///
    /// [`BufferError::InvalidMark`] when no mark is set.
    pub fn reset(&mut self) -> Result<&mut Self> {
        self.cursor.reset()?;
        Ok(self)
    }

    /// Position 0, limit = capacity, mark dropped. Contents untouched.
    pub fn clear(&mut self) -> &mut Self {
        self.cursor.clear();
        self
    }

    /// Limit = position, position 0, mark dropped: switch from filling to
    /// draining.
    ///
    /// # Examples
    ///
    /// ```
    /// use flipbuf::ByteBuffer;
    ///
    /// let mut buf = ByteBuffer::allocate(8);
    /// buf.put(1).unwrap().put(2).unwrap();
    /// buf.flip();
    /// assert_eq!((buf.position(), buf.limit()), (0, 2));
    /// ```
    pub fn flip(&mut self) -> &mut Self {
        self.cursor.flip();
        self
    }

    /// Position 0, mark dropped; limit untouched.
    pub fn rewind(&mut self) -> &mut Self {
        self.cursor.rewind();
        self
    }

    // === Element access ===

    /// Relative read: the element at the position, then advance by one.
    ///
    /// # Errors
    ///
    /// [`BufferError::Underflow`] when nothing remains.
    pub fn get(&mut self) -> Result<T> {
        let remaining = self.cursor.remaining();
        if remaining == 0 {
            return Err(BufferError::Underflow {
                needed: 1,
                remaining,
            });
        }
        let value = self
            .backing
            .get(self.offset + self.cursor.position(), self.order);
        self.cursor.advance(1);
        Ok(value)
    }

    /// Absolute read at `index`; the position does not move.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfBounds`] when `index >= limit`.
    pub fn get_at(&self, index: usize) -> Result<T> {
        if index >= self.cursor.limit() {
            return Err(BufferError::OutOfBounds {
                index,
                bound: self.cursor.limit(),
            });
        }
        Ok(self.backing.get(self.offset + index, self.order))
    }

    /// Bulk relative read: fill `dst` from the position, then advance by
    /// `dst.len()`. All-or-nothing: on failure the position is unchanged
    /// and `dst` untouched.
    ///
    /// # Errors
    ///
    /// [`BufferError::Underflow`] when `dst.len() > remaining()`.
    pub fn copy_into(&mut self, dst: &mut [T]) -> Result<&mut Self> {
        let needed = dst.len();
        let remaining = self.cursor.remaining();
        if needed > remaining {
            return Err(BufferError::Underflow { needed, remaining });
        }
        self.backing
            .copy_out(self.offset + self.cursor.position(), dst, self.order);
        self.cursor.advance(needed);
        Ok(self)
    }

    /// Snapshot of the remaining range. The position does not move.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        let mut out = vec![T::default(); self.cursor.remaining()];
        self.backing
            .copy_out(self.offset + self.cursor.position(), &mut out, self.order);
        out
    }

    /// Relative write: store at the position, then advance by one.
    ///
    /// # Errors
    ///
    /// [`BufferError::ReadOnly`], or [`BufferError::Overflow`] when no
    /// space remains.
    pub fn put(&mut self, value: T) -> Result<&mut Self> {
        self.ensure_writable()?;
        let remaining = self.cursor.remaining();
        if remaining == 0 {
            return Err(BufferError::Overflow {
                needed: 1,
                remaining,
            });
        }
        self.backing
            .set(self.offset + self.cursor.position(), value, self.order);
        self.cursor.advance(1);
        Ok(self)
    }

    /// Absolute write at `index`; the position does not move.
    ///
    /// # Errors
    ///
    /// [`BufferError::ReadOnly`], or [`BufferError::OutOfBounds`] when
    /// `index >= limit`.
    pub fn put_at(&mut self, index: usize, value: T) -> Result<&mut Self> {
        self.ensure_writable()?;
        if index >= self.cursor.limit() {
            return Err(BufferError::OutOfBounds {
                index,
                bound: self.cursor.limit(),
            });
        }
        self.backing.set(self.offset + index, value, self.order);
        Ok(self)
    }

    /// Bulk relative write: store `src` at the position, then advance by
    /// `src.len()`. All-or-nothing on failure.
    ///
    /// # Errors
    ///
    /// [`BufferError::ReadOnly`], or [`BufferError::Overflow`] when
    /// `src.len() > remaining()`.
    pub fn copy_from(&mut self, src: &[T]) -> Result<&mut Self> {
        self.ensure_writable()?;
        let needed = src.len();
        let remaining = self.cursor.remaining();
        if needed > remaining {
            return Err(BufferError::Overflow { needed, remaining });
        }
        self.backing
            .copy_in(self.offset + self.cursor.position(), src, self.order);
        self.cursor.advance(needed);
        Ok(self)
    }

    /// Transfer the remaining elements of `src` into this buffer,
    /// advancing both positions by the transferred count.
    ///
    /// # Errors
    ///
    /// [`BufferError::ReadOnly`]; [`BufferError::SharedStorage`] when both
    /// buffers alias the same backing store (overlapping self-transfer has
    /// no defined semantics); [`BufferError::Overflow`] when
    /// `src.remaining() > self.remaining()`.
    pub fn put_buffer(&mut self, src: &mut Buffer<T>) -> Result<&mut Self> {
        self.ensure_writable()?;
        if self.backing.aliases(&src.backing) {
            return Err(BufferError::SharedStorage);
        }
        let needed = src.cursor.remaining();
        let remaining = self.cursor.remaining();
        if needed > remaining {
            return Err(BufferError::Overflow { needed, remaining });
        }
        let staged = src.to_vec();
        self.backing
            .copy_in(self.offset + self.cursor.position(), &staged, self.order);
        self.cursor.advance(needed);
        src.cursor.advance(needed);
        Ok(self)
    }

    /// Move the remaining elements to the front, then position = the moved
    /// count, limit = capacity, mark dropped. Readies a partially drained
    /// buffer for refilling.
    ///
    /// # Errors
    ///
    /// [`BufferError::ReadOnly`].
    pub fn compact(&mut self) -> Result<&mut Self> {
        self.ensure_writable()?;
        self.backing.shift_to_front(
            self.offset,
            self.cursor.position(),
            self.cursor.limit(),
        );
        self.cursor.compact();
        Ok(self)
    }

    // === Projections ===

    /// A new handle over the same storage with a snapshot of this cursor
    /// state (mark included) that moves independently afterward.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        Buffer {
            backing: self.backing.clone(),
            offset: self.offset,
            cursor: self.cursor.clone(),
            read_only: self.read_only,
            order: self.order,
        }
    }

    /// As [`duplicate`](Buffer::duplicate), but the new handle rejects
    /// every mutation with [`BufferError::ReadOnly`].
    #[must_use]
    pub fn as_read_only(&self) -> Self {
        let mut projection = self.duplicate();
        projection.read_only = true;
        projection
    }

    /// A new buffer over this buffer's remaining range, re-based so its
    /// position is 0 and its capacity and limit equal `remaining()`. The
    /// storage stays shared; the mark starts unset; read-only is
    /// inherited.
    ///
    /// # Examples
    ///
    /// ```
    /// use flipbuf::ByteBuffer;
    ///
    /// let mut buf = ByteBuffer::wrap(vec![1, 2, 3, 4, 5]);
    /// buf.set_position(2).unwrap();
    /// let mut tail = buf.slice();
    /// assert_eq!((tail.position(), tail.capacity()), (0, 3));
    /// tail.put_at(0, 99).unwrap();
    /// assert_eq!(buf.get_at(2).unwrap(), 99);
    /// ```
    #[must_use]
    pub fn slice(&self) -> Self {
        Buffer {
            backing: self.backing.clone(),
            offset: self.offset + self.cursor.position(),
            cursor: CursorState::new(self.cursor.remaining()),
            read_only: self.read_only,
            order: self.order,
        }
    }

    // === Backing array access ===

    /// True when an array of the element type backs this buffer and the
    /// buffer is writable. Views report the array status of the byte
    /// buffer they were layered over.
    #[must_use]
    pub fn has_array(&self) -> bool {
        !self.read_only && !self.backing.is_frozen()
    }

    /// Borrow the full backing array. Combine with
    /// [`array_offset`](Buffer::array_offset) to locate this buffer's
    /// element 0. Release the guard before mutating through any aliasing
    /// handle.
    ///
    /// # Errors
    ///
    /// [`BufferError::ReadOnly`] for a read-only buffer over an array
    /// (access denied so the projection cannot be bypassed);
    /// [`BufferError::NoBackingArray`] when no array of the element type
    /// exists (views, string-wrapped buffers).
    pub fn array(&self) -> Result<Ref<'_, [T]>> {
        match &self.backing {
            Backing::Native(store) => {
                if self.read_only {
                    Err(BufferError::ReadOnly)
                } else {
                    Ok(Ref::map(store.borrow(), Vec::as_slice))
                }
            }
            _ => Err(BufferError::NoBackingArray),
        }
    }

    /// Mutably borrow the full backing array.
    ///
    /// # Errors
    ///
    /// As [`array`](Buffer::array).
    pub fn array_mut(&self) -> Result<RefMut<'_, [T]>> {
        match &self.backing {
            Backing::Native(store) => {
                if self.read_only {
                    Err(BufferError::ReadOnly)
                } else {
                    Ok(RefMut::map(store.borrow_mut(), Vec::as_mut_slice))
                }
            }
            _ => Err(BufferError::NoBackingArray),
        }
    }

    /// Offset of this buffer's element 0 within the backing array.
    ///
    /// # Errors
    ///
    /// As [`array`](Buffer::array).
    pub fn array_offset(&self) -> Result<usize> {
        match &self.backing {
            Backing::Native(_) => {
                if self.read_only {
                    Err(BufferError::ReadOnly)
                } else {
                    Ok(self.offset)
                }
            }
            _ => Err(BufferError::NoBackingArray),
        }
    }

    // === Internal ===

    #[inline]
    fn ensure_writable(&self) -> Result<()> {
        if self.read_only {
            Err(BufferError::ReadOnly)
        } else {
            Ok(())
        }
    }

    pub(crate) fn backing(&self) -> &Backing<T> {
        &self.backing
    }

    pub(crate) fn element_offset(&self) -> usize {
        self.offset
    }

    pub(crate) fn cursor_mut(&mut self) -> &mut CursorState {
        &mut self.cursor
    }

    pub(crate) fn set_order_internal(&mut self, order: ByteOrder) {
        self.order = order;
    }
}

impl<T: Element> PartialEq for Buffer<T> {
    /// Buffers are equal when their remaining ranges have the same length
    /// and pairwise content-equal elements. Position, limit, capacity,
    /// and read-only status outside the remaining range play no part.
    fn eq(&self, other: &Self) -> bool {
        let n = self.remaining();
        if n != other.remaining() {
            return false;
        }
        (0..n).all(|i| {
            let lhs = self.backing.get(self.offset + self.position() + i, self.order);
            let rhs = other
                .backing
                .get(other.offset + other.position() + i, other.order);
            T::content_eq(lhs, rhs)
        })
    }
}

impl<T: Element> Eq for Buffer<T> {}

impl<T: Element> Ord for Buffer<T> {
    /// Lexicographic comparison of the remaining ranges; when one is a
    /// prefix of the other, the shorter range sorts first.
    fn cmp(&self, other: &Self) -> Ordering {
        let n = self.remaining().min(other.remaining());
        for i in 0..n {
            let lhs = self.backing.get(self.offset + self.position() + i, self.order);
            let rhs = other
                .backing
                .get(other.offset + other.position() + i, other.order);
            match T::compare(lhs, rhs) {
                Ordering::Equal => {}
                unequal => return unequal,
            }
        }
        self.remaining().cmp(&other.remaining())
    }
}

impl<T: Element> PartialOrd for Buffer<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Element> Hash for Buffer<T> {
    /// Hashes the remaining range only; equal remaining content hashes
    /// equal. The value therefore shifts as position or limit move.
    fn hash<H: Hasher>(&self, state: &mut H) {
        for i in 0..self.remaining() {
            self.backing
                .get(self.offset + self.position() + i, self.order)
                .hash_word()
                .hash(state);
        }
    }
}

impl<T: Element> fmt::Debug for Buffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("capacity", &self.capacity())
            .field("position", &self.position())
            .field("limit", &self.limit())
            .field("read_only", &self.read_only)
            .field("order", &self.order)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Element>(buf: &Buffer<T>) -> u64 {
        let mut hasher = DefaultHasher::new();
        buf.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_allocate_zero_filled() {
        let mut buf = Buffer::<i64>::allocate(4);
        for _ in 0..4 {
            assert_eq!(buf.get().unwrap(), 0);
        }
    }

    #[test]
    fn test_sequential_round_trip() {
        let mut buf = Buffer::<u8>::allocate(10);
        for i in 0..10u8 {
            buf.put(i).unwrap();
        }
        buf.flip();
        for i in 0..10u8 {
            assert_eq!(buf.get().unwrap(), i);
        }
        assert_eq!(
            buf.get().unwrap_err(),
            BufferError::Underflow {
                needed: 1,
                remaining: 0
            }
        );
    }

    #[test]
    fn test_absolute_access_leaves_position() {
        let mut buf = Buffer::<i32>::allocate(5);
        buf.put_at(3, 42).unwrap();
        assert_eq!(buf.position(), 0);
        assert_eq!(buf.get_at(3).unwrap(), 42);
        assert_eq!(buf.position(), 0);
        assert!(buf.get_at(5).unwrap_err().is_out_of_bounds());
        assert!(buf.put_at(5, 0).unwrap_err().is_out_of_bounds());
    }

    #[test]
    fn test_absolute_access_respects_limit() {
        let mut buf = Buffer::<i32>::allocate(8);
        buf.set_limit(3).unwrap();
        assert!(buf.get_at(3).unwrap_err().is_out_of_bounds());
        assert!(buf.get_at(2).is_ok());
    }

    #[test]
    fn test_bulk_copy_round_trip() {
        let mut buf = Buffer::<i16>::allocate(6);
        buf.copy_from(&[1, 2, 3, 4]).unwrap();
        assert_eq!(buf.position(), 4);
        buf.flip();
        let mut out = [0i16; 4];
        buf.copy_into(&mut out).unwrap();
        assert_eq!(out, [1, 2, 3, 4]);
    }

    #[test]
    fn test_bulk_failure_leaves_state() {
        let mut buf = Buffer::<u8>::allocate(3);
        buf.put(7).unwrap();
        let before = buf.position();
        assert_eq!(
            buf.copy_from(&[1, 2, 3]).unwrap_err(),
            BufferError::Overflow {
                needed: 3,
                remaining: 2
            }
        );
        assert_eq!(buf.position(), before);

        buf.flip();
        let mut out = [0u8; 4];
        assert_eq!(
            buf.copy_into(&mut out).unwrap_err(),
            BufferError::Underflow {
                needed: 4,
                remaining: 1
            }
        );
        assert_eq!(buf.position(), 0);
        assert_eq!(out, [0u8; 4]);
    }

    #[test]
    fn test_put_buffer_transfer() {
        let mut src = Buffer::<i32>::wrap(vec![1, 2, 3]);
        let mut dst = Buffer::<i32>::allocate(5);
        dst.put_buffer(&mut src).unwrap();
        assert_eq!(dst.position(), 3);
        assert_eq!(src.remaining(), 0);
        dst.flip();
        assert_eq!(dst.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_put_buffer_overflow() {
        let mut src = Buffer::<i32>::wrap(vec![0; 6]);
        let mut dst = Buffer::<i32>::allocate(5);
        assert_eq!(
            dst.put_buffer(&mut src).unwrap_err(),
            BufferError::Overflow {
                needed: 6,
                remaining: 5
            }
        );
        // Neither cursor moved.
        assert_eq!(src.position(), 0);
        assert_eq!(dst.position(), 0);
    }

    #[test]
    fn test_put_buffer_rejects_shared_storage() {
        let mut buf = Buffer::<i32>::wrap(vec![1, 2, 3, 4]);
        let mut alias = buf.duplicate();
        assert_eq!(
            buf.put_buffer(&mut alias).unwrap_err(),
            BufferError::SharedStorage
        );
        let mut tail = buf.slice();
        assert_eq!(
            buf.put_buffer(&mut tail).unwrap_err(),
            BufferError::SharedStorage
        );
    }

    #[test]
    fn test_compact_moves_remaining() {
        let mut buf = Buffer::<u8>::wrap((0..10u8).collect());
        buf.set_position(1).unwrap();
        buf.set_limit(5).unwrap();
        buf.mark();
        buf.compact().unwrap();
        assert_eq!(buf.position(), 4);
        assert_eq!(buf.limit(), 10);
        assert_eq!(buf.reset().unwrap_err(), BufferError::InvalidMark);
        assert_eq!(buf.get_at(0).unwrap(), 1);
        assert_eq!(buf.get_at(3).unwrap(), 4);
    }

    #[test]
    fn test_duplicate_shares_storage_not_cursor() {
        let mut buf = Buffer::<u8>::allocate(4);
        buf.put(1).unwrap();
        buf.mark();
        let mut dup = buf.duplicate();
        // Cursor state snapshot includes the mark value.
        dup.set_position(3).unwrap();
        dup.reset().unwrap();
        assert_eq!(dup.position(), 1);

        dup.put_at(2, 99).unwrap();
        assert_eq!(buf.get_at(2).unwrap(), 99);
        // Independent positions.
        assert_eq!(buf.position(), 1);
    }

    #[test]
    fn test_slice_rebased_window() {
        let mut buf = Buffer::<i32>::wrap(vec![10, 20, 30, 40, 50]);
        buf.set_position(1).unwrap();
        buf.set_limit(4).unwrap();
        let mut sub = buf.slice();
        assert_eq!(sub.capacity(), 3);
        assert_eq!(sub.limit(), 3);
        assert_eq!(sub.position(), 0);
        assert_eq!(sub.get().unwrap(), 20);
        sub.put_at(2, 99).unwrap();
        assert_eq!(buf.get_at(3).unwrap(), 99);
    }

    #[test]
    fn test_read_only_projection() {
        let buf = Buffer::<u8>::wrap(vec![1, 2, 3]);
        let mut frozen = buf.as_read_only();
        assert!(frozen.is_read_only());
        assert_eq!(frozen.put(9).unwrap_err(), BufferError::ReadOnly);
        assert_eq!(frozen.put_at(0, 9).unwrap_err(), BufferError::ReadOnly);
        assert_eq!(frozen.copy_from(&[9]).unwrap_err(), BufferError::ReadOnly);
        assert_eq!(frozen.compact().unwrap_err(), BufferError::ReadOnly);
        let mut src = Buffer::<u8>::allocate(1);
        assert_eq!(
            frozen.put_buffer(&mut src).unwrap_err(),
            BufferError::ReadOnly
        );
        // Reads still work.
        assert_eq!(frozen.get().unwrap(), 1);
    }

    #[test]
    fn test_array_access() {
        let mut buf = Buffer::<u8>::wrap(vec![5, 6, 7]);
        assert!(buf.has_array());
        assert_eq!(buf.array_offset().unwrap(), 0);
        assert_eq!(&*buf.array().unwrap(), &[5, 6, 7]);
        {
            let mut arr = buf.array_mut().unwrap();
            arr[0] = 50;
        }
        assert_eq!(buf.get().unwrap(), 50);

        let sliced = {
            buf.set_position(2).unwrap();
            buf.slice()
        };
        assert_eq!(sliced.array_offset().unwrap(), 2);
    }

    #[test]
    fn test_array_denied_for_read_only() {
        let buf = Buffer::<u8>::wrap(vec![1]).as_read_only();
        assert!(!buf.has_array());
        assert_eq!(buf.array().unwrap_err(), BufferError::ReadOnly);
        assert_eq!(buf.array_mut().unwrap_err(), BufferError::ReadOnly);
        assert_eq!(buf.array_offset().unwrap_err(), BufferError::ReadOnly);
    }

    #[test]
    fn test_wrap_range_window() {
        let buf = Buffer::<u8>::wrap_range(vec![0, 1, 2, 3, 4], 1, 3).unwrap();
        assert_eq!(buf.capacity(), 5);
        assert_eq!(buf.position(), 1);
        assert_eq!(buf.limit(), 4);
        assert_eq!(buf.remaining(), 3);
    }

    #[test]
    fn test_wrap_range_rejects_bad_window() {
        assert!(Buffer::<u8>::wrap_range(vec![0; 4], 3, 2)
            .unwrap_err()
            .is_out_of_bounds());
        assert!(Buffer::<u8>::wrap_range(vec![0; 4], 5, 0)
            .unwrap_err()
            .is_out_of_bounds());
        assert!(Buffer::<u8>::wrap_range(vec![0; 4], usize::MAX, 2)
            .unwrap_err()
            .is_out_of_bounds());
    }

    #[test]
    fn test_equality_over_remaining_range() {
        let mut a = Buffer::<u8>::wrap(vec![9, 1, 2, 3]);
        let b = Buffer::<u8>::wrap(vec![1, 2, 3]);
        assert_ne!(a, b);
        a.set_position(1).unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_ordering_lexicographic() {
        let a = Buffer::<i32>::wrap(vec![1, 2, 3]);
        let b = Buffer::<i32>::wrap(vec![1, 2, 4]);
        let prefix = Buffer::<i32>::wrap(vec![1, 2]);
        assert!(a < b);
        assert!(prefix < a);
        assert_eq!(a.cmp(&a.duplicate()), Ordering::Equal);
    }

    #[test]
    fn test_float_nan_equality_and_ordering() {
        let a = Buffer::<f64>::wrap(vec![f64::NAN]);
        let b = Buffer::<f64>::wrap(vec![f64::from_bits(0x7FF8_0000_0000_0001)]);
        let inf = Buffer::<f64>::wrap(vec![f64::INFINITY]);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert!(a > inf);
        assert_eq!(a.cmp(&b), Ordering::Equal);
    }

    #[test]
    fn test_view_equality_against_native() {
        // A big-endian view and a native buffer with the same remaining
        // content compare equal.
        let mut bytes = Buffer::<u8>::allocate(8);
        bytes.put_i32(7).unwrap();
        bytes.put_i32(-7).unwrap();
        bytes.flip();
        let view = bytes.as_i32_buffer();
        let native = Buffer::<i32>::wrap(vec![7, -7]);
        assert_eq!(view, native);
        assert_eq!(hash_of(&view), hash_of(&native));
    }

    #[test]
    fn test_debug_format() {
        let buf = Buffer::<u8>::allocate(3);
        let rendered = format!("{buf:?}");
        assert!(rendered.contains("capacity: 3"));
        assert!(rendered.contains("read_only: false"));
    }
}
