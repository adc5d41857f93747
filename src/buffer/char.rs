//! Char buffer specialization: UTF-16 code-unit storage with string entry
//! points.
//!
//! A [`CharBuffer`](crate::CharBuffer) stores raw 16-bit code units: no
//! decoding happens on access, and unpaired surrogates are stored like any
//! other unit. [`wrap_str`](Buffer::wrap_str) freezes a string's code
//! units into a read-only buffer with no accessible backing array;
//! [`Display`] renders the remaining range back to text.

use core::fmt;
use std::rc::Rc;

use crate::buffer::cursor::CursorState;
use crate::buffer::storage::Backing;
use crate::buffer::typed::Buffer;
use crate::error::{BufferError, Result};
use crate::order::ByteOrder;

impl Buffer<u16> {
    /// Wrap a string's UTF-16 code units in a read-only buffer.
    ///
    /// Position 0, limit = capacity = the unit count. The buffer has no
    /// accessible backing array and rejects every mutation.
    ///
    /// # Examples
    ///
    /// ```
    /// use flipbuf::CharBuffer;
    ///
    /// let buf = CharBuffer::wrap_str("ABCDE");
    /// assert_eq!(buf.capacity(), 5);
    /// assert!(buf.is_read_only());
    /// assert!(!buf.has_array());
    /// assert_eq!(buf.to_string(), "ABCDE");
    /// ```
    #[must_use]
    pub fn wrap_str(text: &str) -> Self {
        let units: Vec<u16> = text.encode_utf16().collect();
        let capacity = units.len();
        Buffer::with_parts(
            Backing::Frozen(Rc::from(units)),
            0,
            CursorState::new(capacity),
            true,
            ByteOrder::native(),
        )
    }

    /// The code unit at `position + index`; the position does not move.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfBounds`] when `index >= remaining()`.
    pub fn char_at(&self, index: usize) -> Result<u16> {
        let remaining = self.remaining();
        if index >= remaining {
            return Err(BufferError::OutOfBounds {
                index,
                bound: remaining,
            });
        }
        self.get_at(self.position() + index)
    }

    /// A buffer over the code units `[position + start, position + end)`,
    /// sharing storage with this buffer. Read-only is inherited; this
    /// buffer's cursor does not move.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfBounds`] when `start > end` or
    /// `end > remaining()`.
    pub fn sub_sequence(&self, start: usize, end: usize) -> Result<Self> {
        let remaining = self.remaining();
        if end > remaining {
            return Err(BufferError::OutOfBounds {
                index: end,
                bound: remaining,
            });
        }
        if start > end {
            return Err(BufferError::OutOfBounds {
                index: start,
                bound: end,
            });
        }
        Ok(Buffer::with_parts(
            self.backing().clone(),
            self.element_offset(),
            CursorState::with_window(
                self.capacity(),
                self.position() + start,
                self.position() + end,
            ),
            self.is_read_only(),
            self.order(),
        ))
    }

    /// Append a string's UTF-16 code units at the position.
    ///
    /// # Errors
    ///
    /// [`BufferError::ReadOnly`], or [`BufferError::Overflow`] when the
    /// encoded units exceed the remaining space.
    ///
    /// # Examples
    ///
    /// ```
    /// use flipbuf::CharBuffer;
    ///
    /// let mut buf = CharBuffer::allocate(8);
    /// buf.put_str("hi").unwrap();
    /// buf.flip();
    /// assert_eq!(buf.to_string(), "hi");
    /// ```
    pub fn put_str(&mut self, text: &str) -> Result<&mut Self> {
        let units: Vec<u16> = text.encode_utf16().collect();
        self.copy_from(&units)
    }
}

impl fmt::Display for Buffer<u16> {
    /// Renders the remaining code units; unpaired surrogates come out as
    /// U+FFFD. The position does not move.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for decoded in core::char::decode_utf16(self.to_vec()) {
            let ch = decoded.unwrap_or(core::char::REPLACEMENT_CHARACTER);
            fmt::Write::write_char(f, ch)?;
        }
        Ok(())
    }
}
