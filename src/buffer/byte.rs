//! Byte buffer specialization: heterogeneous numeric access and typed
//! views.
//!
//! A [`ByteBuffer`](crate::ByteBuffer) reads and writes any element width
//! at any byte offset, encoded under the buffer's current
//! [`order`](Buffer::order). Relative forms advance the position by the
//! element width; absolute forms (`_at`) leave it alone. Each operation
//! validates its whole window before touching anything.
//!
//! The `as_*_buffer` factories layer a typed buffer over the remaining
//! range. The view aliases the byte storage (element `i` occupies the
//! `WIDTH` bytes at `position + i * WIDTH` of this buffer at creation
//! time) and captures the order in effect when it was made; flipping the
//! byte buffer's order later does not reach back into existing views.

use std::rc::Rc;

use crate::buffer::cursor::CursorState;
use crate::buffer::element::Element;
use crate::buffer::storage::Backing;
use crate::buffer::typed::Buffer;
use crate::buffer::{CharBuffer, F32Buffer, F64Buffer, I16Buffer, I32Buffer, I64Buffer};
use crate::error::{BufferError, Result};
use crate::order::ByteOrder;

impl Buffer<u8> {
    /// Select the byte order for subsequent multi-byte access.
    ///
    /// The order applies to the access, not to stored data: bytes written
    /// big-endian and read back little-endian come back byte-swapped.
    ///
    /// # Examples
    ///
    /// ```
    /// use flipbuf::{ByteBuffer, ByteOrder};
    ///
    /// let mut buf = ByteBuffer::allocate(8);
    /// buf.put_i32(0x1234_5678).unwrap();
    /// buf.set_order(ByteOrder::LittleEndian);
    /// assert_eq!(buf.get_i32_at(0).unwrap(), 0x7856_3412);
    /// ```
    pub fn set_order(&mut self, order: ByteOrder) -> &mut Self {
        self.set_order_internal(order);
        self
    }

    // === Relative heterogeneous access ===

    /// Relative read of an i16 (two bytes at the current order).
    pub fn get_i16(&mut self) -> Result<i16> {
        self.get_scalar::<i16>()
    }

    /// Relative read of a u16, the 16-bit code-unit accessor.
    pub fn get_u16(&mut self) -> Result<u16> {
        self.get_scalar::<u16>()
    }

    /// Relative read of an i32 (four bytes at the current order).
    pub fn get_i32(&mut self) -> Result<i32> {
        self.get_scalar::<i32>()
    }

    /// Relative read of an i64 (eight bytes at the current order).
    pub fn get_i64(&mut self) -> Result<i64> {
        self.get_scalar::<i64>()
    }

    /// Relative read of an f32; the stored bit pattern is taken as-is.
    pub fn get_f32(&mut self) -> Result<f32> {
        self.get_scalar::<f32>()
    }

    /// Relative read of an f64; the stored bit pattern is taken as-is.
    pub fn get_f64(&mut self) -> Result<f64> {
        self.get_scalar::<f64>()
    }

    /// Relative write of an i16.
    pub fn put_i16(&mut self, value: i16) -> Result<&mut Self> {
        self.put_scalar(value)
    }

    /// Relative write of a u16, the 16-bit code-unit accessor.
    pub fn put_u16(&mut self, value: u16) -> Result<&mut Self> {
        self.put_scalar(value)
    }

    /// Relative write of an i32.
    pub fn put_i32(&mut self, value: i32) -> Result<&mut Self> {
        self.put_scalar(value)
    }

    /// Relative write of an i64.
    pub fn put_i64(&mut self, value: i64) -> Result<&mut Self> {
        self.put_scalar(value)
    }

    /// Relative write of an f32 bit pattern.
    pub fn put_f32(&mut self, value: f32) -> Result<&mut Self> {
        self.put_scalar(value)
    }

    /// Relative write of an f64 bit pattern.
    pub fn put_f64(&mut self, value: f64) -> Result<&mut Self> {
        self.put_scalar(value)
    }

    // === Absolute heterogeneous access ===

    /// Absolute read of an i16 at byte `index`; the position does not move.
    pub fn get_i16_at(&self, index: usize) -> Result<i16> {
        self.get_scalar_at::<i16>(index)
    }

    /// Absolute read of a u16 at byte `index`.
    pub fn get_u16_at(&self, index: usize) -> Result<u16> {
        self.get_scalar_at::<u16>(index)
    }

    /// Absolute read of an i32 at byte `index`.
    pub fn get_i32_at(&self, index: usize) -> Result<i32> {
        self.get_scalar_at::<i32>(index)
    }

    /// Absolute read of an i64 at byte `index`.
    pub fn get_i64_at(&self, index: usize) -> Result<i64> {
        self.get_scalar_at::<i64>(index)
    }

    /// Absolute read of an f32 at byte `index`.
    pub fn get_f32_at(&self, index: usize) -> Result<f32> {
        self.get_scalar_at::<f32>(index)
    }

    /// Absolute read of an f64 at byte `index`.
    pub fn get_f64_at(&self, index: usize) -> Result<f64> {
        self.get_scalar_at::<f64>(index)
    }

    /// Absolute write of an i16 at byte `index`; the position does not
    /// move.
    pub fn put_i16_at(&mut self, index: usize, value: i16) -> Result<&mut Self> {
        self.put_scalar_at(index, value)
    }

    /// Absolute write of a u16 at byte `index`.
    pub fn put_u16_at(&mut self, index: usize, value: u16) -> Result<&mut Self> {
        self.put_scalar_at(index, value)
    }

    /// Absolute write of an i32 at byte `index`.
    pub fn put_i32_at(&mut self, index: usize, value: i32) -> Result<&mut Self> {
        self.put_scalar_at(index, value)
    }

    /// Absolute write of an i64 at byte `index`.
    pub fn put_i64_at(&mut self, index: usize, value: i64) -> Result<&mut Self> {
        self.put_scalar_at(index, value)
    }

    /// Absolute write of an f32 at byte `index`.
    pub fn put_f32_at(&mut self, index: usize, value: f32) -> Result<&mut Self> {
        self.put_scalar_at(index, value)
    }

    /// Absolute write of an f64 at byte `index`.
    pub fn put_f64_at(&mut self, index: usize, value: f64) -> Result<&mut Self> {
        self.put_scalar_at(index, value)
    }

    // === Typed views ===

    /// A UTF-16 code-unit view over the remaining range.
    #[must_use]
    pub fn as_char_buffer(&self) -> CharBuffer {
        self.as_view::<u16>()
    }

    /// An i16 view over the remaining range.
    #[must_use]
    pub fn as_i16_buffer(&self) -> I16Buffer {
        self.as_view::<i16>()
    }

    /// An i32 view over the remaining range.
    ///
    /// # Examples
    ///
    /// ```
    /// use flipbuf::ByteBuffer;
    ///
    /// let bytes = ByteBuffer::allocate(8);
    /// let mut ints = bytes.as_i32_buffer();
    /// ints.put_at(0, 0x0102_0304).unwrap();
    /// // The view writes straight into the byte storage.
    /// assert_eq!(bytes.get_at(0).unwrap(), 0x01);
    /// assert_eq!(bytes.get_at(3).unwrap(), 0x04);
    /// ```
    #[must_use]
    pub fn as_i32_buffer(&self) -> I32Buffer {
        self.as_view::<i32>()
    }

    /// An i64 view over the remaining range.
    #[must_use]
    pub fn as_i64_buffer(&self) -> I64Buffer {
        self.as_view::<i64>()
    }

    /// An f32 view over the remaining range.
    #[must_use]
    pub fn as_f32_buffer(&self) -> F32Buffer {
        self.as_view::<f32>()
    }

    /// An f64 view over the remaining range.
    #[must_use]
    pub fn as_f64_buffer(&self) -> F64Buffer {
        self.as_view::<f64>()
    }

    // === Internal ===

    /// View covering `[position, limit)`: capacity = remaining / WIDTH
    /// (trailing partial-width bytes are unreachable through the view),
    /// position 0, order and read-only captured from this buffer now.
    fn as_view<E: Element>(&self) -> Buffer<E> {
        let store = match self.backing() {
            Backing::Native(store) => Rc::clone(store),
            _ => unreachable!("byte buffers are always array-backed"),
        };
        let base = self.element_offset() + self.position();
        let capacity = self.remaining() / E::WIDTH;
        Buffer::with_parts(
            Backing::Bytes { store, base },
            0,
            CursorState::new(capacity),
            self.is_read_only(),
            self.order(),
        )
    }

    fn get_scalar<E: Element>(&mut self) -> Result<E> {
        let remaining = self.remaining();
        if remaining < E::WIDTH {
            return Err(BufferError::Underflow {
                needed: E::WIDTH,
                remaining,
            });
        }
        let value = self.read_scalar::<E>(self.position());
        self.cursor_mut().advance(E::WIDTH);
        Ok(value)
    }

    fn get_scalar_at<E: Element>(&self, index: usize) -> Result<E> {
        self.check_window::<E>(index)?;
        Ok(self.read_scalar::<E>(index))
    }

    fn put_scalar<E: Element>(&mut self, value: E) -> Result<&mut Self> {
        if self.is_read_only() {
            return Err(BufferError::ReadOnly);
        }
        let remaining = self.remaining();
        if remaining < E::WIDTH {
            return Err(BufferError::Overflow {
                needed: E::WIDTH,
                remaining,
            });
        }
        self.write_scalar(self.position(), value);
        self.cursor_mut().advance(E::WIDTH);
        Ok(self)
    }

    fn put_scalar_at<E: Element>(&mut self, index: usize, value: E) -> Result<&mut Self> {
        if self.is_read_only() {
            return Err(BufferError::ReadOnly);
        }
        self.check_window::<E>(index)?;
        self.write_scalar(index, value);
        Ok(self)
    }

    fn check_window<E: Element>(&self, index: usize) -> Result<()> {
        let limit = self.limit();
        let in_bounds = index
            .checked_add(E::WIDTH)
            .is_some_and(|end| end <= limit);
        if in_bounds {
            Ok(())
        } else {
            Err(BufferError::OutOfBounds {
                index,
                bound: limit,
            })
        }
    }

    /// Decode an `E` from the `WIDTH` bytes at byte index `at`.
    fn read_scalar<E: Element>(&self, at: usize) -> E {
        let mut window = [0u8; 8];
        let window = &mut window[..E::WIDTH];
        self.backing()
            .copy_out(self.element_offset() + at, window, self.order());
        E::decode(window, self.order())
    }

    /// Encode `value` into the `WIDTH` bytes at byte index `at`.
    fn write_scalar<E: Element>(&mut self, at: usize, value: E) {
        let mut window = [0u8; 8];
        let window = &mut window[..E::WIDTH];
        value.encode(window, self.order());
        self.backing()
            .copy_in(self.element_offset() + at, window, self.order());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::ByteBuffer;

    #[test]
    fn test_big_endian_layout() {
        let mut buf = ByteBuffer::allocate(8);
        buf.put_i32(0x1234_5678).unwrap();
        assert_eq!(buf.position(), 4);
        assert_eq!(buf.to_vec(), vec![0, 0, 0, 0]);
        buf.flip();
        assert_eq!(buf.to_vec(), vec![0x12, 0x34, 0x56, 0x78]);
    }

    #[test]
    fn test_order_applies_to_the_access() {
        let mut buf = ByteBuffer::allocate(8);
        buf.put_i32(0x1234_5678).unwrap();
        buf.set_order(ByteOrder::LittleEndian);
        assert_eq!(buf.get_i32_at(0).unwrap(), 0x7856_3412);
        buf.set_order(ByteOrder::BigEndian);
        assert_eq!(buf.get_i32_at(0).unwrap(), 0x1234_5678);
    }

    #[test]
    fn test_relative_window_checks() {
        let mut buf = ByteBuffer::allocate(6);
        buf.put_i32(1).unwrap();
        assert_eq!(
            buf.put_i32(2).unwrap_err(),
            BufferError::Overflow {
                needed: 4,
                remaining: 2
            }
        );
        buf.flip();
        buf.get_i32().unwrap();
        assert_eq!(
            buf.get_i32().unwrap_err(),
            BufferError::Underflow {
                needed: 4,
                remaining: 0
            }
        );
        // Failed reads leave the position alone.
        assert_eq!(buf.position(), 4);
    }

    #[test]
    fn test_absolute_window_checks() {
        let mut buf = ByteBuffer::allocate(8);
        buf.put_i64_at(0, -1).unwrap();
        assert_eq!(buf.position(), 0);
        assert!(buf.get_i64_at(1).unwrap_err().is_out_of_bounds());
        assert!(buf.get_i16_at(7).unwrap_err().is_out_of_bounds());
        assert!(buf.get_i16_at(usize::MAX).unwrap_err().is_out_of_bounds());
        buf.set_limit(4).unwrap();
        assert!(buf.get_i32_at(1).unwrap_err().is_out_of_bounds());
        assert!(buf.get_i32_at(0).is_ok());
    }

    #[test]
    fn test_all_widths_round_trip() {
        for order in [ByteOrder::BigEndian, ByteOrder::LittleEndian] {
            let mut buf = ByteBuffer::allocate(32);
            buf.set_order(order);
            buf.put_i16(-2).unwrap();
            buf.put_u16(0xBEEF).unwrap();
            buf.put_i32(-3).unwrap();
            buf.put_i64(i64::MIN).unwrap();
            buf.put_f32(1.5).unwrap();
            buf.put_f64(-2.25).unwrap();
            buf.flip();
            assert_eq!(buf.get_i16().unwrap(), -2);
            assert_eq!(buf.get_u16().unwrap(), 0xBEEF);
            assert_eq!(buf.get_i32().unwrap(), -3);
            assert_eq!(buf.get_i64().unwrap(), i64::MIN);
            assert_eq!(buf.get_f32().unwrap(), 1.5);
            assert_eq!(buf.get_f64().unwrap(), -2.25);
        }
    }

    #[test]
    fn test_nan_bit_pattern_survives_storage() {
        let odd_nan = f64::from_bits(0x7FF8_0000_0000_4242);
        let mut buf = ByteBuffer::allocate(8);
        buf.put_f64_at(0, odd_nan).unwrap();
        assert_eq!(buf.get_f64_at(0).unwrap().to_bits(), odd_nan.to_bits());
    }

    #[test]
    fn test_read_only_rejects_heterogeneous_puts() {
        let mut frozen = ByteBuffer::allocate(8).as_read_only();
        assert_eq!(frozen.put_i32(1).unwrap_err(), BufferError::ReadOnly);
        assert_eq!(frozen.put_f64_at(0, 1.0).unwrap_err(), BufferError::ReadOnly);
        assert!(frozen.get_i32().is_ok());
    }

    #[test]
    fn test_view_covers_remaining_range() {
        let mut buf = ByteBuffer::allocate(11);
        buf.set_position(1).unwrap();
        let view = buf.as_i32_buffer();
        // 10 remaining bytes hold two whole i32s; the tail is unreachable.
        assert_eq!(view.capacity(), 2);
        assert_eq!(view.limit(), 2);
        assert_eq!(view.position(), 0);
    }

    #[test]
    fn test_view_aliases_byte_storage() {
        let mut buf = ByteBuffer::allocate(8);
        let mut longs = buf.as_i64_buffer();
        longs.put_at(0, 0x0102_0304_0506_0708).unwrap();
        assert_eq!(buf.get_i64_at(0).unwrap(), 0x0102_0304_0506_0708);
        buf.put_at(7, 0xFF).unwrap();
        assert_eq!(longs.get_at(0).unwrap(), 0x0102_0304_0506_07FF);
    }

    #[test]
    fn test_view_captures_order_at_creation() {
        let mut buf = ByteBuffer::allocate(4);
        let view = buf.as_i32_buffer();
        assert_eq!(view.order(), ByteOrder::BigEndian);
        buf.set_order(ByteOrder::LittleEndian);
        // Existing view keeps its captured order; a new one picks up the
        // change.
        assert_eq!(view.order(), ByteOrder::BigEndian);
        assert_eq!(buf.as_i32_buffer().order(), ByteOrder::LittleEndian);
    }

    #[test]
    fn test_view_inherits_read_only() {
        let frozen = ByteBuffer::allocate(8).as_read_only();
        let mut view = frozen.as_f32_buffer();
        assert!(view.is_read_only());
        assert_eq!(view.put(1.0).unwrap_err(), BufferError::ReadOnly);
    }

    #[test]
    fn test_view_of_sliced_buffer() {
        let mut buf = ByteBuffer::wrap(vec![0; 12]);
        buf.set_position(4).unwrap();
        let tail = buf.slice();
        let mut view = tail.as_i32_buffer();
        view.put(0x0A0B_0C0D).unwrap();
        assert_eq!(buf.get_i32_at(4).unwrap(), 0x0A0B_0C0D);
    }

    #[test]
    fn test_u16_view_round_trip_both_orders() {
        let mut buf = ByteBuffer::allocate(4);
        buf.set_order(ByteOrder::LittleEndian);
        let mut chars = buf.as_char_buffer();
        chars.put(0x4142).unwrap();
        assert_eq!(buf.get_at(0).unwrap(), 0x42);
        assert_eq!(buf.get_at(1).unwrap(), 0x41);
    }
}
