//! Flipbuf: fixed-capacity positional buffers with byte-order-aware typed
//! views.
//!
//! # Overview
//!
//! A family of bounded sequence containers (bytes, UTF-16 code units, and
//! the wider numeric types) sharing one cursor protocol:
//!
//! - **capacity** is fixed at construction,
//! - **limit** bounds the accessible window,
//! - **position** is the cursor for relative get/put,
//! - **mark** is an optional bookmark `reset` returns to.
//!
//! Fill a buffer, [`flip`](Buffer::flip) it, drain it, then
//! [`clear`](Buffer::clear) or [`compact`](Buffer::compact) and go again.
//! Every precondition violation is a typed [`BufferError`]; failed
//! operations leave the buffer exactly as it was.
//!
//! # Core Guarantees
//!
//! - **Invariant bounds**: `position <= limit <= capacity` holds after
//!   every operation; a mark never outlives a window that excludes it
//! - **All-or-nothing transfers**: bulk operations validate fully before
//!   mutating anything
//! - **Aliased storage, independent cursors**: duplicates, slices, and
//!   views share memory but never share position/limit/mark
//! - **Order is a property of the access**: bytes written under one order
//!   read back byte-swapped under the other; NaN payloads and every other
//!   bit pattern round-trip exactly
//!
//! # Examples
//!
//! ```
//! use flipbuf::{ByteBuffer, ByteOrder};
//!
//! let mut buf = ByteBuffer::allocate(8);
//! buf.put_i32(0x1234_5678).unwrap();
//! buf.flip();
//!
//! // Reinterpret the same bytes as a typed view.
//! let ints = buf.as_i32_buffer();
//! assert_eq!(ints.get_at(0).unwrap(), 0x1234_5678);
//!
//! // The order applies to the access, not the stored data.
//! buf.set_order(ByteOrder::LittleEndian);
//! assert_eq!(buf.get_i32().unwrap(), 0x7856_3412);
//! ```
//!
//! # Module Structure
//!
//! - [`buffer`]: the buffer family and its element/storage machinery
//! - [`order`]: byte order selection and the pure encode/decode codec
//! - [`error`]: the error taxonomy callers branch on
//!
//! # Concurrency
//!
//! Buffers are single-owner values with no internal synchronization:
//! handles are `!Send` and aliased storage is for one thread. That is the
//! contract, not a limitation to engineer around.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_possible_truncation)]

pub mod buffer;
pub mod error;
pub mod order;

pub use buffer::{
    Buffer, ByteBuffer, CharBuffer, Element, F32Buffer, F64Buffer, I16Buffer, I32Buffer,
    I64Buffer,
};
pub use error::{BufferError, Result};
pub use order::ByteOrder;
