//! The fixed-capacity positional buffer family.
//!
//! # Overview
//!
//! This module provides:
//! - [`Buffer`]: the generic fixed-capacity buffer with the shared
//!   cursor/limit/mark protocol
//! - [`ByteBuffer`]: bytes, plus heterogeneous numeric access and typed
//!   views
//! - [`CharBuffer`]: UTF-16 code units, plus string entry points
//! - [`I16Buffer`], [`I32Buffer`], [`I64Buffer`], [`F32Buffer`],
//!   [`F64Buffer`]: the wider numeric families
//!
//! # Design Notes
//!
//! One generic implementation carries the whole contract; element types
//! plug in their width, codec, and comparison policy through
//! [`Element`]. Storage behind a buffer is one of a closed set of modes
//! (native array, byte-store window, frozen) so duplicates, slices, and
//! views all alias the same memory while owning their cursor state.

pub mod byte;
pub mod char;
pub(crate) mod cursor;
pub mod element;
pub(crate) mod storage;
pub mod typed;

pub use element::Element;
pub use typed::Buffer;

/// Byte buffer: `Buffer<u8>` with heterogeneous numeric access and typed
/// views.
pub type ByteBuffer = Buffer<u8>;

/// Char buffer: `Buffer<u16>` over raw UTF-16 code units.
pub type CharBuffer = Buffer<u16>;

/// 16-bit signed integer buffer.
pub type I16Buffer = Buffer<i16>;

/// 32-bit signed integer buffer.
pub type I32Buffer = Buffer<i32>;

/// 64-bit signed integer buffer.
pub type I64Buffer = Buffer<i64>;

/// 32-bit IEEE float buffer.
pub type F32Buffer = Buffer<f32>;

/// 64-bit IEEE float buffer.
pub type F64Buffer = Buffer<f64>;
