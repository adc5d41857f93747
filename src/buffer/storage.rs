//! Backing storage behind a buffer.
//!
//! A buffer either owns a native array of its own element type, aliases a
//! byte store through the codec (view buffers), or holds frozen storage
//! with no accessible array (string-wrapped char buffers). The set is
//! closed; all element traffic funnels through this enum so the buffer
//! machinery above stays storage-agnostic.
//!
//! Sharing is by `Rc`: duplicates, slices, and views clone the handle and
//! see each other's writes. `RefCell` scopes each access; bulk operations
//! take a single borrow for the whole transfer.

use std::cell::RefCell;
use std::rc::Rc;

use crate::buffer::element::Element;
use crate::order::ByteOrder;

/// Storage modes behind a buffer.
#[derive(Debug, Clone)]
pub(crate) enum Backing<T> {
    /// Array-backed storage of the buffer's own element type.
    Native(Rc<RefCell<Vec<T>>>),
    /// A typed window over a byte store. Element `i` of a buffer with
    /// element offset `off` occupies bytes
    /// `base + (off + i) * WIDTH .. + WIDTH`.
    Bytes {
        /// The byte store shared with the originating byte buffer.
        store: Rc<RefCell<Vec<u8>>>,
        /// Byte offset of the view's element 0 within the store.
        base: usize,
    },
    /// Immutable storage with no accessible backing array.
    Frozen(Rc<[T]>),
}

impl<T: Element> Backing<T> {
    /// Fresh zero-filled native storage.
    pub(crate) fn allocate(capacity: usize) -> Self {
        Backing::Native(Rc::new(RefCell::new(vec![T::default(); capacity])))
    }

    /// Native storage taking ownership of `elements`.
    pub(crate) fn from_vec(elements: Vec<T>) -> Self {
        Backing::Native(Rc::new(RefCell::new(elements)))
    }

    /// Read the element at `index` (element units, offset already applied).
    pub(crate) fn get(&self, index: usize, order: ByteOrder) -> T {
        match self {
            Backing::Native(store) => store.borrow()[index],
            Backing::Bytes { store, base } => {
                let bytes = store.borrow();
                let at = base + index * T::WIDTH;
                T::decode(&bytes[at..at + T::WIDTH], order)
            }
            Backing::Frozen(store) => store[index],
        }
    }

    /// Write the element at `index`. Never called on frozen storage; every
    /// mutation path checks the read-only flag first.
    pub(crate) fn set(&self, index: usize, value: T, order: ByteOrder) {
        match self {
            Backing::Native(store) => store.borrow_mut()[index] = value,
            Backing::Bytes { store, base } => {
                let mut bytes = store.borrow_mut();
                let at = base + index * T::WIDTH;
                value.encode(&mut bytes[at..at + T::WIDTH], order);
            }
            Backing::Frozen(_) => unreachable!("frozen storage is never writable"),
        }
    }

    /// Copy `dst.len()` elements starting at `start` into `dst` under one
    /// borrow.
    pub(crate) fn copy_out(&self, start: usize, dst: &mut [T], order: ByteOrder) {
        match self {
            Backing::Native(store) => {
                dst.copy_from_slice(&store.borrow()[start..start + dst.len()]);
            }
            Backing::Bytes { store, base } => {
                let bytes = store.borrow();
                for (i, slot) in dst.iter_mut().enumerate() {
                    let at = base + (start + i) * T::WIDTH;
                    *slot = T::decode(&bytes[at..at + T::WIDTH], order);
                }
            }
            Backing::Frozen(store) => {
                dst.copy_from_slice(&store[start..start + dst.len()]);
            }
        }
    }

    /// Copy `src` into storage starting at `start` under one borrow.
    pub(crate) fn copy_in(&self, start: usize, src: &[T], order: ByteOrder) {
        match self {
            Backing::Native(store) => {
                store.borrow_mut()[start..start + src.len()].copy_from_slice(src);
            }
            Backing::Bytes { store, base } => {
                let mut bytes = store.borrow_mut();
                for (i, value) in src.iter().enumerate() {
                    let at = base + (start + i) * T::WIDTH;
                    value.encode(&mut bytes[at..at + T::WIDTH], order);
                }
            }
            Backing::Frozen(_) => unreachable!("frozen storage is never writable"),
        }
    }

    /// Move elements `[offset + position, offset + limit)` down to
    /// `offset`, element-intact regardless of order (raw storage move).
    pub(crate) fn shift_to_front(&self, offset: usize, position: usize, limit: usize) {
        match self {
            Backing::Native(store) => {
                store
                    .borrow_mut()
                    .copy_within(offset + position..offset + limit, offset);
            }
            Backing::Bytes { store, base } => {
                let from = base + (offset + position) * T::WIDTH;
                let to = base + (offset + limit) * T::WIDTH;
                store
                    .borrow_mut()
                    .copy_within(from..to, base + offset * T::WIDTH);
            }
            Backing::Frozen(_) => unreachable!("frozen storage is never writable"),
        }
    }

    /// True when both backings alias the same underlying store.
    pub(crate) fn aliases(&self, other: &Self) -> bool {
        match (self, other) {
            (Backing::Native(a), Backing::Native(b)) => Rc::ptr_eq(a, b),
            (Backing::Bytes { store: a, .. }, Backing::Bytes { store: b, .. }) => {
                Rc::ptr_eq(a, b)
            }
            (Backing::Frozen(a), Backing::Frozen(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// True for frozen (arrayless, immutable) storage.
    pub(crate) const fn is_frozen(&self) -> bool {
        matches!(self, Backing::Frozen(_))
    }
}
