//! The element abstraction behind the buffer family.
//!
//! [`Element`] carries everything the generic buffer machinery needs to
//! stay type-agnostic: the element's encoded width, its byte codec under a
//! [`ByteOrder`], and the comparison/equality/hash policy used by buffer
//! ordering. The policy is where floating-point types diverge from raw IEEE
//! comparison: NaN compares equal to NaN and sorts after every other value,
//! keeping buffer equality and ordering mutually consistent.
//!
//! Implemented for the seven element types of the family: `u8`, `u16`
//! (UTF-16 code units), `i16`, `i32`, `i64`, `f32`, `f64`.

use core::cmp::Ordering;
use core::fmt;

use crate::order::ByteOrder;

/// A fixed-width element storable in a buffer.
///
/// The codec half ([`decode`](Element::decode)/[`encode`](Element::encode))
/// is exercised whenever an element crosses a byte boundary: heterogeneous
/// access on a byte buffer, or any access through a typed view. The policy
/// half drives buffer comparison, equality, and hashing.
pub trait Element: Copy + Default + fmt::Debug + 'static {
    /// Encoded width in bytes.
    const WIDTH: usize;

    /// Decode one element from exactly [`WIDTH`](Element::WIDTH) bytes.
    fn decode(bytes: &[u8], order: ByteOrder) -> Self;

    /// Encode this element into exactly [`WIDTH`](Element::WIDTH) bytes.
    fn encode(self, dst: &mut [u8], order: ByteOrder);

    /// Total order over element values.
    ///
    /// Integers use their natural order. Floats order numerically except
    /// that NaN equals NaN and is greater than everything else, infinities
    /// included.
    fn compare(lhs: Self, rhs: Self) -> Ordering;

    /// Content equality, consistent with [`compare`](Element::compare):
    /// equal exactly when the ordering says `Equal`.
    fn content_eq(lhs: Self, rhs: Self) -> bool;

    /// A hash word such that content-equal elements hash equal.
    ///
    /// Floats canonicalize NaN and signed zero here; the stored bit
    /// pattern is never altered.
    fn hash_word(self) -> u64;
}

impl Element for u8 {
    const WIDTH: usize = 1;

    #[inline]
    fn decode(bytes: &[u8], _order: ByteOrder) -> Self {
        bytes[0]
    }

    #[inline]
    fn encode(self, dst: &mut [u8], _order: ByteOrder) {
        dst[0] = self;
    }

    #[inline]
    fn compare(lhs: Self, rhs: Self) -> Ordering {
        lhs.cmp(&rhs)
    }

    #[inline]
    fn content_eq(lhs: Self, rhs: Self) -> bool {
        lhs == rhs
    }

    #[inline]
    fn hash_word(self) -> u64 {
        u64::from(self)
    }
}

macro_rules! int_element {
    ($ty:ty, $width:expr, $unsigned:ty, $decode:ident, $encode:ident) => {
        #[allow(
            clippy::cast_sign_loss,
            clippy::cast_possible_wrap,
            clippy::unnecessary_cast
        )]
        impl Element for $ty {
            const WIDTH: usize = $width;

            #[inline]
            fn decode(bytes: &[u8], order: ByteOrder) -> Self {
                let mut window = [0u8; $width];
                window.copy_from_slice(bytes);
                order.$decode(window) as $ty
            }

            #[inline]
            fn encode(self, dst: &mut [u8], order: ByteOrder) {
                dst.copy_from_slice(&order.$encode(self as $unsigned));
            }

            #[inline]
            fn compare(lhs: Self, rhs: Self) -> Ordering {
                lhs.cmp(&rhs)
            }

            #[inline]
            fn content_eq(lhs: Self, rhs: Self) -> bool {
                lhs == rhs
            }

            #[inline]
            #[allow(clippy::cast_sign_loss)]
            fn hash_word(self) -> u64 {
                self as u64
            }
        }
    };
}

int_element!(u16, 2, u16, decode_u16, encode_u16);
int_element!(i16, 2, u16, decode_u16, encode_u16);
int_element!(i32, 4, u32, decode_u32, encode_u32);
int_element!(i64, 8, u64, decode_u64, encode_u64);

macro_rules! float_element {
    ($ty:ty, $width:expr, $decode:ident, $encode:ident, $canonical_nan:expr) => {
        impl Element for $ty {
            const WIDTH: usize = $width;

            #[inline]
            fn decode(bytes: &[u8], order: ByteOrder) -> Self {
                let mut window = [0u8; $width];
                window.copy_from_slice(bytes);
                order.$decode(window)
            }

            #[inline]
            fn encode(self, dst: &mut [u8], order: ByteOrder) {
                dst.copy_from_slice(&order.$encode(self));
            }

            fn compare(lhs: Self, rhs: Self) -> Ordering {
                match (lhs.is_nan(), rhs.is_nan()) {
                    (true, true) => Ordering::Equal,
                    (true, false) => Ordering::Greater,
                    (false, true) => Ordering::Less,
                    (false, false) => lhs.partial_cmp(&rhs).unwrap_or(Ordering::Equal),
                }
            }

            #[inline]
            fn content_eq(lhs: Self, rhs: Self) -> bool {
                lhs == rhs || (lhs.is_nan() && rhs.is_nan())
            }

            fn hash_word(self) -> u64 {
                if self.is_nan() {
                    $canonical_nan
                } else if self == 0.0 {
                    // +0.0 and -0.0 are content-equal, so they must hash equal.
                    0
                } else {
                    u64::from(self.to_bits())
                }
            }
        }
    };
}

float_element!(f32, 4, decode_f32, encode_f32, 0x7FC0_0000u64);
float_element!(f64, 8, decode_f64, encode_f64, 0x7FF8_0000_0000_0000u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widths() {
        assert_eq!(<u8 as Element>::WIDTH, 1);
        assert_eq!(<u16 as Element>::WIDTH, 2);
        assert_eq!(<i16 as Element>::WIDTH, 2);
        assert_eq!(<i32 as Element>::WIDTH, 4);
        assert_eq!(<i64 as Element>::WIDTH, 8);
        assert_eq!(<f32 as Element>::WIDTH, 4);
        assert_eq!(<f64 as Element>::WIDTH, 8);
    }

    #[test]
    fn test_int_codec_round_trip() {
        let mut window = [0u8; 4];
        for order in [ByteOrder::BigEndian, ByteOrder::LittleEndian] {
            for value in [i32::MIN, -1, 0, 1, 0x1234_5678, i32::MAX] {
                value.encode(&mut window, order);
                assert_eq!(i32::decode(&window, order), value);
            }
        }
    }

    #[test]
    fn test_int_codec_layout() {
        let mut window = [0u8; 4];
        0x1234_5678i32.encode(&mut window, ByteOrder::BigEndian);
        assert_eq!(window, [0x12, 0x34, 0x56, 0x78]);
        0x1234_5678i32.encode(&mut window, ByteOrder::LittleEndian);
        assert_eq!(window, [0x78, 0x56, 0x34, 0x12]);
    }

    #[test]
    fn test_float_nan_ordering() {
        assert_eq!(f64::compare(f64::NAN, f64::NAN), Ordering::Equal);
        assert_eq!(f64::compare(f64::NAN, f64::INFINITY), Ordering::Greater);
        assert_eq!(
            f64::compare(f64::NEG_INFINITY, f64::NAN),
            Ordering::Less
        );
        assert_eq!(f64::compare(1.0, 2.0), Ordering::Less);
        assert_eq!(f64::compare(2.0, 1.0), Ordering::Greater);
        assert_eq!(f64::compare(1.5, 1.5), Ordering::Equal);
    }

    #[test]
    fn test_float_content_eq() {
        assert!(f32::content_eq(f32::NAN, f32::NAN));
        assert!(f32::content_eq(0.0, -0.0));
        assert!(!f32::content_eq(f32::NAN, 0.0));
        assert!(!f32::content_eq(1.0, 2.0));
    }

    #[test]
    fn test_eq_consistent_with_ordering() {
        let samples = [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -0.0, 0.0, 1.5];
        for &a in &samples {
            for &b in &samples {
                assert_eq!(
                    f64::content_eq(a, b),
                    f64::compare(a, b) == Ordering::Equal,
                    "inconsistent for {a:?} vs {b:?}"
                );
            }
        }
    }

    #[test]
    fn test_float_hash_canonicalization() {
        let payload_nan = f64::from_bits(0x7FF8_0000_0000_1234);
        assert_eq!(f64::hash_word(f64::NAN), f64::hash_word(payload_nan));
        assert_eq!(f64::hash_word(0.0), f64::hash_word(-0.0));
        assert_ne!(f64::hash_word(1.0), f64::hash_word(2.0));
    }

    #[test]
    fn test_float_codec_preserves_nan_payload() {
        let mut window = [0u8; 8];
        let odd_nan = f64::from_bits(0x7FF8_0000_0000_1234);
        for order in [ByteOrder::BigEndian, ByteOrder::LittleEndian] {
            odd_nan.encode(&mut window, order);
            let back = f64::decode(&window, order);
            assert_eq!(back.to_bits(), odd_nan.to_bits());
        }
    }
}
