//! Little-endian fixed-width codecs.
//!
//! These helpers do no bounds checking of their own. Decoders take an array of
//! exactly the right width, so the only way to reach them is through a
//! [`Cursor`](crate::Cursor) read that has already checked the span, or a
//! [`Writer`](crate::Writer) that slices the destination first.

use crate::layout::{SIZE_DOUBLE, SIZE_INT32, SIZE_INT64};

#[inline]
pub(crate) fn encode_i32(value: i32) -> [u8; SIZE_INT32] {
    value.to_le_bytes()
}

#[inline]
pub(crate) fn encode_i64(value: i64) -> [u8; SIZE_INT64] {
    value.to_le_bytes()
}

/// Bit pattern is copied as-is, so NaN payloads and signed zeros survive.
#[inline]
pub(crate) fn encode_f64(value: f64) -> [u8; SIZE_DOUBLE] {
    value.to_bits().to_le_bytes()
}

#[inline]
pub(crate) fn decode_i32(bytes: [u8; SIZE_INT32]) -> i32 {
    i32::from_le_bytes(bytes)
}

#[inline]
pub(crate) fn decode_i64(bytes: [u8; SIZE_INT64]) -> i64 {
    i64::from_le_bytes(bytes)
}

#[inline]
pub(crate) fn decode_f64(bytes: [u8; SIZE_DOUBLE]) -> f64 {
    f64::from_bits(u64::from_le_bytes(bytes))
}
