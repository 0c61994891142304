//! Array index keys and element key sizing.
//!
//! Arrays are stored as documents whose keys are the decimal indices `"0"`,
//! `"1"`, ... The sizing functions let a writer compute the exact encoded
//! size of a document before allocating for it.

use alloc::ffi::CString;

use crate::layout::ELEMENT_OVERHEAD;

/// Digits in `usize::MAX` on 64-bit targets.
pub(crate) const MAX_INDEX_DIGITS: usize = 20;

/// Formats `index` in decimal into the tail of `buf`, returning the digits.
pub(crate) fn format_index(mut index: usize, buf: &mut [u8; MAX_INDEX_DIGITS]) -> &[u8] {
    let mut start = MAX_INDEX_DIGITS;
    loop {
        start -= 1;
        #[allow(clippy::cast_possible_truncation)]
        let digit = (index % 10) as u8;
        buf[start] = b'0' + digit;
        index /= 10;
        if index == 0 {
            break;
        }
    }
    &buf[start..]
}

/// The key of array element `index`: its decimal digits as a cstring.
///
/// ```rust
/// assert_eq!(bsonwire::index_to_key(42).as_bytes_with_nul(), b"42\0");
/// ```
#[must_use]
pub fn index_to_key(index: usize) -> CString {
    let mut buf = [0u8; MAX_INDEX_DIGITS];
    let digits = format_index(index, &mut buf);
    // SAFETY: ASCII digits are never zero bytes.
    unsafe { CString::from_vec_unchecked(digits.to_vec()) }
}

/// Number of decimal digits needed to print `value`; `0` takes one.
#[must_use]
pub fn digits(value: usize) -> usize {
    value.checked_ilog10().map_or(1, |log| log as usize + 1)
}

/// Encoded size of an element's tag and key: tag byte, key bytes,
/// terminator.
///
/// `key` is the key text without its terminator.
#[must_use]
pub fn object_key_size(key: impl AsRef<[u8]>) -> usize {
    ELEMENT_OVERHEAD + key.as_ref().len() + 1
}

/// Encoded size of the tag and key of array element `index`.
///
/// Always equal to `object_key_size(index_to_key(index).as_bytes())`, without
/// building the key.
#[must_use]
pub fn array_key_size(index: usize) -> usize {
    ELEMENT_OVERHEAD + digits(index) + 1
}
