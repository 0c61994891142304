//! cstrings and length-prefixed strings.
//!
//! Two shapes are on the wire:
//!
//! - **cstring**: content bytes then `0x00`. Used for element keys, so the
//!   content cannot contain a zero byte.
//! - **string**: an `int32` length `L` counting the terminator, then `L`
//!   bytes, the last of which is `0x00`. The content may contain zero bytes.
//!
//! Content is treated as UTF-8 but passed through as bytes ([`BString`]);
//! set [`ReaderOptions::validate_utf8`](crate::ReaderOptions::validate_utf8)
//! to have the reader check it.

use alloc::ffi::CString;

use bstr::{BStr, BString, ByteSlice};

use crate::{
    cursor::{Cursor, Decoded},
    error::{DecodeError, DecodeErrorKind, EncodeError},
    layout::{SIZE_INT32, STRING_OVERHEAD},
    trace::trace,
};

impl<'a> Cursor<'a> {
    /// Borrows a cstring's content, consuming it and its terminator.
    ///
    /// # Errors
    ///
    /// [`MissingTerminator`](DecodeErrorKind::MissingTerminator) if no zero
    /// byte remains, [`InvalidUtf8`](DecodeErrorKind::InvalidUtf8) when
    /// validating.
    pub fn read_cstr(&mut self) -> Result<Decoded<&'a BStr>, DecodeError> {
        let Some(end) = self.data.find_byte(0) else {
            return Err(self.reject(DecodeErrorKind::MissingTerminator));
        };
        let content = &self.data[..end];
        self.check_utf8(content)?;
        self.advance(end + 1);
        trace!(len = end, "read cstring");
        Ok(Decoded::new(content.as_bstr(), end + 1))
    }

    /// Reads a cstring into an owned value.
    ///
    /// # Errors
    ///
    /// As [`read_cstr`](Self::read_cstr).
    pub fn read_cstring(&mut self) -> Result<Decoded<BString>, DecodeError> {
        self.read_cstr().map(|d| d.map(BString::from))
    }

    /// Borrows a length-prefixed string's content, consuming the prefix,
    /// content and terminator.
    ///
    /// The content is everything between the prefix and the final byte,
    /// zero bytes included.
    ///
    /// # Errors
    ///
    /// - [`InsufficientData`](DecodeErrorKind::InsufficientData) if the length
    ///   prefix is cut off.
    /// - [`InvalidStringLength`](DecodeErrorKind::InvalidStringLength) if the
    ///   declared length is below 1.
    /// - [`StringTooLong`](DecodeErrorKind::StringTooLong) past
    ///   [`ReaderOptions::max_string_len`](crate::ReaderOptions::max_string_len).
    /// - [`StringLengthExceedsRemaining`](DecodeErrorKind::StringLengthExceedsRemaining)
    ///   if the declared bytes are not all present.
    /// - [`StringNotTerminated`](DecodeErrorKind::StringNotTerminated) if the
    ///   final byte is not zero.
    /// - [`InvalidUtf8`](DecodeErrorKind::InvalidUtf8) when validating.
    pub fn read_str(&mut self) -> Result<Decoded<&'a BStr>, DecodeError> {
        let Some((prefix, body)) = self.data.split_first_chunk::<SIZE_INT32>() else {
            return Err(self.insufficient(SIZE_INT32));
        };
        let declared = i32::from_le_bytes(*prefix);
        let Some(len) = usize::try_from(declared).ok().filter(|&len| len >= 1) else {
            return Err(self.reject(DecodeErrorKind::InvalidStringLength(declared)));
        };
        if len > self.options.max_string_len {
            return Err(self.reject(DecodeErrorKind::StringTooLong {
                declared: len,
                limit: self.options.max_string_len,
            }));
        }
        if len > body.len() {
            return Err(self.reject(DecodeErrorKind::StringLengthExceedsRemaining {
                declared: len,
                remaining: body.len(),
            }));
        }
        let (content, terminator) = body[..len].split_at(len - 1);
        if terminator[0] != 0 {
            return Err(self.reject(DecodeErrorKind::StringNotTerminated(terminator[0])));
        }
        self.check_utf8(content)?;
        let consumed = SIZE_INT32 + len;
        self.advance(consumed);
        trace!(len = content.len(), "read string");
        Ok(Decoded::new(content.as_bstr(), consumed))
    }

    /// Reads a length-prefixed string into an owned value.
    ///
    /// # Errors
    ///
    /// As [`read_str`](Self::read_str).
    pub fn read_string(&mut self) -> Result<Decoded<BString>, DecodeError> {
        self.read_str().map(|d| d.map(BString::from))
    }

    fn check_utf8(&self, content: &[u8]) -> Result<(), DecodeError> {
        if !self.options.validate_utf8 {
            return Ok(());
        }
        core::str::from_utf8(content).map(drop).map_err(|err| {
            self.reject(DecodeErrorKind::InvalidUtf8 {
                valid_up_to: err.valid_up_to(),
            })
        })
    }
}

/// Converts text into a cstring by appending the terminator.
///
/// # Errors
///
/// [`EncodeError::InteriorNul`] if `text` contains a zero byte, which a
/// cstring cannot represent.
///
/// ```rust
/// let key = bsonwire::text_to_cstring("name").unwrap();
/// assert_eq!(key.as_bytes_with_nul(), b"name\0");
/// assert!(bsonwire::text_to_cstring("a\0b").is_err());
/// ```
pub fn text_to_cstring(text: &str) -> Result<CString, EncodeError> {
    CString::new(text).map_err(|err| EncodeError::InteriorNul {
        position: err.nul_position(),
    })
}

/// Text content of a zero-terminated byte array: everything before the first
/// zero byte, or the whole slice if there is none.
#[must_use]
pub fn bytes_to_text(bytes: &[u8]) -> BString {
    let end = bytes.find_byte(0).unwrap_or(bytes.len());
    BString::from(&bytes[..end])
}

/// Text content of exactly `len` bytes, zero bytes included.
///
/// # Panics
///
/// If `len` exceeds `bytes.len()`.
#[must_use]
pub fn bytes_to_bson_text(bytes: &[u8], len: usize) -> BString {
    BString::from(&bytes[..len])
}

/// Encoded size of a length-prefixed string with `content_len` content
/// bytes.
#[must_use]
pub fn string_size(content_len: usize) -> usize {
    STRING_OVERHEAD + content_len
}
