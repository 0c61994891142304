use core::ffi::CStr;

use crate::{
    key::{MAX_INDEX_DIGITS, format_index},
    layout::{BOOLEAN_FALSE, BOOLEAN_TRUE},
    numeric,
};

/// Appends encoded values to a caller-owned, pre-sized buffer.
///
/// The writer never grows the buffer. Sizing it is the caller's job (the
/// `*_size` functions and [`layout`](crate::layout) constants give exact
/// figures), and writing past the end panics.
///
/// ```rust
/// use bsonwire::Writer;
///
/// let mut buf = [0u8; 9];
/// let mut w = Writer::new(&mut buf);
/// w.write_i32(42);
/// w.write_index_key(7);
/// w.write_bool(true);
/// assert_eq!(w.position(), 7);
/// assert_eq!(w.into_written(), &[42, 0, 0, 0, b'7', 0, 1]);
/// ```
#[derive(Debug)]
pub struct Writer<'a> {
    buf: &'a mut [u8],
    position: usize,
}

impl<'a> Writer<'a> {
    /// Starts writing at the beginning of `buf`.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self::at(buf, 0)
    }

    /// Resumes writing at `position`.
    ///
    /// # Panics
    ///
    /// If `position` is past the end of `buf`.
    pub fn at(buf: &'a mut [u8], position: usize) -> Self {
        assert!(
            position <= buf.len(),
            "position {position} out of bounds for buffer of {} bytes",
            buf.len()
        );
        Self { buf, position }
    }

    /// Bytes written so far, counting from the start of the buffer.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Space left after the current position.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.position
    }

    /// Gives up the writer, returning everything up to the current position.
    #[must_use]
    pub fn into_written(self) -> &'a [u8] {
        let Self { buf, position } = self;
        let (written, _) = buf.split_at_mut(position);
        written
    }

    /// Copies `bytes` verbatim and returns how many were written.
    ///
    /// # Panics
    ///
    /// If `bytes` does not fit in [`remaining`](Self::remaining).
    pub fn write_bytes(&mut self, bytes: &[u8]) -> usize {
        let end = self.position + bytes.len();
        self.buf[self.position..end].copy_from_slice(bytes);
        self.position = end;
        bytes.len()
    }

    /// Writes one byte.
    ///
    /// # Panics
    ///
    /// If the buffer is full.
    pub fn write_u8(&mut self, value: u8) -> usize {
        self.write_bytes(&[value])
    }

    /// Writes `0x01` or `0x00`.
    ///
    /// # Panics
    ///
    /// If the buffer is full.
    pub fn write_bool(&mut self, value: bool) -> usize {
        self.write_u8(if value { BOOLEAN_TRUE } else { BOOLEAN_FALSE })
    }

    /// Writes a little-endian `int32`.
    ///
    /// # Panics
    ///
    /// If fewer than 4 bytes remain.
    pub fn write_i32(&mut self, value: i32) -> usize {
        self.write_bytes(&numeric::encode_i32(value))
    }

    /// Writes a little-endian `int64`.
    ///
    /// # Panics
    ///
    /// If fewer than 8 bytes remain.
    pub fn write_i64(&mut self, value: i64) -> usize {
        self.write_bytes(&numeric::encode_i64(value))
    }

    /// Writes the IEEE-754 bit pattern of `value`, little-endian.
    ///
    /// # Panics
    ///
    /// If fewer than 8 bytes remain.
    pub fn write_f64(&mut self, value: f64) -> usize {
        self.write_bytes(&numeric::encode_f64(value))
    }

    /// Writes a cstring: the content followed by its terminator.
    ///
    /// # Panics
    ///
    /// If the string and terminator do not fit.
    pub fn write_cstr(&mut self, value: &CStr) -> usize {
        self.write_bytes(value.to_bytes_with_nul())
    }

    /// Writes an array index as a cstring key without allocating.
    ///
    /// Writes exactly [`array_key_size(index)`](crate::array_key_size) minus
    /// the element tag byte.
    ///
    /// # Panics
    ///
    /// If the key does not fit.
    pub fn write_index_key(&mut self, index: usize) -> usize {
        let mut digits = [0u8; MAX_INDEX_DIGITS];
        let text = format_index(index, &mut digits);
        self.write_bytes(text) + self.write_u8(0)
    }

    /// Writes a length-prefixed string: `int32` length, content, terminator.
    ///
    /// `content` may contain zero bytes; the length prefix, not the
    /// terminator, delimits it.
    ///
    /// # Panics
    ///
    /// If `content` is too long for an `int32` length prefix, or if the
    /// encoded string does not fit.
    pub fn write_string(&mut self, content: &[u8]) -> usize {
        let Ok(declared) = i32::try_from(content.len() + 1) else {
            panic!(
                "string of {} bytes exceeds the int32 length prefix",
                content.len()
            );
        };
        self.write_i32(declared) + self.write_bytes(content) + self.write_u8(0)
    }
}
