use crate::{
    error::{DecodeError, DecodeErrorKind},
    layout::{BOOLEAN_FALSE, BOOLEAN_TRUE, SIZE_BOOLEAN, SIZE_DOUBLE, SIZE_INT32, SIZE_INT64},
    numeric,
    options::ReaderOptions,
    trace::debug,
};

/// A value read from a [`Cursor`] together with the number of bytes it took.
///
/// `len` counts every byte the read consumed, including length prefixes and
/// terminators, so callers can sum it to track how much of a document they
/// have seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded<T> {
    /// The decoded value.
    pub value: T,
    /// Bytes consumed from the span.
    pub len: usize,
}

impl<T> Decoded<T> {
    pub(crate) fn new(value: T, len: usize) -> Self {
        Self { value, len }
    }

    /// Transform the value, keeping the consumed length.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Decoded<U> {
        Decoded {
            value: f(self.value),
            len: self.len,
        }
    }
}

/// A forward-only, bounds-checked reader over a borrowed byte span.
///
/// Every read either consumes exactly the bytes of the value it returns or
/// fails and leaves the cursor where it was. There is no partial
/// consumption: a caller that gets
/// [`InsufficientData`](DecodeErrorKind::InsufficientData) can append more
/// input to its buffer, build a new cursor at the same position and retry.
///
/// ```rust
/// use bsonwire::Cursor;
///
/// let mut cursor = Cursor::new(&[0x2A, 0, 0, 0, 0x01]);
/// assert_eq!(cursor.read_i32().unwrap().value, 42);
/// assert!(cursor.read_bool().unwrap().value);
/// assert!(cursor.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    pub(crate) data: &'a [u8],
    pub(crate) position: usize,
    pub(crate) options: ReaderOptions,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor over `data` with default options.
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_options(data, ReaderOptions::default())
    }

    /// Creates a cursor over `data`.
    #[must_use]
    pub fn with_options(data: &'a [u8], options: ReaderOptions) -> Self {
        Self {
            data,
            position: 0,
            options,
        }
    }

    /// Bytes not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len()
    }

    /// Bytes consumed since the cursor was created.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// `true` once every byte has been consumed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The unread part of the span.
    #[must_use]
    pub fn as_slice(&self) -> &'a [u8] {
        self.data
    }

    /// The options this cursor was built with.
    #[must_use]
    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    /// Gives up the cursor, returning the unread part of the span.
    #[must_use]
    pub fn rest(self) -> &'a [u8] {
        self.data
    }

    /// The next byte, without consuming it.
    #[must_use]
    pub fn peek_u8(&self) -> Option<u8> {
        self.data.first().copied()
    }

    /// Builds the error for a read starting at the current position.
    pub(crate) fn reject(&self, kind: DecodeErrorKind) -> DecodeError {
        debug!(offset = self.position, kind = %kind, "rejected read");
        DecodeError::new(kind, self.position)
    }

    pub(crate) fn insufficient(&self, needed: usize) -> DecodeError {
        self.reject(DecodeErrorKind::InsufficientData {
            needed,
            remaining: self.data.len(),
        })
    }

    /// Drops `n` bytes from the front. Caller has checked `n <= remaining`.
    pub(crate) fn advance(&mut self, n: usize) {
        self.data = &self.data[n..];
        self.position += n;
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let Some((head, tail)) = self.data.split_first_chunk::<N>() else {
            return Err(self.insufficient(N));
        };
        let head = *head;
        self.data = tail;
        self.position += N;
        Ok(head)
    }

    /// Borrows the next `n` bytes.
    ///
    /// # Errors
    ///
    /// [`InsufficientData`](DecodeErrorKind::InsufficientData) if fewer than
    /// `n` bytes remain.
    pub fn read_bytes(&mut self, n: usize) -> Result<Decoded<&'a [u8]>, DecodeError> {
        if n > self.data.len() {
            return Err(self.insufficient(n));
        }
        let (head, tail) = self.data.split_at(n);
        self.data = tail;
        self.position += n;
        Ok(Decoded::new(head, n))
    }

    /// Reads a single byte.
    ///
    /// # Errors
    ///
    /// [`InsufficientData`](DecodeErrorKind::InsufficientData) on an empty
    /// span.
    pub fn read_u8(&mut self) -> Result<Decoded<u8>, DecodeError> {
        let [byte] = self.take_array::<1>()?;
        Ok(Decoded::new(byte, 1))
    }

    /// Reads a boolean byte.
    ///
    /// Only `0x00` and `0x01` are booleans; any other byte is rejected rather
    /// than read as `true`.
    ///
    /// # Errors
    ///
    /// [`InsufficientData`](DecodeErrorKind::InsufficientData) on an empty
    /// span, [`InvalidBoolean`](DecodeErrorKind::InvalidBoolean) for any other
    /// byte value.
    pub fn read_bool(&mut self) -> Result<Decoded<bool>, DecodeError> {
        let value = match self.peek_u8() {
            None => return Err(self.insufficient(SIZE_BOOLEAN)),
            Some(BOOLEAN_FALSE) => false,
            Some(BOOLEAN_TRUE) => true,
            Some(other) => return Err(self.reject(DecodeErrorKind::InvalidBoolean(other))),
        };
        self.advance(SIZE_BOOLEAN);
        Ok(Decoded::new(value, SIZE_BOOLEAN))
    }

    /// Reads a little-endian `int32`.
    ///
    /// # Errors
    ///
    /// [`InsufficientData`](DecodeErrorKind::InsufficientData) if fewer than 4
    /// bytes remain.
    pub fn read_i32(&mut self) -> Result<Decoded<i32>, DecodeError> {
        let bytes = self.take_array::<SIZE_INT32>()?;
        Ok(Decoded::new(numeric::decode_i32(bytes), SIZE_INT32))
    }

    /// Reads a little-endian `int64`.
    ///
    /// # Errors
    ///
    /// [`InsufficientData`](DecodeErrorKind::InsufficientData) if fewer than 8
    /// bytes remain.
    pub fn read_i64(&mut self) -> Result<Decoded<i64>, DecodeError> {
        let bytes = self.take_array::<SIZE_INT64>()?;
        Ok(Decoded::new(numeric::decode_i64(bytes), SIZE_INT64))
    }

    /// Reads a little-endian IEEE-754 `double`.
    ///
    /// Every bit pattern is a valid double; NaN payloads come through
    /// unchanged.
    ///
    /// # Errors
    ///
    /// [`InsufficientData`](DecodeErrorKind::InsufficientData) if fewer than 8
    /// bytes remain.
    pub fn read_f64(&mut self) -> Result<Decoded<f64>, DecodeError> {
        let bytes = self.take_array::<SIZE_DOUBLE>()?;
        Ok(Decoded::new(numeric::decode_f64(bytes), SIZE_DOUBLE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_advance_by_width() {
        let data = [
            0x01, // u8
            0x10, 0, 0, 0, // i32
            0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // i64
            0, 0, 0, 0, 0, 0, 0xF0, 0x3F, // f64
        ];
        let mut c = Cursor::new(&data);
        assert_eq!(c.read_u8().unwrap(), Decoded::new(1, 1));
        assert_eq!(c.position(), 1);
        assert_eq!(c.read_i32().unwrap(), Decoded::new(16, 4));
        assert_eq!(c.read_i64().unwrap(), Decoded::new(-2, 8));
        assert_eq!(c.read_f64().unwrap(), Decoded::new(1.0, 8));
        assert_eq!(c.position(), data.len());
        assert!(c.is_empty());
    }

    #[test]
    fn short_read_leaves_cursor_in_place() {
        let data = [1, 2, 3, 4, 5, 6, 7];
        let mut c = Cursor::new(&data);
        c.read_u8().unwrap();
        let err = c.read_i64().unwrap_err();
        assert_eq!(
            err.kind(),
            &DecodeErrorKind::InsufficientData {
                needed: 8,
                remaining: 6
            }
        );
        assert_eq!(err.offset(), 1);
        assert!(err.is_insufficient_data());
        assert_eq!(c.remaining(), 6);
        assert_eq!(c.position(), 1);
        assert_eq!(c.as_slice(), &data[1..]);
    }

    #[test]
    fn read_bytes_borrows_from_span() {
        let data = b"abcdef";
        let mut c = Cursor::new(data);
        let got = c.read_bytes(4).unwrap();
        assert_eq!(got.value, b"abcd");
        assert_eq!(got.len, 4);
        assert!(c.read_bytes(3).is_err());
        assert_eq!(c.read_bytes(0).unwrap().len, 0);
        assert_eq!(c.rest(), b"ef");
    }

    #[test]
    fn bool_rejects_other_bytes() {
        let mut c = Cursor::new(&[0x02, 0x01]);
        let err = c.read_bool().unwrap_err();
        assert_eq!(err.kind(), &DecodeErrorKind::InvalidBoolean(2));
        assert!(!err.is_insufficient_data());
        assert_eq!(c.remaining(), 2);
        assert_eq!(c.peek_u8(), Some(2));
    }

    #[test]
    fn decoded_map_keeps_len() {
        let d = Decoded::new(3_i32, 4).map(i64::from);
        assert_eq!(d, Decoded::new(3_i64, 4));
    }
}
