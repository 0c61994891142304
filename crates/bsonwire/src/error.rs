use thiserror::Error;

/// A failed read from a [`Cursor`](crate::Cursor).
///
/// The cursor that produced this error has not moved: `offset` is the
/// position at which the rejected read started, and re-reading from there
/// with more input is always valid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at offset {offset}")]
pub struct DecodeError {
    pub(crate) kind: DecodeErrorKind,
    pub(crate) offset: usize,
}

impl DecodeError {
    pub(crate) fn new(kind: DecodeErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    /// What went wrong.
    #[must_use]
    pub fn kind(&self) -> &DecodeErrorKind {
        &self.kind
    }

    /// Cursor position at which the failed read began.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// `true` when the input was well-formed so far but ran out.
    ///
    /// Covers short fixed-width reads, a cstring with no terminator yet and a
    /// string whose declared length runs past the span. Streaming callers can
    /// wait for more bytes and retry; every other kind means the input is
    /// corrupt.
    #[must_use]
    pub fn is_insufficient_data(&self) -> bool {
        matches!(
            self.kind,
            DecodeErrorKind::InsufficientData { .. }
                | DecodeErrorKind::MissingTerminator
                | DecodeErrorKind::StringLengthExceedsRemaining { .. }
        )
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// The specific reason a read was rejected.
pub enum DecodeErrorKind {
    /// The read needs more bytes than remain in the span.
    #[error("insufficient data: needed {needed} bytes, {remaining} remaining")]
    InsufficientData {
        /// Bytes the read required.
        needed: usize,
        /// Bytes left in the span.
        remaining: usize,
    },
    /// A cstring scan reached the end of the span without finding `0x00`.
    #[error("missing cstring terminator")]
    MissingTerminator,
    /// A length-prefixed string declared a length below 1.
    #[error("invalid string length {0}")]
    InvalidStringLength(i32),
    /// A length-prefixed string declared more bytes than remain.
    #[error("string length {declared} exceeds {remaining} remaining bytes")]
    StringLengthExceedsRemaining {
        /// Declared length, terminator included.
        declared: usize,
        /// Bytes left after the length prefix.
        remaining: usize,
    },
    /// The final byte of a length-prefixed string was not `0x00`.
    #[error("string not terminated: final byte is {0:#04x}")]
    StringNotTerminated(u8),
    /// A boolean byte other than `0x00` or `0x01`.
    #[error("invalid boolean byte {0:#04x}")]
    InvalidBoolean(u8),
    /// A length-prefixed string is longer than
    /// [`ReaderOptions::max_string_len`](crate::ReaderOptions::max_string_len).
    #[error("string length {declared} exceeds limit {limit}")]
    StringTooLong {
        /// Declared length, terminator included.
        declared: usize,
        /// Configured limit.
        limit: usize,
    },
    /// String content was not UTF-8 while
    /// [`ReaderOptions::validate_utf8`](crate::ReaderOptions::validate_utf8)
    /// was set.
    #[error("invalid utf-8 after {valid_up_to} bytes")]
    InvalidUtf8 {
        /// Length of the valid prefix.
        valid_up_to: usize,
    },
}

/// Text that cannot be written as a cstring.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// cstrings are zero-terminated, so the content cannot hold `0x00`.
    #[error("interior nul byte at position {position}")]
    InteriorNul {
        /// Byte index of the first zero byte.
        position: usize,
    },
}

/// A type tag outside the BSON element type table.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unknown element type {0:#04x}")]
pub struct UnknownElementType(pub u8);
