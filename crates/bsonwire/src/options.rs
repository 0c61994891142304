/// Configuration for a [`Cursor`](crate::Cursor).
///
/// The defaults decode exactly what the wire format allows and pass string
/// bytes through untouched.
///
/// # Examples
///
/// ```rust
/// use bsonwire::{Cursor, ReaderOptions};
///
/// let options = ReaderOptions {
///     validate_utf8: true,
///     ..Default::default()
/// };
/// let mut cursor = Cursor::with_options(b"hi\0", options);
/// assert_eq!(cursor.read_cstring().unwrap().value, "hi");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReaderOptions {
    /// Largest declared length (terminator included) accepted for a
    /// length-prefixed string.
    ///
    /// Longer declarations fail with
    /// [`DecodeErrorKind::StringTooLong`](crate::DecodeErrorKind::StringTooLong)
    /// before any bytes are read, which lets a caller bound allocations when
    /// the input is untrusted.
    ///
    /// # Default
    ///
    /// `i32::MAX`, the largest length the wire format can express.
    pub max_string_len: usize,

    /// Whether string readers check that content is UTF-8.
    ///
    /// When `false`, string bytes are passed through as-is and the caller is
    /// trusted to interpret them. When `true`, content that is not UTF-8 is
    /// rejected with
    /// [`DecodeErrorKind::InvalidUtf8`](crate::DecodeErrorKind::InvalidUtf8).
    ///
    /// # Default
    ///
    /// `false`
    pub validate_utf8: bool,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            #[allow(clippy::cast_sign_loss)]
            max_string_len: i32::MAX as usize,
            validate_utf8: false,
        }
    }
}
