//! Sizes and tags fixed by the BSON wire format.
//!
//! The document layer that sits on top of this crate uses these to pre-size
//! output buffers and to recognise element tags; keeping them here means both
//! sides agree on the layout.

use crate::error::UnknownElementType;

/// Length prefix (4) plus trailing [`DOCUMENT_END`] (1) of an embedded document.
pub const OBJECT_OVERHEAD: usize = 5;
/// Same framing as [`OBJECT_OVERHEAD`]; arrays are documents with index keys.
pub const ARRAY_OVERHEAD: usize = 5;
/// The one-byte type tag in front of every element.
pub const ELEMENT_OVERHEAD: usize = 1;
/// Length prefix (4) plus terminator (1) of a length-prefixed string.
pub const STRING_OVERHEAD: usize = 5;

/// Encoded width of an `int32`.
pub const SIZE_INT32: usize = 4;
/// Encoded width of an `int64`.
pub const SIZE_INT64: usize = 8;
/// Encoded width of a `double`.
pub const SIZE_DOUBLE: usize = 8;
/// Encoded width of a boolean.
pub const SIZE_BOOLEAN: usize = 1;

/// Final byte of every document and array.
pub const DOCUMENT_END: u8 = 0x00;

/// Wire byte for `false`.
pub const BOOLEAN_FALSE: u8 = 0x00;
/// Wire byte for `true`.
pub const BOOLEAN_TRUE: u8 = 0x01;

/// Element type tags.
///
/// Only the numeric, string, boolean and container tags are produced by the
/// layers built on this crate; the rest are listed so that a reader can name
/// what it is rejecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ElementType {
    /// 64-bit IEEE-754 float.
    Double = 0x01,
    /// Length-prefixed UTF-8 string.
    String = 0x02,
    /// Embedded document.
    Document = 0x03,
    /// Embedded array.
    Array = 0x04,
    /// Binary data.
    Binary = 0x05,
    /// Deprecated.
    Undefined = 0x06,
    /// 12-byte object id.
    ObjectId = 0x07,
    /// One-byte boolean.
    Boolean = 0x08,
    /// UTC milliseconds since the epoch.
    DateTime = 0x09,
    /// Null value.
    Null = 0x0A,
    /// Regular expression.
    Regex = 0x0B,
    /// Deprecated.
    DbPointer = 0x0C,
    /// JavaScript code.
    JavaScriptCode = 0x0D,
    /// Deprecated.
    Symbol = 0x0E,
    /// JavaScript code with scope.
    JavaScriptCodeWithScope = 0x0F,
    /// 32-bit integer.
    Int32 = 0x10,
    /// Internal replication timestamp.
    Timestamp = 0x11,
    /// 64-bit integer.
    Int64 = 0x12,
    /// 128-bit decimal float.
    Decimal128 = 0x13,
    /// Compares below every other value.
    MinKey = 0xFF,
    /// Compares above every other value.
    MaxKey = 0x7F,
}

impl ElementType {
    /// Encoded width of the value for fixed-width types, `None` otherwise.
    #[must_use]
    pub fn fixed_size(self) -> Option<usize> {
        match self {
            Self::Double => Some(SIZE_DOUBLE),
            Self::Int32 => Some(SIZE_INT32),
            Self::Int64 => Some(SIZE_INT64),
            Self::Boolean => Some(SIZE_BOOLEAN),
            _ => None,
        }
    }
}

impl From<ElementType> for u8 {
    fn from(tag: ElementType) -> u8 {
        tag as u8
    }
}

impl TryFrom<u8> for ElementType {
    type Error = UnknownElementType;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Ok(match tag {
            0x01 => Self::Double,
            0x02 => Self::String,
            0x03 => Self::Document,
            0x04 => Self::Array,
            0x05 => Self::Binary,
            0x06 => Self::Undefined,
            0x07 => Self::ObjectId,
            0x08 => Self::Boolean,
            0x09 => Self::DateTime,
            0x0A => Self::Null,
            0x0B => Self::Regex,
            0x0C => Self::DbPointer,
            0x0D => Self::JavaScriptCode,
            0x0E => Self::Symbol,
            0x0F => Self::JavaScriptCodeWithScope,
            0x10 => Self::Int32,
            0x11 => Self::Timestamp,
            0x12 => Self::Int64,
            0x13 => Self::Decimal128,
            0xFF => Self::MinKey,
            0x7F => Self::MaxKey,
            other => return Err(UnknownElementType(other)),
        })
    }
}
