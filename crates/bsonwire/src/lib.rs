//! Primitive codecs for the BSON wire format.
//!
//! This crate is the byte-level layer a BSON document reader or writer is
//! built on:
//!
//! - [`Cursor`] reads fixed-width little-endian numbers, booleans, cstrings
//!   and length-prefixed strings from a borrowed span. Every read is
//!   all-or-nothing: it either consumes exactly the bytes of the value or
//!   fails with a [`DecodeError`] and leaves the cursor untouched.
//! - [`Writer`] appends the same encodings to a caller-sized buffer.
//! - [`index_to_key`], [`digits`], [`object_key_size`] and
//!   [`array_key_size`] produce and size the synthetic keys under which array
//!   elements are stored.
//! - [`layout`] holds the sizes and type tags both sides must agree on.
//!
//! Documents, arrays and element-type dispatch are left to the layer above.
//!
//! ```rust
//! use bsonwire::{Cursor, Writer, array_key_size, layout::ELEMENT_OVERHEAD};
//!
//! let mut buf = [0u8; 32];
//! let mut w = Writer::new(&mut buf);
//! w.write_index_key(3);
//! w.write_string(b"hello");
//! let written = w.into_written();
//! assert_eq!(written.len(), array_key_size(3) - ELEMENT_OVERHEAD + 10);
//!
//! let mut c = Cursor::new(written);
//! assert_eq!(c.read_cstring().unwrap().value, "3");
//! let s = c.read_string().unwrap();
//! assert_eq!(s.value, "hello");
//! assert_eq!(s.len, 10);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod cursor;
mod error;
mod key;
pub mod layout;
mod numeric;
mod options;
mod string;
mod trace;
mod writer;


pub use bstr::{BStr, BString};
pub use cursor::{Cursor, Decoded};
pub use error::{DecodeError, DecodeErrorKind, EncodeError, UnknownElementType};
pub use key::{array_key_size, digits, index_to_key, object_key_size};
pub use layout::ElementType;
pub use options::ReaderOptions;
pub use string::{bytes_to_bson_text, bytes_to_text, string_size, text_to_cstring};
pub use writer::Writer;
