#![allow(missing_docs, dead_code)]

use std::fmt::Write as _;

use bsonwire::{
    Cursor, DecodeError, ElementType, ReaderOptions, Writer, array_key_size,
    layout::{
        DOCUMENT_END, OBJECT_OVERHEAD, SIZE_BOOLEAN, SIZE_DOUBLE, SIZE_INT32, SIZE_INT64,
    },
    object_key_size, string_size,
};

/// `{"name": "bson", "n": 7, "big": -1i64, "pi": 1.5, "ok": true, "0": "a\0b"}`
pub fn sample_document() -> Vec<u8> {
    let size = OBJECT_OVERHEAD
        + object_key_size("name")
        + string_size(4)
        + object_key_size("n")
        + SIZE_INT32
        + object_key_size("big")
        + SIZE_INT64
        + object_key_size("pi")
        + SIZE_DOUBLE
        + object_key_size("ok")
        + SIZE_BOOLEAN
        + array_key_size(0)
        + string_size(3);

    let mut buf = vec![0u8; size];
    let mut w = Writer::new(&mut buf);
    w.write_i32(i32::try_from(size).unwrap());
    w.write_u8(ElementType::String.into());
    w.write_cstr(c"name");
    w.write_string(b"bson");
    w.write_u8(ElementType::Int32.into());
    w.write_cstr(c"n");
    w.write_i32(7);
    w.write_u8(ElementType::Int64.into());
    w.write_cstr(c"big");
    w.write_i64(-1);
    w.write_u8(ElementType::Double.into());
    w.write_cstr(c"pi");
    w.write_f64(1.5);
    w.write_u8(ElementType::Boolean.into());
    w.write_cstr(c"ok");
    w.write_bool(true);
    w.write_u8(ElementType::String.into());
    w.write_index_key(0);
    w.write_string(b"a\0b");
    w.write_u8(DOCUMENT_END);
    assert_eq!(w.remaining(), 0, "size computation disagrees with writer");
    buf
}

fn read_element(c: &mut Cursor<'_>, out: &mut String) -> Result<bool, DecodeError> {
    let start = c.position();
    let tag = c.read_u8()?;
    if tag.value == DOCUMENT_END {
        writeln!(out, "{start:03} end").unwrap();
        return Ok(false);
    }
    let Ok(ty) = ElementType::try_from(tag.value) else {
        writeln!(out, "{start:03} unknown tag {:#04x}", tag.value).unwrap();
        return Ok(false);
    };
    let key = c.read_cstr()?;
    let (value, len) = match ty {
        ElementType::Int32 => c.read_i32().map(|d| (d.value.to_string(), d.len))?,
        ElementType::Int64 => c.read_i64().map(|d| (d.value.to_string(), d.len))?,
        ElementType::Double => c.read_f64().map(|d| (d.value.to_string(), d.len))?,
        ElementType::Boolean => c.read_bool().map(|d| (d.value.to_string(), d.len))?,
        ElementType::String => c.read_str().map(|d| (format!("{:?}", d.value), d.len))?,
        other => {
            writeln!(out, "{start:03} unsupported {other:?}").unwrap();
            return Ok(false);
        }
    };
    let total = tag.len + key.len + len;
    writeln!(out, "{start:03} {ty:?} {:?} = {value} ({total} bytes)", key.value).unwrap();
    Ok(true)
}

/// Reads a flat document the way the document layer would, one line per
/// element, stopping at the first error.
pub fn render_trace(data: &[u8], options: ReaderOptions) -> String {
    let mut c = Cursor::with_options(data, options);
    let mut out = String::new();
    let result = c.read_i32().and_then(|len| {
        writeln!(out, "000 length = {}", len.value).unwrap();
        while read_element(&mut c, &mut out)? {}
        Ok(())
    });
    if let Err(err) = result {
        writeln!(out, "error: {err}").unwrap();
        writeln!(out, "remaining: {}", c.remaining()).unwrap();
    }
    out
}
