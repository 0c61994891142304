#![no_main]

use arbitrary::Arbitrary;
use bsonwire::{Cursor, DecodeError, ReaderOptions};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    Byte,
    Bool,
    Int32,
    Int64,
    Double,
    CStr,
    Str,
    Bytes(u8),
}

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    validate_utf8: bool,
    max_string_len: u16,
    ops: Vec<Op>,
    data: &'a [u8],
}

fn apply(c: &mut Cursor<'_>, op: &Op) -> Result<usize, DecodeError> {
    Ok(match op {
        Op::Byte => c.read_u8()?.len,
        Op::Bool => c.read_bool()?.len,
        Op::Int32 => c.read_i32()?.len,
        Op::Int64 => c.read_i64()?.len,
        Op::Double => c.read_f64()?.len,
        Op::CStr => {
            let d = c.read_cstr()?;
            assert_eq!(d.len, d.value.len() + 1);
            d.len
        }
        Op::Str => {
            let d = c.read_str()?;
            assert_eq!(d.len, d.value.len() + 5);
            d.len
        }
        Op::Bytes(n) => c.read_bytes(usize::from(*n))?.len,
    })
}

fuzz_target!(|input: Input<'_>| {
    let options = ReaderOptions {
        validate_utf8: input.validate_utf8,
        max_string_len: usize::from(input.max_string_len).max(1),
    };
    let mut c = Cursor::with_options(input.data, options);
    for op in &input.ops {
        let before = c.clone();
        match apply(&mut c, op) {
            Ok(n) => {
                assert_eq!(c.position(), before.position() + n);
                assert_eq!(c.as_slice(), &before.as_slice()[n..]);
            }
            Err(err) => {
                assert_eq!(err.offset(), before.position());
                assert_eq!(c.position(), before.position());
                assert_eq!(c.as_slice(), before.as_slice());
            }
        }
    }
});
