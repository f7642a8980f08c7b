#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use utfspan::{
    ByteOrder, Text,
    backend::{Backend, Bulk, Manual},
};

#[derive(Debug, Arbitrary)]
struct Input {
    /// Well-formed text: both paths must agree on it.
    text: String,
    /// Arbitrary bytes: the manual walkers must not panic on them.
    raw: Vec<u8>,
    big_endian: bool,
}

fn run(backend: &dyn Backend, decode: impl FnOnce(&dyn Backend, &mut Text)) -> Text {
    let mut out = Text::new();
    decode(backend, &mut out);
    out
}

fn check(input: Input) {
    let order = if input.big_endian {
        ByteOrder::Big
    } else {
        ByteOrder::Little
    };
    let expected: Vec<u16> = input.text.encode_utf16().collect();

    let utf8 = input.text.as_bytes();
    for backend in [&Manual as &dyn Backend, &Bulk] {
        let out = run(backend, |b, out| b.decode_utf8(utf8, out));
        assert_eq!(out.as_units(), expected.as_slice(), "{} utf8", backend.name());
    }

    let utf16: Vec<u8> = expected
        .iter()
        .flat_map(|&u| match order {
            ByteOrder::Little => u.to_le_bytes(),
            ByteOrder::Big => u.to_be_bytes(),
        })
        .collect();
    for backend in [&Manual as &dyn Backend, &Bulk] {
        let out = run(backend, |b, out| b.decode_utf16(&utf16, order, out));
        assert_eq!(out.as_units(), expected.as_slice(), "{} utf16", backend.name());
    }

    // Malformed input: any output is acceptable, panics are not.
    let raw = input.raw.as_slice();
    let _ = run(&Manual, |b, out| b.decode_utf8(raw, out));
    let _ = run(&Manual, |b, out| b.decode_utf16(&raw[..raw.len() & !1], order, out));
    let whole = raw.len() & !3;
    let _ = utfspan::decode_utf32(raw, 0, whole);
}

fuzz_target!(|input: Input| check(input));
