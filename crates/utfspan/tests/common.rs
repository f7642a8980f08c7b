#![allow(missing_docs, dead_code)]

/// Snowman, euro sign and a supplementary Han character, twice around a dash.
pub const WIDE: &str = "abc\u{2603}\u{20AC}\u{2007C}123 --- abc\u{2603}\u{20AC}\u{2007C}123";

/// Address the fixture strings are written at. Keeps clear of null.
pub const BASE: usize = 64;

/// A memory image with `payload` written at [`BASE`], followed by a NUL
/// terminator and some trailing garbage.
pub fn memory_with(payload: &[u8], terminator: usize) -> Vec<u8> {
    let mut memory = vec![0u8; BASE];
    memory.extend_from_slice(payload);
    memory.extend(std::iter::repeat_n(0u8, terminator));
    memory.extend_from_slice(&[0xFF; 16]);
    memory
}

pub fn utf8(s: &str) -> Vec<u8> {
    s.as_bytes().to_vec()
}

pub fn utf16le(s: &str) -> Vec<u8> {
    s.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

pub fn utf32le(s: &str) -> Vec<u8> {
    s.chars().flat_map(|c| u32::from(c).to_le_bytes()).collect()
}
