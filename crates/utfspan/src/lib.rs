//! Bounded Unicode decoding out of flat, byte-addressable memory.
//!
//! Given a borrowed byte buffer and an explicit `(offset, length)` span, the
//! decoders in this crate materialize the UTF-8, UTF-16 or UTF-32 text stored
//! there as a [`Text`] value (a sequence of UTF-16 code units). Decoding never
//! scans for a terminator and never reads outside the span.
//!
//! Malformed input is decoded on a best-effort basis rather than rejected; the
//! only error a decode can return is a [`SpanError`] for a span that does not
//! fit the buffer.
//!
//! ```rust
//! let memory = [0x68, 0x69, 0xF0, 0x9F, 0x98, 0x80];
//!
//! let hi = utfspan::decode_utf8(&memory, 0, 2).unwrap();
//! assert_eq!(hi, "hi");
//!
//! let grin = utfspan::decode_utf8(&memory, 2, 4).unwrap();
//! assert_eq!(grin.as_units(), &[0xD83D, 0xDE00]);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod backend;
mod decoder;
mod error;
mod heap;
mod options;
mod span;
mod text;
mod utf16;
mod utf32;
mod utf8;

#[cfg(test)]
mod tests;

pub use decoder::SpanDecoder;
pub use error::SpanError;
pub use heap::Heap;
pub use options::{ByteOrder, DecodeOptions, Strategy};
pub use span::Span;
pub use text::Text;

/// Decodes `len` bytes of UTF-8 starting at `offset` with the default
/// [`DecodeOptions`].
///
/// # Errors
///
/// Returns a [`SpanError`] if the span does not lie within `buffer`.
pub fn decode_utf8(buffer: &[u8], offset: usize, len: usize) -> Result<Text, SpanError> {
    SpanDecoder::default().decode_utf8(buffer, Span::new(offset, len))
}

/// Decodes `len` bytes of UTF-16 starting at `offset` with the default
/// [`DecodeOptions`].
///
/// Both `offset` and `len` must be even.
///
/// # Errors
///
/// Returns a [`SpanError`] if the span does not lie within `buffer`.
pub fn decode_utf16(buffer: &[u8], offset: usize, len: usize) -> Result<Text, SpanError> {
    SpanDecoder::default().decode_utf16(buffer, Span::new(offset, len))
}

/// Decodes `len` bytes of UTF-32 starting at `offset` with the default
/// [`DecodeOptions`].
///
/// Both `offset` and `len` must be multiples of four.
///
/// # Errors
///
/// Returns a [`SpanError`] if the span does not lie within `buffer`.
pub fn decode_utf32(buffer: &[u8], offset: usize, len: usize) -> Result<Text, SpanError> {
    SpanDecoder::default().decode_utf32(buffer, Span::new(offset, len))
}
