use encoding_rs::{CoderResult, UTF_16BE, UTF_16LE};

use crate::{
    ByteOrder, Text,
    backend::{Backend, Manual},
};

/// Delegates whole spans to `encoding_rs`.
///
/// Malformed sequences and unpaired surrogates become U+FFFD. Byte order
/// marks are kept as ordinary characters, matching [`Manual`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Bulk;

impl Backend for Bulk {
    fn name(&self) -> &'static str {
        "bulk"
    }

    fn decode_utf8(&self, bytes: &[u8], out: &mut Text) {
        let units = out.units_mut();
        let start = units.len();
        // convert_utf8_to_utf16 needs one unit of room past the source length.
        units.resize(start + bytes.len() + 1, 0);
        let written = encoding_rs::mem::convert_utf8_to_utf16(bytes, &mut units[start..]);
        units.truncate(start + written);
    }

    fn decode_utf16(&self, bytes: &[u8], order: ByteOrder, out: &mut Text) {
        let encoding = match order {
            ByteOrder::Little => UTF_16LE,
            ByteOrder::Big => UTF_16BE,
        };
        let mut decoder = encoding.new_decoder_without_bom_handling();
        let Some(needed) = decoder.max_utf16_buffer_length(bytes.len()) else {
            Manual.decode_utf16(bytes, order, out);
            return;
        };

        let units = out.units_mut();
        let start = units.len();
        units.resize(start + needed, 0);
        let (result, read, written, _) =
            decoder.decode_to_utf16(bytes, &mut units[start..], true);
        debug_assert_eq!(result, CoderResult::InputEmpty);
        debug_assert_eq!(read, bytes.len());
        units.truncate(start + written);
    }
}
