//! Manual UTF-16 decoding.
//!
//! The output is itself UTF-16, so every code unit is copied through as is.
//! Surrogate halves are neither paired nor validated.
use crate::{ByteOrder, Text};

/// Appends the UTF-16 code units in `bytes` to `out`.
///
/// A trailing odd byte is not a whole code unit and is ignored.
pub(crate) fn decode(bytes: &[u8], order: ByteOrder, out: &mut Text) {
    out.extend(
        bytes
            .chunks_exact(2)
            .map(|pair| order.read_u16([pair[0], pair[1]])),
    );
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    fn decoded(bytes: &[u8], order: ByteOrder) -> Text {
        let mut out = Text::new();
        decode(bytes, order, &mut out);
        out
    }

    #[test]
    fn little_endian_units() {
        let bytes: Vec<u8> = "hé😀".encode_utf16().flat_map(u16::to_le_bytes).collect();
        assert_eq!(decoded(&bytes, ByteOrder::Little), "hé😀");
    }

    #[test]
    fn big_endian_units() {
        let bytes: Vec<u8> = "hé😀".encode_utf16().flat_map(u16::to_be_bytes).collect();
        assert_eq!(decoded(&bytes, ByteOrder::Big), "hé😀");
    }

    #[test]
    fn unpaired_surrogates_pass_through() {
        let bytes = [0x00, 0xDC, 0x41, 0x00, 0x3D, 0xD8];
        assert_eq!(
            decoded(&bytes, ByteOrder::Little).as_units(),
            &[0xDC00, 0x0041, 0xD83D]
        );
    }

    #[test]
    fn byte_order_mark_is_kept() {
        let bytes = [0xFF, 0xFE, 0x41, 0x00];
        assert_eq!(
            decoded(&bytes, ByteOrder::Little).as_units(),
            &[0xFEFF, 0x0041]
        );
    }

    #[test]
    fn trailing_odd_byte_is_ignored() {
        assert_eq!(
            decoded(&[0x41, 0x00, 0x42], ByteOrder::Little).as_units(),
            &[0x41]
        );
    }
}
