//! Manual UTF-32 decoding.
//!
//! Each 32-bit unit is taken as a signed code point and split into UTF-16
//! without any range check. Negative units keep their low 16 bits as a single
//! code unit. There is no bulk path for this encoding.
use crate::{ByteOrder, Text};

/// Appends the UTF-32 code points in `bytes` to `out`.
///
/// Trailing bytes that do not make up a whole unit are ignored.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub(crate) fn decode(bytes: &[u8], order: ByteOrder, out: &mut Text) {
    out.units_mut().reserve(bytes.len() / 4);
    for unit in bytes.chunks_exact(4) {
        let value = order.read_u32([unit[0], unit[1], unit[2], unit[3]]) as i32;
        match u32::try_from(value) {
            Ok(code_point) => out.push_code_point(code_point),
            Err(_) => out.push_unit(value as u16),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    fn encode(s: &str) -> Vec<u8> {
        s.chars().flat_map(|c| u32::from(c).to_le_bytes()).collect()
    }

    fn decoded(bytes: &[u8], order: ByteOrder) -> Text {
        let mut out = Text::new();
        decode(bytes, order, &mut out);
        out
    }

    #[test]
    fn single_ascii_unit() {
        assert_eq!(
            decoded(&[0x41, 0, 0, 0], ByteOrder::Little).as_units(),
            &[0x0041]
        );
    }

    #[test]
    fn supplementary_becomes_pair() {
        assert_eq!(
            decoded(&encode("\u{2007C}"), ByteOrder::Little).as_units(),
            &[0xD840, 0xDC7C]
        );
    }

    #[test]
    fn wide_string() {
        let s = "abc\u{2603}\u{20AC}\u{2007C}123";
        assert_eq!(decoded(&encode(s), ByteOrder::Little), s);
    }

    #[test]
    fn big_endian() {
        assert_eq!(
            decoded(&[0x00, 0x01, 0xF6, 0x00], ByteOrder::Big).as_units(),
            &[0xD83D, 0xDE00]
        );
    }

    #[test]
    fn surrogate_values_are_not_rejected() {
        assert_eq!(
            decoded(&[0x00, 0xD8, 0, 0], ByteOrder::Little).as_units(),
            &[0xD800]
        );
    }

    #[test]
    fn out_of_range_values_go_through_the_formula() {
        let out = decoded(&0x0011_0000u32.to_le_bytes(), ByteOrder::Little);
        assert_eq!(out.as_units(), &[0xDC00, 0xDC00]);
    }

    #[test]
    fn negative_values_keep_their_low_bits() {
        let mut bytes = 0xFFFF_FFFFu32.to_le_bytes().to_vec();
        bytes.extend_from_slice(&0x8001_0041u32.to_le_bytes());
        bytes.extend_from_slice(&0x41u32.to_le_bytes());
        let out = decoded(&bytes, ByteOrder::Little);
        assert_eq!(out.as_units(), &[0xFFFF, 0x0041, 0x0041]);
    }

    #[test]
    fn negative_values_big_endian() {
        let out = decoded(&[0xFF, 0xFF, 0xD8, 0x3D], ByteOrder::Big);
        assert_eq!(out.as_units(), &[0xD83D]);
    }

    #[test]
    fn partial_trailing_unit_is_ignored() {
        assert_eq!(
            decoded(&[0x41, 0, 0, 0, 0x42, 0], ByteOrder::Little).as_units(),
            &[0x41]
        );
    }
}
