//! Manual UTF-8 decoding.
//!
//! The leading byte alone decides the sequence length. Continuation bytes
//! contribute their low six bits whatever their high bits are, and a leading
//! byte that is not a 1, 2 or 3 byte lead is decoded as a 4 byte sequence.
//! A sequence cut short by the end of the span reads its missing continuation
//! bytes as zero; nothing past the span is touched.
use bstr::ByteSlice;

use crate::Text;

/// Bytes of context shown on each side of an invalid leading byte.
const DIAGNOSTIC_CONTEXT: usize = 16;

/// Appends the UTF-8 in `bytes` to `out`.
pub(crate) fn decode(bytes: &[u8], out: &mut Text) {
    out.units_mut().reserve(bytes.len());

    let mut iter = bytes.iter().copied();
    let mut warned = false;
    while let Some(lead) = iter.next() {
        let at = bytes.len() - iter.len() - 1;
        if lead & 0x80 == 0 {
            out.push_unit(u16::from(lead));
            continue;
        }

        let b0 = u32::from(lead);
        let b1 = continuation(&mut iter);
        if lead & 0xE0 == 0xC0 {
            out.push_code_point(((b0 & 0x1F) << 6) | b1);
            continue;
        }

        let b2 = continuation(&mut iter);
        let code_point = if lead & 0xF0 == 0xE0 {
            ((b0 & 0x0F) << 12) | (b1 << 6) | b2
        } else {
            if lead & 0xF8 != 0xF0 && !warned {
                warned = true;
                let start = at.saturating_sub(DIAGNOSTIC_CONTEXT);
                let end = bytes.len().min(at + DIAGNOSTIC_CONTEXT + 1);
                log::warn!(
                    "invalid UTF-8 leading byte {lead:#04x} at byte {at} of {} near {:?}; \
                     treating it as a 4 byte sequence",
                    bytes.len(),
                    bytes[start..end].as_bstr()
                );
            }
            ((b0 & 0x07) << 18) | (b1 << 12) | (b2 << 6) | continuation(&mut iter)
        };
        out.push_code_point(code_point);
    }
}

#[inline]
fn continuation(iter: &mut impl Iterator<Item = u8>) -> u32 {
    iter.next().map_or(0, |b| u32::from(b & 0x3F))
}
