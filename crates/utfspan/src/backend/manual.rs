use crate::{ByteOrder, Text, backend::Backend, utf8, utf16};

/// The byte-walking decoders. Always available.
#[derive(Debug, Clone, Copy, Default)]
pub struct Manual;

impl Backend for Manual {
    fn name(&self) -> &'static str {
        "manual"
    }

    fn decode_utf8(&self, bytes: &[u8], out: &mut Text) {
        utf8::decode(bytes, out);
    }

    fn decode_utf16(&self, bytes: &[u8], order: ByteOrder, out: &mut Text) {
        utf16::decode(bytes, order, out);
    }
}
