/// Configuration for a [`SpanDecoder`](crate::SpanDecoder).
///
/// None of these options change what well-formed input decodes to; they only
/// choose how the work is done and how multi-byte code units are laid out.
///
/// # Examples
///
/// ```rust
/// use utfspan::{ByteOrder, DecodeOptions, SpanDecoder, Strategy};
///
/// let decoder = SpanDecoder::new(DecodeOptions {
///     strategy: Strategy::Manual,
///     byte_order: ByteOrder::Big,
///     ..Default::default()
/// });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecodeOptions {
    /// How to choose between the manual walkers and the bulk decoder.
    ///
    /// # Default
    ///
    /// [`Strategy::Auto`]
    pub strategy: Strategy,

    /// Spans of UTF-8 strictly longer than this many bytes are handed to the
    /// bulk decoder under [`Strategy::Auto`].
    ///
    /// # Default
    ///
    /// `16`
    pub utf8_bulk_threshold: usize,

    /// Spans of UTF-16 strictly longer than this many bytes are handed to the
    /// bulk decoder under [`Strategy::Auto`].
    ///
    /// # Default
    ///
    /// `32`
    pub utf16_bulk_threshold: usize,

    /// Byte order of UTF-16 and UTF-32 code units in the buffer.
    ///
    /// # Default
    ///
    /// [`ByteOrder::Little`]
    pub byte_order: ByteOrder,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            strategy: Strategy::Auto,
            utf8_bulk_threshold: 16,
            utf16_bulk_threshold: 32,
            byte_order: ByteOrder::Little,
        }
    }
}

/// Selects the decoding path for UTF-8 and UTF-16 spans.
///
/// UTF-32 is always decoded manually. Without the `bulk` feature every
/// strategy behaves like [`Strategy::Manual`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Always walk the span byte by byte.
    Manual,
    /// Use the bulk decoder once the span is longer than the threshold for its
    /// encoding.
    #[default]
    Auto,
    /// Always use the bulk decoder.
    Bulk,
}

/// Byte order of multi-byte code units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ByteOrder {
    /// Least significant byte first.
    #[default]
    Little,
    /// Most significant byte first.
    Big,
}

impl ByteOrder {
    /// The byte order of the compilation target.
    #[cfg(target_endian = "little")]
    pub const NATIVE: Self = Self::Little;
    /// The byte order of the compilation target.
    #[cfg(target_endian = "big")]
    pub const NATIVE: Self = Self::Big;

    pub(crate) fn read_u16(self, bytes: [u8; 2]) -> u16 {
        match self {
            Self::Little => u16::from_le_bytes(bytes),
            Self::Big => u16::from_be_bytes(bytes),
        }
    }

    pub(crate) fn read_u32(self, bytes: [u8; 4]) -> u32 {
        match self {
            Self::Little => u32::from_le_bytes(bytes),
            Self::Big => u32::from_be_bytes(bytes),
        }
    }
}
