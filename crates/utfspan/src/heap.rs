use crate::{DecodeOptions, Span, SpanDecoder, SpanError, Text};

/// Pointer-style access to strings in a flat memory image, such as the
/// linear memory of a WebAssembly instance.
///
/// Addresses are byte offsets into the image. Address `0` is the null
/// pointer: a string at null decodes to empty text without touching memory.
/// Every other address behaves like [`SpanDecoder`] with `Span::new(ptr, len)`,
/// so NUL bytes inside the span are decoded like any other character.
///
/// # Examples
///
/// ```rust
/// use utfspan::Heap;
///
/// let mut memory = vec![0u8; 64];
/// memory[16..21].copy_from_slice(b"hello");
///
/// let heap = Heap::new(&memory);
/// assert_eq!(heap.utf8_to_string(16, 5).unwrap(), "hello");
/// assert!(heap.utf8_to_string(Heap::NULL, 5).unwrap().is_empty());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Heap<'mem> {
    memory: &'mem [u8],
    decoder: SpanDecoder,
}

impl<'mem> Heap<'mem> {
    /// The null address.
    pub const NULL: usize = 0;

    /// Wraps `memory` with the default [`DecodeOptions`].
    #[must_use]
    pub fn new(memory: &'mem [u8]) -> Self {
        Self::with_options(memory, DecodeOptions::default())
    }

    /// Wraps `memory`, decoding with `options`.
    #[must_use]
    pub fn with_options(memory: &'mem [u8], options: DecodeOptions) -> Self {
        Self {
            memory,
            decoder: SpanDecoder::new(options),
        }
    }

    /// The wrapped memory image.
    #[must_use]
    pub fn memory(&self) -> &'mem [u8] {
        self.memory
    }

    /// Decodes `len` bytes of UTF-8 at `ptr`.
    ///
    /// # Errors
    ///
    /// Returns a [`SpanError`] if a non-null string does not fit in memory.
    pub fn utf8_to_string(&self, ptr: usize, len: usize) -> Result<Text, SpanError> {
        if ptr == Self::NULL {
            return Ok(Text::new());
        }
        self.decoder.decode_utf8(self.memory, Span::new(ptr, len))
    }

    /// Decodes `len` bytes of UTF-16 at `ptr`. Both must be even.
    ///
    /// # Errors
    ///
    /// Returns a [`SpanError`] if a non-null string does not fit in memory.
    pub fn utf16_to_string(&self, ptr: usize, len: usize) -> Result<Text, SpanError> {
        if ptr == Self::NULL {
            return Ok(Text::new());
        }
        self.decoder.decode_utf16(self.memory, Span::new(ptr, len))
    }

    /// Decodes `len` bytes of UTF-32 at `ptr`. Both must be multiples of
    /// four.
    ///
    /// # Errors
    ///
    /// Returns a [`SpanError`] if a non-null string does not fit in memory.
    pub fn utf32_to_string(&self, ptr: usize, len: usize) -> Result<Text, SpanError> {
        if ptr == Self::NULL {
            return Ok(Text::new());
        }
        self.decoder.decode_utf32(self.memory, Span::new(ptr, len))
    }
}

impl<'mem> From<&'mem [u8]> for Heap<'mem> {
    fn from(memory: &'mem [u8]) -> Self {
        Self::new(memory)
    }
}
