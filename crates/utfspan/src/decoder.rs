use crate::{DecodeOptions, Span, SpanError, Text, backend, utf32};

/// Decodes spans of a borrowed buffer into [`Text`] with a fixed set of
/// [`DecodeOptions`].
///
/// The decoder holds no state between calls and can be shared freely.
///
/// # Examples
///
/// ```rust
/// use utfspan::{Span, SpanDecoder};
///
/// let memory = b"\x00\x00hello";
/// let text = SpanDecoder::default()
///     .decode_utf8(memory, Span::new(2, 5))
///     .unwrap();
/// assert_eq!(text, "hello");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpanDecoder {
    options: DecodeOptions,
}

impl SpanDecoder {
    /// Creates a decoder using `options`.
    #[must_use]
    pub const fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    /// The options this decoder was built with.
    #[must_use]
    pub const fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Decodes the UTF-8 bytes covered by `span`.
    ///
    /// Malformed sequences never fail the call. On the manual path they are
    /// decoded leniently; on the bulk path they become U+FFFD.
    ///
    /// # Errors
    ///
    /// Returns a [`SpanError`] if a non-empty `span` does not lie within
    /// `buffer`.
    pub fn decode_utf8(&self, buffer: &[u8], span: Span) -> Result<Text, SpanError> {
        if span.is_empty() {
            return Ok(Text::new());
        }
        let bytes = span.view(buffer)?;
        let backend = backend::select(
            self.options.strategy,
            bytes.len(),
            self.options.utf8_bulk_threshold,
        );
        log::trace!(
            "decoding {} bytes of UTF-8 via the {} path",
            bytes.len(),
            backend.name()
        );

        let mut out = Text::new();
        backend.decode_utf8(bytes, &mut out);
        Ok(out)
    }

    /// Decodes the UTF-16 code units covered by `span`.
    ///
    /// `span.offset` and `span.len` must both be even. This is checked in
    /// debug builds only; in release builds a trailing odd byte is ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`SpanError`] if a non-empty `span` does not lie within
    /// `buffer`.
    pub fn decode_utf16(&self, buffer: &[u8], span: Span) -> Result<Text, SpanError> {
        debug_assert!(
            span.is_aligned_to(2),
            "UTF-16 span {span:?} must start and end on a 2 byte boundary"
        );
        if span.is_empty() {
            return Ok(Text::new());
        }
        let bytes = span.view(buffer)?;
        let bytes = &bytes[..bytes.len() & !1];
        let backend = backend::select(
            self.options.strategy,
            bytes.len(),
            self.options.utf16_bulk_threshold,
        );
        log::trace!(
            "decoding {} bytes of UTF-16 via the {} path",
            bytes.len(),
            backend.name()
        );

        let mut out = Text::with_capacity(bytes.len() / 2);
        backend.decode_utf16(bytes, self.options.byte_order, &mut out);
        Ok(out)
    }

    /// Decodes the UTF-32 code points covered by `span`.
    ///
    /// `span.offset` and `span.len` must both be multiples of four. This is
    /// checked in debug builds only; in release builds a trailing partial
    /// unit is ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`SpanError`] if a non-empty `span` does not lie within
    /// `buffer`.
    pub fn decode_utf32(&self, buffer: &[u8], span: Span) -> Result<Text, SpanError> {
        debug_assert!(
            span.is_aligned_to(4),
            "UTF-32 span {span:?} must start and end on a 4 byte boundary"
        );
        if span.is_empty() {
            return Ok(Text::new());
        }
        let bytes = span.view(buffer)?;

        let mut out = Text::new();
        utf32::decode(bytes, self.options.byte_order, &mut out);
        Ok(out)
    }
}
