use crate::SpanError;

/// A byte range inside an addressable buffer: `len` bytes starting at
/// `offset`.
///
/// The length is always explicit. Nothing in this crate scans for a
/// terminator or reads past `offset + len`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start of the range, in bytes from the beginning of the buffer.
    pub offset: usize,
    /// Number of bytes in the range.
    pub len: usize,
}

impl Span {
    /// Creates a span of `len` bytes starting at `offset`.
    #[must_use]
    pub const fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// Exclusive end of the span, or `None` if it overflows `usize`.
    #[must_use]
    pub const fn end(&self) -> Option<usize> {
        self.offset.checked_add(self.len)
    }

    /// Returns `true` if the span covers no bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Borrows exactly the bytes this span covers.
    ///
    /// # Errors
    ///
    /// Returns [`SpanError::Overflow`] if the end of the span overflows, or
    /// [`SpanError::OutOfBounds`] if it lies past the end of `buffer`.
    pub fn view<'buf>(&self, buffer: &'buf [u8]) -> Result<&'buf [u8], SpanError> {
        let end = self.end().ok_or(SpanError::Overflow {
            offset: self.offset,
            len: self.len,
        })?;
        buffer.get(self.offset..end).ok_or(SpanError::OutOfBounds {
            offset: self.offset,
            end,
            buffer_len: buffer.len(),
        })
    }

    /// Whether both the offset and the length are multiples of `width`.
    pub(crate) const fn is_aligned_to(&self, width: usize) -> bool {
        self.offset % width == 0 && self.len % width == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_is_exact() {
        let buffer = b"xxhellox";
        assert_eq!(Span::new(2, 5).view(buffer).unwrap(), b"hello");
    }

    #[test]
    fn empty_span_at_end_is_valid() {
        let buffer = [1u8, 2, 3];
        assert_eq!(Span::new(3, 0).view(&buffer).unwrap(), &[] as &[u8]);
    }

    #[test]
    fn span_past_end_is_rejected() {
        let buffer = [0u8; 4];
        assert_eq!(
            Span::new(2, 3).view(&buffer),
            Err(SpanError::OutOfBounds {
                offset: 2,
                end: 5,
                buffer_len: 4
            })
        );
    }

    #[test]
    fn overflowing_span_is_rejected() {
        let err = Span::new(usize::MAX, 2).view(&[]).unwrap_err();
        assert_eq!(
            err,
            SpanError::Overflow {
                offset: usize::MAX,
                len: 2
            }
        );
    }

    #[test]
    fn alignment() {
        assert!(Span::new(4, 8).is_aligned_to(4));
        assert!(!Span::new(2, 8).is_aligned_to(4));
        assert!(!Span::new(4, 6).is_aligned_to(4));
    }
}
