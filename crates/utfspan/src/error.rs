use thiserror::Error;

/// A span that cannot be viewed inside the buffer it was applied to.
///
/// Decoding itself never fails on content; this is the only error the
/// decoders report.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SpanError {
    /// `offset + len` does not fit in `usize`.
    #[error("span at offset {offset} with length {len} overflows the address space")]
    Overflow {
        /// Start of the span in bytes.
        offset: usize,
        /// Length of the span in bytes.
        len: usize,
    },
    /// The span ends past the end of the buffer.
    #[error("span {offset}..{end} exceeds buffer of {buffer_len} bytes")]
    OutOfBounds {
        /// Start of the span in bytes.
        offset: usize,
        /// Exclusive end of the span in bytes.
        end: usize,
        /// Length of the buffer the span was applied to.
        buffer_len: usize,
    },
}
