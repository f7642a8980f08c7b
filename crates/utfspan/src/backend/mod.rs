//! Interchangeable decoding paths for UTF-8 and UTF-16 spans.
//!
//! [`Manual`] walks the span unit by unit and is the reference behavior.
//! [`Bulk`] (feature `bulk`) hands the whole span to `encoding_rs`. Both
//! produce the same code units for well-formed input; on malformed input the
//! bulk path substitutes U+FFFD where the manual path decodes leniently.
//!
//! UTF-32 has no bulk path and is not part of this trait.
#[cfg(feature = "bulk")]
mod bulk;
mod manual;

#[cfg(feature = "bulk")]
pub use bulk::Bulk;
pub use manual::Manual;

use crate::{ByteOrder, Strategy, Text};

/// A decoding path. Implementations append to `out` and never fail.
pub trait Backend: Sync {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Appends the UTF-8 in `bytes` to `out`.
    fn decode_utf8(&self, bytes: &[u8], out: &mut Text);

    /// Appends the UTF-16 in `bytes` to `out`. `bytes` holds whole code
    /// units.
    fn decode_utf16(&self, bytes: &[u8], order: ByteOrder, out: &mut Text);
}

/// Picks the backend for a span of `len` bytes.
///
/// Under [`Strategy::Auto`] the bulk path is taken only when `len` is
/// strictly greater than `threshold`.
#[must_use]
pub fn select(strategy: Strategy, len: usize, threshold: usize) -> &'static dyn Backend {
    match strategy {
        Strategy::Manual => &Manual,
        Strategy::Auto if len <= threshold => &Manual,
        Strategy::Auto | Strategy::Bulk => bulk_or_manual(),
    }
}

#[cfg(feature = "bulk")]
fn bulk_or_manual() -> &'static dyn Backend {
    &Bulk
}

#[cfg(not(feature = "bulk"))]
fn bulk_or_manual() -> &'static dyn Backend {
    &Manual
}
