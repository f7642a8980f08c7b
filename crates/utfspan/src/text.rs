//! The decoded text value.
//!
//! [`Text`] holds UTF-16 code units, the representation hosts with
//! UTF-16-based strings expect. It is not guaranteed to be well-formed: a
//! UTF-16 source is copied through unit by unit, so unpaired surrogates in
//! the input survive into the result, and lenient UTF-8/UTF-32 decoding can
//! construct them from malformed input.
use alloc::{
    string::{FromUtf16Error, String},
    vec::Vec,
};
use core::{
    char::DecodeUtf16,
    fmt::{self, Write},
    iter::Copied,
    slice,
};

/// An owned sequence of UTF-16 code units produced by a decode call.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Text {
    units: Vec<u16>,
}

impl Text {
    /// Creates an empty text value.
    #[must_use]
    pub const fn new() -> Self {
        Self { units: Vec::new() }
    }

    /// Creates an empty text value with room for `units` code units.
    #[must_use]
    pub fn with_capacity(units: usize) -> Self {
        Self {
            units: Vec::with_capacity(units),
        }
    }

    /// Number of UTF-16 code units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Returns `true` if there are no code units.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Appends a single code unit, surrogate halves included, unchanged.
    pub fn push_unit(&mut self, unit: u16) {
        self.units.push(unit);
    }

    /// Appends a code point, splitting it into a surrogate pair when it lies
    /// outside the Basic Multilingual Plane.
    ///
    /// No range check is made. Values past U+10FFFF still go through the
    /// surrogate formula and each half is truncated to 16 bits.
    #[allow(clippy::cast_possible_truncation)]
    pub fn push_code_point(&mut self, code_point: u32) {
        if code_point < 0x1_0000 {
            self.units.push(code_point as u16);
        } else {
            let ch = code_point - 0x1_0000;
            self.units.push((0xD800 | (ch >> 10)) as u16);
            self.units.push((0xDC00 | (ch & 0x3FF)) as u16);
        }
    }

    /// Borrows the code units.
    #[must_use]
    pub fn as_units(&self) -> &[u16] {
        &self.units
    }

    /// Consumes the value and returns its code units.
    #[must_use]
    pub fn into_units(self) -> Vec<u16> {
        self.units
    }

    pub(crate) fn units_mut(&mut self) -> &mut Vec<u16> {
        &mut self.units
    }

    /// Iterates over the characters under the standard UTF-16 rules, yielding
    /// an error for each unpaired surrogate.
    pub fn chars(&self) -> DecodeUtf16<Copied<slice::Iter<'_, u16>>> {
        char::decode_utf16(self.units.iter().copied())
    }

    /// Converts to UTF-8, replacing unpaired surrogates with U+FFFD.
    #[must_use]
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(&self.units)
    }

    /// Converts to UTF-8.
    ///
    /// # Errors
    ///
    /// Fails if the text contains an unpaired surrogate.
    pub fn try_into_string(&self) -> Result<String, FromUtf16Error> {
        String::from_utf16(&self.units)
    }
}

impl From<Vec<u16>> for Text {
    fn from(units: Vec<u16>) -> Self {
        Self { units }
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        s.encode_utf16().collect()
    }
}

impl FromIterator<u16> for Text {
    fn from_iter<I: IntoIterator<Item = u16>>(iter: I) -> Self {
        Self {
            units: iter.into_iter().collect(),
        }
    }
}

impl Extend<u16> for Text {
    fn extend<I: IntoIterator<Item = u16>>(&mut self, iter: I) {
        self.units.extend(iter);
    }
}

impl PartialEq<str> for Text {
    fn eq(&self, other: &str) -> bool {
        self.units.iter().copied().eq(other.encode_utf16())
    }
}

impl PartialEq<&str> for Text {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.chars() {
            f.write_char(ch.unwrap_or(char::REPLACEMENT_CHARACTER))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;
        for ch in self.chars() {
            match ch {
                Ok(ch) => write!(f, "{}", ch.escape_debug())?,
                Err(err) => write!(f, "\\u{{{:X}}}", err.unpaired_surrogate())?,
            }
        }
        f.write_char('"')
    }
}
