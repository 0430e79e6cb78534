//! UTF-8 codepoint scanning and Unicode property lookups.
//!
//! [`Codepoints`] decodes a raw byte buffer into a lazy, forward-only
//! sequence of [`Decoded`] triples (value, byte offset, byte length). The
//! decoder is strict: overlong forms, surrogate ranges, values above
//! U+10FFFF, stray continuation bytes, and truncated sequences all fail with
//! [`DecodeError`] carrying the byte offset of the bad sequence. Input
//! buffers come from the caller unvalidated, so the scanner is the single
//! place where encoding errors are caught.
//!
//! Property predicates ([`is_white_space`] and friends) wrap the
//! `icu_properties` compiled data; they are what the statistics counters
//! classify codepoints with.

use icu_properties::{maps, sets, GeneralCategory, GeneralCategoryGroup};

/// One decoded codepoint: scalar value, byte offset, and encoded length.
///
/// Produced transiently by [`Codepoints`]; nothing is stored beyond the
/// current scan position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    /// The Unicode scalar value.
    pub value: char,
    /// Byte offset of the first byte of the encoded codepoint.
    pub offset: usize,
    /// Encoded length in bytes (1..=4).
    pub len: usize,
}

/// An invalid UTF-8 sequence starting at `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeError {
    pub offset: usize,
}

/// Decode a single codepoint starting at `offset`.
///
/// `offset` must be less than `bytes.len()`; [`Codepoints`] guarantees this.
pub fn decode_codepoint(bytes: &[u8], offset: usize) -> Result<Decoded, DecodeError> {
    let err = DecodeError { offset };
    let b0 = match bytes.get(offset) {
        Some(&b) => b,
        None => return Err(err),
    };

    // Sequence length and the valid range of the second byte, per the
    // Unicode 15.0 well-formedness table (D92). The second-byte range is
    // what rejects overlongs, surrogates, and values above U+10FFFF.
    let (len, second_lo, second_hi) = match b0 {
        0x00..=0x7F => {
            return Ok(Decoded {
                value: b0 as char,
                offset,
                len: 1,
            });
        }
        0xC2..=0xDF => (2, 0x80, 0xBF),
        0xE0 => (3, 0xA0, 0xBF),
        0xE1..=0xEC | 0xEE..=0xEF => (3, 0x80, 0xBF),
        0xED => (3, 0x80, 0x9F),
        0xF0 => (4, 0x90, 0xBF),
        0xF1..=0xF3 => (4, 0x80, 0xBF),
        0xF4 => (4, 0x80, 0x8F),
        _ => return Err(err),
    };

    if offset + len > bytes.len() {
        return Err(err);
    }

    let b1 = bytes[offset + 1];
    if b1 < second_lo || b1 > second_hi {
        return Err(err);
    }

    let mut value = match len {
        2 => b0 as u32 & 0x1F,
        3 => b0 as u32 & 0x0F,
        _ => b0 as u32 & 0x07,
    };
    value = value << 6 | (b1 as u32 & 0x3F);
    for &b in &bytes[offset + 2..offset + len] {
        if b & 0xC0 != 0x80 {
            return Err(err);
        }
        value = value << 6 | (b as u32 & 0x3F);
    }

    match char::from_u32(value) {
        Some(value) => Ok(Decoded { value, offset, len }),
        None => Err(err),
    }
}

/// Lazy, forward-only iterator over the codepoints of a byte buffer.
///
/// Non-restartable: start a fresh scan per text element. After the first
/// decode error the iterator fuses and yields nothing further.
#[derive(Debug, Clone)]
pub struct Codepoints<'a> {
    bytes: &'a [u8],
    cursor: usize,
    failed: bool,
}

impl<'a> Codepoints<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Codepoints {
            bytes,
            cursor: 0,
            failed: false,
        }
    }
}

impl Iterator for Codepoints<'_> {
    type Item = Result<Decoded, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.cursor >= self.bytes.len() {
            return None;
        }
        match decode_codepoint(self.bytes, self.cursor) {
            Ok(d) => {
                self.cursor += d.len;
                Some(Ok(d))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

// ─── Property predicates ────────────────────────────────────────────────────

/// White_Space binary property.
pub fn is_white_space(c: char) -> bool {
    sets::white_space().contains(c)
}

/// Alphabetic binary property (broader than general category L*).
pub fn is_alphabetic(c: char) -> bool {
    sets::alphabetic().contains(c)
}

/// Decimal digit: general category Nd.
pub fn is_decimal_digit(c: char) -> bool {
    maps::general_category().get(c) == GeneralCategory::DecimalNumber
}

/// Any punctuation general category (P*).
pub fn is_punctuation(c: char) -> bool {
    GeneralCategoryGroup::Punctuation.contains(maps::general_category().get(c))
}
