//! General corpus statistics.
//!
//! Each text element is one logical line: the counter bumps `lines` per
//! element, walks its codepoints, and classifies them with the White_Space
//! binary property. An embedded line feed violates the one-line contract
//! and fails the whole call.

use crate::error::{Result, TextError};
use crate::scan::{is_white_space, Codepoints};
use crate::types::GeneralStats;

/// Accumulator for [`GeneralStats`] across a whole input vector.
#[derive(Debug, Clone, Default)]
pub struct GeneralStatsCounter {
    stats: GeneralStats,
}

impl GeneralStatsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one non-missing element into the shared record.
    ///
    /// `index` is the element's position in the input vector and is only
    /// used to tag errors. Missing elements must be skipped by the caller —
    /// they contribute to no counter, including `lines`.
    pub fn accumulate(&mut self, index: usize, bytes: &[u8]) -> Result<()> {
        self.stats.lines += 1;
        let mut saw_non_white = false;

        for decoded in Codepoints::new(bytes) {
            let decoded = decoded.map_err(|e| TextError::MalformedEncoding {
                index,
                offset: e.offset,
            })?;
            if decoded.value == '\n' {
                return Err(TextError::EmbeddedNewline {
                    index,
                    offset: decoded.offset,
                });
            }
            self.stats.chars += 1;
            if !is_white_space(decoded.value) {
                saw_non_white = true;
                self.stats.chars_non_white += 1;
            }
        }

        if saw_non_white {
            self.stats.lines_non_empty += 1;
        }
        Ok(())
    }

    /// Consume the counter, returning the accumulated record.
    pub fn finish(self) -> GeneralStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats_of(elements: &[&[u8]]) -> Result<GeneralStats> {
        let mut counter = GeneralStatsCounter::new();
        for (i, bytes) in elements.iter().enumerate() {
            counter.accumulate(i, bytes)?;
        }
        Ok(counter.finish())
    }

    #[test]
    fn test_ascii_chars_equals_byte_length() {
        let text = b"Hello, world!";
        let stats = stats_of(&[text]).unwrap();
        assert_eq!(stats.chars, text.len() as u64);
        assert_eq!(stats.chars_non_white, 12); // one space
        assert_eq!(stats.lines, 1);
        assert_eq!(stats.lines_non_empty, 1);
    }

    #[test]
    fn test_multibyte_counts_codepoints_not_bytes() {
        let stats = stats_of(&["zażółć".as_bytes()]).unwrap();
        assert_eq!(stats.chars, 6);
        assert_eq!(stats.chars_non_white, 6);
    }

    #[test]
    fn test_whitespace_only_line_is_empty() {
        let stats = stats_of(&[b" \t ", b"x"]).unwrap();
        assert_eq!(stats.lines, 2);
        assert_eq!(stats.lines_non_empty, 1);
        assert_eq!(stats.chars, 4);
        assert_eq!(stats.chars_non_white, 1);
    }

    #[test]
    fn test_no_break_space_is_white() {
        let stats = stats_of(&["a\u{00A0}b".as_bytes()]).unwrap();
        assert_eq!(stats.chars, 3);
        assert_eq!(stats.chars_non_white, 2);
    }

    #[test]
    fn test_empty_element_still_counts_a_line() {
        let stats = stats_of(&[b""]).unwrap();
        assert_eq!(stats.lines, 1);
        assert_eq!(stats.lines_non_empty, 0);
        assert_eq!(stats.chars, 0);
    }

    #[test]
    fn test_accumulates_across_elements() {
        let stats = stats_of(&[b"ab", b"cd e"]).unwrap();
        assert_eq!(stats.lines, 2);
        assert_eq!(stats.chars, 6);
        assert_eq!(stats.chars_non_white, 5);
    }

    #[test]
    fn test_embedded_newline_fails_with_index_and_offset() {
        let err = stats_of(&[b"ok", b"ab\ncd"]).unwrap_err();
        assert_eq!(err, TextError::EmbeddedNewline { index: 1, offset: 2 });
    }

    #[test]
    fn test_malformed_utf8_fails() {
        let err = stats_of(&[&[b'a', 0xFF][..]]).unwrap_err();
        assert_eq!(err, TextError::MalformedEncoding { index: 0, offset: 1 });
    }
}
