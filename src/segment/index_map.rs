//! Byte-offset → codepoint-ordinal span rewriting.
//!
//! The segmentation engine reports offsets in its internal indexing unit
//! (UTF-8 bytes); callers are promised 1-based codepoint counts. The
//! translation walks the element's materialized codepoint boundary table
//! and the span offsets in one ascending pass — both are already sorted,
//! so no offset is ever looked up twice and the text is never re-decoded.

use crate::types::Span;

/// Rewrite `spans` from byte offsets into 1-based codepoint ordinals.
///
/// `table` holds the byte offset of every codepoint of the element, in
/// order (produced while scanning the element). A span's `start` becomes
/// the ordinal of its first codepoint; `end` becomes the ordinal of the
/// first codepoint *after* the match — an exclusive, forward-looking end,
/// so a span over the whole element ends at `table.len() + 1`.
///
/// `spans` must be ordered by start and non-overlapping, which is what the
/// engine produces; the pass is O(table.len() + spans.len()).
pub fn to_codepoint_spans(table: &[usize], spans: &[Span]) -> Vec<Span> {
    let mut out = Vec::with_capacity(spans.len());
    let mut cursor = 0;
    for span in spans {
        let start = ordinal(table, &mut cursor, span.start);
        let end = ordinal(table, &mut cursor, span.end);
        out.push(Span::new(start, end));
    }
    out
}

/// Advance `cursor` past all table entries below `target` and return the
/// 1-based ordinal of the codepoint starting at `target`.
fn ordinal(table: &[usize], cursor: &mut usize, target: usize) -> usize {
    while *cursor < table.len() && table[*cursor] < target {
        *cursor += 1;
    }
    *cursor + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_of(text: &str) -> Vec<usize> {
        text.char_indices().map(|(i, _)| i).collect()
    }

    fn map(text: &str, spans: &[(usize, usize)]) -> Vec<(usize, usize)> {
        let spans: Vec<Span> = spans.iter().map(|&(s, e)| Span::new(s, e)).collect();
        to_codepoint_spans(&table_of(text), &spans)
            .iter()
            .map(|s| (s.start, s.end))
            .collect()
    }

    #[test]
    fn test_ascii_is_one_based_exclusive() {
        // "Hello" and "world" in "Hello, world!".
        assert_eq!(
            map("Hello, world!", &[(0, 5), (7, 12)]),
            vec![(1, 6), (8, 13)]
        );
    }

    #[test]
    fn test_multibyte_offsets_collapse_to_ordinals() {
        // "zażółć gęślą": 'ż', 'ó', 'ł', 'ć', 'ę', 'ś', 'ą' are two bytes each.
        let text = "zażółć gęślą";
        let first = text.find(' ').unwrap(); // byte length of "zażółć"
        assert_eq!(
            map(text, &[(0, first), (first + 1, text.len())]),
            vec![(1, 7), (8, 13)]
        );
    }

    #[test]
    fn test_span_over_whole_element_ends_past_last() {
        assert_eq!(map("ab🎉", &[(0, 6)]), vec![(1, 4)]);
    }

    #[test]
    fn test_adjacent_spans_share_boundary_ordinal() {
        let got = map("One. Two.", &[(0, 5), (5, 9)]);
        assert_eq!(got, vec![(1, 6), (6, 10)]);
    }

    #[test]
    fn test_empty_span_list() {
        assert_eq!(map("abc", &[]), vec![]);
    }

    #[test]
    fn test_zero_length_span() {
        assert_eq!(map("abc", &[(1, 1)]), vec![(2, 2)]);
    }
}
