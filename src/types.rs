//! Core value types shared across the crate.
//!
//! Everything here is a plain data carrier: text elements as handed over by
//! the caller, boundary-kind selectors, spans, and the two fixed-shape
//! statistics records. Behaviour lives in the [`stats`](crate::stats),
//! [`segment`](crate::segment), and [`batch`](crate::batch) modules.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TextError;

// ─── TextElement ────────────────────────────────────────────────────────────

/// One element of an input text vector: either a byte buffer (UTF-8 by
/// contract, but not necessarily validated upstream) or a missing value.
///
/// Missing elements are skipped by the statistics accumulators and produce
/// an NA sentinel (`None`) in boundary results; they are never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextElement {
    /// The NA sentinel — no text at all (distinct from an empty string).
    Missing,
    /// Raw bytes of one logical line of text.
    Bytes(Vec<u8>),
}

impl TextElement {
    /// Returns `true` for the NA sentinel.
    pub fn is_missing(&self) -> bool {
        matches!(self, TextElement::Missing)
    }

    /// Borrow the byte buffer, or `None` for a missing element.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            TextElement::Missing => None,
            TextElement::Bytes(b) => Some(b),
        }
    }
}

impl From<&str> for TextElement {
    fn from(s: &str) -> Self {
        TextElement::Bytes(s.as_bytes().to_vec())
    }
}

impl From<String> for TextElement {
    fn from(s: String) -> Self {
        TextElement::Bytes(s.into_bytes())
    }
}

impl From<Option<&str>> for TextElement {
    fn from(s: Option<&str>) -> Self {
        match s {
            Some(s) => s.into(),
            None => TextElement::Missing,
        }
    }
}

// ─── BoundaryKind ───────────────────────────────────────────────────────────

/// The category of text segmentation requested.
///
/// A closed set: there are exactly four kinds and no plugin extension point.
/// The serde / [`FromStr`] labels are `"character"`, `"line-break"`,
/// `"sentence"`, and `"word"`; any other label is rejected with
/// [`TextError::InvalidBoundaryKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BoundaryKind {
    /// Extended grapheme cluster boundaries.
    Character,
    /// Line-break opportunities (soft wrap positions).
    LineBreak,
    /// Sentence boundaries.
    Sentence,
    /// Word boundaries.
    Word,
}

impl BoundaryKind {
    /// All kinds, in label order.
    pub const ALL: [BoundaryKind; 4] = [
        BoundaryKind::Character,
        BoundaryKind::LineBreak,
        BoundaryKind::Sentence,
        BoundaryKind::Word,
    ];

    /// The canonical label for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            BoundaryKind::Character => "character",
            BoundaryKind::LineBreak => "line-break",
            BoundaryKind::Sentence => "sentence",
            BoundaryKind::Word => "word",
        }
    }
}

impl fmt::Display for BoundaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BoundaryKind {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "character" => Ok(BoundaryKind::Character),
            "line-break" => Ok(BoundaryKind::LineBreak),
            "sentence" => Ok(BoundaryKind::Sentence),
            "word" => Ok(BoundaryKind::Word),
            other => Err(TextError::InvalidBoundaryKind {
                label: other.to_string(),
                index: 0,
            }),
        }
    }
}

// ─── Span ───────────────────────────────────────────────────────────────────

/// A half-open boundary interval, `start <= end`.
///
/// The coordinate space is contextual: the segmentation engine emits spans
/// in its internal unit (UTF-8 byte offsets), and
/// [`to_codepoint_spans`](crate::segment::to_codepoint_spans) rewrites them
/// to 1-based codepoint ordinals where `end` names the first codepoint
/// after the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Span { start, end }
    }

    /// Interval length in the span's coordinate space.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<(usize, usize)> for Span {
    fn from((start, end): (usize, usize)) -> Self {
        Span::new(start, end)
    }
}

// ─── Statistics records ─────────────────────────────────────────────────────

/// General corpus statistics.
///
/// One record is accumulated across the whole input vector per call; every
/// non-missing element contributes to the same four counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GeneralStats {
    /// Number of non-missing elements (each element is one logical line).
    pub lines: u64,
    /// Lines containing at least one non-white-space codepoint.
    pub lines_non_empty: u64,
    /// Total codepoints.
    pub chars: u64,
    /// Codepoints without the White_Space binary property.
    pub chars_non_white: u64,
}

/// LaTeX-aware corpus statistics (modified Kile-style word count).
///
/// Like [`GeneralStats`], a single record is shared by all elements of a
/// call; the tokenizer state itself is reset per element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LatexStats {
    /// Codepoints inside words (letters and digits in running text).
    pub chars_word: u64,
    /// Codepoints belonging to commands and environment heads.
    pub chars_cmd_envir: u64,
    /// White-space and other separator codepoints.
    pub chars_white: u64,
    /// Words (runs opened by a letter).
    pub words: u64,
    /// Control sequences that are not environment delimiters.
    pub commands: u64,
    /// `\begin{...}` environment openings (`\end` is deliberately not
    /// counted, so partial selections do not go negative).
    pub environments: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_element_conversions() {
        assert_eq!(
            TextElement::from("ab"),
            TextElement::Bytes(vec![b'a', b'b'])
        );
        assert_eq!(TextElement::from(None::<&str>), TextElement::Missing);
        assert!(TextElement::Missing.is_missing());
        assert_eq!(TextElement::from("x").as_bytes(), Some(&b"x"[..]));
        assert_eq!(TextElement::Missing.as_bytes(), None);
    }

    #[test]
    fn test_boundary_kind_labels_round_trip() {
        for kind in BoundaryKind::ALL {
            assert_eq!(kind.as_str().parse::<BoundaryKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_boundary_kind_rejects_unknown_label() {
        let err = "paragraph".parse::<BoundaryKind>().unwrap_err();
        assert!(err.to_string().contains("paragraph"));
    }

    #[test]
    fn test_boundary_kind_serde_labels() {
        let json = serde_json::to_string(&BoundaryKind::LineBreak).unwrap();
        assert_eq!(json, "\"line-break\"");
        let kind: BoundaryKind = serde_json::from_str("\"word\"").unwrap();
        assert_eq!(kind, BoundaryKind::Word);
    }

    #[test]
    fn test_span_basics() {
        let s = Span::new(1, 6);
        assert_eq!(s.len(), 5);
        assert!(!s.is_empty());
        assert!(Span::new(3, 3).is_empty());
        assert_eq!(Span::from((1, 2)), Span::new(1, 2));
    }

    #[test]
    fn test_stats_records_serialize_with_stable_names() {
        let json = serde_json::to_value(GeneralStats::default()).unwrap();
        for key in ["Lines", "LinesNonEmpty", "Chars", "CharsNonWhite"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        let json = serde_json::to_value(LatexStats::default()).unwrap();
        for key in [
            "CharsWord",
            "CharsCmdEnvir",
            "CharsWhite",
            "Words",
            "Commands",
            "Environments",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }
}
