//! The boundary-analysis engine and its per-call instance cache.
//!
//! [`BreakEngine`] is a closed wrapper over the four `icu_segmenter`
//! variants — there are exactly four boundary kinds and no plugin point,
//! so this is an enum, not a trait object. Engine construction is assumed
//! expensive relative to rebinding text, which is why [`EngineCache`]
//! keeps at most one live instance per call and swaps it only when the
//! requested kind changes. The cache is owned by the batch call, so `Drop`
//! releases the engine on every exit path, early errors included.

use icu_locid::Locale;
use icu_segmenter::{
    GraphemeClusterSegmenter, LineSegmenter, SentenceSegmenter, WordSegmenter, WordType,
};

use crate::error::{Result, TextError};
use crate::types::{BoundaryKind, Span};

/// Resolve a locale identifier string.
///
/// Accepts BCP-47 (`en-US`) and underscore-separated (`en_US`) forms; an
/// empty string means the root locale. Unparseable identifiers fail with
/// [`TextError::Engine`] — locale resolution is the engine's concern.
pub fn resolve_locale(tag: &str) -> Result<Locale> {
    if tag.is_empty() {
        return Ok(Locale::UND);
    }
    tag.replace('_', "-")
        .parse::<Locale>()
        .map_err(|e| TextError::Engine {
            detail: format!("cannot resolve locale `{tag}`: {e}"),
        })
}

/// A locale-bound boundary-analysis engine for one [`BoundaryKind`].
pub struct BreakEngine {
    kind: BoundaryKind,
    locale: Locale,
    inner: Inner,
}

enum Inner {
    Character(GraphemeClusterSegmenter),
    Line(LineSegmenter),
    Sentence(SentenceSegmenter),
    Word(WordSegmenter),
}

impl BreakEngine {
    /// Instantiate the engine variant for `kind`.
    ///
    /// The segmentation data is locale-independent in `icu_segmenter`
    /// (language-specific dictionaries are selected per text run by the
    /// `auto` models); the locale is kept for cache identity.
    pub fn open(kind: BoundaryKind, locale: &Locale) -> Result<Self> {
        let inner = match kind {
            BoundaryKind::Character => Inner::Character(GraphemeClusterSegmenter::new()),
            BoundaryKind::LineBreak => Inner::Line(LineSegmenter::new_auto()),
            BoundaryKind::Sentence => Inner::Sentence(SentenceSegmenter::new()),
            BoundaryKind::Word => Inner::Word(WordSegmenter::new_auto()),
        };
        Ok(BreakEngine {
            kind,
            locale: locale.clone(),
            inner,
        })
    }

    pub fn kind(&self) -> BoundaryKind {
        self.kind
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Segment `text`, returning ordered, non-overlapping spans in the
    /// engine's internal coordinate space (UTF-8 byte offsets).
    ///
    /// For the word kind, candidate spans whose rule classification is
    /// "no word" (pure delimiter runs) are dropped here; every other kind
    /// returns all spans between consecutive boundaries.
    pub fn segment(&self, text: &str) -> Vec<Span> {
        match &self.inner {
            Inner::Character(seg) => pair_boundaries(seg.segment_str(text)),
            Inner::Line(seg) => pair_boundaries(seg.segment_str(text)),
            Inner::Sentence(seg) => pair_boundaries(seg.segment_str(text)),
            Inner::Word(seg) => {
                let mut spans = Vec::new();
                let mut iter = seg.segment_str(text);
                let mut last = match iter.next() {
                    Some(b) => b,
                    None => return spans,
                };
                while let Some(boundary) = iter.next() {
                    if iter.word_type() != WordType::None {
                        spans.push(Span::new(last, boundary));
                    }
                    last = boundary;
                }
                spans
            }
        }
    }
}

/// Turn an ordered boundary sequence into spans between consecutive
/// boundaries. The first boundary (position 0) opens the first span.
fn pair_boundaries(mut boundaries: impl Iterator<Item = usize>) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut last = match boundaries.next() {
        Some(b) => b,
        None => return spans,
    };
    for boundary in boundaries {
        spans.push(Span::new(last, boundary));
        last = boundary;
    }
    spans
}

/// At most one live [`BreakEngine`], keyed by boundary kind.
///
/// The locale is fixed for the lifetime of the cache (one batch call).
/// Requesting the same kind as the previous element reuses the instance;
/// a different kind drops the old engine and opens a new one.
pub struct EngineCache {
    locale: Locale,
    slot: Option<BreakEngine>,
}

impl EngineCache {
    pub fn new(locale: Locale) -> Self {
        EngineCache { locale, slot: None }
    }

    /// Get the engine for `kind`, opening or swapping the slot as needed.
    pub fn engine(&mut self, kind: BoundaryKind) -> Result<&BreakEngine> {
        if self.slot.as_ref().map(BreakEngine::kind) != Some(kind) {
            self.slot = Some(BreakEngine::open(kind, &self.locale)?);
        }
        self.slot.as_ref().ok_or_else(|| TextError::Engine {
            detail: "engine slot empty after open".into(),
        })
    }
}
