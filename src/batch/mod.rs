//! Vectorized batch operations — the public surface of the crate.
//!
//! Each operation drives the per-element machinery across a whole input
//! vector in strict index order: statistics accumulate into one shared
//! record per call, boundary location yields one `Option<Vec<Span>>` per
//! output row (`None` is the NA sentinel). Missing elements short-circuit;
//! any hard failure aborts the call with no partial result.
//!
//! Boundary operations recycle their two input vectors R-style: the output
//! length is the longer of the two and both are indexed cyclically. The
//! engine instance is cached across consecutive same-kind elements, which
//! is why element order is fixed (see [`EngineCache`]).

use crate::error::{Result, TextError};
use crate::scan::Codepoints;
use crate::segment::{resolve_locale, to_codepoint_spans, EngineCache};
use crate::stats::{GeneralStatsCounter, LatexTokenizer};
use crate::types::{BoundaryKind, GeneralStats, LatexStats, Span, TextElement};

// ─── Conditional tracing support ────────────────────────────────────────────

/// Enter a tracing span for a batch operation (when the `tracing` feature
/// is enabled). When disabled, this is a no-op and the compiler eliminates
/// it.
macro_rules! trace_op {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("batch_op", op = $name).entered();
    };
}

#[cfg(feature = "tracing")]
fn warn_fractional_recycling(longer: usize, shorter: usize) {
    tracing::warn!(
        longer,
        shorter,
        "longer input length is not a multiple of the shorter; recycling with remainder"
    );
}

#[cfg(not(feature = "tracing"))]
fn warn_fractional_recycling(_longer: usize, _shorter: usize) {}

// ─── Recycling rule ─────────────────────────────────────────────────────────

/// Output length for two parallel input vectors, R-style.
///
/// Zero if either input is empty; otherwise the longer length, with the
/// shorter vector repeated cyclically. A longer length that is not a
/// multiple of the shorter one still recycles, but emits a warning when the
/// `tracing` feature is on.
pub fn recycling_length(a: usize, b: usize) -> usize {
    if a == 0 || b == 0 {
        return 0;
    }
    let (longer, shorter) = if a >= b { (a, b) } else { (b, a) };
    if longer % shorter != 0 {
        warn_fractional_recycling(longer, shorter);
    }
    longer
}

/// Validate a vector of boundary-kind labels.
///
/// Fails with [`TextError::InvalidBoundaryKind`] naming the first bad label
/// and its index; meant to run before any element is processed.
pub fn parse_boundary_kinds<S: AsRef<str>>(labels: &[S]) -> Result<Vec<BoundaryKind>> {
    labels
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let label = label.as_ref();
            label
                .parse::<BoundaryKind>()
                .map_err(|_| TextError::InvalidBoundaryKind {
                    label: label.to_string(),
                    index,
                })
        })
        .collect()
}

// ─── Statistics operations ──────────────────────────────────────────────────

/// General statistics over the whole input vector.
///
/// One [`GeneralStats`] record accumulates across all non-missing elements;
/// missing elements contribute to no counter at all.
pub fn general_stats(texts: &[TextElement]) -> Result<GeneralStats> {
    trace_op!("general_stats");
    let mut counter = GeneralStatsCounter::new();
    for (index, text) in texts.iter().enumerate() {
        if let Some(bytes) = text.as_bytes() {
            counter.accumulate(index, bytes)?;
        }
    }
    Ok(counter.finish())
}

/// LaTeX-aware statistics over the whole input vector.
///
/// Like [`general_stats`], a single [`LatexStats`] record is shared by all
/// elements; the tokenizer state machine restarts per element.
pub fn latex_stats(texts: &[TextElement]) -> Result<LatexStats> {
    trace_op!("latex_stats");
    let mut stats = LatexStats::default();
    let mut tokenizer = LatexTokenizer::new();
    for (index, text) in texts.iter().enumerate() {
        if let Some(bytes) = text.as_bytes() {
            tokenizer.accumulate(index, bytes, &mut stats)?;
        }
    }
    Ok(stats)
}

// ─── Boundary operations ────────────────────────────────────────────────────

/// Locate all boundaries of the requested kinds.
///
/// `texts` and `kinds` are recycled against each other: the output has
/// [`recycling_length`] rows and row `i` pairs `texts[i % texts.len()]`
/// with `kinds[i % kinds.len()]`. Missing or zero-length texts yield
/// `None`. Spans are 1-based codepoint ordinals with exclusive ends.
pub fn locate_boundaries(
    texts: &[TextElement],
    kinds: &[BoundaryKind],
    locale: &str,
) -> Result<Vec<Option<Vec<Span>>>> {
    trace_op!("locate_boundaries");
    let rows = recycling_length(texts.len(), kinds.len());
    let mut cache = EngineCache::new(resolve_locale(locale)?);
    let mut out = Vec::with_capacity(rows);
    for i in 0..rows {
        let text = &texts[i % texts.len()];
        let kind = kinds[i % kinds.len()];
        out.push(locate_element(&mut cache, kind, i, text)?);
    }
    Ok(out)
}

/// Locate words, excluding pure-delimiter runs.
///
/// Always uses the word boundary kind; an element where nothing survives
/// the "no word" filter yields `None`, distinguishing "no text" from "no
/// words found". Output length equals `texts.len()`.
pub fn locate_words(texts: &[TextElement], locale: &str) -> Result<Vec<Option<Vec<Span>>>> {
    trace_op!("locate_words");
    let mut cache = EngineCache::new(resolve_locale(locale)?);
    texts
        .iter()
        .enumerate()
        .map(|(index, text)| locate_element(&mut cache, BoundaryKind::Word, index, text))
        .collect()
}

/// Process one output row: NA/empty short-circuit, scan, segment, and map
/// the spans into codepoint coordinates.
fn locate_element(
    cache: &mut EngineCache,
    kind: BoundaryKind,
    index: usize,
    text: &TextElement,
) -> Result<Option<Vec<Span>>> {
    let bytes = match text.as_bytes() {
        Some(bytes) if !bytes.is_empty() => bytes,
        // NA in, NA out — the engine is not even opened.
        _ => return Ok(None),
    };

    let table = codepoint_table(index, bytes)?;
    // The scan above has proven the bytes valid, so this cannot fail.
    let text = std::str::from_utf8(bytes).map_err(|e| TextError::MalformedEncoding {
        index,
        offset: e.valid_up_to(),
    })?;

    let spans = cache.engine(kind)?.segment(text);
    if kind == BoundaryKind::Word && spans.is_empty() {
        return Ok(None);
    }
    Ok(Some(to_codepoint_spans(&table, &spans)))
}

/// Scan one element, materializing the byte offset of every codepoint.
///
/// This is the per-element boundary table the index mapper consumes, and
/// doubles as the validation pass: malformed UTF-8 and embedded line feeds
/// fail here, before the engine sees the text.
fn codepoint_table(index: usize, bytes: &[u8]) -> Result<Vec<usize>> {
    let mut table = Vec::new();
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
        table.push(decoded.offset);
    }
    Ok(table)
}
