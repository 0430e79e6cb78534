//! Vectorized Unicode text statistics and boundary location.
//!
//! `rapid-textstat` analyzes vectors of text elements two ways:
//!
//! - **Aggregate statistics** — [`general_stats`] counts lines, codepoints,
//!   and non-white-space codepoints; [`latex_stats`] runs a Kile-style
//!   LaTeX word count (words, commands, environments). Both accumulate a
//!   single record across the whole input vector.
//! - **Boundary location** — [`locate_boundaries`] and [`locate_words`]
//!   find character, line-break, sentence, or word boundaries per element
//!   using the `icu_segmenter` engines, returning spans in 1-based
//!   codepoint coordinates with exclusive ends.
//!
//! Text elements arrive as raw bytes plus an NA flag ([`TextElement`]);
//! missing elements are skipped by the accumulators and surface as `None`
//! rows in boundary output. Every element is one logical line — embedded
//! line feeds and malformed UTF-8 fail the whole call (see [`TextError`]).
//!
//! # Examples
//!
//! ```rust
//! use rapid_textstat::{general_stats, locate_words, Span, TextElement};
//!
//! let texts = [TextElement::from("Hello, world!"), TextElement::Missing];
//!
//! let stats = general_stats(&texts)?;
//! assert_eq!(stats.lines, 1); // missing elements count nothing
//! assert_eq!(stats.chars, 13);
//! assert_eq!(stats.chars_non_white, 12);
//!
//! let words = locate_words(&texts, "en")?;
//! assert_eq!(
//!     words[0].as_deref(),
//!     Some(&[Span::new(1, 6), Span::new(8, 13)][..])
//! );
//! assert_eq!(words[1], None); // NA in, NA out
//! # Ok::<(), rapid_textstat::TextError>(())
//! ```
//!
//! ```rust
//! use rapid_textstat::{latex_stats, TextElement};
//!
//! let stats = latex_stats(&[TextElement::from(r"\begin{equation}x\end{equation}")])?;
//! assert_eq!(stats.environments, 1); // \end never counts
//! assert_eq!(stats.words, 1);
//! # Ok::<(), rapid_textstat::TextError>(())
//! ```
//!
//! # Feature flags
//!
//! - `tracing` — spans around batch operations and a warning on fractional
//!   vector recycling. Off by default; the default build carries no logging
//!   cost.

pub mod batch;
pub mod error;
pub mod scan;
pub mod segment;
pub mod stats;
pub mod types;

pub use batch::{
    general_stats, latex_stats, locate_boundaries, locate_words, parse_boundary_kinds,
    recycling_length,
};
pub use error::{Result, TextError};
pub use types::{BoundaryKind, GeneralStats, LatexStats, Span, TextElement};
