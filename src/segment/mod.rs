//! Boundary segmentation: locale-bound engines and coordinate mapping.
//!
//! [`engine`] wraps the four `icu_segmenter` variants behind one closed
//! type and implements the single-slot instance cache the batch layer
//! relies on. [`index_map`] rewrites the engine's byte-offset spans into
//! the user-facing 1-based codepoint coordinates.

pub mod engine;
pub mod index_map;

pub use engine::{resolve_locale, BreakEngine, EngineCache};
pub use index_map::to_codepoint_spans;
