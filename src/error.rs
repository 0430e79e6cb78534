//! Error taxonomy.
//!
//! Every hard failure aborts the whole batch call — no partial results are
//! returned. Engine handles and scratch buffers are owned by the call and
//! released by `Drop` on every exit path, so an early `?` return cannot leak
//! them. Missing (NA) elements are not errors and never appear here.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, TextError>;

/// All failure modes of the batch operations.
///
/// Where feasible each variant carries the offending element index and
/// enough context for a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextError {
    /// An unrecognized boundary-kind label. Raised while validating
    /// arguments, before any element is processed.
    #[error(
        "invalid boundary kind `{label}` at index {index}; expected one of \
         character, line-break, sentence, word"
    )]
    InvalidBoundaryKind { label: String, index: usize },

    /// A text element is not valid UTF-8.
    #[error("malformed UTF-8 sequence in text element {index} at byte offset {offset}")]
    MalformedEncoding { index: usize, offset: usize },

    /// A line feed (U+000A) inside a text element. Elements are single
    /// logical lines, so this is a contract violation that fails the call,
    /// not a per-element anomaly.
    #[error("text element {index} contains a line feed (U+000A) at byte offset {offset}")]
    EmbeddedNewline { index: usize, offset: usize },

    /// The boundary-analysis engine or locale resolution failed.
    #[error("boundary engine failure: {detail}")]
    Engine { detail: String },
}
