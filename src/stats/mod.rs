//! Aggregate statistics over text-element vectors.
//!
//! Both counters share one result record per call: every non-missing
//! element accumulates into the same [`GeneralStats`](crate::GeneralStats)
//! or [`LatexStats`](crate::LatexStats) — there is deliberately no
//! per-element output shape here, unlike the boundary operations.

pub mod general;
pub mod latex;

pub use general::GeneralStatsCounter;
pub use latex::{LatexState, LatexTokenizer};
