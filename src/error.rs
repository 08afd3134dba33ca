//! Error type shared by the analysis core.
//!
//! Every failure here is a configuration or precondition bug on the caller's
//! side; classification itself is a pure function of its inputs, so nothing
//! is retried or masked. Degenerate tiles (zero pixels, zero metric
//! denominator) are not errors — they quantize to 0 by convention.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// Grid rows/cols must both be positive.
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },

    /// More rows than image height (or cols than width) would produce
    /// zero-area tiles.
    #[error("grid {rows}x{cols} does not fit a {width}x{height} image")]
    GridTooFine {
        rows: usize,
        cols: usize,
        width: usize,
        height: usize,
    },

    /// The loader handed us nothing to analyze.
    #[error("no input image available")]
    ImageUnavailable,

    /// The configured quantization policy cannot consume the configured
    /// detector's output (mask policy on a length metric or vice versa).
    #[error("policy `{policy}` cannot quantize output of detector `{detector}`")]
    PolicyMismatch {
        detector: &'static str,
        policy: &'static str,
    },

    /// Cooperative cancellation was requested between tile iterations.
    #[error("analysis cancelled")]
    Cancelled,
}
