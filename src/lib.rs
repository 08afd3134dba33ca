#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod analyzer;
pub mod config;
pub mod detect;
pub mod error;
pub mod export;
pub mod grid;
pub mod overlay;
pub mod quantize;
pub mod raster;
pub mod types;

// Building blocks used by the detectors – public for tooling, but the
// detector configs are the supported way in.
pub mod edges;
pub mod filter;
pub mod morph;

// --- High-level re-exports -------------------------------------------------

// Main entry points: analyzer + results.
pub use crate::analyzer::{AnalysisParams, Analyzer};
pub use crate::types::{AnalysisReport, CoverageMatrix};

// Configuration vocabulary.
pub use crate::detect::DetectorConfig;
pub use crate::error::AnalysisError;
pub use crate::grid::GridSpec;
pub use crate::quantize::QuantizerConfig;

// Diagnostic side-channel.
pub use crate::overlay::Overlay;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use landcover_grid::prelude::*;
/// use landcover_grid::raster::RgbImage;
///
/// # fn main() {
/// let image = RgbImage::new(640, 480);
/// let analyzer = Analyzer::new(AnalysisParams::default());
/// match analyzer.analyze(&image) {
///     Ok(report) => println!("tiles={} latency_ms={:.3}",
///         report.matrix.rows() * report.matrix.cols(), report.latency_ms),
///     Err(err) => eprintln!("analysis failed: {err}"),
/// }
/// # }
/// ```
pub mod prelude {
    pub use crate::analyzer::{AnalysisParams, Analyzer};
    pub use crate::detect::DetectorConfig;
    pub use crate::grid::GridSpec;
    pub use crate::overlay::Overlay;
    pub use crate::quantize::QuantizerConfig;
    pub use crate::types::{AnalysisReport, CoverageMatrix};
}
