//! Class detectors: per-tile measurement of target-class presence.
//!
//! Five detector kinds, selected by configuration and never by inspecting
//! tile content. Mask detectors answer "which pixels belong to the class";
//! metric detectors answer "how much linear feature is present". Each is a
//! pure function of the tile and its parameters; the optional overlay sketch
//! is a side-channel that never influences the returned value.
//!
//! Adding a detector means adding a variant and a module — no central
//! conditional grows.

pub mod color_range;
pub mod contour;
pub mod edge_density;
pub mod gray_threshold;
pub mod hough;

pub use color_range::ColorRangeParams;
pub use contour::ContourLengthParams;
pub use edge_density::EdgeDensityParams;
pub use gray_threshold::GrayThresholdParams;
pub use hough::{HoughLinesParams, LineSegment};

use crate::overlay::TileSketch;
use crate::raster::{Mask, RgbView};
use serde::{Deserialize, Serialize};

/// Raw per-tile measurement, before quantization.
#[derive(Clone, Debug)]
pub enum Detection {
    /// Binary membership mask, same shape as the tile.
    Mask(Mask),
    /// Summed contour/line length in pixels.
    Length(f32),
}

/// Detector selection plus its numeric parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DetectorConfig {
    /// HSV band membership (vegetation and similar tones).
    ColorRange(ColorRangeParams),
    /// Grayscale intensity threshold (built/paved surface).
    GrayThreshold(GrayThresholdParams),
    /// Edge detection + dilation density (street texture).
    EdgeDensity(EdgeDensityParams),
    /// Paved-tone band contours, summed arc length.
    ContourLength(ContourLengthParams),
    /// Straight line extraction, summed segment length.
    HoughLines(HoughLinesParams),
}

impl DetectorConfig {
    /// Stable kind name, matching the config-file tag.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ColorRange(_) => "color_range",
            Self::GrayThreshold(_) => "gray_threshold",
            Self::EdgeDensity(_) => "edge_density",
            Self::ContourLength(_) => "contour_length",
            Self::HoughLines(_) => "hough_lines",
        }
    }

    /// Whether this detector produces a length metric (as opposed to a mask).
    pub fn is_metric(&self) -> bool {
        matches!(self, Self::ContourLength(_) | Self::HoughLines(_))
    }

    /// Measure one tile. Pure given (tile, params); the sketch only receives
    /// drawings of what was detected.
    pub fn detect(&self, tile: &RgbView<'_>, sketch: Option<&mut TileSketch<'_>>) -> Detection {
        match self {
            Self::ColorRange(p) => Detection::Mask(color_range::detect(tile, p)),
            Self::GrayThreshold(p) => Detection::Mask(gray_threshold::detect(tile, p)),
            Self::EdgeDensity(p) => Detection::Mask(edge_density::detect(tile, p)),
            Self::ContourLength(p) => Detection::Length(contour::detect(tile, p, sketch)),
            Self::HoughLines(p) => Detection::Length(hough::detect(tile, p, sketch)),
        }
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self::ColorRange(ColorRangeParams::default())
    }
}
