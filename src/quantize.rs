//! Coverage quantization: converts a detector's raw output into a value in
//! `{0, 25, 50, 75, 100}`.
//!
//! The rounding ladders are ordered `(bound, value)` tables evaluated
//! top-down, so thresholds are data rather than nested conditionals.
//!
//! Conventions, fixed and tested:
//! - pixel-ratio bands use inclusive upper bounds (`ratio <= 12.5` is still
//!   25), with the `ratio < threshold → 0` gate evaluated first;
//! - quadrant coverage uses a strict `ratio > threshold` comparison;
//! - length-ratio comparisons are all inclusive (`>=`).
//!
//! A tile with zero pixels, or a zero length threshold, quantizes to 0 by
//! definition — never a division fault.

use crate::detect::Detection;
use crate::raster::Mask;
use serde::{Deserialize, Serialize};

/// Policy selection plus its threshold.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum QuantizerConfig {
    /// Whole-tile masked-pixel ratio against the band ladder.
    PixelRatio { threshold: f32 },
    /// Per-quadrant vote: 25 points per quadrant above the threshold.
    QuadrantMajority { threshold: f32 },
    /// Length metric against fractions of the threshold.
    LengthRatio { threshold: f32 },
}

impl QuantizerConfig {
    /// Stable policy name, matching the config-file tag.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PixelRatio { .. } => "pixel_ratio",
            Self::QuadrantMajority { .. } => "quadrant_majority",
            Self::LengthRatio { .. } => "length_ratio",
        }
    }

    /// Whether this policy consumes a length metric (as opposed to a mask).
    pub fn wants_metric(&self) -> bool {
        matches!(self, Self::LengthRatio { .. })
    }

    /// Quantize a detection. The analyzer guarantees the pairing matches;
    /// a mismatch here is a programming error.
    pub(crate) fn quantize(&self, detection: &Detection) -> u8 {
        match (self, detection) {
            (Self::PixelRatio { threshold }, Detection::Mask(mask)) => {
                quantize_pixel_ratio(mask, *threshold)
            }
            (Self::QuadrantMajority { threshold }, Detection::Mask(mask)) => {
                quantize_quadrants(mask, *threshold)
            }
            (Self::LengthRatio { threshold }, Detection::Length(metric)) => {
                quantize_length(*metric, *threshold)
            }
            _ => unreachable!("detector/policy pairing is validated before tiles run"),
        }
    }
}

impl Default for QuantizerConfig {
    fn default() -> Self {
        Self::PixelRatio { threshold: 15.0 }
    }
}

/// Band ladder for ratio policies: first bound admitting the ratio wins;
/// ratios above the last bound saturate to 100.
const RATIO_BANDS: [(f32, u8); 3] = [(12.5, 25), (37.5, 50), (62.5, 75)];

/// Length ladder: fractions of the threshold, highest first.
const LENGTH_BANDS: [(f32, u8); 4] = [(1.0, 100), (0.75, 75), (0.5, 50), (0.25, 25)];

/// Percentage of masked pixels in `[x0, x1) x [y0, y1)`; 0 for empty regions.
fn region_ratio(mask: &Mask, x0: usize, x1: usize, y0: usize, y1: usize) -> f32 {
    let total = (x1 - x0) * (y1 - y0);
    if total == 0 {
        return 0.0;
    }
    100.0 * mask.count_in(x0, x1, y0, y1) as f32 / total as f32
}

/// Whole-tile pixel ratio, gated then banded.
pub fn quantize_pixel_ratio(mask: &Mask, threshold: f32) -> u8 {
    if mask.is_empty() {
        return 0;
    }
    let ratio = 100.0 * mask.count_nonzero() as f32 / mask.len() as f32;
    if ratio < threshold {
        return 0;
    }
    for (bound, value) in RATIO_BANDS {
        if ratio <= bound {
            return value;
        }
    }
    100
}

/// Quadrant vote: the mask is floor-halved in each direction (any odd
/// remainder row/column belongs to the second half); each quadrant whose own
/// ratio strictly exceeds the threshold contributes 25.
pub fn quantize_quadrants(mask: &Mask, threshold: f32) -> u8 {
    if mask.is_empty() {
        return 0;
    }
    let hx = mask.w / 2;
    let hy = mask.h / 2;
    let quadrants = [
        (0, hx, 0, hy),
        (hx, mask.w, 0, hy),
        (0, hx, hy, mask.h),
        (hx, mask.w, hy, mask.h),
    ];
    let covered = quadrants
        .iter()
        .filter(|&&(x0, x1, y0, y1)| region_ratio(mask, x0, x1, y0, y1) > threshold)
        .count();
    (covered * 25) as u8
}

/// Length metric against the ladder of threshold fractions.
pub fn quantize_length(metric: f32, threshold: f32) -> u8 {
    if threshold <= 0.0 {
        return 0;
    }
    for (fraction, value) in LENGTH_BANDS {
        if metric >= fraction * threshold {
            return value;
        }
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mask with exactly `set` of `total` pixels on, in a `w x h` plane.
    fn ratio_mask(w: usize, h: usize, set: usize) -> Mask {
        let mut m = Mask::new(w, h);
        let mut left = set;
        'fill: for y in 0..h {
            for x in 0..w {
                if left == 0 {
                    break 'fill;
                }
                m.set(x, y);
                left -= 1;
            }
        }
        m
    }

    #[test]
    fn ratio_bands_have_inclusive_upper_bounds() {
        // 10000 pixels: counts map directly to ratio in hundredths of a percent.
        assert_eq!(quantize_pixel_ratio(&ratio_mask(100, 100, 1250), 10.0), 25); // 12.5
        assert_eq!(quantize_pixel_ratio(&ratio_mask(100, 100, 1251), 10.0), 50); // 12.51
        assert_eq!(quantize_pixel_ratio(&ratio_mask(100, 100, 3750), 10.0), 50); // 37.5
        assert_eq!(quantize_pixel_ratio(&ratio_mask(100, 100, 3751), 10.0), 75); // 37.51
        assert_eq!(quantize_pixel_ratio(&ratio_mask(100, 100, 6250), 10.0), 75); // 62.5
        assert_eq!(quantize_pixel_ratio(&ratio_mask(100, 100, 6251), 10.0), 100); // 62.51
    }

    #[test]
    fn ratio_gate_applies_before_the_ladder() {
        // 14% is below a threshold of 15 even though it lands in a band.
        assert_eq!(quantize_pixel_ratio(&ratio_mask(100, 10, 140), 15.0), 0);
        assert_eq!(quantize_pixel_ratio(&ratio_mask(100, 10, 150), 15.0), 50);
    }

    #[test]
    fn empty_mask_quantizes_to_zero() {
        assert_eq!(quantize_pixel_ratio(&Mask::new(0, 0), 10.0), 0);
        assert_eq!(quantize_quadrants(&Mask::new(0, 0), 10.0), 0);
    }

    #[test]
    fn two_full_quadrants_give_half_coverage() {
        // Left half fully covered: top-left and bottom-left quadrants at
        // 100%, the right ones at 0%.
        let mut m = Mask::new(8, 8);
        for y in 0..8 {
            for x in 0..4 {
                m.set(x, y);
            }
        }
        assert_eq!(quantize_quadrants(&m, 20.0), 50);
    }

    #[test]
    fn quadrant_comparison_is_strict() {
        // Exactly 20% in one quadrant: 4x4 quadrant has 16 pixels, 3.2 is
        // not reachable, so use a 10x10 plane with 5 of 25 set (20%).
        let mut m = Mask::new(10, 10);
        for i in 0..5 {
            m.set(i, 0);
        }
        assert_eq!(quantize_quadrants(&m, 20.0), 0);
        assert_eq!(quantize_quadrants(&m, 19.9), 25);
    }

    #[test]
    fn odd_remainders_belong_to_the_second_half() {
        // 5x5: first halves are [0,2), second halves [2,5).
        let mut m = Mask::new(5, 5);
        for y in 2..5 {
            for x in 2..5 {
                m.set(x, y);
            }
        }
        // Only the bottom-right quadrant (3x3, fully covered) exceeds 50%.
        assert_eq!(quantize_quadrants(&m, 50.0), 25);
    }

    #[test]
    fn length_ladder_is_inclusive() {
        assert_eq!(quantize_length(50.0, 50.0), 100);
        assert_eq!(quantize_length(37.5, 50.0), 75);
        assert_eq!(quantize_length(25.0, 50.0), 50);
        assert_eq!(quantize_length(12.5, 50.0), 25);
        assert_eq!(quantize_length(12.4, 50.0), 0);
        assert_eq!(quantize_length(0.0, 50.0), 0);
    }

    #[test]
    fn zero_length_threshold_quantizes_to_zero() {
        assert_eq!(quantize_length(10.0, 0.0), 0);
    }
}
