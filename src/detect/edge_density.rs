//! Edge-density detector.
//!
//! Intensity → Canny edges → binary dilation with the fixed 3x3 square
//! kernel. The dilated edge mask approximates the area taken by street
//! texture; a pixel-ratio policy then turns it into coverage.

use crate::edges::canny;
use crate::morph::dilate3x3_n;
use crate::raster::{Mask, RgbView};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeDensityParams {
    pub canny_low: f32,
    pub canny_high: f32,
    pub dilate_iterations: usize,
}

impl Default for EdgeDensityParams {
    fn default() -> Self {
        Self {
            canny_low: 50.0,
            canny_high: 150.0,
            dilate_iterations: 1,
        }
    }
}

pub fn detect(tile: &RgbView<'_>, params: &EdgeDensityParams) -> Mask {
    let gray = tile.to_gray();
    let edges = canny(&gray.as_view(), params.canny_low, params.canny_high);
    dilate3x3_n(&edges, params.dilate_iterations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::RgbImage;

    #[test]
    fn contrast_boundary_produces_dilated_edges() {
        let mut img = RgbImage::new(16, 16);
        for y in 0..16 {
            for x in 8..16 {
                img.put_pixel(x, y, [255, 255, 255]);
            }
        }
        let mask = detect(&img.as_view(), &EdgeDensityParams::default());
        // The thin Canny response widens to a 3-pixel band.
        assert!(mask.get(6, 8));
        assert!(mask.get(7, 8));
        assert!(mask.get(8, 8));
        assert!(!mask.get(2, 8));
    }

    #[test]
    fn uniform_tile_is_empty() {
        let img = RgbImage::new(16, 16);
        let mask = detect(&img.as_view(), &EdgeDensityParams::default());
        assert_eq!(mask.count_nonzero(), 0);
    }
}
