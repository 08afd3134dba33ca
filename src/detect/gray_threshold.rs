//! Grayscale threshold detector.
//!
//! Converts the tile to intensity and masks pixels at or above the
//! threshold. Bright built/paved surfaces separate from darker ground this
//! way on typical aerial photographs.

use crate::raster::{Mask, RgbView};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrayThresholdParams {
    pub threshold: u8,
}

impl Default for GrayThresholdParams {
    fn default() -> Self {
        Self { threshold: 100 }
    }
}

pub fn detect(tile: &RgbView<'_>, params: &GrayThresholdParams) -> Mask {
    let gray = tile.to_gray();
    let mut mask = Mask::new(gray.w, gray.h);
    for y in 0..gray.h {
        let row = gray.row(y);
        for (x, &v) in row.iter().enumerate() {
            if v >= params.threshold {
                mask.set(x, y);
            }
        }
    }
    mask
}
