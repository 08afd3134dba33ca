//! HSV color-range detector.
//!
//! Converts each tile pixel to HSV and masks those with all three channels
//! inside an inclusive band. The default band is the green window used for
//! vegetation cover.

use crate::raster::{rgb_to_hsv, HsvRange, Mask, RgbView};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorRangeParams {
    pub band: HsvRange,
}

impl Default for ColorRangeParams {
    fn default() -> Self {
        // Green tones; hue is on the halved [0, 180) scale.
        Self {
            band: HsvRange {
                low: [35, 30, 30],
                high: [90, 255, 255],
            },
        }
    }
}

pub fn detect(tile: &RgbView<'_>, params: &ColorRangeParams) -> Mask {
    let mut mask = Mask::new(tile.w, tile.h);
    for y in 0..tile.h {
        let row = tile.row(y);
        for (x, px) in row.chunks_exact(3).enumerate() {
            if params.band.contains(rgb_to_hsv(px[0], px[1], px[2])) {
                mask.set(x, y);
            }
        }
    }
    mask
}
