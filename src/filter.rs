//! Separable 5-tap Gaussian smoothing.
//!
//! Used to soften a binary band mask before edge extraction so that ragged
//! mask borders do not shred into many short contours. Borders clamp
//! (replicate).

use crate::raster::{GrayImage, GrayView};

/// Normalised 5-tap Gaussian kernel `[1, 4, 6, 4, 1] / 16`.
const GAUSSIAN_5TAP: [f32; 5] = [0.0625, 0.25, 0.375, 0.25, 0.0625];

/// Two-pass (horizontal then vertical) 5-tap Gaussian blur.
pub fn gaussian5_blur(src: &GrayView<'_>) -> GrayImage {
    let w = src.w;
    let h = src.h;
    let mut tmp = vec![0.0f32; w * h];
    let mut out = GrayImage::new(w, h);
    if w == 0 || h == 0 {
        return out;
    }

    for y in 0..h {
        let row = src.row(y);
        for x in 0..w {
            let mut acc = 0.0;
            for (k, tap) in GAUSSIAN_5TAP.iter().enumerate() {
                let xi = (x + k).saturating_sub(2).min(w - 1);
                acc += tap * f32::from(row[xi]);
            }
            tmp[y * w + x] = acc;
        }
    }

    for y in 0..h {
        for x in 0..w {
            let mut acc = 0.0;
            for (k, tap) in GAUSSIAN_5TAP.iter().enumerate() {
                let yi = (y + k).saturating_sub(2).min(h - 1);
                acc += tap * tmp[yi * w + x];
            }
            out.set(x, y, acc.round().clamp(0.0, 255.0) as u8);
        }
    }

    out
}
