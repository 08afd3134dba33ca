//! Minimal binary morphology: dilation with a fixed 3x3 square kernel.
//!
//! Out-of-bounds neighbors are treated as background, so features touching
//! the border grow inward only.

use crate::raster::Mask;

/// One dilation pass with the 3x3 square structuring element.
pub fn dilate3x3(src: &Mask) -> Mask {
    let mut out = Mask::new(src.w, src.h);
    if src.is_empty() {
        return out;
    }

    for y in 0..src.h {
        for x in 0..src.w {
            let mut any_set = false;
            'neighbors: for ny in y.saturating_sub(1)..=(y + 1).min(src.h - 1) {
                for nx in x.saturating_sub(1)..=(x + 1).min(src.w - 1) {
                    if src.get(nx, ny) {
                        any_set = true;
                        break 'neighbors;
                    }
                }
            }
            if any_set {
                out.set(x, y);
            }
        }
    }

    out
}

/// Repeated 3x3 dilation. `iterations == 0` returns a copy of the input.
pub fn dilate3x3_n(src: &Mask, iterations: usize) -> Mask {
    let mut out = src.clone();
    for _ in 0..iterations {
        out = dilate3x3(&out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_pixel_grows_to_3x3_block() {
        let mut m = Mask::new(5, 5);
        m.set(2, 2);
        let out = dilate3x3(&m);
        assert_eq!(out.count_nonzero(), 9);
        for y in 1..=3 {
            for x in 1..=3 {
                assert!(out.get(x, y));
            }
        }
        assert!(!out.get(0, 0));
    }

    #[test]
    fn border_pixels_clamp() {
        let mut m = Mask::new(4, 4);
        m.set(0, 0);
        let out = dilate3x3(&m);
        assert_eq!(out.count_nonzero(), 4);
        assert!(out.get(1, 1));
    }

    #[test]
    fn zero_iterations_is_identity() {
        let mut m = Mask::new(3, 3);
        m.set(1, 1);
        assert_eq!(dilate3x3_n(&m, 0), m);
    }
}
