//! Hue/saturation/value conversion and inclusive band tests.
//!
//! Channels use the 8-bit ranges established by mainstream imaging tooling:
//! H in [0, 180) (degrees halved), S and V in [0, 255]. Band bounds written
//! against that convention (e.g. a green hue window of 35..90) keep their
//! meaning here.

use serde::{Deserialize, Serialize};

/// One pixel in HSV space, 8-bit ranges (H halved to fit [0, 180)).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

/// Convert an RGB pixel to HSV.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let (rf, gf, bf) = (f32::from(r), f32::from(g), f32::from(b));
    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let delta = max - min;

    let v = max;
    let s = if max > 0.0 { 255.0 * delta / max } else { 0.0 };

    let mut hue_deg = if delta <= 0.0 {
        0.0
    } else if max == rf {
        60.0 * (gf - bf) / delta
    } else if max == gf {
        120.0 + 60.0 * (bf - rf) / delta
    } else {
        240.0 + 60.0 * (rf - gf) / delta
    };
    if hue_deg < 0.0 {
        hue_deg += 360.0;
    }

    Hsv {
        h: (hue_deg / 2.0).round().min(180.0) as u8,
        s: s.round().min(255.0) as u8,
        v: v.round().min(255.0) as u8,
    }
}

/// Inclusive per-channel HSV window: a pixel matches when all three channels
/// lie within `[low, high]`. Channel order is `[h, s, v]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HsvRange {
    pub low: [u8; 3],
    pub high: [u8; 3],
}

impl HsvRange {
    #[inline]
    pub fn contains(&self, px: Hsv) -> bool {
        px.h >= self.low[0]
            && px.h <= self.high[0]
            && px.s >= self.low[1]
            && px.s <= self.high[1]
            && px.v >= self.low[2]
            && px.v <= self.high[2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_colors() {
        assert_eq!(rgb_to_hsv(255, 0, 0), Hsv { h: 0, s: 255, v: 255 });
        assert_eq!(rgb_to_hsv(0, 255, 0), Hsv { h: 60, s: 255, v: 255 });
        assert_eq!(rgb_to_hsv(0, 0, 255), Hsv { h: 120, s: 255, v: 255 });
    }

    #[test]
    fn achromatic_pixels_have_zero_saturation() {
        assert_eq!(rgb_to_hsv(255, 255, 255), Hsv { h: 0, s: 0, v: 255 });
        assert_eq!(
            rgb_to_hsv(128, 128, 128),
            Hsv {
                h: 0,
                s: 0,
                v: 128
            }
        );
        assert_eq!(rgb_to_hsv(0, 0, 0), Hsv { h: 0, s: 0, v: 0 });
    }

    #[test]
    fn band_test_is_inclusive_at_both_bounds() {
        let band = HsvRange {
            low: [35, 30, 30],
            high: [90, 255, 255],
        };
        assert!(band.contains(Hsv { h: 35, s: 30, v: 30 }));
        assert!(band.contains(Hsv {
            h: 90,
            s: 255,
            v: 255
        }));
        assert!(!band.contains(Hsv { h: 34, s: 30, v: 30 }));
        assert!(!band.contains(Hsv { h: 91, s: 255, v: 255 }));
    }
}
