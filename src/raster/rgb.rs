//! Owned interleaved 8-bit RGB image and the borrowed view a tile is cut
//! from.
//!
//! The view carries a stride in pixels, so a tile is just a window into the
//! parent buffer; nothing is copied when the grid is walked.

use crate::raster::gray::GrayImage;

const CHANNELS: usize = 3;

/// Owned interleaved RGB buffer, row-major, stride == width.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbImage {
    pub w: usize,
    pub h: usize,
    pub data: Vec<u8>,
}

impl RgbImage {
    /// Black image of size `w x h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0u8; CHANNELS * w * h],
        }
    }

    /// Wrap raw interleaved bytes; `None` when the length does not match.
    pub fn from_raw(w: usize, h: usize, data: Vec<u8>) -> Option<Self> {
        (data.len() == CHANNELS * w * h).then_some(Self { w, h, data })
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let i = CHANNELS * (y * self.w + x);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    #[inline]
    pub fn put_pixel(&mut self, x: usize, y: usize, px: [u8; 3]) {
        let i = CHANNELS * (y * self.w + x);
        self.data[i..i + 3].copy_from_slice(&px);
    }

    /// Borrow the whole image as a view.
    pub fn as_view(&self) -> RgbView<'_> {
        RgbView {
            w: self.w,
            h: self.h,
            stride: self.w,
            data: &self.data,
        }
    }
}

/// Borrowed RGB window. `stride` is in pixels; rows are `3 * w` bytes.
#[derive(Clone, Copy, Debug)]
pub struct RgbView<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize,
    pub data: &'a [u8],
}

impl<'a> RgbView<'a> {
    /// Row `y` as interleaved bytes (`3 * w` long).
    #[inline]
    pub fn row(&self, y: usize) -> &'a [u8] {
        let start = CHANNELS * y * self.stride;
        &self.data[start..start + CHANNELS * self.w]
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let i = CHANNELS * (y * self.stride + x);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Window of size `w x h` with its top-left corner at (x0, y0).
    /// The sub-view shares the parent stride.
    pub fn sub_view(&self, x0: usize, y0: usize, w: usize, h: usize) -> RgbView<'a> {
        debug_assert!(x0 + w <= self.w && y0 + h <= self.h);
        let start = CHANNELS * (y0 * self.stride + x0);
        RgbView {
            w,
            h,
            stride: self.stride,
            data: &self.data[start..],
        }
    }

    /// Single-channel intensity via BT.601 luma weights
    /// (0.299 R + 0.587 G + 0.114 B), rounded to u8.
    pub fn to_gray(&self) -> GrayImage {
        let mut out = GrayImage::new(self.w, self.h);
        for y in 0..self.h {
            let row = self.row(y);
            let out_row = out.row_mut(y);
            for (x, px) in row.chunks_exact(CHANNELS).enumerate() {
                let luma =
                    0.299 * f32::from(px[0]) + 0.587 * f32::from(px[1]) + 0.114 * f32::from(px[2]);
                out_row[x] = luma.round().clamp(0.0, 255.0) as u8;
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_view_addresses_parent_pixels() {
        let mut img = RgbImage::new(8, 6);
        img.put_pixel(5, 3, [10, 20, 30]);
        let view = img.as_view().sub_view(4, 2, 3, 3);
        assert_eq!(view.pixel(1, 1), [10, 20, 30]);
        assert_eq!(view.row(1)[3..6], [10, 20, 30]);
    }

    #[test]
    fn gray_conversion_uses_luma_weights() {
        let mut img = RgbImage::new(2, 1);
        img.put_pixel(0, 0, [255, 255, 255]);
        img.put_pixel(1, 0, [0, 255, 0]);
        let gray = img.as_view().to_gray();
        assert_eq!(gray.get(0, 0), 255);
        assert_eq!(gray.get(1, 0), 150); // 0.587 * 255
    }
}
