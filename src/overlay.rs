//! Diagnostic overlay: detected features drawn onto a copy of the input
//! image, for human inspection only.
//!
//! Each tile draws through a [`TileSketch`] that offsets coordinates by the
//! tile origin, so writes stay inside the tile's own rectangle. Nothing the
//! overlay records feeds back into the analysis.

use crate::grid::TileGrid;
use crate::raster::RgbImage;

/// Contour/polyline color (green).
pub const GREEN: [u8; 3] = [0, 255, 0];
/// Line-segment color (red).
pub const RED: [u8; 3] = [255, 0, 0];

/// Mutable drawing canvas over a copy of the source image.
#[derive(Clone, Debug)]
pub struct Overlay {
    image: RgbImage,
}

impl Overlay {
    /// Start from a copy of the source image.
    pub fn of(source: &RgbImage) -> Self {
        Self {
            image: source.clone(),
        }
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Draw the tile boundaries across the full image, to verify grid
    /// alignment against the photograph.
    pub fn draw_grid(&mut self, grid: &TileGrid, color: [u8; 3]) {
        let w = self.image.w;
        let h = self.image.h;
        for row in 0..=grid.rows() {
            let y = (row * grid.cell_height()).min(h.saturating_sub(1));
            for x in 0..w {
                self.image.put_pixel(x, y, color);
            }
        }
        for col in 0..=grid.cols() {
            let x = (col * grid.cell_width()).min(w.saturating_sub(1));
            for y in 0..h {
                self.image.put_pixel(x, y, color);
            }
        }
    }

    /// Sketch handle translating tile-local coordinates by (x0, y0).
    pub(crate) fn tile_sketch(&mut self, x0: usize, y0: usize) -> TileSketch<'_> {
        TileSketch {
            overlay: self,
            x0,
            y0,
        }
    }

    fn put(&mut self, x: usize, y: usize, color: [u8; 3]) {
        if x < self.image.w && y < self.image.h {
            self.image.put_pixel(x, y, color);
        }
    }

    fn draw_segment_px(&mut self, p0: [f32; 2], p1: [f32; 2], color: [u8; 3]) {
        let dx = p1[0] - p0[0];
        let dy = p1[1] - p0[1];
        let steps = (dx.abs().max(dy.abs()).ceil() as usize).max(1);
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let x = p0[0] + dx * t;
            let y = p0[1] + dy * t;
            if x >= 0.0 && y >= 0.0 {
                self.put(x.round() as usize, y.round() as usize, color);
            }
        }
    }
}

/// Per-tile drawing surface handed to detectors; every coordinate is
/// tile-local and shifted by the tile origin before rasterisation.
pub struct TileSketch<'a> {
    overlay: &'a mut Overlay,
    x0: usize,
    y0: usize,
}

impl TileSketch<'_> {
    /// Draw a straight segment between two tile-local points.
    pub fn segment(&mut self, p0: [f32; 2], p1: [f32; 2], color: [u8; 3]) {
        let off = [self.x0 as f32, self.y0 as f32];
        self.overlay.draw_segment_px(
            [p0[0] + off[0], p0[1] + off[1]],
            [p1[0] + off[0], p1[1] + off[1]],
            color,
        );
    }

    /// Draw a polyline through tile-local integer points.
    pub fn polyline(&mut self, points: &[(usize, usize)], color: [u8; 3]) {
        for pair in points.windows(2) {
            let p0 = [pair[0].0 as f32, pair[0].1 as f32];
            let p1 = [pair[1].0 as f32, pair[1].1 as f32];
            self.segment(p0, p1, color);
        }
        if points.len() == 1 {
            self.overlay
                .put(points[0].0 + self.x0, points[0].1 + self.y0, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sketch_offsets_by_tile_origin() {
        let base = RgbImage::new(10, 10);
        let mut overlay = Overlay::of(&base);
        let mut sketch = overlay.tile_sketch(4, 4);
        sketch.polyline(&[(0, 0), (3, 0)], RED);
        let img = overlay.image();
        for x in 4..=7 {
            assert_eq!(img.pixel(x, 4), RED);
        }
        assert_eq!(img.pixel(3, 4), [0, 0, 0]);
    }

    #[test]
    fn segment_is_clipped_to_canvas() {
        let base = RgbImage::new(5, 5);
        let mut overlay = Overlay::of(&base);
        let mut sketch = overlay.tile_sketch(0, 0);
        sketch.segment([0.0, 0.0], [20.0, 0.0], GREEN);
        assert_eq!(overlay.image().pixel(4, 0), GREEN);
    }
}
