use landcover_grid::raster::RgbImage;

/// Solid-color RGB image.
pub fn solid_rgb(width: usize, height: usize, color: [u8; 3]) -> RgbImage {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut img = RgbImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            img.put_pixel(x, y, color);
        }
    }
    img
}

/// Image that divides evenly into a `rows x cols` grid, with the top-left
/// tile painted `target` and every other pixel `other`.
pub fn top_left_tile_rgb(
    width: usize,
    height: usize,
    rows: usize,
    cols: usize,
    target: [u8; 3],
    other: [u8; 3],
) -> RgbImage {
    assert_eq!(height % rows, 0, "height must divide evenly");
    assert_eq!(width % cols, 0, "width must divide evenly");
    let cell_h = height / rows;
    let cell_w = width / cols;

    let mut img = solid_rgb(width, height, other);
    for y in 0..cell_h {
        for x in 0..cell_w {
            img.put_pixel(x, y, target);
        }
    }
    img
}

/// Deterministic mixed-content image: diagonal color ramps with a few
/// bright blocks, enough structure to exercise every detector.
pub fn textured_rgb(width: usize, height: usize) -> RgbImage {
    let mut img = RgbImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let r = ((x * 7 + y * 3) % 256) as u8;
            let g = ((x * 2 + y * 11) % 256) as u8;
            let b = ((x + y) % 256) as u8;
            img.put_pixel(x, y, [r, g, b]);
        }
    }
    for by in (0..height).step_by(24) {
        for bx in (0..width).step_by(24) {
            for y in by..(by + 8).min(height) {
                for x in bx..(bx + 8).min(width) {
                    img.put_pixel(x, y, [230, 230, 230]);
                }
            }
        }
    }
    img
}
