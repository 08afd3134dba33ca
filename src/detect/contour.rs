//! Contour-length detector for paved/road surfaces.
//!
//! Isolates a gray/paved HSV band, optionally softens the band mask,
//! extracts Canny edges and traces them into 8-connected chains. The metric
//! is the summed polyline length of chains strictly longer than
//! `min_length`; short fragments are noise and do not count.
//!
//! The band bounds are configuration, not constants: field setups disagree
//! on how dark "paved" starts, so the value-channel low bound in particular
//! is a tuning knob.

use crate::edges::canny;
use crate::filter::gaussian5_blur;
use crate::overlay::{TileSketch, GREEN};
use crate::raster::{rgb_to_hsv, HsvRange, Mask, RgbView};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContourLengthParams {
    /// Gray/paved tone window (low saturation, mid-to-high value).
    pub band: HsvRange,
    /// Soften the band mask with a 5-tap Gaussian before edge extraction.
    pub smooth: bool,
    pub canny_low: f32,
    pub canny_high: f32,
    /// Chains must be strictly longer than this to contribute.
    pub min_length: f32,
}

impl Default for ContourLengthParams {
    fn default() -> Self {
        Self {
            band: HsvRange {
                low: [0, 0, 85],
                high: [180, 30, 250],
            },
            smooth: false,
            canny_low: 50.0,
            canny_high: 150.0,
            min_length: 50.0,
        }
    }
}

pub fn detect(
    tile: &RgbView<'_>,
    params: &ContourLengthParams,
    mut sketch: Option<&mut TileSketch<'_>>,
) -> f32 {
    let mut band = Mask::new(tile.w, tile.h);
    for y in 0..tile.h {
        let row = tile.row(y);
        for (x, px) in row.chunks_exact(3).enumerate() {
            if params.band.contains(rgb_to_hsv(px[0], px[1], px[2])) {
                band.set(x, y);
            }
        }
    }

    let edges = if params.smooth {
        let softened = gaussian5_blur(&band.as_gray_view());
        canny(&softened.as_view(), params.canny_low, params.canny_high)
    } else {
        canny(&band.as_gray_view(), params.canny_low, params.canny_high)
    };

    let mut total = 0.0;
    for chain in trace_chains(&edges) {
        let length = polyline_length(&chain);
        if length > params.min_length {
            total += length;
            if let Some(s) = sketch.as_deref_mut() {
                s.polyline(&chain, GREEN);
            }
        }
    }
    total
}

// Neighbor order for chain walking; fixed so traces are deterministic.
const DX: [isize; 8] = [1, 1, 0, -1, -1, -1, 0, 1];
const DY: [isize; 8] = [0, -1, -1, -1, 0, 1, 1, 1];

/// Trace edge pixels into 8-connected open chains.
///
/// Each chain is grown from a row-major seed in both directions, always
/// stepping to the first unvisited neighbor in the fixed order above. A
/// closed ring comes back as one chain whose walk stops next to the seed.
fn trace_chains(edges: &Mask) -> Vec<Vec<(usize, usize)>> {
    let mut visited = vec![false; edges.len()];
    let mut chains = Vec::new();

    for y in 0..edges.h {
        for x in 0..edges.w {
            if visited[y * edges.w + x] || !edges.get(x, y) {
                continue;
            }
            visited[y * edges.w + x] = true;

            let forward = walk(edges, &mut visited, (x, y));
            let backward = walk(edges, &mut visited, (x, y));

            let mut chain: Vec<(usize, usize)> = backward.into_iter().rev().collect();
            chain.push((x, y));
            chain.extend(forward);
            chains.push(chain);
        }
    }

    chains
}

fn walk(edges: &Mask, visited: &mut [bool], start: (usize, usize)) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    let (mut cx, mut cy) = start;
    'grow: loop {
        for k in 0..8 {
            let nx = cx as isize + DX[k];
            let ny = cy as isize + DY[k];
            if nx < 0 || ny < 0 || nx >= edges.w as isize || ny >= edges.h as isize {
                continue;
            }
            let (nx, ny) = (nx as usize, ny as usize);
            if edges.get(nx, ny) && !visited[ny * edges.w + nx] {
                visited[ny * edges.w + nx] = true;
                out.push((nx, ny));
                cx = nx;
                cy = ny;
                continue 'grow;
            }
        }
        break;
    }
    out
}

/// Sum of Euclidean step lengths along a chain (1 or sqrt(2) per step).
fn polyline_length(chain: &[(usize, usize)]) -> f32 {
    chain
        .windows(2)
        .map(|pair| {
            let dx = pair[1].0 as f32 - pair[0].0 as f32;
            let dy = pair[1].1 as f32 - pair[0].1 as f32;
            (dx * dx + dy * dy).sqrt()
        })
        .sum()
}
