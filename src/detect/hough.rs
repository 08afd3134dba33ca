//! Probabilistic-style line extraction for the road-network detector.
//!
//! Intensity → Canny → Hough transform. Accumulator peaks (vote threshold +
//! 3x3 non-maximum suppression in (rho, theta) space) give candidate lines;
//! each line is walked across the tile collecting gap-tolerant runs of edge
//! pixels, and every run at least `min_line_length` long becomes a segment.
//! The metric is the summed Euclidean length of the returned segments.

use crate::edges::canny;
use crate::overlay::{TileSketch, RED};
use crate::raster::{Mask, RgbView};
use serde::{Deserialize, Serialize};

const EPSILON: f32 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoughLinesParams {
    pub canny_low: f32,
    pub canny_high: f32,
    /// Angular resolution of the accumulator, in degrees.
    pub theta_res_deg: f32,
    /// Minimum accumulator votes for a candidate line.
    pub vote_threshold: u32,
    /// Runs shorter than this are discarded.
    pub min_line_length: f32,
    /// Maximum pixel gap bridged inside one run.
    pub max_line_gap: f32,
}

impl Default for HoughLinesParams {
    fn default() -> Self {
        Self {
            canny_low: 30.0,
            canny_high: 200.0,
            theta_res_deg: 1.0,
            vote_threshold: 30,
            min_line_length: 50.0,
            max_line_gap: 20.0,
        }
    }
}

/// Straight segment in tile-local pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment {
    pub p0: [f32; 2],
    pub p1: [f32; 2],
}

impl LineSegment {
    pub fn length(&self) -> f32 {
        let dx = self.p1[0] - self.p0[0];
        let dy = self.p1[1] - self.p0[1];
        (dx * dx + dy * dy).sqrt()
    }
}

pub fn detect(
    tile: &RgbView<'_>,
    params: &HoughLinesParams,
    mut sketch: Option<&mut TileSketch<'_>>,
) -> f32 {
    let gray = tile.to_gray();
    let edges = canny(&gray.as_view(), params.canny_low, params.canny_high);
    let segments = extract_segments(&edges, params);

    let mut total = 0.0;
    for seg in &segments {
        total += seg.length();
        if let Some(s) = sketch.as_deref_mut() {
            s.segment(seg.p0, seg.p1, RED);
        }
    }
    total
}

/// Hough accumulator over (rho, theta), rho resolution 1 pixel.
struct Accumulator {
    theta_bins: usize,
    rho_bins: usize,
    rho_offset: isize,
    cos: Vec<f32>,
    sin: Vec<f32>,
    votes: Vec<u32>,
}

impl Accumulator {
    fn new(w: usize, h: usize, theta_res_deg: f32) -> Self {
        let res = theta_res_deg.max(0.1);
        let theta_bins = ((180.0 / res).round() as usize).max(1);
        let theta_step = std::f32::consts::PI / theta_bins as f32;
        let rho_max = (((w * w + h * h) as f32).sqrt()).ceil() as isize;
        let rho_bins = (2 * rho_max + 1) as usize;

        let mut cos = Vec::with_capacity(theta_bins);
        let mut sin = Vec::with_capacity(theta_bins);
        for t in 0..theta_bins {
            let theta = t as f32 * theta_step;
            cos.push(theta.cos());
            sin.push(theta.sin());
        }

        Self {
            theta_bins,
            rho_bins,
            rho_offset: rho_max,
            cos,
            sin,
            votes: vec![0u32; theta_bins * rho_bins],
        }
    }

    fn vote_all(&mut self, edges: &Mask) {
        for y in 0..edges.h {
            for x in 0..edges.w {
                if !edges.get(x, y) {
                    continue;
                }
                for t in 0..self.theta_bins {
                    let rho = x as f32 * self.cos[t] + y as f32 * self.sin[t];
                    let r = (rho.round() as isize + self.rho_offset) as usize;
                    self.votes[t * self.rho_bins + r] += 1;
                }
            }
        }
    }

    #[inline]
    fn get(&self, r: isize, t: isize) -> u32 {
        if r < 0 || t < 0 || r >= self.rho_bins as isize || t >= self.theta_bins as isize {
            return 0;
        }
        self.votes[t as usize * self.rho_bins + r as usize]
    }

    /// Candidate lines: vote threshold plus a 3x3 local-maximum check so one
    /// physical line does not surface once per adjacent bin.
    fn peaks(&self, vote_threshold: u32) -> Vec<(f32, f32)> {
        let mut out = Vec::new();
        for t in 0..self.theta_bins as isize {
            for r in 0..self.rho_bins as isize {
                let votes = self.get(r, t);
                if votes < vote_threshold.max(1) {
                    continue;
                }
                let mut is_max = true;
                'nms: for dt in -1isize..=1 {
                    for dr in -1isize..=1 {
                        if dt == 0 && dr == 0 {
                            continue;
                        }
                        if self.get(r + dr, t + dt) > votes {
                            is_max = false;
                            break 'nms;
                        }
                    }
                }
                if is_max {
                    let rho = (r - self.rho_offset) as f32;
                    out.push((rho, self.theta_of(t as usize)));
                }
            }
        }
        out
    }

    fn theta_of(&self, t: usize) -> f32 {
        (t as f32) * std::f32::consts::PI / self.theta_bins as f32
    }
}

/// Extract gap-tolerant collinear segments from an edge mask.
pub(crate) fn extract_segments(edges: &Mask, params: &HoughLinesParams) -> Vec<LineSegment> {
    if edges.w == 0 || edges.h == 0 {
        return Vec::new();
    }

    let mut acc = Accumulator::new(edges.w, edges.h, params.theta_res_deg);
    acc.vote_all(edges);

    let mut segments = Vec::new();
    for (rho, theta) in acc.peaks(params.vote_threshold) {
        line_runs(edges, rho, theta, params, &mut segments);
    }
    segments
}

/// Walk the clipped line through the mask, splitting edge hits into runs
/// separated by more than `max_line_gap` pixels.
fn line_runs(
    edges: &Mask,
    rho: f32,
    theta: f32,
    params: &HoughLinesParams,
    out: &mut Vec<LineSegment>,
) {
    let (w, h) = (edges.w, edges.h);
    let cos_t = theta.cos();
    let sin_t = theta.sin();

    let mut ends: Vec<[f32; 2]> = Vec::with_capacity(4);
    if sin_t.abs() > EPSILON {
        let y = rho / sin_t;
        if (0.0..h as f32).contains(&y) {
            ends.push([0.0, y]);
        }
        let x = (w - 1) as f32;
        let y = (rho - x * cos_t) / sin_t;
        if (0.0..h as f32).contains(&y) {
            ends.push([x, y]);
        }
    }
    if cos_t.abs() > EPSILON {
        let x = rho / cos_t;
        if (0.0..w as f32).contains(&x) {
            ends.push([x, 0.0]);
        }
        let y = (h - 1) as f32;
        let x = (rho - y * sin_t) / cos_t;
        if (0.0..w as f32).contains(&x) {
            ends.push([x, y]);
        }
    }
    if ends.len() < 2 {
        return;
    }

    let (p0, p1) = most_distant_pair(&ends);
    let dx = p1[0] - p0[0];
    let dy = p1[1] - p0[1];
    let steps = (dx.abs().max(dy.abs()).ceil() as usize).max(1);

    // Hit sample indices double as distances: consecutive samples are about
    // one pixel apart along the dominant axis.
    let mut run_start: Option<(usize, [f32; 2])> = None;
    let mut last_hit: Option<(usize, [f32; 2])> = None;
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let x = p0[0] + dx * t;
        let y = p0[1] + dy * t;
        let (xi, yi) = (x.round() as isize, y.round() as isize);
        let hit = xi >= 0
            && yi >= 0
            && (xi as usize) < w
            && (yi as usize) < h
            && edges.get(xi as usize, yi as usize);

        if hit {
            if let Some((last_i, _)) = last_hit {
                if (i - last_i) as f32 > params.max_line_gap {
                    close_run(run_start, last_hit, params, out);
                    run_start = None;
                }
            }
            if run_start.is_none() {
                run_start = Some((i, [x, y]));
            }
            last_hit = Some((i, [x, y]));
        }
    }
    close_run(run_start, last_hit, params, out);
}

fn close_run(
    start: Option<(usize, [f32; 2])>,
    end: Option<(usize, [f32; 2])>,
    params: &HoughLinesParams,
    out: &mut Vec<LineSegment>,
) {
    if let (Some((_, p0)), Some((_, p1))) = (start, end) {
        let seg = LineSegment { p0, p1 };
        if seg.length() >= params.min_line_length {
            out.push(seg);
        }
    }
}

fn most_distant_pair(points: &[[f32; 2]]) -> ([f32; 2], [f32; 2]) {
    let mut best = (points[0], points[1]);
    let mut best_d = -1.0f32;
    for i in 0..points.len() {
        for j in i + 1..points.len() {
            let dx = points[i][0] - points[j][0];
            let dy = points[i][1] - points[j][1];
            let d = dx * dx + dy * dy;
            if d > best_d {
                best_d = d;
                best = (points[i], points[j]);
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::RgbImage;

    fn params(vote: u32, min_len: f32, gap: f32) -> HoughLinesParams {
        HoughLinesParams {
            vote_threshold: vote,
            min_line_length: min_len,
            max_line_gap: gap,
            ..Default::default()
        }
    }

    #[test]
    fn recovers_vertical_edge_run() {
        let mut edges = Mask::new(40, 40);
        for y in 2..38 {
            edges.set(20, y);
        }
        let segments = extract_segments(&edges, &params(30, 20.0, 5.0));
        assert!(!segments.is_empty());
        let longest = segments
            .iter()
            .map(LineSegment::length)
            .fold(0.0f32, f32::max);
        assert!(
            (longest - 36.0).abs() <= 2.0,
            "unexpected segment length {longest}"
        );
    }

    #[test]
    fn splits_runs_at_large_gaps() {
        let mut edges = Mask::new(60, 60);
        for y in 0..20 {
            edges.set(30, y);
        }
        for y in 40..60 {
            edges.set(30, y);
        }
        let segments = extract_segments(&edges, &params(30, 10.0, 5.0));
        assert!(segments.len() >= 2, "gap should split the line into runs");
        for seg in &segments {
            assert!(seg.length() < 25.0);
        }
    }

    #[test]
    fn empty_mask_yields_no_segments() {
        let edges = Mask::new(32, 32);
        assert!(extract_segments(&edges, &params(30, 10.0, 5.0)).is_empty());
    }

    #[test]
    fn detect_measures_bright_stripe() {
        let mut img = RgbImage::new(48, 48);
        for y in 0..48 {
            for x in 20..28 {
                img.put_pixel(x, y, [255, 255, 255]);
            }
        }
        let p = HoughLinesParams {
            min_line_length: 30.0,
            max_line_gap: 5.0,
            ..Default::default()
        };
        let length = detect(&img.as_view(), &p, None);
        assert!(length > 0.0, "expected stripe borders to register as lines");

        let blank = RgbImage::new(48, 48);
        assert_eq!(detect(&blank.as_view(), &p, None), 0.0);
    }
}
