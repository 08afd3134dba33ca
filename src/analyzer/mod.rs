//! Analyzer driving the partition → detect → quantize pipeline end-to-end.
//!
//! The [`Analyzer`] exposes a simple API: feed an RGB image and get the
//! quantized coverage matrix. Internally it walks the tile grid in
//! row-major order, runs the configured detector on each tile view and
//! quantizes the raw measurement into its matrix slot.
//!
//! Tiles are mutually independent: each reads only its own image window and
//! writes only its own matrix slot (and, when enabled, its own overlay
//! rectangle). [`Analyzer::analyze_parallel`] exploits that to map tiles
//! over a rayon pool with byte-identical output.
//!
//! Typical usage:
//! ```no_run
//! use landcover_grid::{AnalysisParams, Analyzer};
//! use landcover_grid::raster::RgbImage;
//!
//! # fn example(image: RgbImage) {
//! let analyzer = Analyzer::new(AnalysisParams::default());
//! match analyzer.analyze(&image) {
//!     Ok(report) => println!("coverage[0][0] = {}", report.matrix.get(0, 0)),
//!     Err(err) => eprintln!("analysis failed: {err}"),
//! }
//! # }
//! ```

pub mod params;

pub use params::AnalysisParams;

use crate::error::AnalysisError;
use crate::grid::TileGrid;
use crate::overlay::Overlay;
use crate::raster::RgbImage;
use crate::types::{AnalysisReport, CoverageMatrix};
use log::debug;
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

/// Grid coverage analyzer. Stateless between runs; every `analyze*` call is
/// a pure function of the image and the parameters.
#[derive(Clone, Debug)]
pub struct Analyzer {
    params: AnalysisParams,
}

impl Analyzer {
    /// Create an analyzer with the supplied parameters.
    pub fn new(params: AnalysisParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &AnalysisParams {
        &self.params
    }

    /// Run the analysis sequentially, row-major.
    pub fn analyze(&self, image: &RgbImage) -> Result<AnalysisReport, AnalysisError> {
        self.run(image, None, None)
    }

    /// Run sequentially and draw detected features into `overlay`, each tile
    /// staying inside its own rectangle.
    pub fn analyze_with_overlay(
        &self,
        image: &RgbImage,
        overlay: &mut Overlay,
    ) -> Result<AnalysisReport, AnalysisError> {
        self.run(image, Some(overlay), None)
    }

    /// Run sequentially, aborting with [`AnalysisError::Cancelled`] as soon
    /// as `cancel` is observed set between tile iterations.
    pub fn analyze_with_cancel(
        &self,
        image: &RgbImage,
        cancel: &AtomicBool,
    ) -> Result<AnalysisReport, AnalysisError> {
        self.run(image, None, Some(cancel))
    }

    /// Map tiles over the rayon pool. Tiles are independent and the matrix
    /// is a reduction into disjoint slots, so the result is identical to
    /// [`Analyzer::analyze`].
    pub fn analyze_parallel(&self, image: &RgbImage) -> Result<AnalysisReport, AnalysisError> {
        let grid = self.preflight(image)?;
        let start = Instant::now();

        let view = image.as_view();
        let detector = &self.params.detector;
        let quantizer = &self.params.quantizer;
        let tiles: Vec<_> = grid.iter().collect();
        let values: Vec<u8> = tiles
            .par_iter()
            .map(|bounds| {
                let tile = view.sub_view(bounds.x0, bounds.y0, bounds.width(), bounds.height());
                quantizer.quantize(&detector.detect(&tile, None))
            })
            .collect();

        let matrix = CoverageMatrix::from_values(grid.rows(), grid.cols(), values);
        Ok(self.report(matrix, &grid, start))
    }

    /// Shared precondition checks: image present, pairing sane, grid valid.
    fn preflight(&self, image: &RgbImage) -> Result<TileGrid, AnalysisError> {
        if image.is_empty() {
            return Err(AnalysisError::ImageUnavailable);
        }
        if self.params.detector.is_metric() != self.params.quantizer.wants_metric() {
            return Err(AnalysisError::PolicyMismatch {
                detector: self.params.detector.name(),
                policy: self.params.quantizer.name(),
            });
        }
        TileGrid::new(image.w, image.h, self.params.grid)
    }

    fn run(
        &self,
        image: &RgbImage,
        mut overlay: Option<&mut Overlay>,
        cancel: Option<&AtomicBool>,
    ) -> Result<AnalysisReport, AnalysisError> {
        let grid = self.preflight(image)?;
        debug!(
            "Analyzer::run start {}x{} grid={}x{} detector={} policy={}",
            image.w,
            image.h,
            grid.rows(),
            grid.cols(),
            self.params.detector.name(),
            self.params.quantizer.name()
        );
        let start = Instant::now();

        let view = image.as_view();
        let mut matrix = CoverageMatrix::zeros(grid.rows(), grid.cols());
        for bounds in grid.iter() {
            if let Some(flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    return Err(AnalysisError::Cancelled);
                }
            }
            let tile = view.sub_view(bounds.x0, bounds.y0, bounds.width(), bounds.height());
            let detection = match overlay.as_deref_mut() {
                Some(canvas) => {
                    let mut sketch = canvas.tile_sketch(bounds.x0, bounds.y0);
                    self.params.detector.detect(&tile, Some(&mut sketch))
                }
                None => self.params.detector.detect(&tile, None),
            };
            matrix.set(bounds.row, bounds.col, self.params.quantizer.quantize(&detection));
        }

        let report = self.report(matrix, &grid, start);
        debug!(
            "Analyzer::run done tiles={} latency_ms={:.3}",
            grid.len(),
            report.latency_ms
        );
        Ok(report)
    }

    fn report(&self, matrix: CoverageMatrix, grid: &TileGrid, start: Instant) -> AnalysisReport {
        AnalysisReport {
            matrix,
            cell_width: grid.cell_width(),
            cell_height: grid.cell_height(),
            analyzed_width: grid.analyzed_width(),
            analyzed_height: grid.analyzed_height(),
            latency_ms: start.elapsed().as_secs_f64() * 1000.0,
        }
    }
}
