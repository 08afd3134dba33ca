use landcover_grid::raster::RgbImage;
use landcover_grid::{AnalysisParams, Analyzer, GridSpec};

fn main() {
    // Demo stub: paints a synthetic half-green field and runs the default
    // vegetation analysis on it.
    let w = 640usize;
    let h = 480usize;
    let mut image = RgbImage::new(w, h);
    for y in 0..h {
        for x in 0..w / 2 {
            image.put_pixel(x, y, [60, 200, 60]);
        }
    }

    let analyzer = Analyzer::new(AnalysisParams {
        grid: GridSpec { rows: 12, cols: 16 },
        ..Default::default()
    });
    match analyzer.analyze(&image) {
        Ok(report) => {
            let covered = report
                .matrix
                .as_slice()
                .iter()
                .filter(|&&v| v > 0)
                .count();
            println!(
                "tiles={} covered={} cell={}x{} latency_ms={:.3}",
                report.matrix.rows() * report.matrix.cols(),
                covered,
                report.cell_width,
                report.cell_height,
                report.latency_ms
            );
        }
        Err(err) => eprintln!("analysis failed: {err}"),
    }
}
