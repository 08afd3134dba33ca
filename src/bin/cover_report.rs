use landcover_grid::config::load_config;
use landcover_grid::export::{write_json_file, write_matrix_csv};
use landcover_grid::grid::TileGrid;
use landcover_grid::overlay::{Overlay, RED};
use landcover_grid::raster::io::{load_rgb_image, save_rgb_image};
use landcover_grid::{AnalysisParams, AnalysisReport, Analyzer};
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NamedReport {
    name: String,
    #[serde(flatten)]
    report: AnalysisReport,
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let image = load_rgb_image(&config.input)?;
    let mut overlay = config
        .output
        .overlay_image
        .is_some()
        .then(|| Overlay::of(&image));

    let mut reports: Vec<NamedReport> = Vec::with_capacity(config.analyses.len());
    for entry in &config.analyses {
        let analyzer = Analyzer::new(AnalysisParams {
            grid: config.grid,
            detector: entry.detector.clone(),
            quantizer: entry.quantizer,
        });
        let report = match overlay.as_mut() {
            Some(canvas) => analyzer.analyze_with_overlay(&image, canvas),
            None => analyzer.analyze(&image),
        }
        .map_err(|e| format!("Analysis `{}` failed: {e}", entry.name))?;

        print_summary(&entry.name, &report);

        if let Some(dir) = &config.output.csv_dir {
            let path = dir.join(format!("{}.csv", entry.name));
            write_matrix_csv(&path, &report.matrix)?;
            println!("  table written to {}", path.display());
        }
        reports.push(NamedReport {
            name: entry.name.clone(),
            report,
        });
    }

    if let Some(path) = &config.output.json_out {
        write_json_file(path, &reports)?;
        println!("JSON report written to {}", path.display());
    }

    if let (Some(path), Some(mut canvas)) = (&config.output.overlay_image, overlay) {
        if config.output.draw_grid {
            let grid = TileGrid::new(image.w, image.h, config.grid).map_err(|e| e.to_string())?;
            canvas.draw_grid(&grid, RED);
        }
        save_rgb_image(canvas.image(), path)?;
        println!("Overlay written to {}", path.display());
    }

    Ok(())
}

fn print_summary(name: &str, report: &AnalysisReport) {
    let cells = report.matrix.rows() * report.matrix.cols();
    let covered = report.matrix.as_slice().iter().filter(|&&v| v > 0).count();
    let mean = if cells > 0 {
        report
            .matrix
            .as_slice()
            .iter()
            .map(|&v| f64::from(v))
            .sum::<f64>()
            / cells as f64
    } else {
        0.0
    };
    println!(
        "{name}: {}x{} tiles ({}x{} px each), covered={covered}/{cells}, mean={mean:.1}%, latency_ms={:.3}",
        report.matrix.rows(),
        report.matrix.cols(),
        report.cell_width,
        report.cell_height,
        report.latency_ms
    );
}

fn usage() -> String {
    "Usage: cover-report <config.json>".to_string()
}
