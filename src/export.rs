//! Result export at the reporting boundary.
//!
//! - `write_matrix_csv`: one table per analysis kind, integer percentages.
//! - `write_json_file`: pretty-print a serializable report to disk.
//!
//! Presentation concerns beyond that (percent formatting, sheet styling)
//! belong to downstream tooling.

use crate::raster::io::ensure_parent_dir;
use crate::types::CoverageMatrix;
use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Write a coverage matrix as CSV with `Row` / `Column N` headers.
pub fn write_matrix_csv(path: &Path, matrix: &CoverageMatrix) -> Result<(), String> {
    ensure_parent_dir(path)?;

    let mut out = String::new();
    out.push_str("Row");
    for col in 0..matrix.cols() {
        let _ = write!(out, ",Column {}", col + 1);
    }
    out.push('\n');
    for row in 0..matrix.rows() {
        let _ = write!(out, "{}", row + 1);
        for &value in matrix.row(row) {
            let _ = write!(out, ",{value}");
        }
        out.push('\n');
    }

    fs::write(path, out).map_err(|e| format!("Failed to write CSV {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}
