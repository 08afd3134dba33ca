//! Run configuration for the `cover-report` binary.
//!
//! One JSON file names the input photograph, the grid shape shared by all
//! analyses, a list of named detector/policy pairs (one exported table
//! each), and the output destinations.

use crate::detect::DetectorConfig;
use crate::grid::GridSpec;
use crate::quantize::QuantizerConfig;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Deserialize)]
pub struct RuntimeConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub grid: GridSpec,
    pub analyses: Vec<AnalysisEntry>,
    #[serde(default)]
    pub output: OutputConfig,
}

/// One analysis kind: the name becomes the exported table's name.
#[derive(Clone, Debug, Deserialize)]
pub struct AnalysisEntry {
    pub name: String,
    #[serde(default)]
    pub detector: DetectorConfig,
    #[serde(default)]
    pub quantizer: QuantizerConfig,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving one `<name>.csv` per analysis.
    pub csv_dir: Option<PathBuf>,
    /// Combined JSON report path.
    pub json_out: Option<PathBuf>,
    /// Annotated copy of the input with detected features drawn in.
    pub overlay_image: Option<PathBuf>,
    /// Also draw tile boundaries onto the overlay.
    #[serde(default)]
    pub draw_grid: bool,
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: RuntimeConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tagged_detector_and_policy_kinds() {
        let json = r#"{
            "input": "survey.jpg",
            "grid": { "rows": 18, "cols": 25 },
            "analyses": [
                { "name": "vegetation",
                  "detector": { "kind": "color_range" },
                  "quantizer": { "policy": "pixel_ratio", "threshold": 15.0 } },
                { "name": "roads",
                  "detector": { "kind": "hough_lines", "min_line_length": 40.0 },
                  "quantizer": { "policy": "length_ratio", "threshold": 50.0 } }
            ]
        }"#;
        let config: RuntimeConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.grid, GridSpec { rows: 18, cols: 25 });
        assert_eq!(config.analyses.len(), 2);
        assert_eq!(config.analyses[0].detector.name(), "color_range");
        assert_eq!(config.analyses[1].detector.name(), "hough_lines");
        assert!(config.analyses[1].quantizer.wants_metric());
        assert!(config.output.csv_dir.is_none());
    }

    #[test]
    fn unknown_kind_is_rejected_at_parse_time() {
        let json = r#"{
            "input": "survey.jpg",
            "analyses": [
                { "name": "x", "detector": { "kind": "neural_net" } }
            ]
        }"#;
        assert!(serde_json::from_str::<RuntimeConfig>(json).is_err());
    }
}
