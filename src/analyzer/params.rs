//! Parameter types configuring one analysis run.
//!
//! One immutable value selects the grid shape, the detector and the
//! quantization policy; it is passed into the pure entry points rather than
//! living in process-wide state, so runs are independent and safely
//! parallel.

use crate::detect::DetectorConfig;
use crate::grid::GridSpec;
use crate::quantize::QuantizerConfig;
use serde::{Deserialize, Serialize};

/// Run-wide parameters for [`crate::Analyzer`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisParams {
    /// Grid shape; defaults follow common survey sheets (30 rows x 15 cols).
    #[serde(default)]
    pub grid: GridSpec,
    /// Detector kind plus its numeric parameters.
    #[serde(default)]
    pub detector: DetectorConfig,
    /// Quantization policy plus its threshold.
    #[serde(default)]
    pub quantizer: QuantizerConfig,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            grid: GridSpec::default(),
            detector: DetectorConfig::default(),
            quantizer: QuantizerConfig::default(),
        }
    }
}
