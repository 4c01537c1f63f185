use serde::{Deserialize, Serialize};

/// Dividing-line detector tuning suitable for config files and presets.
/// The defaults are tuned for the card-style image family this tool was
/// built around; treat them as starting points, not invariants.
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct DetectorParams {
    /// Minimum sum of absolute per-channel differences between consecutive
    /// row means for a row to count as a discontinuity.
    pub threshold: f64,
    /// Maximum height in rows of a dividing band; the scan skips past a
    /// recorded band so it cannot re-trigger inside it.
    pub max_line_thickness: u32,
}

impl Default for DetectorParams {
    fn default() -> Self {
        Self {
            threshold: 50.0,
            max_line_thickness: 8,
        }
    }
}

/// Full processing parameters for one image.
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct ProcessingParams {
    pub detector: DetectorParams,
    /// If true, the alpha-cropped working image is written next to the
    /// section outputs before analysis continues.
    pub write_working_image: bool,
}

impl Default for ProcessingParams {
    fn default() -> Self {
        Self {
            detector: DetectorParams::default(),
            write_working_image: true,
        }
    }
}
