use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// File names
// ---------------------------------------------------------------------------

pub const HOSPITAL_INPUT: &str = "complexity_results.csv";
pub const EARTHQUAKE_INPUT: &str = "earthquake_results.csv";

pub const COMPOSITE_OUTPUT: &str = "algorithm_performance.png";
pub const HOSPITAL_TIME_OUTPUT: &str = "hospital_time.png";
pub const EARTHQUAKE_TIME_OUTPUT: &str = "earthquake_time.png";
pub const HOSPITAL_QUALITY_OUTPUT: &str = "hospital_quality.png";
pub const EARTHQUAKE_ACCURACY_OUTPUT: &str = "earthquake_accuracy.png";

// ---------------------------------------------------------------------------
// ReportConfig
// ---------------------------------------------------------------------------

/// Where the report reads from and writes to.
///
/// The binary always runs with [`ReportConfig::default`]: both tables are read
/// from, and all images written to, the working directory.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Raster resolution; figure sizes are given in inches.
    pub dpi: u32,
}

pub const DEFAULT_DPI: u32 = 300;

impl Default for ReportConfig {
    fn default() -> Self {
        Self::in_dir(".")
    }
}

impl ReportConfig {
    /// Config reading and writing everything in `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            input_dir: dir.as_ref().to_path_buf(),
            output_dir: dir.as_ref().to_path_buf(),
            dpi: DEFAULT_DPI,
        }
    }

    pub fn hospital_input(&self) -> PathBuf {
        self.input_dir.join(HOSPITAL_INPUT)
    }

    pub fn earthquake_input(&self) -> PathBuf {
        self.input_dir.join(EARTHQUAKE_INPUT)
    }

    pub fn output(&self, name: &str) -> PathBuf {
        self.output_dir.join(name)
    }
}
