use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use crate::charts;
use crate::config::ReportConfig;
use crate::state::ReportData;
use crate::summary;

// ---------------------------------------------------------------------------
// Report driver
// ---------------------------------------------------------------------------

/// Runs Load → Derive → Render → Summarize, once.
pub struct ReportApp {
    pub config: ReportConfig,
}

impl Default for ReportApp {
    fn default() -> Self {
        Self::new(ReportConfig::default())
    }
}

fn display_name(image: &Path) -> String {
    image
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| image.display().to_string())
}

impl ReportApp {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Run the report, writing console output to `out` as each phase ends.
    ///
    /// Returns the standalone chart files in render order. When a growth
    /// factor cannot be computed, the rest of the summary is still written
    /// before the error is returned.
    pub fn run_to(&self, out: &mut impl Write) -> Result<Vec<PathBuf>> {
        // ---- Load + derive ----
        let data = ReportData::load(&self.config).context("loading benchmark results")?;

        // ---- Render ----
        let images = charts::render_all(&data, &self.config).context("rendering charts")?;

        writeln!(out, "\nGenerated individual images:")?;
        for image in &images {
            writeln!(out, "- {}", display_name(image))?;
        }
        out.flush()?;

        charts::show_composite(&self.config);

        // ---- Summarize ----
        let mut text = String::new();
        let summarized = summary::write_summary(&mut text, &data);
        out.write_all(text.as_bytes())?;
        out.flush()?;
        summarized.context("computing summary")?;

        info!("Report complete");
        Ok(images)
    }

    /// Full run printing to stdout.
    pub fn run(&self) -> Result<()> {
        self.run_to(&mut std::io::stdout().lock())?;
        Ok(())
    }
}
