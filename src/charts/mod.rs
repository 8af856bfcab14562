//! PNG rendering of the report charts.
//!
//! Produces one 2×2 composite figure plus one standalone image per panel,
//! using [`plotters`]' bitmap backend so it runs headless. Existing files are
//! overwritten.

pub mod panels;
pub mod plot;

use std::path::{Path, PathBuf};

use log::{info, warn};
use plotters::prelude::*;

use crate::config::{
    ReportConfig, COMPOSITE_OUTPUT, EARTHQUAKE_ACCURACY_OUTPUT, EARTHQUAKE_TIME_OUTPUT,
    HOSPITAL_QUALITY_OUTPUT, HOSPITAL_TIME_OUTPUT,
};
use crate::error::{ReportError, Result};
use crate::state::ReportData;
use panels::{report_panels, Panel};
use plot::{draw_panel, Typography};

pub const COMPOSITE_TITLE: &str = "Algorithm Performance Analysis";

/// Standalone images, in the same order as [`report_panels`].
pub const STANDALONE_OUTPUTS: [&str; 4] = [
    HOSPITAL_TIME_OUTPUT,
    EARTHQUAKE_TIME_OUTPUT,
    HOSPITAL_QUALITY_OUTPUT,
    EARTHQUAKE_ACCURACY_OUTPUT,
];

// ---------------------------------------------------------------------------
// Figure sizes
// ---------------------------------------------------------------------------

/// Physical size of an output image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Figure {
    pub width_in: f64,
    pub height_in: f64,
}

/// The 2×2 overview.
pub const COMPOSITE_FIGURE: Figure = Figure {
    width_in: 14.0,
    height_in: 10.0,
};

/// One chart sized for a single print column.
pub const STANDALONE_FIGURE: Figure = Figure {
    width_in: 6.0,
    height_in: 4.0,
};

impl Figure {
    pub fn pixels(&self, dpi: u32) -> (u32, u32) {
        (
            (self.width_in * dpi as f64).round() as u32,
            (self.height_in * dpi as f64).round() as u32,
        )
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Draw the 2×2 composite with a figure-wide title.
pub fn render_composite(panels: &[Panel; 4], path: &Path, dpi: u32) -> Result<()> {
    let panel_text = Typography::new(dpi, 12.0, 10.0, 10.0, 10.0);
    let suptitle = Typography::new(dpi, 16.0, 10.0, 10.0, 10.0);

    let root = BitMapBackend::new(path, COMPOSITE_FIGURE.pixels(dpi)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| ReportError::output(path, e))?;

    let body = root
        .titled(COMPOSITE_TITLE, suptitle.title())
        .map_err(|e| ReportError::output(path, e))?;

    for (area, panel) in body.split_evenly((2, 2)).iter().zip(panels) {
        draw_panel(area, panel, panel.composite_title, &panel_text)
            .map_err(|e| ReportError::output(path, e))?;
    }

    root.present().map_err(|e| ReportError::output(path, e))?;
    info!("Wrote {}", path.display());
    Ok(())
}

/// Draw a single panel as its own image.
pub fn render_standalone(panel: &Panel, path: &Path, dpi: u32) -> Result<()> {
    let text = Typography::new(dpi, 11.0, 10.0, 9.0, 9.0);

    let root = BitMapBackend::new(path, STANDALONE_FIGURE.pixels(dpi)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| ReportError::output(path, e))?;

    draw_panel(&root, panel, panel.standalone_title, &text)
        .map_err(|e| ReportError::output(path, e))?;

    root.present().map_err(|e| ReportError::output(path, e))?;
    info!("Wrote {}", path.display());
    Ok(())
}

/// Render the composite and all standalone charts, in that order.
///
/// Stops at the first image that cannot be written. Returns the paths of the
/// standalone images.
pub fn render_all(data: &ReportData, config: &ReportConfig) -> Result<Vec<PathBuf>> {
    let panels = report_panels(data);

    render_composite(&panels, &config.output(COMPOSITE_OUTPUT), config.dpi)?;

    let mut written = Vec::with_capacity(STANDALONE_OUTPUTS.len());
    for (panel, name) in panels.iter().zip(STANDALONE_OUTPUTS) {
        let path = config.output(name);
        render_standalone(panel, &path, config.dpi)?;
        written.push(path);
    }
    Ok(written)
}

/// Interactive display of the composite. This tool only writes files.
pub fn show_composite(config: &ReportConfig) {
    warn!(
        "No interactive display available; composite saved to {}",
        config.output(COMPOSITE_OUTPUT).display()
    );
}
