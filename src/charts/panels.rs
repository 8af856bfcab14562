use std::ops::Range;

use crate::color::{SeriesColor, SeriesStyle};
use crate::state::ReportData;

// ---------------------------------------------------------------------------
// Overlay constants
// ---------------------------------------------------------------------------

/// Scale of the n·log2(n) overlay on the hospital timing chart.
///
/// Hand-tuned so the curve sits on top of the measured series; not a fit.
pub const HOSPITAL_OVERLAY_SCALE: f64 = 0.05;

/// Scale of the n·log2(n) overlay on the earthquake timing chart.
pub const EARTHQUAKE_OVERLAY_SCALE: f64 = 0.0002;

/// Fixed vertical range of the accuracy chart, in km.
pub const ACCURACY_Y_RANGE: Range<f64> = 220.0..232.0;

pub const OVERLAY_LABEL: &str = "O(n log n) theoretical";
pub const MEASURED_LABEL: &str = "Measured";

/// `x · log2(x) · scale` at every x.
pub fn nlogn_overlay(xs: &[f64], scale: f64) -> Vec<f64> {
    xs.iter().map(|&x| x * x.log2() * scale).collect()
}

// ---------------------------------------------------------------------------
// Panel – one chart, independent of where it is drawn
// ---------------------------------------------------------------------------

/// A named (x, y) series.
#[derive(Debug, Clone)]
pub struct Series {
    pub label: Option<String>,
    pub points: Vec<(f64, f64)>,
    pub style: SeriesStyle,
}

impl Series {
    pub fn new(xs: &[f64], ys: &[f64], style: SeriesStyle) -> Self {
        Self {
            label: None,
            points: xs.iter().copied().zip(ys.iter().copied()).collect(),
            style,
        }
    }

    pub fn labelled(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }
}

/// Vertical axis extent.
#[derive(Debug, Clone, PartialEq)]
pub enum YRange {
    /// Fit to the data with padding.
    Auto,
    /// Fixed display range. Points outside it are left off the chart; the
    /// series values themselves are unchanged.
    Fixed(Range<f64>),
}

#[derive(Debug, Clone)]
pub struct Panel {
    /// Title inside the composite figure.
    pub composite_title: &'static str,
    /// Title of the standalone image.
    pub standalone_title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub measured: Series,
    pub overlay: Option<Series>,
    pub y_range: YRange,
}

impl Panel {
    /// Measured series followed by the overlay, if any.
    pub fn series(&self) -> impl Iterator<Item = &Series> {
        std::iter::once(&self.measured).chain(self.overlay.as_ref())
    }
}

// ---------------------------------------------------------------------------
// The four report panels
// ---------------------------------------------------------------------------

pub fn hospital_time(data: &ReportData) -> Panel {
    let xs = data.hospital.sizes();
    let overlay = nlogn_overlay(&xs, HOSPITAL_OVERLAY_SCALE);
    Panel {
        composite_title: "Greedy Algorithm: Hospital Triage (Time Complexity)",
        standalone_title: "Hospital Triage: Time Complexity",
        x_label: "Number of Patients",
        y_label: "Execution Time (ms)",
        measured: Series::new(
            &xs,
            &data.hospital.times(),
            SeriesStyle::measured(SeriesColor::Blue),
        )
        .labelled(MEASURED_LABEL),
        overlay: Some(Series::new(&xs, &overlay, SeriesStyle::theoretical()).labelled(OVERLAY_LABEL)),
        y_range: YRange::Auto,
    }
}

pub fn earthquake_time(data: &ReportData) -> Panel {
    let xs = data.earthquake.sizes();
    let overlay = nlogn_overlay(&xs, EARTHQUAKE_OVERLAY_SCALE);
    Panel {
        composite_title: "Divide & Conquer: Earthquake Locator (Time Complexity)",
        standalone_title: "Earthquake Locator: Time Complexity",
        x_label: "Number of Stations",
        y_label: "Execution Time (ms)",
        measured: Series::new(
            &xs,
            &data.earthquake.times(),
            SeriesStyle::measured(SeriesColor::Green),
        )
        .labelled(MEASURED_LABEL),
        overlay: Some(Series::new(&xs, &overlay, SeriesStyle::theoretical()).labelled(OVERLAY_LABEL)),
        y_range: YRange::Auto,
    }
}

pub fn hospital_quality(data: &ReportData) -> Panel {
    let waits: Vec<f64> = data.hospital.rows().iter().map(|r| r.avg_wait_time).collect();
    Panel {
        composite_title: "Greedy Algorithm: Patient Wait Time (Quality Analysis)",
        standalone_title: "Hospital Triage: Wait Time Quality",
        x_label: "Number of Patients",
        y_label: "Average Wait Time (minutes)",
        measured: Series::new(
            &data.hospital.sizes(),
            &waits,
            SeriesStyle::measured(SeriesColor::Magenta),
        ),
        overlay: None,
        y_range: YRange::Auto,
    }
}

pub fn earthquake_accuracy(data: &ReportData) -> Panel {
    Panel {
        composite_title: "Divide & Conquer: Location Accuracy (Quality Analysis)",
        standalone_title: "Earthquake Locator: Accuracy",
        x_label: "Number of Stations",
        y_label: "Location Error (km)",
        measured: Series::new(
            &data.earthquake.sizes(),
            &data.location_errors,
            SeriesStyle::measured(SeriesColor::Cyan),
        ),
        overlay: None,
        y_range: YRange::Fixed(ACCURACY_Y_RANGE),
    }
}

/// Panels in composite order: top-left, top-right, bottom-left, bottom-right.
pub fn report_panels(data: &ReportData) -> [Panel; 4] {
    [
        hospital_time(data),
        earthquake_time(data),
        hospital_quality(data),
        earthquake_accuracy(data),
    ]
}
