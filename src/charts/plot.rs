use std::ops::Range;

use log::debug;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use super::panels::{Panel, YRange};
use crate::color::LineKind;

// ---------------------------------------------------------------------------
// Typography – point sizes converted to pixels at the figure's DPI
// ---------------------------------------------------------------------------

/// Text and stroke sizes for one figure, in pixels.
#[derive(Debug, Clone, Copy)]
pub struct Typography {
    dpi: u32,
    pub title_pt: f64,
    pub label_pt: f64,
    pub tick_pt: f64,
    pub legend_pt: f64,
}

impl Typography {
    pub fn new(dpi: u32, title_pt: f64, label_pt: f64, tick_pt: f64, legend_pt: f64) -> Self {
        Self {
            dpi,
            title_pt,
            label_pt,
            tick_pt,
            legend_pt,
        }
    }

    /// Convert a length in points (1/72 in) to pixels.
    pub fn px(&self, points: f64) -> u32 {
        (points * self.dpi as f64 / 72.0).round().max(1.0) as u32
    }

    fn font(&self, points: f64, style: FontStyle) -> TextStyle<'static> {
        TextStyle::from(FontDesc::new(
            FontFamily::SansSerif,
            self.px(points) as f64,
            style,
        ))
    }

    pub fn title(&self) -> TextStyle<'static> {
        self.font(self.title_pt, FontStyle::Bold)
    }

    fn axis(&self) -> TextStyle<'static> {
        self.font(self.label_pt, FontStyle::Normal)
    }

    fn ticks(&self) -> TextStyle<'static> {
        self.font(self.tick_pt, FontStyle::Normal)
    }

    fn legend(&self) -> TextStyle<'static> {
        self.font(self.legend_pt, FontStyle::Normal)
    }

    fn line_width(&self) -> u32 {
        self.px(2.0)
    }

    /// Marker radius; markers are 6 pt across.
    fn marker_radius(&self) -> u32 {
        self.px(3.0)
    }
}

// ---------------------------------------------------------------------------
// Axis ranges
// ---------------------------------------------------------------------------

/// Fraction of the data span added on both sides of an axis.
const AXIS_MARGIN: f64 = 0.05;

/// Data extent widened by [`AXIS_MARGIN`] on each side.
///
/// Non-finite values are ignored. A single distinct value gets a window
/// around it, and no finite values at all gives `0..1`.
pub fn padded_range(values: impl IntoIterator<Item = f64>) -> Range<f64> {
    let (min, max) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }

    let span = max - min;
    if span.abs() < f64::EPSILON {
        let half = if min == 0.0 { 0.5 } else { min.abs() * AXIS_MARGIN };
        return (min - half)..(max + half);
    }

    (min - span * AXIS_MARGIN)..(max + span * AXIS_MARGIN)
}

/// Runs of consecutive points that can be drawn at their true value.
///
/// With a fixed y range, points outside it (or non-finite) break the line
/// and are left off the chart rather than pinned to the edge.
pub fn visible_runs(points: &[(f64, f64)], y_range: &YRange) -> Vec<Vec<(f64, f64)>> {
    let range = match y_range {
        YRange::Auto => return vec![points.to_vec()],
        YRange::Fixed(range) => range,
    };

    let mut runs = Vec::new();
    let mut current = Vec::new();
    for &(x, y) in points {
        if y.is_finite() && y >= range.start && y <= range.end {
            current.push((x, y));
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

/// Tick label for counts on the x-axis.
pub fn whole_number_label(x: &f64) -> String {
    format!("{:.0}", x.round())
}

/// Ranges for the x and y axes of `panel`.
pub fn panel_ranges(panel: &Panel) -> (Range<f64>, Range<f64>) {
    let x = padded_range(panel.series().flat_map(|s| s.points.iter().map(|p| p.0)));
    let y = match &panel.y_range {
        YRange::Auto => padded_range(panel.series().flat_map(|s| s.points.iter().map(|p| p.1))),
        YRange::Fixed(range) => range.clone(),
    };
    (x, y)
}

// ---------------------------------------------------------------------------
// Drawing
// ---------------------------------------------------------------------------

/// Draw `panel` into `area` with the given caption.
///
/// Errors are returned as text; the caller attaches the output path.
pub fn draw_panel(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    panel: &Panel,
    title: &str,
    text: &Typography,
) -> Result<(), String> {
    let (x_range, y_range) = panel_ranges(panel);
    debug!("'{title}': x {x_range:?}, y {y_range:?}");

    let tick_px = text.px(text.tick_pt);
    let mut chart = ChartBuilder::on(area)
        .caption(title, text.title())
        .margin(text.px(8.0))
        .x_label_area_size(tick_px * 3)
        .y_label_area_size(tick_px * 5)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| e.to_string())?;

    chart
        .configure_mesh()
        .x_desc(panel.x_label)
        .y_desc(panel.y_label)
        .axis_desc_style(text.axis())
        .label_style(text.ticks())
        .x_label_formatter(&whole_number_label)
        .bold_line_style(BLACK.mix(0.3))
        .light_line_style(BLACK.mix(0.06))
        .draw()
        .map_err(|e| e.to_string())?;

    let line_width = text.line_width();
    let legend_len = text.px(16.0) as i32;

    for series in panel.series() {
        let style = series.style.stroke(line_width);
        let mut runs = visible_runs(&series.points, &panel.y_range);
        if runs.is_empty() {
            // Still registers the legend entry.
            runs.push(Vec::new());
        }

        for (i, run) in runs.iter().enumerate() {
            let points = run.iter().copied();
            let anno = match series.style.kind {
                LineKind::SolidWithMarkers => chart.draw_series(
                    LineSeries::new(points, style).point_size(text.marker_radius()),
                ),
                LineKind::Dashed => chart.draw_series(DashedLineSeries::new(
                    points,
                    line_width * 3,
                    line_width * 2,
                    style,
                )),
            }
            .map_err(|e| e.to_string())?;

            if i == 0 {
                if let Some(label) = &series.label {
                    anno.label(label.as_str()).legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + legend_len, y)], style)
                    });
                }
            }
        }
    }

    if panel.series().any(|s| s.label.is_some()) {
        chart
            .configure_series_labels()
            .label_font(text.legend())
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK.mix(0.3))
            .draw()
            .map_err(|e| e.to_string())?;
    }

    Ok(())
}
