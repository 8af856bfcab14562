use plotters::style::{Color, RGBAColor, RGBColor, ShapeStyle};

// ---------------------------------------------------------------------------
// Series colours
// ---------------------------------------------------------------------------

/// Colours of the plotted series, one per metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesColor {
    /// Hospital execution time.
    Blue,
    /// Earthquake execution time.
    Green,
    /// Hospital wait time.
    Magenta,
    /// Earthquake location error.
    Cyan,
    /// Theoretical overlays.
    Red,
}

impl SeriesColor {
    pub fn rgb(self) -> RGBColor {
        match self {
            SeriesColor::Blue => RGBColor(0, 0, 255),
            SeriesColor::Green => RGBColor(0, 128, 0),
            SeriesColor::Magenta => RGBColor(191, 0, 191),
            SeriesColor::Cyan => RGBColor(0, 191, 191),
            SeriesColor::Red => RGBColor(255, 0, 0),
        }
    }
}

// ---------------------------------------------------------------------------
// Line styles
// ---------------------------------------------------------------------------

/// How a series is stroked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineKind {
    /// Solid line with a circle marker at every point.
    SolidWithMarkers,
    /// Dashed line, no markers.
    Dashed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStyle {
    pub color: SeriesColor,
    pub kind: LineKind,
    /// 1.0 is opaque.
    pub alpha: f64,
}

impl SeriesStyle {
    pub const fn measured(color: SeriesColor) -> Self {
        Self {
            color,
            kind: LineKind::SolidWithMarkers,
            alpha: 1.0,
        }
    }

    pub const fn theoretical() -> Self {
        Self {
            color: SeriesColor::Red,
            kind: LineKind::Dashed,
            alpha: 0.7,
        }
    }

    pub fn rgba(&self) -> RGBAColor {
        self.color.rgb().mix(self.alpha)
    }

    /// Stroke style for a line `width` pixels wide.
    pub fn stroke(&self, width: u32) -> ShapeStyle {
        self.rgba().stroke_width(width)
    }
}
