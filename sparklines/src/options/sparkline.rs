use crate::PlotRange;
use crate::error::{Result, SparklineError};
use crate::options::{BasePlotOptions, PlotOptions};
use derive_builder::Builder;
use plotters::style::{BLUE, RED, RGBColor};

/// Matplotlib's default line color (`#1f77b4`)
pub const DEFAULT_LINE_COLOR: RGBColor = RGBColor(31, 119, 180);

/// Sparkline variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SparklineKind {
    /// Polyline through the samples, optionally filled down to the baseline
    #[default]
    Line,
    /// One bar per sample, rising from the baseline
    Bar,
}

/// Which points receive a marker
///
/// Each flag is independent. The default marks only the last point, which
/// reads as "current value" on a time series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlights {
    pub first: bool,
    pub last: bool,
    pub min: bool,
    pub max: bool,
}

impl Default for Highlights {
    fn default() -> Self {
        Self {
            first: false,
            last: true,
            min: false,
            max: false,
        }
    }
}

impl Highlights {
    pub fn none() -> Self {
        Self {
            first: false,
            last: false,
            min: false,
            max: false,
        }
    }

    pub fn all() -> Self {
        Self {
            first: true,
            last: true,
            min: true,
            max: true,
        }
    }

    /// Markers on the minimum and maximum only
    pub fn min_max() -> Self {
        Self {
            min: true,
            max: true,
            ..Self::none()
        }
    }

    pub fn any(&self) -> bool {
        self.first || self.last || self.min || self.max
    }
}

/// Options for sparklines
///
/// # Example
///
/// ```rust,no_run
/// use sparklines::options::{Highlights, SparklineKind, SparklineOptions};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let options = SparklineOptions::new()
///     .size(120, 20)
///     .kind(SparklineKind::Bar)
///     .highlights(Highlights::min_max())
///     .y_range(0.0..=10.0)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Builder, Clone, Debug, PartialEq)]
#[builder(setter(into, strip_option), default)]
pub struct SparklineOptions {
    /// Base plot options (canvas size, background, output format)
    #[builder(default)]
    pub base: BasePlotOptions,

    /// Line or bar rendering
    #[builder(default)]
    pub kind: SparklineKind,

    /// Color of the line, or of the bars
    #[builder(default = "DEFAULT_LINE_COLOR")]
    pub line_color: RGBColor,

    /// Stroke width of the line in pixels
    #[builder(default = "1")]
    pub line_width: u32,

    /// Fill the area between the line and the baseline
    #[builder(default = "true")]
    pub fill: bool,

    #[builder(default = "BLUE")]
    pub fill_color: RGBColor,

    #[builder(default = "0.1")]
    pub fill_alpha: f64,

    #[builder(default)]
    pub highlights: Highlights,

    /// Marker color for the first and last points
    #[builder(default = "RED")]
    pub marker_color: RGBColor,

    /// Marker color for the minimum; falls back to `marker_color`
    pub min_color: Option<RGBColor>,

    /// Marker color for the maximum; falls back to `marker_color`
    pub max_color: Option<RGBColor>,

    /// Marker radius in pixels
    #[builder(default = "3")]
    pub marker_size: u32,

    #[builder(default = "1.0")]
    pub marker_alpha: f64,

    /// Fixed vertical range. Samples outside it are clipped when drawn.
    pub y_range: Option<PlotRange>,

    /// Origin of the fill and of the bars. Defaults to the bottom of the
    /// vertical range for lines and to zero for bars.
    pub baseline: Option<f64>,
}

impl Default for SparklineOptions {
    fn default() -> Self {
        Self {
            base: BasePlotOptions::default(),
            kind: SparklineKind::Line,
            line_color: DEFAULT_LINE_COLOR,
            line_width: 1,
            fill: true,
            fill_color: BLUE,
            fill_alpha: 0.1,
            highlights: Highlights::default(),
            marker_color: RED,
            min_color: None,
            max_color: None,
            marker_size: 3,
            marker_alpha: 1.0,
            y_range: None,
            baseline: None,
        }
    }
}

impl PlotOptions for SparklineOptions {
    fn base(&self) -> &BasePlotOptions {
        &self.base
    }
}

impl SparklineOptions {
    /// Create a new builder for SparklineOptions
    pub fn new() -> SparklineOptionsBuilder {
        SparklineOptionsBuilder::default()
    }

    pub fn min_marker_color(&self) -> RGBColor {
        self.min_color.unwrap_or(self.marker_color)
    }

    pub fn max_marker_color(&self) -> RGBColor {
        self.max_color.unwrap_or(self.marker_color)
    }

    /// Check every option that has a constraint
    ///
    /// Called at the start of each render so that options assembled by hand,
    /// bypassing the builder, are held to the same rules.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;

        if self.line_width == 0 {
            return Err(SparklineError::invalid_input("line width must be positive"));
        }
        for (name, alpha) in [("fill", self.fill_alpha), ("marker", self.marker_alpha)] {
            if !(0.0..=1.0).contains(&alpha) {
                return Err(SparklineError::invalid_input(format!(
                    "{name} alpha must be within 0..=1, got {alpha}"
                )));
            }
        }
        if let Some(range) = &self.y_range {
            let (min, max) = (*range.start(), *range.end());
            if !min.is_finite() || !max.is_finite() {
                return Err(SparklineError::invalid_input(format!(
                    "fixed range must be finite, got {min}..={max}"
                )));
            }
            if min >= max {
                return Err(SparklineError::invalid_input(format!(
                    "fixed range must satisfy min < max, got {min}..={max}"
                )));
            }
        }
        if let Some(baseline) = self.baseline {
            if !baseline.is_finite() {
                return Err(SparklineError::invalid_input(format!(
                    "baseline must be finite, got {baseline}"
                )));
            }
        }
        Ok(())
    }
}

impl SparklineOptionsBuilder {
    /// Set the canvas width and height in one call
    pub fn size(&mut self, width: u32, height: u32) -> &mut Self {
        let mut base = self.base.clone().unwrap_or_default();
        base.width = width;
        base.height = height;
        self.base = Some(base);
        self
    }

    /// Set the encoded output format
    pub fn format(&mut self, format: crate::render::ImageFormat) -> &mut Self {
        let mut base = self.base.clone().unwrap_or_default();
        base.format = format;
        self.base = Some(base);
        self
    }
}
