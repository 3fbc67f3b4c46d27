use crate::error::{Result, SparklineError};
use crate::render::ImageFormat;
use derive_builder::Builder;
use plotters::style::{RGBColor, WHITE};

/// Largest canvas, in pixels, a single sparkline may request
pub const MAX_PIXELS: u64 = 1 << 24;

/// Largest width or height the JPEG encoder accepts
pub const MAX_JPEG_DIMENSION: u32 = u16::MAX as u32;

/// Base plot options containing canvas and encoding settings
///
/// These options are common to every sparkline variant and control the size
/// of the raster, its background and the encoded output format.
///
/// The defaults reproduce a 4 x 0.25 inch figure at 100 dpi.
///
/// # Example
///
/// ```rust,no_run
/// use sparklines::options::BasePlotOptions;
/// use sparklines::render::ImageFormat;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let base = BasePlotOptions::new()
///     .width(200u32)
///     .height(30u32)
///     .format(ImageFormat::Svg)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Builder, Clone, Debug, PartialEq)]
#[builder(setter(into, strip_option), default)]
pub struct BasePlotOptions {
    /// Image width in pixels
    #[builder(default = "400")]
    pub width: u32,

    /// Image height in pixels
    #[builder(default = "25")]
    pub height: u32,

    /// Background color of the canvas
    #[builder(default = "WHITE")]
    pub background: RGBColor,

    /// Encoded output format
    #[builder(default)]
    pub format: ImageFormat,

    /// JPEG quality (1-100), ignored by the other formats
    #[builder(default = "85")]
    pub jpeg_quality: u8,
}

impl Default for BasePlotOptions {
    fn default() -> Self {
        Self {
            width: 400,
            height: 25,
            background: WHITE,
            format: ImageFormat::default(),
            jpeg_quality: 85,
        }
    }
}

impl BasePlotOptions {
    /// Create a new builder for BasePlotOptions
    pub fn new() -> BasePlotOptionsBuilder {
        BasePlotOptionsBuilder::default()
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SparklineError::invalid_input(format!(
                "dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        let pixels = u64::from(self.width) * u64::from(self.height);
        if pixels > MAX_PIXELS {
            return Err(SparklineError::invalid_input(format!(
                "canvas {}x{} exceeds {} pixels",
                self.width, self.height, MAX_PIXELS
            )));
        }
        if self.format == ImageFormat::Jpeg
            && (self.width > MAX_JPEG_DIMENSION || self.height > MAX_JPEG_DIMENSION)
        {
            return Err(SparklineError::invalid_input(format!(
                "jpeg dimensions are limited to {MAX_JPEG_DIMENSION}, got {}x{}",
                self.width, self.height
            )));
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(SparklineError::invalid_input(format!(
                "jpeg quality must be within 1..=100, got {}",
                self.jpeg_quality
            )));
        }
        Ok(())
    }
}
