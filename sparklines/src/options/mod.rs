pub mod base;
pub mod sparkline;

pub use base::{BasePlotOptions, BasePlotOptionsBuilder, MAX_JPEG_DIMENSION, MAX_PIXELS};
pub use sparkline::{
    DEFAULT_LINE_COLOR, Highlights, SparklineKind, SparklineOptions, SparklineOptionsBuilder,
};

/// Trait for plot options types
///
/// All plot-specific options structs should implement this trait to provide
/// access to the base options.
pub trait PlotOptions {
    /// Get a reference to the base plot options
    fn base(&self) -> &BasePlotOptions;
}
