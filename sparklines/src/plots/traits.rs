use crate::error::Result;
use crate::options::PlotOptions;
use crate::render::RenderedSparkline;

/// Trait for plot types
///
/// This trait defines the interface that all plot types must implement.
/// Each plot type specifies its own options type and data type. Rendering
/// is a pure function of `data` and `options`.
///
/// # Example
///
/// ```rust,no_run
/// use sparklines::error::Result;
/// use sparklines::options::{BasePlotOptions, PlotOptions};
/// use sparklines::plots::traits::Plot;
/// use sparklines::render::RenderedSparkline;
///
/// struct BlankOptions {
///     base: BasePlotOptions,
/// }
///
/// impl PlotOptions for BlankOptions {
///     fn base(&self) -> &BasePlotOptions { &self.base }
/// }
///
/// struct BlankPlot;
///
/// impl Plot for BlankPlot {
///     type Options = BlankOptions;
///     type Data = Vec<f64>;
///
///     fn render(&self, _data: Self::Data, options: &Self::Options) -> Result<RenderedSparkline> {
///         Ok(RenderedSparkline::new(options.base().format, vec![]))
///     }
/// }
/// ```
pub trait Plot {
    /// The options type for this plot
    type Options: PlotOptions;

    /// The data type this plot accepts
    type Data;

    /// Render the plot with the given data and options
    ///
    /// # Returns
    ///
    /// The encoded image tagged with its format
    fn render(&self, data: Self::Data, options: &Self::Options) -> Result<RenderedSparkline>;
}
