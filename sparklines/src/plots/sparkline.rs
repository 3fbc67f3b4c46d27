use crate::error::Result;
use crate::options::{PlotOptions, SparklineOptions};
use crate::plots::layout::{SparklineLayout, collect_samples};
use crate::plots::traits::Plot;
use crate::render::{RenderedSparkline, render_layout};
use num_traits::ToPrimitive;

/// Sparkline plot implementation
///
/// Draws an axis-free line (or bar) plot of one ordered series.
///
/// # Example
///
/// ```rust,no_run
/// use sparklines::plots::{Plot, Sparkline};
/// use sparklines::options::SparklineOptions;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let plot = Sparkline::new();
/// let options = SparklineOptions::default();
/// let rendered = plot.render(vec![1.0, 3.0, 2.0, 5.0, 4.0], &options)?;
/// println!("{}", rendered.to_html());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Sparkline;

impl Sparkline {
    /// Create a new Sparkline instance
    pub fn new() -> Self {
        Self
    }
}

impl Plot for Sparkline {
    type Options = SparklineOptions;
    type Data = Vec<f64>;

    fn render(&self, data: Self::Data, options: &Self::Options) -> Result<RenderedSparkline> {
        render_sparkline(data, options)
    }
}

/// Render one series to an encoded sparkline
///
/// Accepts any numeric samples (floats or integers). Fails with
/// `InvalidInput` for an empty series, a non-finite sample, or invalid
/// options; the same samples and options always yield identical bytes.
pub fn render_sparkline<I, T>(data: I, options: &SparklineOptions) -> Result<RenderedSparkline>
where
    I: IntoIterator<Item = T>,
    T: ToPrimitive,
{
    options.validate()?;
    let samples = collect_samples(data)?;
    let layout = SparklineLayout::compute(&samples, options)?;
    let bytes = render_layout(&layout, options)?;
    Ok(RenderedSparkline::new(options.base().format, bytes))
}
