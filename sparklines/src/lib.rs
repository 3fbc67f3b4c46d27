//! # sparklines
//!
//! Tiny, axis-free line and bar plots rendered as inline images, for table
//! cells in notebooks or static HTML pages.
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use sparklines::{SparklineOptions, render_sparkline};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let options = SparklineOptions::new().size(120, 20).build()?;
//! let rendered = render_sparkline([1, 3, 2, 5, 4], &options)?;
//! assert_eq!(rendered.format().tag(), "png");
//! println!("{}", rendered.to_html());
//! # Ok(())
//! # }
//! ```
//!
//! ## Tables
//!
//! ```rust,no_run
//! use polars::prelude::*;
//! use sparklines::html::{HtmlOptions, write_html};
//! use sparklines::table::{TableOptions, add_sparklines, series_column};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut df = DataFrame::new(vec![
//!     Column::new("name".into(), vec!["a", "b"]),
//!     series_column("values", &[vec![1.0, 2.0, 1.5], vec![3.0, 1.0, 2.0]]),
//! ])?;
//! let options = TableOptions::default();
//! add_sparklines(&mut df, "values", &options)?;
//! write_html(&df, "report", &HtmlOptions::for_sparklines(&options.title))?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - `options`: Render configuration using the builder pattern
//! - `plots`: The `Plot` trait, the `Sparkline` renderer and its layout
//! - `render`: Plotters drawing, image encoding and embedding markup
//! - `table`: Sparkline columns on polars DataFrames
//! - `html`: HTML table and page export
//! - `error`: The crate error type

pub mod error;
pub mod html;
pub mod options;
pub mod plots;
pub mod render;
pub mod table;

// Re-export commonly used types
pub use error::{Result, SparklineError};
pub use plotters::style::RGBColor;
pub use options::{BasePlotOptions, Highlights, PlotOptions, SparklineKind, SparklineOptions};
pub use plots::{Plot, Sparkline, render_sparkline};
pub use render::{ImageFormat, RenderedSparkline};

// Type aliases
pub type PlotBytes = Vec<u8>;
pub type PlotRange = std::ops::RangeInclusive<f64>;

#[cfg(test)]
mod tests;
