pub mod output;
pub mod plotters_backend;

pub use output::{ImageFormat, RenderedSparkline};
pub use plotters_backend::render_layout;
