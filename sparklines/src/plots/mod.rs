pub mod layout;
pub mod sparkline;
pub mod traits;

pub use layout::{Marker, SparklineLayout};
pub use sparkline::{Sparkline, render_sparkline};
pub use traits::Plot;
