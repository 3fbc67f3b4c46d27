use clap::Parser;
use sparklines::{Highlights, ImageFormat, RGBColor, SparklineKind};
use std::path::PathBuf;

/// Sparklines - render numeric CSV rows as an HTML table of inline sparklines
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "sparklines")]
pub struct Cli {
    /// Input CSV file. Every column that is not a label column is read as
    /// one sample of the row's series, in header order
    #[arg(value_name = "INPUT_CSV")]
    pub input: PathBuf,

    /// Output HTML file (".html" is appended if missing)
    /// If not specified, the page is written next to the input file
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Label columns (comma-separated). Defaults to the first column
    #[arg(short, long, value_delimiter = ',')]
    pub label_columns: Option<Vec<String>>,

    /// Name of the sparkline column
    #[arg(short, long, default_value = "sparklines")]
    pub title: String,

    /// Sparkline width in pixels
    #[arg(long, default_value = "400")]
    pub width: u32,

    /// Sparkline height in pixels
    #[arg(long, default_value = "25")]
    pub height: u32,

    /// Sparkline variant
    #[arg(short, long, value_enum, default_value = "line")]
    pub kind: KindArg,

    /// Line (or bar) color as hex, e.g. "#1f77b4"
    #[arg(long, value_parser = parse_hex_color)]
    pub line_color: Option<RGBColor>,

    /// Marker color as hex, e.g. "#ff0000"
    #[arg(long, value_parser = parse_hex_color)]
    pub marker_color: Option<RGBColor>,

    /// Do not fill the area below the line
    #[arg(long)]
    pub no_fill: bool,

    /// Points to highlight (comma-separated; default: last)
    #[arg(long, value_enum, value_delimiter = ',')]
    pub highlight: Option<Vec<HighlightArg>>,

    /// Lower bound of a fixed vertical range
    #[arg(long, requires = "y_max")]
    pub y_min: Option<f64>,

    /// Upper bound of a fixed vertical range
    #[arg(long, requires = "y_min")]
    pub y_max: Option<f64>,

    /// Origin of the fill and of the bars
    #[arg(long)]
    pub baseline: Option<f64>,

    /// Image format embedded in the page
    #[arg(short, long, value_enum, default_value = "png")]
    pub format: FormatArg,

    /// Leave the raw series out of the page
    #[arg(long)]
    pub drop_series: bool,

    /// Print row numbers
    #[arg(long)]
    pub index: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum KindArg {
    Line,
    Bar,
}

impl From<KindArg> for SparklineKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Line => SparklineKind::Line,
            KindArg::Bar => SparklineKind::Bar,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum FormatArg {
    Png,
    Jpeg,
    Svg,
}

impl From<FormatArg> for ImageFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Png => ImageFormat::Png,
            FormatArg::Jpeg => ImageFormat::Jpeg,
            FormatArg::Svg => ImageFormat::Svg,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum HighlightArg {
    First,
    Last,
    Min,
    Max,
    /// No markers at all
    None,
}

/// Fold highlight flags; `none` clears everything listed before it
pub fn highlights_from_args(args: &[HighlightArg]) -> Highlights {
    let mut highlights = Highlights::none();
    for arg in args {
        match arg {
            HighlightArg::First => highlights.first = true,
            HighlightArg::Last => highlights.last = true,
            HighlightArg::Min => highlights.min = true,
            HighlightArg::Max => highlights.max = true,
            HighlightArg::None => highlights = Highlights::none(),
        }
    }
    highlights
}

/// Parse `#rrggbb` or `rrggbb`
pub fn parse_hex_color(value: &str) -> Result<RGBColor, String> {
    let hex = value.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(format!("expected a color like #1f77b4, got '{value}'"));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16)
            .map_err(|_| format!("invalid hex digits in color '{value}'"))
    };
    Ok(RGBColor(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
