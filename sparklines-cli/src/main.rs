mod args;
mod csv_input;

use anyhow::{Context, Result};
use args::{Cli, highlights_from_args};
use clap::Parser;
use csv_input::{SERIES_COLUMN, read_series_csv};
use sparklines::html::{HtmlOptions, write_html};
use sparklines::options::SparklineOptionsBuilder;
use sparklines::table::{TableOptions, add_sparklines, with_sparklines};
use sparklines::SparklineOptions;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

/// Translate the command line into render options
fn sparkline_options(args: &Cli) -> Result<SparklineOptions> {
    let mut builder: SparklineOptionsBuilder = SparklineOptions::new();
    builder
        .size(args.width, args.height)
        .format(args.format.into())
        .kind(args.kind)
        .fill(!args.no_fill);

    if let Some(color) = args.line_color {
        builder.line_color(color);
    }
    if let Some(color) = args.marker_color {
        builder.marker_color(color);
    }
    if let Some(ref highlight) = args.highlight {
        builder.highlights(highlights_from_args(highlight));
    }
    if let (Some(min), Some(max)) = (args.y_min, args.y_max) {
        builder.y_range(min..=max);
    }
    if let Some(baseline) = args.baseline {
        builder.baseline(baseline);
    }

    Ok(builder.build()?)
}

fn run(args: &Cli) -> Result<PathBuf> {
    let start_time = Instant::now();

    let table = read_series_csv(&args.input, args.label_columns.as_deref())?;
    let label_names = table.label_names.clone();
    info!(
        "Loaded {} rows from {} ({} label column(s))",
        table.rows.len(),
        args.input.display(),
        label_names.len()
    );
    let mut df = table.into_data_frame()?;

    let table_options = TableOptions {
        title: args.title.clone(),
        sparkline: sparkline_options(args)?,
        columns: args.drop_series.then(|| label_names.clone()),
    };
    debug!("Render options: {:?}", table_options.sparkline);

    if args.drop_series {
        df = with_sparklines(&df, SERIES_COLUMN, &table_options)
            .context("failed to render sparklines")?;
    } else {
        add_sparklines(&mut df, SERIES_COLUMN, &table_options)
            .context("failed to render sparklines")?;
    }

    let html_options = HtmlOptions {
        index: args.index,
        ..HtmlOptions::for_sparklines(&args.title)
    };
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.input.with_extension("html"));
    let written = write_html(&df, &output, &html_options)
        .with_context(|| format!("failed to write {}", output.display()))?;

    info!(
        "Rendered {} sparkline(s) in {:?}",
        df.height(),
        start_time.elapsed()
    );
    Ok(written)
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing subscriber with environment filter
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let written = run(&args)?;
    println!("{}", written.display());
    Ok(())
}
