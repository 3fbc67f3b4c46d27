//! Sparkline columns on polars DataFrames.
//!
//! A source column holds one list of numbers per row. Each row is rendered
//! independently and the resulting `<img>` markup lands in a new string
//! column, ready for [`crate::html`] to emit unescaped.

use crate::error::{Result, SparklineError};
use crate::options::SparklineOptions;
use crate::plots::render_sparkline;
use derive_builder::Builder;
use polars::prelude::*;
use rayon::prelude::*;
use tracing::debug;

/// Default name of the inserted column
pub const DEFAULT_TITLE: &str = "sparklines";

/// Options for adding a sparkline column to a table
///
/// # Example
///
/// ```rust,no_run
/// use sparklines::table::TableOptions;
/// use sparklines::options::SparklineOptions;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let options = TableOptions::new()
///     .title("trend")
///     .sparkline(SparklineOptions::new().size(100, 20).build()?)
///     .columns(vec!["name".to_string()])
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Builder, Clone, Debug)]
#[builder(setter(into, strip_option), default)]
pub struct TableOptions {
    /// Name of the column receiving the markup
    #[builder(default = "DEFAULT_TITLE.to_string()")]
    pub title: String,

    /// Render options applied to every row
    #[builder(default)]
    pub sparkline: SparklineOptions,

    /// Columns kept by [`with_sparklines`] ahead of the title column
    pub columns: Option<Vec<String>>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            sparkline: SparklineOptions::default(),
            columns: None,
        }
    }
}

impl TableOptions {
    /// Create a new builder for TableOptions
    pub fn new() -> TableOptionsBuilder {
        TableOptionsBuilder::default()
    }
}

/// Build a list column from one series per row
pub fn series_column(name: &str, rows: &[Vec<f64>]) -> Column {
    let series: Vec<Series> = rows
        .iter()
        .map(|row| Series::new(PlSmallStr::EMPTY, row))
        .collect();
    Column::new(name.into(), series)
}

/// Read every row of a list column as `f64` samples
pub fn column_rows(df: &DataFrame, column: &str) -> Result<Vec<Vec<f64>>> {
    let source = df
        .column(column)
        .map_err(|_| SparklineError::invalid_input(format!("column '{column}' not found")))?;
    let series = source.as_materialized_series();
    let list = series.list().map_err(|_| {
        SparklineError::invalid_input(format!(
            "column '{column}' must hold lists of numbers, found {}",
            series.dtype()
        ))
    })?;

    let mut rows = Vec::with_capacity(list.len());
    for (row, value) in list.into_iter().enumerate() {
        let value = value
            .ok_or_else(|| SparklineError::invalid_input(format!("row {row} has no series")))?;
        let value = value.cast(&DataType::Float64)?;
        let samples = value
            .f64()?
            .into_iter()
            .enumerate()
            .map(|(i, sample)| {
                sample.ok_or_else(|| {
                    SparklineError::invalid_input(format!(
                        "row {row}: sample {i} is null or not numeric"
                    ))
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        rows.push(samples);
    }
    Ok(rows)
}

/// Render one `<img>` tag per row, in row order
pub fn render_rows(rows: &[Vec<f64>], options: &SparklineOptions) -> Result<Vec<String>> {
    rows.par_iter()
        .enumerate()
        .map(|(row, samples)| {
            render_sparkline(samples.iter().copied(), options)
                .map(|rendered| rendered.to_html())
                .map_err(|e| match e {
                    SparklineError::InvalidInput { message } => {
                        SparklineError::invalid_input(format!("row {row}: {message}"))
                    }
                    other => other,
                })
        })
        .collect()
}

/// Add (or replace) the sparkline column of `df` in place
pub fn add_sparklines(df: &mut DataFrame, column: &str, options: &TableOptions) -> Result<()> {
    let start = std::time::Instant::now();
    let rows = column_rows(df, column)?;
    let cells = render_rows(&rows, &options.sparkline)?;

    df.with_column(Column::new(options.title.as_str().into(), cells))?;
    debug!(
        "rendered {} sparklines from '{}' into '{}' in {:?}",
        rows.len(),
        column,
        options.title,
        start.elapsed()
    );
    Ok(())
}

/// Return a copy of `df` holding the sparkline column
///
/// The copy keeps the columns listed in `options.columns` followed by the
/// title column (unless already listed). Without a column list only the title
/// column is kept. `df` is left untouched.
pub fn with_sparklines(df: &DataFrame, column: &str, options: &TableOptions) -> Result<DataFrame> {
    let mut selection = options.columns.clone().unwrap_or_default();
    if let Some(missing) = selection
        .iter()
        .find(|name| df.get_column_index(name.as_str()).is_none() && **name != options.title)
    {
        return Err(SparklineError::invalid_input(format!(
            "column '{missing}' not found"
        )));
    }
    if !selection.contains(&options.title) {
        selection.push(options.title.clone());
    }

    let mut copy = df.clone();
    add_sparklines(&mut copy, column, options)?;
    Ok(copy.select(selection)?)
}
