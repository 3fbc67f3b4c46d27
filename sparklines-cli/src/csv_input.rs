use anyhow::{Context, Result, anyhow, bail};
use polars::prelude::*;
use sparklines::table::series_column;
use std::path::Path;

/// Name of the list column holding each row's series
pub const SERIES_COLUMN: &str = "series";

/// A CSV file split into label columns and one series per row
#[derive(Debug)]
pub struct SeriesTable {
    pub label_names: Vec<String>,
    pub labels: Vec<Vec<String>>,
    pub rows: Vec<Vec<f64>>,
}

impl SeriesTable {
    pub fn into_data_frame(self) -> Result<DataFrame> {
        let mut columns: Vec<Column> = self
            .label_names
            .iter()
            .zip(self.labels)
            .map(|(name, values)| Column::new(name.as_str().into(), values))
            .collect();
        columns.push(series_column(SERIES_COLUMN, &self.rows));
        Ok(DataFrame::new(columns)?)
    }
}

/// Read a CSV file whose non-label columns are the samples of each row
///
/// `label_columns` defaults to the first column. Blank sample cells are
/// skipped; anything else that does not parse as a number is an error.
pub fn read_series_csv(path: &Path, label_columns: Option<&[String]>) -> Result<SeriesTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let headers = reader.headers()?.clone();

    let label_names: Vec<String> = match label_columns {
        Some(names) => names.to_vec(),
        None => headers.iter().take(1).map(str::to_string).collect(),
    };
    let mut label_indices = Vec::with_capacity(label_names.len());
    for name in &label_names {
        let index = headers
            .iter()
            .position(|header| header == name)
            .ok_or_else(|| anyhow!("label column '{name}' not found in {}", path.display()))?;
        label_indices.push(index);
    }
    if label_names.iter().any(|name| name == SERIES_COLUMN) {
        bail!("'{SERIES_COLUMN}' is reserved for the series column");
    }

    let sample_indices: Vec<usize> = (0..headers.len())
        .filter(|index| !label_indices.contains(index))
        .collect();
    if sample_indices.is_empty() {
        bail!("{} has no sample columns", path.display());
    }

    let mut labels = vec![Vec::new(); label_names.len()];
    let mut rows = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("failed to read row {row}"))?;

        for (values, &index) in labels.iter_mut().zip(&label_indices) {
            values.push(record.get(index).unwrap_or_default().to_string());
        }

        let mut samples = Vec::with_capacity(sample_indices.len());
        for &index in &sample_indices {
            let cell = record.get(index).unwrap_or_default();
            if cell.is_empty() {
                continue;
            }
            let value: f64 = cell.parse().with_context(|| {
                format!("row {row}, column '{}': '{cell}' is not a number", &headers[index])
            })?;
            samples.push(value);
        }
        rows.push(samples);
    }

    Ok(SeriesTable {
        label_names,
        labels,
        rows,
    })
}
