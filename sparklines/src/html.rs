//! HTML table export.
//!
//! Cells are escaped by default; columns listed in `raw_columns` are written
//! verbatim so their `<img>` markup renders as an image instead of text.

use crate::error::Result;
use derive_builder::Builder;
use polars::prelude::*;
use std::path::{Path, PathBuf};
use tracing::info;

/// Stylesheet matching the notebook rendering of a table
pub const TABLE_CSS: &str = "body {
    margin: 0;
    font-family: Helvetica;
}
table.dataframe {
    border-collapse: collapse;
    border: none;
}
table.dataframe tr {
    border: none;
}
table.dataframe td, table.dataframe th {
    margin: 0;
    border: 1px solid #000000;
    padding-left: 0.25em;
    padding-right: 0.25em;
}
table.dataframe th:not(:empty) {
    background-color: #f2f2f2;
    text-align: left;
    font-weight: bold;
}
table.dataframe tr:nth-child(2) th:empty {
    border-left: none;
    border-right: 1px dashed #888;
}
table.dataframe td {
    border: 1px solid #bababa;
    background-color: #ffffff;
}
";

/// Options for HTML export
#[derive(Builder, Clone, Debug, PartialEq)]
#[builder(setter(into, strip_option), default)]
pub struct HtmlOptions {
    /// Prefix each row with its row number
    #[builder(default = "false")]
    pub index: bool,

    /// HTML-escape cell text
    #[builder(default = "true")]
    pub escape: bool,

    /// Columns written without escaping
    #[builder(default)]
    pub raw_columns: Vec<String>,

    /// Items shown per list cell before eliding with `...`
    pub max_seq_items: Option<usize>,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            index: false,
            escape: true,
            raw_columns: Vec::new(),
            max_seq_items: None,
        }
    }
}

impl HtmlOptions {
    /// Create a new builder for HtmlOptions
    pub fn new() -> HtmlOptionsBuilder {
        HtmlOptionsBuilder::default()
    }

    /// Display settings for a table carrying a sparkline column named `title`
    ///
    /// The sparkline column is raw markup and the source series are shortened
    /// to two items so the table stays narrow.
    pub fn for_sparklines(title: impl Into<String>) -> Self {
        Self {
            raw_columns: vec![title.into()],
            max_seq_items: Some(2),
            ..Self::default()
        }
    }

    fn is_raw(&self, column: &str) -> bool {
        !self.escape || self.raw_columns.iter().any(|raw| raw == column)
    }
}

/// Escape the five HTML-significant characters
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn cell_text(value: AnyValue<'_>, max_seq_items: Option<usize>) -> Result<String> {
    Ok(match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::List(series) => {
            let shown = max_seq_items.map_or(series.len(), |max| max.min(series.len()));
            let mut items = Vec::with_capacity(shown + 1);
            for i in 0..shown {
                items.push(cell_text(series.get(i)?, max_seq_items)?);
            }
            if shown < series.len() {
                items.push("...".to_string());
            }
            format!("[{}]", items.join(", "))
        }
        other => other.to_string(),
    })
}

/// Render `df` as an HTML `<table>`
pub fn to_html_table(df: &DataFrame, options: &HtmlOptions) -> Result<String> {
    let mut lines = vec![
        "<table border=\"1\" class=\"dataframe\">".to_string(),
        "  <thead>".to_string(),
        "    <tr style=\"text-align: right;\">".to_string(),
    ];
    if options.index {
        lines.push("      <th></th>".to_string());
    }
    for name in df.get_column_names() {
        lines.push(format!("      <th>{}</th>", escape_html(name.as_str())));
    }
    lines.push("    </tr>".to_string());
    lines.push("  </thead>".to_string());
    lines.push("  <tbody>".to_string());

    let columns = df.get_columns();
    for row in 0..df.height() {
        lines.push("    <tr>".to_string());
        if options.index {
            lines.push(format!("      <th>{row}</th>"));
        }
        for column in columns {
            let series = column.as_materialized_series();
            let text = cell_text(series.get(row)?, options.max_seq_items)?;
            let text = if options.is_raw(column.name().as_str()) {
                text
            } else {
                escape_html(&text)
            };
            lines.push(format!("      <td>{text}</td>"));
        }
        lines.push("    </tr>".to_string());
    }

    lines.push("  </tbody>".to_string());
    lines.push("</table>".to_string());
    Ok(lines.join("\n"))
}

/// Render `df` as a standalone HTML document with [`TABLE_CSS`]
pub fn to_html_page(df: &DataFrame, options: &HtmlOptions) -> Result<String> {
    let table = to_html_table(df, options)?;
    Ok(format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<style>\n{TABLE_CSS}</style>\n</head>\n<body>\n{table}\n</body>\n</html>\n"
    ))
}

/// Resolve the output path, appending `.html` unless already present
pub fn html_path(path: &Path) -> PathBuf {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("html") => path.to_path_buf(),
        _ => {
            let mut name = path.as_os_str().to_os_string();
            name.push(".html");
            PathBuf::from(name)
        }
    }
}

/// Write `df` as a standalone HTML page and return the written path
pub fn write_html(df: &DataFrame, path: impl AsRef<Path>, options: &HtmlOptions) -> Result<PathBuf> {
    let path = html_path(path.as_ref());
    let page = to_html_page(df, options)?;
    std::fs::write(&path, page)?;
    info!("wrote {} rows to {}", df.height(), path.display());
    Ok(path)
}
