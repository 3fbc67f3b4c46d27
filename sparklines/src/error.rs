//! Error types for sparkline rendering and table export.
//!
//! Rendering has exactly one contractual failure, `InvalidInput`: empty series,
//! non-finite samples, and malformed options. The remaining variants cover the
//! collaborators around the renderer (the plotting backend, polars, the file
//! system).

use polars::error::PolarsError;
use thiserror::Error;

/// Custom error type for sparkline operations.
#[derive(Debug, Error)]
pub enum SparklineError {
    /// Empty series, non-finite samples, or malformed options
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// The drawing backend or image encoder failed
    #[error("Render error: {message}")]
    Render { message: String },

    /// DataFrame access failures
    #[error("Table error: {0}")]
    Table(#[from] PolarsError),

    /// Export I/O failures
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SparklineError {
    /// Create an InvalidInput error with a message
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a Render error with a message
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }

    /// Whether this is the `InvalidInput` category
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

pub type Result<T> = std::result::Result<T, SparklineError>;
