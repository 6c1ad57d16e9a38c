//! Error handling for the HR dashboard.

pub mod util;

use std::io;
use std::path::PathBuf;

use arrow::error::ArrowError;

/// Errors produced while loading, analysing or rendering the dashboard
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// Error opening or reading a file
    #[error("IO error for {path}: {context}")]
    Io {
        path: PathBuf,
        context: String,
        #[source]
        source: io::Error,
    },

    /// File content is not valid UTF-8
    #[error("Encoding error in {path}: {message}")]
    Encoding { path: PathBuf, message: String },

    /// Error parsing or processing Arrow data
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// A column the computation depends on is absent
    #[error("Column not found: {column}")]
    ColumnNotFound { column: String },

    /// A column exists but cannot be read as the expected type
    #[error("Column '{column}' has unsupported type {data_type}")]
    InvalidColumnType { column: String, data_type: String },

    /// Font file exists but is not a TrueType/OpenType font
    #[error("Invalid font {path}: {message}")]
    Font { path: PathBuf, message: String },

    /// Error serializing the dashboard snapshot
    #[error("Snapshot serialization error: {0}")]
    Snapshot(#[from] serde_json::Error),
}

impl DashboardError {
    /// Build an IO error with the path and the purpose of the operation
    pub fn io(path: impl Into<PathBuf>, context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            context: context.into(),
            source,
        }
    }

    /// Build a missing-column error
    pub fn column_not_found(column: &str) -> Self {
        Self::ColumnNotFound {
            column: column.to_string(),
        }
    }
}

/// Result type for dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;
