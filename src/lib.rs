//! A Rust library for rendering an HR attrition and diversity dashboard
//! from a CSV dataset, with Arrow-backed loading and self-contained HTML/SVG
//! output.

pub mod algorithm;
pub mod cache;
pub mod chart;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod loader;
pub mod models;
pub mod schema;
pub mod utils;

// Re-export the most common types for easier use
pub use cache::TableCache;
pub use config::DashboardConfig;
pub use dashboard::{
    Dashboard, DashboardSnapshot, FontResource, HtmlSurface, RenderOutcome, Surface,
};
pub use error::{DashboardError, Result};
pub use loader::{load_hr_table, read_hr_csv};
pub use models::HrTable;

// Arrow types
pub use arrow::record_batch::RecordBatch;
