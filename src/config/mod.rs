//! Configuration for the dashboard pipeline.

use std::path::{Path, PathBuf};

/// Default location of the HR dataset
pub const DEFAULT_DATA_PATH: &str = "HR Data.csv";

/// Default location of the font embedded into every chart
pub const DEFAULT_FONT_PATH: &str = "./fonts/NotoSansKR-Regular.ttf";

/// Default location of the rendered page
pub const DEFAULT_OUTPUT_PATH: &str = "dashboard.html";

/// Default location of the JSON snapshot
pub const DEFAULT_SNAPSHOT_PATH: &str = "dashboard.json";

/// Default number of loaded tables kept in memory
pub const DEFAULT_CACHE_CAPACITY: usize = 8;

/// Configuration for a dashboard render
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// CSV file with employee records
    pub data_path: PathBuf,
    /// TrueType font applied to all chart text
    pub font_path: PathBuf,
    /// Where the HTML page is written
    pub output_path: PathBuf,
    /// Where the JSON snapshot is written, if anywhere
    pub snapshot_path: Option<PathBuf>,
    /// Browser title of the page
    pub page_title: String,
    /// Maximum number of tables kept by the loader cache
    pub cache_capacity: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            font_path: PathBuf::from(DEFAULT_FONT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            snapshot_path: Some(PathBuf::from(DEFAULT_SNAPSHOT_PATH)),
            page_title: "퇴직율 대시보드".to_string(),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl DashboardConfig {
    /// Use a different dataset
    #[must_use]
    pub fn with_data_path(mut self, path: impl AsRef<Path>) -> Self {
        self.data_path = path.as_ref().to_path_buf();
        self
    }

    /// Use a different font file
    #[must_use]
    pub fn with_font_path(mut self, path: impl AsRef<Path>) -> Self {
        self.font_path = path.as_ref().to_path_buf();
        self
    }

    /// Write the page somewhere else
    #[must_use]
    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.output_path = path.as_ref().to_path_buf();
        self
    }

    /// Write the snapshot somewhere else, or disable it with `None`
    #[must_use]
    pub fn with_snapshot_path(mut self, path: Option<PathBuf>) -> Self {
        self.snapshot_path = path;
        self
    }

    /// Change the loader cache size (at least one entry is always kept)
    #[must_use]
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity.max(1);
        self
    }
}
