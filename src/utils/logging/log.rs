//! Logging helpers for dataset loads
//!
//! Loads are logged as a pair: the path being read, then the row and column
//! counts once the table is ready. Fallbacks to an empty table go through
//! `log_load_fallback` so the reason is always attached to the path.

use std::path::Path;
use std::time::Duration;

/// Log that a dataset is about to be read
pub fn log_load_start(path: &Path) {
    log::info!("Reading HR data from {}", path.display());
}

/// Log the shape of a loaded table
///
/// # Arguments
/// * `path` - Dataset that was read
/// * `rows` - Rows in the prepared table
/// * `columns` - Columns left after derived columns were added and constants dropped
/// * `elapsed` - Time spent reading and preparing
pub fn log_load_complete(path: &Path, rows: usize, columns: usize, elapsed: Duration) {
    log::info!(
        "Loaded {rows} rows x {columns} columns from {} in {elapsed:?}",
        path.display()
    );
}

/// Log why a load produced an empty table
pub fn log_load_fallback(path: &Path, reason: &dyn std::fmt::Display) {
    log::warn!(
        "Could not load HR data from {} ({reason}); using an empty table",
        path.display()
    );
}
