//! Utility functions for error handling
//!
//! File access helpers that attach the path and purpose to every failure.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{DashboardError, Result};

/// Safely read a whole file into memory with rich error information
///
/// # Arguments
/// * `path` - The path to the file to read
/// * `purpose` - Why the file is being read (for error context)
pub fn safe_read_bytes(path: &Path, purpose: &str) -> Result<Vec<u8>> {
    if !path.exists() {
        return Err(DashboardError::io(
            path,
            format!("Needed for: {purpose}"),
            io::Error::new(io::ErrorKind::NotFound, "File not found"),
        ));
    }

    if !path.is_file() {
        return Err(DashboardError::io(
            path,
            format!("Expected a file for: {purpose}"),
            io::Error::new(io::ErrorKind::InvalidInput, "Path is not a file"),
        ));
    }

    fs::read(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => {
                "Permission denied - check file permissions".to_string()
            }
            io::ErrorKind::NotFound => {
                "File not found - it may have been deleted during operation".to_string()
            }
            _ => format!("Failed to read file for: {purpose}"),
        };
        DashboardError::io(path, context, e)
    })
}

/// Read a file and require its content to be valid UTF-8
pub fn safe_read_utf8(path: &Path, purpose: &str) -> Result<String> {
    let bytes = safe_read_bytes(path, purpose)?;
    String::from_utf8(bytes).map_err(|e| DashboardError::Encoding {
        path: path.to_path_buf(),
        message: format!(
            "File contains invalid UTF-8 data at byte {}",
            e.utf8_error().valid_up_to()
        ),
    })
}

/// Write a file, creating parent directories as needed
pub fn safe_write(path: &Path, contents: &[u8], purpose: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            DashboardError::io(
                parent,
                format!("Failed to create directory for: {purpose}"),
                e,
            )
        })?;
    }

    fs::write(path, contents)
        .map_err(|e| DashboardError::io(path, format!("Failed to write file for: {purpose}"), e))
}
