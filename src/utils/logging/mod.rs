//! Logging utilities
//!
//! Standardized messages for dataset loads.

pub mod log;

pub use log::{log_load_complete, log_load_fallback, log_load_start};
