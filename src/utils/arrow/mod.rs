//! Arrow data handling utilities
//!
//! Helpers for pulling typed values out of record batch columns.

pub mod array_utils;

pub use array_utils::{
    float_values, get_column, string_values, with_column, without_columns,
};
