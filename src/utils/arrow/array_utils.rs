//! Utilities for working with Arrow arrays.
//!
//! Columns in the HR table come out of CSV type inference, so the same
//! logical column may arrive as integers, floats, booleans or strings. The
//! readers here cast to the type the caller wants and hand back plain Rust
//! values.

use std::sync::Arc;

use arrow::array::{Array, ArrayRef, Float64Array, StringArray};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use log::{debug, warn};

use crate::error::{DashboardError, Result};

/// Get a column from a record batch by name
///
/// # Returns
///
/// * `Ok(Some(ArrayRef))` - The column if found
/// * `Ok(None)` - If the column is not found and `required` is false
/// * `Err(DashboardError)` - If the column is not found and `required` is true
pub fn get_column(
    batch: &RecordBatch,
    column_name: &str,
    required: bool,
) -> Result<Option<ArrayRef>> {
    match batch.schema().index_of(column_name) {
        Ok(idx) => Ok(Some(batch.column(idx).clone())),
        Err(_) if required => Err(DashboardError::column_not_found(column_name)),
        Err(_) => {
            warn!("Column '{column_name}' not found in record batch");
            Ok(None)
        }
    }
}

fn required_column(batch: &RecordBatch, column_name: &str) -> Result<ArrayRef> {
    get_column(batch, column_name, true)?
        .ok_or_else(|| DashboardError::column_not_found(column_name))
}

fn cast_column(column: &ArrayRef, column_name: &str, target: &DataType) -> Result<ArrayRef> {
    if column.data_type() == target {
        return Ok(column.clone());
    }

    debug!(
        "Converting column '{column_name}' from {:?} to {target:?}",
        column.data_type()
    );
    cast(column.as_ref(), target).map_err(|_| DashboardError::InvalidColumnType {
        column: column_name.to_string(),
        data_type: column.data_type().to_string(),
    })
}

/// Read a column as optional strings, casting non-string columns
pub fn string_values(batch: &RecordBatch, column_name: &str) -> Result<Vec<Option<String>>> {
    let column = required_column(batch, column_name)?;
    let column = cast_column(&column, column_name, &DataType::Utf8)?;
    let strings = column
        .as_any()
        .downcast_ref::<StringArray>()
        .ok_or_else(|| DashboardError::InvalidColumnType {
            column: column_name.to_string(),
            data_type: column.data_type().to_string(),
        })?;

    Ok(strings.iter().map(|value| value.map(str::to_string)).collect())
}

/// Read a column as optional floats
///
/// Values that cannot be parsed as numbers become `None`.
pub fn float_values(batch: &RecordBatch, column_name: &str) -> Result<Vec<Option<f64>>> {
    let column = required_column(batch, column_name)?;
    let column = cast_column(&column, column_name, &DataType::Float64)?;
    let floats = column
        .as_any()
        .downcast_ref::<Float64Array>()
        .ok_or_else(|| DashboardError::InvalidColumnType {
            column: column_name.to_string(),
            data_type: column.data_type().to_string(),
        })?;

    Ok(floats.iter().collect())
}

/// Return a new batch with `array` stored under `field`
///
/// An existing column with the same name is replaced in place; otherwise the
/// column is appended.
pub fn with_column(batch: &RecordBatch, field: Field, array: ArrayRef) -> Result<RecordBatch> {
    let schema = batch.schema();
    let mut fields: Vec<Field> = schema.fields().iter().map(|f| f.as_ref().clone()).collect();
    let mut columns: Vec<ArrayRef> = batch.columns().to_vec();

    match schema.index_of(field.name()) {
        Ok(idx) => {
            fields[idx] = field;
            columns[idx] = array;
        }
        Err(_) => {
            fields.push(field);
            columns.push(array);
        }
    }

    Ok(RecordBatch::try_new(Arc::new(Schema::new(fields)), columns)?)
}

/// Return a new batch without the named columns; names that do not exist are skipped
pub fn without_columns(batch: &RecordBatch, names: &[&str]) -> Result<RecordBatch> {
    let schema = batch.schema();
    let keep: Vec<usize> = schema
        .fields()
        .iter()
        .enumerate()
        .filter(|(_, field)| !names.contains(&field.name().as_str()))
        .map(|(idx, _)| idx)
        .collect();

    Ok(batch.project(&keep)?)
}
