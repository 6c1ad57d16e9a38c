//! CSV loading for the HR dataset
//!
//! The loader never fails outward: anything that prevents a usable table
//! (missing file, bad encoding, malformed CSV, missing required columns)
//! is logged and reported as an empty table. Callers halt on emptiness.

use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use arrow::array::{ArrayRef, Int8Array};
use arrow::compute::concat_batches;
use arrow::csv::ReaderBuilder;
use arrow::csv::reader::Format;
use arrow::datatypes::{DataType, Field};
use arrow::record_batch::RecordBatch;

use crate::error::util::safe_read_utf8;
use crate::error::{DashboardError, Result};
use crate::models::HrTable;
use crate::schema::{
    DROPPED_COLUMNS, RETIRED_FLAG, RETIRED_VALUE, RETIREMENT_STATUS, missing_required_columns,
};
use crate::utils::arrow::{string_values, with_column, without_columns};
use crate::utils::logging::{log_load_complete, log_load_fallback, log_load_start};

/// Load the HR dataset, returning an empty table on any failure
pub fn load_hr_table(path: &Path) -> HrTable {
    match read_hr_csv(path) {
        Ok(table) => table,
        Err(err) => {
            log_load_fallback(path, &err);
            HrTable::empty()
        }
    }
}

/// Read and prepare the HR dataset
///
/// Adds the attrition flag and removes the constant columns.
pub fn read_hr_csv(path: &Path) -> Result<HrTable> {
    let start = Instant::now();
    log_load_start(path);

    let content = safe_read_utf8(path, "loading HR data")?;
    let batch = parse_csv(&content)?;

    let missing = missing_required_columns(&batch.schema());
    if let Some(column) = missing.first() {
        return Err(DashboardError::column_not_found(column));
    }

    let batch = prepare_batch(&batch)?;
    log_load_complete(path, batch.num_rows(), batch.num_columns(), start.elapsed());
    Ok(HrTable::new(batch))
}

/// Parse UTF-8 CSV text with a header row into a single record batch
pub fn parse_csv(content: &str) -> Result<RecordBatch> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let format = Format::default().with_header(true);
    let (schema, _) = format.infer_schema(Cursor::new(content.as_bytes()), None)?;
    let schema = Arc::new(schema);

    let reader = ReaderBuilder::new(schema.clone())
        .with_header(true)
        .build(Cursor::new(content.as_bytes()))?;
    let batches = reader.collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(concat_batches(&schema, &batches)?)
}

/// Derive the attrition flag and drop the uninformative columns
pub fn prepare_batch(batch: &RecordBatch) -> Result<RecordBatch> {
    let flags: Int8Array = string_values(batch, RETIREMENT_STATUS)?
        .iter()
        .map(|status| Some(i8::from(status.as_deref() == Some(RETIRED_VALUE))))
        .collect();

    let batch = with_column(
        batch,
        Field::new(RETIRED_FLAG, DataType::Int8, false),
        Arc::new(flags) as ArrayRef,
    )?;
    without_columns(&batch, &DROPPED_COLUMNS)
}
