//! Employee record table
//!
//! `HrTable` wraps the single Arrow record batch produced by the loader. It is
//! never mutated: deriving a column yields a new table, so a table shared
//! through the loader cache stays as it was loaded.

use std::sync::Arc;

use arrow::datatypes::{Schema, SchemaRef};
use arrow::record_batch::RecordBatch;

use super::Category;
use crate::error::{DashboardError, Result};
use crate::schema::{AGE, GENDER, RETIRED_FLAG};
use crate::utils::arrow::{float_values, string_values};

/// Loaded HR dataset
#[derive(Debug, Clone)]
pub struct HrTable {
    batch: RecordBatch,
}

impl HrTable {
    /// Wrap a record batch
    #[must_use]
    pub fn new(batch: RecordBatch) -> Self {
        Self { batch }
    }

    /// A table with no columns and no rows, used to signal a failed load
    #[must_use]
    pub fn empty() -> Self {
        Self {
            batch: RecordBatch::new_empty(Arc::new(Schema::empty())),
        }
    }

    /// Whether the table holds no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.batch.num_rows() == 0
    }

    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.batch.num_rows()
    }

    #[must_use]
    pub fn batch(&self) -> &RecordBatch {
        &self.batch
    }

    #[must_use]
    pub fn schema(&self) -> SchemaRef {
        self.batch.schema()
    }

    /// Names of all columns, in table order
    #[must_use]
    pub fn column_names(&self) -> Vec<String> {
        self.batch
            .schema()
            .fields()
            .iter()
            .map(|field| field.name().clone())
            .collect()
    }

    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.batch.schema().index_of(name).is_ok()
    }

    /// Gender of every row
    pub fn genders(&self) -> Result<Vec<Option<String>>> {
        string_values(&self.batch, GENDER)
    }

    /// Age of every row, `None` where the cell is missing or not numeric
    pub fn ages(&self) -> Result<Vec<Option<f64>>> {
        float_values(&self.batch, AGE)
    }

    /// The derived attrition flag of every row
    pub fn retired_flags(&self) -> Result<Vec<Option<f64>>> {
        float_values(&self.batch, RETIRED_FLAG)
    }

    /// Any column read as strings
    pub fn strings(&self, column: &str) -> Result<Vec<Option<String>>> {
        string_values(&self.batch, column)
    }

    /// Any column read as categories
    ///
    /// Numeric columns keep their numeric order; labels are the values
    /// rendered as text.
    pub fn categories(&self, column: &str) -> Result<Vec<Option<Category>>> {
        let schema = self.batch.schema();
        let field = schema
            .field_with_name(column)
            .map_err(|_| DashboardError::column_not_found(column))?;
        let labels = string_values(&self.batch, column)?;

        if !field.data_type().is_numeric() {
            return Ok(labels.into_iter().map(|label| label.map(Category::text)).collect());
        }

        let values = float_values(&self.batch, column)?;
        Ok(labels
            .into_iter()
            .zip(values)
            .map(|(label, value)| match (label, value) {
                (Some(label), Some(value)) => Some(Category::number(label, value)),
                (Some(label), None) => Some(Category::text(label)),
                _ => None,
            })
            .collect())
    }
}

impl PartialEq for HrTable {
    fn eq(&self, other: &Self) -> bool {
        self.batch == other.batch
    }
}
