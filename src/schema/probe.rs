//! Typed checks for column presence.
//!
//! Column-dependent computations ask the schema up front instead of looking
//! columns up by name and tolerating absence later.

use arrow::datatypes::Schema;

use super::{GENDER, MARITAL_STATUS, OVERTIME_LEVEL, REQUIRED_COLUMNS};

/// Outcome of probing a schema for a group of columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnPresence<T> {
    /// All columns exist
    Present(T),
    /// At least one column is missing; the missing names are listed
    Absent(Vec<String>),
}

impl<T> ColumnPresence<T> {
    /// Whether every probed column was found
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }
}

/// Column indices needed by the overtime cross tabulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossTabColumns {
    pub marital_status: usize,
    pub gender: usize,
    pub overtime_level: usize,
}

impl CrossTabColumns {
    /// Names of the probed columns, in the order they are reported
    pub const NAMES: [&'static str; 3] = [MARITAL_STATUS, OVERTIME_LEVEL, GENDER];

    /// Look up the three cross tabulation columns in `schema`
    pub fn probe(schema: &Schema) -> ColumnPresence<Self> {
        let missing = missing_columns(schema, &Self::NAMES);
        if !missing.is_empty() {
            return ColumnPresence::Absent(missing);
        }

        match (
            schema.index_of(MARITAL_STATUS),
            schema.index_of(GENDER),
            schema.index_of(OVERTIME_LEVEL),
        ) {
            (Ok(marital_status), Ok(gender), Ok(overtime_level)) => ColumnPresence::Present(Self {
                marital_status,
                gender,
                overtime_level,
            }),
            _ => ColumnPresence::Absent(Self::NAMES.iter().map(ToString::to_string).collect()),
        }
    }
}

/// Names of the required columns `schema` lacks
pub fn missing_required_columns(schema: &Schema) -> Vec<String> {
    missing_columns(schema, &REQUIRED_COLUMNS)
}

fn missing_columns(schema: &Schema, names: &[&str]) -> Vec<String> {
    names
        .iter()
        .filter(|name| schema.index_of(name).is_err())
        .map(ToString::to_string)
        .collect()
}
