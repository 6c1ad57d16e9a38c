//! Age brackets
//!
//! Five right-closed intervals over age: `(18,29] (29,39] (39,49] (49,59] (59,70]`.
//! Ages at or below 18, above 70, or missing belong to no bracket.

use std::sync::Arc;

use arrow::array::{ArrayRef, StringArray};
use arrow::datatypes::{DataType, Field};
use serde::Serialize;

use crate::error::Result;
use crate::models::HrTable;
use crate::schema::AGE_BRACKET;
use crate::utils::arrow::with_column;

/// Bin edges shared by all brackets
pub const AGE_BIN_EDGES: [f64; 6] = [18.0, 29.0, 39.0, 49.0, 59.0, 70.0];

/// An age bracket, ordered youngest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum AgeBracket {
    TwentiesOrYounger,
    Thirties,
    Forties,
    Fifties,
    SixtiesOrOlder,
}

impl AgeBracket {
    /// All brackets in display order
    pub const ALL: [AgeBracket; 5] = [
        AgeBracket::TwentiesOrYounger,
        AgeBracket::Thirties,
        AgeBracket::Forties,
        AgeBracket::Fifties,
        AgeBracket::SixtiesOrOlder,
    ];

    /// Bracket containing `age`, if any
    #[must_use]
    pub fn from_age(age: f64) -> Option<Self> {
        if age.is_nan() {
            return None;
        }
        AGE_BIN_EDGES
            .windows(2)
            .position(|edges| age > edges[0] && age <= edges[1])
            .map(|idx| Self::ALL[idx])
    }

    /// Label shown on the chart axis
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::TwentiesOrYounger => "20대 이하",
            Self::Thirties => "30대",
            Self::Forties => "40대",
            Self::Fifties => "50대",
            Self::SixtiesOrOlder => "60대 이상",
        }
    }

    /// Parse a label produced by [`AgeBracket::label`]
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|bracket| bracket.label() == label)
    }
}

/// Return a copy of `table` with the age bracket column added
///
/// Rows without a bracket hold null.
pub fn with_age_bracket(table: &HrTable) -> Result<HrTable> {
    let labels: StringArray = table
        .ages()?
        .into_iter()
        .map(|age| age.and_then(AgeBracket::from_age).map(AgeBracket::label))
        .collect();

    let batch = with_column(
        table.batch(),
        Field::new(AGE_BRACKET, DataType::Utf8, true),
        Arc::new(labels) as ArrayRef,
    )?;
    Ok(HrTable::new(batch))
}

/// Count for one bracket
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BracketCount {
    pub bracket: AgeBracket,
    pub label: &'static str,
    pub count: usize,
}

/// Headcount per age bracket, in bracket order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgeDistribution {
    pub buckets: Vec<BracketCount>,
}

impl AgeDistribution {
    /// Count rows per bracket; the bracket column is derived when missing
    pub fn from_table(table: &HrTable) -> Result<Self> {
        let labels = if table.has_column(AGE_BRACKET) {
            table.strings(AGE_BRACKET)?
        } else {
            with_age_bracket(table)?.strings(AGE_BRACKET)?
        };

        let mut counts = [0usize; 5];
        for bracket in labels.iter().flatten().filter_map(|l| AgeBracket::from_label(l)) {
            counts[bracket as usize] += 1;
        }

        Ok(Self::from_counts(counts))
    }

    #[must_use]
    pub fn from_counts(counts: [usize; 5]) -> Self {
        let buckets = AgeBracket::ALL
            .into_iter()
            .zip(counts)
            .map(|(bracket, count)| BracketCount {
                bracket,
                label: bracket.label(),
                count,
            })
            .collect();
        Self { buckets }
    }

    /// Rows that fell into some bracket
    #[must_use]
    pub fn total(&self) -> usize {
        self.buckets.iter().map(|b| b.count).sum()
    }

    #[must_use]
    pub fn count(&self, bracket: AgeBracket) -> usize {
        self.buckets
            .iter()
            .find(|b| b.bracket == bracket)
            .map_or(0, |b| b.count)
    }
}
