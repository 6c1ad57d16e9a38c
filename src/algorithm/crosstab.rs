//! Overtime by marital status and gender
//!
//! A row-normalized cross tabulation of (marital status, gender) against
//! overtime level. The chart shows a single column of it: the second
//! overtime level in ascending order. Tables with fewer than two levels
//! cannot provide that column and are reported as such.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::error::Result;
use crate::models::{Category, HrTable};
use crate::schema::{ColumnPresence, CrossTabColumns, GENDER, MARITAL_STATUS, OVERTIME_LEVEL};

/// Index of the overtime level shown by the chart
pub const SELECTED_LEVEL_INDEX: usize = 1;

/// Row key of the cross tabulation
pub type RowKey = (String, String);

/// One (marital status, gender, overtime level) observation
pub type Record = (Option<Category>, Option<Category>, Option<Category>);

/// Row-normalized cross tabulation
///
/// Keys are ordered the way their source columns sort: numerically for
/// numeric columns, by label otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrossTab {
    /// (marital status, gender), ascending
    pub rows: Vec<RowKey>,
    /// Overtime levels, ascending
    pub columns: Vec<String>,
    /// Distinct marital statuses, ascending
    pub marital_statuses: Vec<String>,
    /// Distinct genders, ascending
    pub genders: Vec<String>,
    /// `percentages[row][column]`; every row sums to 100
    pub percentages: Vec<Vec<f64>>,
}

impl CrossTab {
    /// Build from (marital status, gender, overtime level) records
    ///
    /// Records with any missing member are skipped.
    pub fn build<I>(records: I) -> Self
    where
        I: IntoIterator<Item = Record>,
    {
        let mut counts: BTreeMap<(Category, Category), BTreeMap<Category, usize>> = BTreeMap::new();
        let mut levels: BTreeSet<Category> = BTreeSet::new();
        let mut marital_statuses: BTreeSet<Category> = BTreeSet::new();
        let mut genders: BTreeSet<Category> = BTreeSet::new();

        for record in records {
            let (Some(marital), Some(gender), Some(level)) = record else {
                continue;
            };
            marital_statuses.insert(marital.clone());
            genders.insert(gender.clone());
            *counts
                .entry((marital, gender))
                .or_default()
                .entry(level.clone())
                .or_default() += 1;
            levels.insert(level);
        }

        let mut rows = Vec::with_capacity(counts.len());
        let mut percentages = Vec::with_capacity(counts.len());

        for ((marital, gender), row_counts) in counts {
            let total: usize = row_counts.values().sum();
            let row = levels
                .iter()
                .map(|level| {
                    let count = row_counts.get(level).copied().unwrap_or(0);
                    count as f64 / total as f64 * 100.0
                })
                .collect();
            rows.push((marital.into_label(), gender.into_label()));
            percentages.push(row);
        }

        Self {
            rows,
            columns: levels.into_iter().map(Category::into_label).collect(),
            marital_statuses: marital_statuses.into_iter().map(Category::into_label).collect(),
            genders: genders.into_iter().map(Category::into_label).collect(),
            percentages,
        }
    }

    /// Build from a table whose cross tabulation columns were probed
    pub fn from_table(table: &HrTable) -> Result<Self> {
        let marital = table.categories(MARITAL_STATUS)?;
        let gender = table.categories(GENDER)?;
        let overtime = table.categories(OVERTIME_LEVEL)?;

        Ok(Self::build(
            marital
                .into_iter()
                .zip(gender)
                .zip(overtime)
                .map(|((m, g), o)| (m, g, o)),
        ))
    }

    /// Percentages of one overtime level, one per row
    #[must_use]
    pub fn column(&self, index: usize) -> Option<Vec<f64>> {
        if index >= self.columns.len() {
            return None;
        }
        Some(self.percentages.iter().map(|row| row[index]).collect())
    }
}

/// One bar of the overtime chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OvertimeBar {
    pub marital_status: String,
    pub gender: String,
    pub percentage: f64,
}

/// The single overtime level shown by the chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OvertimeSlice {
    /// Overtime level the percentages refer to
    pub level: String,
    /// X axis categories, ascending
    pub marital_statuses: Vec<String>,
    /// Bar groups, ascending
    pub genders: Vec<String>,
    pub bars: Vec<OvertimeBar>,
}

impl OvertimeSlice {
    /// Take the second overtime level of `crosstab`, if it has one
    #[must_use]
    pub fn from_crosstab(crosstab: &CrossTab) -> Option<Self> {
        let values = crosstab.column(SELECTED_LEVEL_INDEX)?;
        let level = crosstab.columns[SELECTED_LEVEL_INDEX].clone();

        let bars: Vec<OvertimeBar> = crosstab
            .rows
            .iter()
            .zip(values)
            .map(|((marital_status, gender), percentage)| OvertimeBar {
                marital_status: marital_status.clone(),
                gender: gender.clone(),
                percentage,
            })
            .collect();

        Some(Self {
            level,
            marital_statuses: crosstab.marital_statuses.clone(),
            genders: crosstab.genders.clone(),
            bars,
        })
    }

    /// Percentage for one (marital status, gender) pair, if that pair occurs
    #[must_use]
    pub fn percentage(&self, marital_status: &str, gender: &str) -> Option<f64> {
        self.bars
            .iter()
            .find(|b| b.marital_status == marital_status && b.gender == gender)
            .map(|b| b.percentage)
    }
}

/// What the overtime section can show for a table
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OvertimeView {
    /// The chart can be drawn
    Chart(OvertimeSlice),
    /// Required columns are absent
    MissingColumns { columns: Vec<String> },
    /// Fewer than two overtime levels exist, so there is no second level to show
    InsufficientLevels { levels: Vec<String> },
}

impl OvertimeView {
    pub fn from_table(table: &HrTable) -> Result<Self> {
        if let ColumnPresence::Absent(columns) = CrossTabColumns::probe(&table.schema()) {
            return Ok(Self::MissingColumns { columns });
        }

        let crosstab = CrossTab::from_table(table)?;
        Ok(match OvertimeSlice::from_crosstab(&crosstab) {
            Some(slice) => Self::Chart(slice),
            None => Self::InsufficientLevels {
                levels: crosstab.columns,
            },
        })
    }
}
