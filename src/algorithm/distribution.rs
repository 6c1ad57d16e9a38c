//! Categorical value counts and the gender distribution

use itertools::Itertools;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::error::Result;
use crate::models::HrTable;

/// Frequency of one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

/// Count distinct non-missing values
///
/// Results are ordered by descending count; ties keep the order in which the
/// values first appear.
pub fn value_counts<'a, I>(values: I) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut index: FxHashMap<&str, usize> = FxHashMap::default();
    let mut counts: Vec<CategoryCount> = Vec::new();

    for value in values.into_iter().flatten() {
        if let Some(&slot) = index.get(value) {
            counts[slot].count += 1;
        } else {
            index.insert(value, counts.len());
            counts.push(CategoryCount {
                label: value.to_string(),
                count: 1,
            });
        }
    }

    counts
        .into_iter()
        .sorted_by(|a, b| b.count.cmp(&a.count))
        .collect()
}

/// One pie slice
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenderSlice {
    pub label: String,
    pub count: usize,
    /// Share of all non-missing gender values, in percent
    pub percentage: f64,
}

/// Gender composition of the table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenderDistribution {
    pub slices: Vec<GenderSlice>,
}

impl GenderDistribution {
    pub fn from_table(table: &HrTable) -> Result<Self> {
        let genders = table.genders()?;
        Ok(Self::from_counts(value_counts(genders.iter().map(Option::as_deref))))
    }

    #[must_use]
    pub fn from_counts(counts: Vec<CategoryCount>) -> Self {
        let total: usize = counts.iter().map(|c| c.count).sum();
        let slices = counts
            .into_iter()
            .map(|c| GenderSlice {
                percentage: if total == 0 {
                    0.0
                } else {
                    c.count as f64 / total as f64 * 100.0
                },
                label: c.label,
                count: c.count,
            })
            .collect();
        Self { slices }
    }

    /// Total number of counted rows
    #[must_use]
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.count).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}
