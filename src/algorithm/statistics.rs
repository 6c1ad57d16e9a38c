//! Headline statistics for the dashboard
//!
//! This module computes the scalar KPIs shown at the top of the page and
//! formats them for display.

use serde::Serialize;

use crate::error::Result;
use crate::models::HrTable;
use crate::schema::FEMALE_VALUE;

/// Scalar summary of the HR table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiSummary {
    /// Number of employees (rows)
    pub headcount: usize,
    /// Number of employees flagged as retired
    pub attrition_count: usize,
    /// Share of rows whose gender is "Female", in percent of headcount
    pub female_ratio_pct: f64,
    /// Mean age over rows with a numeric age; NaN when there are none
    pub mean_age: f64,
}

/// Functions for HR table statistics
pub struct HrStatistics;

impl HrStatistics {
    /// Calculate all KPIs for a table
    ///
    /// An empty table yields zero counts and a NaN mean; the dashboard never
    /// asks for that case because it halts on empty input first.
    pub fn calculate(table: &HrTable) -> Result<KpiSummary> {
        let headcount = table.num_rows();
        let attrition_count = Self::attrition_count(table)?;
        let female_ratio_pct = Self::female_ratio_pct(table)?;
        let mean_age = Self::mean_age(table)?;

        Ok(KpiSummary {
            headcount,
            attrition_count,
            female_ratio_pct,
            mean_age,
        })
    }

    /// Sum of the 0/1 attrition flag
    pub fn attrition_count(table: &HrTable) -> Result<usize> {
        Ok(table
            .retired_flags()?
            .into_iter()
            .flatten()
            .filter(|flag| *flag >= 1.0)
            .count())
    }

    /// Percentage of rows with gender "Female"; 0 when no such row exists
    pub fn female_ratio_pct(table: &HrTable) -> Result<f64> {
        let headcount = table.num_rows();
        if headcount == 0 {
            return Ok(0.0);
        }

        let female = table
            .genders()?
            .iter()
            .filter(|gender| gender.as_deref() == Some(FEMALE_VALUE))
            .count();

        Ok(female as f64 / headcount as f64 * 100.0)
    }

    /// Arithmetic mean of the non-missing ages
    pub fn mean_age(table: &HrTable) -> Result<f64> {
        let (sum, count) = table
            .ages()?
            .into_iter()
            .flatten()
            .fold((0.0, 0usize), |(sum, count), age| (sum + age, count + 1));

        if count == 0 {
            Ok(f64::NAN)
        } else {
            Ok(sum / count as f64)
        }
    }
}

impl KpiSummary {
    /// Attrition count as a percentage of headcount
    #[must_use]
    pub fn attrition_rate_pct(&self) -> f64 {
        if self.headcount == 0 {
            0.0
        } else {
            self.attrition_count as f64 / self.headcount as f64 * 100.0
        }
    }

    /// Headcount with thousands separators, e.g. `1,470명`
    #[must_use]
    pub fn headcount_display(&self) -> String {
        format!("{}명", group_thousands(self.headcount))
    }

    /// Female ratio with one decimal, e.g. `40.0%`
    #[must_use]
    pub fn female_ratio_display(&self) -> String {
        format!("{:.1}%", self.female_ratio_pct)
    }

    /// Mean age with one decimal, e.g. `36.9세`
    #[must_use]
    pub fn mean_age_display(&self) -> String {
        format!("{:.1}세", self.mean_age)
    }

    /// Attrition count and rate, e.g. `237명 (16.1%)`
    #[must_use]
    pub fn attrition_display(&self) -> String {
        format!(
            "{}명 ({:.1}%)",
            group_thousands(self.attrition_count),
            self.attrition_rate_pct()
        )
    }
}

/// Format an integer with comma thousands separators
#[must_use]
pub fn group_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
