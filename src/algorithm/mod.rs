//! Aggregate computations behind the dashboard
//!
//! KPI statistics, categorical value counts, age bracketing and the
//! overtime cross tabulation. Everything here is a pure function of an
//! `HrTable`.

pub mod age_bracket;
pub mod crosstab;
pub mod distribution;
pub mod statistics;

pub use age_bracket::{AgeBracket, AgeDistribution, with_age_bracket};
pub use crosstab::{CrossTab, OvertimeBar, OvertimeSlice, OvertimeView};
pub use distribution::{CategoryCount, GenderDistribution, GenderSlice, value_counts};
pub use statistics::{HrStatistics, KpiSummary};
