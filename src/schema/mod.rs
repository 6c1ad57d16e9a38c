//! Column layout of the HR dataset
//!
//! The dataset uses Korean headers. Every column the dashboard touches is
//! named here once; the rest of the crate refers to these constants.

pub mod probe;

pub use probe::{ColumnPresence, CrossTabColumns, missing_required_columns};

/// Retirement status, "Yes" or "No"
pub const RETIREMENT_STATUS: &str = "퇴직여부";
/// Derived 0/1 attrition flag
pub const RETIRED_FLAG: &str = "퇴직";
/// Gender category
pub const GENDER: &str = "성별";
/// Age in years
pub const AGE: &str = "나이";
/// Derived age bracket label
pub const AGE_BRACKET: &str = "연령대";
/// Marital status category
pub const MARITAL_STATUS: &str = "결혼여부";
/// Overtime level category
pub const OVERTIME_LEVEL: &str = "야근정도";
/// Employee count, constant across rows
pub const EMPLOYEE_COUNT: &str = "직원수";
/// Is-adult flag, constant across rows
pub const IS_ADULT: &str = "18세이상";

/// Retirement status value that marks an employee as having left
pub const RETIRED_VALUE: &str = "Yes";
/// Gender value counted by the female ratio
pub const FEMALE_VALUE: &str = "Female";

/// Columns without which the table is unusable
pub const REQUIRED_COLUMNS: [&str; 3] = [RETIREMENT_STATUS, GENDER, AGE];

/// Columns removed right after loading
pub const DROPPED_COLUMNS: [&str; 2] = [EMPLOYEE_COUNT, IS_ADULT];
