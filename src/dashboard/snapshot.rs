//! Machine-readable export of a rendered dashboard

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::algorithm::{AgeDistribution, GenderDistribution, KpiSummary, OvertimeView};
use crate::error::Result;
use crate::error::util::safe_write;

/// Everything the page shows, as computed values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub rendered_at: DateTime<Utc>,
    pub data_path: String,
    pub kpis: KpiSummary,
    pub attrition_rate_pct: f64,
    pub gender: GenderDistribution,
    pub age: AgeDistribution,
    pub overtime: OvertimeView,
}

impl DashboardSnapshot {
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the snapshot as pretty-printed JSON
    pub fn write(&self, path: &Path) -> Result<()> {
        let json = self.to_json_pretty()?;
        safe_write(path, json.as_bytes(), "writing dashboard snapshot")?;
        log::info!("Wrote dashboard snapshot to {}", path.display());
        Ok(())
    }
}
