//! The dashboard pipeline
//!
//! Load, check for emptiness, compute, and lay out: title, KPI row, a
//! two-column chart row, then the overtime section. An empty table stops the
//! render after a single error notice.

pub mod font;
pub mod html;
pub mod snapshot;
pub mod surface;

pub use font::FontResource;
pub use html::HtmlSurface;
pub use snapshot::DashboardSnapshot;
pub use surface::Surface;

use std::sync::Arc;

use log::{info, warn};

use crate::algorithm::{
    AgeDistribution, GenderDistribution, HrStatistics, OvertimeView, with_age_bracket,
};
use crate::cache::TableCache;
use crate::chart::{ChartTheme, render_age_bars, render_gender_pie, render_overtime_bars};
use crate::config::DashboardConfig;
use crate::error::Result;
use crate::models::HrTable;

/// Page heading
pub const DASHBOARD_TITLE: &str = "다양성 HR 대시보드";
pub const GENDER_SECTION: &str = "⚧ 성별 구성 비율";
pub const AGE_SECTION: &str = "👥 연령대 분포";
pub const OVERTIME_SECTION: &str = "💍 결혼 여부별 야근 정도 (성별 구분)";

/// Shown when the overtime columns are absent
pub const MISSING_COLUMNS_NOTICE: &str = "⚠️ 데이터에 [결혼여부], [야근정도], [성별] 컬럼이 필요합니다.";

/// Result of one render
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutcome {
    /// Everything was rendered
    Rendered(Box<DashboardSnapshot>),
    /// The table was empty; only the error notice was rendered
    Halted,
}

/// Dashboard renderer holding the configuration and the table cache
#[derive(Debug)]
pub struct Dashboard {
    config: DashboardConfig,
    theme: ChartTheme,
    cache: TableCache,
}

impl Dashboard {
    #[must_use]
    pub fn new(config: DashboardConfig) -> Self {
        let cache = TableCache::new(config.cache_capacity);
        Self {
            config,
            theme: ChartTheme::default(),
            cache,
        }
    }

    #[must_use]
    pub fn with_theme(mut self, theme: ChartTheme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    #[must_use]
    pub fn cache(&self) -> &TableCache {
        &self.cache
    }

    /// Load the configured dataset through the cache
    pub fn load(&self) -> Arc<HrTable> {
        self.cache.load(&self.config.data_path)
    }

    /// Render the whole page onto `surface`
    pub fn render<S: Surface>(&self, surface: &mut S) -> Result<RenderOutcome> {
        let table = self.load();
        if table.is_empty() {
            warn!("No HR data available; halting render");
            surface.error(&format!(
                "데이터가 없습니다. '{}' 파일을 확인하세요.",
                self.config.data_path.display()
            ));
            return Ok(RenderOutcome::Halted);
        }

        surface.title(DASHBOARD_TITLE);

        let kpis = HrStatistics::calculate(&table)?;
        info!(
            "Headcount {}, attrition {}, female ratio {:.1}%, mean age {:.1}",
            kpis.headcount, kpis.attrition_count, kpis.female_ratio_pct, kpis.mean_age
        );
        surface.columns(3);
        surface.column();
        surface.metric("전체 직원 수", &kpis.headcount_display());
        surface.column();
        surface.metric("여성 비율", &kpis.female_ratio_display());
        surface.column();
        surface.metric("평균 연령", &kpis.mean_age_display());
        surface.end_columns();

        surface.columns(2);
        surface.column();
        surface.subheader(GENDER_SECTION);
        let gender = GenderDistribution::from_table(&table)?;
        surface.chart(&render_gender_pie(&gender, &self.theme));

        surface.column();
        surface.subheader(AGE_SECTION);
        let bracketed = with_age_bracket(&table)?;
        let age = AgeDistribution::from_table(&bracketed)?;
        surface.chart(&render_age_bars(&age, &self.theme));
        surface.end_columns();

        surface.subheader(OVERTIME_SECTION);
        let overtime = OvertimeView::from_table(&table)?;
        match &overtime {
            OvertimeView::Chart(slice) => {
                surface.chart(&render_overtime_bars(slice, &self.theme));
            }
            OvertimeView::MissingColumns { columns } => {
                warn!("Overtime chart skipped, missing columns: {}", columns.join(", "));
                surface.info(MISSING_COLUMNS_NOTICE);
            }
            OvertimeView::InsufficientLevels { levels } => {
                warn!(
                    "Overtime chart skipped, {} overtime level(s) found, need at least 2",
                    levels.len()
                );
                surface.info(&insufficient_levels_notice(levels));
            }
        }

        let attrition_rate_pct = kpis.attrition_rate_pct();
        Ok(RenderOutcome::Rendered(Box::new(DashboardSnapshot {
            rendered_at: chrono::Utc::now(),
            data_path: self.config.data_path.display().to_string(),
            kpis,
            attrition_rate_pct,
            gender,
            age,
            overtime,
        })))
    }
}

fn insufficient_levels_notice(levels: &[String]) -> String {
    if levels.is_empty() {
        "⚠️ [야근정도] 컬럼에 값이 없어 차트를 그릴 수 없습니다.".to_string()
    } else {
        format!(
            "⚠️ [야근정도] 컬럼에 두 가지 이상의 값이 필요합니다. (현재: {})",
            levels.join(", ")
        )
    }
}
