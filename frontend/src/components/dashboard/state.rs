use common::error::ApiResult;
use common::model::capitalize;
use common::model::dashboard::DashboardStats;

use crate::components::charts::ChartDatum;
use crate::components::shared::format::{format_currency, palette_color, status_color};

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DashboardState {
    #[default]
    Loading,
    /// The only fetch failed; nothing was ever loaded.
    Failed,
    Loaded(DashboardStats),
}

pub struct Dashboard {
    pub state: DashboardState,
    pub loaded: bool,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            state: DashboardState::Loading,
            loaded: false,
        }
    }

    pub fn finish_fetch(&mut self, result: ApiResult<DashboardStats>) {
        self.state = match result {
            Ok(stats) => DashboardState::Loaded(stats),
            Err(_) => DashboardState::Failed,
        };
    }
}

/// The visualizations rendered below the KPI tiles, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartPanel {
    StatusPie,
    PlatformBar,
    BudgetBar,
    Trend,
    /// Shown in the trend slot when there are no monthly points.
    TrendPlaceholder,
}

/// Panels to render; none at all when there are no campaigns.
pub fn chart_panels(stats: &DashboardStats) -> Vec<ChartPanel> {
    if !stats.has_data() {
        return Vec::new();
    }
    let trend = if stats.has_trend() {
        ChartPanel::Trend
    } else {
        ChartPanel::TrendPlaceholder
    };
    vec![
        ChartPanel::StatusPie,
        ChartPanel::PlatformBar,
        ChartPanel::BudgetBar,
        trend,
    ]
}

pub fn status_data(stats: &DashboardStats) -> Vec<ChartDatum> {
    stats
        .status_breakdown
        .iter()
        .map(|s| ChartDatum {
            label: capitalize(&s.status),
            value: s.count as f64,
            display: s.count.to_string(),
            color: status_color(&s.status),
        })
        .collect()
}

pub fn platform_data(stats: &DashboardStats) -> Vec<ChartDatum> {
    stats
        .platform_breakdown
        .iter()
        .enumerate()
        .map(|(i, p)| ChartDatum {
            label: capitalize(&p.platform),
            value: p.count as f64,
            display: p.count.to_string(),
            color: palette_color(i),
        })
        .collect()
}

pub fn budget_data(stats: &DashboardStats) -> Vec<ChartDatum> {
    stats
        .budget_by_platform
        .iter()
        .enumerate()
        .map(|(i, p)| ChartDatum {
            label: capitalize(&p.platform),
            value: p.total_budget,
            display: format_currency(p.total_budget),
            color: palette_color(i),
        })
        .collect()
}

pub fn trend_data(stats: &DashboardStats) -> Vec<ChartDatum> {
    stats
        .monthly_trend
        .iter()
        .map(|m| ChartDatum {
            label: m.month.clone(),
            value: m.count as f64,
            display: m.count.to_string(),
            color: "#6366f1",
        })
        .collect()
}
