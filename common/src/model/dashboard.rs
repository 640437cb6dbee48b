use serde::{Deserialize, Serialize};

use super::wire::number_or_string;

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

/// Aggregates returned by `GET /api/dashboard/`.
///
/// Computed server-side over the whole collection; the client only renders
/// them, apart from the per-status share in the summary table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_campaigns: u64,
    #[serde(default, deserialize_with = "number_or_string")]
    pub total_budget: f64,
    #[serde(default, deserialize_with = "number_or_string")]
    pub avg_budget: f64,
    #[serde(default)]
    pub status_breakdown: Vec<StatusCount>,
    #[serde(default)]
    pub platform_breakdown: Vec<PlatformCount>,
    #[serde(default)]
    pub budget_by_platform: Vec<PlatformBudget>,
    /// Chronological, one entry per month with at least one campaign.
    #[serde(default)]
    pub monthly_trend: Vec<MonthlyCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformCount {
    pub platform: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformBudget {
    pub platform: String,
    #[serde(deserialize_with = "number_or_string")]
    pub total_budget: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyCount {
    pub month: String,
    pub count: u64,
}

impl DashboardStats {
    /// False when there are no campaigns at all; the chart section is hidden.
    pub fn has_data(&self) -> bool {
        self.total_campaigns > 0
    }

    /// Count reported for `active` in the status breakdown, zero if absent.
    pub fn active_count(&self) -> u64 {
        self.status_breakdown
            .iter()
            .find(|s| s.status == "active")
            .map_or(0, |s| s.count)
    }

    pub fn has_trend(&self) -> bool {
        !self.monthly_trend.is_empty()
    }

    /// Share of `count` in `total_campaigns`, as a whole percent label.
    pub fn share_label(&self, count: u64) -> String {
        percent_label(count, self.total_campaigns)
    }
}

/// `part / whole` rounded to a whole percent, e.g. `"25%"`.
///
/// A zero `whole` yields `"0%"` rather than dividing by zero.
pub fn percent_label(part: u64, whole: u64) -> String {
    if whole == 0 {
        return "0%".to_string();
    }
    let pct = (part as f64 / whole as f64) * 100.0;
    format!("{}%", pct.round() as i64)
}
