use super::*;
use common::error::ApiError;
use serde_json::json;

fn stats(value: serde_json::Value) -> DashboardStats {
    serde_json::from_value(value).unwrap()
}

fn populated() -> DashboardStats {
    stats(json!({
        "total_campaigns": 12,
        "total_budget": "4800.00",
        "avg_budget": 400,
        "status_breakdown": [
            {"status": "active", "count": 3},
            {"status": "draft", "count": 9}
        ],
        "platform_breakdown": [
            {"platform": "instagram", "count": 8},
            {"platform": "tiktok", "count": 4}
        ],
        "budget_by_platform": [
            {"platform": "instagram", "total_budget": "3200.00"},
            {"platform": "tiktok", "total_budget": 1600}
        ],
        "monthly_trend": [
            {"month": "May 2025", "count": 5},
            {"month": "Jun 2025", "count": 7}
        ]
    }))
}

// =============================================================
// Load states
// =============================================================

#[test]
fn failure_is_distinct_from_empty() {
    let mut dashboard = Dashboard::new();
    assert_eq!(dashboard.state, DashboardState::Loading);
    dashboard.finish_fetch(Err(ApiError::Network("down".into())));
    assert_eq!(dashboard.state, DashboardState::Failed);
    dashboard.finish_fetch(Ok(DashboardStats::default()));
    assert_eq!(dashboard.state, DashboardState::Loaded(DashboardStats::default()));
}

// =============================================================
// Panels
// =============================================================

#[test]
fn no_campaigns_renders_no_charts() {
    let empty = stats(json!({"total_campaigns": 0, "total_budget": 0, "avg_budget": 0}));
    assert!(chart_panels(&empty).is_empty());
}

#[test]
fn populated_stats_render_four_charts() {
    assert_eq!(
        chart_panels(&populated()),
        vec![
            ChartPanel::StatusPie,
            ChartPanel::PlatformBar,
            ChartPanel::BudgetBar,
            ChartPanel::Trend
        ]
    );
}

#[test]
fn missing_trend_shows_placeholder() {
    let mut stats = populated();
    stats.monthly_trend.clear();
    assert_eq!(chart_panels(&stats)[3], ChartPanel::TrendPlaceholder);
}

// =============================================================
// Chart data
// =============================================================

#[test]
fn status_slices_use_status_colors() {
    let data = status_data(&populated());
    assert_eq!(data[0].label, "Active");
    assert_eq!(data[0].value, 3.0);
    assert_eq!(data[0].color, status_color("active"));
    assert_eq!(data[1].display, "9");
}

#[test]
fn budget_bars_are_formatted_as_currency() {
    let data = budget_data(&populated());
    assert_eq!(data[0].label, "Instagram");
    assert_eq!(data[0].display, "$3,200");
    assert_eq!(data[1].value, 1600.0);
    assert_ne!(data[0].color, data[1].color);
}

#[test]
fn platform_and_trend_keep_server_order() {
    let stats = populated();
    let platforms: Vec<_> = platform_data(&stats).into_iter().map(|d| d.label).collect();
    assert_eq!(platforms, vec!["Instagram", "Tiktok"]);
    let months: Vec<_> = trend_data(&stats).into_iter().map(|d| d.label).collect();
    assert_eq!(months, vec!["May 2025", "Jun 2025"]);
}

#[test]
fn summary_share_of_three_in_twelve() {
    assert_eq!(populated().share_label(3), "25%");
}
