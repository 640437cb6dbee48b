use common::model::capitalize;
use common::model::dashboard::DashboardStats;
use yew::prelude::*;

use crate::components::charts::{BarChart, LineChart, Orientation, PieChart};
use crate::components::shared::format::{format_currency, status_color};
use crate::components::shared::tile_grid::{stat_tile, TileGrid};

use super::state::{
    budget_data, chart_panels, platform_data, status_data, trend_data, ChartPanel, Dashboard,
    DashboardState,
};

pub fn view(component: &Dashboard, _ctx: &Context<Dashboard>) -> Html {
    match &component.state {
        DashboardState::Loading => html! {
            <div class="card loading">{ "Loading dashboard…" }</div>
        },
        DashboardState::Failed => html! {
            <div class="card empty-state">
                <div class="empty-icon">{ "⚠️" }</div>
                <p>{ "Could not load dashboard data. Is the backend running?" }</p>
            </div>
        },
        DashboardState::Loaded(stats) => loaded(stats),
    }
}

fn loaded(stats: &DashboardStats) -> Html {
    let panels = chart_panels(stats);

    html! {
        <div class="dashboard">
            <TileGrid columns={4}>
                { stat_tile(Some("📊"), "Total Campaigns", stats.total_campaigns.to_string(), "tone-indigo") }
                { stat_tile(Some("💰"), "Total Budget", format_currency(stats.total_budget), "tone-green") }
                { stat_tile(Some("📈"), "Avg. Budget", format_currency(stats.avg_budget), "tone-blue") }
                { stat_tile(Some("🚀"), "Active Campaigns", stats.active_count().to_string(), "tone-purple") }
            </TileGrid>

            if panels.is_empty() {
                <div class="card empty-state">
                    <div class="empty-icon">{ "📭" }</div>
                    <p>{ "No campaigns yet. Create one to see analytics here." }</p>
                </div>
            } else {
                <div class="chart-grid">
                    { for panels.iter().map(|panel| chart_card(*panel, stats)) }
                </div>
                { status_table(stats) }
            }
        </div>
    }
}

fn chart_card(panel: ChartPanel, stats: &DashboardStats) -> Html {
    let (title, body) = match panel {
        ChartPanel::StatusPie => (
            "Campaigns by Status",
            html! { <PieChart data={status_data(stats)} /> },
        ),
        ChartPanel::PlatformBar => (
            "Campaigns by Platform",
            html! { <BarChart data={platform_data(stats)} /> },
        ),
        ChartPanel::BudgetBar => (
            "Budget by Platform",
            html! { <BarChart data={budget_data(stats)} orientation={Orientation::Horizontal} /> },
        ),
        ChartPanel::Trend => (
            "Monthly Trend",
            html! { <LineChart data={trend_data(stats)} /> },
        ),
        ChartPanel::TrendPlaceholder => (
            "Monthly Trend",
            html! { <div class="chart-placeholder">{ "Not enough data for trend" }</div> },
        ),
    };

    html! {
        <div class="card chart-card">
            <h3>{ title }</h3>
            { body }
        </div>
    }
}

fn status_table(stats: &DashboardStats) -> Html {
    html! {
        <div class="card">
            <h3>{ "Status Summary" }</h3>
            <table class="summary-table">
                <thead>
                    <tr>
                        <th>{ "Status" }</th>
                        <th>{ "Count" }</th>
                        <th>{ "Share" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for stats.status_breakdown.iter().map(|s| html! {
                        <tr key={s.status.clone()}>
                            <td>
                                <span class="legend-swatch" style={format!("background:{}", status_color(&s.status))} />
                                { capitalize(&s.status) }
                            </td>
                            <td>{ s.count.to_string() }</td>
                            <td>{ stats.share_label(s.count) }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}
