use common::error::ApiResult;
use common::model::dashboard::DashboardStats;
use gloo_net::http::Request;

use super::{build, read_json, send, url};

/// `GET /dashboard/`: aggregates over the whole collection.
pub async fn get_dashboard_stats() -> ApiResult<DashboardStats> {
    let request = build(Request::get(&url("/dashboard/")))?;
    read_json(send(request).await?).await
}
