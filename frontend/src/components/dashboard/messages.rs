use common::error::ApiResult;
use common::model::dashboard::DashboardStats;

pub enum Msg {
    Fetch,
    Fetched(ApiResult<DashboardStats>),
}
