use common::error::ApiResult;
use common::model::news::NewsResponse;
use gloo_net::http::Request;

use super::{build, read_json, send, url};

/// `GET /news/?q=<query>`: headlines for content ideas.
pub async fn get_news(query: &str) -> ApiResult<NewsResponse> {
    let request = build(Request::get(&url("/news/")).query([("q", query)]))?;
    read_json(send(request).await?).await
}
