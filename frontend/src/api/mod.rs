//! HTTP client for the campaign backend.
//!
//! Each function maps to one endpoint of the REST contract and returns the
//! decoded body. Transport failures, non-2xx statuses and malformed bodies all
//! surface as `ApiError`; callers decide how to degrade. Nothing here retries,
//! times out, or caches.

pub mod campaigns;
pub mod dashboard;
pub mod news;

use common::error::{ApiError, ApiResult};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::api_base;

/// Absolute URL of an API path such as `/campaigns/`.
fn url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn build(builder: RequestBuilder) -> ApiResult<Request> {
    builder.build().map_err(|e| ApiError::Encode(e.to_string()))
}

fn build_json<B: Serialize>(builder: RequestBuilder, body: &B) -> ApiResult<Request> {
    builder.json(body).map_err(|e| ApiError::Encode(e.to_string()))
}

/// Sends `request`, turning non-2xx responses into `ApiError::Status`.
async fn send(request: Request) -> ApiResult<Response> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_status(status, &body))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
