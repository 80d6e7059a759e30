use axum::{Json, extract::State};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::AppResult;
use crate::models::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ScrapeRequest {
    /// Absolute URL of the page to scrape
    pub url: String,
}

/// Fetch a URL and extract its page metadata
#[utoipa::path(
    post,
    path = "/api/metadata",
    tag = "metadata",
    request_body = ScrapeRequest,
    responses(
        (status = 200, description = "Extracted page metadata", body = DataResponse),
        (status = 400, description = "URL is malformed"),
        (status = 500, description = "Page could not be fetched")
    )
)]
pub async fn scrape_metadata(
    State(state): State<AppState>,
    Json(payload): Json<ScrapeRequest>,
) -> AppResult<Json<DataResponse>> {
    let metadata = state.metadata.fetch_metadata(&payload.url).await?;
    Ok(Json(DataResponse::new(plain::to_plain(&metadata)?)))
}
