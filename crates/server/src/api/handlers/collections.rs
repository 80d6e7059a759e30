use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::error::AppResult;
use crate::models::{CreateCollection, DataResponse};
use crate::state::AppState;

/// Get all collections
#[utoipa::path(
    get,
    path = "/api/collections",
    tag = "collections",
    responses(
        (status = 200, description = "List of all collections", body = DataResponse)
    )
)]
pub async fn get_collections(State(state): State<AppState>) -> AppResult<Json<DataResponse>> {
    let collections = state.collections.get_all().await?;
    Ok(Json(DataResponse::new(plain::to_plain(&collections)?)))
}

/// Create a new collection
#[utoipa::path(
    post,
    path = "/api/collections",
    tag = "collections",
    request_body = CreateCollection,
    responses(
        (status = 201, description = "Collection created successfully", body = DataResponse),
        (status = 400, description = "Name is missing or blank")
    )
)]
pub async fn create_collection(
    State(state): State<AppState>,
    Json(payload): Json<CreateCollection>,
) -> AppResult<(StatusCode, Json<DataResponse>)> {
    let collection = state.collections.create(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new(plain::to_plain(&collection)?)),
    ))
}

/// Get a collection by ID with its items and their tags
#[utoipa::path(
    get,
    path = "/api/collections/{id}",
    tag = "collections",
    params(
        ("id" = i64, Path, description = "Collection ID")
    ),
    responses(
        (status = 200, description = "Collection with items", body = DataResponse),
        (status = 404, description = "Collection not found")
    )
)]
pub async fn get_collection_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<DataResponse>> {
    let collection = state.collections.get_with_items(id).await?;
    Ok(Json(DataResponse::new(plain::to_plain(&collection)?)))
}

/// Delete a collection along with its items
#[utoipa::path(
    delete,
    path = "/api/collections/{id}",
    tag = "collections",
    params(
        ("id" = i64, Path, description = "Collection ID")
    ),
    responses(
        (status = 204, description = "Collection deleted successfully"),
        (status = 404, description = "Collection not found")
    )
)]
pub async fn delete_collection(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.collections.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
