use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::error::AppResult;
use crate::models::{CreateItem, DataResponse};
use crate::state::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ItemsQuery {
    /// Only return items carrying this tag
    pub tag: Option<String>,
}

/// Get a collection's items, optionally filtered by tag
#[utoipa::path(
    get,
    path = "/api/collections/{id}/items",
    tag = "items",
    params(
        ("id" = i64, Path, description = "Collection ID"),
        ItemsQuery
    ),
    responses(
        (status = 200, description = "Items with their tags, newest first", body = DataResponse)
    )
)]
pub async fn get_collection_items(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<ItemsQuery>,
) -> AppResult<Json<DataResponse>> {
    let items = state.items.get_by_collection(id, query.tag.as_deref()).await?;
    Ok(Json(DataResponse::new(plain::to_plain(&items)?)))
}

/// Add an item to a collection
#[utoipa::path(
    post,
    path = "/api/collections/{id}/items",
    tag = "items",
    params(
        ("id" = i64, Path, description = "Collection ID")
    ),
    request_body = CreateItem,
    responses(
        (status = 201, description = "Item created successfully", body = DataResponse),
        (status = 400, description = "Title is missing or URL is invalid"),
        (status = 404, description = "Collection not found")
    )
)]
pub async fn create_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<CreateItem>,
) -> AppResult<(StatusCode, Json<DataResponse>)> {
    let item = state.items.create(id, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new(plain::to_plain(&item)?)),
    ))
}

/// Get the distinct tags used in a collection
#[utoipa::path(
    get,
    path = "/api/collections/{id}/tags",
    tag = "items",
    params(
        ("id" = i64, Path, description = "Collection ID")
    ),
    responses(
        (status = 200, description = "Tags in alphabetical order", body = DataResponse)
    )
)]
pub async fn get_collection_tags(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<DataResponse>> {
    let tags = state.items.get_collection_tags(id).await?;
    Ok(Json(DataResponse::new(plain::to_plain(&tags)?)))
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/api/items/{id}",
    tag = "items",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 204, description = "Item deleted successfully"),
        (status = 404, description = "Item not found")
    )
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.items.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
