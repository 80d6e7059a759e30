use axum::{Json, Router, routing::get};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::openapi::ApiDoc;
use crate::state::AppState;

use super::handlers;

pub fn create_router(state: AppState) -> (Router, utoipa::openapi::OpenApi) {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        // Collection endpoints
        .routes(routes!(
            handlers::get_collections,
            handlers::create_collection
        ))
        .routes(routes!(
            handlers::get_collection_by_id,
            handlers::delete_collection
        ))
        // Item endpoints
        .routes(routes!(
            handlers::get_collection_items,
            handlers::create_item
        ))
        .routes(routes!(handlers::get_collection_tags))
        .routes(routes!(handlers::delete_item))
        // Metadata endpoint
        .routes(routes!(handlers::scrape_metadata))
        .with_state(state)
        .split_for_parts();

    // Clone the API spec for the JSON endpoint
    let api_json = api.clone();

    let router = router.route(
        "/api/openapi.json",
        get(move || async move { Json(api_json) }),
    );

    (router, api)
}
