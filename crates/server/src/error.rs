use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::services::{CollectionError, ItemError, MetadataError};

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Collection(#[from] CollectionError),
    #[error(transparent)]
    Item(#[from] ItemError),
    #[error(transparent)]
    Metadata(#[from] MetadataError),
    #[error(transparent)]
    Plain(#[from] plain::PlainError),
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            AppError::Collection(CollectionError::NotFound) => {
                (StatusCode::NOT_FOUND, self.to_string(), None)
            }
            AppError::Item(ItemError::NotFound | ItemError::CollectionNotFound) => {
                (StatusCode::NOT_FOUND, self.to_string(), None)
            }
            AppError::Collection(CollectionError::Validation(msg))
            | AppError::Item(ItemError::Validation(msg)) => (
                StatusCode::BAD_REQUEST,
                "Validation error".to_string(),
                Some(msg),
            ),
            AppError::Metadata(MetadataError::InvalidUrl(msg)) => (
                StatusCode::BAD_REQUEST,
                "Validation error".to_string(),
                Some(msg),
            ),
            AppError::Metadata(MetadataError::Fetch(err)) => {
                tracing::error!("Metadata fetch failed: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string(), None)
            }
            AppError::Collection(CollectionError::Database(err))
            | AppError::Item(ItemError::Database(err)) => {
                tracing::error!("Database error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                    Some(err.to_string()),
                )
            }
            AppError::Plain(err) => {
                tracing::error!("Response serialization failed: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred".to_string(),
                    None,
                )
            }
        };

        (status, Json(ErrorResponse { error, details })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let response = AppError::Collection(CollectionError::NotFound).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_maps_to_400() {
        let response =
            AppError::Item(ItemError::Validation("Title is required".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn invalid_url_maps_to_400() {
        let response =
            AppError::Metadata(MetadataError::InvalidUrl("relative URL".to_string()))
                .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn database_maps_to_500() {
        let response =
            AppError::Item(ItemError::Database(sqlx::Error::RowNotFound)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn details_are_omitted_when_absent() {
        let body = serde_json::to_value(ErrorResponse {
            error: "Collection not found".to_string(),
            details: None,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Collection not found" }));
    }
}
