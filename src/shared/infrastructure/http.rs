use crate::shared::application::errors::ApplicationError;
use crate::shared::core::primitives::EntityId;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApplicationError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApplicationError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApplicationError::VersionConflict { .. } => StatusCode::CONFLICT,
            ApplicationError::Upstream(_) => StatusCode::SERVICE_UNAVAILABLE,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Path segments come in as text; anything but a positive integer is a 400.
pub fn parse_path_id(raw: &str) -> Result<EntityId, Response> {
    raw.parse::<EntityId>().map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": e.to_string() })),
        )
            .into_response()
    })
}

/// Uniform JSON rendering for handler results.
pub fn respond<T: serde::Serialize>(result: Result<T, ApplicationError>) -> Response {
    match result {
        Ok(value) => Json(value).into_response(),
        Err(error) => error.into_response(),
    }
}

pub fn respond_created<T: serde::Serialize>(result: Result<T, ApplicationError>) -> Response {
    match result {
        Ok(value) => (StatusCode::CREATED, Json(value)).into_response(),
        Err(error) => error.into_response(),
    }
}
