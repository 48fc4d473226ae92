use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::tasks::core::task::{NewTask, TaskFilter, TaskPatch, TaskStatus};
use crate::shared::infrastructure::http::{parse_path_id, respond, respond_created};
use crate::shell::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StatusBody {
    pub status: TaskStatus,
}

pub async fn list(State(state): State<AppState>, Query(filter): Query<TaskFilter>) -> Response {
    respond(state.tasks.filter(&filter).await)
}

pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match parse_path_id(&id) {
        Ok(id) => respond(state.tasks.get_by_id(id).await),
        Err(rejection) => rejection,
    }
}

pub async fn create(State(state): State<AppState>, Json(draft): Json<NewTask>) -> Response {
    respond_created(state.tasks.create(draft).await)
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<TaskPatch>,
) -> Response {
    match parse_path_id(&id) {
        Ok(id) => respond(state.tasks.update(id, patch).await),
        Err(rejection) => rejection,
    }
}

pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<StatusBody>,
) -> Response {
    match parse_path_id(&id) {
        Ok(id) => respond(state.tasks.update_status(id, body.status).await),
        Err(rejection) => rejection,
    }
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match parse_path_id(&id) {
        Ok(id) => match state.tasks.delete(id).await {
            Ok(_) => StatusCode::NO_CONTENT.into_response(),
            Err(error) => error.into_response(),
        },
        Err(rejection) => rejection,
    }
}
