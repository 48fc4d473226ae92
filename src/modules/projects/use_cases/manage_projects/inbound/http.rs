use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::projects::core::project::{NewProject, ProjectFilter, ProjectPatch};
use crate::shared::infrastructure::http::{parse_path_id, respond, respond_created};
use crate::shell::state::AppState;

pub async fn list(State(state): State<AppState>, Query(filter): Query<ProjectFilter>) -> Response {
    respond(state.projects.filter(&filter).await)
}

pub async fn list_by_client(State(state): State<AppState>, Path(client_id): Path<String>) -> Response {
    match parse_path_id(&client_id) {
        Ok(client_id) => respond(state.projects.get_by_client(client_id).await),
        Err(rejection) => rejection,
    }
}

pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match parse_path_id(&id) {
        Ok(id) => respond(state.projects.get_by_id(id).await),
        Err(rejection) => rejection,
    }
}

pub async fn create(State(state): State<AppState>, Json(draft): Json<NewProject>) -> Response {
    respond_created(state.projects.create(draft).await)
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ProjectPatch>,
) -> Response {
    match parse_path_id(&id) {
        Ok(id) => respond(state.projects.update(id, patch).await),
        Err(rejection) => rejection,
    }
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match parse_path_id(&id) {
        Ok(id) => match state.projects.delete(id).await {
            Ok(_) => StatusCode::NO_CONTENT.into_response(),
            Err(error) => error.into_response(),
        },
        Err(rejection) => rejection,
    }
}
