use axum::{
    extract::{Path, State},
    response::Response,
};

use crate::shared::infrastructure::http::{parse_path_id, respond};
use crate::shell::state::AppState;

pub async fn start(State(state): State<AppState>, Path(task_id): Path<String>) -> Response {
    match parse_path_id(&task_id) {
        Ok(task_id) => respond(state.track_time.start_timer(task_id).await),
        Err(rejection) => rejection,
    }
}

pub async fn stop(State(state): State<AppState>, Path(task_id): Path<String>) -> Response {
    match parse_path_id(&task_id) {
        Ok(task_id) => respond(state.track_time.stop_timer(task_id).await),
        Err(rejection) => rejection,
    }
}

/// `null` when the task is idle.
pub async fn active_timer(State(state): State<AppState>, Path(task_id): Path<String>) -> Response {
    match parse_path_id(&task_id) {
        Ok(task_id) => respond(state.track_time.get_active_timer(task_id).await),
        Err(rejection) => rejection,
    }
}

pub async fn time_logs(State(state): State<AppState>, Path(task_id): Path<String>) -> Response {
    match parse_path_id(&task_id) {
        Ok(task_id) => respond(state.track_time.get_time_logs(task_id).await),
        Err(rejection) => rejection,
    }
}
