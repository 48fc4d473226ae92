use axum::{
    extract::{Path, State},
    response::Response,
};

use crate::shared::infrastructure::http::{parse_path_id, respond};
use crate::shell::state::AppState;

pub async fn client_detail(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match parse_path_id(&id) {
        Ok(id) => respond(state.details.client_detail(id).await),
        Err(rejection) => rejection,
    }
}

pub async fn project_detail(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match parse_path_id(&id) {
        Ok(id) => respond(state.details.project_detail(id).await),
        Err(rejection) => rejection,
    }
}
