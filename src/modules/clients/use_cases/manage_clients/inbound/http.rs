use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};

use crate::modules::clients::core::client::{ClientPatch, ClientSearch, NewClient};
use crate::shared::infrastructure::http::{parse_path_id, respond, respond_created};
use crate::shell::state::AppState;

pub async fn list(State(state): State<AppState>, Query(params): Query<ClientSearch>) -> Response {
    let term = params.search.unwrap_or_default();
    respond(state.clients.search(&term).await)
}

pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match parse_path_id(&id) {
        Ok(id) => respond(state.clients.get_by_id(id).await),
        Err(rejection) => rejection,
    }
}

pub async fn create(State(state): State<AppState>, Json(draft): Json<NewClient>) -> Response {
    respond_created(state.clients.create(draft).await)
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ClientPatch>,
) -> Response {
    match parse_path_id(&id) {
        Ok(id) => respond(state.clients.update(id, patch).await),
        Err(rejection) => rejection,
    }
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match parse_path_id(&id) {
        Ok(id) => match state.clients.delete(id).await {
            Ok(_) => axum::http::StatusCode::NO_CONTENT.into_response(),
            Err(error) => error.into_response(),
        },
        Err(rejection) => rejection,
    }
}
