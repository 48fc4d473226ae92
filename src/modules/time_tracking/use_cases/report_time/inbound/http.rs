use axum::{
    extract::{Path, State},
    response::Response,
};

use crate::shared::infrastructure::http::{parse_path_id, respond};
use crate::shell::state::AppState;

pub async fn summary(State(state): State<AppState>) -> Response {
    respond(state.report_time.summary().await)
}

pub async fn project_summary(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Response {
    match parse_path_id(&project_id) {
        Ok(project_id) => respond(state.report_time.project_summary(project_id).await),
        Err(rejection) => rejection,
    }
}
