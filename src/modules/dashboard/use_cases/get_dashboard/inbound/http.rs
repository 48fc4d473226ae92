use axum::{Json, extract::State};

use crate::modules::dashboard::core::snapshot::DashboardSnapshot;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Json<DashboardSnapshot> {
    Json(state.dashboard.get_dashboard().await)
}
