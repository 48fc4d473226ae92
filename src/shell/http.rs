use axum::{
    Router,
    routing::{get, patch, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::modules::clients::use_cases::manage_clients::inbound::http as clients_http;
use crate::modules::dashboard::use_cases::get_dashboard::inbound::http as dashboard_http;
use crate::modules::dashboard::use_cases::view_details::inbound::http as details_http;
use crate::modules::invoices::use_cases::manage_invoices::inbound::http as invoices_http;
use crate::modules::projects::use_cases::manage_projects::inbound::http as projects_http;
use crate::modules::tasks::use_cases::manage_tasks::inbound::http as tasks_http;
use crate::modules::time_tracking::use_cases::report_time::inbound::http as report_http;
use crate::modules::time_tracking::use_cases::track_time::inbound::http as track_http;
use crate::shell::graphql;
use crate::shell::state::AppState;

/// REST routes plus the GraphQL endpoint, traced.
pub fn app(state: AppState) -> Router {
    router(state.clone())
        .merge(graphql::routes(graphql::build_schema(state)))
        .layer(TraceLayer::new_for_http())
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/dashboard", get(dashboard_http::handle))
        .route(
            "/clients",
            get(clients_http::list).post(clients_http::create),
        )
        .route(
            "/clients/{id}",
            get(clients_http::get)
                .patch(clients_http::update)
                .delete(clients_http::delete),
        )
        .route("/clients/{id}/detail", get(details_http::client_detail))
        .route("/clients/{id}/projects", get(projects_http::list_by_client))
        .route(
            "/projects",
            get(projects_http::list).post(projects_http::create),
        )
        .route(
            "/projects/{id}",
            get(projects_http::get)
                .patch(projects_http::update)
                .delete(projects_http::delete),
        )
        .route("/projects/{id}/detail", get(details_http::project_detail))
        .route(
            "/projects/{id}/time-tracking",
            get(report_http::project_summary),
        )
        .route("/tasks", get(tasks_http::list).post(tasks_http::create))
        .route(
            "/tasks/{id}",
            get(tasks_http::get)
                .patch(tasks_http::update)
                .delete(tasks_http::delete),
        )
        .route("/tasks/{id}/status", patch(tasks_http::update_status))
        .route("/tasks/{id}/timer", get(track_http::active_timer))
        .route("/tasks/{id}/timer/start", post(track_http::start))
        .route("/tasks/{id}/timer/stop", post(track_http::stop))
        .route("/tasks/{id}/time-logs", get(track_http::time_logs))
        .route("/time-tracking", get(report_http::summary))
        .route(
            "/invoices",
            get(invoices_http::list).post(invoices_http::create),
        )
        .route("/invoices/outstanding", get(invoices_http::outstanding))
        .route(
            "/invoices/{id}",
            get(invoices_http::get)
                .patch(invoices_http::update)
                .delete(invoices_http::delete),
        )
        .route("/invoices/{id}/send", post(invoices_http::send))
        .route("/invoices/{id}/pay", post(invoices_http::pay))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
