use crate::shared::core::primitives::Sequence;
use crate::shell::http::app;
use crate::shell::seed::Fixtures;
use crate::shell::state::{AppState, Stores, TaskStore};
use crate::tests::fixtures::FixedClock;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

fn seeded_state(stores: Stores, last_log_id: u64) -> AppState {
    let clock = Arc::new(FixedClock::at(
        Utc.with_ymd_and_hms(2025, 1, 20, 9, 0, 0).unwrap(),
    ));
    AppState::new(
        &stores,
        clock,
        Arc::new(Sequence::starting_after(last_log_id)),
    )
}

#[fixture]
fn before_each() -> Router {
    let fixtures = Fixtures::bundled().unwrap();
    let last_log_id = fixtures.last_log_id();
    app(seeded_state(fixtures.into_stores(), last_log_id))
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[rstest]
#[tokio::test]
async fn it_should_serve_the_seeded_dashboard(before_each: Router) {
    let (status, body) = call(&before_each, Method::GET, "/dashboard", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalClients"], 4);
    assert_eq!(body["activeProjects"], 2);
    assert_eq!(body["completedTasks"], 2);
    assert_eq!(body["monthlyRevenue"], "6650.00");
    assert_eq!(body["recentActivity"].as_array().unwrap().len(), 4);
}

#[rstest]
#[tokio::test]
async fn it_should_fall_back_to_an_empty_dashboard_when_a_store_is_offline() {
    let fixtures = Fixtures::bundled().unwrap();
    let mut tasks = TaskStore::with_records(fixtures.tasks.clone());
    tasks.toggle_offline();
    let stores = Stores {
        tasks: Arc::new(tasks),
        ..fixtures.into_stores()
    };
    let app = app(seeded_state(stores, 5));

    let (status, body) = call(&app, Method::GET, "/dashboard", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalClients"], 0);
    assert_eq!(body["recentActivity"], json!([]));

    let (status, body) = call(&app, Method::GET, "/tasks", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "upstream failure: task store offline");
}

#[rstest]
#[case("/clients/abc")]
#[case("/projects/0")]
#[case("/tasks/-1/time-logs")]
#[tokio::test]
async fn it_should_reject_malformed_ids(before_each: Router, #[case] uri: &str) {
    let (status, body) = call(&before_each, Method::GET, uri, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[rstest]
#[tokio::test]
async fn it_should_return_not_found_for_unknown_records(before_each: Router) {
    let (status, body) = call(&before_each, Method::GET, "/invoices/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "invoice 99 not found");
}

#[rstest]
#[tokio::test]
async fn it_should_validate_and_create_clients(before_each: Router) {
    let invalid = json!({ "name": "Fashion Brand", "email": "not-an-email", "company": "FB" });
    let (status, _) = call(&before_each, Method::POST, "/clients", Some(invalid)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let valid = json!({ "name": "Fashion Brand", "email": "hi@fashion.example", "company": "FB" });
    let (status, body) = call(&before_each, Method::POST, "/clients", Some(valid)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["Id"], 5);
    assert_eq!(body["status"], "active");
    assert_eq!(body["createdAt"], "2025-01-20T09:00:00Z");

    let (_, found) = call(&before_each, Method::GET, "/clients?search=fashion", None).await;
    assert_eq!(found.as_array().unwrap().len(), 1);
}

#[rstest]
#[tokio::test]
async fn it_should_list_projects_by_client_and_filter_by_status(before_each: Router) {
    let (_, by_client) = call(&before_each, Method::GET, "/clients/1/projects", None).await;
    let ids: Vec<&Value> = by_client.as_array().unwrap().iter().map(|p| &p["Id"]).collect();
    assert_eq!(ids, vec![&json!(1), &json!(5)]);

    let (_, on_hold) = call(&before_each, Method::GET, "/projects?status=on-hold", None).await;
    assert_eq!(on_hold.as_array().unwrap().len(), 1);
    assert_eq!(on_hold[0]["name"], "Inventory Dashboard");
}

#[rstest]
#[tokio::test]
async fn it_should_run_a_timer_through_the_api(before_each: Router) {
    let (status, timer) = call(&before_each, Method::POST, "/tasks/2/timer/start", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(timer["Id"], 2);

    let (status, body) = call(&before_each, Method::POST, "/tasks/2/timer/start", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("already running"));

    let (_, active) = call(&before_each, Method::GET, "/tasks/2/timer", None).await;
    assert_eq!(active["startTime"], timer["startTime"]);

    let (status, log) = call(&before_each, Method::POST, "/tasks/2/timer/stop", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(log["Id"], 6);

    let (_, logs) = call(&before_each, Method::GET, "/tasks/2/time-logs", None).await;
    assert_eq!(logs.as_array().unwrap().len(), 1);

    let (_, summary) = call(&before_each, Method::GET, "/projects/1/time-tracking", None).await;
    assert_eq!(summary["totalEntries"], 4);
    assert_eq!(summary["activeTimers"], 0);
}

#[rstest]
#[tokio::test]
async fn it_should_move_a_task_across_the_board(before_each: Router) {
    let (status, task) = call(
        &before_each,
        Method::PATCH,
        "/tasks/2/status",
        Some(json!({ "status": "review" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(task["status"], "review");

    let (_, review) = call(&before_each, Method::GET, "/tasks?status=review", None).await;
    assert_eq!(review.as_array().unwrap().len(), 2);
}

#[rstest]
#[tokio::test]
async fn it_should_walk_an_invoice_through_its_lifecycle(before_each: Router) {
    let draft = json!({
        "projectId": "2",
        "dueDate": "2025-02-28",
        "lineItems": [
            { "description": "Brand guidelines", "amount": "1200.00" },
            { "description": "" }
        ]
    });
    let (status, invoice) = call(&before_each, Method::POST, "/invoices", Some(draft)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(invoice["Id"], 6);
    assert_eq!(invoice["clientId"], 2);
    assert_eq!(invoice["amount"], "1200.00");
    assert_eq!(invoice["status"], "draft");
    assert_eq!(invoice["lineItems"].as_array().unwrap().len(), 1);

    let (status, sent) = call(&before_each, Method::POST, "/invoices/6/send", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(sent["status"], "sent");

    let (status, _) = call(&before_each, Method::POST, "/invoices/6/pay", Some(json!({}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, paid) = call(
        &before_each,
        Method::POST,
        "/invoices/6/pay",
        Some(json!({ "paymentDate": "2025-01-20" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(paid["status"], "paid");
    assert_eq!(paid["paymentDate"], "2025-01-20T00:00:00Z");
}

#[rstest]
#[tokio::test]
async fn it_should_clear_the_payment_date_when_a_paid_invoice_is_reopened(before_each: Router) {
    let (status, reopened) = call(
        &before_each,
        Method::PATCH,
        "/invoices/1",
        Some(json!({ "status": "draft" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reopened["status"], "draft");
    assert_eq!(reopened["paymentDate"], Value::Null);
}

#[rstest]
#[tokio::test]
async fn it_should_report_the_outstanding_amount(before_each: Router) {
    let (status, body) = call(&before_each, Method::GET, "/invoices/outstanding", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outstandingAmount"], "10500.00");
}

#[rstest]
#[tokio::test]
async fn it_should_build_the_project_detail(before_each: Router) {
    let (status, detail) = call(&before_each, Method::GET, "/projects/1/detail", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["clientName"], "Sarah Chen");
    assert_eq!(detail["tasks"].as_array().unwrap().len(), 3);
    assert_eq!(detail["progress"], 33);
}

#[rstest]
#[tokio::test]
async fn it_should_answer_graphql_queries(before_each: Router) {
    let query = json!({ "query": "{ dashboard { totalClients } timeTracking { totalEntries } }" });
    let (status, body) = call(&before_each, Method::POST, "/gql", Some(query)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["dashboard"]["totalClients"], 4);
    assert_eq!(body["data"]["timeTracking"]["totalEntries"], 5);
}
