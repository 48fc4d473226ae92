use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::modules::invoices::core::invoice::{InvoiceFilter, InvoicePatch, NewInvoice};
use crate::shared::core::primitives::lenient_instant;
use crate::shared::infrastructure::http::{parse_path_id, respond, respond_created};
use crate::shell::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentBody {
    #[serde(deserialize_with = "lenient_instant")]
    pub payment_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutstandingAmount {
    pub outstanding_amount: Decimal,
}

pub async fn list(State(state): State<AppState>, Query(filter): Query<InvoiceFilter>) -> Response {
    respond(state.invoices.filter(&filter).await)
}

pub async fn outstanding(State(state): State<AppState>) -> Response {
    respond(
        state
            .invoices
            .outstanding_amount()
            .await
            .map(|outstanding_amount| OutstandingAmount { outstanding_amount }),
    )
}

pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match parse_path_id(&id) {
        Ok(id) => respond(state.invoices.get_by_id(id).await),
        Err(rejection) => rejection,
    }
}

pub async fn create(State(state): State<AppState>, Json(draft): Json<NewInvoice>) -> Response {
    respond_created(state.invoices.create(draft).await)
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<InvoicePatch>,
) -> Response {
    match parse_path_id(&id) {
        Ok(id) => respond(state.invoices.update(id, patch).await),
        Err(rejection) => rejection,
    }
}

pub async fn send(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match parse_path_id(&id) {
        Ok(id) => respond(state.invoices.mark_as_sent(id).await),
        Err(rejection) => rejection,
    }
}

pub async fn pay(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<PaymentBody>,
) -> Response {
    match parse_path_id(&id) {
        Ok(id) => respond(state.invoices.mark_as_paid(id, body.payment_date).await),
        Err(rejection) => rejection,
    }
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match parse_path_id(&id) {
        Ok(id) => match state.invoices.delete(id).await {
            Ok(_) => StatusCode::NO_CONTENT.into_response(),
            Err(error) => error.into_response(),
        },
        Err(rejection) => rejection,
    }
}
