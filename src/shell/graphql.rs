use async_graphql::{EmptySubscription, MergedObject, Schema, http::GraphiQLSource};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, Router, response::Html, routing::get};

use crate::modules::dashboard::use_cases::get_dashboard::inbound::graphql::DashboardQuery;
use crate::modules::time_tracking::use_cases::report_time::inbound::graphql::TimeTrackingQuery;
use crate::modules::time_tracking::use_cases::track_time::inbound::graphql::TimeTrackingMutation;
use crate::shell::state::AppState;

pub const ENDPOINT: &str = "/gql";

#[derive(MergedObject, Default)]
pub struct QueryRoot(DashboardQuery, TimeTrackingQuery);

pub type MutationRoot = TimeTrackingMutation;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state)
    .finish()
}

/// GraphiQL on `GET`, queries and mutations on `POST`.
pub fn routes(schema: AppSchema) -> Router {
    Router::new()
        .route(ENDPOINT, get(graphiql).post(graphql))
        .layer(Extension(schema))
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(ENDPOINT).finish())
}
