//! GraphQL over HTTP: JSON POST execution and the GraphiQL page.

use crate::state::AppState;
use async_graphql::http::GraphiQLSource;
use axum::{extract::State, response::Html, Json};

pub const GRAPHQL_PATH: &str = "/graphql";

pub async fn execute(
    State(state): State<AppState>,
    Json(request): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    tracing::debug!(operation = ?request.operation_name, "graphql request");
    let response = state.schema.execute(request).await;
    if response.is_err() {
        tracing::debug!(errors = ?response.errors, "graphql errors");
    }
    Json(response)
}

pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
