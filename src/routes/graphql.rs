//! GraphQL route: POST executes, GET serves GraphiQL.

use crate::handlers::graphql::{execute, graphiql, GRAPHQL_PATH};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn graphql_routes(state: AppState) -> Router {
    Router::new()
        .route(GRAPHQL_PATH, get(graphiql).post(execute))
        .with_state(state)
}
