//! The single GraphQL endpoint.
//!
//! ```text
//! GET  /graphql   -> GraphiQL explorer
//! POST /graphql   -> execute query or mutation
//! ```

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// Path the endpoint is mounted at.
pub const GRAPHQL_PATH: &str = "/graphql";

/// POST /graphql
async fn execute(State(state): State<AppState>, request: GraphQLRequest) -> GraphQLResponse {
    state.schema.execute(request.into_inner()).await.into()
}

/// GET /graphql
async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

pub fn router() -> Router<AppState> {
    Router::new().route(GRAPHQL_PATH, get(graphiql).post(execute))
}
