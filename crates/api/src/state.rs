use std::sync::Arc;

use crate::config::ServerConfig;
use crate::graphql::AppSchema;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: taskhub_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Executable GraphQL schema. Holds its own handle to the pool.
    pub schema: AppSchema,
}

impl AppState {
    /// Assemble state around a pool, building the GraphQL schema from it.
    pub fn new(pool: taskhub_db::DbPool, config: ServerConfig) -> Self {
        let schema = crate::graphql::build_schema(pool.clone());
        Self {
            pool,
            config: Arc::new(config),
            schema,
        }
    }
}
