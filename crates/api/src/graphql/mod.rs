//! GraphQL schema: object types, query root, and mutation root.
//!
//! Resolvers pull the [`DbPool`] out of the schema data and go straight to
//! the repositories. There is no dataloader; each relationship or aggregate
//! field issues its own query.

use async_graphql::{Context, EmptySubscription, Schema};
use taskhub_db::DbPool;

pub mod mutation;
pub mod query;
pub mod types;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the executable schema with the pool attached as context data.
pub fn build_schema(pool: DbPool) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .extension(async_graphql::extensions::Tracing)
        .data(pool)
        .finish()
}

/// Fetch the pool attached by [`build_schema`].
pub(crate) fn pool<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a DbPool> {
    ctx.data::<DbPool>()
}
