//! TaskHub API server library.
//!
//! Exposes the core building blocks (config, state, error handling,
//! GraphQL schema, routes) so integration tests and the binary entrypoints
//! can both access them.

pub mod config;
pub mod error;
pub mod graphql;
pub mod router;
pub mod routes;
pub mod state;
