//! Warbler API - GraphQL over HTTP
//!
//! A thin `async-graphql` schema over the engine's command/query surface,
//! served by axum:
//! - `POST /graphql` - the GraphQL endpoint
//! - `GET /graphiql` - interactive playground
//! - `GET /healthz`  - liveness probe

pub mod config;
pub mod error;
pub mod http;
pub mod schema;
pub mod state;

pub use config::ApiConfig;
pub use http::serve;
pub use schema::{build_schema, WarblerSchema};
pub use state::AppState;
