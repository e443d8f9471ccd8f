//! GraphQL schema assembly

pub mod mutation;
pub mod query;
pub mod types;

use async_graphql::{Context, EmptySubscription, Schema};
use rusqlite::Connection;
use tokio::sync::MutexGuard;

use crate::state::AppState;
pub use mutation::MutationRoot;
pub use query::QueryRoot;

/// The executable schema type
pub type WarblerSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with shared state attached
pub fn build_schema(state: AppState) -> WarblerSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}

/// Lock the shared connection from resolver context
pub(crate) async fn lock_db<'a>(
    ctx: &Context<'a>,
) -> async_graphql::Result<MutexGuard<'a, Connection>> {
    let state = ctx.data::<AppState>()?;
    Ok(state.db.lock().await)
}
