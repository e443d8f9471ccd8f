//! Error mapping: structured engine errors to GraphQL errors
//!
//! The stable `ERR_*` code travels in `extensions.code` so clients can
//! branch on it without parsing messages.

use async_graphql::ErrorExtensions;
use warbler_core::WbError;

/// Convert a structured error into a GraphQL error with a `code` extension
pub fn to_graphql_error(err: WbError) -> async_graphql::Error {
    let code = err.code();
    async_graphql::Error::new(err.message().to_string()).extend_with(|_, ext| {
        ext.set("code", code);
        if let Some(op) = err.op() {
            ext.set("op", op);
        }
    })
}
