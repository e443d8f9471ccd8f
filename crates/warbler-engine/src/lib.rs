//! Warbler Engine - the command/query surface over the store
//!
//! `apply_engine_command` and `apply_engine_query` are the two entry points
//! the API and CLI layers use. Commands validate input, check the entities
//! they touch, and write through the repositories; queries are read-only and
//! cursor-paginated.

pub mod commands;

pub use commands::engine_command::{apply_engine_command, EngineCommand, EngineCommandResult};
pub use commands::engine_query::{apply_engine_query, EngineQuery, EngineQueryResult};
pub use commands::read_tools::{ListOptions, Page, TweetStats, UserStats, DEFAULT_LIST_LIMIT};
