//! Engine commands and queries

pub mod engagement;
pub mod engine_command;
pub mod engine_query;
pub mod read_tools;
pub mod tweet;
pub mod user;
