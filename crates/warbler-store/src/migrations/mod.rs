//! Migrations framework
//!
//! Embedded SQL migrations applied idempotently with checksum recording

pub mod checksums;
pub mod embedded;
pub mod runner;

pub use runner::apply_migrations;
