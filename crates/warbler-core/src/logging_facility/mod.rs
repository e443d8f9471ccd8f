//! Logging facility
//!
//! Single initialization point plus canonical op macros. All log events carry
//! `component`/`op`/`event` fields per the schema constants in
//! `warbler-core-types`.

pub mod init;
pub mod macros;

pub use init::{init, Profile};
