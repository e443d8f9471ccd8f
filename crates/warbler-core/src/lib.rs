//! Warbler Core - domain models and shared facilities
//!
//! This crate provides the foundational data structures and rules for
//! Warbler, including:
//! - User, Tweet, Follow, Like, and Retweet models
//! - Input validation rules (usernames, profile fields, tweet bodies)
//! - The error facility (domain enum + structured classified errors)
//! - The logging facility (profiles + canonical op macros)
//! - Password hashing helpers (argon2id)

pub mod auth;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod rules;

// Re-export commonly used types
pub use errors::{Result, WarblerError, WbError, WbErrorKind};
pub use model::{Follow, Like, Retweet, Tweet, User};
