//! Domain models for Warbler

pub mod engagement;
pub mod tweet;
pub mod user;

pub use engagement::{Follow, Like, Retweet};
pub use tweet::Tweet;
pub use user::User;
